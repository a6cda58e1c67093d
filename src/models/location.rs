use serde::Serialize;

/// Closed set of sites an appointment can take place at.
///
/// The numeric site code (the site's ZIP code) is what gets stored and what
/// conflict detection partitions on; the name is only for humans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Location {
    SanDiego,
    StGeorge,
    SaltLakeCity,
    ParkCity,
    Dallas,
    Memphis,
    Orlando,
}

impl Location {
    pub const ALL: [Location; 7] = [
        Location::SanDiego,
        Location::StGeorge,
        Location::SaltLakeCity,
        Location::ParkCity,
        Location::Dallas,
        Location::Memphis,
        Location::Orlando,
    ];

    pub const fn site_code(self) -> i64 {
        match self {
            Location::SanDiego => 92101,
            Location::StGeorge => 84770,
            Location::SaltLakeCity => 84101,
            Location::ParkCity => 84060,
            Location::Dallas => 75201,
            Location::Memphis => 38103,
            Location::Orlando => 32801,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Location::SanDiego => "SAN_DIEGO",
            Location::StGeorge => "ST_GEORGE",
            Location::SaltLakeCity => "SALT_LAKE_CITY",
            Location::ParkCity => "PARK_CITY",
            Location::Dallas => "DALLAS",
            Location::Memphis => "MEMPHIS",
            Location::Orlando => "ORLANDO",
        }
    }

    /// Human label, e.g. "Salt Lake City".
    pub fn label(self) -> String {
        self.name()
            .split('_')
            .map(|w| {
                let mut chars = w.chars();
                match chars.next() {
                    Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Convert DB code → enum
    pub fn from_site_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|loc| loc.site_code() == code)
    }

    /// Resolve user input: a name in any case with `_`, `-` or spaces as
    /// separators ("park-city", "Park City"), or the numeric site code.
    pub fn from_name(input: &str) -> Option<Self> {
        let trimmed = input.trim();

        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_site_code(code);
        }

        let normalized: String = trimmed
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        Self::ALL.into_iter().find(|loc| loc.name() == normalized)
    }
}
