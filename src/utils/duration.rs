//! Duration parsing (`45m`, `1h30m`, `01:30`, `90`) and display.

use crate::errors::{AppError, AppResult};
use chrono::Duration;
use regex::Regex;
use std::sync::LazyLock;

static HM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(\d+)\s*h)?\s*(?:(\d+)\s*m(?:in)?)?$").expect("valid duration regex")
});

pub fn parse_duration(input: &str) -> AppResult<Duration> {
    let s = input.trim().to_ascii_lowercase();
    let invalid = || AppError::InvalidDuration(input.to_string());

    if s.is_empty() {
        return Err(invalid());
    }

    // bare number → minutes
    if s.chars().all(|c| c.is_ascii_digit()) {
        let mins: i64 = s.parse().map_err(|_| invalid())?;
        return Duration::try_minutes(mins).ok_or_else(invalid);
    }

    // HH:MM
    if let Some((h, m)) = s.split_once(':') {
        // unsigned: "-1:30" and "1:-5" are not durations
        let h: u32 = h.parse().map_err(|_| invalid())?;
        let m: u32 = m.parse().map_err(|_| invalid())?;
        if m >= 60 {
            return Err(invalid());
        }
        return i64::from(h)
            .checked_mul(60)
            .and_then(|hm| hm.checked_add(i64::from(m)))
            .and_then(Duration::try_minutes)
            .ok_or_else(invalid);
    }

    let caps = HM_RE.captures(&s).ok_or_else(invalid)?;
    let hours = caps.get(1).map(|m| m.as_str());
    let mins = caps.get(2).map(|m| m.as_str());

    if hours.is_none() && mins.is_none() {
        return Err(invalid());
    }

    let h: i64 = hours.unwrap_or("0").parse().map_err(|_| invalid())?;
    let m: i64 = mins.unwrap_or("0").parse().map_err(|_| invalid())?;

    h.checked_mul(60)
        .and_then(|hm| hm.checked_add(m))
        .and_then(Duration::try_minutes)
        .ok_or_else(invalid)
}

/// `45m`, `1h 05m`, `30s` for sub-minute values.
pub fn format_duration(d: &Duration) -> String {
    let total_secs = d.num_seconds();
    if total_secs > 0 && total_secs < 60 {
        return format!("{total_secs}s");
    }

    let mins = d.num_minutes();
    let (h, m) = (mins / 60, mins % 60);

    if h > 0 {
        format!("{h}h {m:02}m")
    } else {
        format!("{m}m")
    }
}
