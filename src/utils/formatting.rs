//! Formatting utilities used for CLI and export outputs.

use crate::models::location::Location;
use ansi_term::{Colour, Style};

pub fn bold(s: &str) -> String {
    Style::new().bold().paint(s).to_string()
}

/// Truncate to `max` visible characters, marking the cut with `…`.
pub fn ellipsize(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Display label and colour for a site.
pub fn describe_location(loc: Location) -> (String, Colour) {
    let colour = match loc {
        Location::SanDiego => Colour::Cyan,
        Location::StGeorge => Colour::Red,
        Location::SaltLakeCity => Colour::Blue,
        Location::ParkCity => Colour::Green,
        Location::Dallas => Colour::Yellow,
        Location::Memphis => Colour::Purple,
        Location::Orlando => Colour::RGB(255, 153, 51),
    };
    (loc.label(), colour)
}
