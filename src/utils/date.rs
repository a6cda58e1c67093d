//! Date/time helpers for user input and display.

use crate::core::codec;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// The caller's current local day.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local wall-clock time, whole seconds.
pub fn now() -> NaiveDateTime {
    codec::truncate_to_second(&Local::now().naive_local())
}

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(t, "%H:%M"))
        .ok()
}

/// Accepts `YYYY-MM-DD HH:MM[:SS]`, the same with a `T` separator, `now`,
/// or `today|tomorrow|yesterday HH:MM[:SS]`.
pub fn parse_datetime(input: &str) -> Option<NaiveDateTime> {
    let s = input.trim();

    if s.eq_ignore_ascii_case("now") {
        return Some(now());
    }

    if let Some((word, time)) = s.split_once(' ') {
        let day = match word.to_ascii_lowercase().as_str() {
            "today" => Some(today()),
            "tomorrow" => today().succ_opt(),
            "yesterday" => today().pred_opt(),
            _ => None,
        };
        if let Some(d) = day {
            return parse_time(time.trim()).map(|t| d.and_time(t));
        }
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
}

pub fn format_datetime(dt: &NaiveDateTime, fmt: &str) -> String {
    dt.format(fmt).to_string()
}
