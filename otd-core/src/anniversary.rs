//! Finds events whose start date falls on a given month and day.

use crate::dates::{is_same_day_of_year, parse_timestamp, years_elapsed};
use crate::timeline::Event;
use chrono::NaiveDateTime;

/// Events whose label ends with this are birthdays and never reported.
pub const BIRTHDAY_SUFFIX: &str = "'s birthday";

/// What to look for. `now` is only used to compute elapsed years.
#[derive(Clone, Copy, Debug)]
pub struct ScanOptions {
    pub month: u32,
    pub day: u32,
    pub now: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Anniversary {
    pub text: String,
    pub start: NaiveDateTime,
    pub years_ago: i64,
}

impl Anniversary {
    /// `On this day in history: <text> (<date>, <N> years ago)`
    pub fn line(&self, date_format: &str) -> String {
        format!(
            "On this day in history: {} ({}, {} years ago)",
            self.text,
            self.start.format(date_format),
            self.years_ago
        )
    }
}

/// An event that could not be considered.
#[derive(Clone, Debug, PartialEq)]
pub enum ScanError {
    InvalidTimestamp {
        text: String,
        value: String,
        error: String,
    },
}

/// Matches in scan order plus the events that were skipped.
#[derive(Debug, Default)]
pub struct ScanResult {
    pub anniversaries: Vec<Anniversary>,
    pub errors: Vec<ScanError>,
}

/// Stable ascending sort on the raw start string.
pub fn sort_events(events: &[Event]) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| a.start.cmp(&b.start));
    sorted
}

pub fn is_birthday(event: &Event) -> bool {
    event.text.ends_with(BIRTHDAY_SUFFIX)
}

/// Scans `events` in start order and collects the anniversaries of
/// `options.month`/`options.day`. Events with an unparseable start are
/// skipped and reported in [`ScanResult::errors`].
pub fn find_anniversaries(events: &[Event], options: &ScanOptions) -> ScanResult {
    let mut anniversaries = Vec::new();
    let mut errors = Vec::new();

    for event in sort_events(events) {
        let start = match parse_timestamp(&event.start) {
            Ok(start) => start,
            Err(error) => {
                errors.push(ScanError::InvalidTimestamp {
                    text: event.text.clone(),
                    value: event.start.clone(),
                    error: error.to_string(),
                });
                continue;
            }
        };

        if is_same_day_of_year(start, options.month, options.day) && !is_birthday(event) {
            anniversaries.push(Anniversary {
                text: event.text.clone(),
                start,
                years_ago: years_elapsed(start, options.now),
            });
        }
    }

    ScanResult {
        anniversaries,
        errors,
    }
}
