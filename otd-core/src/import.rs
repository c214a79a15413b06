//! Adding a single event, read from JSON, to a timeline.

use crate::dates::parse_timestamp;
use crate::error::{Result, TimelineError};
use crate::timeline::{Event, Timeline, is_flag_literal};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::{debug, warn};

/// Something questionable about an imported event. Issues never stop an
/// import unless strict mode is on.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EventIssue {
    #[error("event has no text")]
    EmptyText,
    #[error("{field} '{value}' is not a YYYY-MM-DD HH:MM:SS timestamp")]
    InvalidTimestamp { field: &'static str, value: String },
    #[error("end is before start")]
    EndBeforeStart,
    #[error("category '{0}' is not defined in the timeline")]
    UnknownCategory(String),
    #[error("{field} '{value}' is not True or False")]
    InvalidFlag { field: &'static str, value: String },
}

#[derive(Clone, Debug, Default)]
pub struct UpdateOptions {
    /// Reject events with issues instead of only warning about them.
    pub strict: bool,
}

#[derive(Debug)]
pub struct UpdateResult {
    pub event: Event,
    pub issues: Vec<EventIssue>,
    /// Where the updated timeline was written.
    pub path: PathBuf,
    /// Events in the written timeline.
    pub event_count: usize,
}

/// Reads one event object. Missing fields are left empty.
pub fn read_event(path: &Path) -> Result<Event> {
    let content = fs::read_to_string(path).map_err(|source| TimelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| TimelineError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Returns a copy of `timeline` with `event` appended after the existing ones.
pub fn append_event(timeline: &Timeline, event: Event) -> Timeline {
    let mut updated = timeline.clone();
    updated.events.events.push(event);
    updated
}

pub fn validate_event(event: &Event, timeline: &Timeline) -> Vec<EventIssue> {
    let mut issues = Vec::new();

    if event.text.trim().is_empty() {
        issues.push(EventIssue::EmptyText);
    }

    let start = parse_timestamp(&event.start);
    if start.is_err() {
        issues.push(EventIssue::InvalidTimestamp {
            field: "start",
            value: event.start.clone(),
        });
    }
    let end = parse_timestamp(&event.end);
    if end.is_err() {
        issues.push(EventIssue::InvalidTimestamp {
            field: "end",
            value: event.end.clone(),
        });
    }
    if let (Ok(start), Ok(end)) = (start, end) {
        if end < start {
            issues.push(EventIssue::EndBeforeStart);
        }
    }

    if !event.category.is_empty() && !timeline.has_category(&event.category) {
        issues.push(EventIssue::UnknownCategory(event.category.clone()));
    }

    let flags = [
        ("fuzzy", &event.fuzzy),
        ("locked", &event.locked),
        ("ends_today", &event.ends_today),
        ("milestone", &event.milestone),
    ];
    for (field, value) in flags {
        if !is_flag_literal(value) {
            issues.push(EventIssue::InvalidFlag {
                field,
                value: value.clone(),
            });
        }
    }

    issues
}

/// Reads the event at `event_path`, appends it to a copy of `timeline` and
/// writes the result to `output_path`. `input_path`, the file `timeline` was
/// loaded from, is never written.
pub fn update_timeline(
    timeline: &Timeline,
    input_path: &Path,
    event_path: &Path,
    output_path: &Path,
    options: &UpdateOptions,
) -> Result<UpdateResult> {
    if same_file(input_path, output_path) {
        return Err(TimelineError::WouldOverwriteInput {
            path: output_path.to_path_buf(),
        });
    }

    let event = read_event(event_path)?;
    let issues = validate_event(&event, timeline);
    for issue in &issues {
        warn!(event = %event.text, "{issue}");
    }
    if options.strict && !issues.is_empty() {
        return Err(TimelineError::InvalidEvent {
            text: event.text,
            issues,
        });
    }

    let updated = append_event(timeline, event.clone());
    updated.write(output_path)?;
    debug!(
        path = %output_path.display(),
        events = updated.events().len(),
        "appended event"
    );

    Ok(UpdateResult {
        event,
        issues,
        path: output_path.to_path_buf(),
        event_count: updated.events().len(),
    })
}

fn same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
