//! Error types for loading, exporting and updating timelines.

use crate::{import::EventIssue, timeline::XmlError};
use std::{io, path::PathBuf};
use thiserror::Error;

/// Failure of a whole stage. Problems with individual events are reported as
/// data instead (see [`crate::ScanError`] and [`EventIssue`]).
///
/// Messages name the stage and path only; the cause is the `source()`, so
/// `{:#}` on an `anyhow` chain prints each part once.
#[derive(Debug, Error)]
pub enum TimelineError {
    /// The file could not be opened or read.
    #[error("reading {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output file could not be written.
    #[error("writing {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but is not a timeline document.
    #[error("parsing timeline {}", path.display())]
    Xml {
        path: PathBuf,
        #[source]
        source: XmlError,
    },

    #[error("serializing timeline")]
    XmlWrite(#[source] quick_xml::Error),

    /// JSON input was malformed, or JSON output could not be produced.
    #[error("processing json {}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Strict mode refused an event with validation issues.
    #[error("event '{text}' has {} validation issue(s)", issues.len())]
    InvalidEvent {
        text: String,
        issues: Vec<EventIssue>,
    },

    #[error("refusing to overwrite the input timeline {}", path.display())]
    WouldOverwriteInput { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, TimelineError>;
