use crate::render::ColorMode;
use chrono::{Datelike, NaiveDateTime};
use clap::{Parser, value_parser};
use otd_core::{Config, ScanOptions};
use std::path::PathBuf;

/// otd: "On this day in history" for timeline files
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Month to look for anniversaries in (1-12). Defaults to the current month.
    #[arg(long, short, value_parser = value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,
    /// Day of the month to look for anniversaries on (1-31). Defaults to today.
    #[arg(long, short, value_parser = value_parser!(u32).range(1..=31))]
    pub day: Option<u32>,
    /// Also write all events, sorted by start, to the JSON output file.
    #[arg(long, short)]
    pub json: bool,
    /// Add the event from the event JSON file and write the updated timeline to a new file.
    /// The input timeline is never modified.
    #[arg(long, short)]
    pub update: bool,
    /// With --update, refuse to add an event that fails validation.
    #[arg(long, requires = "update")]
    pub strict: bool,

    /// Timeline file to read.
    #[arg(long, env = "OTD_TIMELINE")]
    pub timeline: Option<PathBuf>,
    /// JSON file with the event to add in update mode.
    #[arg(long, env = "OTD_EVENT")]
    pub event: Option<PathBuf>,
    /// Where --json writes the events.
    #[arg(long, env = "OTD_JSON_OUT")]
    pub json_out: Option<PathBuf>,
    /// Where --update writes the updated timeline.
    #[arg(long, env = "OTD_TIMELINE_OUT")]
    pub timeline_out: Option<PathBuf>,

    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }

    /// Paths given on the command line (or through the environment) win over the config file.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(path) = &self.timeline {
            config.timeline_path = path.clone();
        }
        if let Some(path) = &self.event {
            config.event_path = path.clone();
        }
        if let Some(path) = &self.json_out {
            config.json_output_path = path.clone();
        }
        if let Some(path) = &self.timeline_out {
            config.timeline_output_path = path.clone();
        }
    }

    /// The day to scan for; anything not given falls back to `now`.
    pub fn scan_options(&self, now: NaiveDateTime) -> ScanOptions {
        ScanOptions {
            month: self.month.unwrap_or(now.month()),
            day: self.day.unwrap_or(now.day()),
            now,
        }
    }
}
