use super::{CliModeResult, Stage};
use crate::{
    cli::Cli,
    render::{RenderOptions, Renderer},
};
use anyhow::{Error, Result};
use chrono::NaiveDateTime;
use otd_core::{Otd, ScanError, Timeline, UpdateOptions};
use tracing::{error, warn};

pub struct OtdCli {
    cli: Cli,
    renderer: Renderer,
    otd: Otd,
}

impl OtdCli {
    pub fn new(cli: Cli, otd: Otd) -> Self {
        let renderer = Renderer::new(Some(RenderOptions {
            date_format: otd.config.date_format.clone(),
            use_color: cli.color.use_color(),
        }));
        OtdCli { cli, renderer, otd }
    }

    /// Loads the timeline, prints today's anniversaries, then runs the
    /// requested export and update. Each failing stage is logged and the
    /// next one still runs; a timeline that cannot be loaded is treated as
    /// empty. Returns the stages that failed.
    pub fn run(&self, now: NaiveDateTime) -> Vec<Stage> {
        let mut failed = Vec::new();

        let timeline = self.otd.load_timeline().unwrap_or_else(|e| {
            error!("{:#}", Error::from(e));
            failed.push(Stage::Load);
            Timeline::default()
        });

        self.scan_mode(&timeline, now);

        if let Err(e) = self.export_mode(&timeline) {
            error!("{e:#}");
            failed.push(Stage::Export);
        }
        if let Err(e) = self.update_mode(&timeline) {
            error!("{e:#}");
            failed.push(Stage::Update);
        }
        failed
    }

    pub fn scan_mode(&self, timeline: &Timeline, now: NaiveDateTime) -> CliModeResult {
        let options = self.cli.scan_options(now);
        let result = self.otd.on_this_day(timeline, &options);

        for scan_error in &result.errors {
            match scan_error {
                ScanError::InvalidTimestamp { text, value, error } => {
                    warn!("skipping '{text}': start '{value}' is not a valid date ({error})");
                }
            }
        }

        if result.anniversaries.is_empty() {
            self.renderer.print_info("Nothing happened on this day.");
        } else {
            self.renderer.print_anniversaries(&result.anniversaries);
        }
        CliModeResult::Finish
    }

    pub fn export_mode(&self, timeline: &Timeline) -> Result<CliModeResult> {
        if !self.cli.json {
            return Ok(CliModeResult::NothingToDo);
        }
        let count = self.otd.export_json(timeline)?;
        self.renderer.print_info(&format!(
            "{count} events exported to {}",
            self.otd.config.json_output_path.display()
        ));
        Ok(CliModeResult::Finish)
    }

    pub fn update_mode(&self, timeline: &Timeline) -> Result<CliModeResult> {
        if !self.cli.update {
            return Ok(CliModeResult::NothingToDo);
        }
        let options = UpdateOptions {
            strict: self.cli.strict,
        };
        let result = self.otd.update_from_json(timeline, &options)?;
        self.renderer.print_info(&format!(
            "Added '{}' to {} ({} events)",
            result.event.text,
            result.path.display(),
            result.event_count
        ));
        Ok(CliModeResult::Finish)
    }
}
