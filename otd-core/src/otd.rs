use crate::{
    Config,
    anniversary::{ScanOptions, ScanResult, find_anniversaries},
    error::Result,
    export::export_events,
    import::{UpdateOptions, UpdateResult, update_timeline},
    timeline::Timeline,
};

/// Entry point tying the configured paths to the timeline operations.
#[derive(Debug)]
pub struct Otd {
    pub config: Config,
}

impl Otd {
    /// Creates a new `Otd` instance, loading configuration from standard paths.
    pub fn new() -> Self {
        Self::with_config(Config::load())
    }

    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Loads the configured input timeline.
    pub fn load_timeline(&self) -> Result<Timeline> {
        Timeline::load(&self.config.timeline_path)
    }

    pub fn on_this_day(&self, timeline: &Timeline, options: &ScanOptions) -> ScanResult {
        find_anniversaries(timeline.events(), options)
    }

    /// Exports the events, sorted, to the configured JSON output. Returns how many were written.
    pub fn export_json(&self, timeline: &Timeline) -> Result<usize> {
        export_events(timeline.events(), &self.config.json_output_path)
    }

    /// Appends the event from the configured JSON input and writes the
    /// updated timeline to the configured output. `timeline` is not modified.
    pub fn update_from_json(
        &self,
        timeline: &Timeline,
        options: &UpdateOptions,
    ) -> Result<UpdateResult> {
        update_timeline(
            timeline,
            &self.config.timeline_path,
            &self.config.event_path,
            &self.config.timeline_output_path,
            options,
        )
    }
}
