use crate::dates::DISPLAY_DATE_FORMAT;
use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::Deserialize;
use std::{fs, path::PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Timeline file to read. Never written.
    pub timeline_path: PathBuf,
    /// JSON file holding the single event to add in update mode.
    pub event_path: PathBuf,
    /// Where exported events are written.
    pub json_output_path: PathBuf,
    /// Where the updated timeline is written.
    pub timeline_output_path: PathBuf,
    /// chrono format for dates in anniversary lines. Default is "%B %-d, %Y" (June 15, 1990).
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeline_path: PathBuf::from("testdata/testtimeline.timeline"),
            event_path: PathBuf::from("testdata/testevent.json"),
            json_output_path: PathBuf::from("events.json"),
            timeline_output_path: PathBuf::from("updated.timeline"),
            date_format: DISPLAY_DATE_FORMAT.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    timeline_path: Option<PathBuf>,
    event_path: Option<PathBuf>,
    json_output_path: Option<PathBuf>,
    timeline_output_path: Option<PathBuf>,
    date_format: Option<String>,
}

impl Config {
    /// Load config from disk (first XDG path, then native) and fill the gaps with defaults.
    /// An unreadable or invalid config file is logged and ignored, so this never fails.
    pub fn load() -> Self {
        let file_config = Self::read_file_config().unwrap_or_else(|e| {
            warn!("ignoring config file: {e:#}");
            FileConfig::default()
        });
        Self::from_file_config(file_config)
    }

    fn from_file_config(file_config: FileConfig) -> Self {
        let defaults = Self::default();
        Self {
            timeline_path: file_config.timeline_path.unwrap_or(defaults.timeline_path),
            event_path: file_config.event_path.unwrap_or(defaults.event_path),
            json_output_path: file_config
                .json_output_path
                .unwrap_or(defaults.json_output_path),
            timeline_output_path: file_config
                .timeline_output_path
                .unwrap_or(defaults.timeline_output_path),
            date_format: file_config.date_format.unwrap_or(defaults.date_format),
        }
    }

    fn config_file_paths() -> Vec<PathBuf> {
        let mut v = Vec::new();
        if let Some(b) = BaseDirs::new() {
            let xdg = b.home_dir().join(".config").join("otd").join("config.toml");
            v.push(xdg);
            let native = b.config_dir().join("otd").join("config.toml");
            v.push(native);
        }
        v
    }

    /// Read the first existing config file and parse it.
    fn read_file_config() -> Result<FileConfig> {
        for path in Self::config_file_paths() {
            if !path.exists() {
                continue;
            }
            debug!(path = %path.display(), "reading config");
            let s =
                fs::read_to_string(&path).with_context(|| format!("reading {}", path.display()))?;
            return Self::parse_file(&s).with_context(|| format!("parsing {}", path.display()));
        }
        Ok(FileConfig::default())
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn candidates_prioritize_xdg_then_native() {
        if let Some(b) = BaseDirs::new() {
            let expected_xdg = b.home_dir().join(".config").join("otd").join("config.toml");
            let expected_native = b.config_dir().join("otd").join("config.toml");
            let c = Config::config_file_paths();
            assert_eq!(c.get(0), Some(&expected_xdg));
            assert_eq!(c.get(1), Some(&expected_native));
        }
    }

    #[test]
    fn defaults_match_fixed_paths() {
        let config = Config::default();
        assert_eq!(config.timeline_path, Path::new("testdata/testtimeline.timeline"));
        assert_eq!(config.event_path, Path::new("testdata/testevent.json"));
        assert_eq!(config.json_output_path, Path::new("events.json"));
        assert_eq!(config.timeline_output_path, Path::new("updated.timeline"));
        assert_eq!(config.date_format, "%B %-d, %Y");
    }

    #[test]
    fn parse_file_overrides_only_given_keys() {
        let toml = r#"
            timeline_path = "/home/me/life.timeline"
            date_format = "%d/%m/%Y"
        "#;
        let config = Config::from_file_config(Config::parse_file(toml).unwrap());
        assert_eq!(config.timeline_path, Path::new("/home/me/life.timeline"));
        assert_eq!(config.date_format, "%d/%m/%Y");
        assert_eq!(config.json_output_path, Path::new("events.json"));
        assert_eq!(config.timeline_output_path, Path::new("updated.timeline"));
    }

    #[test]
    fn parse_file_rejects_wrong_types() {
        assert!(Config::parse_file("timeline_path = 3").is_err());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config = Config::from_file_config(Config::parse_file("").unwrap());
        assert_eq!(config, Config::default());
    }
}
