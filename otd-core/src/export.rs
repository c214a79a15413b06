use crate::anniversary::sort_events;
use crate::error::{Result, TimelineError};
use crate::timeline::Event;
use std::{fs, path::Path};
use tracing::debug;

/// Writes `events`, sorted by start, as an indented JSON array to `path`.
/// An existing file is overwritten. Returns the number of events written.
pub fn export_events(events: &[Event], path: &Path) -> Result<usize> {
    let sorted = sort_events(events);
    let json = serde_json::to_string_pretty(&sorted).map_err(|source| TimelineError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| TimelineError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), events = sorted.len(), "exported events");
    Ok(sorted.len())
}

/// Reads back a JSON array of events.
pub fn read_events(path: &Path) -> Result<Vec<Event>> {
    let content = fs::read_to_string(path).map_err(|source| TimelineError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| TimelineError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::SAMPLE_TIMELINE;
    use crate::timeline::Timeline;
    use tempfile::tempdir;

    #[test]
    fn export_then_read_back_equals_sorted_events() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("events.json");
        let timeline = Timeline::from_xml(SAMPLE_TIMELINE).unwrap();

        let written = export_events(timeline.events(), &path).expect("exported");
        assert_eq!(written, timeline.events().len());

        let mut expected = timeline.events().to_vec();
        expected.sort_by(|a, b| a.start.cmp(&b.start));
        assert_eq!(read_events(&path).expect("read back"), expected);
    }

    #[test]
    fn export_uses_timeline_field_names() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("events.json");
        let events = vec![Event {
            start: "1990-06-15 00:00:00".to_string(),
            end: "1990-06-15 00:00:00".to_string(),
            text: "Graduated".to_string(),
            fuzzy: "False".to_string(),
            ends_today: "False".to_string(),
            ..Default::default()
        }];
        export_events(&events, &path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value[0];
        assert_eq!(first["text"], "Graduated");
        assert_eq!(first["fuzzy"], "False");
        assert_eq!(first["ends_today"], "False");
        assert!(first.get("category").is_none());
        assert!(first.get("description").is_none());
        assert!(json.contains("\n  {"), "indented output");
    }

    #[test]
    fn export_overwrites_existing_file() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("events.json");
        fs::write(&path, "stale content that is much longer than an empty array").unwrap();

        export_events(&[], &path).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("missing").join("events.json");
        let err = export_events(&[], &path).unwrap_err();
        assert!(matches!(err, TimelineError::Write { .. }));
    }
}
