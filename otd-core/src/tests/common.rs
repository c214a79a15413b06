use crate::Config;
use std::path::Path;

/// Test helper to create a `Config` whose files all live under `dir`.
///
/// This is the single source of truth for test configuration.
/// If you add a field to `Config`, you only need to update it here.
pub fn mk_config(dir: &Path) -> Config {
    Config {
        timeline_path: dir.join("testtimeline.timeline"),
        event_path: dir.join("testevent.json"),
        json_output_path: dir.join("events.json"),
        timeline_output_path: dir.join("updated.timeline"),
        ..Default::default()
    }
}

/// Four events: a match for June 15th, a birthday on the same day, an
/// unrelated event and one with a broken start.
pub const SAMPLE_TIMELINE: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<timeline>
  <version>2.1.0</version>
  <timetype>gregoriantime</timetype>
  <eras>
    <era>
      <name>University</name>
      <start>1986-09-01 00:00:00</start>
      <end>1990-06-30 00:00:00</end>
      <color>200,200,200</color>
      <ends_today>False</ends_today>
    </era>
  </eras>
  <categories>
    <category>
      <name>Life</name>
      <color>255,165,0</color>
      <progress_color>255,153,153</progress_color>
      <done_color>255,153,153</done_color>
      <font_color>0,0,0</font_color>
    </category>
    <category>
      <name>Work</name>
      <color>0,128,255</color>
      <progress_color>153,204,255</progress_color>
      <done_color>153,204,255</done_color>
      <font_color>0,0,0</font_color>
    </category>
  </categories>
  <events>
    <event>
      <start>1990-06-15 00:00:00</start>
      <end>1990-06-15 00:00:00</end>
      <text>Graduated</text>
      <progress>0</progress>
      <fuzzy>False</fuzzy>
      <locked>False</locked>
      <ends_today>False</ends_today>
      <category>Life</category>
      <description>Finally &amp; for good</description>
      <default_color>200,200,200</default_color>
      <milestone>True</milestone>
    </event>
    <event>
      <start>1962-06-15 00:00:00</start>
      <end>1962-06-15 00:00:00</end>
      <text>Mum's birthday</text>
      <progress>0</progress>
      <fuzzy>False</fuzzy>
      <locked>False</locked>
      <ends_today>False</ends_today>
      <category>Life</category>
      <default_color>200,200,200</default_color>
      <milestone>False</milestone>
    </event>
    <event>
      <start>2001-10-19 09:00:00</start>
      <end>2003-03-31 17:00:00</end>
      <text>First job</text>
      <progress>100</progress>
      <fuzzy>True</fuzzy>
      <locked>False</locked>
      <ends_today>False</ends_today>
      <category>Work</category>
      <default_color>200,200,200</default_color>
      <milestone>False</milestone>
    </event>
    <event>
      <start>sometime in 1970</start>
      <end>sometime in 1970</end>
      <text>Moved house</text>
      <progress>0</progress>
      <fuzzy>True</fuzzy>
      <locked>False</locked>
      <ends_today>False</ends_today>
      <default_color>200,200,200</default_color>
      <milestone>False</milestone>
    </event>
  </events>
  <view>
    <displayed_period>
      <start>1985-01-01 00:00:00</start>
      <end>2020-01-01 00:00:00</end>
    </displayed_period>
    <hidden_categories>
      <name>Work</name>
    </hidden_categories>
  </view>
</timeline>
"#;

pub const SAMPLE_EVENT: &str = r#"{
  "start": "2010-06-15 10:00:00",
  "end": "2010-06-15 18:00:00",
  "text": "Moved to Lisbon",
  "progress": "0",
  "fuzzy": "False",
  "locked": "False",
  "ends_today": "False",
  "category": "Life",
  "default_color": "200,200,200",
  "milestone": "False"
}
"#;
