use serde::{Deserialize, Serialize};

/// The root of a timeline document.
///
/// Every field defaults to empty when the element is missing, so a partial
/// document still loads. Elements this model does not know about (icons,
/// hyperlinks, alerts...) are skipped wherever they appear.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timeline {
    pub version: String,
    pub timetype: String,
    pub eras: Eras,
    pub categories: Categories,
    pub events: Events,
    pub view: View,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Eras {
    pub eras: Vec<Era>,
}

/// A named time span, independent of events.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Era {
    pub name: String,
    pub start: String,
    pub end: String,
    pub color: String,
    pub ends_today: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Categories {
    pub categories: Vec<Category>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Category {
    pub name: String,
    pub color: String,
    pub progress_color: String,
    pub done_color: String,
    pub font_color: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Events {
    pub events: Vec<Event>,
}

/// A single dated entry.
///
/// Timestamps and flags are kept exactly as written in the file
/// (`YYYY-MM-DD HH:MM:SS`, `True`/`False`) so a load/save cycle reproduces
/// them verbatim. The serde shape is the JSON representation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub start: String,
    pub end: String,
    pub text: String,
    pub progress: String,
    pub fuzzy: String,
    pub locked: String,
    pub ends_today: String,
    /// Category name. Not checked against the timeline's categories.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub default_color: String,
    pub milestone: String,
}

/// Display state. Carried through a round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct View {
    pub displayed_period: DisplayedPeriod,
    pub hidden_categories: HiddenCategories,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayedPeriod {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HiddenCategories {
    pub names: Vec<String>,
}

/// Whether `value` is one of the literals a flag may hold (`True`/`False`,
/// any case). Empty is accepted since missing flags default to empty.
pub fn is_flag_literal(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false")
}
