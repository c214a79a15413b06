mod model;
mod xml;

pub use model::{
    Categories, Category, DisplayedPeriod, Era, Eras, Event, Events, HiddenCategories, Timeline,
    View, is_flag_literal,
};
pub use xml::XmlError;

impl Timeline {
    /// Events in file order.
    pub fn events(&self) -> &[Event] {
        &self.events.events
    }

    pub fn has_category(&self, name: &str) -> bool {
        self.categories.categories.iter().any(|c| c.name == name)
    }
}
