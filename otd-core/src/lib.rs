pub mod anniversary;
pub mod config;
pub mod dates;
pub mod error;
pub mod export;
pub mod import;
pub mod otd;
pub mod timeline;

#[cfg(test)]
mod tests;

pub use anniversary::{Anniversary, ScanError, ScanOptions, ScanResult};
pub use config::Config;
pub use error::TimelineError;
pub use import::{EventIssue, UpdateOptions, UpdateResult};
pub use otd::Otd;
pub use timeline::{Event, Timeline};
