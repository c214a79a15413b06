mod cli_mode;
mod otd_cli;

pub use cli_mode::{CliModeResult, Stage};
pub use otd_cli::OtdCli;
