mod cli;
mod cli_modes;
mod render;

use chrono::Local;
use cli::Cli;
use cli_modes::OtdCli;
use otd_core::Otd;
use std::io::IsTerminal;
use tracing::{Subscriber, debug};
use tracing_subscriber::{EnvFilter, fmt::MakeWriter, util::SubscriberInitExt};

/// Always exits 0: stage failures are logged and the remaining stages still run.
fn main() {
    init_tracing();
    let cli = Cli::new();
    let mut otd = Otd::new();
    cli.apply_overrides(&mut otd.config);

    // Resolved once; everything downstream gets it explicitly.
    let now = Local::now().naive_local();

    let failed = OtdCli::new(cli, otd).run(now);
    if !failed.is_empty() {
        debug!(?failed, "finished with failed stages");
    }
}

/// Diagnostics go to stderr so stdout only carries anniversary lines.
/// Verbosity comes from `OTD_LOG` (e.g. `OTD_LOG=debug`), default `warn`.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("OTD_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    subscriber(filter, std::io::stderr().is_terminal(), std::io::stderr).init();
}

/// Color codes only when `ansi` is set, i.e. when stderr is a terminal.
fn subscriber<W>(filter: EnvFilter, ansi: bool, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(ansi)
        .without_time()
        .with_target(false)
        .finish()
}
