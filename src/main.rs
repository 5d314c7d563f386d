use std::io;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use bikeshare_explorer::console::Console;
use bikeshare_explorer::{session, Config, ExploreError};

fn main() -> Result<()> {
    // Diagnostics go to stderr so they never mix with the reports
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::discover().context("Failed to load configuration")?;

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());

    match session::run(&mut console, &config) {
        Ok(()) => Ok(()),
        Err(ExploreError::InputClosed) => {
            tracing::info!("input closed, ending session");
            Ok(())
        }
        Err(e) => Err(e).context("Bikeshare exploration stopped"),
    }
}
