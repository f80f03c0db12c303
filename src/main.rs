use anyhow::{Context, Result};
use fixture_forge::{Config, GenerateError, Generator};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let config = Config::from_cli();
    init_tracing(config.quiet);

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("ERROR: {e:#}");
            let code = e
                .downcast_ref::<GenerateError>()
                .map(GenerateError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}

fn run(config: Config) -> Result<()> {
    let mut generator = Generator::new(config.generator)?;
    let summary = generator
        .generate(&config.name)
        .with_context(|| format!("could not generate fixture '{}'", config.name))?;

    tracing::info!("Fixture: {}", summary.target.display());
    tracing::info!("Ledger: {}", summary.ledger.display());
    tracing::info!(
        "Generated {} directories and {} files ({} bytes); {} tag entries over {} distinct tags",
        summary.directories,
        summary.files,
        summary.payload_bytes,
        summary.ledger_entries,
        summary.distinct_tags
    );
    Ok(())
}

// RUST_LOG takes precedence over --quiet.
fn init_tracing(quiet: bool) {
    let default_level = if quiet { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
