use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trip_splitter::agency::AgencyConfig;
use trip_splitter::feed::JsonFeed;
use trip_splitter::generate::Generator;

/// Pre-parsed feed document to split (required).
const FEED_VAR: &str = "SPLITTER_FEED";

/// Agency configuration file; the bundled Vernon config if unset.
const CONFIG_VAR: &str = "SPLITTER_CONFIG";

/// Output file; stdout if unset.
const OUTPUT_VAR: &str = "SPLITTER_OUTPUT";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let feed_path = std::env::var_os(FEED_VAR)
        .map(PathBuf::from)
        .ok_or_else(|| format!("{FEED_VAR} not set"))?;

    let config = match std::env::var_os(CONFIG_VAR) {
        Some(path) => AgencyConfig::from_path(PathBuf::from(path))?,
        None => AgencyConfig::vernon()?,
    };
    info!(
        agency = config.name(),
        routes = config.route_count(),
        "using agency config"
    );

    let feed = JsonFeed::load(&feed_path)?;

    let start = Instant::now();
    let output = Generator::new(&config).run(&feed)?;
    info!(elapsed_ms = start.elapsed().as_millis() as u64, "generation finished");

    let json = serde_json::to_string_pretty(&output)?;
    match std::env::var_os(OUTPUT_VAR) {
        Some(path) => {
            let path = PathBuf::from(path);
            std::fs::write(&path, json)?;
            info!(path = %path.display(), "wrote output");
        }
        None => println!("{json}"),
    }

    Ok(())
}
