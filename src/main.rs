use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use trackscout::catalog::HttpCatalogClient;
use trackscout::config::Config;
use trackscout::metadata::LoftyMetadataSource;
use trackscout::pipeline::SearchPipeline;
use trackscout::runner::ScanRunner;

#[derive(Parser)]
#[command(name = "trackscout")]
#[command(about = "Match audio files against catalog search results", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory containing the track files to analyze
    dir: PathBuf,

    /// Maximum number of files to process
    #[arg(long)]
    max_files: Option<usize>,

    /// Delay between files in milliseconds
    #[arg(long)]
    pace_ms: Option<u64>,

    /// Skip the pacing delay instead of waiting for it
    #[arg(long)]
    no_await_pace: bool,

    /// Catalog search endpoint (query is sent as `q`)
    #[arg(long)]
    endpoint: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Stop at the first file that fails instead of skipping it
    #[arg(long)]
    stop_on_error: bool,
}

impl Cli {
    fn apply_to(&self, config: &mut Config) {
        if let Some(max_files) = self.max_files {
            config.run.max_files = max_files;
        }
        if let Some(pace_ms) = self.pace_ms {
            config.run.pace_ms = pace_ms;
        }
        if self.no_await_pace {
            config.run.await_pace = false;
        }
        if let Some(endpoint) = &self.endpoint {
            config.search.endpoint = endpoint.clone();
        }
        if let Some(timeout_secs) = self.timeout_secs {
            config.search.timeout_secs = timeout_secs;
        }
        if self.stop_on_error {
            config.run.stop_on_error = true;
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries the report.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().with_context(|| "Failed to load configuration")?;
    cli.apply_to(&mut config);
    config.validate().with_context(|| "Invalid configuration")?;

    let client = HttpCatalogClient::new(&config.search)
        .with_context(|| "Failed to create catalog client")?;
    let runner = ScanRunner::new(
        LoftyMetadataSource::new(),
        SearchPipeline::new(client),
        config.run.clone(),
    );

    // Failures past startup are logged, not turned into an exit code.
    let mut stdout = io::stdout().lock();
    if let Err(e) = runner.run(&cli.dir, &mut stdout).await {
        error!("Run over {} failed: {}", cli.dir.display(), e);
    }

    Ok(())
}
