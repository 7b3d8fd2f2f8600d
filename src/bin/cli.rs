//! Prospector CLI
//!
//! Local execution entry point for the WET extraction pipeline.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use prospector::{
    error::{AppError, Result},
    fetch::HttpFetcher,
    models::Config,
    pipeline::{self, Ledger},
};

/// Prospector - Common Crawl business-signal extractor
#[derive(Parser, Debug)]
#[command(
    name = "prospector",
    version,
    about = "Extracts business leads from Common Crawl WET archives"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "prospector.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Process this worker's share of the archive list
    Run {
        /// Zero-based index of this worker
        #[arg(long, default_value_t = 0)]
        worker: usize,

        /// Total number of cooperating workers
        #[arg(long, default_value_t = 1)]
        workers: usize,

        /// Archive list file (overrides paths.wet_list)
        #[arg(long)]
        wet_list: Option<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Show ledger progress against the archive list
    Status,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Read the archive list: one identifier per line, blanks skipped.
fn load_wet_list(path: &PathBuf) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        AppError::config(format!("Cannot read archive list {}: {e}", path.display()))
    })?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect())
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load_or_default(&cli.config);

    match cli.command {
        Command::Run {
            worker,
            workers,
            wet_list,
        } => {
            config.validate()?;
            if workers == 0 || worker >= workers {
                return Err(AppError::config(format!(
                    "Invalid worker assignment {worker}/{workers}"
                )));
            }

            let list_path = wet_list.unwrap_or_else(|| PathBuf::from(&config.paths.wet_list));
            let items = load_wet_list(&list_path)?;

            // Static partition: worker N takes every Nth archive, so
            // reruns with the same worker count keep the same shares.
            let assigned: Vec<String> = items
                .into_iter()
                .enumerate()
                .filter(|(i, _)| i % workers == worker)
                .map(|(_, item)| item)
                .collect();
            log::info!(
                "Worker {worker}/{workers}: {} archives assigned",
                assigned.len()
            );

            let output_path =
                PathBuf::from(&config.paths.output_dir).join(format!("results_w{worker}.ndjson"));
            let ledger_path = PathBuf::from(&config.paths.ledger);

            let fetcher = Arc::new(HttpFetcher::new(&config.fetch)?);
            let stats =
                pipeline::run_pipeline(&config, fetcher, assigned, &output_path, &ledger_path)
                    .await?;

            log::info!(
                "Finished in {}s: {} leads written to {}",
                (stats.finished_at - stats.started_at).num_seconds(),
                stats.leads,
                output_path.display()
            );
        }

        Command::Validate => {
            log::info!("Validating configuration...");
            let config = Config::load(&cli.config)?;
            config.validate()?;
            log::info!("Config OK: {}", cli.config.display());
        }

        Command::Status => {
            let ledger = Ledger::open(&config.paths.ledger)?;
            log::info!(
                "Ledger {}: {} archives done",
                ledger.path().display(),
                ledger.len()
            );

            let list_path = PathBuf::from(&config.paths.wet_list);
            if list_path.exists() {
                let items = load_wet_list(&list_path)?;
                let remaining = items.iter().filter(|i| !ledger.contains(i)).count();
                log::info!("Archive list: {} total, {} remaining", items.len(), remaining);
            } else {
                log::info!("Archive list {} not found", list_path.display());
            }
        }
    }

    Ok(())
}
