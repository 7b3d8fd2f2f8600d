// src/pipeline/run.rs

//! The concurrent fetch/process loop.
//!
//! One fetch task downloads archives ahead of the processor and hands
//! them over through a bounded channel, so at most `prefetch` finished
//! downloads wait on disk. Processing is CPU-bound gzip + parsing and
//! runs on the blocking pool. Every archive ends up in the ledger
//! exactly once, whether it processed cleanly or not: a broken archive
//! will be just as broken on the next run, so retrying it is pointless.

use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use flate2::read::MultiGzDecoder;
use tokio::sync::mpsc;

use crate::error::{AppError, Result};
use crate::fetch::Fetcher;
use crate::models::{Config, Lead};
use crate::services::PageEnricher;
use crate::wet::WetParser;

use super::{Ledger, LeadSink};

/// Log a progress line after this many finished archives.
const PROGRESS_INTERVAL: usize = 5;

/// Outcome counters for one pipeline run.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,

    /// Archives already in the ledger when the run started.
    pub skipped: usize,

    /// Archives fully fetched and parsed this run.
    pub processed: usize,

    /// Archives that failed to fetch or decompress this run.
    pub failed: usize,

    pub pages: usize,
    pub leads: usize,
}

/// Run the pipeline over this worker's assigned archives.
///
/// `items` is the worker's slice of the archive list; anything already
/// in the ledger is skipped up front. Per-archive failures are logged
/// and recorded as done; only sink and ledger I/O abort the run.
pub async fn run_pipeline(
    config: &Config,
    fetcher: Arc<dyn Fetcher>,
    items: Vec<String>,
    output_path: &Path,
    ledger_path: &Path,
) -> Result<RunStats> {
    let started_at = Utc::now();
    let mut ledger = Ledger::open(ledger_path)?;
    let mut sink = LeadSink::open(output_path, config.pipeline.flush_every)?;

    let total = items.len();
    let remaining: Vec<String> = items
        .into_iter()
        .filter(|item| !ledger.contains(item))
        .collect();
    let skipped = total - remaining.len();
    log::info!(
        "Starting run: {} archives assigned, {} already done, {} to go",
        total,
        skipped,
        remaining.len()
    );

    let work_dir = PathBuf::from(&config.pipeline.work_dir);
    tokio::fs::create_dir_all(&work_dir).await?;

    // Downloads run ahead of the processor, at most `prefetch` deep.
    let (tx, mut rx) = mpsc::channel::<(String, Result<PathBuf>)>(config.pipeline.prefetch);
    let fetch_task = tokio::spawn(fetch_loop(fetcher, remaining.clone(), work_dir, tx));

    let mut stats = RunStats {
        started_at,
        finished_at: started_at,
        skipped,
        processed: 0,
        failed: 0,
        pages: 0,
        leads: 0,
    };

    while let Some((item, fetched)) = rx.recv().await {
        match fetched {
            Ok(path) => match process_archive(path.clone()).await {
                Ok((leads, pages)) => {
                    for lead in &leads {
                        sink.write(lead)?;
                    }
                    // The archive may only enter the ledger once its
                    // output is on disk.
                    sink.flush()?;
                    stats.processed += 1;
                    stats.pages += pages;
                    stats.leads += leads.len();
                    let _ = tokio::fs::remove_file(&path).await;
                }
                Err(e) => {
                    log::warn!("Skipping {item}: {e}");
                    stats.failed += 1;
                    let _ = tokio::fs::remove_file(&path).await;
                }
            },
            Err(e) => {
                log::warn!("Skipping {item}: {e}");
                stats.failed += 1;
            }
        }

        ledger.mark_done(&item)?;

        let finished = stats.processed + stats.failed;
        if finished % PROGRESS_INTERVAL == 0 {
            log::info!(
                "Progress: {}/{} archives, {} pages, {} leads",
                finished,
                remaining.len(),
                stats.pages,
                stats.leads
            );
        }
    }

    fetch_task
        .await
        .map_err(|e| AppError::Task(e.to_string()))?;
    sink.flush()?;

    stats.finished_at = Utc::now();
    log::info!(
        "Run complete: {} processed, {} failed, {} skipped, {} leads",
        stats.processed,
        stats.failed,
        stats.skipped,
        stats.leads
    );
    Ok(stats)
}

/// Download archives in order, handing each result to the processor.
///
/// A failed download is reported through the channel, not retried; the
/// partial file is removed first.
async fn fetch_loop(
    fetcher: Arc<dyn Fetcher>,
    items: Vec<String>,
    work_dir: PathBuf,
    tx: mpsc::Sender<(String, Result<PathBuf>)>,
) {
    for item in items {
        let dest = work_dir.join(item.replace('/', "_"));
        let result = match fetcher.fetch(&item, &dest).await {
            Ok(()) => Ok(dest),
            Err(e) => {
                let _ = tokio::fs::remove_file(&dest).await;
                Err(e)
            }
        };
        // Receiver gone means the run is over.
        if tx.send((item, result)).await.is_err() {
            return;
        }
    }
}

/// Decompress and parse one archive, enriching every page.
///
/// A stream that turns out corrupt mid-file yields the leads gathered so
/// far; truncated WET archives are common enough that partial output
/// beats none.
async fn process_archive(path: PathBuf) -> Result<(Vec<Lead>, usize)> {
    tokio::task::spawn_blocking(move || {
        let file = std::fs::File::open(&path)?;
        let mut parser = WetParser::new(BufReader::new(MultiGzDecoder::new(file)));
        let enricher = PageEnricher::new();

        let mut leads = Vec::new();
        let mut pages = 0;
        loop {
            match parser.next_record() {
                Ok(Some(record)) => {
                    pages += 1;
                    leads.extend(enricher.enrich(&record));
                }
                Ok(None) => break,
                Err(e) => {
                    log::warn!("Archive {} cut short after {pages} pages: {e}", path.display());
                    break;
                }
            }
        }
        Ok((leads, pages))
    })
    .await
    .map_err(|e| AppError::Task(e.to_string()))?
}
