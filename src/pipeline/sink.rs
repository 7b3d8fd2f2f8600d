// src/pipeline/sink.rs

//! Buffered NDJSON output writer.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::models::Lead;

/// Append-only NDJSON sink, one lead per line.
///
/// Leads are buffered and flushed every `flush_every` writes; callers
/// that need stronger durability call [`LeadSink::flush`] themselves.
/// Resume after a crash may rewrite an archive's leads, so duplicate
/// lines are possible and left for downstream deduplication.
pub struct LeadSink {
    writer: BufWriter<File>,
    flush_every: usize,
    written: usize,
    since_flush: usize,
}

impl LeadSink {
    /// Open the sink in append mode, creating parent directories.
    pub fn open(path: impl AsRef<Path>, flush_every: usize) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            flush_every: flush_every.max(1),
            written: 0,
            since_flush: 0,
        })
    }

    /// Total leads written since the sink was opened.
    pub fn written(&self) -> usize {
        self.written
    }

    pub fn write(&mut self, lead: &Lead) -> Result<()> {
        serde_json::to_writer(&mut self.writer, lead)?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        self.since_flush += 1;
        if self.since_flush >= self.flush_every {
            self.flush()?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        self.since_flush = 0;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExtractionResult, PageRecord};
    use tempfile::tempdir;

    fn lead(email: &str) -> Lead {
        let page = PageRecord {
            url: "https://acme.io/".to_string(),
            domain: "acme.io".to_string(),
            lines: vec![],
        };
        Lead::from_extraction(email, &page, &ExtractionResult::default())
    }

    #[test]
    fn test_writes_one_json_line_per_lead() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out/results_w0.ndjson");

        let mut sink = LeadSink::open(&path, 10).unwrap();
        sink.write(&lead("a@acme.io")).unwrap();
        sink.write(&lead("b@acme.io")).unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.written(), 2);

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let parsed: Lead = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed.email, "a@acme.io");
    }

    #[test]
    fn test_flushes_after_threshold() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.ndjson");

        let mut sink = LeadSink::open(&path, 2).unwrap();
        sink.write(&lead("a@acme.io")).unwrap();
        // Below the threshold nothing is promised to be on disk yet.
        sink.write(&lead("b@acme.io")).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_append_preserves_existing_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.ndjson");

        {
            let mut sink = LeadSink::open(&path, 1).unwrap();
            sink.write(&lead("a@acme.io")).unwrap();
        }
        {
            let mut sink = LeadSink::open(&path, 1).unwrap();
            sink.write(&lead("b@acme.io")).unwrap();
        }

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }
}
