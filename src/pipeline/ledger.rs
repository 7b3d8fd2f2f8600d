// src/pipeline/ledger.rs

//! Append-only completion ledger.
//!
//! One archive identifier per line, appended and flushed as soon as the
//! archive is finished. A crash between finishing an archive and the
//! ledger line landing reprocesses that archive on the next run, so the
//! pipeline as a whole is at-least-once. Several workers may share one
//! ledger file.

use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Durable record of completed archives.
pub struct Ledger {
    path: PathBuf,
    done: HashSet<String>,
    writer: File,
}

impl Ledger {
    /// Open the ledger, creating it when missing, and load every
    /// identifier already recorded.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut done = HashSet::new();
        match File::open(&path) {
            Ok(file) => {
                for line in BufReader::new(file).lines() {
                    let line = line?;
                    let line = line.trim();
                    if !line.is_empty() {
                        done.insert(line.to_string());
                    }
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }

        let writer = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self { path, done, writer })
    }

    pub fn contains(&self, item: &str) -> bool {
        self.done.contains(item)
    }

    pub fn len(&self) -> usize {
        self.done.len()
    }

    pub fn is_empty(&self) -> bool {
        self.done.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Record an archive as finished. Flushed before returning so the
    /// entry survives a crash right after this call.
    pub fn mark_done(&mut self, item: &str) -> Result<()> {
        if !self.done.insert(item.to_string()) {
            return Ok(());
        }
        writeln!(self.writer, "{item}")?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_roundtrip_across_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.log");

        {
            let mut ledger = Ledger::open(&path).unwrap();
            assert!(ledger.is_empty());
            ledger.mark_done("segments/a.warc.wet.gz").unwrap();
            ledger.mark_done("segments/b.warc.wet.gz").unwrap();
        }

        let ledger = Ledger::open(&path).unwrap();
        assert_eq!(ledger.len(), 2);
        assert!(ledger.contains("segments/a.warc.wet.gz"));
        assert!(!ledger.contains("segments/c.warc.wet.gz"));
    }

    #[test]
    fn test_mark_done_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.log");

        let mut ledger = Ledger::open(&path).unwrap();
        ledger.mark_done("x").unwrap();
        ledger.mark_done("x").unwrap();
        drop(ledger);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "x\n");
    }

    #[test]
    fn test_blank_lines_ignored_on_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("progress.log");
        std::fs::write(&path, "a\n\nb\n  \n").unwrap();

        let ledger = Ledger::open(&path).unwrap();
        assert_eq!(ledger.len(), 2);
        assert!(ledger.contains("b"));
    }
}
