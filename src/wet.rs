// src/wet.rs

//! Streaming WET (WARC extracted-text) record parser.
//!
//! WET files are concatenations of WARC records whose payload is the
//! plain-text extraction of a crawled page. The parser walks the stream
//! line by line with a small state machine and yields one [`PageRecord`]
//! per conversion record that has both a target URI and a non-empty body.
//! Memory stays bounded by the largest single record, never the file.

use std::io::BufRead;

use url::Url;

use crate::error::Result;
use crate::models::PageRecord;

/// Record boundary prefix. Matches any WARC 1.x version line.
const RECORD_BOUNDARY: &str = "WARC/1.";

/// Header carrying the capture's target URI.
const TARGET_URI_HEADER: &str = "WARC-Target-URI:";

/// Pull-based parser over a buffered WET stream.
pub struct WetParser<R: BufRead> {
    reader: R,
    url: String,
    lines: Vec<String>,
    in_body: bool,
    eof: bool,
    buf: Vec<u8>,
}

impl<R: BufRead> WetParser<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            url: String::new(),
            lines: Vec::new(),
            in_body: false,
            eof: false,
            buf: Vec::new(),
        }
    }

    /// Advance to the next complete record.
    ///
    /// Returns `Ok(None)` once the stream is exhausted. A record cut off
    /// by EOF is still yielded: WET files in the wild are occasionally
    /// truncated and the captured text is still usable.
    pub fn next_record(&mut self) -> Result<Option<PageRecord>> {
        if self.eof {
            return Ok(None);
        }

        loop {
            self.buf.clear();
            let read = self.reader.read_until(b'\n', &mut self.buf)?;
            if read == 0 {
                self.eof = true;
                return Ok(self.take_record());
            }

            // WET payloads are not guaranteed to be valid UTF-8.
            let line = String::from_utf8_lossy(&self.buf);
            let line = line.trim_end_matches(['\r', '\n']);

            if line.starts_with(RECORD_BOUNDARY) {
                let finished = self.take_record();
                self.url.clear();
                self.lines.clear();
                self.in_body = false;
                if finished.is_some() {
                    return Ok(finished);
                }
                continue;
            }

            if let Some(uri) = line.strip_prefix(TARGET_URI_HEADER) {
                self.url = uri.trim().to_string();
                continue;
            }

            // Stray header lines can appear mid-payload in malformed
            // records; drop them wherever they show up.
            if line.starts_with("WARC-") || line.starts_with("Content-") {
                continue;
            }

            if !self.in_body {
                // The blank separator after the headers opens the body
                // and is not itself part of it.
                if line.is_empty() && !self.url.is_empty() {
                    self.in_body = true;
                }
                continue;
            }

            self.lines.push(line.to_string());
        }
    }

    fn take_record(&mut self) -> Option<PageRecord> {
        if self.url.is_empty() || self.lines.is_empty() {
            return None;
        }
        let url = std::mem::take(&mut self.url);
        let domain = domain_of(&url);
        let lines = std::mem::take(&mut self.lines);
        self.in_body = false;
        Some(PageRecord { url, domain, lines })
    }
}

/// Lowercased registrable host of a URL, `www.` stripped.
///
/// Unparseable URIs (WET streams contain some) yield an empty domain
/// rather than an error; the record is still worth enriching.
fn domain_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_lowercase))
        .map(|h| h.trim_start_matches("www.").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse_all(input: &str) -> Vec<PageRecord> {
        let mut parser = WetParser::new(Cursor::new(input.as_bytes()));
        let mut records = Vec::new();
        while let Some(record) = parser.next_record().unwrap() {
            records.push(record);
        }
        records
    }

    fn record(url: &str, body: &[&str]) -> String {
        let mut s = String::from("WARC/1.0\r\n");
        s.push_str("WARC-Type: conversion\r\n");
        s.push_str(&format!("WARC-Target-URI: {url}\r\n"));
        s.push_str("Content-Type: text/plain\r\n");
        s.push_str("Content-Length: 100\r\n");
        s.push_str("\r\n");
        for line in body {
            s.push_str(line);
            s.push('\n');
        }
        s
    }

    #[test]
    fn test_parses_multiple_records() {
        let input = format!(
            "{}{}",
            record("https://www.acme.fr/contact", &["Contact us", "info@acme.fr"]),
            record("https://other.io/", &["hello"]),
        );
        let records = parse_all(&input);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url, "https://www.acme.fr/contact");
        assert_eq!(records[0].domain, "acme.fr");
        assert_eq!(records[0].lines, vec!["Contact us", "info@acme.fr"]);
        assert_eq!(records[1].domain, "other.io");
    }

    #[test]
    fn test_final_record_without_trailing_boundary() {
        let records = parse_all(&record("https://acme.io/", &["last page text"]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].lines, vec!["last page text"]);
    }

    #[test]
    fn test_record_with_empty_body_skipped() {
        let input = format!(
            "{}{}",
            record("https://empty.example/", &[]),
            record("https://full.example/", &["text"]),
        );
        let records = parse_all(&input);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].domain, "full.example");
    }

    #[test]
    fn test_record_without_uri_skipped() {
        let input = "WARC/1.0\r\nWARC-Type: warcinfo\r\n\r\nsoftware: crawler\n";
        assert!(parse_all(input).is_empty());
    }

    #[test]
    fn test_stray_headers_in_body_dropped() {
        let input = record(
            "https://acme.io/",
            &["real text", "WARC-Block-Digest: sha1:abc", "Content-Length: 5", "more text"],
        );
        let records = parse_all(&input);
        assert_eq!(records[0].lines, vec!["real text", "more text"]);
    }

    #[test]
    fn test_blank_separator_not_in_body() {
        let input = record("https://acme.io/", &["first"]);
        let records = parse_all(&input);
        assert_eq!(records[0].lines, vec!["first"]);
    }

    #[test]
    fn test_invalid_uri_yields_empty_domain() {
        let records = parse_all(&record("not a uri", &["body"]));
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].domain, "");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut bytes = record("https://acme.io/", &[]).into_bytes();
        bytes.extend_from_slice(b"caf\xff body line\n");
        let mut parser = WetParser::new(Cursor::new(bytes));
        let record = parser.next_record().unwrap().unwrap();
        assert!(record.lines[0].starts_with("caf"));
    }
}
