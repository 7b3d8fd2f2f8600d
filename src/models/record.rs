// src/models/record.rs

//! Transient per-page data produced by the WET parser and enricher.

use std::collections::HashSet;

/// One page capture pulled out of a WET archive stream.
///
/// Constructed when the parser sees a record boundary, consumed by the
/// enricher, never persisted.
#[derive(Debug, Clone, Default)]
pub struct PageRecord {
    /// Target URI of the capture.
    pub url: String,

    /// Lowercased hostname with a leading `www.` stripped. May be empty
    /// when the target URI does not parse.
    pub domain: String,

    /// Body lines in stream order.
    pub lines: Vec<String>,
}

impl PageRecord {
    /// Join the body lines back into one text block.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// Company-size bucket derived from an employee count or keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeBucket {
    Micro,
    Small,
    Medium,
    Large,
    Enterprise,
    Startup,
}

impl SizeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeBucket::Micro => "micro",
            SizeBucket::Small => "small",
            SizeBucket::Medium => "medium",
            SizeBucket::Large => "large",
            SizeBucket::Enterprise => "enterprise",
            SizeBucket::Startup => "startup",
        }
    }

    /// Bucket an explicit employee count.
    pub fn from_count(count: u64) -> Self {
        if count < 10 {
            SizeBucket::Micro
        } else if count < 50 {
            SizeBucket::Small
        } else if count < 250 {
            SizeBucket::Medium
        } else if count < 1000 {
            SizeBucket::Large
        } else {
            SizeBucket::Enterprise
        }
    }
}

/// All signals extracted from one page. Empty strings mean "no signal";
/// extraction never fails.
#[derive(Debug, Clone, Default)]
pub struct ExtractionResult {
    /// Deduplicated, lowercased emails found on the page.
    pub emails: HashSet<String>,

    /// Best-candidate headquarters address, truncated to 200 chars.
    pub address: String,

    /// Resolved 2-letter country code (address wins over domain TLD).
    pub country: String,

    /// Best-matching industry category.
    pub industry: String,

    /// Winner's share of all keyword matches, rounded to 2 decimals.
    pub industry_score: f64,

    /// Company-size bucket, if any signal was found.
    pub size_bucket: Option<SizeBucket>,

    /// Evidence for the size bucket (count phrase or matched keyword).
    pub size_signal: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_text_joins_lines() {
        let page = PageRecord {
            url: "https://example.com".to_string(),
            domain: "example.com".to_string(),
            lines: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(page.text(), "first\nsecond");
    }

    #[test]
    fn test_size_bucket_boundaries() {
        assert_eq!(SizeBucket::from_count(9), SizeBucket::Micro);
        assert_eq!(SizeBucket::from_count(10), SizeBucket::Small);
        assert_eq!(SizeBucket::from_count(49), SizeBucket::Small);
        assert_eq!(SizeBucket::from_count(50), SizeBucket::Medium);
        assert_eq!(SizeBucket::from_count(249), SizeBucket::Medium);
        assert_eq!(SizeBucket::from_count(250), SizeBucket::Large);
        assert_eq!(SizeBucket::from_count(999), SizeBucket::Large);
        assert_eq!(SizeBucket::from_count(1000), SizeBucket::Enterprise);
    }
}
