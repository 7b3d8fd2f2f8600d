// src/services/size.rs

//! Company-size estimation.

use crate::locale::{SIZE_KEYWORDS, SIZE_PATTERNS};
use crate::models::SizeBucket;

/// Estimate company size from page text.
///
/// Pass 1 tries the employee-count patterns in priority order and returns
/// on the first in-range count (1..=500000); the signal is the literal
/// phrase "`<count> employees`". Pass 2 falls back to qualitative size
/// keywords in bucket order, with the matched keyword as the signal.
///
/// Returns `None` when neither pass finds a signal.
pub fn estimate_size(text: &str, text_lower: &str) -> Option<(SizeBucket, String)> {
    for pattern in SIZE_PATTERNS.iter() {
        if let Some(caps) = pattern.captures(text) {
            if let Some(count) = parse_employee_count(&caps[1]) {
                if (1..=500_000).contains(&count) {
                    return Some((SizeBucket::from_count(count), format!("{count} employees")));
                }
            }
        }
    }

    for (bucket, keywords) in SIZE_KEYWORDS {
        for kw in *keywords {
            if text_lower.contains(kw) {
                return Some((*bucket, (*kw).to_string()));
            }
        }
    }

    None
}

/// Parse a captured numeral, stripping grouping separators first.
///
/// "1.500" and "1,500" are treated identically regardless of locale
/// decimal conventions; that simplification is deliberate.
fn parse_employee_count(s: &str) -> Option<u64> {
    let cleaned: String = s.chars().filter(|c| !matches!(c, ',' | '.' | ' ')).collect();
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(text: &str) -> Option<(SizeBucket, String)> {
        estimate_size(text, &text.to_lowercase())
    }

    #[test]
    fn test_count_buckets() {
        for (count, bucket) in [
            (9, SizeBucket::Micro),
            (10, SizeBucket::Small),
            (49, SizeBucket::Small),
            (50, SizeBucket::Medium),
            (249, SizeBucket::Medium),
            (250, SizeBucket::Large),
            (999, SizeBucket::Large),
            (1000, SizeBucket::Enterprise),
        ] {
            let text = format!("we have {count} employees worldwide");
            let (got, signal) = estimate(&text).unwrap();
            assert_eq!(got, bucket, "count {count}");
            assert_eq!(signal, format!("{count} employees"));
        }
    }

    #[test]
    fn test_grouping_separators_stripped() {
        let (bucket, signal) = estimate("over 1,500 employees").unwrap();
        assert_eq!(bucket, SizeBucket::Enterprise);
        assert_eq!(signal, "1500 employees");

        let (bucket, _) = estimate("1.500 Mitarbeiter").unwrap();
        assert_eq!(bucket, SizeBucket::Enterprise);
    }

    #[test]
    fn test_out_of_range_count_ignored() {
        assert_eq!(estimate("900000 employees strong"), None);
    }

    #[test]
    fn test_numeric_wins_over_keyword() {
        let (bucket, signal) = estimate("a startup with 300 employees").unwrap();
        assert_eq!(bucket, SizeBucket::Large);
        assert_eq!(signal, "300 employees");
    }

    #[test]
    fn test_keyword_fallback() {
        let (bucket, signal) = estimate("we are a small business in town").unwrap();
        assert_eq!(bucket, SizeBucket::Small);
        assert_eq!(signal, "small business");
    }

    #[test]
    fn test_keyword_order_micro_first() {
        let (bucket, _) = estimate("freelance consultant for large enterprise clients").unwrap();
        assert_eq!(bucket, SizeBucket::Micro);
    }

    #[test]
    fn test_no_signal() {
        assert_eq!(estimate("welcome to our website"), None);
    }
}
