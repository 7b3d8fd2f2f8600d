// src/services/address.rs

//! Headquarters address extraction.
//!
//! Source pages are unstructured multilingual text, so no grammar-based
//! parsing is attempted. Labeled snippets are harvested and the best
//! candidate wins; the result is a best-effort signal, not ground truth.

use crate::locale::{ADDRESS_LABELS, MAJOR_CITIES};

/// Maximum address length, in characters.
const MAX_ADDRESS_CHARS: usize = 200;

/// Extract a headquarters address and an inferred country code.
///
/// Pass 1 harvests up to 200 characters after every address label, keeps
/// the first two non-empty lines of each snippet, and selects the longest
/// candidate that mentions a known major city (ties keep the first seen).
/// Without a city-bearing candidate, the first candidate longer than 15
/// characters is kept with no country. Pass 2 only resolves the country:
/// the first city in table order found anywhere in the page.
///
/// Returns `(address, country)`, either possibly empty.
pub fn extract_address(text: &str, text_lower: &str) -> (String, String) {
    let mut best_address = String::new();
    let mut best_country = "";
    let mut fallback = String::new();

    for m in ADDRESS_LABELS.find_iter(text) {
        let snippet: String = text[m.end()..].chars().take(MAX_ADDRESS_CHARS).collect();
        // Of the first two lines, keep the non-empty ones.
        let candidate = snippet
            .trim()
            .split('\n')
            .take(2)
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>()
            .join(", ");

        let len = candidate.chars().count();
        if len <= 10 || len >= MAX_ADDRESS_CHARS {
            continue;
        }

        let candidate_lower = candidate.to_lowercase();
        let city_country = MAJOR_CITIES
            .iter()
            .find(|(city, _)| candidate_lower.contains(city))
            .map(|(_, cc)| *cc);

        match city_country {
            Some(cc) => {
                // Longer city-bearing candidates are assumed to carry
                // more address detail.
                if len > best_address.chars().count() {
                    best_address = candidate;
                    best_country = cc;
                }
            }
            None => {
                if fallback.is_empty() && len > 15 {
                    fallback = candidate;
                }
            }
        }
    }

    let address = if !best_address.is_empty() {
        best_address
    } else {
        fallback
    };

    let mut country = best_country;
    if country.is_empty() {
        country = MAJOR_CITIES
            .iter()
            .find(|(city, _)| text_lower.contains(city))
            .map(|(_, cc)| *cc)
            .unwrap_or("");
    }

    (truncate_chars(&address, MAX_ADDRESS_CHARS), country.to_string())
}

fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}
