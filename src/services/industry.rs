// src/services/industry.rs

//! Industry classification by keyword scoring.

use crate::locale::INDUSTRY_KEYWORDS;

/// Score lowercased page text against every industry keyword set.
///
/// A keyword occurring K times contributes K to its category. Categories
/// with zero matches are excluded; the winner is the highest raw count
/// (ties go to the earlier table entry) and the confidence is its share
/// of all matches, rounded to two decimals.
///
/// Returns `("", 0.0)` when nothing matches.
pub fn classify_industry(text_lower: &str) -> (String, f64) {
    let mut scores: Vec<(&str, usize)> = Vec::new();
    for (category, keywords) in INDUSTRY_KEYWORDS {
        let count: usize = keywords
            .iter()
            .map(|kw| text_lower.matches(kw).count())
            .sum();
        if count > 0 {
            scores.push((category, count));
        }
    }

    let Some(&(first, first_count)) = scores.first() else {
        return (String::new(), 0.0);
    };

    let mut best = first;
    let mut best_count = first_count;
    for &(category, count) in &scores[1..] {
        if count > best_count {
            best = category;
            best_count = count;
        }
    }

    let total: usize = scores.iter().map(|(_, c)| c).sum();
    let confidence = (best_count as f64 / total as f64 * 100.0).round() / 100.0;
    (best.to_string(), confidence)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_match() {
        assert_eq!(classify_industry("lorem ipsum dolor"), (String::new(), 0.0));
    }

    #[test]
    fn test_repeated_keyword_counts_each_occurrence() {
        let text = "our software is great software, truly software, unlike any hospital";
        let (industry, score) = classify_industry(text);
        assert_eq!(industry, "Technology");
        assert_eq!(score, 0.75);
    }

    #[test]
    fn test_winner_takes_highest_count() {
        let text = "clinic clinic patient doctor shop";
        let (industry, _) = classify_industry(text);
        assert_eq!(industry, "Healthcare");
    }

    #[test]
    fn test_tie_goes_to_earlier_category() {
        // One Technology keyword and one Healthcare keyword: table order
        // puts Technology first.
        let (industry, score) = classify_industry("devops nurse");
        assert_eq!(industry, "Technology");
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_multilingual_keywords() {
        let (industry, _) = classify_industry("notre logiciel informatique");
        assert_eq!(industry, "Technology");
    }
}
