// src/models/lead.rs

//! The persisted output record: one line of NDJSON per discovered email.

use serde::{Deserialize, Serialize};

use super::{ExtractionResult, PageRecord};

/// One discovered email with its page-level business signals.
///
/// Address, country, industry and size are page-level values replicated
/// onto every email found on that page. Immutable once written; the
/// output sink is append-only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lead {
    pub email: String,

    /// Domain part of the email, falling back to the page's source domain.
    pub domain: String,

    pub source_url: String,
    pub source_domain: String,

    pub address: String,
    pub country: String,

    pub industry: String,
    pub industry_score: f64,

    pub size_bucket: String,
    pub size_signal: String,
}

impl Lead {
    /// Build one lead for a single email out of a page's extraction result.
    pub fn from_extraction(email: &str, page: &PageRecord, result: &ExtractionResult) -> Self {
        let domain = email
            .split_once('@')
            .map(|(_, d)| d.to_string())
            .unwrap_or_else(|| page.domain.clone());

        Self {
            email: email.to_string(),
            domain,
            source_url: page.url.clone(),
            source_domain: page.domain.clone(),
            address: result.address.clone(),
            country: result.country.clone(),
            industry: result.industry.clone(),
            industry_score: result.industry_score,
            size_bucket: result
                .size_bucket
                .map(|b| b.as_str().to_string())
                .unwrap_or_default(),
            size_signal: result.size_signal.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SizeBucket;

    fn sample_page() -> PageRecord {
        PageRecord {
            url: "https://acme.fr/contact".to_string(),
            domain: "acme.fr".to_string(),
            lines: vec![],
        }
    }

    #[test]
    fn test_lead_takes_email_domain() {
        let result = ExtractionResult::default();
        let lead = Lead::from_extraction("info@other.io", &sample_page(), &result);
        assert_eq!(lead.domain, "other.io");
        assert_eq!(lead.source_domain, "acme.fr");
    }

    #[test]
    fn test_lead_replicates_page_signals() {
        let result = ExtractionResult {
            address: "1 Rue de Rivoli, Paris".to_string(),
            country: "FR".to_string(),
            industry: "Technology".to_string(),
            industry_score: 0.75,
            size_bucket: Some(SizeBucket::Small),
            size_signal: "25 employees".to_string(),
            ..ExtractionResult::default()
        };
        let lead = Lead::from_extraction("info@acme.fr", &sample_page(), &result);
        assert_eq!(lead.country, "FR");
        assert_eq!(lead.size_bucket, "small");

        let json = serde_json::to_string(&lead).unwrap();
        assert!(json.contains("\"industry_score\":0.75"));
        assert!(json.contains("\"source_url\":\"https://acme.fr/contact\""));
    }
}
