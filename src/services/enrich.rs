// src/services/enrich.rs

//! Page enrichment: runs every extraction service over one page and
//! fans the result out into per-email leads.

use crate::locale::country_from_domain;
use crate::models::{ExtractionResult, Lead, PageRecord};

use super::{classify_industry, estimate_size, extract_address, extract_emails};

/// Turns parsed pages into leads.
///
/// Stateless; the extraction tables it relies on are compiled once per
/// process.
#[derive(Debug, Default)]
pub struct PageEnricher;

impl PageEnricher {
    pub fn new() -> Self {
        Self
    }

    /// Enrich one page, producing one lead per accepted email.
    ///
    /// Email extraction runs first over only the lines containing an `@`,
    /// and a page without any accepted email is dropped before the heavier
    /// full-text passes run.
    pub fn enrich(&self, page: &PageRecord) -> Vec<Lead> {
        let mut emails = std::collections::HashSet::new();
        for line in &page.lines {
            if line.contains('@') {
                emails.extend(extract_emails(line));
            }
        }
        if emails.is_empty() {
            return Vec::new();
        }

        let text = page.text();
        let text_lower = text.to_lowercase();

        let (address, address_country) = extract_address(&text, &text_lower);
        let (industry, industry_score) = classify_industry(&text_lower);
        let size = estimate_size(&text, &text_lower);

        // Address-derived country beats the domain TLD.
        let country = if address_country.is_empty() {
            country_from_domain(&page.domain).to_string()
        } else {
            address_country
        };

        let (size_bucket, size_signal) = match size {
            Some((bucket, signal)) => (Some(bucket), signal),
            None => (None, String::new()),
        };

        let result = ExtractionResult {
            emails,
            address,
            country,
            industry,
            industry_score,
            size_bucket,
            size_signal,
        };

        let mut sorted: Vec<&String> = result.emails.iter().collect();
        sorted.sort();
        sorted
            .into_iter()
            .map(|email| Lead::from_extraction(email, page, &result))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(domain: &str, lines: &[&str]) -> PageRecord {
        PageRecord {
            url: format!("https://{domain}/about"),
            domain: domain.to_string(),
            lines: lines.iter().map(|l| l.to_string()).collect(),
        }
    }

    #[test]
    fn test_page_without_email_yields_nothing() {
        let page = page("acme.de", &["Address: Kantstrasse 12, Berlin", "software"]);
        assert!(PageEnricher::new().enrich(&page).is_empty());
    }

    #[test]
    fn test_address_country_beats_domain_tld() {
        let page = page(
            "acme.fr",
            &[
                "Contact: info@acme.fr",
                "Headquarters: Kantstrasse 12, 10623 Berlin Germany",
            ],
        );
        let leads = PageEnricher::new().enrich(&page);
        assert_eq!(leads.len(), 1);
        assert_eq!(leads[0].country, "DE");
    }

    #[test]
    fn test_domain_tld_fallback() {
        let page = page("acme.fr", &["Contact: info@acme.fr"]);
        let leads = PageEnricher::new().enrich(&page);
        assert_eq!(leads[0].country, "FR");
    }

    #[test]
    fn test_one_lead_per_email_with_shared_signals() {
        let page = page(
            "acme.io",
            &[
                "sales@acme.io or support@acme.io",
                "We build software and cloud devops tooling.",
                "A startup of passionate engineers.",
            ],
        );
        let leads = PageEnricher::new().enrich(&page);
        assert_eq!(leads.len(), 2);
        assert_eq!(leads[0].email, "sales@acme.io");
        assert_eq!(leads[1].email, "support@acme.io");
        for lead in &leads {
            assert_eq!(lead.industry, "Technology");
            assert_eq!(lead.size_bucket, "startup");
        }
    }

    #[test]
    fn test_emails_only_scanned_on_at_lines() {
        // The address line mentions no '@' so it never reaches the email
        // pass, but it still feeds the full-text passes.
        let page = page(
            "acme.de",
            &["write info@acme.de", "Adresse: Friedrichstrasse 200, 10117 Berlin"],
        );
        let leads = PageEnricher::new().enrich(&page);
        assert_eq!(leads.len(), 1);
        assert!(leads[0].address.contains("Friedrichstrasse"));
    }
}
