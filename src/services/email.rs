// src/services/email.rs

//! Email candidate extraction.
//!
//! This is a filter, not a validator: it optimizes for precision on
//! marketing and contact pages, not RFC correctness. Legitimate addresses
//! that look like placeholders are an accepted loss.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}")
        .expect("email pattern must compile")
});

/// Exclusion signatures: placeholder domains and local parts, unsubscribe
/// context, static-asset extensions, well-known SaaS/tracker/library
/// domains, and malformed double-@ matches.
static EMAIL_EXCLUDE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?i)(example\.(com|org|net)|test\.com|localhost|noreply|no-reply|donotreply|",
        r"unsubscribe|\.png|\.jpg|\.gif|\.svg|\.css|\.js$|@[0-9]|",
        r"sentry\.io|github\.com|apache\.org|w3\.org|schema\.org|xmlns|",
        r"wixpress|wordpress|@.*@|\.wasm|fontawesome|jquery|bootstrap|",
        r"placeholder|yourname|youremail|changeme|user@|admin@example|",
        r"email@email|name@domain|info@example)",
    ))
    .expect("email exclusion pattern must compile")
});

/// Extract plausible emails from a chunk of text.
///
/// Matches are lowercased, trailing dots stripped, then length- and
/// signature-filtered. Returns a deduplicated set.
pub fn extract_emails(text: &str) -> HashSet<String> {
    let mut emails = HashSet::new();
    for m in EMAIL_RE.find_iter(text) {
        let email = m.as_str().to_lowercase();
        let email = email.trim_end_matches('.');
        if email.len() < 6 || email.len() > 254 {
            continue;
        }
        if EMAIL_EXCLUDE.is_match(email) {
            continue;
        }
        emails.insert(email.to_string());
    }
    emails
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single(text: &str) -> Option<String> {
        let mut found: Vec<_> = extract_emails(text).into_iter().collect();
        found.sort();
        found.into_iter().next()
    }

    #[test]
    fn test_accepts_real_address_rejects_placeholders() {
        assert_eq!(single("contact: jane.doe@example.com"), None);
        assert_eq!(
            single("info@realcompany.io"),
            Some("info@realcompany.io".to_string())
        );
        assert_eq!(single("see admin@example.com for help"), None);
    }

    #[test]
    fn test_normalizes_case_and_trailing_dot() {
        assert_eq!(
            single("Write to Sales@ACME.FR."),
            Some("sales@acme.fr".to_string())
        );
    }

    #[test]
    fn test_rejects_noreply_and_assets() {
        assert_eq!(single("noreply@acme.com"), None);
        assert_eq!(single("icon@2x.png something"), None);
        assert_eq!(single("help@sentry.io"), None);
    }

    #[test]
    fn test_rejects_overlong_address() {
        let long = format!("{}@acme.io", "a".repeat(250));
        assert_eq!(single(&long), None);
    }

    #[test]
    fn test_deduplicates() {
        let found = extract_emails("info@acme.io and again INFO@acme.io");
        assert_eq!(found.len(), 1);
    }
}
