//! Contact extraction from raw post text.
//!
//! Patterns are biased toward Indian mobile numbers (the audience most of
//! the configured subreddits serve) with a generic international catch-all.

use std::collections::HashSet;

use regex::Regex;

pub struct ContactExtractor {
    email_re: Regex,
    phone_re: Regex,
}

impl ContactExtractor {
    pub fn new() -> Self {
        // Compiled once; both patterns are fixed and known-valid.
        Self {
            email_re: Regex::new(r"[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+")
                .expect("email pattern is valid"),
            // +91 mobile | bare 10-digit mobile | generic international run
            phone_re: Regex::new(r"\+91[-\s]?[6-9]\d{9}|\b[6-9]\d{9}\b|\+?\d[\d\-\s]{6,}\d")
                .expect("phone pattern is valid"),
        }
    }

    /// Matched emails and phone numbers, deduplicated. Serialization order
    /// of the sets is unspecified; callers must compare as sets.
    pub fn extract(&self, text: &str) -> (HashSet<String>, HashSet<String>) {
        let emails = self
            .email_re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        let phones = self
            .phone_re
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect();
        (emails, phones)
    }

    /// Cheap presence check used for the scorer's contact bonus.
    pub fn has_contact(&self, text: &str) -> bool {
        self.email_re.is_match(text) || self.phone_re.is_match(text)
    }
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Join a contact set for storage in the output table.
pub fn join_contacts(set: &HashSet<String>) -> String {
    set.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(";")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_emails() {
        let ex = ContactExtractor::new();
        let (emails, _) = ex.extract("reach me at dev.lead+hire@agency-mail.co.in thanks");
        assert!(emails.contains("dev.lead+hire@agency-mail.co.in"));
    }

    #[test]
    fn finds_india_mobile_with_prefix() {
        let ex = ContactExtractor::new();
        let (_, phones) = ex.extract("whatsapp +91 9876543210 anytime");
        assert!(phones.iter().any(|p| p.contains("9876543210")));
    }

    #[test]
    fn finds_bare_ten_digit_mobile() {
        let ex = ContactExtractor::new();
        let (_, phones) = ex.extract("call 9123456780 after 6pm");
        assert!(phones.contains("9123456780"));
    }

    #[test]
    fn plain_text_yields_empty_sets() {
        let ex = ContactExtractor::new();
        let (emails, phones) = ex.extract("looking for a designer with shopify experience");
        assert!(emails.is_empty());
        assert!(phones.is_empty());
    }

    #[test]
    fn duplicates_collapse() {
        let ex = ContactExtractor::new();
        let (emails, _) = ex.extract("a@b.com or a@b.com or a@b.com");
        assert_eq!(emails.len(), 1);
    }

    #[test]
    fn has_contact_matches_either_pattern() {
        let ex = ContactExtractor::new();
        assert!(ex.has_contact("mail a@b.com"));
        assert!(ex.has_contact("ping 9876543210"));
        assert!(!ex.has_contact("no contact here"));
    }
}
