//! Relevance scoring: additive keyword weights plus contact/locale bonuses.

use crate::config::ScoringConfig;
use crate::contacts::ContactExtractor;

pub struct Scorer {
    config: ScoringConfig,
    extractor: ContactExtractor,
}

impl Scorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config,
            extractor: ContactExtractor::new(),
        }
    }

    /// Case-insensitive substring scan over the combined post text.
    ///
    /// Each keyword contributes its weight at most once no matter how often
    /// it repeats. The contact bonus is evaluated against the raw text so
    /// punctuation-sensitive patterns still fire. Zero means no signal.
    pub fn score(&self, text: &str) -> i64 {
        let lowered = text.to_lowercase();
        let mut score = 0;

        for kw in &self.config.primary_keywords {
            if lowered.contains(&kw.to_lowercase()) {
                score += self.config.primary_weight;
            }
        }
        for kw in &self.config.secondary_keywords {
            if lowered.contains(&kw.to_lowercase()) {
                score += self.config.secondary_weight;
            }
        }
        if self.extractor.has_contact(text) {
            score += self.config.contact_weight;
        }
        if lowered.contains(&self.config.locale_marker) {
            score += self.config.locale_weight;
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> Scorer {
        Scorer::new(ScoringConfig::default())
    }

    #[test]
    fn empty_text_scores_zero() {
        assert_eq!(scorer().score(""), 0);
    }

    #[test]
    fn keyword_contact_and_locale_stack() {
        // 5 (primary) + 5 (contact) + 2 (india) = 12
        let s = scorer().score("looking for developer, contact me at a@b.com, based in India");
        assert!(s >= 12);
    }

    #[test]
    fn keyword_counts_once_per_distinct_phrase() {
        let once = scorer().score("need a website");
        let thrice = scorer().score("need a website need a website need a website");
        assert_eq!(once, thrice);
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            scorer().score("LOOKING TO HIRE"),
            scorer().score("looking to hire")
        );
    }

    #[test]
    fn secondary_keywords_weigh_less() {
        let scoring = ScoringConfig::default();
        let primary = scorer().score("hiring a developer");
        let secondary = scorer().score("what's your budget");
        assert_eq!(primary, scoring.primary_weight);
        assert_eq!(secondary, scoring.secondary_weight);
    }

    #[test]
    fn custom_fixture_config_is_honored() {
        let s = Scorer::new(ScoringConfig {
            primary_keywords: vec!["fixture phrase".to_string()],
            secondary_keywords: vec![],
            primary_weight: 7,
            secondary_weight: 0,
            contact_weight: 0,
            locale_weight: 0,
            locale_marker: "nowhere".to_string(),
        });
        assert_eq!(s.score("a fixture phrase appears"), 7);
        assert_eq!(s.score("nothing relevant"), 0);
    }
}
