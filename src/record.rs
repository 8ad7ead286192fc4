//! Raw post → lead record mapping.

use chrono::DateTime;

use crate::contacts::{join_contacts, ContactExtractor};
use crate::normalize::clean_text;
use crate::score::Scorer;
use crate::types::{LeadRecord, RawPost};

const TITLE_MAX: usize = 400;
const BODY_MAX: usize = 3000;

pub struct RecordBuilder {
    scorer: Scorer,
    extractor: ContactExtractor,
}

impl RecordBuilder {
    pub fn new(scorer: Scorer) -> Self {
        Self {
            scorer,
            extractor: ContactExtractor::new(),
        }
    }

    /// Build a lead from a raw post, or `None` when the post carries no id
    /// and can never be merged.
    ///
    /// Scoring and contact extraction run on the unnormalized combined
    /// title+body text; normalization would collapse punctuation runs that
    /// the phone pattern depends on. Display normalization happens after.
    pub fn build(&self, post: &RawPost) -> Option<LeadRecord> {
        if post.id.is_empty() {
            return None;
        }

        let combined = format!("{}\n\n{}", post.title, post.selftext);
        let (emails, phones) = self.extractor.extract(&combined);
        let score = self.scorer.score(&combined);

        Some(LeadRecord {
            id: post.id.clone(),
            created_utc: format_epoch(post.created_utc),
            subreddit: post.subreddit.clone(),
            title: clean_text(&post.title, TITLE_MAX),
            body: clean_text(&post.selftext, BODY_MAX),
            score,
            emails: join_contacts(&emails),
            phones: join_contacts(&phones),
            url: post.url.clone(),
            saved_at: String::new(),
        })
    }
}

/// Epoch seconds → ISO-8601 UTC, or empty when absent. Zero counts as
/// absent, matching the upstream feed's placeholder behavior.
fn format_epoch(epoch: Option<i64>) -> String {
    match epoch {
        Some(secs) if secs != 0 => DateTime::from_timestamp(secs, 0)
            .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S").to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}
