use serde::{Deserialize, Serialize};

/// A post as returned by either fetch source, normalized to a common shape
/// before entering the pipeline. Transient: consumed within one fetch call.
#[derive(Debug, Clone, Default)]
pub struct RawPost {
    pub id: String,
    pub title: String,
    pub selftext: String,
    pub created_utc: Option<i64>,
    pub subreddit: String,
    pub url: String,
}

/// One scored lead, immutable once built. `saved_at` stays empty until the
/// collector stamps the whole batch at write time.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeadRecord {
    pub id: String,
    pub created_utc: String,
    pub subreddit: String,
    pub title: String,
    pub body: String,
    pub score: i64,
    pub emails: String,
    pub phones: String,
    pub url: String,
    #[serde(default)]
    pub saved_at: String,
}

impl LeadRecord {
    /// Emails as a set; the `;`-joined serialization order is unspecified.
    pub fn email_set(&self) -> std::collections::HashSet<&str> {
        self.emails.split(';').filter(|s| !s.is_empty()).collect()
    }

    pub fn phone_set(&self) -> std::collections::HashSet<&str> {
        self.phones.split(';').filter(|s| !s.is_empty()).collect()
    }
}

/// End-of-run counters reported by the collector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total_unique: usize,
    pub primary_queries: usize,
    pub fallback_scans: usize,
    pub wrote_file: bool,
}

/// Credentials for the fallback listing endpoint. Absence disables the
/// fallback fetcher entirely but never blocks the primary fetcher.
#[derive(Debug, Clone)]
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: String,
}
