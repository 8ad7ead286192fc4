//! Run configuration: keyword/subreddit lists, weights, endpoints, delays.
//!
//! Everything is carried in an explicit immutable structure handed to the
//! collector and scorer at construction time, so tests can substitute
//! smaller fixtures instead of process-wide constants.

use std::time::Duration;

use crate::types::RedditCredentials;

pub const DEFAULT_OUTPUT_CSV: &str = "reddit_14d_leads.csv";

const SUBREDDITS: &[&str] = &[
    "forhire",
    "hireaprogrammer",
    "webdev",
    "entrepreneur",
    "smallbusiness",
    "startups",
    "marketing",
    "DesignJobs",
    "UXDesign",
    "freelance_forhire",
    "india",
];

const PRIMARY_KEYWORDS: &[&str] = &[
    "looking for developer",
    "looking for designer",
    "need a website",
    "need a web developer",
    "need an e-commerce",
    "need help with shopify",
    "looking to hire",
    "hiring a designer",
    "hiring a developer",
    "logo design",
    "brand strategy",
    "social media manager",
    "email marketing",
    "content strategy",
    "performance audit",
    "hire an agency",
];

const SECONDARY_KEYWORDS: &[&str] = &[
    "how much to make a website",
    "recommend an agency",
    "copywriter",
    "content writer",
    "who can build",
    "anyone build",
    "help building",
    "budget",
];

/// Keyword lists and additive weights for the relevance scorer.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub primary_keywords: Vec<String>,
    pub secondary_keywords: Vec<String>,
    pub primary_weight: i64,
    pub secondary_weight: i64,
    pub contact_weight: i64,
    pub locale_weight: i64,
    /// Substring whose presence earns the locale bonus.
    pub locale_marker: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            primary_keywords: PRIMARY_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            secondary_keywords: SECONDARY_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            primary_weight: 5,
            secondary_weight: 2,
            contact_weight: 5,
            locale_weight: 2,
            locale_marker: "india".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub subreddits: Vec<String>,
    pub scoring: ScoringConfig,
    /// Search endpoint for the primary fetcher.
    pub search_url: String,
    /// Page size per search query (endpoint caps at 200).
    pub page_size: u32,
    /// Retries after the first failed attempt.
    pub retries: u32,
    pub request_timeout: Duration,
    /// Pause after a successful primary query, to stay polite.
    pub query_delay: Duration,
    /// Pause after a fallback listing scan.
    pub fallback_delay: Duration,
    /// Collection window size, ending at run start.
    pub window_days: i64,
    /// Cap for the fallback listing scan.
    pub listing_limit: u32,
    pub user_agent: String,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            subreddits: SUBREDDITS.iter().map(|s| s.to_string()).collect(),
            scoring: ScoringConfig::default(),
            search_url: "https://api.pushshift.io/reddit/search/submission/".to_string(),
            page_size: 200,
            retries: 2,
            request_timeout: Duration::from_secs(30),
            query_delay: Duration::from_millis(600),
            fallback_delay: Duration::from_millis(400),
            window_days: 14,
            listing_limit: 200,
            user_agent: user_agent_from_env(),
        }
    }
}

/// User agent sent on every request; the listing endpoint requires one.
pub fn user_agent_from_env() -> String {
    std::env::var("REDDIT_USER_AGENT")
        .unwrap_or_else(|_| "reddit_fetch_14d:v1.0 (by u/unknown)".to_string())
}

/// Fallback credentials from the environment. `None` when either half is
/// missing, which disables the fallback fetcher for the whole run.
pub fn credentials_from_env() -> Option<RedditCredentials> {
    let client_id = std::env::var("REDDIT_CLIENT_ID").ok()?;
    let client_secret = std::env::var("REDDIT_CLIENT_SECRET").ok()?;
    if client_id.is_empty() || client_secret.is_empty() {
        return None;
    }
    Some(RedditCredentials {
        client_id,
        client_secret,
    })
}
