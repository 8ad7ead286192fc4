//! Fallback fetcher: direct newest-posts listing for one subreddit.
//!
//! Used only when a primary search query comes back empty and credentials
//! are configured. The client authenticates once at startup with an
//! app-only token; any error during a scan is logged and degrades to zero
//! results for that subreddit.

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::types::{RawPost, RedditCredentials};

const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";
const OAUTH_BASE: &str = "https://oauth.reddit.com";

pub struct ListingClient {
    http: reqwest::blocking::Client,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct Listing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: ListingPost,
}

#[derive(Debug, Deserialize)]
struct ListingPost {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    selftext: String,
    created_utc: Option<f64>,
    #[serde(default)]
    subreddit: String,
    #[serde(default)]
    permalink: String,
}

impl ListingClient {
    /// Exchange credentials for an app-only token. Called once at startup;
    /// a failure here disables the fallback for the whole run.
    pub fn new(creds: &RedditCredentials, user_agent: &str) -> Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(user_agent.to_string())
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .context("failed to build listing http client")?;

        let resp = http
            .post(TOKEN_URL)
            .basic_auth(&creds.client_id, Some(&creds.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .context("token request failed")?
            .error_for_status()
            .context("token request rejected")?;

        let token: TokenResponse = resp.json().context("token response unreadable")?;

        Ok(Self {
            http,
            access_token: token.access_token,
        })
    }

    /// Newest posts in `subreddit`, capped at `limit`, filtered to the
    /// window start. Never fails: scan errors become an empty vec.
    pub fn scan(&self, subreddit: &str, after_epoch: i64, limit: u32) -> Vec<RawPost> {
        match self.scan_inner(subreddit, after_epoch, limit) {
            Ok(posts) => {
                debug!(subreddit, items = posts.len(), "listing scan ok");
                posts
            }
            Err(e) => {
                warn!(subreddit, error = %e, "listing scan failed");
                vec![]
            }
        }
    }

    fn scan_inner(&self, subreddit: &str, after_epoch: i64, limit: u32) -> Result<Vec<RawPost>> {
        let url = format!("{}/r/{}/new", OAUTH_BASE, subreddit);
        let listing: Listing = self
            .http
            .get(&url)
            .bearer_auth(&self.access_token)
            .query(&[("limit", limit.to_string()), ("raw_json", "1".to_string())])
            .send()
            .with_context(|| format!("listing request for r/{} failed", subreddit))?
            .error_for_status()
            .with_context(|| format!("listing request for r/{} rejected", subreddit))?
            .json()
            .with_context(|| format!("listing for r/{} unreadable", subreddit))?;

        Ok(listing
            .data
            .children
            .into_iter()
            .map(|child| child.data.into_raw_post())
            .filter(|post| post.created_utc.map_or(false, |t| t >= after_epoch))
            .collect())
    }
}

impl ListingPost {
    fn into_raw_post(self) -> RawPost {
        RawPost {
            id: self.id,
            title: self.title,
            selftext: self.selftext,
            created_utc: self.created_utc.map(|t| t as i64),
            subreddit: self.subreddit,
            url: format!("https://reddit.com{}", self.permalink),
        }
    }
}
