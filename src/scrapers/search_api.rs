//! Primary fetcher: keyword search over a submissions endpoint.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::CollectorConfig;
use crate::types::RawPost;

pub struct SearchClient {
    http: reqwest::blocking::Client,
    search_url: String,
    page_size: u32,
    retries: u32,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<SearchItem>,
}

/// Item shape exposed by the search endpoint. Everything is optional; posts
/// without an id are dropped later at the record-builder boundary.
#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    selftext: String,
    created_utc: Option<f64>,
    #[serde(default)]
    subreddit: String,
    full_link: Option<String>,
    url: Option<String>,
    permalink: Option<String>,
}

impl SearchItem {
    fn into_raw_post(self) -> RawPost {
        let url = self
            .full_link
            .filter(|s| !s.is_empty())
            .or_else(|| self.url.filter(|s| !s.is_empty()))
            .unwrap_or_else(|| {
                format!("https://reddit.com{}", self.permalink.unwrap_or_default())
            });
        RawPost {
            id: self.id,
            title: self.title,
            selftext: self.selftext,
            created_utc: self.created_utc.map(|t| t as i64),
            subreddit: self.subreddit,
            url,
        }
    }
}

impl SearchClient {
    pub fn new(config: &CollectorConfig) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| reqwest::blocking::Client::new());

        Self {
            http,
            search_url: config.search_url.clone(),
            page_size: config.page_size,
            retries: config.retries,
        }
    }

    /// Query one (keyword, subreddit) pair over the inclusive time window,
    /// newest first.
    ///
    /// Non-success responses and transport errors are retried with linearly
    /// growing backoff; once the budget is spent the result is an empty vec.
    /// Callers cannot tell "no matching posts" from "endpoint down" — the
    /// fallback trigger relies on exactly that conflation.
    pub fn fetch(
        &self,
        keyword: &str,
        subreddit: &str,
        after_epoch: i64,
        before_epoch: i64,
    ) -> Vec<RawPost> {
        let params = [
            ("q", keyword.to_string()),
            ("subreddit", subreddit.to_string()),
            ("size", self.page_size.to_string()),
            ("after", after_epoch.to_string()),
            ("before", before_epoch.to_string()),
            ("sort", "desc".to_string()),
        ];

        let mut attempt: u32 = 0;
        loop {
            match self.http.get(&self.search_url).query(&params).send() {
                Ok(resp) if resp.status().is_success() => {
                    match resp.json::<SearchResponse>() {
                        Ok(body) => {
                            debug!(keyword, subreddit, items = body.data.len(), "search ok");
                            return body
                                .data
                                .into_iter()
                                .map(SearchItem::into_raw_post)
                                .collect();
                        }
                        Err(e) => {
                            warn!(keyword, subreddit, error = %e, "search response unreadable");
                        }
                    }
                }
                Ok(resp) => {
                    warn!(keyword, subreddit, status = %resp.status(), "search returned non-success");
                }
                Err(e) => {
                    warn!(keyword, subreddit, error = %e, "search request failed");
                }
            }

            if attempt >= self.retries {
                return vec![];
            }
            attempt += 1;
            std::thread::sleep(Duration::from_secs(attempt as u64));
        }
    }
}
