//! Collection orchestrator.
//!
//! Walks the subreddit × keyword grid sequentially, merges everything into
//! one id-keyed map (last write wins), then sorts, stamps and writes the
//! batch. Per-query failures are absorbed by the fetchers; the only error
//! that can surface from a run is the final table write.

use std::collections::HashSet;
use std::path::Path;

use anyhow::Result;
use chrono::{Duration as ChronoDuration, Utc};
use indexmap::IndexMap;
use tracing::{debug, info};

use crate::config::CollectorConfig;
use crate::record::RecordBuilder;
use crate::score::Scorer;
use crate::scrapers::{ListingClient, SearchClient};
use crate::storage;
use crate::types::{LeadRecord, RawPost, RunSummary};

pub struct Collector {
    config: CollectorConfig,
    search: SearchClient,
    listing: Option<ListingClient>,
    builder: RecordBuilder,
}

/// Merge built records into the map, keyed by post id.
///
/// A repeated id fully replaces the earlier record (last-write-wins, not
/// score-max-wins) while keeping its first-insertion position, which is what
/// makes the later stable sort's tie-break deterministic. Posts the builder
/// rejects (no id) are dropped silently.
pub fn merge_posts(
    map: &mut IndexMap<String, LeadRecord>,
    posts: &[RawPost],
    builder: &RecordBuilder,
) {
    for post in posts {
        if let Some(record) = builder.build(post) {
            map.insert(record.id.clone(), record);
        }
    }
}

/// Sort descending by score (stable: equal scores keep insertion order) and
/// stamp every record with the shared batch timestamp.
pub fn finalize_batch(map: IndexMap<String, LeadRecord>, saved_at: &str) -> Vec<LeadRecord> {
    let mut records: Vec<LeadRecord> = map.into_values().collect();
    records.sort_by(|a, b| b.score.cmp(&a.score));
    for record in &mut records {
        record.saved_at = saved_at.to_string();
    }
    records
}

impl Collector {
    pub fn new(config: CollectorConfig, listing: Option<ListingClient>) -> Self {
        let search = SearchClient::new(&config);
        let builder = RecordBuilder::new(Scorer::new(config.scoring.clone()));
        Self {
            config,
            search,
            listing,
            builder,
        }
    }

    /// One full collection run. Returns the summary counters; `Err` only
    /// when the output table cannot be written.
    pub fn run(&self, out_path: &Path) -> Result<RunSummary> {
        let now = Utc::now();
        let after_epoch = (now - ChronoDuration::days(self.config.window_days)).timestamp();
        let before_epoch = now.timestamp();

        info!(
            window_days = self.config.window_days,
            after_epoch,
            before_epoch,
            subreddits = self.config.subreddits.len(),
            keywords = self.config.scoring.primary_keywords.len(),
            fallback = self.listing.is_some(),
            "starting collection run"
        );

        let mut merged: IndexMap<String, LeadRecord> = IndexMap::new();
        let mut summary = RunSummary::default();
        // Each subreddit gets at most one fallback scan per run; re-scanning
        // the same listing for every empty keyword query merges identical ids.
        let mut fallback_scanned: HashSet<String> = HashSet::new();

        for subreddit in &self.config.subreddits {
            for keyword in &self.config.scoring.primary_keywords {
                let posts =
                    self.search
                        .fetch(keyword, subreddit, after_epoch, before_epoch);

                if !posts.is_empty() {
                    info!(subreddit, keyword, items = posts.len(), "primary query hit");
                    summary.primary_queries += 1;
                    merge_posts(&mut merged, &posts, &self.builder);
                    std::thread::sleep(self.config.query_delay);
                    continue;
                }

                match &self.listing {
                    Some(listing) if fallback_scanned.insert(subreddit.clone()) => {
                        info!(subreddit, keyword, "primary empty, scanning listing");
                        let fallback =
                            listing.scan(subreddit, after_epoch, self.config.listing_limit);
                        summary.fallback_scans += 1;
                        merge_posts(&mut merged, &fallback, &self.builder);
                        std::thread::sleep(self.config.fallback_delay);
                    }
                    Some(_) => {
                        debug!(subreddit, keyword, "primary empty, listing already scanned");
                    }
                    None => {
                        debug!(subreddit, keyword, "primary empty, no fallback configured");
                    }
                }
            }
        }

        summary.total_unique = merged.len();

        if merged.is_empty() {
            info!("no records found in the window; leaving previous table untouched");
            return Ok(summary);
        }

        let saved_at = Utc::now().to_rfc3339();
        let records = finalize_batch(merged, &saved_at);
        storage::save_leads(out_path, &records)?;
        summary.wrote_file = true;

        info!(
            total_unique = summary.total_unique,
            primary_queries = summary.primary_queries,
            fallback_scans = summary.fallback_scans,
            path = %out_path.display(),
            "collection run complete"
        );
        Ok(summary)
    }
}
