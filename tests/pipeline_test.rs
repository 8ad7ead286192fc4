//! End-to-end pipeline tests: build → merge → sort → persist → reload.
//! Network-dependent paths run against an unroutable local endpoint so a
//! failed primary fetch degrades exactly like production.

use std::time::Duration;

use indexmap::IndexMap;

use reddit_leads::collector::{self, Collector};
use reddit_leads::config::{CollectorConfig, ScoringConfig};
use reddit_leads::record::RecordBuilder;
use reddit_leads::score::Scorer;
use reddit_leads::storage;
use reddit_leads::types::RawPost;

fn builder() -> RecordBuilder {
    RecordBuilder::new(Scorer::new(ScoringConfig::default()))
}

fn raw_post(id: &str, title: &str, selftext: &str) -> RawPost {
    RawPost {
        id: id.to_string(),
        title: title.to_string(),
        selftext: selftext.to_string(),
        created_utc: Some(1_724_900_000),
        subreddit: "forhire".to_string(),
        url: format!("https://reddit.com/r/forhire/comments/{}", id),
    }
}

/// Config whose every fetch fails fast: one grid cell, zero retries, and a
/// search endpoint on the discard port.
fn offline_config() -> CollectorConfig {
    let mut config = CollectorConfig::default();
    config.subreddits = vec!["forhire".to_string()];
    config.scoring.primary_keywords = vec!["need a website".to_string()];
    config.search_url = "http://127.0.0.1:9/search".to_string();
    config.retries = 0;
    config.request_timeout = Duration::from_millis(300);
    config.query_delay = Duration::from_millis(0);
    config.fallback_delay = Duration::from_millis(0);
    config
}

#[test]
fn full_pipeline_round_trip() {
    let b = builder();
    let mut merged = IndexMap::new();

    collector::merge_posts(
        &mut merged,
        &[
            raw_post("p1", "hello world", "nothing commercial"),
            raw_post(
                "p2",
                "Looking for developer",
                "Based in India, mail a@b.com or call 9876543210",
            ),
            raw_post("p3", "what's a fair budget", "for a logo redesign"),
        ],
        &b,
    );

    let records = collector::finalize_batch(merged, "2025-08-30T12:00:00+00:00");
    assert_eq!(records.len(), 3);
    // p2: keyword + contact + locale; p3: secondary keyword; p1: nothing.
    assert_eq!(records[0].id, "p2");
    assert!(records[0].score >= 12);
    assert_eq!(records[2].id, "p1");
    assert_eq!(records[2].score, 0);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leads.csv");
    storage::save_leads(&path, &records).unwrap();
    let loaded = storage::load_leads(&path).unwrap();

    assert_eq!(loaded.len(), records.len());
    for (saved, read) in records.iter().zip(&loaded) {
        assert_eq!(saved.id, read.id);
        assert_eq!(saved.created_utc, read.created_utc);
        assert_eq!(saved.title, read.title);
        assert_eq!(saved.body, read.body);
        assert_eq!(saved.score, read.score);
        assert_eq!(saved.url, read.url);
        assert_eq!(saved.saved_at, read.saved_at);
        assert_eq!(saved.email_set(), read.email_set());
        assert_eq!(saved.phone_set(), read.phone_set());
    }
}

#[test]
fn later_source_overwrites_earlier_on_same_id() {
    let b = builder();
    let mut merged = IndexMap::new();

    // First seen through the primary source with strong signal, then again
    // through the fallback with an edited, weaker body.
    collector::merge_posts(
        &mut merged,
        &[raw_post("same", "need a web developer", "contact a@b.com")],
        &b,
    );
    let strong_score = merged["same"].score;
    collector::merge_posts(&mut merged, &[raw_post("same", "edited post", "")], &b);

    assert_eq!(merged.len(), 1);
    assert!(merged["same"].score < strong_score);
    assert_eq!(merged["same"].title, "edited post");
}

#[test]
fn posts_without_id_are_dropped_before_merge() {
    let b = builder();
    let mut merged = IndexMap::new();
    collector::merge_posts(
        &mut merged,
        &[raw_post("", "need a website", ""), raw_post("kept", "hi", "")],
        &b,
    );
    assert_eq!(merged.len(), 1);
    assert!(merged.contains_key("kept"));
}

#[test]
fn sort_is_stable_for_equal_scores() {
    let b = builder();
    let mut merged = IndexMap::new();
    collector::merge_posts(
        &mut merged,
        &[
            raw_post("a", "plain one", ""),
            raw_post("b", "plain two", ""),
            raw_post("c", "plain three", ""),
        ],
        &b,
    );

    let records = collector::finalize_batch(merged, "");
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn run_with_zero_results_writes_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("leads.csv");

    let summary = Collector::new(offline_config(), None).run(&out).unwrap();

    assert_eq!(summary.total_unique, 0);
    assert_eq!(summary.primary_queries, 0);
    assert_eq!(summary.fallback_scans, 0);
    assert!(!summary.wrote_file);
    assert!(!out.exists());
}

#[test]
fn run_with_zero_results_leaves_previous_table_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("leads.csv");

    let b = builder();
    let mut merged = IndexMap::new();
    collector::merge_posts(&mut merged, &[raw_post("old", "need a website", "")], &b);
    let previous = collector::finalize_batch(merged, "2025-08-29T00:00:00+00:00");
    storage::save_leads(&out, &previous).unwrap();
    let before = std::fs::read_to_string(&out).unwrap();

    let summary = Collector::new(offline_config(), None).run(&out).unwrap();

    assert!(!summary.wrote_file);
    assert_eq!(std::fs::read_to_string(&out).unwrap(), before);
}
