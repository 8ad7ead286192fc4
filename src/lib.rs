//! Reddit lead collection pipeline.
//!
//! Fetches recent posts from a fixed set of subreddits, scores them against
//! commercial keyword lists, extracts contact info, and persists a
//! deduplicated table sorted by score for review in the viewer.

pub mod collector;
pub mod config;
pub mod contacts;
pub mod normalize;
pub mod record;
pub mod score;
pub mod scrapers;
pub mod storage;
pub mod types;

pub use types::*;
