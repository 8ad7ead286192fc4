//! Fetch sources for raw posts.
//!
//! `search_api` is the primary source: a keyword/subreddit/time-window
//! search endpoint. `subreddit_listing` is the credentialed fallback that
//! scans a subreddit's newest posts directly when a search query comes back
//! empty. Both normalize into [`crate::types::RawPost`] and both degrade to
//! an empty vec on failure instead of surfacing errors.

pub mod search_api;
pub mod subreddit_listing;

pub use search_api::SearchClient;
pub use subreddit_listing::ListingClient;
