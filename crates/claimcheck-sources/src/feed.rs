//! Social-media feed clients.
//!
//! A `FeedClient` fetches short posts for a search query. The sentiment
//! source depends only on this trait, so a live API client can be slotted in
//! without touching classification or scoring.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use claimcheck_contracts::error::{ClaimCheckError, ClaimCheckResult};

/// The fictional feed shipped with the crate.
const BUNDLED_POSTS: &str = include_str!("../data/posts.json");

/// A short post as returned by a feed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub text: String,
    /// How often the post was shared. Shared posts can appear more than
    /// once in a single search result.
    #[serde(default)]
    pub repost_count: u32,
}

/// Something that can search a social-media feed.
pub trait FeedClient: Send {
    fn name(&self) -> &str;

    /// Return up to `count` posts matching `query`.
    fn search(&self, query: &str, count: usize) -> ClaimCheckResult<Vec<Post>>;
}

#[derive(Debug, Deserialize)]
struct FeedDocument {
    feeds: Vec<FeedEntry>,
}

#[derive(Debug, Deserialize)]
struct FeedEntry {
    query: String,
    posts: Vec<Post>,
}

/// An offline feed answering exact-match queries from a JSON document.
#[derive(Debug, Clone, Default)]
pub struct StaticFeed {
    posts: HashMap<String, Vec<Post>>,
}

impl StaticFeed {
    /// The fictional posts bundled with this crate.
    pub fn bundled() -> ClaimCheckResult<Self> {
        Self::from_json_str(BUNDLED_POSTS)
    }

    /// Parse a `{ "feeds": [ { "query": …, "posts": [ … ] } ] }` document.
    pub fn from_json_str(s: &str) -> ClaimCheckResult<Self> {
        let document: FeedDocument = serde_json::from_str(s).map_err(|e| ClaimCheckError::DatasetInvalid {
            reason: format!("failed to parse feed JSON: {e}"),
        })?;
        let posts = document
            .feeds
            .into_iter()
            .map(|entry| (entry.query, entry.posts))
            .collect();
        Ok(Self { posts })
    }

    /// Add posts for `query`, after any already present.
    pub fn with_posts(mut self, query: impl Into<String>, posts: Vec<Post>) -> Self {
        self.posts.entry(query.into()).or_default().extend(posts);
        self
    }
}

impl FeedClient for StaticFeed {
    fn name(&self) -> &str {
        "static-feed"
    }

    fn search(&self, query: &str, count: usize) -> ClaimCheckResult<Vec<Post>> {
        let found: Vec<Post> = self
            .posts
            .get(query)
            .map(|posts| posts.iter().take(count).cloned().collect())
            .unwrap_or_default();
        debug!(query = %query, count, found = found.len(), "static feed searched");
        Ok(found)
    }
}

/// A feed that is never reachable, e.g. when no credentials are configured.
#[derive(Debug, Clone)]
pub struct UnavailableFeed {
    reason: String,
}

impl UnavailableFeed {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl FeedClient for UnavailableFeed {
    fn name(&self) -> &str {
        "unavailable-feed"
    }

    fn search(&self, _query: &str, _count: usize) -> ClaimCheckResult<Vec<Post>> {
        Err(ClaimCheckError::SourceUnavailable {
            source_name: self.name().to_string(),
            reason: self.reason.clone(),
        })
    }
}
