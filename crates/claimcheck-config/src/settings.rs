//! Configuration schema.
//!
//! Every section and every field is optional; a missing value takes the
//! default shown in the example below.
//!
//! ```toml
//! [trust]
//! knowledge = 0.5
//! sentiment = 0.5
//!
//! [feed]
//! max_posts = 10
//!
//! [knowledge]
//! dataset = "data/knowledge.json"
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How much each evidence source's confidence counts toward veracity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrustSettings {
    pub knowledge: f64,
    pub sentiment: f64,
}

impl Default for TrustSettings {
    fn default() -> Self {
        Self { knowledge: 0.5, sentiment: 0.5 }
    }
}

/// Tuning for the sentiment feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FeedSettings {
    /// Posts requested per search.
    pub max_posts: usize,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self { max_posts: 10 }
    }
}

/// Where the knowledge base loads its facts from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KnowledgeSettings {
    /// JSON dataset to load instead of the bundled one.
    pub dataset: Option<PathBuf>,
}

/// The top-level structure deserialized from a TOML config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClaimCheckConfig {
    pub trust: TrustSettings,
    pub feed: FeedSettings,
    pub knowledge: KnowledgeSettings,
}
