//! # claimcheck-sources
//!
//! Reference evidence sources for the claimcheck agent.
//!
//! 1. **Knowledge base**: a fact table of labelled queries per scenario,
//!    loaded from JSON and validated against a bundled JSON Schema.
//! 2. **Sentiment feed**: short social-media posts fetched through a
//!    `FeedClient`, classified with a polarity lexicon.
//!
//! The bundled datasets are fictional and cover three scenarios. No external
//! API calls are made by the clients in this crate.

pub mod feed;
pub mod knowledge;
pub mod sentiment;

pub use feed::{FeedClient, Post, StaticFeed, UnavailableFeed};
pub use knowledge::KnowledgeBase;
pub use sentiment::{Sentiment, SentimentClassifier, SentimentFeed};
