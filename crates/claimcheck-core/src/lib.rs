//! # claimcheck-core
//!
//! The decision loop of the claimcheck agent.
//!
//! This crate provides:
//! - The `EvidenceSource` trait both collaborators implement
//! - `EvidenceSources`, the dispatch map from action kind to source
//! - The condition-action rule table and action execution
//! - The `Agent` that runs the loop and aggregates trust-weighted confidence
//! - Answer synthesis from the final veracity
//!
//! ## Usage
//!
//! ```rust,ignore
//! use claimcheck_core::Agent;
//!
//! let mut agent = Agent::new(Box::new(knowledge_base), Box::new(sentiment_feed));
//! println!("{}", agent.evaluate("Healthy people are happy"));
//! ```

pub mod agent;
pub mod answer;
pub mod rules;
pub mod sources;
pub mod traits;

pub use agent::Agent;
pub use sources::EvidenceSources;
pub use traits::EvidenceSource;
