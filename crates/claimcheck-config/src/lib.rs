//! # claimcheck-config
//!
//! TOML configuration for the claimcheck agent.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use claimcheck_config::ClaimCheckConfig;
//!
//! let config = ClaimCheckConfig::from_file(Path::new("claimcheck.toml"))?;
//! let agent = agent.with_trust(config.trust_weights()?);
//! ```

pub mod loader;
pub mod settings;

pub use settings::{ClaimCheckConfig, FeedSettings, KnowledgeSettings, TrustSettings};

// ── Tests ─────────────────────────────────────────────────────────────────────
