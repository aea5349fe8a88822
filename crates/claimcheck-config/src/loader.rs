//! Loading and validating a `ClaimCheckConfig`.
//!
//! Parsing is strict: unknown keys, out-of-range trust weights, and a zero
//! post limit are all `ConfigError`s. Deciding what to do about a bad config
//! is left to the caller.

use std::path::Path;

use tracing::debug;

use claimcheck_contracts::{
    error::{ClaimCheckError, ClaimCheckResult},
    evidence::TrustWeights,
};

use crate::settings::ClaimCheckConfig;

impl ClaimCheckConfig {
    /// Parse `s` as TOML and validate the result.
    pub fn from_toml_str(s: &str) -> ClaimCheckResult<Self> {
        let config: ClaimCheckConfig = toml::from_str(s).map_err(|e| ClaimCheckError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })?;
        config.validate()?;
        debug!(
            knowledge_trust = config.trust.knowledge,
            sentiment_trust = config.trust.sentiment,
            max_posts = config.feed.max_posts,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Read the file at `path` and parse it as TOML configuration.
    pub fn from_file(path: &Path) -> ClaimCheckResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ClaimCheckError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// The configured trust weights, validated.
    pub fn trust_weights(&self) -> ClaimCheckResult<TrustWeights> {
        TrustWeights::new(self.trust.knowledge, self.trust.sentiment)
    }

    fn validate(&self) -> ClaimCheckResult<()> {
        self.trust_weights()?;
        if self.feed.max_posts == 0 {
            return Err(ClaimCheckError::ConfigError {
                reason: "feed.max_posts must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
