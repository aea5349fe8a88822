//! Error types for the claimcheck agent.
//!
//! The decision loop itself never fails. Errors surface only from the
//! collaborators around it: configuration, dataset loading, and the feed
//! clients behind the sentiment source.

use thiserror::Error;

/// The unified error type for the claimcheck crates.
#[derive(Debug, Error)]
pub enum ClaimCheckError {
    /// A required configuration value is missing or invalid.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },

    /// A bundled or user-supplied evidence dataset failed to load or validate.
    #[error("invalid evidence dataset: {reason}")]
    DatasetInvalid { reason: String },

    /// An evidence source could not reach its backing service.
    ///
    /// Sources catch this internally and degrade to an empty result bundle;
    /// it never reaches the caller of `Agent::evaluate`.
    #[error("evidence source '{source_name}' unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },
}

/// Convenience alias used throughout the claimcheck crates.
pub type ClaimCheckResult<T> = Result<T, ClaimCheckError>;
