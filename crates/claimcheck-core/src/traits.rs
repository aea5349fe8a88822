//! The evidence source contract.
//!
//! The agent consults exactly two sources per evaluation. Each is a stateful
//! cache of its latest query: `query` replaces the stored bundle, and
//! `confidence`/`explain` interpret whatever bundle is currently stored.

use claimcheck_contracts::evidence::ResultBundle;

/// A collaborator that can look up evidence for a scenario.
///
/// Implementations are consulted one at a time from a single thread, but
/// must be `Send` so an agent can be moved between threads between
/// evaluations.
pub trait EvidenceSource: Send {
    /// Short stable name, used in logs.
    fn name(&self) -> &str;

    /// Fetch evidence for `scenario`, store it, and return the stored bundle.
    ///
    /// Must not fail. A source that cannot complete its lookup stores and
    /// returns an empty bundle, optionally logging why.
    fn query(&mut self, scenario: &str) -> &ResultBundle;

    /// Interpretation of the stored bundle in [-1, 1].
    ///
    /// Negative leans "false", positive leans "true", magnitude is certainty.
    /// Returns 0 when nothing was found.
    fn confidence(&self) -> f64;

    /// Natural-language rationale for the stored bundle, phrased for a
    /// conclusion that is positive (`true`) or negative (`false`).
    ///
    /// Must produce a fixed "did not help" message for an empty bundle.
    fn explain(&self, positive: bool) -> String;
}
