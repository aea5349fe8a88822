//! Evaluation identifiers, per-step trace records, and the evaluation result.
//!
//! `StepRecord` is written once per loop iteration. `Evaluation` is what
//! `Agent::evaluate_traced` hands back to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{action::ActionKind, state::InternalState};

/// Unique identifier for a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvaluationId(pub uuid::Uuid);

impl EvaluationId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for EvaluationId {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot taken after one iteration of the decision loop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepRecord {
    /// Zero-based iteration number.
    pub step: u64,
    /// The action executed in this iteration.
    pub action: ActionKind,
    /// Outcome recorded on the action; `None` for non-query actions.
    pub yielded_no_result: Option<bool>,
    /// Veracity after the environment state update.
    pub veracity: f64,
    /// Internal state the rule table matched on in this iteration.
    pub internal_state: InternalState,
    pub timestamp: DateTime<Utc>,
}

/// The full outcome of one call to `Agent::evaluate_traced`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Evaluation {
    pub id: EvaluationId,
    pub scenario: String,
    /// Final veracity.
    pub veracity: f64,
    /// Internal state when the loop terminated.
    pub internal_state: InternalState,
    /// One record per loop iteration, in order.
    pub steps: Vec<StepRecord>,
    /// The synthesized natural-language answer.
    pub answer: String,
}
