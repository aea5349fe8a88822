//! Environment and internal state records.
//!
//! Both are owned by a single evaluation run and rebuilt from scratch at the
//! start of every call to `Agent::evaluate`.

use serde::{Deserialize, Serialize};

use crate::action::ActionKind;

/// The claim under evaluation and the running veracity score.
///
/// Positive veracity leans "true", negative leans "false", and the
/// magnitude is the agent's confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentState {
    pub scenario: String,
    pub veracity: f64,
}

impl EnvironmentState {
    /// Start a new evaluation of `scenario` at veracity 0.
    pub fn new(scenario: impl Into<String>) -> Self {
        Self { scenario: scenario.into(), veracity: 0.0 }
    }
}

/// What the agent remembers about one evidence source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryStatus {
    #[default]
    NotQueried,
    /// Queried, but veracity did not move.
    QueriedNoChange,
    /// Queried and veracity moved.
    QueriedChanged,
}

impl QueryStatus {
    pub fn is_queried(self) -> bool {
        self != QueryStatus::NotQueried
    }

    /// Legacy `{-1, 0, 1}` encoding, used in log output.
    pub fn as_code(self) -> i8 {
        match self {
            QueryStatus::NotQueried => -1,
            QueryStatus::QueriedNoChange => 0,
            QueryStatus::QueriedChanged => 1,
        }
    }

    fn from_change(changed: bool) -> Self {
        if changed {
            QueryStatus::QueriedChanged
        } else {
            QueryStatus::QueriedNoChange
        }
    }
}

/// The agent's memo of which sources it has consulted and whether each
/// consultation changed the veracity. Drives rule matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct InternalState {
    pub knowledge: QueryStatus,
    pub sentiment: QueryStatus,
}

impl InternalState {
    /// Record the outcome of an executed action.
    ///
    /// A query action moves its source's status out of `NotQueried`; a source
    /// already queried keeps its status, so a field never regresses within
    /// one evaluation. `NoOp` and `ReturnAnswer` change nothing.
    pub fn record(&mut self, kind: ActionKind, veracity_changed: bool) {
        let slot = match kind {
            ActionKind::QueryKnowledgeBase => &mut self.knowledge,
            ActionKind::QuerySentimentFeed => &mut self.sentiment,
            ActionKind::NoOp | ActionKind::ReturnAnswer => return,
        };
        if !slot.is_queried() {
            *slot = QueryStatus::from_change(veracity_changed);
        }
    }
}
