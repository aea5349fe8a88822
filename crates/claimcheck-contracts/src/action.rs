//! Action kinds and the per-step action record.
//!
//! `ActionKind` is a closed set of variants with no behavior attached. The
//! mapping from a kind to the evidence source it consults lives in
//! `claimcheck-core`, keeping the enumeration a plain tag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four things the agent can do in one step of its loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionKind {
    NoOp,
    QueryKnowledgeBase,
    QuerySentimentFeed,
    ReturnAnswer,
}

impl ActionKind {
    /// True for the two kinds that consult an evidence source.
    pub fn is_query(self) -> bool {
        matches!(self, ActionKind::QueryKnowledgeBase | ActionKind::QuerySentimentFeed)
    }

    /// Stable short name used in logs and traces.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionKind::NoOp => "no-op",
            ActionKind::QueryKnowledgeBase => "query-knowledge-base",
            ActionKind::QuerySentimentFeed => "query-sentiment-feed",
            ActionKind::ReturnAnswer => "return-answer",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One step of the decision loop.
///
/// `yielded_no_result` is tri-state:
/// - `None` until the action is executed, and forever for `NoOp`/`ReturnAnswer`
/// - `Some(false)` when the consulted source returned a non-empty bundle
/// - `Some(true)` when it returned an empty one
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    kind: ActionKind,
    yielded_no_result: Option<bool>,
}

impl Action {
    /// A fresh, not yet executed action of the given kind.
    pub fn new(kind: ActionKind) -> Self {
        Self { kind, yielded_no_result: None }
    }

    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    pub fn yielded_no_result(&self) -> Option<bool> {
        self.yielded_no_result
    }

    /// True once a query action has been executed and its source produced
    /// a non-empty bundle.
    pub fn is_productive(&self) -> bool {
        self.yielded_no_result == Some(false)
    }

    /// Record the emptiness of the bundle the consulted source returned.
    ///
    /// Only query actions carry an outcome, and it can be recorded once.
    /// Any other call leaves the action untouched and returns `false`.
    pub fn record_outcome(&mut self, bundle_is_empty: bool) -> bool {
        if !self.kind.is_query() || self.yielded_no_result.is_some() {
            return false;
        }
        self.yielded_no_result = Some(bundle_is_empty);
        true
    }
}

impl Default for Action {
    fn default() -> Self {
        Self::new(ActionKind::NoOp)
    }
}
