//! Condition-action rules and action execution.
//!
//! The rule table is a pure function of the internal state. Its checks run
//! in a fixed order, so every evaluation queries the knowledge base once,
//! then the sentiment feed once, then answers.

use tracing::debug;

use claimcheck_contracts::{
    action::{Action, ActionKind},
    state::InternalState,
};

use crate::sources::EvidenceSources;

/// Choose the next action from the internal state.
///
/// | knowledge      | sentiment      | action                 |
/// |----------------|----------------|------------------------|
/// | not queried    | *              | `QueryKnowledgeBase`   |
/// | queried        | not queried    | `QuerySentimentFeed`   |
/// | queried        | queried        | `ReturnAnswer`         |
pub fn rule_matching(internal: &InternalState) -> Action {
    let kind = if !internal.knowledge.is_queried() {
        ActionKind::QueryKnowledgeBase
    } else if !internal.sentiment.is_queried() {
        ActionKind::QuerySentimentFeed
    } else {
        ActionKind::ReturnAnswer
    };
    Action::new(kind)
}

/// Run `action` against the source its kind maps to.
///
/// Query kinds replace the source's stored bundle and record whether it came
/// back empty. `NoOp` and `ReturnAnswer` invoke nothing and keep their
/// outcome unset.
pub fn execute(action: &mut Action, sources: &mut EvidenceSources, scenario: &str) {
    let Some(source) = sources.for_kind_mut(action.kind()) else {
        return;
    };

    let (empty, total, supporting) = {
        let bundle = source.query(scenario);
        (bundle.is_empty(), bundle.total_count(), bundle.supporting_count())
    };
    debug!(
        source = %source.name(),
        scenario = %scenario,
        total,
        supporting,
        empty,
        "evidence source queried"
    );
    action.record_outcome(empty);
}
