//! # claimcheck-contracts
//!
//! Shared types, state records, and errors for the claimcheck agent.
//!
//! All crates in the workspace import from here. The only logic in this
//! crate is the handful of helpers that keep the state records consistent.

pub mod action;
pub mod error;
pub mod evidence;
pub mod execution;
pub mod state;

#[cfg(test)]
mod tests {
    use super::*;
    use action::{Action, ActionKind};
    use error::ClaimCheckError;
    use evidence::{EvidenceRecord, ResultBundle, Stance, TrustWeights};
    use execution::EvaluationId;
    use state::{EnvironmentState, InternalState, QueryStatus};

    fn records(names: &[&str]) -> Vec<EvidenceRecord> {
        names.iter().map(|n| EvidenceRecord::new(*n)).collect()
    }

    // ── Action ───────────────────────────────────────────────────────────────

    #[test]
    fn new_action_has_no_outcome() {
        for kind in [
            ActionKind::NoOp,
            ActionKind::QueryKnowledgeBase,
            ActionKind::QuerySentimentFeed,
            ActionKind::ReturnAnswer,
        ] {
            let action = Action::new(kind);
            assert_eq!(action.kind(), kind);
            assert_eq!(action.yielded_no_result(), None);
            assert!(!action.is_productive());
        }
    }

    #[test]
    fn query_action_records_outcome_once() {
        let mut action = Action::new(ActionKind::QueryKnowledgeBase);
        assert!(action.record_outcome(false));
        assert_eq!(action.yielded_no_result(), Some(false));
        assert!(action.is_productive());

        // A second outcome is ignored: the action is immutable after execution.
        assert!(!action.record_outcome(true));
        assert_eq!(action.yielded_no_result(), Some(false));
    }

    #[test]
    fn non_query_actions_never_record_an_outcome() {
        let mut noop = Action::default();
        let mut answer = Action::new(ActionKind::ReturnAnswer);

        assert!(!noop.record_outcome(true));
        assert!(!answer.record_outcome(false));
        assert_eq!(noop.yielded_no_result(), None);
        assert_eq!(answer.yielded_no_result(), None);
    }

    #[test]
    fn action_kind_display_names() {
        assert_eq!(ActionKind::QueryKnowledgeBase.to_string(), "query-knowledge-base");
        assert_eq!(ActionKind::ReturnAnswer.to_string(), "return-answer");
        assert!(ActionKind::QuerySentimentFeed.is_query());
        assert!(!ActionKind::NoOp.is_query());
    }

    // ── InternalState ────────────────────────────────────────────────────────

    #[test]
    fn internal_state_starts_not_queried() {
        let state = InternalState::default();
        assert_eq!(state.knowledge, QueryStatus::NotQueried);
        assert_eq!(state.sentiment, QueryStatus::NotQueried);
        assert_eq!(state.knowledge.as_code(), -1);
    }

    #[test]
    fn internal_state_records_each_source_independently() {
        let mut state = InternalState::default();

        state.record(ActionKind::QueryKnowledgeBase, true);
        assert_eq!(state.knowledge, QueryStatus::QueriedChanged);
        assert_eq!(state.sentiment, QueryStatus::NotQueried);

        state.record(ActionKind::QuerySentimentFeed, false);
        assert_eq!(state.knowledge, QueryStatus::QueriedChanged);
        assert_eq!(state.sentiment, QueryStatus::QueriedNoChange);
        assert_eq!(state.sentiment.as_code(), 0);
    }

    #[test]
    fn internal_state_never_regresses() {
        let mut state = InternalState::default();
        state.record(ActionKind::QueryKnowledgeBase, false);

        // Later records for an already-queried source are ignored.
        state.record(ActionKind::QueryKnowledgeBase, true);
        assert_eq!(state.knowledge, QueryStatus::QueriedNoChange);

        // Terminal and no-op actions touch nothing.
        state.record(ActionKind::ReturnAnswer, true);
        state.record(ActionKind::NoOp, true);
        assert_eq!(state.knowledge, QueryStatus::QueriedNoChange);
        assert_eq!(state.sentiment, QueryStatus::NotQueried);
    }

    #[test]
    fn environment_state_starts_at_zero() {
        let env = EnvironmentState::new("Sugar is good for people");
        assert_eq!(env.scenario, "Sugar is good for people");
        assert_eq!(env.veracity, 0.0);
    }

    // ── ResultBundle ─────────────────────────────────────────────────────────

    #[test]
    fn empty_bundle() {
        let bundle = ResultBundle::new();
        assert!(bundle.is_empty());
        assert_eq!(bundle.total_count(), 0);
        assert_eq!(bundle.supporting_count(), 0);
    }

    #[test]
    fn bundle_with_empty_label_is_not_empty() {
        let mut bundle = ResultBundle::new();
        bundle.insert(Stance::Supporting, "Young people are happy", vec![]);

        assert!(!bundle.is_empty());
        assert_eq!(bundle.total_count(), 0);
    }

    #[test]
    fn bundle_counts_records_per_group() {
        let mut bundle = ResultBundle::new();
        bundle.insert(Stance::Supporting, "a", records(&["x", "y"]));
        bundle.insert(Stance::Supporting, "b", records(&["z"]));
        bundle.insert(Stance::Contradicting, "c", records(&["w"]));
        bundle.push(Stance::Contradicting, "c", EvidenceRecord::new("v"));

        assert_eq!(bundle.supporting_count(), 3);
        assert_eq!(bundle.total_count(), 5);
        assert_eq!(bundle.labels(Stance::Supporting).collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(bundle.records(Stance::Contradicting, "c").map(<[_]>::len), Some(2));
        assert!(bundle.records(Stance::Supporting, "c").is_none());
    }

    #[test]
    fn bundle_serde_round_trips() {
        let mut bundle = ResultBundle::new();
        bundle.insert(Stance::Contradicting, "Sugar causes diabetes", records(&["sucrose"]));
        let json = serde_json::to_string(&bundle).unwrap();
        let decoded: ResultBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(bundle, decoded);
    }

    // ── TrustWeights ─────────────────────────────────────────────────────────

    #[test]
    fn default_trust_is_half() {
        let trust = TrustWeights::default();
        assert_eq!(trust.knowledge(), 0.5);
        assert_eq!(trust.sentiment(), 0.5);
    }

    #[test]
    fn trust_weights_reject_closed_bounds() {
        for (k, s) in [(0.0, 0.5), (1.0, 0.5), (0.5, 0.0), (0.5, 1.2), (f64::NAN, 0.5)] {
            match TrustWeights::new(k, s) {
                Err(ClaimCheckError::ConfigError { reason }) => {
                    assert!(reason.contains("trust weight"), "unexpected reason: {reason}");
                }
                other => panic!("expected ConfigError for ({k}, {s}), got {:?}", other),
            }
        }
        assert!(TrustWeights::new(0.9, 0.1).is_ok());
    }

    // ── EvaluationId ─────────────────────────────────────────────────────────

    #[test]
    fn evaluation_ids_are_unique() {
        let ids: std::collections::HashSet<String> =
            (0..50).map(|_| EvaluationId::new().0.to_string()).collect();
        assert_eq!(ids.len(), 50);
    }

    // ── ClaimCheckError display messages ─────────────────────────────────────

    #[test]
    fn error_source_unavailable_display() {
        let err = ClaimCheckError::SourceUnavailable {
            source_name: "sentiment-feed".to_string(),
            reason: "connection refused".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("sentiment-feed"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn error_dataset_invalid_display() {
        let err = ClaimCheckError::DatasetInvalid {
            reason: "missing field `scenarios`".to_string(),
        };
        assert!(err.to_string().contains("invalid evidence dataset"));
    }
}
