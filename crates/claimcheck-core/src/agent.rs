//! The claimcheck agent: the condition-action decision loop.
//!
//! Every evaluation runs the same state machine:
//!
//!   Start → [update internal → match rule → execute → update veracity]* → Done
//!
//! All per-evaluation state lives in a `Run` that is created when
//! `evaluate` is called and dropped when it returns, so an `Agent` carries
//! nothing from one evaluation into the next except its sources and its
//! trust weights.

use chrono::Utc;
use tracing::{debug, info};

use claimcheck_contracts::{
    action::{Action, ActionKind},
    evidence::TrustWeights,
    execution::{Evaluation, EvaluationId, StepRecord},
    state::{EnvironmentState, InternalState},
};

use crate::{
    answer::construct_answer,
    rules::{execute, rule_matching},
    sources::EvidenceSources,
    traits::EvidenceSource,
};

/// A claim-verification agent over a knowledge base and a sentiment feed.
///
/// Not safe for concurrent evaluations: `evaluate` takes `&mut self`, and
/// each evaluation replaces the bundles cached inside both sources.
pub struct Agent {
    sources: EvidenceSources,
    trust: TrustWeights,
}

impl Agent {
    /// Create an agent with the default trust weights (0.5 / 0.5).
    pub fn new(knowledge: Box<dyn EvidenceSource>, sentiment: Box<dyn EvidenceSource>) -> Self {
        Self {
            sources: EvidenceSources::new(knowledge, sentiment),
            trust: TrustWeights::default(),
        }
    }

    /// Replace the trust weights.
    pub fn with_trust(mut self, trust: TrustWeights) -> Self {
        self.trust = trust;
        self
    }

    pub fn trust(&self) -> TrustWeights {
        self.trust
    }

    pub fn sources(&self) -> &EvidenceSources {
        &self.sources
    }

    /// Decide whether `scenario` is more likely true or false and explain why.
    pub fn evaluate(&mut self, scenario: &str) -> String {
        self.evaluate_traced(scenario).answer
    }

    /// Like [`evaluate`](Self::evaluate), but also returns the final veracity
    /// and one trace record per loop iteration.
    pub fn evaluate_traced(&mut self, scenario: &str) -> Evaluation {
        let id = EvaluationId::new();
        let mut run = Run::start(scenario);
        let mut steps = Vec::new();

        while run.recent_action.kind() != ActionKind::ReturnAnswer || run.starting_state {
            run.update_internal_state();
            let matched_on = run.internal;

            let mut action = rule_matching(&run.internal);
            execute(&mut action, &mut self.sources, &run.environment.scenario);
            run.recent_action = action;
            run.update_environment_state(&self.sources, self.trust);
            run.starting_state = false;

            let record = StepRecord {
                step: steps.len() as u64,
                action: run.recent_action.kind(),
                yielded_no_result: run.recent_action.yielded_no_result(),
                veracity: run.environment.veracity,
                internal_state: matched_on,
                timestamp: Utc::now(),
            };
            debug!(
                evaluation_id = %id.0,
                step = record.step,
                recent_action = %record.action,
                veracity = record.veracity,
                knowledge_queried = matched_on.knowledge.as_code(),
                sentiment_queried = matched_on.sentiment.as_code(),
                "agent step"
            );
            steps.push(record);
        }

        let positive = run.environment.veracity > 0.0;
        let knowledge_explanation = self.sources.knowledge().explain(positive);
        let sentiment_explanation = self.sources.sentiment().explain(positive);
        let answer = construct_answer(&run.environment, &knowledge_explanation, &sentiment_explanation);

        info!(
            evaluation_id = %id.0,
            scenario = %run.environment.scenario,
            veracity = run.environment.veracity,
            steps = steps.len(),
            "evaluation complete"
        );

        Evaluation {
            id,
            scenario: run.environment.scenario,
            veracity: run.environment.veracity,
            internal_state: run.internal,
            steps,
            answer,
        }
    }
}

/// Mutable state for a single evaluation.
struct Run {
    environment: EnvironmentState,
    internal: InternalState,
    previous_veracity: f64,
    recent_action: Action,
    /// True until the first iteration completes; there is no prior action
    /// to learn from before that.
    starting_state: bool,
}

impl Run {
    fn start(scenario: &str) -> Self {
        Self {
            environment: EnvironmentState::new(scenario),
            internal: InternalState::default(),
            previous_veracity: 0.0,
            recent_action: Action::default(),
            starting_state: true,
        }
    }

    /// Fold the recent action's effect on veracity into the internal state.
    ///
    /// "Changed" is exact inequality: a contribution that is exactly zero is
    /// recorded the same way as an empty bundle.
    fn update_internal_state(&mut self) {
        if self.starting_state {
            return;
        }
        let changed = self.environment.veracity != self.previous_veracity;
        self.internal.record(self.recent_action.kind(), changed);
    }

    /// Add the recent action's trust-weighted confidence to the veracity.
    fn update_environment_state(&mut self, sources: &EvidenceSources, trust: TrustWeights) {
        self.previous_veracity = self.environment.veracity;

        if !self.recent_action.is_productive() {
            return;
        }
        let weight = match self.recent_action.kind() {
            ActionKind::QueryKnowledgeBase => trust.knowledge(),
            ActionKind::QuerySentimentFeed => trust.sentiment(),
            ActionKind::NoOp | ActionKind::ReturnAnswer => return,
        };
        let Some(source) = sources.for_kind(self.recent_action.kind()) else {
            return;
        };
        self.environment.veracity = self.previous_veracity + weight * source.confidence();
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
