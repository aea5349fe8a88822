//! The registry of evidence sources and the kind → source dispatch map.
//!
//! `ActionKind` carries no behavior; this is the one place that decides
//! which source a kind consults.

use claimcheck_contracts::action::ActionKind;

use crate::traits::EvidenceSource;

/// The two evidence sources an agent consults.
pub struct EvidenceSources {
    knowledge: Box<dyn EvidenceSource>,
    sentiment: Box<dyn EvidenceSource>,
}

impl EvidenceSources {
    pub fn new(knowledge: Box<dyn EvidenceSource>, sentiment: Box<dyn EvidenceSource>) -> Self {
        Self { knowledge, sentiment }
    }

    /// The source a query kind consults, or `None` for kinds that query nothing.
    pub fn for_kind(&self, kind: ActionKind) -> Option<&dyn EvidenceSource> {
        let source: &dyn EvidenceSource = match kind {
            ActionKind::QueryKnowledgeBase => self.knowledge.as_ref(),
            ActionKind::QuerySentimentFeed => self.sentiment.as_ref(),
            ActionKind::NoOp | ActionKind::ReturnAnswer => return None,
        };
        Some(source)
    }

    /// Mutable counterpart of [`for_kind`](Self::for_kind), used to run queries.
    pub fn for_kind_mut(&mut self, kind: ActionKind) -> Option<&mut dyn EvidenceSource> {
        let source: &mut dyn EvidenceSource = match kind {
            ActionKind::QueryKnowledgeBase => self.knowledge.as_mut(),
            ActionKind::QuerySentimentFeed => self.sentiment.as_mut(),
            ActionKind::NoOp | ActionKind::ReturnAnswer => return None,
        };
        Some(source)
    }

    pub fn knowledge(&self) -> &dyn EvidenceSource {
        self.knowledge.as_ref()
    }

    pub fn sentiment(&self) -> &dyn EvidenceSource {
        self.sentiment.as_ref()
    }
}
