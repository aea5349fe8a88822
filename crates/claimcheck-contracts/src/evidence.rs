//! Evidence bundles and trust weights.
//!
//! A `ResultBundle` is what an evidence source produces for one scenario. The
//! agent reads only its aggregate counts and its emptiness; the individual
//! records are for the source's own explanation text.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ClaimCheckError, ClaimCheckResult};

/// One matched record (an entity, a row, a post) returned by a query.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EvidenceRecord(pub String);

impl EvidenceRecord {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

/// Which way a query's matches point relative to the claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stance {
    Supporting,
    Contradicting,
}

/// Query outcomes for one scenario, keyed by query label and split by stance.
///
/// A label with zero matched records still counts as present: the bundle is
/// empty only when neither group holds any label at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultBundle {
    supporting: BTreeMap<String, Vec<EvidenceRecord>>,
    contradicting: BTreeMap<String, Vec<EvidenceRecord>>,
}

impl ResultBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the records matched by the query `label` under `stance`.
    /// Re-inserting a label replaces its previous records.
    pub fn insert(&mut self, stance: Stance, label: impl Into<String>, records: Vec<EvidenceRecord>) {
        let group = match stance {
            Stance::Supporting => &mut self.supporting,
            Stance::Contradicting => &mut self.contradicting,
        };
        group.insert(label.into(), records);
    }

    /// Append one record under `label`, creating the label if needed.
    pub fn push(&mut self, stance: Stance, label: &str, record: EvidenceRecord) {
        let group = match stance {
            Stance::Supporting => &mut self.supporting,
            Stance::Contradicting => &mut self.contradicting,
        };
        group.entry(label.to_string()).or_default().push(record);
    }

    /// True iff both groups are empty.
    pub fn is_empty(&self) -> bool {
        self.supporting.is_empty() && self.contradicting.is_empty()
    }

    /// Number of records across both groups.
    pub fn total_count(&self) -> usize {
        self.supporting_count() + Self::count(&self.contradicting)
    }

    /// Number of records in the supporting group.
    pub fn supporting_count(&self) -> usize {
        Self::count(&self.supporting)
    }

    /// Query labels for one stance, in label order.
    pub fn labels(&self, stance: Stance) -> impl Iterator<Item = &str> {
        let group = match stance {
            Stance::Supporting => &self.supporting,
            Stance::Contradicting => &self.contradicting,
        };
        group.keys().map(String::as_str)
    }

    /// Records matched by `label` under `stance`, if the label is present.
    pub fn records(&self, stance: Stance, label: &str) -> Option<&[EvidenceRecord]> {
        let group = match stance {
            Stance::Supporting => &self.supporting,
            Stance::Contradicting => &self.contradicting,
        };
        group.get(label).map(Vec::as_slice)
    }

    fn count(group: &BTreeMap<String, Vec<EvidenceRecord>>) -> usize {
        group.values().map(Vec::len).sum()
    }
}

/// Per-source multipliers applied to each source's confidence.
///
/// Both weights lie strictly inside (0, 1) and are read-only for the
/// lifetime of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrustWeights {
    knowledge: f64,
    sentiment: f64,
}

impl TrustWeights {
    /// The weight both sources get when nothing else is configured.
    pub const DEFAULT_WEIGHT: f64 = 0.5;

    /// Build a weight pair, rejecting values outside the open interval (0, 1).
    pub fn new(knowledge: f64, sentiment: f64) -> ClaimCheckResult<Self> {
        for (name, value) in [("knowledge", knowledge), ("sentiment", sentiment)] {
            if !(value > 0.0 && value < 1.0) {
                return Err(ClaimCheckError::ConfigError {
                    reason: format!("{name} trust weight must lie in (0, 1), got {value}"),
                });
            }
        }
        Ok(Self { knowledge, sentiment })
    }

    pub fn knowledge(&self) -> f64 {
        self.knowledge
    }

    pub fn sentiment(&self) -> f64 {
        self.sentiment
    }
}

impl Default for TrustWeights {
    fn default() -> Self {
        Self {
            knowledge: Self::DEFAULT_WEIGHT,
            sentiment: Self::DEFAULT_WEIGHT,
        }
    }
}
