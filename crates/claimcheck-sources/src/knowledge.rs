//! Knowledge-base evidence source.
//!
//! The knowledge base is a table of precomputed queries per supported
//! scenario. Each query carries a label, the stance its matches take toward
//! the scenario, and the matched records. Datasets are JSON documents that
//! are structurally validated with `jsonschema` before deserialization, so a
//! broken dataset is reported at load time rather than during an evaluation.

use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use claimcheck_contracts::{
    error::{ClaimCheckError, ClaimCheckResult},
    evidence::{EvidenceRecord, ResultBundle, Stance},
};
use claimcheck_core::EvidenceSource;

/// The dataset shipped with the crate, covering the three supported scenarios.
const BUNDLED_DATASET: &str = include_str!("../data/knowledge.json");

/// JSON Schema every dataset must satisfy.
const DATASET_SCHEMA: &str = include_str!("../data/knowledge.schema.json");

const NO_HELP: &str = "My own knowledge about the world did not help me to answer this statement.";
const NO_DIRECTION: &str = "My own knowledge about the world did not point in this direction.";

// ── Dataset format ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Dataset {
    scenarios: Vec<ScenarioFacts>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ScenarioFacts {
    statement: String,
    queries: Vec<StoredQuery>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredQuery {
    label: String,
    stance: Stance,
    records: Vec<String>,
}

// ── Source ────────────────────────────────────────────────────────────────────

/// An `EvidenceSource` backed by a validated fact table.
#[derive(Debug)]
pub struct KnowledgeBase {
    facts: HashMap<String, Vec<StoredQuery>>,
    result: ResultBundle,
}

impl KnowledgeBase {
    /// Load the dataset bundled with this crate.
    pub fn bundled() -> ClaimCheckResult<Self> {
        Self::from_json_str(BUNDLED_DATASET)
    }

    /// Read the file at `path` and load it as a dataset.
    pub fn from_file(path: &Path) -> ClaimCheckResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ClaimCheckError::DatasetInvalid {
            reason: format!("failed to read dataset '{}': {}", path.display(), e),
        })?;
        Self::from_json_str(&contents)
    }

    /// Parse, validate, and index a JSON dataset.
    ///
    /// Returns `DatasetInvalid` when the document is not JSON, violates the
    /// dataset schema, or lists the same scenario twice.
    pub fn from_json_str(s: &str) -> ClaimCheckResult<Self> {
        let document: serde_json::Value = serde_json::from_str(s).map_err(|e| ClaimCheckError::DatasetInvalid {
            reason: format!("dataset is not valid JSON: {e}"),
        })?;
        validate(&document)?;

        let dataset: Dataset = serde_json::from_value(document).map_err(|e| ClaimCheckError::DatasetInvalid {
            reason: format!("dataset does not match the expected shape: {e}"),
        })?;

        let mut facts = HashMap::with_capacity(dataset.scenarios.len());
        for scenario in dataset.scenarios {
            if facts.contains_key(&scenario.statement) {
                return Err(ClaimCheckError::DatasetInvalid {
                    reason: format!("scenario '{}' is listed more than once", scenario.statement),
                });
            }
            facts.insert(scenario.statement, scenario.queries);
        }

        debug!(scenarios = facts.len(), "knowledge base loaded");
        Ok(Self { facts, result: ResultBundle::new() })
    }

    /// Statements this knowledge base has facts for, sorted.
    pub fn scenarios(&self) -> Vec<&str> {
        let mut statements: Vec<&str> = self.facts.keys().map(String::as_str).collect();
        statements.sort_unstable();
        statements
    }

    /// The bundle stored by the most recent query.
    pub fn result(&self) -> &ResultBundle {
        &self.result
    }
}

impl Default for KnowledgeBase {
    /// A knowledge base with no facts; every query comes back empty.
    fn default() -> Self {
        Self { facts: HashMap::new(), result: ResultBundle::new() }
    }
}

/// Check `document` against the dataset schema, collecting every violation.
fn validate(document: &serde_json::Value) -> ClaimCheckResult<()> {
    let schema: serde_json::Value = serde_json::from_str(DATASET_SCHEMA).map_err(|e| ClaimCheckError::DatasetInvalid {
        reason: format!("bundled dataset schema is not valid JSON: {e}"),
    })?;
    let validator = jsonschema::validator_for(&schema).map_err(|e| ClaimCheckError::DatasetInvalid {
        reason: format!("invalid dataset schema: {e}"),
    })?;

    let violations: Vec<String> = validator
        .iter_errors(document)
        .map(|error| format!("{}: {}", error.instance_path, error))
        .collect();
    if violations.is_empty() {
        return Ok(());
    }

    warn!(violations = violations.len(), "dataset failed schema validation");
    Err(ClaimCheckError::DatasetInvalid {
        reason: violations.join("; "),
    })
}

impl EvidenceSource for KnowledgeBase {
    fn name(&self) -> &str {
        "knowledge-base"
    }

    /// Every query listed for the scenario lands in the bundle, including
    /// those that matched nothing. An unknown scenario yields an empty bundle.
    fn query(&mut self, scenario: &str) -> &ResultBundle {
        let mut bundle = ResultBundle::new();
        if let Some(queries) = self.facts.get(scenario) {
            for query in queries {
                let records = query.records.iter().map(EvidenceRecord::new).collect();
                bundle.insert(query.stance, query.label.clone(), records);
            }
        } else {
            debug!(scenario = %scenario, "no facts for scenario");
        }
        self.result = bundle;
        &self.result
    }

    /// `0` with no records, `-1` with no supporting records, otherwise the
    /// supporting share rescaled from [0, 1] to [-1, 1].
    fn confidence(&self) -> f64 {
        let total = self.result.total_count();
        let supporting = self.result.supporting_count();
        if total == 0 {
            return 0.0;
        }
        if supporting == 0 {
            return -1.0;
        }
        (supporting as f64 / total as f64 - 0.5) * 2.0
    }

    fn explain(&self, positive: bool) -> String {
        if self.result.is_empty() {
            return NO_HELP.to_string();
        }

        let stance = if positive { Stance::Supporting } else { Stance::Contradicting };
        let labels: Vec<&str> = self.result.labels(stance).collect();
        if labels.is_empty() {
            return NO_DIRECTION.to_string();
        }
        format!("My reasoning was as follows: There is evidence that {}.", labels.join(", "))
    }
}
