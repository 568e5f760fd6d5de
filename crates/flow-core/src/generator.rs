//! AI flow-generator output contract and candidate review
//!
//! The generator proposes `{nodes, connections}` over a tool-invocation
//! protocol together with its own validation verdict. Before a candidate can
//! be offered as "ready to apply" it must pass through the normalizer and
//! then full validation — the same gate as any server-sourced flow. A
//! candidate with problems is surfaced to the user as-is, never
//! auto-corrected.

use serde::{Deserialize, Serialize};

use crate::catalog::ComponentCatalog;
use crate::error::Result;
use crate::flow::{Flow, FlowConnection, FlowNode};
use crate::normalize::{normalize, RawFlow};
use crate::validate::{check_structure, validate_flow, NodeErrors, ValidationPolicy};

/// Verdict the generator reports alongside its candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    Valid,
    Errors,
}

/// Kind of problem the generator can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorErrorKind {
    /// Candidate references a component type the server doesn't know
    UnknownComponent,
    /// Candidate wires ports that cannot be connected
    InvalidConnection,
    /// Anything else the generator chooses to report
    Other,
}

/// One problem reported by the generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorError {
    pub kind: GeneratorErrorKind,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,
}

/// The candidate graph produced by the generator
///
/// Like any wire payload, `nodes`/`connections` may be null or absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedGraph {
    #[serde(default)]
    pub nodes: Option<Vec<FlowNode>>,
    #[serde(default)]
    pub connections: Option<Vec<FlowConnection>>,
}

/// Full generator response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub validation_status: GenerationStatus,
    #[serde(default)]
    pub graph: GeneratedGraph,
    #[serde(default)]
    pub errors: Vec<GeneratorError>,
}

impl GenerationResult {
    /// Whether the generator itself reported problems
    pub fn has_errors(&self) -> bool {
        self.validation_status == GenerationStatus::Errors || !self.errors.is_empty()
    }
}

/// A candidate flow after the mandatory normalize-then-validate gate
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateReview {
    /// The candidate applied over the base flow's metadata, in canonical
    /// shape and structurally sound
    pub flow: Flow,
    /// Per-node configuration errors found locally
    pub errors: Vec<NodeErrors>,
}

impl CandidateReview {
    /// Whether the candidate can be offered as "ready to apply"
    pub fn is_ready(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Review a generator candidate against the base flow being edited
///
/// The candidate graph replaces the base flow's nodes and connections; id,
/// name, version, and deployment metadata are kept from the base. The result
/// is normalized, structure-checked (fail fast on producer defects), and
/// config-validated.
pub fn review_candidate(
    base: &Flow,
    candidate: GeneratedGraph,
    catalog: &ComponentCatalog,
    policy: &ValidationPolicy,
) -> Result<CandidateReview> {
    let raw = RawFlow {
        id: base.id.clone(),
        name: base.name.clone(),
        description: base.description.clone(),
        version: base.version,
        runtime_state: base.runtime_state,
        nodes: candidate.nodes,
        connections: candidate.connections,
        created_at: base.created_at,
        updated_at: base.updated_at,
    };
    let flow = normalize(raw);
    check_structure(&flow, policy)?;
    let errors = validate_flow(&flow, catalog, policy);
    Ok(CandidateReview { flow, errors })
}
