//! Flow validation
//!
//! Three layers, matching the three error classes:
//!
//! - structural defects (duplicate ids, dangling endpoints) are fail-fast
//!   [`FlowError`]s raised at mutation boundaries and re-checked here for
//!   externally-sourced graphs;
//! - per-field configuration problems are [`ValidationError`] data, computed
//!   eagerly and completely;
//! - the save gate combines both: a flow is valid for save when its structure
//!   holds and no node has config errors.

mod config;
mod field;

pub use config::{merge_server_errors, validate_config, ServerErrorBody};
pub use field::{validate_field, ErrorCode, ValidationError};

use thiserror::Error;

use crate::catalog::ComponentCatalog;
use crate::error::FlowError;
use crate::flow::{Flow, NodeId};

/// Tunable validation behavior for the open-ended rules
///
/// Defaults match the server's observed behavior: self-loops pass, unknown
/// component types are left for the server to flag.
#[derive(Debug, Clone)]
pub struct ValidationPolicy {
    /// Accept connections whose source and target are the same node
    /// (feedback components rely on this)
    pub allow_self_loops: bool,
    /// Report nodes whose component type has no catalog entry instead of
    /// skipping their config validation
    pub flag_unknown_components: bool,
}

impl Default for ValidationPolicy {
    fn default() -> Self {
        Self {
            allow_self_loops: true,
            flag_unknown_components: false,
        }
    }
}

/// Configuration errors for one node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeErrors {
    pub node_id: NodeId,
    pub errors: Vec<ValidationError>,
}

/// Why a flow was refused at the save/deploy boundary
#[derive(Debug, Error)]
pub enum SaveError {
    /// Structural invariant violation (producer defect)
    #[error(transparent)]
    Structure(#[from] FlowError),

    /// One or more nodes have configuration errors
    #[error("{} node(s) have configuration errors", .0.len())]
    InvalidConfig(Vec<NodeErrors>),
}

/// Re-verify structure, including the policy-dependent self-loop rule
pub fn check_structure(flow: &Flow, policy: &ValidationPolicy) -> Result<(), FlowError> {
    flow.check_structure()?;
    if !policy.allow_self_loops {
        if let Some(conn) = flow.connections.iter().find(|c| c.is_self_loop()) {
            return Err(FlowError::SelfLoop(
                conn.id.clone(),
                conn.source_node_id.clone(),
            ));
        }
    }
    Ok(())
}

/// Validate every node's configuration against the catalog
///
/// Returns one entry per node that has at least one error, in node order.
/// A node whose component type is not in the catalog is skipped ("not yet
/// known" is not an error) unless the policy flags unknown components, in
/// which case it yields a single `unknown_component` error on the synthetic
/// `type` field — mirroring the server-side check.
pub fn validate_flow(
    flow: &Flow,
    catalog: &ComponentCatalog,
    policy: &ValidationPolicy,
) -> Vec<NodeErrors> {
    let mut results = Vec::new();
    for node in &flow.nodes {
        let errors = match catalog.get(&node.component_type) {
            Some(component) => validate_config(&node.config, &component.schema),
            None if policy.flag_unknown_components => vec![ValidationError::new(
                "type",
                format!("unknown component type '{}'", node.component_type),
                ErrorCode::UnknownComponent,
            )],
            None => {
                log::debug!(
                    "skipping config validation for node '{}': component type '{}' not in catalog",
                    node.id,
                    node.component_type
                );
                Vec::new()
            }
        };
        if !errors.is_empty() {
            results.push(NodeErrors {
                node_id: node.id.clone(),
                errors,
            });
        }
    }

    if !results.is_empty() {
        log::debug!(
            "flow '{}': {} node(s) with configuration errors",
            flow.id,
            results.len()
        );
    }
    results
}

/// The save/deploy gate: structure must hold and every node config must
/// validate
pub fn validate_for_save(
    flow: &Flow,
    catalog: &ComponentCatalog,
    policy: &ValidationPolicy,
) -> Result<(), SaveError> {
    check_structure(flow, policy)?;
    let node_errors = validate_flow(flow, catalog, policy);
    if node_errors.is_empty() {
        Ok(())
    } else {
        Err(SaveError::InvalidConfig(node_errors))
    }
}
