//! Error types for the flow core

use thiserror::Error;

/// Result type alias using FlowError
pub type Result<T> = std::result::Result<T, FlowError>;

/// Structural and boundary errors for flow graphs
///
/// These are producer defects (a buggy caller, a corrupt payload), not
/// user-correctable input. User-facing configuration problems are returned
/// as [`ValidationError`](crate::validate::ValidationError) data instead.
#[derive(Debug, Error)]
pub enum FlowError {
    /// A node id appears more than once in the same flow
    #[error("duplicate node id '{0}'")]
    DuplicateNodeId(String),

    /// A connection id appears more than once in the same flow
    #[error("duplicate connection id '{0}'")]
    DuplicateConnectionId(String),

    /// A connection endpoint references a node that is not in the flow
    #[error("connection '{connection_id}' references unknown node '{node_id}'")]
    DanglingEndpoint {
        connection_id: String,
        node_id: String,
    },

    /// A connection endpoint has an empty port name
    #[error("connection '{0}' has an empty port name")]
    EmptyPortName(String),

    /// A connection links a node to itself and the active policy forbids it
    #[error("connection '{0}' links node '{1}' to itself")]
    SelfLoop(String, String),

    /// Serialization error at a wire boundary
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
