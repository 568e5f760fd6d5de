//! Graph normalization
//!
//! The persistence API and the AI generator may legally send `nodes` or
//! `connections` as `null` (or omit them). [`normalize`] is the single choke
//! point that coerces such payloads into the canonical [`Flow`] shape; every
//! externally-sourced flow passes through here before anything else touches
//! it. Normalization only fixes shape — it never judges structure or config,
//! and it never fails on a structurally-absent but otherwise valid payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::flow::{Flow, FlowConnection, FlowNode, RuntimeState};

/// Wire shape of a flow, exactly as exchanged with the persistence API
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFlow {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub runtime_state: RuntimeState,
    /// May be null or absent on the wire
    #[serde(default)]
    pub nodes: Option<Vec<FlowNode>>,
    /// May be null or absent on the wire
    #[serde(default)]
    pub connections: Option<Vec<FlowConnection>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Flow> for RawFlow {
    fn from(flow: Flow) -> Self {
        Self {
            id: flow.id,
            name: flow.name,
            description: flow.description,
            version: flow.version,
            runtime_state: flow.runtime_state,
            nodes: Some(flow.nodes),
            connections: Some(flow.connections),
            created_at: flow.created_at,
            updated_at: flow.updated_at,
        }
    }
}

/// Coerce a wire payload into the canonical in-memory shape
///
/// Null/absent `nodes` and `connections` become empty vectors; every other
/// field passes through unchanged. Idempotent: a round trip through
/// [`RawFlow`] and back is the identity on a canonical flow.
pub fn normalize(raw: RawFlow) -> Flow {
    if raw.nodes.is_none() || raw.connections.is_none() {
        log::debug!("flow '{}': coercing null graph sequences to empty", raw.id);
    }
    Flow {
        id: raw.id,
        name: raw.name,
        description: raw.description,
        version: raw.version,
        runtime_state: raw.runtime_state,
        nodes: raw.nodes.unwrap_or_default(),
        connections: raw.connections.unwrap_or_default(),
        created_at: raw.created_at,
        updated_at: raw.updated_at,
    }
}

/// Normalize straight from a JSON value (server response body)
pub fn normalize_value(value: serde_json::Value) -> Result<Flow> {
    let raw: RawFlow = serde_json::from_value(value)?;
    Ok(normalize(raw))
}
