//! Core types for flow graphs
//!
//! A [`Flow`] is the persisted unit: a directed graph of configured component
//! nodes plus deployment metadata. Structural invariants (unique ids, no
//! dangling connection endpoints, non-empty port names) are enforced at every
//! mutation boundary and return [`FlowError`] on violation — a violation is a
//! producer defect, never a soft validation error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{FlowError, Result};

/// Unique identifier for a node within a flow
pub type NodeId = String;

/// Unique identifier for a connection within a flow
pub type ConnectionId = String;

/// Identifier of a component type in the catalog
pub type ComponentTypeId = String;

/// Canvas position of a node
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Deployment lifecycle tag on a flow
///
/// Driven entirely by external deploy/start/stop operations; this core
/// carries it opaquely and never mutates it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuntimeState {
    #[default]
    NotDeployed,
    DeployedStopped,
    Running,
    Error,
}

/// A configured component instance in a flow
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNode {
    /// Unique within the owning flow
    pub id: NodeId,
    /// References a [`ComponentType`](crate::catalog::ComponentType) id
    #[serde(rename = "type")]
    pub component_type: ComponentTypeId,
    /// Display name
    pub name: String,
    /// Canvas position
    #[serde(default)]
    pub position: Position,
    /// Property name → value, validated against the component's schema
    #[serde(default)]
    pub config: serde_json::Map<String, serde_json::Value>,
}

impl FlowNode {
    /// Create a node with an empty config
    pub fn new(
        id: impl Into<String>,
        component_type: impl Into<String>,
        name: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            id: id.into(),
            component_type: component_type.into(),
            name: name.into(),
            position,
            config: serde_json::Map::new(),
        }
    }
}

/// A directed connection between two node ports
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowConnection {
    /// Unique within the owning flow
    pub id: ConnectionId,
    pub source_node_id: NodeId,
    pub source_port: String,
    pub target_node_id: NodeId,
    pub target_port: String,
}

impl FlowConnection {
    /// Whether this connection links a node to itself
    pub fn is_self_loop(&self) -> bool {
        self.source_node_id == self.target_node_id
    }
}

/// A complete flow graph with its persistence metadata
///
/// In canonical form `nodes` and `connections` are never null; coercing
/// possibly-null wire payloads is the job of [`normalize`](crate::normalize).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Flow {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Optimistic-concurrency counter, carried opaquely. Save-time mismatch
    /// is detected and reported by the persistence boundary, not here.
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub runtime_state: RuntimeState,
    #[serde(default)]
    pub nodes: Vec<FlowNode>,
    #[serde(default)]
    pub connections: Vec<FlowConnection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Flow {
    /// Create a new empty flow
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Find a node by id
    pub fn find_node(&self, id: &str) -> Option<&FlowNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Find a node by id (mutable)
    pub fn find_node_mut(&mut self, id: &str) -> Option<&mut FlowNode> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Find a connection by id
    pub fn find_connection(&self, id: &str) -> Option<&FlowConnection> {
        self.connections.iter().find(|c| c.id == id)
    }

    /// Connections arriving at a node
    pub fn incoming<'a>(
        &'a self,
        node_id: &'a str,
    ) -> impl Iterator<Item = &'a FlowConnection> + 'a {
        self.connections
            .iter()
            .filter(move |c| c.target_node_id == node_id)
    }

    /// Connections leaving a node
    pub fn outgoing<'a>(
        &'a self,
        node_id: &'a str,
    ) -> impl Iterator<Item = &'a FlowConnection> + 'a {
        self.connections
            .iter()
            .filter(move |c| c.source_node_id == node_id)
    }

    /// Add a node, rejecting duplicate ids
    pub fn add_node(&mut self, node: FlowNode) -> Result<()> {
        if self.find_node(&node.id).is_some() {
            return Err(FlowError::DuplicateNodeId(node.id));
        }
        self.nodes.push(node);
        Ok(())
    }

    /// Add a connection, rejecting duplicate ids, dangling endpoints, and
    /// empty port names
    pub fn add_connection(&mut self, connection: FlowConnection) -> Result<()> {
        if self.find_connection(&connection.id).is_some() {
            return Err(FlowError::DuplicateConnectionId(connection.id));
        }
        if connection.source_port.is_empty() || connection.target_port.is_empty() {
            return Err(FlowError::EmptyPortName(connection.id));
        }
        for endpoint in [&connection.source_node_id, &connection.target_node_id] {
            if self.find_node(endpoint).is_none() {
                return Err(FlowError::DanglingEndpoint {
                    connection_id: connection.id.clone(),
                    node_id: endpoint.clone(),
                });
            }
        }
        self.connections.push(connection);
        Ok(())
    }

    /// Remove a node and every connection touching it
    ///
    /// Returns the removed node, or `None` if the id is unknown. Dropping
    /// attached connections keeps the no-dangling-endpoint invariant intact
    /// across the mutation.
    pub fn remove_node(&mut self, node_id: &str) -> Option<FlowNode> {
        let pos = self.nodes.iter().position(|n| n.id == node_id)?;
        let node = self.nodes.remove(pos);
        self.connections
            .retain(|c| c.source_node_id != node_id && c.target_node_id != node_id);
        Some(node)
    }

    /// Remove a connection by id
    pub fn remove_connection(&mut self, connection_id: &str) -> Option<FlowConnection> {
        let pos = self
            .connections
            .iter()
            .position(|c| c.id == connection_id)?;
        Some(self.connections.remove(pos))
    }

    /// Re-verify every structural invariant over the whole graph
    ///
    /// Mutation methods keep a flow structurally sound incrementally; this
    /// is the full check applied to externally-sourced graphs after
    /// normalization, and it reports the first violation found.
    pub fn check_structure(&self) -> Result<()> {
        let mut node_ids = std::collections::HashSet::new();
        for node in &self.nodes {
            if !node_ids.insert(node.id.as_str()) {
                return Err(FlowError::DuplicateNodeId(node.id.clone()));
            }
        }

        let mut connection_ids = std::collections::HashSet::new();
        for connection in &self.connections {
            if !connection_ids.insert(connection.id.as_str()) {
                return Err(FlowError::DuplicateConnectionId(connection.id.clone()));
            }
            if connection.source_port.is_empty() || connection.target_port.is_empty() {
                return Err(FlowError::EmptyPortName(connection.id.clone()));
            }
            for endpoint in [&connection.source_node_id, &connection.target_node_id] {
                if !node_ids.contains(endpoint.as_str()) {
                    return Err(FlowError::DanglingEndpoint {
                        connection_id: connection.id.clone(),
                        node_id: endpoint.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_node_flow() -> Flow {
        let mut flow = Flow::new("flow-1", "Test Flow");
        flow.add_node(FlowNode::new("in", "udp-input", "UDP In", Position::new(0.0, 0.0)))
            .unwrap();
        flow.add_node(FlowNode::new("out", "udp-output", "UDP Out", Position::new(200.0, 0.0)))
            .unwrap();
        flow
    }

    #[test]
    fn test_add_node_rejects_duplicate_id() {
        let mut flow = two_node_flow();
        let err = flow
            .add_node(FlowNode::new("in", "tcp-input", "Again", Position::default()))
            .unwrap_err();
        assert!(matches!(err, FlowError::DuplicateNodeId(id) if id == "in"));
    }

    #[test]
    fn test_add_connection_rejects_dangling_endpoint() {
        let mut flow = two_node_flow();
        let err = flow
            .add_connection(FlowConnection {
                id: "c1".into(),
                source_node_id: "in".into(),
                source_port: "out".into(),
                target_node_id: "missing".into(),
                target_port: "in".into(),
            })
            .unwrap_err();
        assert!(matches!(
            err,
            FlowError::DanglingEndpoint { node_id, .. } if node_id == "missing"
        ));
    }

    #[test]
    fn test_add_connection_rejects_empty_port() {
        let mut flow = two_node_flow();
        let err = flow
            .add_connection(FlowConnection {
                id: "c1".into(),
                source_node_id: "in".into(),
                source_port: String::new(),
                target_node_id: "out".into(),
                target_port: "in".into(),
            })
            .unwrap_err();
        assert!(matches!(err, FlowError::EmptyPortName(_)));
    }

    #[test]
    fn test_remove_node_drops_attached_connections() {
        let mut flow = two_node_flow();
        flow.add_connection(FlowConnection {
            id: "c1".into(),
            source_node_id: "in".into(),
            source_port: "out".into(),
            target_node_id: "out".into(),
            target_port: "in".into(),
        })
        .unwrap();

        assert!(flow.remove_node("in").is_some());
        assert!(flow.connections.is_empty());
        assert!(flow.check_structure().is_ok());
    }

    #[test]
    fn test_check_structure_finds_duplicate_connection_id() {
        let mut flow = two_node_flow();
        let conn = FlowConnection {
            id: "c1".into(),
            source_node_id: "in".into(),
            source_port: "out".into(),
            target_node_id: "out".into(),
            target_port: "in".into(),
        };
        // Bypass add_connection to simulate a buggy producer
        flow.connections.push(conn.clone());
        flow.connections.push(conn);

        assert!(matches!(
            flow.check_structure(),
            Err(FlowError::DuplicateConnectionId(id)) if id == "c1"
        ));
    }

    #[test]
    fn test_incoming_outgoing() {
        let mut flow = two_node_flow();
        flow.add_connection(FlowConnection {
            id: "c1".into(),
            source_node_id: "in".into(),
            source_port: "out".into(),
            target_node_id: "out".into(),
            target_port: "in".into(),
        })
        .unwrap();

        assert_eq!(flow.outgoing("in").count(), 1);
        assert_eq!(flow.incoming("out").count(), 1);
        assert_eq!(flow.incoming("in").count(), 0);
    }

    #[test]
    fn test_runtime_state_wire_names() {
        assert_eq!(
            serde_json::to_value(RuntimeState::NotDeployed).unwrap(),
            "not_deployed"
        );
        assert_eq!(
            serde_json::to_value(RuntimeState::DeployedStopped).unwrap(),
            "deployed_stopped"
        );
    }

    #[test]
    fn test_node_config_round_trips_as_type_field() {
        let node = FlowNode::new("n1", "udp-input", "UDP In", Position::default());
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "udp-input");
    }
}
