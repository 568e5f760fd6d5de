//! Fluent builder for flow graphs
//!
//! Programmatic construction with fail-fast structural checking. Used by
//! tests and by generator-candidate assembly.
//!
//! # Example
//!
//! ```
//! use flow_core::builder::FlowBuilder;
//!
//! let flow = FlowBuilder::new("flow-1", "Ingest")
//!     .add_node("in-1", "udp-input", (0.0, 0.0))
//!     .with_config(serde_json::json!({"port": 5000, "host": "0.0.0.0"}))
//!     .add_node("out-1", "file-output", (200.0, 0.0))
//!     .connect("in-1", "out", "out-1", "in")
//!     .build()
//!     .unwrap();
//! assert_eq!(flow.nodes.len(), 2);
//! ```

use uuid::Uuid;

use crate::error::Result;
use crate::flow::{Flow, FlowConnection, FlowNode, Position};

/// Fluent builder for [`Flow`]
pub struct FlowBuilder {
    id: String,
    name: String,
    nodes: Vec<FlowNode>,
    connections: Vec<FlowConnection>,
}

impl FlowBuilder {
    /// Create a builder for a new flow
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            nodes: Vec::new(),
            connections: Vec::new(),
        }
    }

    /// Add a node; its display name defaults to its id
    pub fn add_node(
        mut self,
        id: impl Into<String>,
        component_type: impl Into<String>,
        position: (f64, f64),
    ) -> Self {
        let id = id.into();
        self.nodes.push(FlowNode {
            name: id.clone(),
            id,
            component_type: component_type.into(),
            position: Position::new(position.0, position.1),
            config: serde_json::Map::new(),
        });
        self
    }

    /// Set the display name of the most recently added node
    ///
    /// Must be called after `add_node`.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        if let Some(node) = self.nodes.last_mut() {
            node.name = name.into();
        }
        self
    }

    /// Set the config of the most recently added node
    ///
    /// Must be called after `add_node`. Non-object values are ignored.
    pub fn with_config(mut self, config: serde_json::Value) -> Self {
        if let Some(node) = self.nodes.last_mut() {
            if let serde_json::Value::Object(map) = config {
                node.config = map;
            }
        }
        self
    }

    /// Connect two node ports (generates the connection id)
    pub fn connect(
        self,
        source: impl Into<String>,
        source_port: impl Into<String>,
        target: impl Into<String>,
        target_port: impl Into<String>,
    ) -> Self {
        let id = format!("conn-{}", Uuid::new_v4());
        self.connect_with_id(id, source, source_port, target, target_port)
    }

    /// Connect two node ports with an explicit connection id
    pub fn connect_with_id(
        mut self,
        id: impl Into<String>,
        source: impl Into<String>,
        source_port: impl Into<String>,
        target: impl Into<String>,
        target_port: impl Into<String>,
    ) -> Self {
        self.connections.push(FlowConnection {
            id: id.into(),
            source_node_id: source.into(),
            source_port: source_port.into(),
            target_node_id: target.into(),
            target_port: target_port.into(),
        });
        self
    }

    /// Assemble the flow, failing fast on any structural defect
    pub fn build(self) -> Result<Flow> {
        let mut flow = Flow::new(self.id, self.name);
        for node in self.nodes {
            flow.add_node(node)?;
        }
        for connection in self.connections {
            flow.add_connection(connection)?;
        }
        Ok(flow)
    }
}
