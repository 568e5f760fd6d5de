//! Component catalog
//!
//! The catalog maps component-type ids to their metadata: display info,
//! configuration schema, and ports. It is supplied by the host (loaded from
//! the server once per session) and injected read-only into the validators —
//! never a process-wide singleton, so tests can supply isolated fixtures.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::flow::ComponentTypeId;
use crate::schema::ConfigSchema;

/// Direction of a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PortDirection {
    Input,
    Output,
}

/// A named, directional attachment point on a component
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortSpec {
    pub name: String,
    pub direction: PortDirection,
}

impl PortSpec {
    /// Create an input port
    pub fn input(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: PortDirection::Input,
        }
    }

    /// Create an output port
    pub fn output(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: PortDirection::Output,
        }
    }
}

/// Category of a component, used for palette grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentCategory {
    /// Sources that bring data into a flow
    Input,
    /// Stages that transform data in transit
    Processing,
    /// Sinks that deliver data out of a flow
    Output,
}

/// Catalog entry describing one kind of node
///
/// Immutable for the lifetime of an editing session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentType {
    /// Unique type identifier (e.g., "udp-input")
    pub id: ComponentTypeId,
    /// Human-readable name
    pub name: String,
    /// Palette grouping
    pub category: ComponentCategory,
    /// Transport protocol, where one applies (e.g., "udp")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    /// Description of what the component does
    pub description: String,
    /// Component implementation version
    pub version: String,
    /// Configuration schema for nodes of this type
    pub schema: ConfigSchema,
    /// Ports, in display order
    pub ports: Vec<PortSpec>,
}

/// Registry of component types keyed by id
#[derive(Debug, Clone, Default)]
pub struct ComponentCatalog {
    entries: HashMap<ComponentTypeId, ComponentType>,
}

impl ComponentCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a server-supplied component list
    pub fn from_components(components: impl IntoIterator<Item = ComponentType>) -> Self {
        let mut catalog = Self::new();
        for component in components {
            catalog.register(component);
        }
        catalog
    }

    /// Register a component type, replacing any previous entry with the
    /// same id
    pub fn register(&mut self, component: ComponentType) {
        self.entries.insert(component.id.clone(), component);
    }

    /// Get a component type by id
    pub fn get(&self, id: &str) -> Option<&ComponentType> {
        self.entries.get(id)
    }

    /// Check whether a component type id is known
    pub fn has_type(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// All registered component types
    pub fn all(&self) -> Vec<&ComponentType> {
        self.entries.values().collect()
    }

    /// Component types grouped by category
    pub fn by_category(&self) -> HashMap<ComponentCategory, Vec<&ComponentType>> {
        let mut grouped: HashMap<ComponentCategory, Vec<&ComponentType>> = HashMap::new();
        for component in self.entries.values() {
            grouped.entry(component.category).or_default().push(component);
        }
        grouped
    }

    /// Number of registered component types
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge another catalog into this one
    ///
    /// Entries from `other` override entries with the same id.
    pub fn merge(&mut self, other: ComponentCatalog) {
        self.entries.extend(other.entries);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{ConfigSchema, PropertySchema};

    fn test_component(id: &str, category: ComponentCategory) -> ComponentType {
        ComponentType {
            id: id.to_string(),
            name: format!("Test {id}"),
            category,
            protocol: None,
            description: "Test component".to_string(),
            version: "1.0.0".to_string(),
            schema: ConfigSchema::new().property("label", PropertySchema::string()),
            ports: vec![PortSpec::input("in"), PortSpec::output("out")],
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut catalog = ComponentCatalog::new();
        catalog.register(test_component("udp-input", ComponentCategory::Input));

        assert!(catalog.has_type("udp-input"));
        assert!(!catalog.has_type("unknown"));
        assert_eq!(catalog.get("udp-input").unwrap().name, "Test udp-input");
    }

    #[test]
    fn test_by_category() {
        let catalog = ComponentCatalog::from_components([
            test_component("udp-input", ComponentCategory::Input),
            test_component("tcp-input", ComponentCategory::Input),
            test_component("file-output", ComponentCategory::Output),
        ]);

        let grouped = catalog.by_category();
        assert_eq!(grouped[&ComponentCategory::Input].len(), 2);
        assert_eq!(grouped[&ComponentCategory::Output].len(), 1);
    }

    #[test]
    fn test_merge_override() {
        let mut base = ComponentCatalog::new();
        base.register(test_component("udp-input", ComponentCategory::Input));

        let mut overlay = ComponentCatalog::new();
        let mut newer = test_component("udp-input", ComponentCategory::Input);
        newer.version = "2.0.0".to_string();
        overlay.register(newer);

        base.merge(overlay);
        assert_eq!(base.len(), 1);
        assert_eq!(base.get("udp-input").unwrap().version, "2.0.0");
    }
}
