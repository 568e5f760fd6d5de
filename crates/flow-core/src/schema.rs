//! Configuration schema model
//!
//! Passive descriptions of what a valid component configuration looks like.
//! Schemas are owned by the component catalog, loaded once per session, and
//! consumed read-only by the validators. All behavior lives in
//! [`validate`](crate::validate); this module is pure data plus builder
//! constructors for defining schemas in code.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The declared type of a configuration property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    /// Free-form text
    String,
    /// Integer number
    Int,
    /// Floating-point number
    Float,
    /// Boolean flag
    Bool,
    /// One value out of a fixed set
    Enum,
    /// Port list (editor-managed, unconstrained here)
    Ports,
    /// Nested JSON object (unconstrained here)
    Object,
    /// Forward-compatible catch-all for types this build doesn't know.
    /// Unknown types carry no constraints.
    #[serde(other)]
    Unknown,
}

/// Schema for a single configuration property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Declared value type
    #[serde(rename = "type")]
    pub kind: PropertyType,
    /// Human-readable description shown in the editor
    #[serde(default)]
    pub description: String,
    /// Default value offered when a node is added
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Inclusive lower bound (numeric types)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    /// Inclusive upper bound (numeric types)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    /// Allowed values, in display order (enum type)
    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    /// Form grouping hint ("basic" properties render outside the
    /// advanced section)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl PropertySchema {
    /// Create a property schema of the given type
    pub fn new(kind: PropertyType) -> Self {
        Self {
            kind,
            description: String::new(),
            default: None,
            minimum: None,
            maximum: None,
            choices: None,
            category: None,
        }
    }

    /// A string property
    pub fn string() -> Self {
        Self::new(PropertyType::String)
    }

    /// An integer property
    pub fn int() -> Self {
        Self::new(PropertyType::Int)
    }

    /// A float property
    pub fn float() -> Self {
        Self::new(PropertyType::Float)
    }

    /// A boolean property
    pub fn bool() -> Self {
        Self::new(PropertyType::Bool)
    }

    /// An enum property with its allowed values
    pub fn enumeration(choices: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut schema = Self::new(PropertyType::Enum);
        schema.choices = Some(choices.into_iter().map(Into::into).collect());
        schema
    }

    /// Set the description
    pub fn described(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the default value
    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default = Some(value);
        self
    }

    /// Set inclusive numeric bounds
    pub fn range(mut self, minimum: f64, maximum: f64) -> Self {
        self.minimum = Some(minimum);
        self.maximum = Some(maximum);
        self
    }

    /// Set only the inclusive lower bound
    pub fn min(mut self, minimum: f64) -> Self {
        self.minimum = Some(minimum);
        self
    }

    /// Mark this property as part of the basic form section
    pub fn basic(mut self) -> Self {
        self.category = Some("basic".to_string());
        self
    }
}

/// Schema for a whole component configuration
///
/// `properties` preserves declaration order; validation reports errors in
/// that order. `required` is expected to be a subset of the property names,
/// but consumers never assume it: a required name with no matching property
/// is simply unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigSchema {
    /// Property name → schema, in declaration order
    #[serde(default)]
    pub properties: IndexMap<String, PropertySchema>,
    /// Names of properties that must be present and non-empty
    #[serde(default)]
    pub required: Vec<String>,
}

impl ConfigSchema {
    /// Create an empty schema (accepts any configuration)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property
    pub fn property(mut self, name: impl Into<String>, schema: PropertySchema) -> Self {
        self.properties.insert(name.into(), schema);
        self
    }

    /// Mark a property name as required
    pub fn require(mut self, name: impl Into<String>) -> Self {
        self.required.push(name.into());
        self
    }

    /// Whether the given property name is required
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|r| r == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_constructors() {
        let schema = ConfigSchema::new()
            .property("port", PropertySchema::int().range(1.0, 65535.0).basic())
            .property("protocol", PropertySchema::enumeration(["tcp", "udp"]))
            .require("port");

        assert!(schema.is_required("port"));
        assert!(!schema.is_required("protocol"));
        assert_eq!(schema.properties["port"].minimum, Some(1.0));
        assert_eq!(
            schema.properties["protocol"].choices.as_deref(),
            Some(["tcp".to_string(), "udp".to_string()].as_slice())
        );
    }

    #[test]
    fn test_properties_preserve_declaration_order() {
        let schema = ConfigSchema::new()
            .property("zeta", PropertySchema::string())
            .property("alpha", PropertySchema::string())
            .property("mid", PropertySchema::string());

        let names: Vec<&str> = schema.properties.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_unknown_property_type_deserializes() {
        let json = r#"{"type": "geo-fence", "description": "future type"}"#;
        let schema: PropertySchema = serde_json::from_str(json).unwrap();
        assert_eq!(schema.kind, PropertyType::Unknown);
    }

    #[test]
    fn test_schema_wire_shape() {
        let schema = PropertySchema::int().range(1.0, 65535.0);
        let json = serde_json::to_value(&schema).unwrap();
        assert_eq!(json["type"], "int");
        assert_eq!(json["minimum"], 1.0);
        // Unset optionals stay off the wire
        assert!(json.get("enum").is_none());
    }
}
