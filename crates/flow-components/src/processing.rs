//! Processing components: stages that transform records in transit

use flow_core::catalog::{ComponentCategory, ComponentType, PortSpec};
use flow_core::schema::{ConfigSchema, PropertySchema, PropertyType};
use serde_json::json;

/// Predicate filter over JSON records
pub fn json_filter() -> ComponentType {
    ComponentType {
        id: "json-filter".to_string(),
        name: "JSON Filter".to_string(),
        category: ComponentCategory::Processing,
        protocol: None,
        description: "Drops records that don't match a JSONPath predicate".to_string(),
        version: "1.0.0".to_string(),
        schema: ConfigSchema::new()
            .property(
                "expression",
                PropertySchema::string()
                    .described("JSONPath predicate a record must satisfy")
                    .basic(),
            )
            .property(
                "on_parse_error",
                PropertySchema::enumeration(["drop", "pass", "route"])
                    .described("What to do with records that aren't valid JSON")
                    .with_default(json!("drop")),
            )
            .require("expression"),
        ports: vec![
            PortSpec::input("in"),
            PortSpec::output("out"),
            PortSpec::output("rejected"),
        ],
    }
}

/// Field renaming/projection stage
pub fn field_mapper() -> ComponentType {
    ComponentType {
        id: "field-mapper".to_string(),
        name: "Field Mapper".to_string(),
        category: ComponentCategory::Processing,
        protocol: None,
        description: "Renames, copies, or drops record fields".to_string(),
        version: "1.1.1".to_string(),
        schema: ConfigSchema::new()
            .property(
                "mappings",
                PropertySchema::new(PropertyType::Object)
                    .described("Source field → target field mapping")
                    .basic(),
            )
            .property(
                "drop_unmapped",
                PropertySchema::bool()
                    .described("Drop fields not present in the mapping")
                    .with_default(json!(false)),
            ),
        ports: vec![PortSpec::input("in"), PortSpec::output("out")],
    }
}

/// Rate limiter
pub fn throttle() -> ComponentType {
    ComponentType {
        id: "throttle".to_string(),
        name: "Throttle".to_string(),
        category: ComponentCategory::Processing,
        protocol: None,
        description: "Limits record throughput to a configured rate".to_string(),
        version: "1.0.2".to_string(),
        schema: ConfigSchema::new()
            .property(
                "rate",
                PropertySchema::float()
                    .described("Maximum records per second")
                    .min(0.1)
                    .basic(),
            )
            .property(
                "burst",
                PropertySchema::int()
                    .described("Burst allowance above the steady rate")
                    .range(0.0, 100_000.0)
                    .with_default(json!(0)),
            )
            .require("rate"),
        ports: vec![PortSpec::input("in"), PortSpec::output("out")],
    }
}
