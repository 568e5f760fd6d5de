//! Output components: sinks that deliver records out of a flow

use flow_core::catalog::{ComponentCategory, ComponentType, PortSpec};
use flow_core::schema::{ConfigSchema, PropertySchema};
use serde_json::json;

/// UDP datagram sink
pub fn udp_output() -> ComponentType {
    ComponentType {
        id: "udp-output".to_string(),
        name: "UDP Output".to_string(),
        category: ComponentCategory::Output,
        protocol: Some("udp".to_string()),
        description: "Sends each record as a UDP datagram".to_string(),
        version: "1.2.0".to_string(),
        schema: ConfigSchema::new()
            .property(
                "host",
                PropertySchema::string()
                    .described("Destination host")
                    .basic(),
            )
            .property(
                "port",
                PropertySchema::int()
                    .described("Destination port")
                    .range(1.0, 65535.0)
                    .basic(),
            )
            .require("host")
            .require("port"),
        ports: vec![PortSpec::input("in")],
    }
}

/// File sink
pub fn file_output() -> ComponentType {
    ComponentType {
        id: "file-output".to_string(),
        name: "File Output".to_string(),
        category: ComponentCategory::Output,
        protocol: None,
        description: "Writes records to a local file".to_string(),
        version: "1.0.1".to_string(),
        schema: ConfigSchema::new()
            .property(
                "path",
                PropertySchema::string()
                    .described("Path of the output file")
                    .basic(),
            )
            .property(
                "format",
                PropertySchema::enumeration(["json", "csv", "raw"])
                    .described("Serialization format")
                    .with_default(json!("json"))
                    .basic(),
            )
            .property(
                "append",
                PropertySchema::bool()
                    .described("Append instead of truncating on deploy")
                    .with_default(json!(true)),
            )
            .require("path"),
        ports: vec![PortSpec::input("in")],
    }
}

/// WebSocket broadcast sink
pub fn websocket_output() -> ComponentType {
    ComponentType {
        id: "websocket-output".to_string(),
        name: "WebSocket Output".to_string(),
        category: ComponentCategory::Output,
        protocol: Some("ws".to_string()),
        description: "Broadcasts records to connected WebSocket clients".to_string(),
        version: "0.9.4".to_string(),
        schema: ConfigSchema::new()
            .property(
                "port",
                PropertySchema::int()
                    .described("Local port to serve WebSocket clients on")
                    .range(1.0, 65535.0)
                    .basic(),
            )
            .property(
                "max_clients",
                PropertySchema::int()
                    .described("Maximum simultaneous clients")
                    .range(1.0, 10_000.0)
                    .with_default(json!(64)),
            )
            .require("port"),
        ports: vec![PortSpec::input("in")],
    }
}
