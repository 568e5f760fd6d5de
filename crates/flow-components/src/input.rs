//! Input components: sources that bring data into a flow

use flow_core::catalog::{ComponentCategory, ComponentType, PortSpec};
use flow_core::schema::{ConfigSchema, PropertySchema};
use serde_json::json;

/// UDP datagram source
pub fn udp_input() -> ComponentType {
    ComponentType {
        id: "udp-input".to_string(),
        name: "UDP Input".to_string(),
        category: ComponentCategory::Input,
        protocol: Some("udp".to_string()),
        description: "Receives UDP datagrams on a local port".to_string(),
        version: "1.2.0".to_string(),
        schema: ConfigSchema::new()
            .property(
                "port",
                PropertySchema::int()
                    .described("Local port to listen on")
                    .range(1.0, 65535.0)
                    .basic(),
            )
            .property(
                "host",
                PropertySchema::string()
                    .described("Bind address")
                    .with_default(json!("0.0.0.0"))
                    .basic(),
            )
            .property(
                "buffer_size",
                PropertySchema::int()
                    .described("Receive buffer size in bytes")
                    .range(512.0, 1_048_576.0)
                    .with_default(json!(65536)),
            )
            .require("port")
            .require("host"),
        ports: vec![PortSpec::output("out")],
    }
}

/// TCP stream source
pub fn tcp_input() -> ComponentType {
    ComponentType {
        id: "tcp-input".to_string(),
        name: "TCP Input".to_string(),
        category: ComponentCategory::Input,
        protocol: Some("tcp".to_string()),
        description: "Accepts TCP connections and reads newline-framed records".to_string(),
        version: "1.1.0".to_string(),
        schema: ConfigSchema::new()
            .property(
                "port",
                PropertySchema::int()
                    .described("Local port to listen on")
                    .range(1.0, 65535.0)
                    .basic(),
            )
            .property(
                "host",
                PropertySchema::string()
                    .described("Bind address")
                    .with_default(json!("0.0.0.0"))
                    .basic(),
            )
            .property(
                "keepalive",
                PropertySchema::bool()
                    .described("Enable TCP keepalive on accepted connections")
                    .with_default(json!(true)),
            )
            .require("port")
            .require("host"),
        ports: vec![PortSpec::output("out")],
    }
}

/// HTTP endpoint source
pub fn http_input() -> ComponentType {
    ComponentType {
        id: "http-input".to_string(),
        name: "HTTP Input".to_string(),
        category: ComponentCategory::Input,
        protocol: Some("http".to_string()),
        description: "Exposes an HTTP endpoint that accepts posted records".to_string(),
        version: "1.0.3".to_string(),
        schema: ConfigSchema::new()
            .property(
                "port",
                PropertySchema::int()
                    .described("Local port to listen on")
                    .range(1.0, 65535.0)
                    .basic(),
            )
            .property(
                "path",
                PropertySchema::string()
                    .described("URL path to accept records on")
                    .with_default(json!("/ingest"))
                    .basic(),
            )
            .property(
                "method",
                PropertySchema::enumeration(["POST", "PUT"])
                    .described("Accepted HTTP method")
                    .with_default(json!("POST")),
            )
            .require("port"),
        ports: vec![PortSpec::output("out")],
    }
}
