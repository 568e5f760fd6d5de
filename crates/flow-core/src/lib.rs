//! Flow Core - graph model and configuration validation for Skein
//!
//! This crate is the editor-side core of the Skein flow editor: the flow
//! graph data model, the configuration-schema validation engine, and the
//! normalization gate every externally-sourced flow passes through. It
//! encodes, independently of the backend, exactly the acceptance rules the
//! server enforces at save time, so a flow definition can be checked before
//! it is ever transmitted.
//!
//! It deliberately does NOT execute flows, perform I/O, or render anything;
//! every operation is a synchronous pure function over borrowed inputs.
//!
//! # Architecture
//!
//! - [`schema`]: passive property/config schema definitions
//! - [`validate`]: field, config, and flow-level validation plus the save
//!   gate and server-error merging
//! - [`flow`]: `Flow`/`FlowNode`/`FlowConnection` and their structural
//!   invariants, enforced at every mutation boundary
//! - [`normalize`]: the mandatory coercion gate for wire payloads
//! - [`catalog`]: injected read-only component-type registry
//! - [`generator`]: AI-generator output contract and candidate review
//!
//! # Example
//!
//! ```
//! use flow_core::builder::FlowBuilder;
//! use flow_core::catalog::ComponentCatalog;
//! use flow_core::validate::{validate_for_save, ValidationPolicy};
//!
//! let flow = FlowBuilder::new("flow-1", "Ingest")
//!     .add_node("in-1", "udp-input", (0.0, 0.0))
//!     .with_config(serde_json::json!({"port": 5000, "host": "0.0.0.0"}))
//!     .build()
//!     .unwrap();
//!
//! // An empty catalog treats every component type as "not yet known"
//! let catalog = ComponentCatalog::new();
//! assert!(validate_for_save(&flow, &catalog, &ValidationPolicy::default()).is_ok());
//! ```

pub mod builder;
pub mod catalog;
pub mod error;
pub mod flow;
pub mod generator;
pub mod normalize;
pub mod schema;
pub mod validate;

// Re-export key types
pub use builder::FlowBuilder;
pub use catalog::{ComponentCatalog, ComponentType, PortDirection, PortSpec};
pub use error::{FlowError, Result};
pub use flow::{Flow, FlowConnection, FlowNode, Position, RuntimeState};
pub use normalize::{normalize, normalize_value, RawFlow};
pub use schema::{ConfigSchema, PropertySchema, PropertyType};
pub use validate::{
    merge_server_errors, validate_config, validate_field, validate_flow, validate_for_save,
    ErrorCode, NodeErrors, SaveError, ValidationError, ValidationPolicy,
};
