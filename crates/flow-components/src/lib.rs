//! Built-in components for the Skein flow editor
//!
//! Each function returns the [`ComponentType`] for one kind of node: its
//! display metadata, configuration schema, and ports. The editor loads the
//! authoritative catalog from the server; this crate is the same definitions
//! for embedded use and for test fixtures.
//!
//! # Categories
//!
//! - **Input**: sources that bring data into a flow (UDP, TCP, HTTP)
//! - **Processing**: stages that transform records in transit
//! - **Output**: sinks that deliver records (UDP, file, WebSocket)

pub mod input;
pub mod output;
pub mod processing;

pub use input::*;
pub use output::*;
pub use processing::*;

use flow_core::catalog::ComponentCatalog;

/// Catalog containing every built-in component type
pub fn builtin_catalog() -> ComponentCatalog {
    ComponentCatalog::from_components([
        input::udp_input(),
        input::tcp_input(),
        input::http_input(),
        processing::json_filter(),
        processing::field_mapper(),
        processing::throttle(),
        output::udp_output(),
        output::file_output(),
        output::websocket_output(),
    ])
}
