//! Whole-config validation and server-error merging
//!
//! Runs the field validator across every declared property and collects
//! every failure — no early exit, so the form can surface all problems in
//! one pass.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::schema::ConfigSchema;
use crate::validate::field::{validate_field, ValidationError};

/// Validate a node configuration against its schema
///
/// Errors come back in schema declaration order, one entry per failing
/// property. Config keys with no schema entry are ignored, as are `required`
/// names that have no matching property (tolerated producer sloppiness,
/// never fatal).
pub fn validate_config(
    config: &serde_json::Map<String, serde_json::Value>,
    schema: &ConfigSchema,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    for (name, property) in &schema.properties {
        let is_required = schema.is_required(name);
        if let Some(error) = validate_field(name, config.get(name), property, is_required) {
            errors.push(error);
        }
    }
    errors
}

/// JSON body of a non-2xx save response carrying server-side validation
/// failures
///
/// The HTTP exchange itself lives outside this core; callers deserialize the
/// body into this shape and fold it into local errors with
/// [`merge_server_errors`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerErrorBody {
    #[serde(default)]
    pub errors: Vec<ValidationError>,
}

/// Merge server-reported errors into locally-computed ones
///
/// The server is authoritative at save time: a server error for a field
/// replaces any local error for that field. Local errors for other fields
/// keep their relative order; server errors are appended in theirs.
pub fn merge_server_errors(
    local: Vec<ValidationError>,
    server: Vec<ValidationError>,
) -> Vec<ValidationError> {
    let server_fields: HashSet<&str> = server.iter().map(|e| e.field.as_str()).collect();
    let mut merged: Vec<ValidationError> = local
        .into_iter()
        .filter(|e| !server_fields.contains(e.field.as_str()))
        .collect();
    merged.extend(server);
    merged
}
