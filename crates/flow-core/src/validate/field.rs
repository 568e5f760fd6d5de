//! Per-field configuration validation
//!
//! One (name, value) pair is checked against one [`PropertySchema`]. Checks
//! run in a fixed order and the first failure wins: required → optional-empty
//! short-circuit → numeric bounds → enum membership → boolean shape. String,
//! ports, object, and unknown property types carry no constraints.
//!
//! The error `code` taxonomy is a wire contract shared with the server
//! validator; local and server errors are merged by code and field. A new
//! constraint kind must mint its own code, never reuse one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::{PropertySchema, PropertyType};

/// Machine-readable error code, shared with the server validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// Required value is missing or empty
    Required,
    /// Numeric value below the declared minimum
    Min,
    /// Numeric value above the declared maximum
    Max,
    /// Value is not one of the allowed enum choices
    Enum,
    /// Value has the wrong shape for the declared type
    Type,
    /// Node references a component type the catalog doesn't know.
    /// Server-originated; raised locally only when
    /// [`ValidationPolicy::flag_unknown_components`](crate::validate::ValidationPolicy)
    /// is set.
    UnknownComponent,
}

/// A recoverable configuration problem, always returned as data
///
/// Never persisted; computed on demand and consumed immediately by the
/// caller (form highlighting, save gating).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Property name the error applies to
    pub field: String,
    /// Human-readable message
    pub message: String,
    /// Machine-readable code
    pub code: ErrorCode,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code,
        }
    }
}

/// Whether a value counts as "not provided" for required/optional purposes
fn is_empty(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        _ => false,
    }
}

/// Coerce a JSON value to a number, parsing strings the way the server does
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Render a value for enum membership comparison
fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Validate one field value against one property schema
///
/// Returns the first failing check, or `None` if the value is acceptable.
/// An optional field with an absent/empty value short-circuits to `None`
/// before any type constraint is considered.
pub fn validate_field(
    field: &str,
    value: Option<&Value>,
    schema: &PropertySchema,
    is_required: bool,
) -> Option<ValidationError> {
    if is_empty(value) {
        if is_required {
            return Some(ValidationError::new(
                field,
                format!("{field} is required"),
                ErrorCode::Required,
            ));
        }
        return None;
    }

    // is_empty returned false, so a value is present from here on
    let value = value?;

    match schema.kind {
        PropertyType::Int | PropertyType::Float => {
            let number = match coerce_number(value) {
                Some(n) if !n.is_nan() => n,
                _ => {
                    return Some(ValidationError::new(
                        field,
                        format!("{field} must be a number"),
                        ErrorCode::Type,
                    ));
                }
            };
            if let Some(minimum) = schema.minimum {
                if number < minimum {
                    return Some(ValidationError::new(
                        field,
                        format!("{field} must be at least {minimum}"),
                        ErrorCode::Min,
                    ));
                }
            }
            if let Some(maximum) = schema.maximum {
                if number > maximum {
                    return Some(ValidationError::new(
                        field,
                        format!("{field} must be at most {maximum}"),
                        ErrorCode::Max,
                    ));
                }
            }
            None
        }
        PropertyType::Enum => {
            // A missing choice list behaves like an empty one: every
            // non-empty value is rejected.
            let choices = schema.choices.as_deref().unwrap_or_default();
            if choices.iter().any(|c| *c == stringify(value)) {
                None
            } else {
                Some(ValidationError::new(
                    field,
                    format!("{field} must be one of: {}", choices.join(", ")),
                    ErrorCode::Enum,
                ))
            }
        }
        PropertyType::Bool => match value {
            Value::Bool(_) => None,
            Value::String(s) if s == "true" || s == "false" => None,
            _ => Some(ValidationError::new(
                field,
                format!("{field} must be true or false"),
                ErrorCode::Type,
            )),
        },
        // No constraints beyond required-ness
        PropertyType::String
        | PropertyType::Ports
        | PropertyType::Object
        | PropertyType::Unknown => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_required_rejects_missing_null_and_empty_string() {
        let schema = PropertySchema::string();
        for value in [None, Some(json!(null)), Some(json!(""))] {
            let err = validate_field("host", value.as_ref(), &schema, true).unwrap();
            assert_eq!(err.code, ErrorCode::Required);
            assert_eq!(err.field, "host");
        }
    }

    #[test]
    fn test_optional_empty_skips_all_checks() {
        // Even a numeric schema with bounds accepts an absent optional value
        let schema = PropertySchema::int().range(1.0, 10.0);
        for value in [None, Some(json!(null)), Some(json!(""))] {
            assert!(validate_field("count", value.as_ref(), &schema, false).is_none());
        }
    }

    #[test]
    fn test_numeric_bounds_inclusive() {
        let schema = PropertySchema::int().range(1.0, 65535.0);
        assert!(validate_field("port", Some(&json!(1)), &schema, false).is_none());
        assert!(validate_field("port", Some(&json!(65535)), &schema, false).is_none());
        assert!(validate_field("port", Some(&json!(5000)), &schema, false).is_none());
    }

    #[test]
    fn test_numeric_below_minimum() {
        let schema = PropertySchema::int().range(1.0, 65535.0);
        let err = validate_field("port", Some(&json!(0)), &schema, false).unwrap();
        assert_eq!(err.code, ErrorCode::Min);
        assert!(err.message.contains('1'));
    }

    #[test]
    fn test_numeric_above_maximum() {
        let schema = PropertySchema::int().range(1.0, 65535.0);
        let err = validate_field("port", Some(&json!(99999)), &schema, false).unwrap();
        assert_eq!(err.field, "port");
        assert_eq!(err.code, ErrorCode::Max);
        assert!(err.message.contains("65535"));
    }

    #[test]
    fn test_numeric_parses_strings() {
        let schema = PropertySchema::float().range(0.0, 100.0);
        assert!(validate_field("rate", Some(&json!("42.5")), &schema, false).is_none());

        let err = validate_field("rate", Some(&json!("200")), &schema, false).unwrap();
        assert_eq!(err.code, ErrorCode::Max);
    }

    #[test]
    fn test_numeric_rejects_non_numbers() {
        let schema = PropertySchema::int();
        for value in [json!("not a number"), json!(true), json!([1]), json!("NaN")] {
            let err = validate_field("port", Some(&value), &schema, false).unwrap();
            assert_eq!(err.code, ErrorCode::Type, "value: {value}");
        }
    }

    #[test]
    fn test_enum_membership() {
        let schema = PropertySchema::enumeration(["tcp", "udp"]);
        assert!(validate_field("protocol", Some(&json!("udp")), &schema, false).is_none());

        let err = validate_field("protocol", Some(&json!("http")), &schema, false).unwrap();
        assert_eq!(err.code, ErrorCode::Enum);
        assert!(err.message.contains("tcp, udp"));
    }

    #[test]
    fn test_enum_stringifies_non_string_values() {
        let schema = PropertySchema::enumeration(["1", "2"]);
        assert!(validate_field("level", Some(&json!(1)), &schema, false).is_none());
    }

    #[test]
    fn test_empty_enum_rejects_every_non_empty_value() {
        let schema = PropertySchema::enumeration(Vec::<String>::new());
        let err = validate_field("mode", Some(&json!("anything")), &schema, false).unwrap();
        assert_eq!(err.code, ErrorCode::Enum);

        // ...but an absent optional value still passes
        assert!(validate_field("mode", None, &schema, false).is_none());
    }

    #[test]
    fn test_bool_accepts_boolean_and_literal_strings() {
        let schema = PropertySchema::bool();
        for value in [json!(true), json!(false), json!("true"), json!("false")] {
            assert!(validate_field("append", Some(&value), &schema, false).is_none());
        }

        let err = validate_field("append", Some(&json!("yes")), &schema, false).unwrap();
        assert_eq!(err.code, ErrorCode::Type);
    }

    #[test]
    fn test_unconstrained_types_accept_anything() {
        for schema in [
            PropertySchema::string(),
            PropertySchema::new(PropertyType::Ports),
            PropertySchema::new(PropertyType::Object),
            PropertySchema::new(PropertyType::Unknown),
        ] {
            assert!(validate_field("x", Some(&json!({"k": [1, 2]})), &schema, false).is_none());
        }
    }

    #[test]
    fn test_error_code_wire_names() {
        assert_eq!(serde_json::to_value(ErrorCode::Required).unwrap(), "required");
        assert_eq!(serde_json::to_value(ErrorCode::Enum).unwrap(), "enum");
        assert_eq!(serde_json::to_value(ErrorCode::Type).unwrap(), "type");
        assert_eq!(
            serde_json::to_value(ErrorCode::UnknownComponent).unwrap(),
            "unknown_component"
        );
    }
}
