//! Local validation of generation responses.
//!
//! The endpoint is asked for a schema-constrained response, but nothing is
//! cached until the body is checked again here: required fields, field
//! types, and the exact feature count. Supported schema keywords are the
//! subset the content schema uses: `type`, `properties`, `required`,
//! `items`, `minItems`, `maxItems`.

use serde_json::Value;

/// One validation failure, anchored to a field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    pub path: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            f.write_str(&self.message)
        } else {
            write!(f, "{} (at {})", self.message, self.path)
        }
    }
}

/// Validator for structured output.
pub struct OutputValidator {
    schema: Value,
}

impl OutputValidator {
    pub fn new(schema: Value) -> Self {
        Self { schema }
    }

    /// Validate `data` against the schema. An empty vector means valid.
    pub fn validate(&self, data: &Value) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check(data, &self.schema, "", &mut errors);
        errors
    }
}

fn check(data: &Value, schema: &Value, path: &str, errors: &mut Vec<ValidationError>) {
    let schema_type = schema.get("type").and_then(|t| t.as_str());
    if let Some(expected) = schema_type {
        if !type_matches(data, expected) {
            errors.push(ValidationError {
                message: format!(
                    "expected type '{}', got '{}'",
                    expected,
                    type_name(data)
                ),
                path: path.to_string(),
            });
            return;
        }
    }

    if schema_type == Some("object") {
        check_object(data, schema, path, errors);
    }
    if schema_type == Some("array") {
        check_array(data, schema, path, errors);
    }
}

fn check_object(data: &Value, schema: &Value, path: &str, errors: &mut Vec<ValidationError>) {
    let obj = match data.as_object() {
        Some(o) => o,
        None => return,
    };

    if let Some(required) = schema.get("required").and_then(|r| r.as_array()) {
        for name in required.iter().filter_map(|v| v.as_str()) {
            if !obj.contains_key(name) {
                errors.push(ValidationError {
                    message: format!("missing required property: {name}"),
                    path: format!("{path}.{name}"),
                });
            }
        }
    }

    if let Some(properties) = schema.get("properties").and_then(|p| p.as_object()) {
        for (name, prop_schema) in properties {
            if let Some(value) = obj.get(name) {
                check(value, prop_schema, &format!("{path}.{name}"), errors);
            }
        }
    }
}

fn check_array(data: &Value, schema: &Value, path: &str, errors: &mut Vec<ValidationError>) {
    let arr = match data.as_array() {
        Some(a) => a,
        None => return,
    };

    if let Some(min) = schema.get("minItems").and_then(|m| m.as_u64()) {
        if (arr.len() as u64) < min {
            errors.push(ValidationError {
                message: format!("array too short (minimum {min} items)"),
                path: path.to_string(),
            });
        }
    }
    if let Some(max) = schema.get("maxItems").and_then(|m| m.as_u64()) {
        if (arr.len() as u64) > max {
            errors.push(ValidationError {
                message: format!("array too long (maximum {max} items)"),
                path: path.to_string(),
            });
        }
    }

    if let Some(items_schema) = schema.get("items") {
        for (i, item) in arr.iter().enumerate() {
            check(item, items_schema, &format!("{path}[{i}]"), errors);
        }
    }
}

fn type_matches(data: &Value, expected: &str) -> bool {
    match expected {
        "string" => data.is_string(),
        "integer" => data.is_i64(),
        "number" => data.is_number(),
        "boolean" => data.is_boolean(),
        "array" => data.is_array(),
        "object" => data.is_object(),
        "null" => data.is_null(),
        _ => true,
    }
}

fn type_name(data: &Value) -> &'static str {
    match data {
        Value::String(_) => "string",
        Value::Number(_) => "number",
        Value::Bool(_) => "boolean",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        Value::Null => "null",
    }
}
