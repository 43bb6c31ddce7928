//! Parameter extraction from JSON Schema.
//!
//! Tool input schemas arrive as arbitrary JSON Schema objects. This module
//! flattens the top-level `properties` of such a schema into [`Parameter`]
//! values, which is all the README needs to know about them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single documented tool parameter.
///
/// # Examples
///
/// ```
/// use mcp_readme_core::Parameter;
///
/// let param = Parameter::new("url", true)
///     .with_type("string")
///     .with_description("The URL to navigate to");
///
/// assert_eq!(param.name, "url");
/// assert!(param.required);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    /// Property key in the schema.
    pub name: String,
    /// Declared JSON type, when the schema states one.
    pub type_name: Option<String>,
    /// Human-readable description, when the schema provides one.
    pub description: Option<String>,
    /// Whether the property is listed in the schema's `required` array.
    pub required: bool,
}

impl Parameter {
    /// Creates a parameter with no type or description.
    #[must_use]
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            type_name: None,
            description: None,
            required,
        }
    }

    /// Sets the declared type.
    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = Some(type_name.into());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Extracts parameters from a JSON Schema object.
///
/// Parameters come out in the order the schema declares its properties.
/// Schemas without `properties` yield no parameters.
///
/// # Examples
///
/// ```
/// use mcp_readme_core::extract_parameters;
/// use serde_json::json;
///
/// let schema = json!({
///     "type": "object",
///     "properties": {
///         "element": { "type": "string", "description": "Element description" },
///         "doubleClick": { "type": "boolean" }
///     },
///     "required": ["element"]
/// });
///
/// let params = extract_parameters(&schema);
/// assert_eq!(params.len(), 2);
/// assert!(params[0].required);
/// assert!(!params[1].required);
/// ```
#[must_use]
pub fn extract_parameters(input_schema: &Value) -> Vec<Parameter> {
    let Some(properties) = input_schema.get("properties").and_then(Value::as_object) else {
        return vec![];
    };

    let required = input_schema
        .get("required")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).collect::<Vec<_>>())
        .unwrap_or_default();

    properties
        .iter()
        .map(|(name, schema)| Parameter {
            name: name.clone(),
            type_name: schema.get("type").and_then(type_label),
            description: schema
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_string),
            required: required.contains(&name.as_str()),
        })
        .collect()
}

/// Renders a schema `type` keyword as a label.
///
/// Union types such as `["string", "null"]` lose their `null` member, since
/// nullability is already conveyed by the `optional` tag.
fn type_label(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(types) => {
            let names: Vec<&str> = types
                .iter()
                .filter_map(Value::as_str)
                .filter(|t| *t != "null")
                .collect();
            if names.is_empty() {
                None
            } else {
                Some(names.join(" | "))
            }
        }
        _ => None,
    }
}
