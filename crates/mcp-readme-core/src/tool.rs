//! Tool descriptors.
//!
//! A [`ToolSchema`] carries everything the README documents about one tool.
//! Descriptors are either deserialized from a catalog file (MCP field names,
//! so a dumped `tools/list` result is accepted) or built in code, with the
//! input schema derived from a parameter struct via `schemars`.

use crate::{Error, Parameter, Result, ToolName, extract_parameters};
use schemars::JsonSchema;
use schemars::r#gen::SchemaSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Whether a tool only observes state or may change it.
///
/// Unrecognised values deserialize as [`ToolType::Destructive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ToolType {
    /// Tool does not modify its environment.
    ReadOnly,
    /// Tool may modify its environment.
    #[default]
    #[serde(other)]
    Destructive,
}

/// Descriptor of one documented tool.
///
/// # Examples
///
/// ```
/// use mcp_readme_core::{ToolSchema, ToolType};
/// use serde_json::json;
///
/// let tool = ToolSchema::new(
///     "browser_snapshot",
///     "Page snapshot",
///     "Capture accessibility snapshot of the current page",
///     ToolType::ReadOnly,
/// )
/// .with_input_schema(json!({ "type": "object", "properties": {} }));
///
/// assert!(tool.is_read_only());
/// assert!(tool.parameters().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawToolSchema", rename_all = "camelCase")]
pub struct ToolSchema {
    /// Tool name as exposed to clients.
    pub name: ToolName,
    /// Short human-readable title.
    pub title: String,
    /// Longer description of what the tool does.
    pub description: String,
    /// JSON Schema of the tool input, if the tool takes any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<Value>,
    /// Read-only or destructive.
    #[serde(rename = "type")]
    pub tool_type: ToolType,
}

impl ToolSchema {
    /// Creates a descriptor without an input schema.
    #[must_use]
    pub fn new(
        name: impl Into<ToolName>,
        title: impl Into<String>,
        description: impl Into<String>,
        tool_type: ToolType,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            description: description.into(),
            input_schema: None,
            tool_type,
        }
    }

    /// Sets the input schema from a raw JSON Schema value.
    #[must_use]
    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = Some(schema);
        self
    }

    /// Sets the input schema from a parameter type deriving `JsonSchema`.
    ///
    /// Subschemas are inlined so every property carries its own `type`.
    ///
    /// # Errors
    ///
    /// Returns `Error::SerializationError` if the generated schema cannot be
    /// converted to JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_readme_core::{ToolSchema, ToolType};
    /// use schemars::JsonSchema;
    ///
    /// #[derive(JsonSchema)]
    /// #[allow(dead_code)]
    /// struct NavigateParams {
    ///     /// The URL to navigate to
    ///     url: String,
    /// }
    ///
    /// let tool = ToolSchema::new("browser_navigate", "Navigate to a URL", "Navigate to a URL", ToolType::Destructive)
    ///     .with_params::<NavigateParams>()
    ///     .unwrap();
    ///
    /// let params = tool.parameters();
    /// assert_eq!(params[0].name, "url");
    /// assert!(params[0].required);
    /// ```
    pub fn with_params<P: JsonSchema>(mut self) -> Result<Self> {
        let generator = SchemaSettings::draft07()
            .with(|s| s.inline_subschemas = true)
            .into_generator();
        let root = generator.into_root_schema_for::<P>();

        let schema = serde_json::to_value(root).map_err(|e| Error::SerializationError {
            message: format!("failed to convert input schema of '{}'", self.name),
            source: Some(e),
        })?;

        self.input_schema = Some(schema);
        Ok(self)
    }

    /// Returns `true` if the tool is read-only.
    #[inline]
    #[must_use]
    pub fn is_read_only(&self) -> bool {
        self.tool_type == ToolType::ReadOnly
    }

    /// Returns the documented parameters, in declared order.
    #[must_use]
    pub fn parameters(&self) -> Vec<Parameter> {
        self.input_schema
            .as_ref()
            .map(extract_parameters)
            .unwrap_or_default()
    }
}

/// Wire shape accepted when reading descriptors.
///
/// MCP servers report read-only tools through `annotations.readOnlyHint`
/// rather than `type`, and may put the title under `annotations` as well.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawToolSchema {
    name: ToolName,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    input_schema: Option<Value>,
    #[serde(default, rename = "type")]
    tool_type: Option<ToolType>,
    #[serde(default)]
    annotations: Option<RawAnnotations>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAnnotations {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    read_only_hint: Option<bool>,
}

impl From<RawToolSchema> for ToolSchema {
    fn from(raw: RawToolSchema) -> Self {
        let (annotated_title, read_only_hint) = raw
            .annotations
            .map(|a| (a.title, a.read_only_hint))
            .unwrap_or_default();

        let tool_type = raw.tool_type.unwrap_or(match read_only_hint {
            Some(true) => ToolType::ReadOnly,
            _ => ToolType::Destructive,
        });

        let title = raw
            .title
            .or(annotated_title)
            .unwrap_or_else(|| raw.name.to_string());

        Self {
            name: raw.name,
            title,
            description: raw.description.unwrap_or_default(),
            input_schema: raw.input_schema,
            tool_type,
        }
    }
}
