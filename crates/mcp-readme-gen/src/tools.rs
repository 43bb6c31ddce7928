//! Tool table rendering.
//!
//! Turns a [`ToolCatalog`] into Markdown lines: one collapsible `<details>`
//! section per category, containing a bullet block per tool.

use mcp_readme_core::{GeneratorId, Parameter, ToolCatalog, ToolSchema};

/// Renders every category of the catalog.
///
/// Pure and deterministic: the same catalog always yields the same lines.
///
/// # Examples
///
/// ```
/// use mcp_readme_core::{GeneratorId, ToolCatalog, ToolSchema, ToolType};
/// use mcp_readme_gen::render_tools;
///
/// let catalog = ToolCatalog::new().category(
///     "Utilities",
///     vec![ToolSchema::new("browser_close", "Close browser", "Close the page", ToolType::ReadOnly)],
/// );
///
/// let lines = render_tools(&catalog, &GeneratorId::default());
/// assert_eq!(lines[0], "<details>");
/// assert_eq!(lines[1], "<summary><b>Utilities</b></summary>");
/// assert!(lines.contains(&"  - Read-only: **true**".to_string()));
/// ```
#[must_use]
pub fn render_tools(catalog: &ToolCatalog, generator: &GeneratorId) -> Vec<String> {
    let mut lines = Vec::new();

    for category in catalog {
        lines.push("<details>".to_string());
        lines.push(format!("<summary><b>{}</b></summary>", category.name));
        lines.push(String::new());
        for tool in &category.tools {
            lines.extend(format_tool(tool, generator));
        }
        lines.push("</details>".to_string());
        lines.push(String::new());
    }

    lines
}

/// Renders the bullet block for a single tool, including its trailing blank line.
///
/// # Examples
///
/// ```
/// use mcp_readme_core::{GeneratorId, ToolSchema, ToolType};
/// use mcp_readme_gen::format_tool;
///
/// let tool = ToolSchema::new("browser_close", "Close browser", "Close the page", ToolType::Destructive);
/// let lines = format_tool(&tool, &GeneratorId::default());
///
/// assert_eq!(lines, vec![
///     "<!-- NOTE: This has been generated via mcp-readme -->",
///     "",
///     "- **browser_close**",
///     "  - Title: Close browser",
///     "  - Description: Close the page",
///     "  - Parameters: None",
///     "  - Read-only: **false**",
///     "",
/// ]);
/// ```
#[must_use]
pub fn format_tool(tool: &ToolSchema, generator: &GeneratorId) -> Vec<String> {
    let mut lines = vec![
        format!("<!-- NOTE: This has been generated via {generator} -->"),
        String::new(),
        format!("- **{}**", tool.name),
        format!("  - Title: {}", tool.title),
        format!("  - Description: {}", tool.description),
    ];

    let parameters = tool.parameters();
    if parameters.is_empty() {
        lines.push("  - Parameters: None".to_string());
    } else {
        lines.push("  - Parameters:".to_string());
        lines.extend(parameters.iter().map(format_parameter));
    }

    lines.push(format!("  - Read-only: **{}**", tool.is_read_only()));
    lines.push(String::new());
    lines
}

/// Renders one parameter line, e.g. ``    - `url` (string): The URL``.
///
/// The parenthesised tag lists the declared type and, for parameters not in
/// the schema's `required` set, the word `optional`. It is left out when it
/// would be empty, as is the `: description` suffix.
#[must_use]
pub fn format_parameter(param: &Parameter) -> String {
    let mut meta = Vec::with_capacity(2);
    if let Some(type_name) = &param.type_name {
        meta.push(type_name.as_str());
    }
    if !param.required {
        meta.push("optional");
    }

    let mut line = format!("    - `{}`", param.name);
    if !meta.is_empty() {
        line.push_str(&format!(" ({})", meta.join(", ")));
    }
    if let Some(description) = &param.description {
        line.push_str(&format!(": {description}"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcp_readme_core::ToolType;
    use serde_json::json;

    fn navigate() -> ToolSchema {
        ToolSchema::new(
            "browser_navigate",
            "Navigate to a URL",
            "Navigate to a URL",
            ToolType::Destructive,
        )
        .with_input_schema(json!({
            "type": "object",
            "properties": {
                "url": { "type": "string", "description": "The URL to navigate to" }
            },
            "required": ["url"]
        }))
    }

    #[test]
    fn test_format_parameter_required_and_optional() {
        let p1 = Parameter::new("p1", true)
            .with_type("string")
            .with_description("First parameter");
        let p2 = Parameter::new("p2", false).with_type("number");

        assert_eq!(format_parameter(&p1), "    - `p1` (string): First parameter");
        assert_eq!(format_parameter(&p2), "    - `p2` (number, optional)");
    }

    #[test]
    fn test_format_parameter_without_type() {
        let untyped_optional = Parameter::new("values", false).with_description("Anything");
        assert_eq!(
            format_parameter(&untyped_optional),
            "    - `values` (optional): Anything"
        );

        let bare = Parameter::new("ref", true).with_description("Element reference");
        assert_eq!(format_parameter(&bare), "    - `ref`: Element reference");
    }

    #[test]
    fn test_format_tool_with_parameters() {
        let lines = format_tool(&navigate(), &GeneratorId::default());
        assert_eq!(
            lines,
            vec![
                "<!-- NOTE: This has been generated via mcp-readme -->",
                "",
                "- **browser_navigate**",
                "  - Title: Navigate to a URL",
                "  - Description: Navigate to a URL",
                "  - Parameters:",
                "    - `url` (string): The URL to navigate to",
                "  - Read-only: **false**",
                "",
            ]
        );
    }

    #[test]
    fn test_format_tool_empty_properties_is_none() {
        let tool = ToolSchema::new("browser_tabs", "Tabs", "List tabs", ToolType::ReadOnly)
            .with_input_schema(json!({ "type": "object", "properties": {} }));
        let lines = format_tool(&tool, &GeneratorId::default());

        assert!(lines.contains(&"  - Parameters: None".to_string()));
        assert!(!lines.iter().any(|l| l.starts_with("    - ")));
        assert!(lines.contains(&"  - Read-only: **true**".to_string()));
    }

    #[test]
    fn test_render_tools_structure() {
        let catalog = ToolCatalog::new()
            .category("Navigation", vec![navigate()])
            .category("Vision mode", vec![navigate()]);

        let lines = render_tools(&catalog, &GeneratorId::default());

        let summaries: Vec<_> = lines
            .iter()
            .filter(|l| l.starts_with("<summary>"))
            .collect();
        assert_eq!(
            summaries,
            [
                "<summary><b>Navigation</b></summary>",
                "<summary><b>Vision mode</b></summary>"
            ]
        );

        let closers = lines.iter().filter(|l| *l == "</details>").count();
        assert_eq!(closers, 2);

        assert_eq!(lines[2], "");
        assert_eq!(lines.last().map(String::as_str), Some(""));
    }

    #[test]
    fn test_render_tools_empty_catalog() {
        assert!(render_tools(&ToolCatalog::new(), &GeneratorId::default()).is_empty());
    }

    #[test]
    fn test_render_tools_deterministic() {
        let catalog = ToolCatalog::new().category("Navigation", vec![navigate()]);
        let id = GeneratorId::default();
        assert_eq!(render_tools(&catalog, &id), render_tools(&catalog, &id));
    }
}
