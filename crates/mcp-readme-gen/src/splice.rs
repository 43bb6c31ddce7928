//! Marker-delimited region replacement.
//!
//! A generated region looks like this in the README:
//!
//! ```markdown
//! <!--- Tools generated by mcp-readme -->
//!
//! ...generated lines...
//!
//! <!--- End of tools generated section -->
//! ```
//!
//! Everything strictly between the two markers belongs to the generator and is
//! replaced wholesale. Everything else is preserved byte for byte.

use mcp_readme_core::{Error, GeneratorId, Result};

/// Start and end markers of one generated region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerPair {
    start: String,
    end: String,
}

impl MarkerPair {
    /// Creates a marker pair from literal marker strings.
    #[must_use]
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Markers around the tool tables.
    ///
    /// # Examples
    ///
    /// ```
    /// use mcp_readme_core::GeneratorId;
    /// use mcp_readme_gen::MarkerPair;
    ///
    /// let markers = MarkerPair::tools(&GeneratorId::default());
    /// assert_eq!(markers.start(), "<!--- Tools generated by mcp-readme -->");
    /// assert_eq!(markers.end(), "<!--- End of tools generated section -->");
    /// ```
    #[must_use]
    pub fn tools(generator: &GeneratorId) -> Self {
        Self::new(
            format!("<!--- Tools generated by {generator} -->"),
            "<!--- End of tools generated section -->",
        )
    }

    /// Markers around the CLI options block.
    #[must_use]
    pub fn options(generator: &GeneratorId) -> Self {
        Self::new(
            format!("<!--- Options generated by {generator} -->"),
            "<!--- End of options generated section -->",
        )
    }

    /// Returns the start marker.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the end marker.
    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    fn not_found(&self) -> Error {
        Error::MarkersNotFound {
            start: self.start.clone(),
            end: self.end.clone(),
        }
    }
}

/// Replaces the content between a marker pair with `lines`.
///
/// The result is the document up to and including the start marker, a blank
/// line, `lines` joined with `\n`, a blank line, and the document from the end
/// marker onward.
///
/// # Errors
///
/// - `Error::MarkersNotFound` if either marker is absent
/// - `Error::DuplicateMarker` if either marker occurs more than once
/// - `Error::MarkersOutOfOrder` if the end marker does not follow the start marker
///
/// # Examples
///
/// ```
/// use mcp_readme_gen::{MarkerPair, replace_between};
///
/// let markers = MarkerPair::new("<!-- start -->", "<!-- end -->");
/// let doc = "# Title\n<!-- start -->\nold\n<!-- end -->\nfooter\n";
///
/// let updated = replace_between(doc, &markers, &["new".to_string()]).unwrap();
/// assert_eq!(updated, "# Title\n<!-- start -->\n\nnew\n\n<!-- end -->\nfooter\n");
/// ```
pub fn replace_between(document: &str, markers: &MarkerPair, lines: &[String]) -> Result<String> {
    let start = find_unique(document, markers.start(), markers)?;
    let end = find_unique(document, markers.end(), markers)?;

    let head_end = start + markers.start().len();
    if end < head_end {
        return Err(Error::MarkersOutOfOrder {
            start: markers.start.clone(),
            end: markers.end.clone(),
        });
    }

    let head = &document[..head_end];
    let tail = &document[end..];
    let body = lines.join("\n");

    let mut out = String::with_capacity(head.len() + body.len() + tail.len() + 4);
    out.push_str(head);
    out.push_str("\n\n");
    out.push_str(&body);
    out.push_str("\n\n");
    out.push_str(tail);
    Ok(out)
}

fn find_unique(document: &str, marker: &str, markers: &MarkerPair) -> Result<usize> {
    let mut matches = document.match_indices(marker).map(|(index, _)| index);

    let first = matches.next().ok_or_else(|| markers.not_found())?;
    let extra = matches.count();
    if extra > 0 {
        return Err(Error::DuplicateMarker {
            marker: marker.to_string(),
            count: extra + 1,
        });
    }
    Ok(first)
}
