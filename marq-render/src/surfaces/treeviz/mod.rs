//! Treeviz surface for the node sequence
//!
//! Treeviz is a visual representation of the document, designed for quick
//! inspection. The marq node sequence is flat, so the tree has exactly one
//! level: a document root line followed by one connector line per node.
//!
//! The format is:
//! <connector><space><icon><space><label> (truncated, default 30 characters)
//!
//! Example:
//!
//!   ⧉ Document (3 nodes)
//!   ├─ § Title
//!   ├─ 𝐁 bold
//!   └─ ¶ para
//!
//! Parameters:
//!   - `max-label-length`: label truncation width
//!   - `show-index`: prefix each line with the node ordinal

use super::icons::get_icon;
use crate::error::RenderError;
use crate::surface::Surface;
use marq_core::{Document, Node};
use std::collections::HashMap;

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_params(doc, &HashMap::new())
}

/// Convert a document to a treeviz string with optional parameters
pub fn to_treeviz_str_with_params(doc: &Document, params: &HashMap<String, String>) -> String {
    let max_label = params
        .get("max-label-length")
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(30);
    let show_index = params
        .get("show-index")
        .map(|v| v != "false")
        .unwrap_or(false);

    let icon = get_icon("Document");
    let mut output = format!("{icon} Document ({} nodes)\n", doc.len());

    let count = doc.len();
    for (i, node) in doc.iter().enumerate() {
        let connector = if i == count - 1 { "└─" } else { "├─" };
        let index_prefix = if show_index {
            format!("{i:02} ")
        } else {
            String::new()
        };
        let icon = get_icon(node.kind_name());
        let label = truncate_label(node.display_label(), max_label);

        if label.is_empty() {
            output.push_str(&format!("{index_prefix}{connector} {icon}\n"));
        } else {
            output.push_str(&format!("{index_prefix}{connector} {icon} {label}\n"));
        }

        // The diagnostic node is terminal for every surface.
        if matches!(node, Node::Error { .. }) {
            break;
        }
    }

    output
}

fn truncate_label(label: &str, max: usize) -> String {
    if label.chars().count() <= max {
        label.to_string()
    } else {
        let truncated: String = label.chars().take(max.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}

/// Surface implementation for treeviz
pub struct TreevizSurface;

impl Surface for TreevizSurface {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn description(&self) -> &str {
        "Visual tree representation with Unicode icons"
    }

    fn file_extensions(&self) -> &[&str] {
        &["tree", "treeviz"]
    }

    fn render(&self, doc: &Document) -> Result<String, RenderError> {
        Ok(to_treeviz_str(doc))
    }

    fn render_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        Ok(to_treeviz_str_with_params(doc, options))
    }
}
