//! Shared icon mapping for tree visualization surfaces
//!
//! This module provides a centralized icon mapping so that every tree-based
//! visualization stays consistent.

/// Get the Unicode icon for a given node kind
///
/// Returns a single Unicode character that visually represents the node
/// kind, keyed by [`marq_core::Node::kind_name`].
pub fn get_icon(kind_name: &str) -> &'static str {
    match kind_name {
        "Document" => "⧉",
        "Heading" => "§",
        "Paragraph" => "¶",
        "Bold" => "𝐁",
        "Italic" => "𝐼",
        "LineBreak" => "↵",
        "Error" => "✗",
        _ => "○",
    }
}
