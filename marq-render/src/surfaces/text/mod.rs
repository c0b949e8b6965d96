//! Plain text surface
//!
//! Projects the node sequence onto unadorned terminal text: heading text on
//! its own line with a per-level underline adornment, inline runs joined by
//! single spaces with the emphasis delimiters stripped, line breaks as hard
//! breaks, the terminal `Error` node as an `error:` line.

use crate::error::RenderError;
use crate::surface::Surface;
use marq_core::{Document, Node};

// Underline adornment per heading level, deepest last.
const ADORNMENTS: [char; 6] = ['=', '-', '~', '^', '"', '\''];

/// Render a document as plain text
pub fn render_to_text(doc: &Document) -> String {
    let mut output = String::new();
    let mut inline_open = false;

    for node in doc.iter() {
        match node {
            Node::Heading { level, text } => {
                if inline_open {
                    output.push_str("\n\n");
                    inline_open = false;
                }
                let adornment = ADORNMENTS[((*level).clamp(1, 6) - 1) as usize];
                let width = text.chars().count().max(1);
                output.push_str(text);
                output.push('\n');
                output.push_str(&adornment.to_string().repeat(width));
                output.push_str("\n\n");
            }
            Node::Paragraph { text } | Node::Emphasis { text, .. } => {
                if inline_open {
                    output.push(' ');
                }
                output.push_str(text);
                inline_open = true;
            }
            Node::LineBreak => {
                output.push('\n');
                inline_open = false;
            }
            Node::Error { message } => {
                if inline_open {
                    output.push_str("\n\n");
                    inline_open = false;
                }
                output.push_str("error: ");
                output.push_str(message);
                output.push('\n');
                break;
            }
        }
    }

    while output.ends_with('\n') {
        output.pop();
    }
    if !output.is_empty() {
        output.push('\n');
    }
    output
}

/// Surface implementation for plain text
pub struct TextSurface;

impl Surface for TextSurface {
    fn name(&self) -> &str {
        "text"
    }

    fn description(&self) -> &str {
        "Plain text with underlined headings"
    }

    fn file_extensions(&self) -> &[&str] {
        &["txt"]
    }

    fn render(&self, doc: &Document) -> Result<String, RenderError> {
        Ok(render_to_text(doc))
    }
}
