//! Canonical markup surface (marq → marq export)
//!
//! Re-serializes the node sequence back into the dialect itself: `#` runs
//! for headings, `**`/`*` delimiters for emphasis, word runs joined by
//! single spaces. This is the native-format serializer: rendering a cleanly
//! parsed document and parsing the output again yields the same node
//! sequence.
//!
//! The `Error` node has no markup syntax; it is rendered as a `!!` line so
//! the diagnostic stays visible, and nothing after it is serialized. A
//! failed document therefore re-parses as a failed document.

use crate::error::RenderError;
use crate::surface::Surface;
use marq_core::{Document, EmphasisStyle, Node};

/// Serialize a document back into canonical marq markup
pub fn serialize_to_markup(doc: &Document) -> String {
    MarkupSerializer::default().run(doc)
}

#[derive(Default)]
struct MarkupSerializer {
    output: String,
    // An inline run (paragraph words, emphasis spans) is open and the next
    // inline node needs a separating space.
    inline_open: bool,
}

impl MarkupSerializer {
    fn run(mut self, doc: &Document) -> String {
        for node in doc.iter() {
            match node {
                Node::Heading { level, text } => {
                    self.close_run();
                    self.output.push_str(&"#".repeat(*level as usize));
                    if !text.is_empty() {
                        self.output.push(' ');
                        self.output.push_str(text);
                    }
                    self.output.push_str("\n\n");
                }
                Node::Paragraph { text } => {
                    self.separate();
                    self.output.push_str(text);
                }
                Node::Emphasis {
                    style: EmphasisStyle::Bold,
                    text,
                } => {
                    self.separate();
                    self.output.push_str("**");
                    self.output.push_str(text);
                    self.output.push_str("**");
                }
                Node::Emphasis {
                    style: EmphasisStyle::Italic,
                    text,
                } => {
                    self.separate();
                    self.output.push('*');
                    self.output.push_str(text);
                    self.output.push('*');
                }
                Node::LineBreak => {
                    self.output.push('\n');
                    self.inline_open = false;
                }
                Node::Error { message } => {
                    self.close_run();
                    self.output.push_str("!! ");
                    self.output.push_str(message);
                    self.output.push('\n');
                    break;
                }
            }
        }
        self.finish()
    }

    fn separate(&mut self) {
        if self.inline_open {
            self.output.push(' ');
        }
        self.inline_open = true;
    }

    fn close_run(&mut self) {
        if self.inline_open {
            self.output.push_str("\n\n");
            self.inline_open = false;
        }
    }

    fn finish(mut self) -> String {
        while self.output.ends_with('\n') {
            self.output.pop();
        }
        if !self.output.is_empty() {
            self.output.push('\n');
        }
        self.output
    }
}

/// Surface implementation for canonical markup
pub struct MarkupSurface;

impl Surface for MarkupSurface {
    fn name(&self) -> &str {
        "markup"
    }

    fn description(&self) -> &str {
        "Canonical marq markup"
    }

    fn file_extensions(&self) -> &[&str] {
        &["mq", "marq"]
    }

    fn render(&self, doc: &Document) -> Result<String, RenderError> {
        Ok(serialize_to_markup(doc))
    }
}
