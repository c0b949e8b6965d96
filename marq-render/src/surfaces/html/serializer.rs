//! HTML serialization (marq → HTML export)
//!
//! Converts marq documents to semantic HTML5 with embedded CSS.
//! Pipeline: node sequence → RcDom → HTML string → wrapped document

use crate::error::RenderError;
use crate::surfaces::html::HtmlOptions;
use crate::surfaces::html::HtmlTheme;
use html5ever::{
    ns, serialize, serialize::SerializeOpts, serialize::TraversalScope, Attribute, LocalName,
    QualName,
};
use marq_core::{Document, EmphasisStyle, Node as DocNode};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};
use std::cell::{Cell, RefCell};
use std::default::Default;
use std::rc::Rc;

/// Render a marq document to a complete HTML document
pub fn render_to_html(doc: &Document, options: HtmlOptions) -> Result<String, RenderError> {
    let title = doc.title().unwrap_or("Marq Document").to_string();

    // Step 1: node sequence → RcDom (HTML DOM tree)
    let dom = build_html_dom(doc)?;

    // Step 2: RcDom → HTML string
    let html_string = serialize_dom(&dom)?;

    // Step 3: wrap in a complete HTML document with CSS
    wrap_in_document(&html_string, &title, &options)
}

/// Build an HTML DOM tree from the node sequence
fn build_html_dom(doc: &Document) -> Result<RcDom, RenderError> {
    let dom = RcDom::default();

    // Create document container
    let doc_container = create_element("div", vec![("class", "marq-document")]);

    for node in doc.iter() {
        match node {
            DocNode::Heading { level, text } => {
                let heading_tag = format!("h{}", (*level).clamp(1, 6));
                let heading = create_element(&heading_tag, vec![("class", "marq-heading")]);
                heading.children.borrow_mut().push(create_text(text));
                doc_container.children.borrow_mut().push(heading);
            }

            DocNode::Paragraph { text } => {
                let para = create_element("p", vec![("class", "marq-paragraph")]);
                para.children.borrow_mut().push(create_text(text));
                doc_container.children.borrow_mut().push(para);
            }

            DocNode::Emphasis { style, text } => {
                let tag = match style {
                    EmphasisStyle::Bold => "strong",
                    EmphasisStyle::Italic => "em",
                };
                let emphasis = create_element(tag, vec![("class", "marq-emphasis")]);
                emphasis.children.borrow_mut().push(create_text(text));
                doc_container.children.borrow_mut().push(emphasis);
            }

            DocNode::LineBreak => {
                let br = create_element("br", vec![]);
                doc_container.children.borrow_mut().push(br);
            }

            DocNode::Error { message } => {
                // Terminal diagnostic: render it and project nothing further.
                let error = create_element("p", vec![("class", "marq-error")]);
                error.children.borrow_mut().push(create_text(message));
                doc_container.children.borrow_mut().push(error);
                break;
            }
        }
    }

    dom.document.children.borrow_mut().push(doc_container);

    Ok(dom)
}

/// Create an HTML element with attributes
fn create_element(tag: &str, attrs: Vec<(&str, &str)>) -> Handle {
    let qual_name = QualName::new(None, ns!(html), LocalName::from(tag));
    let attributes = attrs
        .into_iter()
        .map(|(name, value)| Attribute {
            name: QualName::new(None, ns!(), LocalName::from(name)),
            value: value.to_string().into(),
        })
        .collect();

    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Element {
            name: qual_name,
            attrs: RefCell::new(attributes),
            template_contents: Default::default(),
            mathml_annotation_xml_integration_point: false,
        },
    })
}

/// Create a text node
fn create_text(text: &str) -> Handle {
    Rc::new(Node {
        parent: Cell::new(None),
        children: RefCell::new(Vec::new()),
        data: NodeData::Text {
            contents: RefCell::new(text.to_string().into()),
        },
    })
}

/// Serialize the DOM to an HTML string (just the inner content)
fn serialize_dom(dom: &RcDom) -> Result<String, RenderError> {
    let mut output = Vec::new();

    // Get the document container (first child of document root)
    let doc_container = dom
        .document
        .children
        .borrow()
        .first()
        .ok_or_else(|| RenderError::RenderFailed("Empty document".to_string()))?
        .clone();

    // Serialize each child of the doc_container.
    // Use TraversalScope::IncludeNode to serialize the element AND its children
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::IncludeNode,
        ..Default::default()
    };

    for child in doc_container.children.borrow().iter() {
        let serializable = SerializableHandle::from(child.clone());
        serialize(&mut output, &serializable, opts.clone())
            .map_err(|e| RenderError::RenderFailed(format!("HTML serialization failed: {e}")))?;
    }

    String::from_utf8(output)
        .map_err(|e| RenderError::RenderFailed(format!("UTF-8 conversion failed: {e}")))
}

/// The baseline CSS used for HTML export
///
/// Exposed so callers can save it, customize it, and pass it back via the
/// custom CSS option.
pub fn get_default_css() -> &'static str {
    include_str!("../../../css/baseline.css")
}

/// Wrap the content in a complete HTML document with embedded CSS
fn wrap_in_document(
    body_html: &str,
    title: &str,
    options: &HtmlOptions,
) -> Result<String, RenderError> {
    let baseline_css = get_default_css();
    let theme_css = match options.theme {
        HtmlTheme::Serif => include_str!("../../../css/themes/theme-serif.css"),
        HtmlTheme::Modern => include_str!("../../../css/themes/theme-modern.css"),
    };

    // Custom CSS is appended after baseline and theme
    let custom_css = options.custom_css.as_deref().unwrap_or("");

    // Escape HTML entities in title for safety
    let escaped_title = html_escape(title);

    let html = format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <meta name="generator" content="marq-render">
  <title>{escaped_title}</title>
  <style>
{baseline_css}
{theme_css}
{custom_css}
  </style>
</head>
<body>
<div class="marq-document">
{body_html}
</div>
</body>
</html>"#
    );

    Ok(html)
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
