//! CLI-specific transforms
//!
//! This module defines all the transform combinations available in the CLI.
//! Each transform is a stage + format combination (e.g., "token-json",
//! "node-treeviz").
//!
//! ## Transform Pipeline
//!
//! The marq front end has two processing stages:
//!
//! 1. **Tokenization** - Raw text → token stream
//!    - `token-json`, `token-simple`, `token-pprint`
//!
//! 2. **Tree building** - Token stream → node sequence
//!    - `node-json`, `node-treeviz`
//!
//! ## Extra Parameters
//!
//! Transforms accept extra parameters via `--extra-<name> [value]`:
//!
//! - `token-literals`: include token literals in `token-pprint` output
//! - `max-label-length`, `show-index`: treeviz knobs
//!
//! Example: `marq inspect file.mq node-treeviz --extra-show-index`

use marq_core::{Node, Token, TokenKind};
use marq_render::surfaces::treeviz::to_treeviz_str_with_params;
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "token-json",
    "token-simple",
    "token-pprint",
    "node-json",
    "node-treeviz",
];

/// Execute a named transform on source text with optional extra parameters
///
/// # Arguments
///
/// * `source` - The source text to transform
/// * `transform_name` - The transform to apply (e.g., "node-treeviz")
/// * `extra_params` - Optional parameters for the transform
///
/// # Returns
///
/// The transformed output as a string, or an error message
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    match transform_name {
        "token-json" => {
            let tokens = marq_core::tokenize(source);
            serde_json::to_string_pretty(&tokens_to_json(&tokens))
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "token-simple" => Ok(tokens_to_simple(&marq_core::tokenize(source))),
        "token-pprint" => {
            let include_literals = extra_params
                .get("token-literals")
                .map(|v| v != "false")
                .unwrap_or(true);
            Ok(tokens_to_pprint(
                &marq_core::tokenize(source),
                include_literals,
            ))
        }
        "node-json" => {
            let doc = marq_core::parse(source);
            serde_json::to_string_pretty(&nodes_to_json(&doc.nodes))
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "node-treeviz" => {
            let doc = marq_core::parse(source);
            Ok(to_treeviz_str_with_params(&doc, extra_params))
        }
        _ => Err(format!("Unknown transform: {transform_name}")),
    }
}

/// Short uppercase token kind name, heading levels spelled out
pub fn token_simple_name(kind: &TokenKind) -> String {
    match kind {
        TokenKind::EndOfInput => "END_OF_INPUT".to_string(),
        TokenKind::Illegal => "ILLEGAL".to_string(),
        TokenKind::Heading(level) => format!("H{level}"),
        TokenKind::Bold => "BOLD".to_string(),
        TokenKind::Italic => "ITALIC".to_string(),
        TokenKind::Paragraph => "PARAGRAPH".to_string(),
        TokenKind::LineBreak => "LINE_BREAK".to_string(),
        TokenKind::Asterisk => "ASTERISK".to_string(),
        TokenKind::CodeBlock => "CODE_BLOCK".to_string(),
    }
}

/// Convert tokens to a JSON-serializable format
fn tokens_to_json(tokens: &[Token]) -> serde_json::Value {
    use serde_json::json;

    json!(tokens
        .iter()
        .map(|token| {
            json!({
                "kind": token_simple_name(&token.kind),
                "literal": token.literal,
            })
        })
        .collect::<Vec<_>>())
}

fn tokens_to_simple(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(|token| token_simple_name(&token.kind))
        .collect::<Vec<_>>()
        .join("\n")
}

fn tokens_to_pprint(tokens: &[Token], include_literals: bool) -> String {
    let mut output = String::new();
    for token in tokens {
        output.push_str(&token_simple_name(&token.kind));
        if include_literals && !token.literal.is_empty() {
            output.push(' ');
            output.push_str(&format!("{:?}", token.literal));
        }
        output.push('\n');
    }
    output
}

/// Convert the node sequence to a JSON-serializable format
fn nodes_to_json(nodes: &[Node]) -> serde_json::Value {
    use serde_json::json;

    json!(nodes
        .iter()
        .map(|node| {
            match node {
                Node::Heading { level, text } => json!({
                    "type": "Heading",
                    "level": level,
                    "text": text,
                }),
                Node::Paragraph { text } => json!({
                    "type": "Paragraph",
                    "text": text,
                }),
                Node::Emphasis { text, .. } => json!({
                    "type": node.kind_name(),
                    "text": text,
                }),
                Node::LineBreak => json!({ "type": "LineBreak" }),
                Node::Error { message } => json!({
                    "type": "Error",
                    "message": message,
                }),
            }
        })
        .collect::<Vec<_>>())
}
