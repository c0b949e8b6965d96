//! Front end for the marq markup dialect
//!
//!     This crate turns marq source text (ATX headings, bold, italic, plain
//!     paragraph words) into a flat, ordered sequence of document nodes that
//!     presentation surfaces can project onto any medium. It is the only part
//!     of the toolchain with real state-machine logic; everything downstream
//!     is a mapping over the node sequence.
//!
//! Architecture
//!
//!     Two stages, strictly pull-based and single-threaded:
//!
//!     - Tokenizer: owns a cursor over one immutable input snapshot; each
//!       pull produces exactly one token and advances the cursor past it.
//!       Whitespace (including newlines) is an insignificant separator.
//!     - TreeBuilder: consumes a token source through a two-token lookahead
//!       window and emits document nodes, halting with a single terminal
//!       Error node on the first token it cannot interpret.
//!
//!     Data flow: raw text → Tokenizer.next_token() → TreeBuilder → Document.
//!
//!     The file structure :
//!     .
//!     ├── token.rs      # TokenKind + Token pair, pure data
//!     ├── tokenizer.rs  # cursor scanner + TokenSource trait
//!     ├── builder.rs    # TreeBuilder with the (current, peek) window
//!     ├── node.rs       # Node + Document output model
//!     ├── lib.rs
//!
//! Error Layers
//!
//!     Lexical failures are local: an unclassifiable fragment becomes an
//!     Illegal token and the stream stays pullable. Structural failures are
//!     fatal to the remainder of the document: the builder emits one Error
//!     node and stops. A malformed document never crashes the pipeline; it
//!     always yields a valid (possibly short) node sequence ending in at
//!     most one diagnostic.
//!
//!     This is a pure lib: it powers marq-render and marq-cli but is shell
//!     agnostic, no printing, no env vars, no I/O.

pub mod builder;
pub mod node;
pub mod token;
pub mod tokenizer;

pub use builder::TreeBuilder;
pub use node::{Document, EmphasisStyle, Node};
pub use token::{Token, TokenKind};
pub use tokenizer::{TokenSource, Tokenizer};

/// Run the full pipeline over one input snapshot.
pub fn parse(source: &str) -> Document {
    TreeBuilder::new(Tokenizer::new(source)).build()
}

/// Drain a tokenizer into the complete token sequence, including the
/// terminal `EndOfInput` token. Inspect tooling uses this; the builder
/// itself pulls lazily.
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = tokenizer.next_token();
        let done = token.kind == TokenKind::EndOfInput;
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_runs_tokenizer_and_builder_in_lockstep() {
        let doc = parse("# Title\n\nbody");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.title(), Some("Title"));
        assert!(!doc.has_error());
    }

    #[test]
    fn tokenize_includes_the_terminal_token() {
        let tokens = tokenize("word");
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
    }

    #[test]
    fn tokenize_empty_input() {
        let tokens = tokenize("");
        assert_eq!(tokens, vec![Token::end_of_input()]);
    }
}
