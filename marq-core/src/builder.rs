//! The tree builder: drains a token source into the document node sequence.
//!
//!     The builder holds a two-token lookahead window `(current, peek)`,
//!     primed at construction. Emitting one node slides the window forward by
//!     exactly one token. The window never aliases tokenizer internals: both
//!     slots are owned copies handed over by the pull contract.
//!
//!     Structural failure is fatal to the remainder of the document. The
//!     builder offers no resynchronization: once it cannot interpret a token
//!     it has no confidence about stream alignment, so it emits one terminal
//!     `Error` node and stops instead of guessing. Lexical `Illegal` tokens
//!     therefore surface here as the end of the sequence, never as a skipped
//!     node.

use crate::node::{Document, EmphasisStyle, Node};
use crate::token::{Token, TokenKind};
use crate::tokenizer::TokenSource;
use std::mem;

/// Consumes one token source, producing the full node sequence exactly once.
pub struct TreeBuilder<S: TokenSource> {
    source: S,
    current: Token,
    peek: Token,
}

impl<S: TokenSource> TreeBuilder<S> {
    /// Prime the lookahead window with the first two tokens.
    pub fn new(mut source: S) -> Self {
        let current = source.next_token();
        let peek = source.next_token();
        TreeBuilder {
            source,
            current,
            peek,
        }
    }

    fn advance(&mut self) {
        self.current = mem::replace(&mut self.peek, self.source.next_token());
    }

    fn take_text(&mut self) -> String {
        mem::take(&mut self.current.literal)
    }

    /// Drain the source into an ordered node sequence.
    ///
    /// The sequence is always finite and ends either on a clean drain to end
    /// of input (no trailing node) or with a single terminal `Error` node.
    pub fn build(mut self) -> Document {
        let mut nodes = Vec::new();
        loop {
            match self.current.kind {
                TokenKind::EndOfInput => break,
                TokenKind::Heading(level) => {
                    let text = self.take_text();
                    nodes.push(Node::Heading { level, text });
                    self.advance();
                }
                TokenKind::Bold => {
                    let text = self.take_text();
                    nodes.push(Node::Emphasis {
                        style: EmphasisStyle::Bold,
                        text,
                    });
                    self.advance();
                }
                TokenKind::Italic => {
                    let text = self.take_text();
                    nodes.push(Node::Emphasis {
                        style: EmphasisStyle::Italic,
                        text,
                    });
                    self.advance();
                }
                TokenKind::Paragraph => {
                    let text = self.take_text();
                    nodes.push(Node::Paragraph { text });
                    self.advance();
                }
                TokenKind::LineBreak => {
                    nodes.push(Node::LineBreak);
                    self.advance();
                }
                kind => {
                    nodes.push(Node::Error {
                        message: unexpected_token_message(kind, &self.current.literal),
                    });
                    break;
                }
            }
        }
        Document { nodes }
    }
}

fn unexpected_token_message(kind: TokenKind, literal: &str) -> String {
    if literal.is_empty() {
        format!("unexpected {} token in stream", kind.describe())
    } else {
        format!("unexpected {} token '{literal}' in stream", kind.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::Tokenizer;

    /// Feeds a fixed token script, then `EndOfInput` forever.
    struct ScriptedSource {
        tokens: Vec<Token>,
        position: usize,
    }

    impl ScriptedSource {
        fn new(tokens: Vec<Token>) -> Self {
            ScriptedSource {
                tokens,
                position: 0,
            }
        }
    }

    impl TokenSource for ScriptedSource {
        fn next_token(&mut self) -> Token {
            let token = self
                .tokens
                .get(self.position)
                .cloned()
                .unwrap_or_else(Token::end_of_input);
            self.position += 1;
            token
        }
    }

    #[test]
    fn stops_on_illegal_and_drops_the_rest() {
        let source = ScriptedSource::new(vec![
            Token::new(TokenKind::Heading(1), "x"),
            Token::new(TokenKind::Illegal, ""),
            Token::new(TokenKind::Paragraph, "y"),
        ]);
        let doc = TreeBuilder::new(source).build();

        assert_eq!(doc.nodes.len(), 2);
        assert_eq!(
            doc.nodes[0],
            Node::Heading {
                level: 1,
                text: "x".to_string()
            },
        );
        assert!(matches!(doc.nodes[1], Node::Error { .. }));
        assert!(doc.has_error());
    }

    #[test]
    fn error_message_names_the_unexpected_kind() {
        let source = ScriptedSource::new(vec![Token::new(TokenKind::Illegal, "#######")]);
        let doc = TreeBuilder::new(source).build();

        match &doc.nodes[0] {
            Node::Error { message } => {
                assert!(message.contains("illegal"));
                assert!(message.contains("#######"));
            }
            other => panic!("expected error node, got {other:?}"),
        }
    }

    #[test]
    fn reserved_kinds_are_structural_errors() {
        for kind in [TokenKind::Asterisk, TokenKind::CodeBlock] {
            let source = ScriptedSource::new(vec![Token::new(kind, "")]);
            let doc = TreeBuilder::new(source).build();
            assert_eq!(doc.nodes.len(), 1);
            assert!(doc.has_error());
        }
    }

    #[test]
    fn line_break_dispatch_row() {
        let source = ScriptedSource::new(vec![
            Token::new(TokenKind::Paragraph, "a"),
            Token::new(TokenKind::LineBreak, "\n"),
            Token::new(TokenKind::Paragraph, "b"),
        ]);
        let doc = TreeBuilder::new(source).build();

        assert_eq!(
            doc.nodes,
            vec![
                Node::Paragraph {
                    text: "a".to_string()
                },
                Node::LineBreak,
                Node::Paragraph {
                    text: "b".to_string()
                },
            ],
        );
    }

    #[test]
    fn empty_source_builds_empty_document() {
        let doc = TreeBuilder::new(ScriptedSource::new(vec![])).build();
        assert!(doc.is_empty());
        assert!(!doc.has_error());
    }

    #[test]
    fn end_to_end_scenario() {
        let builder = TreeBuilder::new(Tokenizer::new("# h1\n\n**bold** *it*\n\npara1 para2"));
        let doc = builder.build();

        assert_eq!(
            doc.nodes,
            vec![
                Node::Heading {
                    level: 1,
                    text: "h1".to_string()
                },
                Node::Emphasis {
                    style: EmphasisStyle::Bold,
                    text: "bold".to_string()
                },
                Node::Emphasis {
                    style: EmphasisStyle::Italic,
                    text: "it".to_string()
                },
                Node::Paragraph {
                    text: "para1".to_string()
                },
                Node::Paragraph {
                    text: "para2".to_string()
                },
            ],
        );
    }

    #[test]
    fn heading_level_six_survives_the_pipeline() {
        let doc = TreeBuilder::new(Tokenizer::new("###### Title")).build();
        assert_eq!(
            doc.nodes,
            vec![Node::Heading {
                level: 6,
                text: "Title".to_string()
            }],
        );
    }

    #[test]
    fn lexical_error_truncates_document_output() {
        // The seven-hash run tokenizes as Illegal; the builder reports it and
        // never reaches the trailing paragraph.
        let doc = TreeBuilder::new(Tokenizer::new("####### nope\n\ntail")).build();
        assert_eq!(doc.nodes.len(), 1);
        assert!(doc.has_error());
    }
}
