//! Token types shared between the tokenizer and the tree builder.
//!
//!     The dialect keeps the token set deliberately small and pushes the
//!     heavier lifting (delimiter matching, heading level counting) into the
//!     tokenizer so that the tree builder stays a simple dispatch over kinds.
//!     A token is a classified fragment of the input text together with the
//!     literal content it carries.
//!
//!     Literals are content, never markers: a heading literal excludes the
//!     `#` run and its separating space, an emphasis literal excludes its
//!     delimiters. The tree builder can therefore move a literal straight
//!     into a node without any post-processing.

/// The classification of a scanned input fragment.
///
/// `Asterisk` and `CodeBlock` are reserved for future syntax and are never
/// produced by the tokenizer; the tree builder reports them through the same
/// terminal diagnostic path as `Illegal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Terminal sentinel. Pulling past the end keeps returning this kind.
    EndOfInput,
    /// A fragment the tokenizer could not classify. Local to one token; the
    /// stream stays pullable afterwards.
    Illegal,
    /// ATX heading with its level. Runs longer than six `#` are `Illegal`,
    /// never clamped.
    Heading(u8),
    /// `**x**` or `__x__` span.
    Bold,
    /// `*x*` or `_x_` span.
    Italic,
    /// A run of word characters.
    Paragraph,
    /// Hard line break. The current whitespace policy swallows newlines as
    /// separators, so this kind is never produced; it stays in the set so
    /// the alternate policy only has to touch the tokenizer.
    LineBreak,
    Asterisk,
    CodeBlock,
}

impl TokenKind {
    /// Human-readable name used in structural diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            TokenKind::EndOfInput => "end of input",
            TokenKind::Illegal => "illegal",
            TokenKind::Heading(_) => "heading",
            TokenKind::Bold => "bold",
            TokenKind::Italic => "italic",
            TokenKind::Paragraph => "paragraph",
            TokenKind::LineBreak => "line break",
            TokenKind::Asterisk => "asterisk",
            TokenKind::CodeBlock => "code block",
        }
    }
}

/// A `(kind, literal)` pair produced by the tokenizer. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Token {
            kind,
            literal: literal.into(),
        }
    }

    /// The terminal token.
    pub fn end_of_input() -> Self {
        Token::new(TokenKind::EndOfInput, "")
    }
}
