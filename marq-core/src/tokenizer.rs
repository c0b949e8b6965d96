//! The tokenizer: a read-only cursor over one immutable input snapshot.
//!
//!     Each pull classifies exactly one fragment and advances the cursor past
//!     it. The cursor position is the only state; given a position the next
//!     token is fully determined. Whitespace (space, tab, carriage return,
//!     newline) is an insignificant separator and never becomes a token.
//!
//!     Errors are local: a fragment the scanner cannot classify becomes an
//!     `Illegal` token carrying whatever partial literal was scanned, the
//!     cursor still moves forward, and the stream stays pullable. The
//!     tokenizer itself never fails.

use crate::token::{Token, TokenKind};

const SENTINEL: char = '\0';

/// Character class for paragraph runs.
///
/// This must stay an explicit predicate: a raw ASCII range comparison
/// between the letter bounds also matches several punctuation characters,
/// `_` among them, which silently breaks delimiter detection inside running
/// text.
fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric()
}

fn is_insignificant(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// Pull-based token source consumed by the tree builder.
///
/// [`Tokenizer`] is the canonical implementation; tests drive the builder
/// with scripted sources to exercise token sequences the scanner cannot
/// produce.
pub trait TokenSource {
    fn next_token(&mut self) -> Token;
}

/// Owns the cursor over one input snapshot.
///
/// Constructed once per snapshot; the source text is never mutated. An
/// interior NUL character is not end of input: the end check compares the
/// cursor position against the source length, so a real NUL falls through
/// to the `Illegal` arm like any other unclassifiable character.
pub struct Tokenizer {
    chars: Vec<char>,
    position: usize,
    read_position: usize,
    ch: char,
}

impl Tokenizer {
    pub fn new(input: &str) -> Self {
        let mut tokenizer = Tokenizer {
            chars: input.chars().collect(),
            position: 0,
            read_position: 0,
            ch: SENTINEL,
        };
        tokenizer.read_char();
        tokenizer
    }

    /// Produce exactly one token and advance the cursor past it.
    ///
    /// Once the cursor reaches the end, every further pull returns
    /// `EndOfInput` without moving.
    pub fn next_token(&mut self) -> Token {
        self.skip_insignificant();

        if self.at_end() {
            return Token::end_of_input();
        }

        match self.ch {
            '#' => self.read_heading(),
            '*' | '_' => self.read_emphasis(),
            ch if is_word_char(ch) => self.read_paragraph(),
            _ => {
                self.read_char();
                Token::new(TokenKind::Illegal, "")
            }
        }
    }

    fn read_char(&mut self) {
        self.ch = self
            .chars
            .get(self.read_position)
            .copied()
            .unwrap_or(SENTINEL);
        self.position = self.read_position;
        self.read_position += 1;
    }

    fn peek_char(&self) -> char {
        self.chars
            .get(self.read_position)
            .copied()
            .unwrap_or(SENTINEL)
    }

    fn at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn skip_insignificant(&mut self) {
        while is_insignificant(self.ch) {
            self.read_char();
        }
    }

    fn span(&self, start: usize, end: usize) -> String {
        self.chars[start..end].iter().collect()
    }

    /// `#` run plus the rest of the line.
    ///
    /// The run length is the heading level; a run longer than six is
    /// `Illegal` with the run as literal. The single separating space is
    /// consumed but not required; everything after it up to (excluding) the
    /// next newline is the heading text.
    fn read_heading(&mut self) -> Token {
        let run_start = self.position;
        while self.ch == '#' {
            self.read_char();
        }
        let level = self.position - run_start;
        if level > 6 {
            return Token::new(TokenKind::Illegal, self.span(run_start, self.position));
        }

        if self.ch == ' ' {
            self.read_char();
        }

        let text_start = self.position;
        while self.ch != '\n' && !self.at_end() {
            self.read_char();
        }
        let mut literal = self.span(text_start, self.position);
        // CRLF input leaves a stray carriage return before the newline.
        if literal.ends_with('\r') {
            literal.pop();
        }

        Token::new(TokenKind::Heading(level as u8), literal)
    }

    /// Emphasis span. A doubled delimiter opens bold, a single one italic;
    /// the interior text is captured into the literal and the closing
    /// delimiter(s) are consumed. A span with no closing delimiter runs to
    /// end of input and still yields the token with what was captured.
    fn read_emphasis(&mut self) -> Token {
        let delimiter = self.ch;
        let doubled = self.peek_char() == delimiter;
        self.read_char();
        if doubled {
            self.read_char();
        }

        let text_start = self.position;
        if doubled {
            while !self.at_end() && !(self.ch == delimiter && self.peek_char() == delimiter) {
                self.read_char();
            }
        } else {
            while !self.at_end() && self.ch != delimiter {
                self.read_char();
            }
        }
        let literal = self.span(text_start, self.position);

        if !self.at_end() {
            self.read_char();
            if doubled {
                self.read_char();
            }
        }

        let kind = if doubled {
            TokenKind::Bold
        } else {
            TokenKind::Italic
        };
        Token::new(kind, literal)
    }

    fn read_paragraph(&mut self) -> Token {
        let start = self.position;
        while is_word_char(self.ch) {
            self.read_char();
        }
        Token::new(TokenKind::Paragraph, self.span(start, self.position))
    }
}

impl TokenSource for Tokenizer {
    fn next_token(&mut self) -> Token {
        Tokenizer::next_token(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tokens_of(input: &str) -> Vec<Token> {
        let mut tokenizer = Tokenizer::new(input);
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

    #[test]
    fn heading_levels_one_through_six() {
        for level in 1..=6u8 {
            let input = format!("{} h{level}", "#".repeat(level as usize));
            let mut tokenizer = Tokenizer::new(&input);
            assert_eq!(
                tokenizer.next_token(),
                Token::new(TokenKind::Heading(level), format!("h{level}")),
            );
        }
    }

    #[test]
    fn heading_run_of_seven_is_illegal() {
        let mut tokenizer = Tokenizer::new("####### over");
        assert_eq!(
            tokenizer.next_token(),
            Token::new(TokenKind::Illegal, "#######"),
        );
        // The error is local: the rest of the line is still scannable.
        assert_eq!(
            tokenizer.next_token(),
            Token::new(TokenKind::Paragraph, "over"),
        );
    }

    #[test]
    fn heading_separator_is_not_required() {
        let mut tokenizer = Tokenizer::new("#h1");
        assert_eq!(tokenizer.next_token(), Token::new(TokenKind::Heading(1), "h1"));
    }

    #[test]
    fn heading_text_runs_to_end_of_line() {
        let mut tokenizer = Tokenizer::new("## a full heading line\nnext");
        assert_eq!(
            tokenizer.next_token(),
            Token::new(TokenKind::Heading(2), "a full heading line"),
        );
        assert_eq!(
            tokenizer.next_token(),
            Token::new(TokenKind::Paragraph, "next"),
        );
    }

    #[test]
    fn heading_drops_carriage_return_from_crlf() {
        let mut tokenizer = Tokenizer::new("# title\r\nrest");
        assert_eq!(
            tokenizer.next_token(),
            Token::new(TokenKind::Heading(1), "title"),
        );
    }

    #[test]
    fn bold_captures_interior_without_delimiters() {
        for input in ["**bold**", "__bold__"] {
            let mut tokenizer = Tokenizer::new(input);
            assert_eq!(tokenizer.next_token(), Token::new(TokenKind::Bold, "bold"));
            assert_eq!(tokenizer.next_token(), Token::end_of_input());
        }
    }

    #[test]
    fn italic_captures_interior_without_delimiters() {
        for input in ["*it*", "_it_"] {
            let mut tokenizer = Tokenizer::new(input);
            assert_eq!(tokenizer.next_token(), Token::new(TokenKind::Italic, "it"));
            assert_eq!(tokenizer.next_token(), Token::end_of_input());
        }
    }

    #[test]
    fn unterminated_bold_runs_to_end_of_input() {
        let mut tokenizer = Tokenizer::new("**oops");
        assert_eq!(tokenizer.next_token(), Token::new(TokenKind::Bold, "oops"));
        assert_eq!(tokenizer.next_token(), Token::end_of_input());
    }

    #[test]
    fn unterminated_italic_runs_to_end_of_input() {
        let mut tokenizer = Tokenizer::new("_oops");
        assert_eq!(tokenizer.next_token(), Token::new(TokenKind::Italic, "oops"));
        assert_eq!(tokenizer.next_token(), Token::end_of_input());
    }

    #[test]
    fn empty_bold_span() {
        let mut tokenizer = Tokenizer::new("****");
        assert_eq!(tokenizer.next_token(), Token::new(TokenKind::Bold, ""));
        assert_eq!(tokenizer.next_token(), Token::end_of_input());
    }

    #[test]
    fn paragraph_segmentation_on_whitespace() {
        assert_eq!(
            tokens_of("para1 para2"),
            vec![
                Token::new(TokenKind::Paragraph, "para1"),
                Token::new(TokenKind::Paragraph, "para2"),
                Token::end_of_input(),
            ],
        );
    }

    #[test]
    fn delimiter_ends_paragraph_run() {
        assert_eq!(
            tokens_of("word*it*"),
            vec![
                Token::new(TokenKind::Paragraph, "word"),
                Token::new(TokenKind::Italic, "it"),
                Token::end_of_input(),
            ],
        );
    }

    #[test]
    fn newlines_are_swallowed_as_separators() {
        assert_eq!(
            tokens_of("para1\n\npara2"),
            vec![
                Token::new(TokenKind::Paragraph, "para1"),
                Token::new(TokenKind::Paragraph, "para2"),
                Token::end_of_input(),
            ],
        );
    }

    #[test]
    fn unclassifiable_character_is_illegal_and_local() {
        assert_eq!(
            tokens_of("a , b"),
            vec![
                Token::new(TokenKind::Paragraph, "a"),
                Token::new(TokenKind::Illegal, ""),
                Token::new(TokenKind::Paragraph, "b"),
                Token::end_of_input(),
            ],
        );
    }

    #[test]
    fn interior_nul_is_not_end_of_input() {
        assert_eq!(
            tokens_of("a\0b"),
            vec![
                Token::new(TokenKind::Paragraph, "a"),
                Token::new(TokenKind::Illegal, ""),
                Token::new(TokenKind::Paragraph, "b"),
                Token::end_of_input(),
            ],
        );
    }

    #[test]
    fn end_of_input_is_idempotent() {
        let mut tokenizer = Tokenizer::new("word");
        assert_eq!(tokenizer.next_token().kind, TokenKind::Paragraph);
        for _ in 0..4 {
            assert_eq!(tokenizer.next_token(), Token::end_of_input());
        }
    }

    #[test]
    fn empty_input_is_end_of_input() {
        let mut tokenizer = Tokenizer::new("");
        assert_eq!(tokenizer.next_token(), Token::end_of_input());
    }

    proptest! {
        #[test]
        fn reaches_end_of_input_within_input_length(input in ".{0,200}") {
            let mut tokenizer = Tokenizer::new(&input);
            let limit = input.chars().count() + 1;
            let mut pulls = 0usize;
            loop {
                let token = tokenizer.next_token();
                pulls += 1;
                if token.kind == TokenKind::EndOfInput {
                    break;
                }
                prop_assert!(pulls <= limit, "no EndOfInput after {pulls} pulls");
            }
        }

        #[test]
        fn terminal_state_is_stable(input in ".{0,80}") {
            let mut tokenizer = Tokenizer::new(&input);
            while tokenizer.next_token().kind != TokenKind::EndOfInput {}
            for _ in 0..3 {
                prop_assert_eq!(tokenizer.next_token().kind, TokenKind::EndOfInput);
            }
        }

        #[test]
        fn heading_roundtrip(level in 1usize..=6, title in "[a-zA-Z0-9]{1,12}") {
            let input = format!("{} {title}", "#".repeat(level));
            let mut tokenizer = Tokenizer::new(&input);
            prop_assert_eq!(
                tokenizer.next_token(),
                Token::new(TokenKind::Heading(level as u8), title)
            );
        }
    }
}
