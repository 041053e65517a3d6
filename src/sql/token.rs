//! Token model tying a `TokenKind` to its exact source text and location.
//!
//! A `Token` owns the substring it was lexed from, never normalized, so
//! concatenating the text of every token reproduces the input byte for byte.
//! An upper-cased copy is kept alongside for case-insensitive comparisons.
//!
//! Locations are tracked twice:
//! - `start` / `end` byte offsets into the source SQL string, handy for
//!   slicing the source without a reconstructed string.
//! - `range`, the 1-based line / column coordinates an editor works with.
//!
//! `depth` is unknown at lex time. The splitter fills it in with the nesting
//! level reached once the token has been accounted for.
use crate::sql::{keyword::Keyword, range::Range, token_kind::TokenKind};

/// A lexical token with its inclusive start and exclusive end byte offsets.
///
/// Invariants:
/// - `end >= start`
/// - `text == source[start..end]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    upper: String,
    pub start: usize,
    pub end: usize,
    pub range: Range,
    /// Nesting level assigned by the splitter; `None` before splitting.
    pub depth: Option<i32>,
}

impl Token {
    /// Construct a new, not yet split, token.
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, range: Range) -> Self {
        let text = text.into();
        Self {
            kind,
            upper: text.to_uppercase(),
            start,
            end: start + text.len(),
            text,
            range,
            depth: None,
        }
    }

    /// Same token at a given nesting level.
    pub fn with_depth(mut self, depth: i32) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Upper-cased text, for case-insensitive comparisons only.
    pub fn upper_text(&self) -> &str {
        &self.upper
    }

    /// Byte length of this token (`end - start`).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// True if the token's length is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_keyword(&self) -> bool {
        self.kind.is_keyword()
    }

    /// Structural keyword carried by this token, if any.
    pub fn keyword(&self) -> Option<Keyword> {
        self.is_keyword()
            .then(|| Keyword::from_upper(&self.upper))
            .flatten()
    }

    /// Returns true if this token represents a given structural keyword.
    pub fn is(&self, kw: Keyword) -> bool {
        self.keyword() == Some(kw)
    }

    /// Whitespace, newline or comment.
    pub fn is_meaningless(&self) -> bool {
        self.kind.is_meaningless()
    }

    pub fn has_meaning(&self) -> bool {
        !self.is_meaningless()
    }

    pub fn is_comment(&self) -> bool {
        self.kind.is_comment()
    }

    pub fn is_open_parenthesis(&self) -> bool {
        self.is_punctuation("(")
    }

    pub fn is_close_parenthesis(&self) -> bool {
        self.is_punctuation(")")
    }

    pub fn is_semicolon(&self) -> bool {
        self.is_punctuation(";")
    }

    fn is_punctuation(&self, text: &str) -> bool {
        self.kind == TokenKind::Punctuation && self.text == text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::range::Position;

    fn token(kind: TokenKind, text: &str, start: usize) -> Token {
        Token::new(kind, text, start, Range::of(Position::START, text))
    }

    #[test]
    fn length_and_empty() {
        let t = token(TokenKind::Punctuation, ",", 5);
        assert_eq!(t.len(), 1);
        assert!(!t.is_empty());
        assert_eq!((t.start, t.end), (5, 6));
    }

    #[test]
    fn text_is_kept_verbatim() {
        let t = token(TokenKind::Name, "Users", 0);
        assert_eq!(t.text, "Users");
        assert_eq!(t.upper_text(), "USERS");
        assert_eq!(t.depth, None);
        assert_eq!(t.with_depth(2).depth, Some(2));
    }

    #[test]
    fn keyword_detection() {
        let t = token(TokenKind::Keyword, "begin", 0);
        assert!(t.is_keyword());
        assert!(t.is(Keyword::Begin));
        assert!(!t.is(Keyword::End));

        // A name spelled like a keyword is not one.
        let t = token(TokenKind::Name, "begin", 0);
        assert_eq!(t.keyword(), None);
    }

    #[test]
    fn parenthesis_only_for_punctuation() {
        assert!(token(TokenKind::Punctuation, "(", 0).is_open_parenthesis());
        assert!(token(TokenKind::Punctuation, ")", 0).is_close_parenthesis());
        assert!(!token(TokenKind::StringSingle, "(", 0).is_open_parenthesis());
        assert!(token(TokenKind::Punctuation, ";", 0).is_semicolon());
    }

    #[test]
    fn meaning() {
        assert!(token(TokenKind::Comment, "-- x\n", 0).is_meaningless());
        assert!(token(TokenKind::CommentMultiline, "/* */", 0).is_comment());
        assert!(token(TokenKind::Wildcard, "*", 0).has_meaning());
    }
}
