//! Lossless, lenient SQL tokenization.
//!
//! This module holds everything that works on single tokens, before any
//! statement boundaries are known.
//!
//! Modules:
//! - `range`      : 1-based line / column positions and token ranges.
//! - `token_kind` : Classification of lexical atoms (names, keywords, comments, …).
//! - `keyword`    : Keyword table for the lexer and the structural keywords of the splitter.
//! - `token`      : Token struct pairing a `TokenKind` with its text and location.
//! - `tokenizer`  : Single forward pass producing a `Vec<Token>` from raw SQL.
//!
//! Design Principles:
//! 1. Accept incomplete / syntactically invalid SQL (robust for live editing).
//! 2. Never drop input: whitespace, newlines and comments are tokens too.
//! 3. Classify lexically only. Whether `*` is a projection or a product is
//!    not decided here.
//!
//! Example:
//! ```rust
//! use sqlsplit::prelude::*;
//!
//! let tokens = tokenize("SELECT a, b FROM my_table");
//! assert!(tokens.iter().any(|t| t.is(Keyword::From)));
//! assert!(tokens.iter().any(|t| t.kind == TokenKind::Name && t.text == "my_table"));
//! ```

pub mod keyword;
pub mod range;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::{Keyword, classify};
pub use range::{Position, Range};
pub use token::Token;
pub use token_kind::TokenKind;
pub use tokenizer::tokenize;

/// Convenience prelude re‑exporting the token level items.
pub mod prelude {
    pub use super::{Keyword, Position, Range, Token, TokenKind, tokenize};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_and_access() {
        let sql = "SELECT col FROM tbl";
        let tokens = tokenize(sql);
        assert_eq!(tokens[0].kind, TokenKind::KeywordDml);
        assert!(tokens.iter().any(|t| t.is(Keyword::From)));
        assert!(tokens.iter().any(|t| t.text == "col"));
        assert_eq!(tokens.last().map(|t| t.range.end), Some(Position::new(1, 20)));
    }

    #[test]
    fn prelude_import_works() {
        use super::prelude::*;
        let toks = tokenize("FROM X");
        assert!(toks.iter().any(|t| t.is(Keyword::From)));
        assert!(toks.iter().any(|t| t.kind == TokenKind::Name && t.text == "X"));
    }
}
