//! Statements produced by the splitter and the lookups editors run on them.
//!
//! Modules:
//! - `token_list` : owned token run with index based navigation.
//! - `position`   : statement / token lookup by caret position, code lenses.
//! - `alias`      : table alias resolution inside one statement.
//!
//! Every lookup is a pure function of the tokens. Misses are `None`; only
//! asking for a token at a position the statement does not cover is an error.
use derive_more::{Deref, From, IntoIterator};
use std::fmt;

crate::reexport!(token_list);
crate::reexport!(position);
crate::reexport!(alias);

/// A contiguous run of tokens forming one SQL statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref)]
pub struct Statement {
    #[deref]
    tokens: TokenList,
    needs_semicolon: bool,
}

impl Statement {
    pub fn new(tokens: impl Into<TokenList>, needs_semicolon: bool) -> Self {
        Self {
            tokens: tokens.into(),
            needs_semicolon,
        }
    }

    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// True for the trailing statement of a script that did not end with `;`.
    pub fn needs_semicolon(&self) -> bool {
        self.needs_semicolon
    }

    /// Line of the first meaningful token, `None` for comment-only statements.
    pub fn code_lens_line_number(&self) -> Option<usize> {
        self.iter()
            .find(|t| t.has_meaning())
            .map(|t| t.range.start.line)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tokens, f)
    }
}

/// All statements of a script, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, From, IntoIterator)]
#[into_iterator(owned, ref)]
pub struct StatementList(Vec<Statement>);
