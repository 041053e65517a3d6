//! Splitting a SQL script into statements.
//!
//! The splitter is a single forward pass over the lexer output. Each token is
//! run through `SplitState::step`, the running nesting level is stored on the
//! token as its `depth`, and a `;` seen at level zero or below closes the
//! statement (unless it only ends a `DECLARE` section).
//!
//! Whitespace and newlines right after a closing `;` belong to the statement
//! they follow, so each statement carries its own trailing formatting and the
//! next one starts with its first comment or keyword.
use crate::*;
use std::iter::Peekable;

crate::reexport!(state);

/// Tokenize and split `sql` in one go.
pub fn split(sql: &str) -> StatementList {
    split_tokens(tokenize(sql))
}

/// Split an already tokenized script.
pub fn split_tokens(tokens: impl IntoIterator<Item = Token>) -> StatementList {
    Splitter::default().process(tokens)
}

/// Depth-tracking statement splitter.
///
/// Malformed input is never an error: unbalanced parentheses or a missing
/// `END` just keep the level above zero, and whatever is left at the end of
/// the input becomes one trailing statement flagged with `needs_semicolon`.
#[derive(Debug, Default)]
pub struct Splitter {
    state: SplitState,
    level: i32,
}

impl Splitter {
    pub fn process(mut self, tokens: impl IntoIterator<Item = Token>) -> StatementList {
        let mut statements = Vec::new();
        let mut current = Vec::new();
        let mut tokens = tokens.into_iter().peekable();

        while let Some(token) = tokens.next() {
            let (state, delta) = self.state.step(&token);
            self.state = state;
            self.level += delta;

            let terminates = self.level <= 0 && token.is_semicolon();
            current.push(token.with_depth(self.level));
            if !terminates {
                continue;
            }

            match self.state.on_terminator() {
                Some(state) => self.state = state,
                None => {
                    self.consume_blank(&mut tokens, &mut current);
                    let statement = Statement::new(std::mem::take(&mut current), false);
                    trace!(range = %statement.range(), "statement closed");
                    statements.push(statement);
                    self.reset();
                }
            }
        }

        if !current.is_empty() {
            let statement = Statement::new(current, true);
            trace!(range = %statement.range(), level = self.level, "unterminated statement");
            statements.push(statement);
        }

        debug!(statements = statements.len(), "split script");
        StatementList::from(statements)
    }

    /// Pulls the whitespace and newlines following a `;` into the statement.
    fn consume_blank<I>(&self, tokens: &mut Peekable<I>, current: &mut Vec<Token>)
    where
        I: Iterator<Item = Token>,
    {
        while let Some(token) = tokens.next_if(|t| t.kind.is_blank()) {
            current.push(token.with_depth(self.level));
        }
    }

    fn reset(&mut self) {
        self.level = 0;
        self.state = SplitState::default();
    }
}
