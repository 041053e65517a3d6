use crate::*;
use itertools::Itertools;
use std::ops::Deref;

/// Marker for one executable statement, shown by editors above its first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("#{index} @ line {line_number}")]
pub struct CodeLens {
    /// Index of the statement in its `StatementList`.
    pub index: usize,
    pub line_number: usize,
}

impl StatementList {
    /// Statement under the caret at `line` / `column` (1-based).
    ///
    /// Two statements can only share a line at a boundary, e.g.
    /// `select 1;select 2`. Then the earliest one containing the caret wins.
    pub fn get_statement_at_position(
        &self,
        line: usize,
        column: usize,
    ) -> Option<StatementAtPosition<'_>> {
        let candidates = self
            .iter()
            .filter(|s| s.range().spans_line(line))
            .collect_vec();

        let statement = match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            several => {
                let caret = Position::new(line, column);
                several
                    .iter()
                    .copied()
                    .filter(|s| s.range().contains(caret))
                    .min_by_key(|s| s.range().start.column)
            }
        }?;

        trace!(%line, %column, range = %statement.range(), "statement at position");
        Some(StatementAtPosition {
            statement,
            line,
            column,
        })
    }

    /// One lens per statement carrying meaningful tokens.
    pub fn code_lenses(&self) -> Vec<CodeLens> {
        self.iter()
            .enumerate()
            .filter_map(|(index, statement)| {
                let line_number = statement.code_lens_line_number()?;
                Some(CodeLens { index, line_number })
            })
            .collect()
    }
}

/// A statement together with the caret position it was looked up with.
#[derive(Debug, Clone, Copy)]
pub struct StatementAtPosition<'a> {
    statement: &'a Statement,
    pub line: usize,
    pub column: usize,
}

impl<'a> StatementAtPosition<'a> {
    pub fn statement(&self) -> &'a Statement {
        self.statement
    }

    /// Index of the token under the caret.
    ///
    /// When the caret sits on the boundary of two tokens the one ending there
    /// is picked. A position that no token of the statement surrounds is a
    /// caller bug and reported as `Error::PositionNotFound`.
    pub fn current_index(&self) -> Result<usize> {
        let on_line = self
            .statement
            .iter()
            .positions(|t| t.range.spans_line(self.line))
            .collect_vec();

        let found = match on_line.as_slice() {
            [only] => Some(*only),
            several => several
                .iter()
                .copied()
                .find(|&i| self.statement[i].range.surrounds_column(self.column)),
        };

        found.ok_or(Error::PositionNotFound {
            line: self.line,
            column: self.column,
        })
    }

    pub fn get_current_token(&self) -> Result<&'a Token> {
        let index = self.current_index()?;
        Ok(&self.statement[index])
    }

    /// Token before the one under the caret.
    pub fn get_previous_token(&self, skip_meaningless: bool) -> Result<Option<&'a Token>> {
        let index = self.current_index()?;
        Ok(self
            .statement
            .get_previous_token(Some(index), skip_meaningless, None))
    }

    /// Token after the one under the caret.
    pub fn get_next_token(&self, skip_meaningless: bool) -> Result<Option<&'a Token>> {
        let index = self.current_index()?;
        Ok(self
            .statement
            .get_next_token(Some(index), skip_meaningless, None))
    }
}

impl Deref for StatementAtPosition<'_> {
    type Target = Statement;

    fn deref(&self) -> &Self::Target {
        self.statement
    }
}
