//! Resolving table aliases inside a single statement.
//!
//! Given the alias under the caret (`t` in `t.col`), find where the statement
//! introduces it: `schema.table [AS] t` or `( subquery ) [AS] t`.
//!
//! The introduction is the occurrence of the same word, at the same depth,
//! standing alone between two meaningless tokens. That rules out dotted
//! references like `t.col` but does not track scopes: sibling subqueries
//! reusing an alias resolve to the first one.
use crate::*;
use std::fmt;

/// An alias together with the tokens that define it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAlias {
    pub schema: Option<String>,
    /// `None` for a derived table.
    pub table: Option<String>,
    tokens: TokenList,
}

impl TableAlias {
    /// The alias word itself, always the last token.
    pub fn alias(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// Column names projected by a derived table.
    ///
    /// Collects the names of the subquery's own select list, skipping those
    /// followed by `AS`, `.` or `(` (renamed, qualified or called). Empty for
    /// plain tables.
    pub fn get_columns(&self) -> Vec<String> {
        if self.table.is_some() {
            return Vec::new();
        }
        let Some(inner) = self.alias().and_then(|t| t.depth).map(|d| d + 1) else {
            return Vec::new();
        };

        let mut columns = Vec::new();
        for (i, token) in self.tokens.iter().enumerate() {
            if token.depth != Some(inner) {
                continue;
            }
            if token.is(Keyword::From) {
                break;
            }
            if token.kind != TokenKind::Name {
                continue;
            }
            let next = self.tokens.get_next_token(Some(i), true, None);
            if next.is_some_and(|n| n.is(Keyword::As) || n.text == "." || n.text == "(") {
                continue;
            }
            columns.push(token.text.clone());
        }
        columns
    }
}

impl fmt::Display for TableAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tokens, f)
    }
}

impl Statement {
    /// Resolve `alias`, a token of this statement, to its definition.
    pub fn get_table_alias(&self, alias: &Token) -> Option<TableAlias> {
        let origin = self.find_alias_origin(alias)?;
        let before = self.previous_index(Some(origin), true, Some("AS"))?;
        let token = &self[before];

        if token.kind == TokenKind::Name {
            let schema = self
                .previous_index(Some(before), true, None)
                .filter(|&dot| self[dot].text == ".")
                .and_then(|dot| self.previous_index(Some(dot), true, None))
                .filter(|&name| self[name].kind == TokenKind::Name);

            let start = schema.unwrap_or(before);
            debug!(alias = %alias.text, table = %token.text, "resolved table alias");
            return Some(TableAlias {
                schema: schema.map(|i| self[i].text.clone()),
                table: Some(token.text.clone()),
                tokens: self.slice(start, origin),
            });
        }

        if token.is_close_parenthesis() {
            let inner = self[origin].depth.map(|d| d + 1);
            let open = (0..before)
                .rev()
                .find(|&i| self[i].is_open_parenthesis() && self[i].depth == inner)?;

            debug!(alias = %alias.text, "resolved subquery alias");
            return Some(TableAlias {
                schema: None,
                table: None,
                tokens: self.slice(open, origin),
            });
        }

        trace!(alias = %alias.text, before = %token.text, "not a table alias");
        None
    }

    fn find_alias_origin(&self, alias: &Token) -> Option<usize> {
        let standalone = |i: usize| {
            let blank = |j: Option<usize>| j.is_some_and(|j| self[j].is_meaningless());
            blank(self.previous_index(Some(i), false, None))
                && blank(self.next_index(Some(i), false, None))
        };

        (0..self.len()).find(|&i| {
            let token = &self[i];
            token.depth == alias.depth && token.upper_text() == alias.upper_text() && standalone(i)
        })
    }
}
