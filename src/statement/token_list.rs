use crate::*;
use derive_more::{Deref, From, IntoIterator};
use itertools::Itertools;
use std::fmt;

/// An owned, ordered run of tokens.
///
/// Navigation is plain index arithmetic: callers hold on to indices, never to
/// tokens borrowed out of a neighbour.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, From, IntoIterator)]
#[into_iterator(owned, ref)]
pub struct TokenList(Vec<Token>);

impl TokenList {
    /// Index of the closest token before `from` (or before the end of the list).
    pub fn previous_index(
        &self,
        from: Option<usize>,
        skip_meaningless: bool,
        skip_text: Option<&str>,
    ) -> Option<usize> {
        let end = from.unwrap_or(self.len()).min(self.len());
        (0..end)
            .rev()
            .find(|&i| !skipped(&self[i], skip_meaningless, skip_text))
    }

    /// Index of the closest token after `from` (or from the start of the list).
    pub fn next_index(
        &self,
        from: Option<usize>,
        skip_meaningless: bool,
        skip_text: Option<&str>,
    ) -> Option<usize> {
        let begin = from.map_or(0, |i| i + 1);
        (begin..self.len()).find(|&i| !skipped(&self[i], skip_meaningless, skip_text))
    }

    pub fn get_previous_token(
        &self,
        from: Option<usize>,
        skip_meaningless: bool,
        skip_text: Option<&str>,
    ) -> Option<&Token> {
        self.previous_index(from, skip_meaningless, skip_text)
            .map(|i| &self[i])
    }

    pub fn get_next_token(
        &self,
        from: Option<usize>,
        skip_meaningless: bool,
        skip_text: Option<&str>,
    ) -> Option<&Token> {
        self.next_index(from, skip_meaningless, skip_text)
            .map(|i| &self[i])
    }

    /// Tokens `start..=end`, clamped to the list.
    pub fn slice(&self, start: usize, end: usize) -> TokenList {
        self.iter()
            .take(end.saturating_add(1))
            .skip(start)
            .cloned()
            .collect_vec()
            .into()
    }

    /// From the start of the first token to the end of the last one.
    pub fn range(&self) -> Range {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => Range::new(first.range.start, last.range.end),
            _ => Range::default(),
        }
    }
}

fn skipped(token: &Token, skip_meaningless: bool, skip_text: Option<&str>) -> bool {
    (skip_meaningless && token.is_meaningless())
        || skip_text.is_some_and(|text| token.upper_text().eq_ignore_ascii_case(text))
}

impl fmt::Display for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iter().try_for_each(|t| f.write_str(&t.text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn list(sql: &str) -> TokenList {
        tokenize(sql).into()
    }

    fn text(token: Option<&Token>) -> Option<&str> {
        token.map(|t| t.text.as_str())
    }

    #[rstest]
    #[case(None, false, None, Some("c"))]
    #[case(None, true, None, Some("c"))]
    #[case(Some(4), false, None, Some(" "))]
    #[case(Some(4), true, None, Some("as"))]
    #[case(Some(4), true, Some("as"), Some("a"))]
    #[case(Some(0), true, None, None)]
    fn previous(
        #[case] from: Option<usize>,
        #[case] skip_meaningless: bool,
        #[case] skip_text: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        // a ␣ as ␣ b ␣/*x*/␣ c
        let tokens = list("a as b /*x*/ c");
        assert_eq!(
            text(tokens.get_previous_token(from, skip_meaningless, skip_text)),
            expected
        );
    }

    #[rstest]
    #[case(None, false, None, Some("a"))]
    #[case(Some(0), false, None, Some(" "))]
    #[case(Some(0), true, None, Some("as"))]
    #[case(Some(0), true, Some("AS"), Some("b"))]
    #[case(Some(4), true, None, Some("c"))]
    #[case(Some(8), true, None, None)]
    #[case(Some(42), true, None, None)]
    fn next(
        #[case] from: Option<usize>,
        #[case] skip_meaningless: bool,
        #[case] skip_text: Option<&str>,
        #[case] expected: Option<&str>,
    ) {
        let tokens = list("a as b /*x*/ c");
        assert_eq!(
            text(tokens.get_next_token(from, skip_meaningless, skip_text)),
            expected
        );
    }

    #[test]
    fn slice_is_inclusive_and_clamped() {
        let tokens = list("select a, b from t");
        assert_eq!(tokens.slice(2, 4).to_string(), "a, ");
        assert_eq!(tokens.slice(8, 100).to_string(), " t");
        assert!(tokens.slice(20, 30).is_empty());
    }

    #[test]
    fn display_is_lossless() {
        let sql = "select 'a;b' -- c\n from t;";
        assert_eq!(list(sql).to_string(), sql);
    }

    #[test]
    fn range_of_empty_list() {
        assert_eq!(TokenList::default().range(), Range::default());
        assert_eq!(list("a\nbc").range().to_string(), "1:1-2:3");
    }
}
