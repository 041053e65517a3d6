//! Nesting state machine driving the statement splitter.
//!
//! The splitter needs to know whether a `;` ends a statement or belongs to a
//! procedural body. Parentheses are easy; routine bodies are not, because
//! `BEGIN`, `END`, `DECLARE`, `IF`, … mean different things depending on
//! whether they appear inside a `CREATE` statement. `SplitState::step` is the
//! whole rule set: given the state and the next token it returns the next
//! state and the change of nesting level.

use crate::sql::{Keyword, Token, TokenKind};

/// Which kind of block the splitter is currently in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Block {
    /// Plain statement, `BEGIN` here is a transaction and does not indent.
    #[default]
    TopLevel,
    /// Inside a `CREATE …` statement that may carry a routine body.
    CreateBody,
    /// Inside the variable section of a routine (`DECLARE … ;`).
    Declare,
}

/// Splitter state between two tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SplitState {
    pub block: Block,
    /// Open `BEGIN`s in the current statement, floored at zero.
    pub begin_depth: u32,
}

impl SplitState {
    pub const fn new(block: Block, begin_depth: u32) -> Self {
        Self { block, begin_depth }
    }

    fn in_create(self) -> bool {
        self.block != Block::TopLevel
    }

    /// State after `token` and the nesting delta it causes.
    pub fn step(self, token: &Token) -> (Self, i32) {
        if token.is_open_parenthesis() {
            return (self, 1);
        }
        if token.is_close_parenthesis() {
            return (self, -1);
        }
        if !token.is_keyword() {
            return (self, 0);
        }

        // Only the DDL flavour of CREATE opens a body, with or without OR REPLACE.
        if token.kind == TokenKind::KeywordDdl && token.upper_text().starts_with("CREATE") {
            let block = match self.block {
                Block::TopLevel => Block::CreateBody,
                other => other,
            };
            return (Self { block, ..self }, 0);
        }

        match token.keyword() {
            // A DECLARE nested in a BEGIN block is an ordinary statement of the body.
            Some(Keyword::Declare) if self.in_create() && self.begin_depth == 0 => {
                (Self::new(Block::Declare, 0), 0)
            }
            Some(Keyword::Begin) => {
                let state = Self {
                    begin_depth: self.begin_depth + 1,
                    ..self
                };
                (state, i32::from(self.in_create()))
            }
            Some(Keyword::End) => {
                let state = Self {
                    begin_depth: self.begin_depth.saturating_sub(1),
                    ..self
                };
                (state, -1)
            }
            Some(kw) if Keyword::BLOCK_OPENERS.contains(&kw) => {
                let delta = i32::from(self.in_create() && self.begin_depth > 0);
                (self, delta)
            }
            Some(kw) if Keyword::BLOCK_CLOSERS.contains(&kw) => (self, -1),
            _ => (self, 0),
        }
    }

    /// Called on a `;` reached at level zero or below.
    ///
    /// Returns the state to continue the *same* statement with when the `;`
    /// only closes a `DECLARE` section, `None` when the statement is complete.
    pub fn on_terminator(self) -> Option<Self> {
        match self.block {
            Block::Declare => Some(Self {
                block: Block::CreateBody,
                ..self
            }),
            Block::TopLevel | Block::CreateBody => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::tokenize;
    use rstest::rstest;

    fn token(sql: &str) -> Token {
        tokenize(sql).remove(0)
    }

    const TOP: SplitState = SplitState::new(Block::TopLevel, 0);
    const CREATE: SplitState = SplitState::new(Block::CreateBody, 0);
    const BODY: SplitState = SplitState::new(Block::CreateBody, 1);
    const DECLARE: SplitState = SplitState::new(Block::Declare, 0);

    #[rstest]
    #[case(TOP, "(", TOP, 1)]
    #[case(BODY, ")", BODY, -1)]
    #[case(TOP, "foo", TOP, 0)]
    #[case(TOP, "'begin'", TOP, 0)]
    #[case(TOP, "CREATE", CREATE, 0)]
    #[case(TOP, "create or replace", CREATE, 0)]
    #[case(DECLARE, "CREATE", DECLARE, 0)]
    #[case(CREATE, "DECLARE", DECLARE, 0)]
    #[case(BODY, "DECLARE", BODY, 0)]
    #[case(TOP, "DECLARE", TOP, 0)]
    #[case(TOP, "BEGIN", SplitState::new(Block::TopLevel, 1), 0)]
    #[case(CREATE, "BEGIN", BODY, 1)]
    #[case(DECLARE, "begin", SplitState::new(Block::Declare, 1), 1)]
    #[case(BODY, "END", CREATE, -1)]
    #[case(TOP, "END", TOP, -1)]
    #[case(BODY, "IF", BODY, 1)]
    #[case(BODY, "WHILE", BODY, 1)]
    #[case(BODY, "FOR", BODY, 1)]
    #[case(BODY, "CASE", BODY, 1)]
    #[case(CREATE, "CASE", CREATE, 0)]
    #[case(TOP, "CASE", TOP, 0)]
    #[case(BODY, "END IF", BODY, -1)]
    #[case(BODY, "END WHILE", BODY, -1)]
    #[case(TOP, "END FOR", TOP, -1)]
    #[case(BODY, "END LOOP", BODY, 0)]
    #[case(BODY, "HANDLER FOR", BODY, 0)]
    #[case(BODY, "SELECT", BODY, 0)]
    fn step_transitions(
        #[case] state: SplitState,
        #[case] sql: &str,
        #[case] expected: SplitState,
        #[case] delta: i32,
    ) {
        assert_eq!(state.step(&token(sql)), (expected, delta));
    }

    #[test]
    fn terminator_closes_declare_only() {
        assert_eq!(DECLARE.on_terminator(), Some(CREATE));
        assert_eq!(CREATE.on_terminator(), None);
        assert_eq!(TOP.on_terminator(), None);
    }
}
