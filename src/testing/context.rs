use crate::testing::*;
use crate::{Error, Result, StatementList, TableAlias, split};
pub use test_context::test_context;
use test_context::TestContext;

/// The 13 line script with five statements, two of them on one line.
pub struct PositionScript {
    pub sql: &'static str,
    pub statements: StatementList,
}

impl TestContext for PositionScript {
    fn setup() -> Self {
        crate::testing::common_init();
        let sql = script("start_line_number.sql");
        Self {
            sql,
            statements: split(sql),
        }
    }
}

/// A single select joining a table, a schema qualified table and a subquery.
pub struct AliasScript {
    pub statements: StatementList,
}

impl AliasScript {
    /// Resolve the alias under the caret.
    pub fn alias_at(&self, line: usize, column: usize) -> Result<Option<TableAlias>> {
        let position = self
            .statements
            .get_statement_at_position(line, column)
            .ok_or(Error::PositionNotFound { line, column })?;
        let token = position.get_current_token()?;
        Ok(position.get_table_alias(token))
    }
}

impl TestContext for AliasScript {
    fn setup() -> Self {
        crate::testing::common_init();
        Self {
            statements: split(script("alias_origin.sql")),
        }
    }
}
