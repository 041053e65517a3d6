//! Dialect-aware SQL lexing and statement splitting for editors.
//!
//! The crate turns a script into lossless tokens, groups them into statements
//! and answers the questions an editor asks about a caret position: which
//! statement is this, which token, and what does this alias refer to.
//!
//! ```rust
//! use sqlsplit::prelude::*;
//!
//! let statements = split("select 1;\nselect t.a from tbl t where t.a > 0");
//! assert_eq!(statements.len(), 2);
//! assert!(statements[1].needs_semicolon());
//!
//! let at = statements.get_statement_at_position(2, 9).unwrap();
//! let caret = at.get_current_token().unwrap();
//! assert_eq!(caret.text, "t");
//! let alias = at.get_table_alias(caret).unwrap();
//! assert_eq!(alias.table.as_deref(), Some("tbl"));
//! ```
reexport!(testing, test);
reexport!(config);
reexport!(error);
reexport!(sql);
reexport!(split);
reexport!(statement);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

/// Everyday surface of the crate.
pub mod prelude {
    pub use crate::sql::prelude::*;
    pub use crate::{
        CodeLens, Statement, StatementAtPosition, StatementList, TableAlias, TokenList, split,
    };
}

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
