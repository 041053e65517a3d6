#![cfg(test)]
crate::reexport!(context);
pub use rstest::*;

pub(in crate::testing) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // RUST_LOG wins over SQLSPLIT_LOG
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&crate::config().log));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .init();
    });
}

/// SQL fixture shipped under `src/testing/fixtures/`.
pub fn script(name: &str) -> &'static str {
    match name {
        "alias_origin.sql" => include_str!("fixtures/alias_origin.sql"),
        "begintag.sql" => include_str!("fixtures/begintag.sql"),
        "begintag2.sql" => include_str!("fixtures/begintag2.sql"),
        "casewhen_procedure.sql" => include_str!("fixtures/casewhen_procedure.sql"),
        "dashcomment.sql" => include_str!("fixtures/dashcomment.sql"),
        "function.sql" => include_str!("fixtures/function.sql"),
        "function_declare.sql" => include_str!("fixtures/function_declare.sql"),
        "function_pgsql.sql" => include_str!("fixtures/function_pgsql.sql"),
        "function_pgsql2.sql" => include_str!("fixtures/function_pgsql2.sql"),
        "mysql_handler.sql" => include_str!("fixtures/mysql_handler.sql"),
        "procedure_blocks.sql" => include_str!("fixtures/procedure_blocks.sql"),
        "start_line_number.sql" => include_str!("fixtures/start_line_number.sql"),
        _ => panic!("no fixture named {name}"),
    }
}

mod fixture_scripts {
    use super::{super::*, *};

    #[rstest]
    #[case("alias_origin.sql")]
    #[case("begintag2.sql")]
    #[case("procedure_blocks.sql")]
    #[case("start_line_number.sql")]
    fn fixtures_use_unix_line_endings(#[case] name: &str) {
        let sql = script(name);
        assert!(!sql.contains('\r'));
        assert!(sql.ends_with('\n'));
    }

    #[test_context(PositionScript)]
    #[test]
    fn position_script_is_lossless(ctx: &mut PositionScript) {
        let rebuilt = ctx.statements.iter().map(ToString::to_string).collect::<String>();
        assert_eq!(rebuilt, ctx.sql);
    }

    #[test_context(AliasScript)]
    #[test]
    fn alias_script_is_one_open_statement(ctx: &mut AliasScript) -> Result {
        assert_eq!(ctx.statements.len(), 1);
        assert!(ctx.statements[0].needs_semicolon());
        assert!(matches!(
            ctx.alias_at(42, 1),
            Err(Error::PositionNotFound { line: 42, column: 1 })
        ));
        Ok(())
    }
}
