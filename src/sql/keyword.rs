//! SQL keyword tables used by the lexer and the statement splitter.
//!
//! Two separate concerns live here:
//! - `classify` maps an upper-cased word to the `TokenKind` the lexer emits
//!   for it (plain keyword, DML, DDL, CTE, ordering keyword or builtin type
//!   name). Words missing from the table are plain names.
//! - `Keyword` is the small set of structural keywords the splitter and the
//!   alias resolver branch on. It is derived from a token's upper-cased text
//!   after lexing, so multi-word phrases such as `END IF` are single variants.
//!
//! The table is a compile time `match`, nothing is registered at runtime.

use crate::sql::token_kind::TokenKind;

/// Classify an *upper-cased* word.
///
/// NOTE: The caller is responsible for upper-casing the input; the lexer does
/// it once per word and keeps the result on the token.
pub fn classify(word: &str) -> Option<TokenKind> {
    let kind = match word {
        "SELECT" | "INSERT" | "UPDATE" | "DELETE" | "UPSERT" | "REPLACE" | "MERGE" => {
            TokenKind::KeywordDml
        }
        "CREATE" | "ALTER" | "DROP" | "TRUNCATE" => TokenKind::KeywordDdl,
        "WITH" => TokenKind::KeywordCte,
        "ASC" | "DESC" => TokenKind::KeywordOrder,
        "BIGINT" | "BIGSERIAL" | "BINARY" | "BIT" | "BLOB" | "BOOL" | "BOOLEAN" | "BYTEA"
        | "CHAR" | "CHARACTER" | "DATE" | "DATETIME" | "DEC" | "DECIMAL" | "FLOAT" | "FLOAT4"
        | "FLOAT8" | "INT" | "INT2" | "INT4" | "INT8" | "INTEGER" | "JSON" | "JSONB" | "LONG"
        | "NCHAR" | "NUMBER" | "NUMERIC" | "NVARCHAR" | "REAL" | "SERIAL" | "SERIAL8"
        | "SIGNED" | "SMALLINT" | "TEXT" | "TIME" | "TIMESTAMP" | "TIMESTAMPTZ" | "TINYINT"
        | "UNSIGNED" | "UUID" | "VARBINARY" | "VARCHAR" | "VARCHAR2" | "XML" => {
            TokenKind::NameBuiltin
        }
        "ABORT" | "ACTION" | "ADD" | "AFTER" | "ALL" | "AND" | "ANY" | "ARRAY" | "AS"
        | "AT" | "AUTHORIZATION" | "AUTO_INCREMENT" | "BEFORE" | "BEGIN" | "BETWEEN"
        | "BOTH" | "BY" | "CALL" | "CASCADE" | "CASE" | "CAST" | "CHECK" | "CLOSE"
        | "COLLATE" | "COLUMN" | "COMMENT" | "COMMIT" | "CONSTRAINT" | "CONTINUE" | "CROSS"
        | "CURRENT" | "CURRENT_DATE" | "CURRENT_TIME" | "CURRENT_TIMESTAMP"
        | "CURRENT_USER" | "CURSOR" | "CYCLE" | "DATABASE" | "DEALLOCATE" | "DECLARE"
        | "DEFAULT" | "DEFERRABLE" | "DEFINER" | "DELIMITER" | "DISTINCT" | "DO" | "EACH"
        | "ELSE" | "ELSEIF" | "ELSIF" | "END" | "ESCAPE" | "EXCEPT" | "EXCEPTION" | "EXEC"
        | "EXECUTE" | "EXISTS" | "EXIT" | "EXPLAIN" | "EXTENSION" | "FALSE" | "FETCH"
        | "FILTER" | "FIRST" | "FOLLOWING" | "FOR" | "FOREIGN" | "FROM" | "FULL"
        | "FUNCTION" | "GENERATED" | "GLOBAL" | "GO" | "GOTO" | "GRANT" | "GROUP"
        | "HANDLER" | "HAVING" | "IDENTITY" | "IF" | "ILIKE" | "IMMUTABLE" | "IN" | "INDEX"
        | "INLINE" | "INNER" | "INOUT" | "INSTEAD" | "INTERSECT" | "INTERVAL" | "INTO"
        | "IS" | "ISNULL" | "ITERATE" | "JOIN" | "KEY" | "LANGUAGE" | "LAST" | "LATERAL"
        | "LEADING" | "LEAVE" | "LEFT" | "LIKE" | "LIMIT" | "LOCAL" | "LOCK" | "LOOP"
        | "MATERIALIZED" | "MAX" | "MIN" | "NATURAL" | "NEXT" | "NO" | "NOT" | "NOTHING"
        | "NOTNULL" | "NULL" | "NULLS" | "OF" | "OFFSET" | "ON" | "ONLY" | "OPEN" | "OR"
        | "ORDER" | "OUT" | "OUTER" | "OVER" | "OWNER" | "PARTITION" | "PERFORM"
        | "PRECEDING" | "PRIMARY" | "PROCEDURE" | "RAISE" | "RANGE" | "RECURSIVE"
        | "REFERENCES" | "RELEASE" | "RENAME" | "RESTRICT" | "RETURN" | "RETURNING"
        | "RETURNS" | "REVOKE" | "RIGHT" | "ROLLBACK" | "ROW" | "ROWS" | "SAVEPOINT"
        | "SCHEMA" | "SECURITY" | "SEQUENCE" | "SESSION" | "SET" | "SHOW" | "SIMILAR"
        | "SOME" | "STABLE" | "START" | "STRICT" | "TABLE" | "TEMP" | "TEMPORARY" | "THEN"
        | "TO" | "TRAILING" | "TRANSACTION" | "TRIGGER" | "TRUE" | "UNBOUNDED" | "UNION"
        | "UNIQUE" | "UNTIL" | "USING" | "VACUUM" | "VALUES" | "VARIADIC" | "VIEW"
        | "VOLATILE" | "WHEN" | "WHERE" | "WHILE" | "WINDOW" | "WITHOUT" | "WORK" => {
            TokenKind::Keyword
        }
        _ => return None,
    };
    Some(kind)
}

/// Structural keywords the splitter and the alias resolver react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Begin,
    End,
    EndIf,
    EndFor,
    EndWhile,
    EndLoop,
    Declare,
    If,
    For,
    While,
    Case,
    As,
    From,
}

impl Keyword {
    /// Block openers that indent inside a routine body.
    pub const BLOCK_OPENERS: [Self; 4] = [Keyword::If, Keyword::For, Keyword::While, Keyword::Case];

    /// Compound closers merged into one token by the lexer.
    pub const BLOCK_CLOSERS: [Self; 3] = [Keyword::EndIf, Keyword::EndFor, Keyword::EndWhile];

    /// Attempt to map an *upper-cased* token text to a `Keyword`.
    ///
    /// Multi-word phrases may contain any run of whitespace between their
    /// words (the lexer keeps the source text untouched), so they are
    /// compared word by word.
    pub fn from_upper(text: &str) -> Option<Self> {
        use Keyword::*;
        let mut words = text.split_whitespace();
        let first = words.next()?;
        let second = words.next();
        if words.next().is_some() {
            return None;
        }
        let kw = match (first, second) {
            ("BEGIN", None) => Begin,
            ("END", None) => End,
            ("END", Some("IF")) => EndIf,
            ("END", Some("FOR")) => EndFor,
            ("END", Some("WHILE")) => EndWhile,
            ("END", Some("LOOP")) => EndLoop,
            ("DECLARE", None) => Declare,
            ("IF", None) => If,
            ("FOR", None) => For,
            ("WHILE", None) => While,
            ("CASE", None) => Case,
            ("AS", None) => As,
            ("FROM", None) => From,
            _ => return None,
        };
        Some(kw)
    }

    /// Canonical upper-case string form of the keyword.
    pub const fn as_str(self) -> &'static str {
        use Keyword::*;
        match self {
            Begin => "BEGIN",
            End => "END",
            EndIf => "END IF",
            EndFor => "END FOR",
            EndWhile => "END WHILE",
            EndLoop => "END LOOP",
            Declare => "DECLARE",
            If => "IF",
            For => "FOR",
            While => "WHILE",
            Case => "CASE",
            As => "AS",
            From => "FROM",
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
