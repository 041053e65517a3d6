//! Token kind definitions for the lossless SQL lexer.
//!
//! Every byte of the source ends up in a token of one of these kinds, so the
//! set also covers formatting noise (whitespace, newlines, comments). The
//! classification is lexical only: `*` is always `Wildcard`, a word is a
//! keyword if it appears in the keyword table, and nothing here knows about
//! the grammar of a given SQL dialect.

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum TokenKind {
    /// `:=`
    Assignment,
    /// `-- …` or `# …` up to and including the line terminator.
    Comment,
    /// `--+<digits> …` optimizer hint.
    CommentHint,
    /// `/* … */`, may span several lines.
    CommentMultiline,
    /// `\name` client directive.
    Command,
    /// `NOT IN`
    Comparison,
    Keyword,
    /// `WITH`
    KeywordCte,
    /// `CREATE [OR REPLACE]`, `ALTER`, `DROP`, `TRUNCATE`.
    KeywordDdl,
    /// `SELECT`, `INSERT`, `UPDATE`, …
    KeywordDml,
    /// `ASC`, `DESC`.
    KeywordOrder,
    /// `AT TIME ZONE '<zone>'`
    KeywordTzCast,
    /// Dollar-quoted body (`$$ … $$`, `$tag$ … $tag$`).
    Literal,
    Name,
    /// `?`, `$1`, `:name`, `%s`, `%(name)s`.
    NamePlaceholder,
    /// Builtin type names such as `INTEGER` or `DOUBLE PRECISION`.
    NameBuiltin,
    /// One `\r\n`, `\r` or `\n` sequence.
    Newline,
    NumberHexadecimal,
    NumberFloat,
    NumberInteger,
    Operator,
    OperatorComparison,
    Punctuation,
    /// `"quoted identifier"`
    StringSymbol,
    /// `'string'`
    StringSingle,
    /// `*`
    Wildcard,
    /// Run of spaces / tabs, never crossing a line break.
    Whitespace,
}

impl TokenKind {
    /// Kinds that count as a keyword.
    pub const KEYWORDS: [Self; 6] = [
        TokenKind::Keyword,
        TokenKind::KeywordCte,
        TokenKind::KeywordDdl,
        TokenKind::KeywordDml,
        TokenKind::KeywordOrder,
        TokenKind::KeywordTzCast,
    ];

    /// Kinds that only carry formatting.
    pub const MEANINGLESS: [Self; 5] = [
        TokenKind::Whitespace,
        TokenKind::Newline,
        TokenKind::Comment,
        TokenKind::CommentHint,
        TokenKind::CommentMultiline,
    ];

    pub const COMMENTS: [Self; 3] = [
        TokenKind::Comment,
        TokenKind::CommentHint,
        TokenKind::CommentMultiline,
    ];

    pub fn is_keyword(self) -> bool {
        Self::KEYWORDS.contains(&self)
    }

    /// Whitespace, newline or any comment.
    pub fn is_meaningless(self) -> bool {
        Self::MEANINGLESS.contains(&self)
    }

    pub fn is_comment(self) -> bool {
        Self::COMMENTS.contains(&self)
    }

    /// Whitespace or newline, the tokens a closed statement pulls in after its `;`.
    pub fn is_blank(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Newline)
    }
}
