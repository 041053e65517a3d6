//! Line / column coordinates for tokens and statements.
//!
//! Coordinates are 1-based and follow the editor convention where the first
//! character of a line sits between column 1 and column 2. A token covering
//! `select` at the start of a line therefore spans columns `1..7`.
//!
//! A line terminator never moves the *end* of the token that carries it to
//! the next line: newline tokens and `--` comments end on the line they start
//! on. The next token however starts at column 1 of the following line.

/// A caret position inside the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{line}:{column}")]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    /// First character of the source.
    pub const START: Self = Self::new(1, 1);

    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Position reached after walking over `text`.
    ///
    /// `\r\n`, `\r` and `\n` each count as a single line break.
    pub fn advance(self, text: &str) -> Self {
        let mut pos = self;
        let mut chars = text.chars().peekable();
        while let Some(c) = chars.next() {
            match c {
                '\r' => {
                    chars.next_if_eq(&'\n');
                    pos = Self::new(pos.line + 1, 1);
                }
                '\n' => pos = Self::new(pos.line + 1, 1),
                _ => pos.column += 1,
            }
        }
        pos
    }
}

/// Start / end coordinates of a token or statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{start}-{end}")]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Range of `text` when it begins at `start`.
    pub fn of(start: Position, text: &str) -> Self {
        let body = text.trim_end_matches(['\r', '\n']);
        let terminator = text.len() - body.len();
        let mut end = start.advance(body);
        end.column += terminator;
        Self { start, end }
    }

    /// True if the range starts on or before `line` and ends on or after it.
    pub fn spans_line(&self, line: usize) -> bool {
        self.start.line <= line && self.end.line >= line
    }

    /// Inclusive on both bounds, lines first.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Column check excluding the start bound (`start < column <= end`).
    pub fn surrounds_column(&self, column: usize) -> bool {
        self.start.column < column && self.end.column >= column
    }
}
