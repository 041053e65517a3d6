use crate::sql::{
    keyword,
    range::{Position, Range},
    token::Token,
    token_kind::TokenKind,
};
use crate::*;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;

/// Lossless SQL tokenizer producing a flat stream of `Token`s.
///
/// Scope / Intent:
/// - Designed for editor features (statement splitting, caret lookups).
/// - Accepts incomplete / syntactically invalid SQL.
/// - Classifies lexically only; no dialect grammar is applied.
///
/// Behavior:
/// - Every character of the input ends up in exactly one token, whitespace,
///   newlines and comments included.
/// - At each position the rules are tried in priority order and the first
///   one that matches wins; multi-word phrases (`LEFT JOIN`, `END IF`, …)
///   come before the single word rule so they stay one token.
/// - Anything no rule recognizes (an unterminated quote, a stray `$`) becomes
///   a single-character `Punctuation` token and lexing resumes right after it.
///
/// Guarantees:
/// - Never panics and never returns an error.
/// - Concatenating `text` of all tokens yields `sql`.
///
/// Complexity:
/// - Linear in the input. A search for a missing closing delimiter is not
///   repeated by later openers of the same kind.
pub fn tokenize(sql: &str) -> Vec<Token> {
    let mut out = Vec::new();
    let mut caret = Position::START;
    let mut at = 0;
    let misses = Misses::default();

    while at < sql.len() {
        let scanner = Scanner {
            src: sql,
            at,
            misses: &misses,
        };
        let (kind, len) = scanner.scan();
        let text = &sql[at..at + len];
        out.push(Token::new(kind, text, at, Range::of(caret, text)));
        caret = caret.advance(text);
        at += len;
    }

    trace!(tokens = out.len(), bytes = sql.len(), "tokenized");
    out
}

type Rule = fn(&Scanner) -> Option<usize>;

/// Rules with a fixed kind, in priority order.
static RULES: &[(Rule, TokenKind)] = &[
    (comment_hint, TokenKind::CommentHint),
    (comment, TokenKind::Comment),
    (block_comment, TokenKind::CommentMultiline),
    (newline, TokenKind::Newline),
    (whitespace, TokenKind::Whitespace),
    (assignment, TokenKind::Assignment),
    (double_colon, TokenKind::Punctuation),
    (wildcard, TokenKind::Wildcard),
    (backtick_name, TokenKind::Name),
    (acute_name, TokenKind::Name),
    (dollar_body, TokenKind::Literal),
    (placeholder, TokenKind::NamePlaceholder),
    (command, TokenKind::Command),
    (leading_keyword, TokenKind::Keyword),
    (variable_name, TokenKind::Name),
    (name_before_dot, TokenKind::Name),
    (name_after_dot, TokenKind::Name),
    (name_before_paren, TokenKind::Name),
    (hexadecimal, TokenKind::NumberHexadecimal),
    (float_exponent, TokenKind::NumberFloat),
    (float, TokenKind::NumberFloat),
    (integer, TokenKind::NumberInteger),
    (single_quoted, TokenKind::StringSingle),
    (double_quoted, TokenKind::StringSymbol),
    (bracketed_name, TokenKind::Name),
    (join, TokenKind::Keyword),
    (end_block, TokenKind::Keyword),
    (not_null, TokenKind::Keyword),
    (nulls_order, TokenKind::Keyword),
    (union_all, TokenKind::Keyword),
    (create, TokenKind::KeywordDdl),
    (double_precision, TokenKind::NameBuiltin),
    (group_by, TokenKind::Keyword),
    (order_by, TokenKind::Keyword),
    (handler_for, TokenKind::Keyword),
    (lateral_view, TokenKind::Keyword),
    (time_zone_cast, TokenKind::KeywordTzCast),
    (not_in, TokenKind::Comparison),
    (like, TokenKind::OperatorComparison),
    (regexp, TokenKind::OperatorComparison),
];

/// Rules tried after plain words.
static TRAILING_RULES: &[(Rule, TokenKind)] = &[
    (punctuation, TokenKind::Punctuation),
    (comparison, TokenKind::OperatorComparison),
    (operator, TokenKind::Operator),
];

struct Scanner<'a> {
    src: &'a str,
    at: usize,
    misses: &'a Misses,
}

/// Closing delimiters already searched for in vain during one `tokenize` call.
#[derive(Debug, Default)]
struct Misses {
    /// Per quote char, the byte offsets a failed scan stepped on. Scanning on
    /// from any of them can never find the closing quote.
    quotes: RefCell<HashMap<char, Vec<bool>>>,
    /// Offset of a `/*` with no `*/` anywhere after it.
    block_comment: Cell<Option<usize>>,
}

impl<'a> Scanner<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.at..]
    }

    fn prev(&self) -> Option<char> {
        self.src[..self.at].chars().next_back()
    }

    /// Kind and byte length of the token starting at `self.at`.
    fn scan(&self) -> (TokenKind, usize) {
        let fixed = |rules: &[(Rule, TokenKind)]| {
            rules.iter().find_map(|(rule, kind)| {
                rule(self)
                    .filter(|&len| len > 0)
                    .map(|len| (*kind, len))
            })
        };

        fixed(RULES)
            .or_else(|| self.word())
            .or_else(|| fixed(TRAILING_RULES))
            .unwrap_or_else(|| {
                let len = self.rest().chars().next().map_or(1, char::len_utf8);
                (TokenKind::Punctuation, len)
            })
    }

    /// `\w[$#\w]*`, classified through the keyword table.
    fn word(&self) -> Option<(TokenKind, usize)> {
        let s = self.rest();
        let first = s.chars().next().filter(|&c| is_word(c))?;
        let tail = run(&s[first.len_utf8()..], |c| is_word(c) || c == '$' || c == '#');
        let len = first.len_utf8() + tail;
        let kind = keyword::classify(&s[..len].to_uppercase()).unwrap_or(TokenKind::Name);
        Some((kind, len))
    }

    /// A run enclosed in `quote`; a doubled quote (or a backslash escape when
    /// `backslash` is set) does not close it.
    fn quoted(&self, quote: char, backslash: bool) -> Option<usize> {
        let mut chars = self.rest().char_indices().peekable();
        chars.next().filter(|&(_, c)| c == quote)?;

        let mut misses = self.misses.quotes.borrow_mut();
        let dead = misses.entry(quote).or_default();
        let mut steps = Vec::new();
        while let Some((i, c)) = chars.next() {
            if dead.get(self.at + i).copied().unwrap_or(false) {
                break;
            }
            steps.push(self.at + i);
            if backslash && c == '\\' {
                chars.next_if(|&(_, n)| n == '\\' || n == quote);
            } else if c == quote && chars.next_if(|&(_, n)| n == quote).is_none() {
                return Some(i + c.len_utf8());
            }
        }

        if dead.is_empty() {
            dead.resize(self.src.len(), false);
        }
        for at in steps {
            dead[at] = true;
        }
        None
    }
}

// --- Character helpers ---

fn is_word(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_name_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Byte length of the leading run of chars matching `pred`.
fn run(s: &str, pred: impl Fn(char) -> bool) -> usize {
    s.char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| i)
}

fn starts_with_ignore_case(s: &str, word: &str) -> bool {
    s.len() >= word.len() && s.as_bytes()[..word.len()].eq_ignore_ascii_case(word.as_bytes())
}

/// True when no word character follows byte `at`.
fn boundary(s: &str, at: usize) -> bool {
    !s[at..].chars().next().is_some_and(is_word)
}

/// Byte length of a line terminator at the start of `s`.
fn line_break(s: &str) -> Option<usize> {
    if s.starts_with("\r\n") {
        Some(2)
    } else if s.starts_with(['\r', '\n']) {
        Some(1)
    } else {
        None
    }
}

/// Up to and including the next line terminator, or to the end of input.
fn rest_of_line(s: &str) -> usize {
    match s.find(['\r', '\n']) {
        Some(i) => i + line_break(&s[i..]).unwrap_or(0),
        None => s.len(),
    }
}

/// Words separated by whitespace, ending on a word boundary.
fn phrase(s: &str, words: &[&str]) -> Option<usize> {
    let mut at = 0;
    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            let gap = run(&s[at..], char::is_whitespace);
            if gap == 0 {
                return None;
            }
            at += gap;
        }
        if !starts_with_ignore_case(&s[at..], word) {
            return None;
        }
        at += word.len();
    }
    boundary(s, at).then_some(at)
}

/// First matching phrase among `choices`; list longer phrases first.
fn any_phrase(s: &str, choices: &[&[&str]]) -> Option<usize> {
    choices.iter().find_map(|words| phrase(s, words))
}

/// One of `words` followed by at least one whitespace.
fn word_then_space(s: &str, words: &[&str]) -> Option<usize> {
    words.iter().find_map(|word| {
        if !starts_with_ignore_case(s, word) {
            return None;
        }
        let gap = run(&s[word.len()..], char::is_whitespace);
        (gap > 0).then_some(word.len() + gap)
    })
}

/// An identifier-like word starting with a letter.
fn name(s: &str) -> Option<usize> {
    let first = s.chars().next().filter(|&c| is_name_start(c))?;
    Some(first.len_utf8() + run(&s[first.len_utf8()..], is_word))
}

fn digits(s: &str) -> usize {
    run(s, |c| c.is_ascii_digit())
}

fn minus(s: &str) -> usize {
    usize::from(s.starts_with('-'))
}

/// A number must not run straight into a name.
fn number_end(s: &str, at: usize) -> Option<usize> {
    let next = s[at..].chars().next();
    (!next.is_some_and(|c| is_name_start(c) || c == '_')).then_some(at)
}

// --- Rules ---

fn comment_hint(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    (s.starts_with("--+") && s[3..].starts_with(|c: char| c.is_ascii_digit()))
        .then(|| rest_of_line(s))
}

fn comment(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    (s.starts_with("--") || s.starts_with("# ")).then(|| rest_of_line(s))
}

fn block_comment(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    if !s.starts_with("/*") {
        return None;
    }
    if sc.misses.block_comment.get().is_some_and(|at| at < sc.at) {
        return None;
    }
    let len = s[2..].find("*/").map(|i| i + 4);
    if len.is_none() {
        sc.misses.block_comment.set(Some(sc.at));
    }
    len
}

fn newline(sc: &Scanner) -> Option<usize> {
    line_break(sc.rest())
}

fn whitespace(sc: &Scanner) -> Option<usize> {
    Some(run(sc.rest(), |c| c.is_whitespace() && c != '\r' && c != '\n'))
}

fn assignment(sc: &Scanner) -> Option<usize> {
    sc.rest().starts_with(":=").then_some(2)
}

fn double_colon(sc: &Scanner) -> Option<usize> {
    sc.rest().starts_with("::").then_some(2)
}

fn wildcard(sc: &Scanner) -> Option<usize> {
    sc.rest().starts_with('*').then_some(1)
}

fn backtick_name(sc: &Scanner) -> Option<usize> {
    sc.quoted('`', false)
}

fn acute_name(sc: &Scanner) -> Option<usize> {
    sc.quoted('´', false)
}

/// `$$ … $$` or `$tag$ … $tag$`, not glued to a preceding word.
fn dollar_body(sc: &Scanner) -> Option<usize> {
    if sc.prev().is_some_and(|c| is_word(c) || c == '"' || c == '$') {
        return None;
    }
    let s = sc.rest();
    let inner = s.strip_prefix('$')?;
    let tag_len = match inner.chars().next() {
        Some(c) if is_name_start(c) || c == '_' => {
            c.len_utf8() + run(&inner[c.len_utf8()..], is_word)
        }
        _ => 0,
    };
    if !inner[tag_len..].starts_with('$') {
        return None;
    }
    // A later opener of the same tag would close this one, so a failed
    // search is never repeated.
    let tag = &s[..tag_len + 2];
    s[tag.len()..]
        .find(tag)
        .map(|i| tag.len() + i + tag.len())
}

/// `?`, `%s`, `%(name)s`, `$1`, `:name`.
fn placeholder(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    if s.starts_with('?') {
        return Some(1);
    }
    if let Some(after) = s.strip_prefix('%') {
        if after.starts_with('s') {
            return Some(2);
        }
        let inner = after.strip_prefix('(')?;
        let len = run(inner, is_word);
        return (len > 0 && inner[len..].starts_with(")s")).then_some(len + 4);
    }
    if sc.prev().is_some_and(is_word) || !s.starts_with(['$', ':']) {
        return None;
    }
    let len = run(&s[1..], is_word);
    (len > 0).then_some(len + 1)
}

fn command(sc: &Scanner) -> Option<usize> {
    let s = sc.rest().strip_prefix('\\')?;
    let len = run(s, is_word);
    (len > 0).then_some(len + 1)
}

/// Keywords that must never turn into names, even before `(` or `.`.
fn leading_keyword(sc: &Scanner) -> Option<usize> {
    any_phrase(
        sc.rest(),
        &[&["CASE"], &["IN"], &["VALUES"], &["USING"], &["FROM"], &["AS"]],
    )
}

/// `@var`, `#temp`, `##global`.
fn variable_name(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    let prefix = if s.starts_with("##") {
        2
    } else if s.starts_with(['@', '#']) {
        1
    } else {
        return None;
    };
    let rest = &s[prefix..];
    let first = rest.chars().next().filter(|&c| is_name_start(c))?;
    let tail = run(&rest[first.len_utf8()..], is_word);
    (tail > 0).then_some(prefix + first.len_utf8() + tail)
}

/// `schema` in `schema.table`, whitespace allowed before the dot.
fn name_before_dot(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    let len = name(s)?;
    let gap = run(&s[len..], char::is_whitespace);
    s[len + gap..].starts_with('.').then_some(len)
}

/// `table` in `schema.table`.
fn name_after_dot(sc: &Scanner) -> Option<usize> {
    if sc.prev() != Some('.') {
        return None;
    }
    name(sc.rest())
}

/// Function calls: `COUNT(` is a name whatever the word.
fn name_before_paren(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    let len = name(s)?;
    s[len..].starts_with('(').then_some(len)
}

fn hexadecimal(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    let sign = minus(s);
    if !starts_with_ignore_case(&s[sign..], "0x") {
        return None;
    }
    let len = run(&s[sign + 2..], |c| c.is_ascii_hexdigit());
    (len > 0).then_some(sign + 2 + len)
}

/// `12.07E-2`, `1E10`.
fn float_exponent(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    let mut at = minus(s);
    let int = digits(&s[at..]);
    if int == 0 {
        return None;
    }
    at += int;
    if s[at..].starts_with('.') {
        let fraction = digits(&s[at + 1..]);
        if fraction > 0 {
            at += 1 + fraction;
        }
    }
    if !s[at..].starts_with(['e', 'E']) {
        return None;
    }
    at += 1 + minus(&s[at + 1..]);
    let exponent = digits(&s[at..]);
    (exponent > 0).then_some(at + exponent)
}

/// `9.21`, `1.`, `.5`.
fn float(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    let mut at = minus(s);
    let int = digits(&s[at..]);
    at += int;
    if !s[at..].starts_with('.') {
        return None;
    }
    let fraction = digits(&s[at + 1..]);
    if int == 0 && fraction == 0 {
        return None;
    }
    number_end(s, at + 1 + fraction)
}

fn integer(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    let sign = minus(s);
    let len = digits(&s[sign..]);
    if len == 0 {
        return None;
    }
    number_end(s, sign + len)
}

fn single_quoted(sc: &Scanner) -> Option<usize> {
    sc.quoted('\'', true)
}

fn double_quoted(sc: &Scanner) -> Option<usize> {
    sc.quoted('"', true)
}

/// SQL Server style `[name]`, unless it indexes into something.
fn bracketed_name(sc: &Scanner) -> Option<usize> {
    if sc.prev().is_some_and(|c| is_word(c) || c == ']' || c == ')') {
        return None;
    }
    let inner = sc.rest().strip_prefix('[')?;
    let len = run(inner, |c| c != '[' && c != ']');
    (len > 0 && inner[len..].starts_with(']')).then_some(len + 2)
}

/// `[LEFT|RIGHT|FULL] [INNER|OUTER|STRAIGHT] JOIN` or `[CROSS|NATURAL] JOIN`.
fn join(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    let mut at = word_then_space(s, &["LEFT", "RIGHT", "FULL"]).unwrap_or(0);
    at += word_then_space(&s[at..], &["INNER", "OUTER", "STRAIGHT"]).unwrap_or(0);
    if at == 0 {
        at = word_then_space(s, &["CROSS", "NATURAL"]).unwrap_or(0);
    }
    phrase(&s[at..], &["JOIN"]).map(|len| at + len)
}

fn end_block(sc: &Scanner) -> Option<usize> {
    any_phrase(
        sc.rest(),
        &[
            &["END", "IF"],
            &["END", "FOR"],
            &["END", "WHILE"],
            &["END", "LOOP"],
            &["END"],
        ],
    )
}

fn not_null(sc: &Scanner) -> Option<usize> {
    phrase(sc.rest(), &["NOT", "NULL"])
}

fn nulls_order(sc: &Scanner) -> Option<usize> {
    any_phrase(sc.rest(), &[&["NULLS", "FIRST"], &["NULLS", "LAST"]])
}

fn union_all(sc: &Scanner) -> Option<usize> {
    phrase(sc.rest(), &["UNION", "ALL"])
}

fn create(sc: &Scanner) -> Option<usize> {
    any_phrase(sc.rest(), &[&["CREATE", "OR", "REPLACE"], &["CREATE"]])
}

fn double_precision(sc: &Scanner) -> Option<usize> {
    phrase(sc.rest(), &["DOUBLE", "PRECISION"])
}

fn group_by(sc: &Scanner) -> Option<usize> {
    phrase(sc.rest(), &["GROUP", "BY"])
}

fn order_by(sc: &Scanner) -> Option<usize> {
    phrase(sc.rest(), &["ORDER", "BY"])
}

fn handler_for(sc: &Scanner) -> Option<usize> {
    phrase(sc.rest(), &["HANDLER", "FOR"])
}

fn lateral_view(sc: &Scanner) -> Option<usize> {
    phrase(sc.rest(), &["LATERAL", "VIEW"])
}

/// `AT TIME ZONE '<zone>'`, zone literal included.
fn time_zone_cast(sc: &Scanner) -> Option<usize> {
    let s = sc.rest();
    let mut at = phrase(s, &["AT", "TIME", "ZONE"])?;
    let gap = run(&s[at..], char::is_whitespace);
    if gap == 0 {
        return None;
    }
    at += gap;
    let zone = s[at..].strip_prefix('\'')?;
    let len = run(zone, |c| c != '\'');
    (len > 0 && zone[len..].starts_with('\'')).then_some(at + len + 2)
}

fn not_in(sc: &Scanner) -> Option<usize> {
    phrase(sc.rest(), &["NOT", "IN"])
}

fn like(sc: &Scanner) -> Option<usize> {
    any_phrase(
        sc.rest(),
        &[
            &["NOT", "LIKE"],
            &["NOT", "ILIKE"],
            &["NOT", "RLIKE"],
            &["LIKE"],
            &["ILIKE"],
            &["RLIKE"],
        ],
    )
}

fn regexp(sc: &Scanner) -> Option<usize> {
    any_phrase(sc.rest(), &[&["NOT", "REGEXP"], &["REGEXP"]])
}

fn punctuation(sc: &Scanner) -> Option<usize> {
    sc.rest()
        .starts_with([';', ':', '(', ')', '[', ']', ',', '.'])
        .then_some(1)
}

fn comparison(sc: &Scanner) -> Option<usize> {
    Some(run(sc.rest(), |c| "<>=~!".contains(c)))
}

fn operator(sc: &Scanner) -> Option<usize> {
    Some(run(sc.rest(), |c| "+/@#%^&|-".contains(c)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::keyword::Keyword;
    use rstest::rstest;

    fn kinds(sql: &str) -> Vec<(TokenKind, String)> {
        tokenize(sql)
            .into_iter()
            .map(|t| (t.kind, t.text))
            .collect()
    }

    #[rstest]
    #[case(TokenKind::Assignment, " :=")]
    #[case(TokenKind::Command, " \\pgsql")]
    #[case(TokenKind::Comment, " --comment1\r\n")]
    #[case(TokenKind::Comment, " # comment1\n")]
    #[case(TokenKind::CommentHint, " --+8\r\n")]
    #[case(TokenKind::CommentMultiline, " /* comment1 \r\n comment2 */")]
    #[case(TokenKind::Comparison, " NOT IN")]
    #[case(TokenKind::Keyword, " FROM")]
    #[case(TokenKind::Keyword, " LEFT JOIN")]
    #[case(TokenKind::Keyword, " left outer join")]
    #[case(TokenKind::Keyword, " CROSS JOIN")]
    #[case(TokenKind::Keyword, " END IF")]
    #[case(TokenKind::Keyword, " END FOR")]
    #[case(TokenKind::Keyword, " NOT NULL")]
    #[case(TokenKind::Keyword, " NULLS LAST")]
    #[case(TokenKind::Keyword, " UNION ALL")]
    #[case(TokenKind::Keyword, " GROUP BY")]
    #[case(TokenKind::Keyword, " ORDER BY")]
    #[case(TokenKind::Keyword, " HANDLER FOR")]
    #[case(TokenKind::Keyword, " LATERAL VIEW")]
    #[case(TokenKind::Keyword, " INLINE")]
    #[case(TokenKind::KeywordCte, " WITH")]
    #[case(TokenKind::KeywordDdl, " CREATE OR REPLACE")]
    #[case(TokenKind::KeywordDdl, " create")]
    #[case(TokenKind::KeywordDml, " insert")]
    #[case(TokenKind::KeywordOrder, " DESC")]
    #[case(TokenKind::KeywordTzCast, " AT TIME ZONE 'Central European Standard Time'")]
    #[case(TokenKind::Literal, " $$\r\nDECLARE\r\nEND;\r\n$$")]
    #[case(TokenKind::Literal, " $body$ SELECT 1; $body$")]
    #[case(TokenKind::Name, " `pg_constraint`")]
    #[case(TokenKind::Name, " ´pg_constraint´")]
    #[case(TokenKind::Name, " @X1")]
    #[case(TokenKind::Name, " ##temp")]
    #[case(TokenKind::Name, " [Order Details]")]
    #[case(TokenKind::Name, " users")]
    #[case(TokenKind::NameBuiltin, " DOUBLE PRECISION")]
    #[case(TokenKind::NameBuiltin, " varchar")]
    #[case(TokenKind::NamePlaceholder, " ?")]
    #[case(TokenKind::NamePlaceholder, " $1")]
    #[case(TokenKind::NamePlaceholder, " :name")]
    #[case(TokenKind::NamePlaceholder, " %(name)s")]
    #[case(TokenKind::Newline, " \r\n")]
    #[case(TokenKind::NumberFloat, " 12.07E-2")]
    #[case(TokenKind::NumberFloat, " 9.21")]
    #[case(TokenKind::NumberFloat, " .5")]
    #[case(TokenKind::NumberInteger, " 75")]
    #[case(TokenKind::NumberInteger, " -3")]
    #[case(TokenKind::NumberHexadecimal, " 0x23")]
    #[case(TokenKind::Operator, " ||")]
    #[case(TokenKind::OperatorComparison, " NOT LIKE")]
    #[case(TokenKind::OperatorComparison, " ilike")]
    #[case(TokenKind::OperatorComparison, " =")]
    #[case(TokenKind::OperatorComparison, " !=")]
    #[case(TokenKind::Punctuation, " ;")]
    #[case(TokenKind::Punctuation, " ::")]
    #[case(TokenKind::StringSingle, " 'Sequel'")]
    #[case(TokenKind::StringSingle, " 'it''s'")]
    #[case(TokenKind::StringSingle, " 'it\\'s'")]
    #[case(TokenKind::StringSymbol, " \"Sequel\"")]
    #[case(TokenKind::Wildcard, " *")]
    fn second_token_kind(#[case] kind: TokenKind, #[case] sql: &str) {
        let toks = tokenize(sql);
        assert_eq!(toks.len(), 2, "{toks:#?}");
        assert_eq!(toks[0].kind, TokenKind::Whitespace);
        assert_eq!(toks[1].kind, kind);
        assert_eq!(toks[1].text, &sql[1..]);
        assert_eq!(toks[1].start, 1);
    }

    #[rstest]
    #[case("public.", TokenKind::Name, "public")]
    #[case("COUNT(", TokenKind::Name, "COUNT")]
    #[case("schema .", TokenKind::Name, "schema")]
    #[case("x -- trailing", TokenKind::Name, "x")]
    #[case("/* comment1 comment2 */   ", TokenKind::CommentMultiline, "/* comment1 comment2 */")]
    fn first_token_kind(#[case] sql: &str, #[case] kind: TokenKind, #[case] text: &str) {
        let toks = tokenize(sql);
        assert_eq!((toks[0].kind, toks[0].text.as_str()), (kind, text));
    }

    #[test]
    fn name_after_dot_is_never_a_keyword() {
        assert_eq!(
            kinds(".select"),
            vec![
                (TokenKind::Punctuation, ".".into()),
                (TokenKind::Name, "select".into()),
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn semicolon_inside_string_is_not_punctuation() {
        let toks = tokenize("bar = 'foo;bar'");
        assert!(!toks.iter().any(|t| t.is_semicolon()));
        assert_eq!(toks.last().map(|t| t.kind), Some(TokenKind::StringSingle));
    }

    #[rstest]
    #[case("'unterminated; string", "'")]
    #[case("/* never closed", "/")]
    #[case("$$ no end", "$")]
    #[case("`open", "`")]
    fn unterminated_constructs_degrade(#[case] sql: &str, #[case] first: &str) {
        let toks = tokenize(sql);
        assert_eq!(toks[0].text, first);
        assert_ne!(toks[0].kind, TokenKind::StringSingle);
        assert_eq!(toks.iter().map(|t| t.text.as_str()).collect::<String>(), sql);
    }

    #[rstest]
    #[case::doubled_quote_after_miss("'a''", vec![
        (TokenKind::Punctuation, "'"),
        (TokenKind::Name, "a"),
        (TokenKind::StringSingle, "''"),
    ])]
    #[case::comment_before_miss("/**/ /*", vec![
        (TokenKind::CommentMultiline, "/**/"),
        (TokenKind::Whitespace, " "),
        (TokenKind::Operator, "/"),
        (TokenKind::Wildcard, "*"),
    ])]
    fn unterminated_opener_leaves_later_ones_alone(
        #[case] sql: &str,
        #[case] expected: Vec<(TokenKind, &str)>,
    ) {
        let expected = expected
            .into_iter()
            .map(|(kind, text)| (kind, text.to_string()))
            .collect::<Vec<_>>();
        assert_eq!(kinds(sql), expected);
    }

    #[rstest]
    #[case("'\\")]
    #[case("\"\\")]
    #[case("/*x")]
    fn unterminated_runs_lex_in_linear_time(#[case] unit: &str) {
        let sql = unit.repeat(100_000);

        let started = std::time::Instant::now();
        let toks = tokenize(&sql);
        let elapsed = started.elapsed();

        assert_eq!(toks.iter().map(|t| t.text.as_str()).collect::<String>(), sql);
        assert!(elapsed.as_secs() < 5, "took {elapsed:?}");
    }

    #[test]
    fn number_glued_to_letters_is_a_name() {
        assert_eq!(kinds("123abc"), vec![(TokenKind::Name, "123abc".into())]);
    }

    #[test]
    fn phrases_keep_inner_whitespace() {
        let toks = tokenize("END\r\n  IF;");
        assert_eq!(toks[0].text, "END\r\n  IF");
        assert!(toks[0].is(Keyword::EndIf));
        assert_eq!(toks[0].range.end.line, 2);
    }

    #[test]
    fn ranges_are_contiguous() {
        let sql = "select *\r\nfrom foo /* a\nb */ where x = 'y';\n";
        let toks = tokenize(sql);
        let mut caret = Position::START;
        for t in &toks {
            assert_eq!(t.range.start, caret, "{t:?}");
            caret = caret.advance(&t.text);
        }
        let comment = toks.iter().find(|t| t.kind == TokenKind::CommentMultiline);
        assert_eq!(
            comment.map(|t| t.range),
            Some(Range::new(Position::new(2, 10), Position::new(3, 5)))
        );
    }

    #[test]
    fn basic_select_sequence() {
        let toks = tokenize("SELECT a, b FROM t");
        assert_eq!(toks[0].kind, TokenKind::KeywordDml);
        assert!(toks.iter().any(|t| t.is(Keyword::From)));
        assert!(
            toks.iter()
                .any(|t| t.kind == TokenKind::Name && t.text == "b")
        );
    }
}
