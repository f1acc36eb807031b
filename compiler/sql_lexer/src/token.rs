//! Token kinds and tokens.
//!
//! [`TokenKind`] is an integer code shared with the downstream parser:
//!
//! - `0` is end of input,
//! - `1..=255` are single-byte operators, coded as the byte itself,
//! - [`TokenKind::INVALID`] (`0xFFFD`) marks a token that could not be scanned,
//! - named kinds (literals, multi-byte operators, keywords) start at `57346`.

use std::borrow::Cow;
use std::fmt;

use sql_lexer_core::Position;

/// Integer code of a token.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct TokenKind(u32);

impl TokenKind {
    /// End of input.
    pub const EOF: TokenKind = TokenKind(0);
    /// Malformed token. Shares its value with the invalid rune.
    pub const INVALID: TokenKind = TokenKind(0xFFFD);

    #[inline]
    pub const fn new(value: u32) -> Self {
        TokenKind(value)
    }

    /// Kind of a single-byte operator.
    #[inline]
    #[allow(clippy::cast_lossless, reason = "u32::from is not const")]
    pub const fn from_byte(b: u8) -> Self {
        TokenKind(b as u32)
    }

    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// The operator byte for single-byte kinds.
    #[inline]
    pub fn as_byte(self) -> Option<u8> {
        match u8::try_from(self.0) {
            Ok(0) | Err(_) => None,
            Ok(b) => Some(b),
        }
    }

    #[inline]
    pub fn is_eof(self) -> bool {
        self == Self::EOF
    }

    #[inline]
    pub fn is_invalid(self) -> bool {
        self == Self::INVALID
    }
}

/// Generates the named kinds with their display names.
macro_rules! define_token_kinds {
    ($( $(#[$doc:meta])* $name:ident = $value:literal => $text:literal, )*) => {
        impl TokenKind {
            $( $(#[$doc])* pub const $name: TokenKind = TokenKind($value); )*

            /// Display name of a named kind, `None` for byte kinds.
            pub fn name(self) -> Option<&'static str> {
                match self.0 {
                    0 => Some("EOF"),
                    0xFFFD => Some("INVALID"),
                    $( $value => Some($text), )*
                    _ => None,
                }
            }
        }
    };
}

define_token_kinds! {
    // === Literals (57346..) ===
    IDENTIFIER = 57346 => "identifier",
    /// Backtick-quoted identifier. Reported as [`TokenKind::IDENTIFIER`]
    /// after keyword resolution.
    QUOTED_IDENTIFIER = 57347 => "quoted identifier",
    STRING_LITERAL = 57348 => "string literal",
    INT_LITERAL = 57349 => "integer literal",
    /// Fraction without exponent, e.g. `1.5`.
    DECIMAL_LITERAL = 57350 => "decimal literal",
    /// Number with an exponent, e.g. `1e5`.
    FLOAT_LITERAL = 57351 => "float literal",
    HEX_LITERAL = 57352 => "hex literal",
    BIT_LITERAL = 57353 => "bit literal",
    /// Charset introducer such as `_utf8mb4` or the `N` of `N'...'`.
    UNDERSCORE_CHARSET = 57354 => "charset introducer",
    /// `/*+ ... */` after a hintable keyword.
    HINT_COMMENT = 57355 => "optimizer hint",
    /// `@name`: user variable.
    SINGLE_AT_IDENTIFIER = 57356 => "user variable",
    /// `@@name`: system variable.
    DOUBLE_AT_IDENTIFIER = 57357 => "system variable",

    // === Multi-byte operators ===
    JSON_EXTRACT = 57358 => "->",
    JSON_UNQUOTE_EXTRACT = 57359 => "->>",
    AND_AND = 57360 => "&&",
    ASSIGN = 57361 => ":=",
    NULL_SAFE_EQ = 57362 => "<=>",
    GE = 57363 => ">=",
    LE = 57364 => "<=",
    NEQ = 57365 => "!=",
    NEQ_SYNONYM = 57366 => "<>",
    LSH = 57367 => "<<",
    RSH = 57368 => ">>",
    /// `\N`, shorthand for NULL.
    NULL_ESCAPE = 57369 => "\\N",
    PIPES = 57370 => "||",
    /// `||` as logical OR (without `PIPES_AS_CONCAT`).
    PIPES_AS_OR = 57371 => "|| (or)",
    /// `NOT` under `HIGH_NOT_PRECEDENCE`.
    NOT2 = 57372 => "NOT (high precedence)",

    // === Keywords (57400..) ===
    SELECT = 57400 => "SELECT",
    INSERT = 57401 => "INSERT",
    UPDATE = 57402 => "UPDATE",
    DELETE = 57403 => "DELETE",
    REPLACE = 57404 => "REPLACE",
    FOR = 57405 => "FOR",
    BINDING = 57406 => "BINDING",
    CREATE = 57407 => "CREATE",
    NOT = 57408 => "NOT",
    AS = 57409 => "AS",
    FROM = 57410 => "FROM",
    WHERE = 57411 => "WHERE",
    AND = 57412 => "AND",
    OR = 57413 => "OR",
    XOR = 57414 => "XOR",
    IS = 57415 => "IS",
    NULL = 57416 => "NULL",
    TRUE = 57417 => "TRUE",
    FALSE = 57418 => "FALSE",
    IN = 57419 => "IN",
    LIKE = 57420 => "LIKE",
    BETWEEN = 57421 => "BETWEEN",
    ORDER = 57422 => "ORDER",
    GROUP = 57423 => "GROUP",
    BY = 57424 => "BY",
    HAVING = 57425 => "HAVING",
    LIMIT = 57426 => "LIMIT",
    JOIN = 57427 => "JOIN",
    LEFT = 57428 => "LEFT",
    RIGHT = 57429 => "RIGHT",
    INNER = 57430 => "INNER",
    OUTER = 57431 => "OUTER",
    CROSS = 57432 => "CROSS",
    ON = 57433 => "ON",
    USING = 57434 => "USING",
    UNION = 57435 => "UNION",
    ALL = 57436 => "ALL",
    DISTINCT = 57437 => "DISTINCT",
    INTO = 57438 => "INTO",
    VALUES = 57439 => "VALUES",
    SET = 57440 => "SET",
    TABLE = 57441 => "TABLE",
    DROP = 57442 => "DROP",
    ALTER = 57443 => "ALTER",
    INDEX = 57444 => "INDEX",
    PRIMARY = 57445 => "PRIMARY",
    KEY = 57446 => "KEY",
    DEFAULT = 57447 => "DEFAULT",
    CASE = 57448 => "CASE",
    WHEN = 57449 => "WHEN",
    THEN = 57450 => "THEN",
    ELSE = 57451 => "ELSE",
    WITH = 57452 => "WITH",
    EXISTS = 57453 => "EXISTS",
    DIV = 57454 => "DIV",
    MOD = 57455 => "MOD",
    ASC = 57456 => "ASC",
    DESC = 57457 => "DESC",
    LOCK = 57458 => "LOCK",
    SHARE = 57459 => "SHARE",
    IF = 57460 => "IF",
    INTERVAL = 57461 => "INTERVAL",
    COLLATE = 57462 => "COLLATE",
    BINARY = 57463 => "BINARY",
    UNIQUE = 57464 => "UNIQUE",
    REGEXP = 57465 => "REGEXP",
    RLIKE = 57466 => "RLIKE",
    ESCAPE = 57467 => "ESCAPE",
    EXPLAIN = 57468 => "EXPLAIN",
    SHOW = 57469 => "SHOW",
    USE = 57470 => "USE",

    // === Window function keywords (57500..) ===
    CUME_DIST = 57500 => "CUME_DIST",
    DENSE_RANK = 57501 => "DENSE_RANK",
    FIRST_VALUE = 57502 => "FIRST_VALUE",
    GROUPS = 57503 => "GROUPS",
    LAG = 57504 => "LAG",
    LAST_VALUE = 57505 => "LAST_VALUE",
    LEAD = 57506 => "LEAD",
    NTH_VALUE = 57507 => "NTH_VALUE",
    NTILE = 57508 => "NTILE",
    OVER = 57509 => "OVER",
    PERCENT_RANK = 57510 => "PERCENT_RANK",
    RANK = 57511 => "RANK",
    ROW_NUMBER = 57512 => "ROW_NUMBER",
    WINDOW = 57513 => "WINDOW",

    // === Built-in function keywords (57550..) ===
    ADDDATE = 57550 => "ADDDATE",
    BIT_AND = 57551 => "BIT_AND",
    BIT_OR = 57552 => "BIT_OR",
    BIT_XOR = 57553 => "BIT_XOR",
    CAST = 57554 => "CAST",
    COUNT = 57555 => "COUNT",
    CURDATE = 57556 => "CURDATE",
    CURTIME = 57557 => "CURTIME",
    DATE_ADD = 57558 => "DATE_ADD",
    DATE_SUB = 57559 => "DATE_SUB",
    EXTRACT = 57560 => "EXTRACT",
    GROUP_CONCAT = 57561 => "GROUP_CONCAT",
    MAX = 57562 => "MAX",
    MID = 57563 => "MID",
    MIN = 57564 => "MIN",
    NOW = 57565 => "NOW",
    POSITION = 57566 => "POSITION",
    SESSION_USER = 57567 => "SESSION_USER",
    STD = 57568 => "STD",
    STDDEV = 57569 => "STDDEV",
    STDDEV_POP = 57570 => "STDDEV_POP",
    STDDEV_SAMP = 57571 => "STDDEV_SAMP",
    SUBDATE = 57572 => "SUBDATE",
    SUBSTR = 57573 => "SUBSTR",
    SUBSTRING = 57574 => "SUBSTRING",
    SUM = 57575 => "SUM",
    SYSDATE = 57576 => "SYSDATE",
    SYSTEM_USER = 57577 => "SYSTEM_USER",
    TRIM = 57578 => "TRIM",
    VAR_POP = 57579 => "VAR_POP",
    VAR_SAMP = 57580 => "VAR_SAMP",
    VARIANCE = 57581 => "VARIANCE",
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name(), self.as_byte()) {
            (Some(name), _) => write!(f, "TokenKind({name})"),
            (None, Some(b)) => write!(f, "TokenKind({:?})", char::from(b)),
            (None, None) => write!(f, "TokenKind({})", self.0),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name(), self.as_byte()) {
            (Some(name), _) => f.write_str(name),
            (None, Some(b)) => write!(f, "'{}'", char::from(b)),
            (None, None) => write!(f, "#{}", self.0),
        }
    }
}

/// A scanned token.
///
/// `lit` borrows from the input unless escape processing or literal
/// reconstruction changed its bytes. It is raw bytes rather than `str`
/// because malformed input passes through untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub pos: Position,
    pub lit: Cow<'a, [u8]>,
}

impl<'a> Token<'a> {
    #[inline]
    pub fn new(kind: TokenKind, pos: Position, lit: impl Into<Cow<'a, [u8]>>) -> Self {
        Token {
            kind,
            pos,
            lit: lit.into(),
        }
    }

    /// End-of-input token at `pos`.
    #[inline]
    pub fn eof(pos: Position) -> Self {
        Token::new(TokenKind::EOF, pos, Cow::Borrowed(&[][..]))
    }

    /// Literal as text, replacing malformed bytes with U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.lit)
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }

    /// Detach from the input buffer.
    pub fn into_owned(self) -> Token<'static> {
        Token {
            kind: self.kind,
            pos: self.pos,
            lit: Cow::Owned(self.lit.into_owned()),
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
