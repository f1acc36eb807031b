//! Scan diagnostics.
//!
//! Scanning never fails: a malformed token comes back as
//! [`TokenKind::INVALID`](crate::TokenKind::INVALID) and the reason is
//! recorded here, anchored at the token's opening position.

use sql_lexer_core::Position;

/// A problem that produced an `INVALID` token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at {pos}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub pos: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ScanErrorKind {
    /// Missing closing quote for `'...'` or `"..."`.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// Missing closing backtick.
    #[error("unterminated quoted identifier")]
    UnterminatedQuotedIdentifier,
    /// `/*` without `*/`.
    #[error("unterminated comment")]
    UnterminatedComment,
    /// Non-hex character inside `x'...'`, or no closing quote.
    #[error("invalid hexadecimal literal")]
    InvalidHexLiteral,
    /// Character other than `0`/`1` inside `b'...'`, or no closing quote.
    #[error("invalid bit literal")]
    InvalidBitLiteral,
    /// A byte that starts no token, e.g. a control character.
    #[error("unexpected byte 0x{0:02X}")]
    UnexpectedByte(u8),
    /// Malformed UTF-8 outside any literal.
    #[error("invalid UTF-8 sequence")]
    InvalidUtf8,
}

/// A construct that was accepted but not honoured.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at {pos}")]
pub struct ScanWarning {
    pub kind: ScanWarningKind,
    pub pos: Position,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ScanWarningKind {
    /// `/*+ ... */` after `FOR UPDATE`: the server ignores it, so do we.
    #[error("optimizer hint after FOR UPDATE is ignored")]
    IgnoredOptimizerHint,
}
