//! Numbers, `x'..'`/`b'..'` literals, `N'..'` introducers, version digits.
//!
//! SQL lets identifiers start with a digit, so most numeric forms can turn
//! into an identifier once the scan sees what follows: `0x` with no digits,
//! `123abc`, `1e` with no exponent. The rewrite always covers the whole span
//! from the first digit.

use sql_lexer_core::{Position, Rune, SourceReader};

use super::{identifier, is_ident_char};
use crate::error::ScanErrorKind;
use crate::state::ScanState;
use crate::{Token, TokenKind};

#[inline]
fn is_oct_digit(ch: Rune) -> bool {
    matches!(ch.as_byte(), Some(b'0'..=b'7'))
}

#[inline]
fn is_bit_digit(ch: Rune) -> bool {
    ch == '0' || ch == '1'
}

/// Identifier over everything from `pos` through the following identifier
/// characters.
fn ident_from<'a>(r: &mut SourceReader<'a>, pos: Position) -> Token<'a> {
    r.inc_as_long_as(is_ident_char);
    Token::new(TokenKind::IDENTIFIER, pos, r.data(&pos))
}

/// Digit-led token, with the first digit under the cursor.
pub(crate) fn number<'a>(r: &mut SourceReader<'a>, st: &ScanState) -> Token<'a> {
    if st.identifier_dot {
        return identifier(r);
    }
    let pos = r.pos();
    let mut kind = TokenKind::INT_LITERAL;

    if r.next() == '0' {
        let ch1 = r.curr();
        if is_oct_digit(ch1) {
            r.move_next();
            r.inc_as_long_as(is_oct_digit);
        } else if ch1 == 'x' || ch1 == 'X' {
            r.move_next();
            let digits_at = r.offset();
            r.inc_as_long_as(Rune::is_xdigit);
            // 0x, 0x7fz3
            if r.offset() == digits_at || r.curr().is_digit() {
                return ident_from(r, pos);
            }
            kind = TokenKind::HEX_LITERAL;
        } else if ch1 == 'b' {
            r.move_next();
            let digits_at = r.offset();
            r.inc_as_long_as(is_bit_digit);
            // 0b, 0b123
            if r.offset() == digits_at || r.curr().is_digit() {
                return ident_from(r, pos);
            }
            kind = TokenKind::BIT_LITERAL;
        } else if ch1 == '.' {
            return float(r, pos);
        } else if ch1 == 'B' {
            return ident_from(r, pos);
        }
    }

    r.inc_as_long_as(Rune::is_digit);
    let ch = r.curr();
    if kind == TokenKind::INT_LITERAL && (ch == '.' || ch == 'e' || ch == 'E') {
        return float(r, pos);
    }
    if is_ident_char(ch) {
        return ident_from(r, pos);
    }
    Token::new(kind, pos, r.data(&pos))
}

/// `D1 [. D2] [e [+-] D3]` starting at `beg`, rescanned from there.
///
/// An exponent marker without digits makes the whole span an identifier
/// (`9est`).
fn float<'a>(r: &mut SourceReader<'a>, beg: Position) -> Token<'a> {
    r.seek(beg.offset);
    r.inc_as_long_as(Rune::is_digit);
    if r.curr() == '.' {
        r.move_next();
        r.inc_as_long_as(Rune::is_digit);
    }
    let ch = r.curr();
    if ch != 'e' && ch != 'E' {
        return Token::new(TokenKind::DECIMAL_LITERAL, beg, r.data(&beg));
    }
    r.move_next();
    let sign = r.curr();
    if sign == '+' || sign == '-' {
        r.move_next();
    }
    if r.curr().is_digit() {
        r.inc_as_long_as(Rune::is_digit);
        return Token::new(TokenKind::FLOAT_LITERAL, beg, r.data(&beg));
    }
    r.seek(beg.offset);
    ident_from(r, beg)
}

/// `.`, with the dot under the cursor.
///
/// After `ident.` the dot is a qualifier. `.5` and `.5e3` are numbers;
/// `.5e` cannot be, and comes back `INVALID` over the dot and the
/// identifier characters after it.
pub(crate) fn dot<'a>(r: &mut SourceReader<'a>, st: &ScanState) -> Token<'a> {
    let pos = r.pos();
    r.move_next();
    if st.identifier_dot || !r.curr().is_digit() {
        return Token::new(TokenKind::from_byte(b'.'), pos, r.data(&pos));
    }
    let tok = float(r, pos);
    if tok.kind != TokenKind::IDENTIFIER {
        return tok;
    }
    r.seek(pos.offset);
    r.move_next();
    r.inc_as_long_as(is_ident_char);
    Token::new(TokenKind::INVALID, pos, r.data(&pos))
}

/// `x'..'` / `b'..'`: the letter is under the cursor. Without a quote
/// after the letter this is an ordinary identifier.
fn quoted_digits<'a>(
    r: &mut SourceReader<'a>,
    st: &mut ScanState,
    is_digit: fn(Rune) -> bool,
    kind: TokenKind,
    error: ScanErrorKind,
) -> Token<'a> {
    let pos = r.pos();
    r.move_next();
    if r.curr() != '\'' {
        r.seek(pos.offset);
        return identifier(r);
    }
    r.move_next();
    r.inc_as_long_as(is_digit);
    if r.curr() == '\'' {
        r.move_next();
        return Token::new(kind, pos, r.data(&pos));
    }
    st.error(error, pos);
    Token::new(TokenKind::INVALID, pos, r.data(&pos))
}

pub(crate) fn hex_prefix<'a>(r: &mut SourceReader<'a>, st: &mut ScanState) -> Token<'a> {
    quoted_digits(
        r,
        st,
        Rune::is_xdigit,
        TokenKind::HEX_LITERAL,
        ScanErrorKind::InvalidHexLiteral,
    )
}

pub(crate) fn bit_prefix<'a>(r: &mut SourceReader<'a>, st: &mut ScanState) -> Token<'a> {
    quoted_digits(
        r,
        st,
        is_bit_digit,
        TokenKind::BIT_LITERAL,
        ScanErrorKind::InvalidBitLiteral,
    )
}

/// `N'..'`: the national charset introducer. The quote is left for the
/// next scan, which produces the string.
pub(crate) fn national_prefix<'a>(r: &mut SourceReader<'a>) -> Token<'a> {
    let tok = identifier(r);
    if tok.lit.eq_ignore_ascii_case(b"n") && r.curr() == '\'' {
        return Token::new(TokenKind::UNDERSCORE_CHARSET, tok.pos, &b"utf8"[..]);
    }
    tok
}

/// Consume up to `max` digits. With fewer than `min` available, consume
/// nothing.
pub(crate) fn scan_version_digits(r: &mut SourceReader<'_>, min: usize, max: usize) {
    let start = r.offset();
    for i in 0..max {
        if r.curr().is_digit() {
            r.move_next();
        } else {
            if i < min {
                r.seek(start);
            }
            return;
        }
    }
}
