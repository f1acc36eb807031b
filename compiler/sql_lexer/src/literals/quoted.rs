//! Quoted strings and backtick identifiers.

use sql_lexer_core::{Rune, SourceReader};

use super::Cooked;
use crate::config::SqlMode;
use crate::error::ScanErrorKind;
use crate::state::ScanState;
use crate::{Token, TokenKind};

/// `'...'` or `"..."`, with the delimiter under the cursor.
///
/// A doubled delimiter is one literal quote. Backslash escapes are decoded
/// unless `NO_BACKSLASH_ESCAPES` is set.
pub(crate) fn string<'a>(r: &mut SourceReader<'a>, st: &mut ScanState) -> Token<'a> {
    let pos = r.pos();
    let quote = r.next();
    let backslash_escapes = !st.has_mode(SqlMode::NO_BACKSLASH_ESCAPES);
    let mut cooked = Cooked::new(r.as_bytes(), r.offset());

    loop {
        if r.eof() {
            st.error(ScanErrorKind::UnterminatedString, pos);
            return Token::new(TokenKind::INVALID, pos, r.data(&pos));
        }
        let at = r.offset();
        let ch = r.next();
        if ch == quote {
            if r.curr() != quote {
                return Token::new(TokenKind::STRING_LITERAL, pos, cooked.finish(at));
            }
            // Doubled quote: keep the first, drop the second.
            r.move_next();
            cooked.flush(at + 1);
            cooked.resume(at + 2);
        } else if ch == '\\' && backslash_escapes && !r.eof() {
            let escaped = r.next();
            let out = cooked.flush(at);
            match escaped.as_byte() {
                Some(b'n') => out.push(b'\n'),
                Some(b't') => out.push(b'\t'),
                Some(b'r') => out.push(b'\r'),
                Some(b'b') => out.push(0x08),
                Some(b'0') => out.push(0),
                Some(b'Z') => out.push(0x1A),
                // Kept escaped for LIKE patterns.
                Some(b'%' | b'_') => {
                    out.push(b'\\');
                    out.extend_from_slice(r.last_rune_bytes());
                }
                _ => out.extend_from_slice(r.last_rune_bytes()),
            }
            cooked.resume(r.offset());
        }
    }
}

/// `` `...` ``, with the backtick under the cursor. A doubled backtick is
/// one literal backtick.
pub(crate) fn quoted_ident<'a>(r: &mut SourceReader<'a>, st: &mut ScanState) -> Token<'a> {
    let pos = r.pos();
    r.move_next();
    let mut cooked = Cooked::new(r.as_bytes(), r.offset());

    loop {
        if r.eof() {
            st.error(ScanErrorKind::UnterminatedQuotedIdentifier, pos);
            return Token::new(TokenKind::INVALID, pos, r.data(&pos));
        }
        let at = r.offset();
        if r.next() == '`' {
            if r.curr() != '`' {
                return Token::new(TokenKind::QUOTED_IDENTIFIER, pos, cooked.finish(at));
            }
            r.move_next();
            cooked.flush(at + 1);
            cooked.resume(at + 2);
        }
    }
}

/// Whether `ch` opens a quoted string.
#[inline]
pub(crate) fn is_string_quote(ch: Rune) -> bool {
    ch == '\'' || ch == '"'
}
