//! Comments, optimizer hints and the operators that share their starters.
//!
//! `/*! ... */` and `/*T![features] ... */` are not comments at all: their
//! content is scanned as code. Opening one sets `in_bang_comment`, and the
//! `*` routine swallows the matching `*/` later.

use sql_lexer_core::SourceReader;

use super::numeric::scan_version_digits;
use super::{is_ident_char, Step};
use crate::error::{ScanErrorKind, ScanWarningKind};
use crate::keywords::{is_hintable, is_supported_feature};
use crate::state::ScanState;
use crate::{Token, TokenKind};

/// `/`: division, block comment, vendor code or optimizer hint.
pub(crate) fn slash<'a>(r: &mut SourceReader<'a>, st: &mut ScanState) -> Step<'a> {
    let pos = r.pos();
    r.move_next();
    if r.curr() != '*' {
        return Step::Emit(Token::new(TokenKind::from_byte(b'/'), pos, r.data(&pos)));
    }
    r.move_next();

    let mut is_hint = false;
    let mut after_star = false;
    match r.next().as_byte() {
        Some(b'!') => {
            scan_version_digits(r, 5, 5);
            st.in_bang_comment = true;
            return Step::Skip;
        }
        Some(b'T') if r.curr() == '!' => {
            r.move_next();
            let supported = match feature_ids(r) {
                Some(ids) => ids.iter().all(|id| is_supported_feature(id)),
                None => true,
            };
            if supported {
                st.in_bang_comment = true;
                return Step::Skip;
            }
        }
        Some(b'+') if is_hintable(st.last_keyword(0)) => {
            if st.last_keyword(1) != TokenKind::FOR {
                is_hint = true;
            } else if st.last_keyword(2) == TokenKind::BINDING {
                // CREATE BINDING FOR UPDATE ... USING ...
                is_hint = true;
            } else {
                st.warn(ScanWarningKind::IgnoredOptimizerHint, pos);
            }
        }
        // '/**': a following '/' closes the comment.
        Some(b'*') => after_star = true,
        _ => {}
    }

    loop {
        if !after_star && r.inc_as_long_as(|ch| ch != '*') != '*' {
            st.error(ScanErrorKind::UnterminatedComment, pos);
            return Step::Emit(Token::new(TokenKind::INVALID, pos, r.data(&pos)));
        }
        let ch = r.next();
        if ch == '/' && after_star {
            break;
        }
        after_star = ch == '*';
        if after_star && r.curr() == '/' {
            r.move_next();
            break;
        }
    }

    if is_hint {
        st.last_hint_pos = Some(pos);
        return Step::Emit(Token::new(TokenKind::HINT_COMMENT, pos, r.data(&pos)));
    }
    Step::Skip
}

/// `[id1,id2,...]` after `/*T!`, as slices of the source.
///
/// `None` (with the cursor restored) when the bracket list is absent or
/// malformed.
fn feature_ids<'a>(r: &mut SourceReader<'a>) -> Option<Vec<&'a [u8]>> {
    let start = r.offset();
    if r.curr() != '[' {
        return None;
    }
    r.move_next();
    let mut ids = Vec::new();
    loop {
        let id_start = r.pos();
        r.inc_as_long_as(is_ident_char);
        let id = r.data(&id_start);
        let sep = r.next();
        if id.is_empty() || (sep != ',' && sep != ']') {
            r.seek(start);
            return None;
        }
        ids.push(id);
        if sep == ']' {
            return Some(ids);
        }
    }
}

/// `*`: multiplication, or the `*/` closing a `/*! ... */` block.
pub(crate) fn star<'a>(r: &mut SourceReader<'a>, st: &mut ScanState) -> Step<'a> {
    let pos = r.pos();
    r.move_next();
    if st.in_bang_comment && r.curr() == '/' {
        r.move_next();
        st.in_bang_comment = false;
        return Step::Skip;
    }
    st.identifier_dot = false;
    Step::Emit(Token::new(TokenKind::from_byte(b'*'), pos, r.data(&pos)))
}

/// `#`: comment to end of line.
pub(crate) fn sharp<'a>(r: &mut SourceReader<'a>) -> Step<'a> {
    r.inc_as_long_as(|ch| ch != '\n');
    Step::Skip
}

/// `-`: minus, `-- ` comment, `->` or `->>`.
///
/// `--` only opens a comment when followed by whitespace or the end of
/// input, so `1--1` stays arithmetic.
pub(crate) fn dash<'a>(r: &mut SourceReader<'a>) -> Step<'a> {
    let pos = r.pos();
    match (r.peek_byte(1), r.peek_byte(2)) {
        (Some(b'-'), None) => {
            r.advance_bytes(2);
            return Step::Skip;
        }
        (Some(b'-'), Some(b)) if b.is_ascii_whitespace() || b == 0x0B => {
            r.inc_as_long_as(|ch| ch != '\n');
            return Step::Skip;
        }
        (Some(b'>'), Some(b'>')) => {
            r.advance_bytes(3);
            return Step::Emit(Token::new(TokenKind::JSON_UNQUOTE_EXTRACT, pos, r.data(&pos)));
        }
        (Some(b'>'), _) => {
            r.advance_bytes(2);
            return Step::Emit(Token::new(TokenKind::JSON_EXTRACT, pos, r.data(&pos)));
        }
        _ => {}
    }
    r.move_next();
    Step::Emit(Token::new(TokenKind::from_byte(b'-'), pos, r.data(&pos)))
}
