//! `@user_var` and `@@system_var`.

use std::borrow::Cow;

use sql_lexer_core::{Position, SourceReader};

use super::is_user_var_char;
use super::quoted::{is_string_quote, quoted_ident, string};
use crate::state::ScanState;
use crate::{Token, TokenKind};

/// Scope prefixes accepted after `@@`.
const SYSTEM_SCOPES: [&[u8]; 3] = [b"global.", b"session.", b"local."];

/// What follows an `@`.
enum Name<'a> {
    /// Quoted string or backtick identifier.
    Quoted(Token<'a>),
    Bare(&'a [u8]),
    /// Nothing nameable. The rune is left unconsumed.
    Other(char),
    Invalid,
}

fn name<'a>(r: &mut SourceReader<'a>, st: &mut ScanState) -> Name<'a> {
    let ch = r.curr();
    let tok = if is_string_quote(ch) {
        string(r, st)
    } else if ch == '`' {
        quoted_ident(r, st)
    } else if is_user_var_char(ch) {
        let start = r.pos();
        r.inc_as_long_as(is_user_var_char);
        return Name::Bare(r.data(&start));
    } else {
        return match ch.to_char() {
            Some(c) if !ch.is_invalid() => Name::Other(c),
            _ => Name::Invalid,
        };
    };
    if tok.kind.is_invalid() {
        Name::Invalid
    } else {
        Name::Quoted(tok)
    }
}

/// `@`, with the sign under the cursor.
pub(crate) fn at<'a>(r: &mut SourceReader<'a>, st: &mut ScanState) -> Token<'a> {
    let pos = r.pos();
    r.move_next();
    match name(r, st) {
        Name::Quoted(tok) => Token::new(TokenKind::SINGLE_AT_IDENTIFIER, pos, tok.lit),
        Name::Bare(lit) => Token::new(TokenKind::SINGLE_AT_IDENTIFIER, pos, lit),
        Name::Other('@') => system_var(r, st, pos),
        // Bare `@` followed by a non-name: an empty user variable.
        Name::Other(_) => Token::new(TokenKind::SINGLE_AT_IDENTIFIER, pos, &b""[..]),
        Name::Invalid => Token::new(TokenKind::INVALID, pos, r.data(&pos)),
    }
}

/// `@@[scope.]name`, with the second `@` under the cursor.
///
/// The literal keeps the `@@` and the scope. A quoted name is unquoted,
/// so the literal is rebuilt.
fn system_var<'a>(
    r: &mut SourceReader<'a>,
    st: &mut ScanState,
    pos: Position,
) -> Token<'a> {
    r.move_next();
    let scope_start = r.pos();
    if let Some(scope) = SYSTEM_SCOPES
        .iter()
        .find(|scope| r.starts_with_ignore_ascii_case(scope))
    {
        r.advance_bytes(scope.len());
    }
    let scope = r.data(&scope_start);

    match name(r, st) {
        Name::Bare(_) => Token::new(TokenKind::DOUBLE_AT_IDENTIFIER, pos, r.data(&pos)),
        Name::Quoted(tok) => {
            let mut lit = Vec::with_capacity(2 + scope.len() + tok.lit.len());
            lit.extend_from_slice(b"@@");
            lit.extend_from_slice(scope);
            lit.extend_from_slice(&tok.lit);
            Token::new(TokenKind::DOUBLE_AT_IDENTIFIER, pos, Cow::Owned(lit))
        }
        Name::Other(_) | Name::Invalid => Token::new(TokenKind::INVALID, pos, r.data(&pos)),
    }
}
