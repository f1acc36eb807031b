//! Literal scan routines.
//!
//! Each routine starts with the reader on the starter byte the dispatch
//! trie matched and returns a [`Step`]. Routines only touch the state they
//! are handed: the reader and the [`ScanState`].
//!
//! Trivia (comments, the bracketing of `/*! ... */`) yields [`Step::Skip`];
//! the scanner loops rather than the routine recursing.

mod comment;
mod numeric;
mod quoted;
mod variable;

use std::borrow::Cow;

use sql_lexer_core::{Rune, SourceReader};

use crate::dispatch::Handler;
use crate::state::ScanState;
use crate::{Token, TokenKind};

pub(crate) use numeric::scan_version_digits;

/// Result of one literal routine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step<'a> {
    Emit(Token<'a>),
    /// Trivia consumed; scan again.
    Skip,
}

/// Run the routine bound to `handler`.
pub(crate) fn run<'a>(
    handler: Handler,
    r: &mut SourceReader<'a>,
    st: &mut ScanState,
) -> Step<'a> {
    match handler {
        Handler::Slash => comment::slash(r, st),
        Handler::Star => comment::star(r, st),
        Handler::Sharp => comment::sharp(r),
        Handler::Dash => comment::dash(r),
        Handler::At => Step::Emit(variable::at(r, st)),
        Handler::Dot => Step::Emit(numeric::dot(r, st)),
        Handler::Number => Step::Emit(numeric::number(r, st)),
        Handler::HexPrefix => Step::Emit(numeric::hex_prefix(r, st)),
        Handler::BitPrefix => Step::Emit(numeric::bit_prefix(r, st)),
        Handler::NationalPrefix => Step::Emit(numeric::national_prefix(r)),
        Handler::String => Step::Emit(quoted::string(r, st)),
        Handler::QuotedIdent => Step::Emit(quoted::quoted_ident(r, st)),
        Handler::Identifier => Step::Emit(identifier(r)),
    }
}

// ─── Character classes ───────────────────────────────────────────────

/// Letter, digit, `_`, `$` or extended rune.
#[inline]
pub(crate) fn is_ident_char(ch: Rune) -> bool {
    ch.is_alnum() || ch == '_' || ch == '$' || ch.is_ident_extend()
}

/// Identifier characters plus `.`, for `@user.var` names.
#[inline]
pub(crate) fn is_user_var_char(ch: Rune) -> bool {
    is_ident_char(ch) || ch == '.'
}

// ─── Identifiers ─────────────────────────────────────────────────────

/// Plain identifier. The literal is the exact slice.
pub(crate) fn identifier<'a>(r: &mut SourceReader<'a>) -> Token<'a> {
    let pos = r.pos();
    r.inc_as_long_as(is_ident_char);
    Token::new(TokenKind::IDENTIFIER, pos, r.data(&pos))
}

// ─── Cooked literals ─────────────────────────────────────────────────

/// Literal text that stays borrowed until an escape forces a copy.
///
/// Runs of unescaped input between escapes are appended lazily, so a
/// literal with no escapes is a plain slice of the source.
struct Cooked<'a> {
    src: &'a [u8],
    /// Start of the pending unescaped run.
    start: usize,
    owned: Option<Vec<u8>>,
}

impl<'a> Cooked<'a> {
    fn new(src: &'a [u8], start: usize) -> Self {
        Cooked {
            src,
            start,
            owned: None,
        }
    }

    /// Append the pending run up to `end` and hand out the owned buffer.
    fn flush(&mut self, end: usize) -> &mut Vec<u8> {
        let run = &self.src[self.start..end];
        let owned = self.owned.get_or_insert_with(Vec::new);
        owned.extend_from_slice(run);
        owned
    }

    /// Start a new pending run at `at`.
    fn resume(&mut self, at: usize) {
        self.start = at;
    }

    fn finish(self, end: usize) -> Cow<'a, [u8]> {
        let run = &self.src[self.start..end];
        match self.owned {
            None => Cow::Borrowed(run),
            Some(mut owned) => {
                owned.extend_from_slice(run);
                Cow::Owned(owned)
            }
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
