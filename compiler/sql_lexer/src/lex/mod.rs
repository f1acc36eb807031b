//! Keyword resolution: the token stream a parser consumes.
//!
//! [`Scanner::scan`] deliberately leaves every word an identifier. Whether a
//! word is a keyword depends on where it stands (`t.select` is a column,
//! `count` is a function only before `(`) and on the dialect mode, so the
//! decision is made here with the scanner's context at hand.

use std::borrow::Cow;

use tracing::trace;

use crate::config::SqlMode;
use crate::dispatch::EntryClass;
use crate::keywords;
use crate::{Scanner, Token, TokenKind};

impl<'a> Scanner<'a> {
    /// Next token with keywords, charset introducers and mode-dependent
    /// operators resolved.
    pub fn lex(&mut self) -> Token<'a> {
        let mut tok = self.scan();
        match tok.kind {
            TokenKind::IDENTIFIER => {
                self.resolve_identifier(&mut tok);
                let keyword = if tok.kind == TokenKind::IDENTIFIER
                    || tok.kind == TokenKind::UNDERSCORE_CHARSET
                {
                    TokenKind::EOF
                } else {
                    tok.kind
                };
                self.state.set_last_keyword(keyword);
            }
            TokenKind::QUOTED_IDENTIFIER => tok.kind = TokenKind::IDENTIFIER,
            TokenKind::STRING_LITERAL
                if self.state.has_mode(SqlMode::ANSI_QUOTES) && self.opened_with(&tok, b'"') =>
            {
                tok.kind = TokenKind::IDENTIFIER;
            }
            TokenKind::PIPES if !self.state.has_mode(SqlMode::PIPES_AS_CONCAT) => {
                tok.kind = TokenKind::PIPES_AS_OR;
            }
            _ => {}
        }
        tok
    }

    fn resolve_identifier(&self, tok: &mut Token<'a>) {
        if let Some(charset) = tok.lit.strip_prefix(b"_").and_then(keywords::charset) {
            tok.kind = TokenKind::UNDERSCORE_CHARSET;
            tok.lit = Cow::Borrowed(charset.as_bytes());
            return;
        }

        // Either side of a qualifier dot is a name.
        if self.reader.curr() == '.' || self.preceded_by_dot(tok) {
            return;
        }

        let Some(keyword) = self.table.keyword(&tok.lit) else {
            return;
        };
        let resolves = match keyword.class {
            EntryClass::Keyword | EntryClass::Operator => true,
            EntryClass::WindowFunction => self.state.config.window_functions,
            EntryClass::BuiltinFunction => self.followed_by_paren(),
        };
        if !resolves {
            return;
        }

        tok.kind = if keyword.kind == TokenKind::NOT
            && self.state.has_mode(SqlMode::HIGH_NOT_PRECEDENCE)
        {
            TokenKind::NOT2
        } else {
            keyword.kind
        };
        trace!(keyword = %tok.kind, pos = %tok.pos, "resolved keyword");
    }

    fn opened_with(&self, tok: &Token<'_>, byte: u8) -> bool {
        self.reader.as_bytes().get(tok.pos.offset) == Some(&byte)
    }

    fn preceded_by_dot(&self, tok: &Token<'_>) -> bool {
        tok.pos
            .offset
            .checked_sub(1)
            .and_then(|i| self.reader.as_bytes().get(i))
            == Some(&b'.')
    }

    /// Whether `(` comes next. Under `IGNORE_SPACE` whitespace may come
    /// between.
    fn followed_by_paren(&self) -> bool {
        let mut ahead = 0;
        if self.state.has_mode(SqlMode::IGNORE_SPACE) {
            while self
                .reader
                .peek_byte(ahead)
                .is_some_and(|b| b.is_ascii_whitespace())
            {
                ahead += 1;
            }
        }
        self.reader.peek_byte(ahead) == Some(b'(')
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
mod tests;
