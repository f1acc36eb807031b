//! The token scanner.
//!
//! [`Scanner::scan`] produces one raw token per call: identifiers stay
//! [`TokenKind::IDENTIFIER`] and quoted identifiers keep their own kind.
//! [`Scanner::lex`](crate::Scanner::lex) layers keyword resolution on top.
//!
//! Scanning never fails. Malformed input becomes an `INVALID` token that
//! consumed at least one rune, with the cause recorded in
//! [`Scanner::errors`].

use sql_lexer_core::{Position, Rune, SourceReader};
use tracing::trace;

use crate::config::{ScannerConfig, SqlMode};
use crate::dispatch::{DispatchTable, Walk};
use crate::error::{ScanError, ScanErrorKind, ScanWarning};
use crate::literals::{self, Step};
use crate::state::ScanState;
use crate::{Token, TokenKind};

/// Tokenizer over one statement buffer.
pub struct Scanner<'a> {
    pub(crate) reader: SourceReader<'a>,
    pub(crate) table: &'a DispatchTable,
    pub(crate) state: ScanState,
    last_scan_offset: usize,
}

impl<'a> Scanner<'a> {
    /// Scanner over `sql` with the shared table and default configuration.
    pub fn new(sql: &'a str) -> Self {
        Self::with_table(sql, DispatchTable::shared(), ScannerConfig::default())
    }

    pub fn with_table(sql: &'a str, table: &'a DispatchTable, config: ScannerConfig) -> Self {
        Self::from_bytes(sql.as_bytes(), table, config)
    }

    /// Scanner over raw bytes. Malformed UTF-8 scans as `INVALID` tokens.
    pub fn from_bytes(bytes: &'a [u8], table: &'a DispatchTable, config: ScannerConfig) -> Self {
        Scanner {
            reader: SourceReader::new(bytes),
            table,
            state: ScanState::new(config),
            last_scan_offset: 0,
        }
    }

    /// Restart on new text, keeping the table and configuration.
    ///
    /// Flags, keyword history and diagnostics start over.
    pub fn reset(&mut self, sql: &'a str) {
        self.reader = SourceReader::new(sql.as_bytes());
        self.state = ScanState::new(self.state.config);
        self.last_scan_offset = 0;
    }

    /// Fresh scanner over `sql` with this scanner's table and configuration.
    pub fn inherit<'b>(&self, sql: &'b str) -> Scanner<'b>
    where
        'a: 'b,
    {
        Scanner::with_table(sql, self.table, self.state.config)
    }

    // ─── Accessors ───────────────────────────────────────────────────

    #[inline]
    pub fn config(&self) -> &ScannerConfig {
        self.state.config()
    }

    #[inline]
    pub fn sql_mode(&self) -> SqlMode {
        self.state.config.sql_mode
    }

    /// Change the dialect mode mid-stream, e.g. after `SET sql_mode`.
    pub fn set_sql_mode(&mut self, sql_mode: SqlMode) {
        self.state.config.sql_mode = sql_mode;
    }

    #[inline]
    pub fn reader(&self) -> &SourceReader<'a> {
        &self.reader
    }

    #[inline]
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Byte offset where the most recent token started.
    #[inline]
    pub fn last_scan_offset(&self) -> usize {
        self.last_scan_offset
    }

    /// Start of the most recent optimizer hint accepted.
    #[inline]
    pub fn last_hint_pos(&self) -> Option<Position> {
        self.state.last_hint_pos
    }

    pub fn errors(&self) -> &[ScanError] {
        &self.state.errors
    }

    pub fn warnings(&self) -> &[ScanWarning] {
        &self.state.warnings
    }

    /// Consume a version number of `min..=max` digits at the cursor, or
    /// nothing if fewer than `min` are there.
    pub fn scan_version_digits(&mut self, min: usize, max: usize) {
        literals::scan_version_digits(&mut self.reader, min, max);
    }

    // ─── Scanning ────────────────────────────────────────────────────

    /// Next raw token. Returns an `EOF` token, repeatedly, once the input
    /// is exhausted.
    pub fn scan(&mut self) -> Token<'a> {
        let tok = self.scan_token();
        self.last_scan_offset = tok.pos.offset;

        let keyword = if tok.kind == TokenKind::IDENTIFIER {
            self.table.keyword(&tok.lit).map_or(TokenKind::EOF, |k| k.kind)
        } else {
            TokenKind::EOF
        };
        self.state.shift_keyword(keyword);

        // Only the qualifying `.` itself keeps the flag alive.
        match tok.kind {
            TokenKind::IDENTIFIER | TokenKind::QUOTED_IDENTIFIER => {
                self.state.identifier_dot = self.reader.curr() == '.';
            }
            kind if kind == TokenKind::from_byte(b'.') => {}
            _ => self.state.identifier_dot = false,
        }

        trace!(kind = %tok.kind, pos = %tok.pos, len = tok.lit.len(), "token");
        tok
    }

    /// Raw tokens up to, not including, end of input.
    pub fn tokens(&mut self) -> impl Iterator<Item = Token<'a>> + '_ {
        std::iter::from_fn(move || {
            let tok = self.scan();
            (!tok.is_eof()).then_some(tok)
        })
    }

    fn scan_token(&mut self) -> Token<'a> {
        loop {
            self.reader.inc_as_long_as(Rune::is_space);
            let pos = self.reader.pos();
            let ch = self.reader.curr();

            if ch.is_eof() {
                return Token::eof(pos);
            }
            // The reader only reports a BOM at offset 0.
            if ch.is_bom() {
                self.reader.move_next();
                continue;
            }
            if ch.is_ident_extend() {
                return literals::identifier(&mut self.reader);
            }
            if ch.is_invalid() {
                self.reader.move_next();
                self.state.error(ScanErrorKind::InvalidUtf8, pos);
                return Token::new(TokenKind::INVALID, pos, self.reader.data(&pos));
            }

            let lead = self.reader.peek_byte(0).unwrap_or_default();
            match self.table.walk(&mut self.reader) {
                Walk::Handler(handler) => {
                    match literals::run(handler, &mut self.reader, &mut self.state) {
                        Step::Emit(tok) => return tok,
                        Step::Skip => continue,
                    }
                }
                Walk::Fixed(kind) => {
                    if kind.is_invalid() {
                        self.state.error(ScanErrorKind::UnexpectedByte(lead), pos);
                    }
                    return Token::new(kind, pos, self.reader.data(&pos));
                }
                Walk::NoMatch => {
                    self.reader.move_next();
                    self.state.error(ScanErrorKind::UnexpectedByte(lead), pos);
                    return Token::new(TokenKind::INVALID, pos, self.reader.data(&pos));
                }
            }
        }
    }
}

impl std::fmt::Debug for Scanner<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scanner")
            .field("pos", &self.reader.pos())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
