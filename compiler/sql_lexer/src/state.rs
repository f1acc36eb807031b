//! Mutable scanner state shared by the literal routines.

use sql_lexer_core::Position;
use tracing::debug;

use crate::config::{ScannerConfig, SqlMode};
use crate::error::{ScanError, ScanErrorKind, ScanWarning, ScanWarningKind};
use crate::TokenKind;

/// Flags and history carried between tokens.
///
/// Every literal routine receives this by `&mut`, so the only state a
/// routine can change is visible in its signature.
#[derive(Clone, Debug)]
pub struct ScanState {
    pub(crate) config: ScannerConfig,
    /// Inside `/*! ... */`: the next `*/` closes the block silently.
    pub(crate) in_bang_comment: bool,
    /// Keyword kinds of the last three tokens, most recent first. Tokens
    /// that are not keywords record [`TokenKind::EOF`].
    pub(crate) keywords: [TokenKind; 3],
    pub(crate) last_hint_pos: Option<Position>,
    /// The previous token was an identifier directly followed by `.`, so a
    /// digit run is the next part of a qualified name, not a number.
    pub(crate) identifier_dot: bool,
    pub(crate) errors: Vec<ScanError>,
    pub(crate) warnings: Vec<ScanWarning>,
}

impl ScanState {
    pub fn new(config: ScannerConfig) -> Self {
        ScanState {
            config,
            in_bang_comment: false,
            keywords: [TokenKind::EOF; 3],
            last_hint_pos: None,
            identifier_dot: false,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &ScannerConfig {
        &self.config
    }

    #[inline]
    pub fn has_mode(&self, mode: SqlMode) -> bool {
        self.config.sql_mode.contains(mode)
    }

    /// Keyword kind of the token `n` places back (0 = most recent).
    #[inline]
    pub fn last_keyword(&self, n: usize) -> TokenKind {
        self.keywords.get(n).copied().unwrap_or_default()
    }

    pub fn in_bang_comment(&self) -> bool {
        self.in_bang_comment
    }

    pub fn identifier_dot(&self) -> bool {
        self.identifier_dot
    }

    pub(crate) fn shift_keyword(&mut self, kind: TokenKind) {
        self.keywords = [kind, self.keywords[0], self.keywords[1]];
    }

    /// Replace the most recent history entry, once the keyword layer has
    /// decided what the last identifier really was.
    pub(crate) fn set_last_keyword(&mut self, kind: TokenKind) {
        self.keywords[0] = kind;
    }

    pub(crate) fn error(&mut self, kind: ScanErrorKind, pos: Position) {
        debug!(%kind, %pos, "scan error");
        self.errors.push(ScanError { kind, pos });
    }

    pub(crate) fn warn(&mut self, kind: ScanWarningKind, pos: Position) {
        debug!(%kind, %pos, "scan warning");
        self.warnings.push(ScanWarning { kind, pos });
    }
}
