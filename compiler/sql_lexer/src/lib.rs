//! Tokenizer for MySQL-compatible SQL.
//!
//! # Architecture
//!
//! - [`DispatchTable`]: byte trie over fixed operators, with starter bytes
//!   bound to literal handlers, plus the keyword map
//! - `literals`: one routine per variable-length form (strings, numbers,
//!   comments, variables)
//! - [`Scanner`]: drives the trie and the routines, one raw token per
//!   [`Scanner::scan`]
//! - [`Scanner::lex`]: keyword and dialect resolution for the parser
//!
//! Character decoding and position tracking live in `sql_lexer_core`.
//!
//! ```
//! use sql_lexer::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("SELECT a FROM t");
//! assert_eq!(scanner.lex().kind, TokenKind::SELECT);
//! assert_eq!(scanner.lex().kind, TokenKind::IDENTIFIER);
//! ```
//!
//! # Tracing
//!
//! Set `RUST_LOG=sql_lexer=trace` and call [`init_tracing`] to log every
//! token as it is produced.

mod config;
mod dispatch;
mod error;
pub mod keywords;
mod lex;
mod literals;
mod scanner;
mod state;
mod token;
mod tracing_setup;

pub use config::{ScannerConfig, SqlMode, SqlModeError};
pub use dispatch::{DispatchResult, DispatchTable, EntryClass, Handler, Keyword, TableEntry, Walk};
pub use error::{ScanError, ScanErrorKind, ScanWarning, ScanWarningKind};
pub use literals::Step;
pub use scanner::Scanner;
pub use state::ScanState;
pub use token::{Token, TokenKind};
pub use tracing_setup::{init_tracing, LOG_ENV};

pub use sql_lexer_core::{Position, Rune, SourceReader};
