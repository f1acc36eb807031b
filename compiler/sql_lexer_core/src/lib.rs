//! Low-level input layer for the SQL lexer.
//!
//! This crate turns raw bytes into positioned [`Rune`]s and nothing more:
//!
//! - [`rune`]: UTF-8 decoding with sentinel states (`EOF`, `INVALID`, `BOM`)
//! - [`Position`]: line/column/offset triples
//! - [`SourceReader`]: a cursor with one-step rewind and checkpoint seeks
//!
//! It has no knowledge of SQL. Token tables, literal rules and keyword
//! resolution live in `sql_lexer`.

pub mod rune;

mod position;
mod reader;

pub use position::Position;
pub use reader::SourceReader;
pub use rune::{decode, decode_at, encode, utf8_len, EncodedRune, Rune};
