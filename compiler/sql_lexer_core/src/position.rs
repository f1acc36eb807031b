//! Source positions.

use std::fmt;

use crate::Rune;

/// A location in the source buffer.
///
/// `line` and `column` are 1-indexed and count runes; `offset` is the
/// 0-indexed byte offset. Tokens are anchored at the position of their
/// first byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub offset: usize,
}

impl Position {
    /// Position of the first byte of any buffer.
    pub const START: Position = Position {
        line: 1,
        column: 1,
        offset: 0,
    };

    pub const fn new(line: u32, column: u32, offset: usize) -> Self {
        Position {
            line,
            column,
            offset,
        }
    }

    /// Step over a consumed rune of `width` bytes.
    ///
    /// A newline starts the next line at column 1; any other rune moves one
    /// column right.
    #[inline]
    pub fn advance(&mut self, rune: Rune, width: usize) {
        self.offset += width;
        if rune == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
