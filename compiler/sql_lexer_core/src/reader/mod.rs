//! Rewindable, position-tracking reader over a byte buffer.
//!
//! The reader walks the buffer one [`Rune`] at a time. Every consumed rune
//! pushes its byte width onto a history stack, so [`SourceReader::prev`]
//! undoes exactly one [`SourceReader::next`] and `n` forward steps followed by
//! `n` backward steps land on the exact starting [`Position`].
//!
//! # Checkpoints
//!
//! Multi-step backtracking inside a single token is done with saved
//! positions: remember `reader.pos()`, scan ahead, and [`SourceReader::seek`]
//! back to `saved.offset` if the speculative scan does not pan out. A seek
//! clears the width history.
//!
//! # Position Recovery
//!
//! Line starts are recorded the first time the reader walks past each
//! newline, so a seek to anywhere already visited resolves its line with a
//! binary search and its column by counting runes from that line start.
//! Seeking into territory not yet visited replays forward from the furthest
//! known position, locating newlines with `memchr`.

use crate::rune::{decode_at, utf8_len};
use crate::{Position, Rune};

/// Rewindable cursor over an immutable byte buffer.
#[derive(Clone, Debug)]
pub struct SourceReader<'a> {
    buf: &'a [u8],
    /// Current position; `pos.offset` is the cursor index.
    pos: Position,
    /// Widths of consumed runes, most recent last.
    widths: Vec<u8>,
    /// Byte offsets where each visited line begins. `line_starts[0] == 0`.
    line_starts: Vec<usize>,
    /// Furthest position the reader has reached.
    furthest: Position,
}

impl<'a> SourceReader<'a> {
    /// Create a reader at offset 0.
    pub fn new(buf: &'a [u8]) -> Self {
        SourceReader {
            buf,
            pos: Position::START,
            widths: Vec::new(),
            line_starts: vec![0],
            furthest: Position::START,
        }
    }

    /// The whole underlying buffer.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.buf
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current position.
    #[inline]
    pub fn pos(&self) -> Position {
        self.pos
    }

    /// Current byte offset.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos.offset
    }

    /// Returns `true` when the cursor is at or past the last byte.
    #[inline]
    pub fn eof(&self) -> bool {
        self.pos.offset >= self.buf.len()
    }

    /// Number of entries in the rewind history.
    #[inline]
    pub fn history_len(&self) -> usize {
        self.widths.len()
    }

    /// Decode the rune at the cursor without consuming it.
    ///
    /// Returns [`Rune::EOF`] at the end of the buffer.
    #[inline]
    pub fn curr(&self) -> Rune {
        decode_at(self.buf, self.pos.offset).0
    }

    /// Consume and return the rune at the cursor.
    ///
    /// At the end of the buffer returns [`Rune::EOF`] and leaves the history
    /// untouched.
    #[inline]
    #[allow(
        clippy::should_implement_trait,
        reason = "EOF is an in-band rune, not the end of an iterator"
    )]
    pub fn next(&mut self) -> Rune {
        if self.eof() {
            return Rune::EOF;
        }
        let (rune, width) = decode_at(self.buf, self.pos.offset);
        self.step(rune, width);
        rune
    }

    /// Consume the rune at the cursor, discarding it.
    ///
    /// Returns `false` at the end of the buffer.
    #[inline]
    pub fn move_next(&mut self) -> bool {
        if self.eof() {
            return false;
        }
        let (rune, width) = decode_at(self.buf, self.pos.offset);
        self.step(rune, width);
        true
    }

    /// Undo the most recent consume and return the rune now at the cursor.
    ///
    /// Returns `None` without moving when there is nothing to undo.
    pub fn prev(&mut self) -> Option<Rune> {
        if self.move_prev() {
            Some(self.curr())
        } else {
            None
        }
    }

    /// Undo the most recent consume.
    ///
    /// Returns `false` without moving when the cursor is at 0 or the history
    /// is empty.
    pub fn move_prev(&mut self) -> bool {
        if self.pos.offset == 0 {
            return false;
        }
        let Some(width) = self.widths.pop() else {
            return false;
        };
        let offset = self.pos.offset - usize::from(width);
        let (rune, _) = decode_at(self.buf, offset);
        if rune == '\n' {
            // Stepping back over a newline lands at the end of the previous
            // line; its column has to be recounted.
            self.pos = self.position_at(offset);
        } else {
            self.pos.offset = offset;
            self.pos.column -= 1;
        }
        true
    }

    /// Move the cursor to byte `index` and clear the rewind history.
    ///
    /// Fails without any change when `index` is past the last byte (so a
    /// seek on an empty buffer always fails).
    pub fn seek(&mut self, index: usize) -> bool {
        if index >= self.buf.len() {
            return false;
        }
        if index > self.furthest.offset {
            self.discover_up_to(index);
        }
        self.pos = self.position_at(index);
        self.widths.clear();
        true
    }

    /// Consume runes while `pred` holds.
    ///
    /// Returns the first rune for which `pred` is false (not consumed), or
    /// [`Rune::EOF`].
    pub fn inc_as_long_as(&mut self, pred: impl Fn(Rune) -> bool) -> Rune {
        loop {
            let rune = self.curr();
            if rune.is_eof() || !pred(rune) {
                return rune;
            }
            self.move_next();
        }
    }

    /// Consume runes until at least `n` bytes have been consumed or the
    /// buffer ends.
    pub fn advance_bytes(&mut self, n: usize) {
        let target = self.pos.offset + n;
        while self.pos.offset < target && self.move_next() {}
    }

    /// Bytes from `from.offset` up to the cursor.
    ///
    /// Returns an empty slice if `from` lies after the cursor.
    #[inline]
    pub fn data(&self, from: &Position) -> &'a [u8] {
        self.buf.get(from.offset..self.pos.offset).unwrap_or_default()
    }

    /// Raw bytes of the most recently consumed rune, if it is still in the
    /// history.
    pub fn last_rune_bytes(&self) -> &'a [u8] {
        match self.widths.last() {
            Some(&w) => {
                let start = self.pos.offset - usize::from(w);
                self.buf.get(start..self.pos.offset).unwrap_or_default()
            }
            None => &[],
        }
    }

    /// Raw byte `n` positions past the cursor.
    #[inline]
    pub fn peek_byte(&self, n: usize) -> Option<u8> {
        self.buf.get(self.pos.offset + n).copied()
    }

    /// Whether the unread input starts with `prefix`, ignoring ASCII case.
    pub fn starts_with_ignore_ascii_case(&self, prefix: &[u8]) -> bool {
        self.buf
            .get(self.pos.offset..self.pos.offset + prefix.len())
            .is_some_and(|s| s.eq_ignore_ascii_case(prefix))
    }

    #[inline]
    fn step(&mut self, rune: Rune, width: usize) {
        self.pos.advance(rune, width);
        if self.pos.offset > self.furthest.offset {
            if rune == '\n' {
                self.line_starts.push(self.pos.offset);
            }
            self.furthest = self.pos;
        }
        // Decoded widths are 1..=4.
        self.widths.push(u8::try_from(width).unwrap_or(u8::MAX));
    }

    /// Record line starts between the furthest visited offset and `index`.
    fn discover_up_to(&mut self, index: usize) {
        let base = self.furthest.offset;
        let span = &self.buf[base..index];
        self.line_starts
            .extend(memchr::memchr_iter(b'\n', span).map(|i| base + i + 1));
        self.furthest = self.position_at(index);
    }

    /// Resolve the position of an offset whose line start is known.
    fn position_at(&self, offset: usize) -> Position {
        let line_idx = self
            .line_starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1);
        let line_start = self.line_starts[line_idx];
        let column = utf8_len(&self.buf[line_start..offset]) + 1;
        Position {
            line: u32::try_from(line_idx + 1).unwrap_or(u32::MAX),
            column: u32::try_from(column).unwrap_or(u32::MAX),
            offset,
        }
    }
}

impl<'a> From<&'a str> for SourceReader<'a> {
    fn from(source: &'a str) -> Self {
        SourceReader::new(source.as_bytes())
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
