//! UTF-8 rune codec with sentinel states.
//!
//! A [`Rune`] is a decoded code point widened to `i32` so that the lexer can
//! carry three out-of-band states next to ordinary characters:
//!
//! - [`Rune::INVALID`] for malformed input (also the value of U+FFFD),
//! - [`Rune::EOF`] when no input remains,
//! - [`Rune::BOM`], legitimate only at offset 0.
//!
//! Decoding never fails: any malformed or truncated sequence decodes as
//! `(INVALID, 1)` so the caller advances exactly one byte and keeps scanning.
//!
//! # Classification
//!
//! The `is_*` predicates are ASCII-scoped. Multi-byte runes are never digits
//! or letters for dispatch purposes; [`Rune::is_ident_extend`] is the single
//! place where they are accepted as identifier characters.

use std::fmt;

/// Decoded code point or sentinel.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rune(i32);

impl Rune {
    /// Malformed input. Shares its value with U+FFFD REPLACEMENT CHARACTER.
    pub const INVALID: Rune = Rune(0xFFFD);
    /// No more input.
    pub const EOF: Rune = Rune(-1);
    /// Byte-order mark U+FEFF.
    pub const BOM: Rune = Rune(0xFEFF);
    /// Largest valid Unicode scalar value.
    pub const MAX: Rune = Rune(0x0010_FFFF);

    /// Wrap a raw value. Out-of-range values are kept as-is and encode as
    /// the replacement character.
    #[inline]
    pub const fn new(value: i32) -> Self {
        Rune(value)
    }

    /// Rune for an ASCII byte.
    #[inline]
    #[allow(clippy::cast_lossless, reason = "i32::from is not const")]
    pub const fn from_byte(b: u8) -> Self {
        Rune(b as i32)
    }

    /// Raw code point value (`-1` for EOF).
    #[inline]
    pub const fn value(self) -> i32 {
        self.0
    }

    /// The value as a byte when it lies in `0..=255`.
    ///
    /// The dispatch trie is byte-indexed; runes outside this range never
    /// enter it.
    #[inline]
    pub fn as_byte(self) -> Option<u8> {
        u8::try_from(self.0).ok()
    }

    /// The value as a `char`, `None` for EOF, surrogates and out-of-range
    /// values.
    #[inline]
    pub fn to_char(self) -> Option<char> {
        u32::try_from(self.0).ok().and_then(char::from_u32)
    }

    #[inline]
    pub fn is_eof(self) -> bool {
        self == Self::EOF
    }

    #[inline]
    pub fn is_bom(self) -> bool {
        self == Self::BOM
    }

    #[inline]
    pub fn is_invalid(self) -> bool {
        self == Self::INVALID
    }

    /// ASCII decimal digit.
    #[inline]
    pub fn is_digit(self) -> bool {
        matches!(self.as_byte(), Some(b'0'..=b'9'))
    }

    /// ASCII letter.
    #[inline]
    pub fn is_alpha(self) -> bool {
        matches!(self.as_byte(), Some(b) if b.is_ascii_alphabetic())
    }

    #[inline]
    pub fn is_alnum(self) -> bool {
        self.is_alpha() || self.is_digit()
    }

    /// ASCII hexadecimal digit.
    #[inline]
    pub fn is_xdigit(self) -> bool {
        matches!(self.as_byte(), Some(b) if b.is_ascii_hexdigit())
    }

    /// ASCII whitespace: space, `\t`, `\n`, `\r`, vertical tab, form feed.
    #[inline]
    pub fn is_space(self) -> bool {
        matches!(
            self.as_byte(),
            Some(b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
        )
    }

    /// Multi-byte rune in the Basic Multilingual Plane, accepted as an
    /// identifier character. Sentinels are excluded.
    #[inline]
    pub fn is_ident_extend(self) -> bool {
        (0x80..=0xFFFF).contains(&self.0) && !self.is_invalid() && !self.is_bom()
    }
}

impl From<char> for Rune {
    #[inline]
    fn from(c: char) -> Self {
        // char is at most 0x10FFFF, so the fallback is unreachable.
        Rune(i32::try_from(u32::from(c)).unwrap_or(Rune::INVALID.0))
    }
}

impl PartialEq<char> for Rune {
    #[inline]
    fn eq(&self, other: &char) -> bool {
        *self == Rune::from(*other)
    }
}

impl fmt::Debug for Rune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Rune::EOF => f.write_str("Rune(EOF)"),
            Rune::INVALID => f.write_str("Rune(INVALID)"),
            Rune::BOM => f.write_str("Rune(BOM)"),
            r => match r.to_char() {
                Some(c) => write!(f, "Rune({c:?})"),
                None => write!(f, "Rune({:#x})", r.0),
            },
        }
    }
}

/// Writes the UTF-8 text of the rune. EOF writes nothing.
impl fmt::Display for Rune {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            return Ok(());
        }
        let encoded = encode(*self);
        // encode() only produces valid UTF-8.
        match std::str::from_utf8(encoded.as_bytes()) {
            Ok(s) => f.write_str(s),
            Err(_) => f.write_str("\u{FFFD}"),
        }
    }
}

// ─── First-byte classification ───────────────────────────────────────

/// Class value for a byte that can never start a sequence.
const XX: u8 = 0xF1;
/// Class value for an ASCII byte.
const AS: u8 = 0xF0;

/// Class of a leading byte. Low nibble: sequence length. High nibble:
/// index into [`ACCEPT_RANGES`] for the second byte.
const fn first_byte_class(b: u8) -> u8 {
    match b {
        0x00..=0x7F => AS,
        0xC2..=0xDF => 0x02,
        0xE0 => 0x13,
        0xE1..=0xEC | 0xEE..=0xEF => 0x03,
        0xED => 0x23,
        0xF0 => 0x34,
        0xF1..=0xF3 => 0x04,
        0xF4 => 0x44,
        // Continuation bytes, overlong 2-byte leads (C0, C1) and F5..FF.
        _ => XX,
    }
}

/// 256-entry first-byte class table, built at compile time.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static FIRST: [u8; 256] = {
    let mut table = [0u8; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = first_byte_class(i as u8);
        i += 1;
    }
    table
};

/// Accepted range for the second byte of a sequence. Narrower than
/// `0x80..=0xBF` where needed to reject overlong forms (`E0`, `F0`),
/// surrogates (`ED`) and values above U+10FFFF (`F4`).
#[derive(Clone, Copy)]
struct AcceptRange {
    lo: u8,
    hi: u8,
}

const ACCEPT_RANGES: [AcceptRange; 5] = [
    AcceptRange { lo: 0x80, hi: 0xBF },
    AcceptRange { lo: 0xA0, hi: 0xBF },
    AcceptRange { lo: 0x80, hi: 0x9F },
    AcceptRange { lo: 0x90, hi: 0xBF },
    AcceptRange { lo: 0x80, hi: 0x8F },
];

#[inline]
fn is_continuation(b: u8) -> bool {
    (0x80..=0xBF).contains(&b)
}

/// Decode the rune at the start of `bytes`.
///
/// Returns `(rune, width)` with `width` in `1..=4`. Malformed, truncated and
/// NUL input decode as `(Rune::INVALID, 1)`. An empty slice decodes as
/// `(Rune::EOF, 0)`. Never reads past `bytes.len()`.
pub fn decode(bytes: &[u8]) -> (Rune, usize) {
    let Some(&b0) = bytes.first() else {
        return (Rune::EOF, 0);
    };
    let class = FIRST[b0 as usize];
    if class == AS {
        if b0 == 0 {
            return (Rune::INVALID, 1);
        }
        return (Rune::from_byte(b0), 1);
    }
    if class == XX {
        return (Rune::INVALID, 1);
    }

    let size = (class & 0x07) as usize;
    if bytes.len() < size {
        return (Rune::INVALID, 1);
    }
    let accept = ACCEPT_RANGES[(class >> 4) as usize];
    let b1 = bytes[1];
    if b1 < accept.lo || accept.hi < b1 {
        return (Rune::INVALID, 1);
    }
    if size == 2 {
        let v = (i32::from(b0 & 0x1F) << 6) | i32::from(b1 & 0x3F);
        return (Rune(v), 2);
    }

    let b2 = bytes[2];
    if !is_continuation(b2) {
        return (Rune::INVALID, 1);
    }
    if size == 3 {
        let v = (i32::from(b0 & 0x0F) << 12) | (i32::from(b1 & 0x3F) << 6) | i32::from(b2 & 0x3F);
        return (Rune(v), 3);
    }

    let b3 = bytes[3];
    if !is_continuation(b3) {
        return (Rune::INVALID, 1);
    }
    let v = (i32::from(b0 & 0x07) << 18)
        | (i32::from(b1 & 0x3F) << 12)
        | (i32::from(b2 & 0x3F) << 6)
        | i32::from(b3 & 0x3F);
    (Rune(v), 4)
}

/// Decode the rune starting at `offset` in `buf`.
///
/// Same as [`decode`], except that a BOM anywhere but offset 0 is reported
/// as [`Rune::INVALID`] (keeping its 3-byte width). Offsets at or past the
/// end decode as `(Rune::EOF, 0)`.
pub fn decode_at(buf: &[u8], offset: usize) -> (Rune, usize) {
    let Some(rest) = buf.get(offset..) else {
        return (Rune::EOF, 0);
    };
    let (rune, width) = decode(rest);
    if rune.is_bom() && offset > 0 {
        return (Rune::INVALID, width);
    }
    (rune, width)
}

/// UTF-8 bytes of an encoded rune.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodedRune {
    bytes: [u8; 4],
    width: usize,
}

impl EncodedRune {
    /// The encoded bytes (`width` long).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.width]
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
}

/// Encode a rune as UTF-8.
///
/// Exact inverse of [`decode`] for every valid rune. Sentinels other than
/// `INVALID`, surrogates and out-of-range values encode as U+FFFD.
pub fn encode(rune: Rune) -> EncodedRune {
    let c = rune.to_char().unwrap_or(char::REPLACEMENT_CHARACTER);
    let mut bytes = [0u8; 4];
    let width = c.encode_utf8(&mut bytes).len();
    EncodedRune { bytes, width }
}

/// Number of runes a reader would consume walking `bytes` from the start.
///
/// Every malformed byte counts as one rune, matching [`decode`].
pub fn utf8_len(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] < 0x80 {
            i += 1;
        } else {
            i += decode(&bytes[i..]).1;
        }
        count += 1;
    }
    count
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
