//! Byte-indexed dispatch trie.
//!
//! The trie is built once from a table of [`TableEntry`] values and is
//! read-only afterwards, so one table can back any number of scanners.
//!
//! # Structure
//!
//! Nodes live in a flat arena. Each node has 256 child slots indexed by the
//! next byte (`0` means no child; the root is never a child) and an optional
//! [`DispatchResult`]:
//!
//! - `Terminal(kind)`: a fixed token ends here (`>=`, `<=>`, `;`).
//! - `Handler(h)`: a variable-length form starts here (strings, numbers,
//!   comments). Handlers sit on single-byte starters under the root and
//!   pre-empt any fixed entry sharing that prefix.
//!
//! Keywords never enter the trie. Every letter is an identifier starter, so
//! keywords are resolved afterwards by a case-insensitive map lookup.
//!
//! # Walk
//!
//! [`DispatchTable::walk`] descends one byte at a time, consuming only bytes
//! that lead to a non-handler node. It stops at the first missing child and
//! reports the terminal of the deepest node reached. There is no
//! backtracking: fixed tokens are matched longest-first by construction.

use std::sync::OnceLock;

use rustc_hash::FxHashMap;
use sql_lexer_core::SourceReader;
use tracing::debug;

use crate::keywords::DEFAULT_ENTRIES;
use crate::TokenKind;

/// How a table entry is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryClass {
    /// Fixed operator text, inserted into the trie.
    Operator,
    /// Reserved word, resolved from identifiers.
    Keyword,
    /// Resolved only when window functions are enabled.
    WindowFunction,
    /// Resolved only when directly followed by `(`.
    BuiltinFunction,
}

/// One row of the keyword/operator table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableEntry {
    pub text: &'static str,
    pub kind: TokenKind,
    pub class: EntryClass,
}

impl TableEntry {
    pub const fn operator(text: &'static str, kind: TokenKind) -> Self {
        TableEntry {
            text,
            kind,
            class: EntryClass::Operator,
        }
    }

    pub const fn keyword(text: &'static str, kind: TokenKind) -> Self {
        TableEntry {
            text,
            kind,
            class: EntryClass::Keyword,
        }
    }

    pub const fn window_function(text: &'static str, kind: TokenKind) -> Self {
        TableEntry {
            text,
            kind,
            class: EntryClass::WindowFunction,
        }
    }

    pub const fn builtin_function(text: &'static str, kind: TokenKind) -> Self {
        TableEntry {
            text,
            kind,
            class: EntryClass::BuiltinFunction,
        }
    }
}

/// Variable-length form bound to a starter byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handler {
    /// `/`: division or comment/hint.
    Slash,
    /// `*`: multiplication or the close of `/*! ... */`.
    Star,
    /// `@`: user or system variable.
    At,
    /// `#`: line comment.
    Sharp,
    /// `-`: minus, `--` comment, `->`, `->>`.
    Dash,
    /// `.`: qualifier dot or leading-dot number.
    Dot,
    /// Decimal digit.
    Number,
    /// `'` or `"`.
    String,
    /// Backtick.
    QuotedIdent,
    /// `x`/`X`: `x'...'` or identifier.
    HexPrefix,
    /// `b`/`B`: `b'...'` or identifier.
    BitPrefix,
    /// `n`/`N`: `N'...'` or identifier.
    NationalPrefix,
    /// Any other identifier starter.
    Identifier,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchResult {
    Terminal(TokenKind),
    Handler(Handler),
}

/// Outcome of [`DispatchTable::walk`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Walk {
    /// A handler owns the form; nothing was consumed.
    Handler(Handler),
    /// A fixed token was consumed. `INVALID` when the walk stopped on a
    /// node that ends no entry (a prefix such as the `\` of `\N`).
    Fixed(TokenKind),
    /// The lead byte starts nothing; nothing was consumed.
    NoMatch,
}

/// Resolved keyword.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyword {
    pub kind: TokenKind,
    pub class: EntryClass,
}

/// Keys up to this length are uppercased on the stack.
const KEY_BUF: usize = 64;

struct Node {
    children: Box<[u32; 256]>,
    result: Option<DispatchResult>,
}

impl Node {
    fn new() -> Self {
        Node {
            children: Box::new([0; 256]),
            result: None,
        }
    }
}

/// Immutable dispatch trie plus keyword map.
pub struct DispatchTable {
    nodes: Vec<Node>,
    keywords: FxHashMap<Box<[u8]>, Keyword>,
    longest_keyword: usize,
}

impl DispatchTable {
    /// Build a table from `entries`.
    ///
    /// Starter handlers are bound first. An operator entry that collides
    /// with a handler node keeps the handler.
    #[tracing::instrument(level = "debug", skip_all, fields(entries = entries.len()))]
    pub fn new(entries: &[TableEntry]) -> Self {
        let mut table = DispatchTable {
            nodes: vec![Node::new()],
            keywords: FxHashMap::default(),
            longest_keyword: 0,
        };
        table.bind_handlers();
        for entry in entries {
            if entry.text.is_empty() {
                continue;
            }
            match entry.class {
                EntryClass::Operator => {
                    table.insert(entry.text.as_bytes(), DispatchResult::Terminal(entry.kind));
                }
                class => {
                    let key = entry.text.to_ascii_uppercase().into_bytes();
                    table.longest_keyword = table.longest_keyword.max(key.len());
                    table.keywords.insert(
                        key.into_boxed_slice(),
                        Keyword {
                            kind: entry.kind,
                            class,
                        },
                    );
                }
            }
        }
        debug!(
            nodes = table.nodes.len(),
            keywords = table.keywords.len(),
            "built dispatch table"
        );
        table
    }

    /// Process-wide table built from [`DEFAULT_ENTRIES`] on first use.
    pub fn shared() -> &'static DispatchTable {
        static SHARED: OnceLock<DispatchTable> = OnceLock::new();
        SHARED.get_or_init(|| DispatchTable::new(DEFAULT_ENTRIES))
    }

    fn bind_handlers(&mut self) {
        for b in 0..=u8::MAX {
            let handler = match b {
                b'/' => Handler::Slash,
                b'*' => Handler::Star,
                b'@' => Handler::At,
                b'#' => Handler::Sharp,
                b'-' => Handler::Dash,
                b'.' => Handler::Dot,
                b'0'..=b'9' => Handler::Number,
                b'\'' | b'"' => Handler::String,
                b'`' => Handler::QuotedIdent,
                b'x' | b'X' => Handler::HexPrefix,
                b'b' | b'B' => Handler::BitPrefix,
                b'n' | b'N' => Handler::NationalPrefix,
                b'_' | b'$' | b'a'..=b'z' | b'A'..=b'Z' => Handler::Identifier,
                _ => continue,
            };
            self.insert(&[b], DispatchResult::Handler(handler));
        }
    }

    #[allow(
        clippy::cast_possible_truncation,
        reason = "node count is bounded by the total entry text length"
    )]
    fn insert(&mut self, text: &[u8], result: DispatchResult) {
        let mut node = 0;
        for &b in text {
            let child = self.nodes[node].children[usize::from(b)];
            node = if child == 0 {
                let idx = self.nodes.len();
                self.nodes.push(Node::new());
                self.nodes[node].children[usize::from(b)] = idx as u32;
                idx
            } else {
                child as usize
            };
        }
        let slot = &mut self.nodes[node].result;
        if !matches!(
            (*slot, result),
            (Some(DispatchResult::Handler(_)), DispatchResult::Terminal(_))
        ) {
            *slot = Some(result);
        }
    }

    /// Result stored at the node reached by `prefix`, if any.
    pub fn lookup(&self, prefix: &[u8]) -> Option<DispatchResult> {
        let mut node = 0;
        for &b in prefix {
            let child = self.nodes[node].children[usize::from(b)];
            if child == 0 {
                return None;
            }
            node = child as usize;
        }
        self.nodes[node].result
    }

    /// Walk the trie from the reader's cursor.
    ///
    /// Only ASCII runes are matched, so every consumed byte is one rune.
    pub fn walk(&self, reader: &mut SourceReader<'_>) -> Walk {
        let mut node = &self.nodes[0];
        let mut consumed = false;
        while let Some(b) = reader.curr().as_byte().filter(u8::is_ascii) {
            let child = node.children[usize::from(b)];
            if child == 0 {
                break;
            }
            node = &self.nodes[child as usize];
            if let Some(DispatchResult::Handler(handler)) = node.result {
                return Walk::Handler(handler);
            }
            reader.move_next();
            consumed = true;
        }
        if !consumed {
            return Walk::NoMatch;
        }
        match node.result {
            Some(DispatchResult::Terminal(kind)) => Walk::Fixed(kind),
            _ => Walk::Fixed(TokenKind::INVALID),
        }
    }

    /// Case-insensitive keyword lookup of an identifier literal.
    pub fn keyword(&self, lit: &[u8]) -> Option<Keyword> {
        if lit.is_empty() || lit.len() > self.longest_keyword {
            return None;
        }
        if lit.len() <= KEY_BUF {
            let mut buf = [0u8; KEY_BUF];
            let key = &mut buf[..lit.len()];
            key.copy_from_slice(lit);
            key.make_ascii_uppercase();
            self.keywords.get(&*key).copied()
        } else {
            self.keywords.get(lit.to_ascii_uppercase().as_slice()).copied()
        }
    }

    /// Number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl std::fmt::Debug for DispatchTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchTable")
            .field("nodes", &self.nodes.len())
            .field("keywords", &self.keywords.len())
            .finish()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
