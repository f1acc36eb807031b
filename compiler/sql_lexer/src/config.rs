//! Dialect configuration.
//!
//! [`SqlMode`] mirrors the server's `sql_mode` bit set. Only a handful of
//! modes change tokenization (`ANSI_QUOTES`, `NO_BACKSLASH_ESCAPES`,
//! `PIPES_AS_CONCAT`, `IGNORE_SPACE`, `HIGH_NOT_PRECEDENCE`); the rest are
//! carried so a session's mode string round-trips through the scanner.

use std::fmt;
use std::str::FromStr;

use bitflags::bitflags;

bitflags! {
    /// `sql_mode` flags, using the server's bit values.
    ///
    /// Flag names match the mode names accepted in `SET sql_mode = '...'`.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct SqlMode: u64 {
        const REAL_AS_FLOAT = 1 << 0;
        const PIPES_AS_CONCAT = 1 << 2;
        const ANSI_QUOTES = 1 << 3;
        const IGNORE_SPACE = 1 << 4;
        const NOT_USED = 1 << 5;
        const ONLY_FULL_GROUP_BY = 1 << 6;
        const NO_UNSIGNED_SUBTRACTION = 1 << 7;
        const NO_DIR_IN_CREATE = 1 << 8;
        const POSTGRESQL = 1 << 9;
        const ORACLE = 1 << 10;
        const MSSQL = 1 << 11;
        const DB2 = 1 << 12;
        const MAXDB = 1 << 13;
        const NO_KEY_OPTIONS = 1 << 14;
        const NO_TABLE_OPTIONS = 1 << 15;
        const NO_FIELD_OPTIONS = 1 << 16;
        const MYSQL323 = 1 << 17;
        const MYSQL40 = 1 << 18;
        const ANSI = 1 << 19;
        const NO_AUTO_VALUE_ON_ZERO = 1 << 20;
        const NO_BACKSLASH_ESCAPES = 1 << 21;
        const STRICT_TRANS_TABLES = 1 << 22;
        const STRICT_ALL_TABLES = 1 << 23;
        const NO_ZERO_IN_DATE = 1 << 24;
        const NO_ZERO_DATE = 1 << 25;
        const INVALID_DATES = 1 << 26;
        const ERROR_FOR_DIVISION_BY_ZERO = 1 << 27;
        const TRADITIONAL = 1 << 28;
        const NO_AUTO_CREATE_USER = 1 << 29;
        const HIGH_NOT_PRECEDENCE = 1 << 30;
        const NO_ENGINE_SUBSTITUTION = 1 << 31;
        const PAD_CHAR_TO_FULL_LENGTH = 1 << 32;
        const ALLOW_INVALID_DATES = 1 << 33;
    }
}

// ─── Combination modes ───────────────────────────────────────────────

const QUOTING_COMPAT: SqlMode = SqlMode::PIPES_AS_CONCAT
    .union(SqlMode::ANSI_QUOTES)
    .union(SqlMode::IGNORE_SPACE)
    .union(SqlMode::NO_KEY_OPTIONS)
    .union(SqlMode::NO_TABLE_OPTIONS)
    .union(SqlMode::NO_FIELD_OPTIONS);

/// Modes implied by each combination mode, in addition to its own bit.
const COMBINATIONS: [(SqlMode, SqlMode); 9] = [
    (
        SqlMode::ANSI,
        SqlMode::REAL_AS_FLOAT
            .union(SqlMode::PIPES_AS_CONCAT)
            .union(SqlMode::ANSI_QUOTES)
            .union(SqlMode::IGNORE_SPACE)
            .union(SqlMode::ONLY_FULL_GROUP_BY),
    ),
    (SqlMode::DB2, QUOTING_COMPAT),
    (SqlMode::MSSQL, QUOTING_COMPAT),
    (SqlMode::POSTGRESQL, QUOTING_COMPAT),
    (SqlMode::MAXDB, QUOTING_COMPAT.union(SqlMode::NO_AUTO_CREATE_USER)),
    (SqlMode::ORACLE, QUOTING_COMPAT.union(SqlMode::NO_AUTO_CREATE_USER)),
    (SqlMode::MYSQL323, SqlMode::HIGH_NOT_PRECEDENCE),
    (SqlMode::MYSQL40, SqlMode::HIGH_NOT_PRECEDENCE),
    (
        SqlMode::TRADITIONAL,
        SqlMode::STRICT_TRANS_TABLES
            .union(SqlMode::STRICT_ALL_TABLES)
            .union(SqlMode::NO_ZERO_IN_DATE)
            .union(SqlMode::NO_ZERO_DATE)
            .union(SqlMode::ERROR_FOR_DIVISION_BY_ZERO)
            .union(SqlMode::NO_AUTO_CREATE_USER),
    ),
];

impl SqlMode {
    fn implied(self) -> SqlMode {
        COMBINATIONS
            .iter()
            .find(|(mode, _)| *mode == self)
            .map_or(SqlMode::empty(), |&(_, implied)| implied)
    }
}

/// Error parsing a `sql_mode` string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SqlModeError {
    #[error("unknown sql_mode {0:?}")]
    UnknownMode(String),
}

/// Parses the comma-separated `sql_mode` text, case-insensitively.
///
/// Combination modes such as `ANSI` or `TRADITIONAL` set their own bit plus
/// every mode they imply. Empty items are ignored, so `""` is the empty mode.
impl FromStr for SqlMode {
    type Err = SqlModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut mode = SqlMode::empty();
        for item in s.split(',') {
            let name = item.trim().to_ascii_uppercase();
            if name.is_empty() {
                continue;
            }
            let flag = SqlMode::from_name(&name)
                .ok_or_else(|| SqlModeError::UnknownMode(item.trim().to_owned()))?;
            mode |= flag | flag.implied();
        }
        Ok(mode)
    }
}

/// Writes the comma-separated mode names, the form accepted by `from_str`.
impl fmt::Display for SqlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, _)) in self.iter_names().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

/// Scanner configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScannerConfig {
    pub sql_mode: SqlMode,
    /// Recognize window function names as keywords. Off keeps them usable
    /// as plain identifiers for applications that predate window functions.
    pub window_functions: bool,
    /// Whether the parser should record keyword source positions in the
    /// syntax tree. Carried for the parser; scanning is unaffected.
    pub record_positions: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        ScannerConfig {
            sql_mode: SqlMode::empty(),
            window_functions: true,
            record_positions: true,
        }
    }
}

impl ScannerConfig {
    #[must_use]
    pub fn with_sql_mode(mut self, sql_mode: SqlMode) -> Self {
        self.sql_mode = sql_mode;
        self
    }

    #[must_use]
    pub fn with_window_functions(mut self, enabled: bool) -> Self {
        self.window_functions = enabled;
        self
    }

    #[must_use]
    pub fn with_record_positions(mut self, enabled: bool) -> Self {
        self.record_positions = enabled;
        self
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    reason = "test assertions use unwrap/expect for clarity"
)]
