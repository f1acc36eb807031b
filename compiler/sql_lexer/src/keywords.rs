//! Default keyword/operator table and charset names.
//!
//! The scanner only depends on the handful of kinds it inspects (`SELECT`,
//! `FOR`, `BINDING`, `NOT`, ...). Everything else here is data handed to
//! [`DispatchTable::new`](crate::DispatchTable::new); callers with a
//! different grammar build their own table.

use crate::dispatch::TableEntry;
use crate::TokenKind;

/// Entries behind [`DispatchTable::shared`](crate::DispatchTable::shared).
pub static DEFAULT_ENTRIES: &[TableEntry] = &[
    // === Single-byte operators ===
    TableEntry::operator("=", TokenKind::from_byte(b'=')),
    TableEntry::operator(">", TokenKind::from_byte(b'>')),
    TableEntry::operator("<", TokenKind::from_byte(b'<')),
    TableEntry::operator("(", TokenKind::from_byte(b'(')),
    TableEntry::operator(")", TokenKind::from_byte(b')')),
    TableEntry::operator(";", TokenKind::from_byte(b';')),
    TableEntry::operator(",", TokenKind::from_byte(b',')),
    TableEntry::operator("&", TokenKind::from_byte(b'&')),
    TableEntry::operator("%", TokenKind::from_byte(b'%')),
    TableEntry::operator(":", TokenKind::from_byte(b':')),
    TableEntry::operator("|", TokenKind::from_byte(b'|')),
    TableEntry::operator("!", TokenKind::from_byte(b'!')),
    TableEntry::operator("^", TokenKind::from_byte(b'^')),
    TableEntry::operator("~", TokenKind::from_byte(b'~')),
    TableEntry::operator("?", TokenKind::from_byte(b'?')),
    TableEntry::operator("{", TokenKind::from_byte(b'{')),
    TableEntry::operator("}", TokenKind::from_byte(b'}')),
    TableEntry::operator("[", TokenKind::from_byte(b'[')),
    TableEntry::operator("]", TokenKind::from_byte(b']')),
    TableEntry::operator("+", TokenKind::from_byte(b'+')),
    // === Multi-byte operators ===
    TableEntry::operator("&&", TokenKind::AND_AND),
    TableEntry::operator(":=", TokenKind::ASSIGN),
    TableEntry::operator("<=>", TokenKind::NULL_SAFE_EQ),
    TableEntry::operator(">=", TokenKind::GE),
    TableEntry::operator("<=", TokenKind::LE),
    TableEntry::operator("!=", TokenKind::NEQ),
    TableEntry::operator("<>", TokenKind::NEQ_SYNONYM),
    TableEntry::operator("<<", TokenKind::LSH),
    TableEntry::operator(">>", TokenKind::RSH),
    TableEntry::operator("\\N", TokenKind::NULL_ESCAPE),
    TableEntry::operator("||", TokenKind::PIPES),
    // === Keywords ===
    TableEntry::keyword("SELECT", TokenKind::SELECT),
    TableEntry::keyword("INSERT", TokenKind::INSERT),
    TableEntry::keyword("UPDATE", TokenKind::UPDATE),
    TableEntry::keyword("DELETE", TokenKind::DELETE),
    TableEntry::keyword("REPLACE", TokenKind::REPLACE),
    TableEntry::keyword("FOR", TokenKind::FOR),
    TableEntry::keyword("BINDING", TokenKind::BINDING),
    TableEntry::keyword("CREATE", TokenKind::CREATE),
    TableEntry::keyword("NOT", TokenKind::NOT),
    TableEntry::keyword("AS", TokenKind::AS),
    TableEntry::keyword("FROM", TokenKind::FROM),
    TableEntry::keyword("WHERE", TokenKind::WHERE),
    TableEntry::keyword("AND", TokenKind::AND),
    TableEntry::keyword("OR", TokenKind::OR),
    TableEntry::keyword("XOR", TokenKind::XOR),
    TableEntry::keyword("IS", TokenKind::IS),
    TableEntry::keyword("NULL", TokenKind::NULL),
    TableEntry::keyword("TRUE", TokenKind::TRUE),
    TableEntry::keyword("FALSE", TokenKind::FALSE),
    TableEntry::keyword("IN", TokenKind::IN),
    TableEntry::keyword("LIKE", TokenKind::LIKE),
    TableEntry::keyword("BETWEEN", TokenKind::BETWEEN),
    TableEntry::keyword("ORDER", TokenKind::ORDER),
    TableEntry::keyword("GROUP", TokenKind::GROUP),
    TableEntry::keyword("BY", TokenKind::BY),
    TableEntry::keyword("HAVING", TokenKind::HAVING),
    TableEntry::keyword("LIMIT", TokenKind::LIMIT),
    TableEntry::keyword("JOIN", TokenKind::JOIN),
    TableEntry::keyword("LEFT", TokenKind::LEFT),
    TableEntry::keyword("RIGHT", TokenKind::RIGHT),
    TableEntry::keyword("INNER", TokenKind::INNER),
    TableEntry::keyword("OUTER", TokenKind::OUTER),
    TableEntry::keyword("CROSS", TokenKind::CROSS),
    TableEntry::keyword("ON", TokenKind::ON),
    TableEntry::keyword("USING", TokenKind::USING),
    TableEntry::keyword("UNION", TokenKind::UNION),
    TableEntry::keyword("ALL", TokenKind::ALL),
    TableEntry::keyword("DISTINCT", TokenKind::DISTINCT),
    TableEntry::keyword("INTO", TokenKind::INTO),
    TableEntry::keyword("VALUES", TokenKind::VALUES),
    TableEntry::keyword("SET", TokenKind::SET),
    TableEntry::keyword("TABLE", TokenKind::TABLE),
    TableEntry::keyword("DROP", TokenKind::DROP),
    TableEntry::keyword("ALTER", TokenKind::ALTER),
    TableEntry::keyword("INDEX", TokenKind::INDEX),
    TableEntry::keyword("PRIMARY", TokenKind::PRIMARY),
    TableEntry::keyword("KEY", TokenKind::KEY),
    TableEntry::keyword("DEFAULT", TokenKind::DEFAULT),
    TableEntry::keyword("CASE", TokenKind::CASE),
    TableEntry::keyword("WHEN", TokenKind::WHEN),
    TableEntry::keyword("THEN", TokenKind::THEN),
    TableEntry::keyword("ELSE", TokenKind::ELSE),
    TableEntry::keyword("WITH", TokenKind::WITH),
    TableEntry::keyword("EXISTS", TokenKind::EXISTS),
    TableEntry::keyword("DIV", TokenKind::DIV),
    TableEntry::keyword("MOD", TokenKind::MOD),
    TableEntry::keyword("ASC", TokenKind::ASC),
    TableEntry::keyword("DESC", TokenKind::DESC),
    TableEntry::keyword("LOCK", TokenKind::LOCK),
    TableEntry::keyword("SHARE", TokenKind::SHARE),
    TableEntry::keyword("IF", TokenKind::IF),
    TableEntry::keyword("INTERVAL", TokenKind::INTERVAL),
    TableEntry::keyword("COLLATE", TokenKind::COLLATE),
    TableEntry::keyword("BINARY", TokenKind::BINARY),
    TableEntry::keyword("UNIQUE", TokenKind::UNIQUE),
    TableEntry::keyword("REGEXP", TokenKind::REGEXP),
    TableEntry::keyword("RLIKE", TokenKind::RLIKE),
    TableEntry::keyword("ESCAPE", TokenKind::ESCAPE),
    TableEntry::keyword("EXPLAIN", TokenKind::EXPLAIN),
    TableEntry::keyword("SHOW", TokenKind::SHOW),
    TableEntry::keyword("USE", TokenKind::USE),
    // === Window functions ===
    TableEntry::window_function("CUME_DIST", TokenKind::CUME_DIST),
    TableEntry::window_function("DENSE_RANK", TokenKind::DENSE_RANK),
    TableEntry::window_function("FIRST_VALUE", TokenKind::FIRST_VALUE),
    TableEntry::window_function("GROUPS", TokenKind::GROUPS),
    TableEntry::window_function("LAG", TokenKind::LAG),
    TableEntry::window_function("LAST_VALUE", TokenKind::LAST_VALUE),
    TableEntry::window_function("LEAD", TokenKind::LEAD),
    TableEntry::window_function("NTH_VALUE", TokenKind::NTH_VALUE),
    TableEntry::window_function("NTILE", TokenKind::NTILE),
    TableEntry::window_function("OVER", TokenKind::OVER),
    TableEntry::window_function("PERCENT_RANK", TokenKind::PERCENT_RANK),
    TableEntry::window_function("RANK", TokenKind::RANK),
    TableEntry::window_function("ROW_NUMBER", TokenKind::ROW_NUMBER),
    TableEntry::window_function("WINDOW", TokenKind::WINDOW),
    // === Built-in functions ===
    TableEntry::builtin_function("ADDDATE", TokenKind::ADDDATE),
    TableEntry::builtin_function("BIT_AND", TokenKind::BIT_AND),
    TableEntry::builtin_function("BIT_OR", TokenKind::BIT_OR),
    TableEntry::builtin_function("BIT_XOR", TokenKind::BIT_XOR),
    TableEntry::builtin_function("CAST", TokenKind::CAST),
    TableEntry::builtin_function("COUNT", TokenKind::COUNT),
    TableEntry::builtin_function("CURDATE", TokenKind::CURDATE),
    TableEntry::builtin_function("CURTIME", TokenKind::CURTIME),
    TableEntry::builtin_function("DATE_ADD", TokenKind::DATE_ADD),
    TableEntry::builtin_function("DATE_SUB", TokenKind::DATE_SUB),
    TableEntry::builtin_function("EXTRACT", TokenKind::EXTRACT),
    TableEntry::builtin_function("GROUP_CONCAT", TokenKind::GROUP_CONCAT),
    TableEntry::builtin_function("MAX", TokenKind::MAX),
    TableEntry::builtin_function("MID", TokenKind::MID),
    TableEntry::builtin_function("MIN", TokenKind::MIN),
    TableEntry::builtin_function("NOW", TokenKind::NOW),
    TableEntry::builtin_function("POSITION", TokenKind::POSITION),
    TableEntry::builtin_function("SESSION_USER", TokenKind::SESSION_USER),
    TableEntry::builtin_function("STD", TokenKind::STD),
    TableEntry::builtin_function("STDDEV", TokenKind::STDDEV),
    TableEntry::builtin_function("STDDEV_POP", TokenKind::STDDEV_POP),
    TableEntry::builtin_function("STDDEV_SAMP", TokenKind::STDDEV_SAMP),
    TableEntry::builtin_function("SUBDATE", TokenKind::SUBDATE),
    TableEntry::builtin_function("SUBSTR", TokenKind::SUBSTR),
    TableEntry::builtin_function("SUBSTRING", TokenKind::SUBSTRING),
    TableEntry::builtin_function("SUM", TokenKind::SUM),
    TableEntry::builtin_function("SYSDATE", TokenKind::SYSDATE),
    TableEntry::builtin_function("SYSTEM_USER", TokenKind::SYSTEM_USER),
    TableEntry::builtin_function("TRIM", TokenKind::TRIM),
    TableEntry::builtin_function("VAR_POP", TokenKind::VAR_POP),
    TableEntry::builtin_function("VAR_SAMP", TokenKind::VAR_SAMP),
    TableEntry::builtin_function("VARIANCE", TokenKind::VARIANCE),
];

/// Keywords after which `/*+ ... */` is kept as an optimizer hint.
pub fn is_hintable(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::SELECT
            | TokenKind::INSERT
            | TokenKind::UPDATE
            | TokenKind::DELETE
            | TokenKind::REPLACE
    )
}

/// Charsets accepted in `_charset` introducers, by canonical name.
pub const CHARSETS: &[&str] = &[
    "utf8", "utf8mb4", "ascii", "latin1", "binary", "gbk", "gb18030",
];

/// Canonical name of a charset, matched case-insensitively.
pub fn charset(name: &[u8]) -> Option<&'static str> {
    CHARSETS
        .iter()
        .copied()
        .find(|cs| cs.as_bytes().eq_ignore_ascii_case(name))
}

/// Feature ids accepted inside `/*T![...] */` comments.
pub const FEATURE_IDS: &[&str] = &[
    "auto_rand",
    "auto_id_cache",
    "auto_rand_base",
    "clustered_index",
    "force_inc",
    "placement",
    "ttl",
    "resource_group",
    "global_index",
];

pub fn is_supported_feature(id: &[u8]) -> bool {
    FEATURE_IDS.iter().any(|f| f.as_bytes() == id)
}

#[cfg(test)]
mod tests;
