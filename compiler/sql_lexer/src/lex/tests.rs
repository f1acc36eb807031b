use super::*;
use pretty_assertions::assert_eq;

use crate::{DispatchTable, ScannerConfig};

fn lex_with(src: &str, config: ScannerConfig) -> Vec<(TokenKind, String)> {
    let mut s = Scanner::with_table(src, DispatchTable::shared(), config);
    let mut out = Vec::new();
    loop {
        let tok = s.lex();
        if tok.is_eof() {
            return out;
        }
        out.push((tok.kind, tok.text().into_owned()));
    }
}

fn kinds_with(src: &str, config: ScannerConfig) -> Vec<TokenKind> {
    lex_with(src, config).into_iter().map(|(k, _)| k).collect()
}

fn kinds(src: &str) -> Vec<TokenKind> {
    kinds_with(src, ScannerConfig::default())
}

fn mode(mode: SqlMode) -> ScannerConfig {
    ScannerConfig::default().with_sql_mode(mode)
}

const IDENT: TokenKind = TokenKind::IDENTIFIER;

// === Keywords ===

#[test]
fn keywords_resolve_case_insensitively() {
    assert_eq!(
        kinds("SELECT a FROM t"),
        vec![TokenKind::SELECT, IDENT, TokenKind::FROM, IDENT]
    );
    let toks = lex_with("SeLeCt", ScannerConfig::default());
    assert_eq!(toks, vec![(TokenKind::SELECT, "SeLeCt".to_owned())]);
}

#[test]
fn qualified_names_are_not_keywords() {
    assert_eq!(
        kinds("select t.select from t"),
        vec![
            TokenKind::SELECT,
            IDENT,
            TokenKind::from_byte(b'.'),
            IDENT,
            TokenKind::FROM,
            IDENT
        ]
    );
    assert_eq!(
        kinds("select.a"),
        vec![IDENT, TokenKind::from_byte(b'.'), IDENT]
    );
}

#[test]
fn builtin_functions_need_a_paren() {
    assert_eq!(
        kinds("count(*)"),
        vec![
            TokenKind::COUNT,
            TokenKind::from_byte(b'('),
            TokenKind::from_byte(b'*'),
            TokenKind::from_byte(b')')
        ]
    );
    assert_eq!(kinds("count"), vec![IDENT]);
    assert_eq!(kinds("count (x)")[0], IDENT);
    assert_eq!(
        kinds_with("count (x)", mode(SqlMode::IGNORE_SPACE))[0],
        TokenKind::COUNT
    );
}

#[test]
fn window_functions_follow_config() {
    assert_eq!(kinds("rank over"), vec![TokenKind::RANK, TokenKind::OVER]);
    let off = ScannerConfig::default().with_window_functions(false);
    assert_eq!(kinds_with("rank over", off), vec![IDENT, IDENT]);
}

#[test]
fn quoted_identifier_is_identifier() {
    assert_eq!(
        lex_with("`select`", ScannerConfig::default()),
        vec![(IDENT, "select".to_owned())]
    );
}

// === Charset introducers ===

#[test]
fn charset_introducers() {
    assert_eq!(
        lex_with("_utf8mb4'abc'", ScannerConfig::default()),
        vec![
            (TokenKind::UNDERSCORE_CHARSET, "utf8mb4".to_owned()),
            (TokenKind::STRING_LITERAL, "abc".to_owned()),
        ]
    );
    assert_eq!(
        lex_with("_LATIN1", ScannerConfig::default()),
        vec![(TokenKind::UNDERSCORE_CHARSET, "latin1".to_owned())]
    );
    assert_eq!(kinds("_foo _"), vec![IDENT, IDENT]);
}

// === Modes ===

#[test]
fn ansi_quotes_makes_double_quotes_identifiers() {
    let ansi = mode(SqlMode::ANSI_QUOTES);
    assert_eq!(
        lex_with("\"a b\" 'c'", ansi),
        vec![
            (IDENT, "a b".to_owned()),
            (TokenKind::STRING_LITERAL, "c".to_owned()),
        ]
    );
    assert_eq!(kinds("\"a b\""), vec![TokenKind::STRING_LITERAL]);
}

#[test]
fn pipes_follow_mode() {
    assert_eq!(kinds("a || b")[1], TokenKind::PIPES_AS_OR);
    assert_eq!(
        kinds_with("a || b", mode(SqlMode::PIPES_AS_CONCAT))[1],
        TokenKind::PIPES
    );
    let ansi: SqlMode = "ANSI".parse().unwrap();
    assert_eq!(kinds_with("a || b", mode(ansi))[1], TokenKind::PIPES);
}

#[test]
fn not_precedence() {
    assert_eq!(kinds("not a"), vec![TokenKind::NOT, IDENT]);
    assert_eq!(
        kinds_with("not a", mode(SqlMode::HIGH_NOT_PRECEDENCE)),
        vec![TokenKind::NOT2, IDENT]
    );
}

// === History ===

#[test]
fn unresolved_word_clears_last_keyword() {
    let mut s = Scanner::new("a.select /*+ x */");
    while !s.lex().is_eof() {}
    assert_eq!(s.last_hint_pos(), None);

    let mut s = Scanner::new("select /*+ x */");
    assert_eq!(s.lex().kind, TokenKind::SELECT);
    assert_eq!(s.state().last_keyword(0), TokenKind::SELECT);
    assert_eq!(s.lex().kind, TokenKind::HINT_COMMENT);
}

#[test]
fn resolved_builtin_is_recorded() {
    let mut s = Scanner::new("count(");
    s.lex();
    assert_eq!(s.state().last_keyword(0), TokenKind::COUNT);

    let mut s = Scanner::new("count ");
    s.lex();
    assert_eq!(s.state().last_keyword(0), TokenKind::EOF);
}
