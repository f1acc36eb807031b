use super::*;
use pretty_assertions::assert_eq;

use crate::config::{ScannerConfig, SqlMode};
use crate::error::{ScanError, ScanErrorKind, ScanWarningKind};
use sql_lexer_core::Position;

fn state() -> ScanState {
    ScanState::new(ScannerConfig::default())
}

fn run_with<'a>(handler: Handler, src: &'a str, st: &mut ScanState) -> (Step<'a>, usize) {
    let mut r = SourceReader::from(src);
    let step = run(handler, &mut r, st);
    (step, r.offset())
}

fn run_on(handler: Handler, src: &str) -> (Step<'_>, usize) {
    run_with(handler, src, &mut state())
}

fn emit(kind: TokenKind, lit: &[u8]) -> Step<'_> {
    Step::Emit(Token::new(kind, Position::START, lit))
}

fn byte(b: u8) -> TokenKind {
    TokenKind::from_byte(b)
}

// === Identifiers ===

#[test]
fn identifier_stops_at_non_ident_char() {
    assert_eq!(
        run_on(Handler::Identifier, "abc$_1 x"),
        (emit(TokenKind::IDENTIFIER, b"abc$_1"), 6)
    );
    assert_eq!(
        run_on(Handler::Identifier, "a中文.b"),
        (emit(TokenKind::IDENTIFIER, "a中文".as_bytes()), 7)
    );
}

#[test]
fn ident_char_classes() {
    assert!(is_ident_char(Rune::from('$')));
    assert!(is_ident_char(Rune::from('中')));
    assert!(!is_ident_char(Rune::from('.')));
    assert!(!is_ident_char(Rune::EOF));
    assert!(is_user_var_char(Rune::from('.')));
    assert!(!is_user_var_char(Rune::from('@')));
}

// === Strings ===

#[test]
fn string_with_doubled_quote() {
    assert_eq!(
        run_on(Handler::String, "'hel''lo'"),
        (emit(TokenKind::STRING_LITERAL, b"hel'lo"), 9)
    );
    assert_eq!(
        run_on(Handler::String, r#""a""b""#),
        (emit(TokenKind::STRING_LITERAL, b"a\"b"), 6)
    );
}

#[test]
fn plain_string_borrows_input() {
    let (step, _) = run_on(Handler::String, "'abc' x");
    assert!(matches!(
        step,
        Step::Emit(Token {
            lit: Cow::Borrowed(b"abc"),
            ..
        })
    ));
}

#[test]
fn other_quote_is_literal() {
    assert_eq!(
        run_on(Handler::String, r#"'say "hi"'"#),
        (emit(TokenKind::STRING_LITERAL, b"say \"hi\""), 10)
    );
}

#[test]
fn backslash_escapes() {
    assert_eq!(
        run_on(Handler::String, r"'a\nb\%\_\x'"),
        (emit(TokenKind::STRING_LITERAL, b"a\nb\\%\\_x"), 12)
    );
    assert_eq!(
        run_on(Handler::String, r"'\t\r\b\0\Z\\'"),
        (emit(TokenKind::STRING_LITERAL, b"\t\r\x08\0\x1A\\"), 14)
    );
    assert_eq!(
        run_on(Handler::String, r"'it\'s'"),
        (emit(TokenKind::STRING_LITERAL, b"it's"), 7)
    );
}

#[test]
fn escaped_multibyte_rune_is_kept_whole() {
    assert_eq!(
        run_on(Handler::String, "'\\中'"),
        (emit(TokenKind::STRING_LITERAL, "中".as_bytes()), 6)
    );
}

#[test]
fn no_backslash_escapes_keeps_backslash() {
    let mut st = ScanState::new(ScannerConfig::default().with_sql_mode(SqlMode::NO_BACKSLASH_ESCAPES));
    assert_eq!(
        run_with(Handler::String, r"'a\n'", &mut st),
        (emit(TokenKind::STRING_LITERAL, br"a\n"), 5)
    );
    assert_eq!(
        run_with(Handler::String, r"'a\'", &mut st),
        (emit(TokenKind::STRING_LITERAL, br"a\"), 4)
    );
}

#[test]
fn unterminated_string() {
    let mut st = state();
    assert_eq!(
        run_with(Handler::String, "'abc", &mut st),
        (emit(TokenKind::INVALID, b"'abc"), 4)
    );
    assert_eq!(
        st.errors,
        vec![ScanError {
            kind: ScanErrorKind::UnterminatedString,
            pos: Position::START,
        }]
    );
    assert_eq!(
        run_on(Handler::String, r"'a\"),
        (emit(TokenKind::INVALID, br"'a\"), 3)
    );
}

// === Quoted identifiers ===

#[test]
fn quoted_identifier_with_doubled_backtick() {
    assert_eq!(
        run_on(Handler::QuotedIdent, "`greater``hello world`"),
        (emit(TokenKind::QUOTED_IDENTIFIER, b"greater`hello world"), 22)
    );
    assert_eq!(
        run_on(Handler::QuotedIdent, "``"),
        (emit(TokenKind::QUOTED_IDENTIFIER, b""), 2)
    );
}

#[test]
fn unterminated_quoted_identifier() {
    let mut st = state();
    assert_eq!(
        run_with(Handler::QuotedIdent, "`abc", &mut st),
        (emit(TokenKind::INVALID, b"`abc"), 4)
    );
    assert_eq!(st.errors[0].kind, ScanErrorKind::UnterminatedQuotedIdentifier);
}

// === Numbers ===

#[test]
fn numeric_forms() {
    let cases: &[(&str, TokenKind, &str)] = &[
        ("0", TokenKind::INT_LITERAL, "0"),
        ("01234567", TokenKind::INT_LITERAL, "01234567"),
        ("0128", TokenKind::INT_LITERAL, "0128"),
        ("123", TokenKind::INT_LITERAL, "123"),
        ("0x1F", TokenKind::HEX_LITERAL, "0x1F"),
        ("0XaB", TokenKind::HEX_LITERAL, "0XaB"),
        ("0b101", TokenKind::BIT_LITERAL, "0b101"),
        ("1.5", TokenKind::DECIMAL_LITERAL, "1.5"),
        ("0.5", TokenKind::DECIMAL_LITERAL, "0.5"),
        ("1.", TokenKind::DECIMAL_LITERAL, "1."),
        ("1e10", TokenKind::FLOAT_LITERAL, "1e10"),
        ("1.5e-3", TokenKind::FLOAT_LITERAL, "1.5e-3"),
        ("2E+7", TokenKind::FLOAT_LITERAL, "2E+7"),
        ("1.e5", TokenKind::FLOAT_LITERAL, "1.e5"),
    ];
    for &(src, kind, lit) in cases {
        assert_eq!(
            run_on(Handler::Number, src),
            (emit(kind, lit.as_bytes()), lit.len()),
            "{src}"
        );
    }
}

#[test]
fn digit_led_identifiers() {
    let cases: &[(&str, &str)] = &[
        ("0x", "0x"),
        ("0xg", "0xg"),
        ("0x7fz3", "0x7fz3"),
        ("0b", "0b"),
        ("0b12", "0b12"),
        ("0B1", "0B1"),
        ("123abc", "123abc"),
        ("9est", "9est"),
        ("1e", "1e"),
        ("12e+", "12e"),
        ("1_000 ", "1_000"),
    ];
    for &(src, lit) in cases {
        assert_eq!(
            run_on(Handler::Number, src),
            (emit(TokenKind::IDENTIFIER, lit.as_bytes()), lit.len()),
            "{src}"
        );
    }
}

#[test]
fn number_stops_at_operator() {
    assert_eq!(
        run_on(Handler::Number, "0x1f.5"),
        (emit(TokenKind::HEX_LITERAL, b"0x1f"), 4)
    );
    assert_eq!(
        run_on(Handler::Number, "42)"),
        (emit(TokenKind::INT_LITERAL, b"42"), 2)
    );
}

#[test]
fn digits_after_identifier_dot_are_a_name() {
    let mut st = state();
    st.identifier_dot = true;
    assert_eq!(
        run_with(Handler::Number, "1e5 ", &mut st),
        (emit(TokenKind::IDENTIFIER, b"1e5"), 3)
    );
}

// === Dot ===

#[test]
fn leading_dot_numbers() {
    assert_eq!(
        run_on(Handler::Dot, ".5"),
        (emit(TokenKind::DECIMAL_LITERAL, b".5"), 2)
    );
    assert_eq!(
        run_on(Handler::Dot, ".5e3"),
        (emit(TokenKind::FLOAT_LITERAL, b".5e3"), 4)
    );
    assert_eq!(run_on(Handler::Dot, ".a"), (emit(byte(b'.'), b"."), 1));
    assert_eq!(run_on(Handler::Dot, "."), (emit(byte(b'.'), b"."), 1));
}

#[test]
fn leading_dot_without_exponent_digits_is_invalid() {
    assert_eq!(
        run_on(Handler::Dot, ".5e+x"),
        (emit(TokenKind::INVALID, b".5e"), 3)
    );
}

#[test]
fn dot_after_identifier_is_qualifier() {
    let mut st = state();
    st.identifier_dot = true;
    assert_eq!(
        run_with(Handler::Dot, ".5", &mut st),
        (emit(byte(b'.'), b"."), 1)
    );
}

// === x'..' / b'..' / N'..' ===

#[test]
fn quoted_hex_and_bit() {
    assert_eq!(
        run_on(Handler::HexPrefix, "x'1F'"),
        (emit(TokenKind::HEX_LITERAL, b"x'1F'"), 5)
    );
    assert_eq!(
        run_on(Handler::HexPrefix, "X''"),
        (emit(TokenKind::HEX_LITERAL, b"X''"), 3)
    );
    assert_eq!(
        run_on(Handler::BitPrefix, "b'1010'"),
        (emit(TokenKind::BIT_LITERAL, b"b'1010'"), 7)
    );
}

#[test]
fn bad_quoted_hex_and_bit() {
    let mut st = state();
    assert_eq!(
        run_with(Handler::HexPrefix, "x'123456x'", &mut st),
        (emit(TokenKind::INVALID, b"x'123456"), 8)
    );
    assert_eq!(
        run_with(Handler::BitPrefix, "B'102'", &mut st),
        (emit(TokenKind::INVALID, b"B'10"), 4)
    );
    let kinds: Vec<_> = st.errors.iter().map(|e| e.kind).collect();
    assert_eq!(
        kinds,
        vec![ScanErrorKind::InvalidHexLiteral, ScanErrorKind::InvalidBitLiteral]
    );
}

#[test]
fn prefix_letter_without_quote_is_identifier() {
    assert_eq!(
        run_on(Handler::HexPrefix, "xyz"),
        (emit(TokenKind::IDENTIFIER, b"xyz"), 3)
    );
    assert_eq!(
        run_on(Handler::BitPrefix, "bar "),
        (emit(TokenKind::IDENTIFIER, b"bar"), 3)
    );
    assert_eq!(
        run_on(Handler::HexPrefix, "x"),
        (emit(TokenKind::IDENTIFIER, b"x"), 1)
    );
}

#[test]
fn national_prefix() {
    assert_eq!(
        run_on(Handler::NationalPrefix, "N'abc'"),
        (emit(TokenKind::UNDERSCORE_CHARSET, b"utf8"), 1)
    );
    assert_eq!(
        run_on(Handler::NationalPrefix, "n'abc'"),
        (emit(TokenKind::UNDERSCORE_CHARSET, b"utf8"), 1)
    );
    assert_eq!(
        run_on(Handler::NationalPrefix, "nation"),
        (emit(TokenKind::IDENTIFIER, b"nation"), 6)
    );
    assert_eq!(
        run_on(Handler::NationalPrefix, "N"),
        (emit(TokenKind::IDENTIFIER, b"N"), 1)
    );
}

// === Version digits ===

#[test]
fn version_digits() {
    let cases: &[(&str, usize, usize, usize)] = &[
        ("12345abc", 5, 5, 5),
        ("123", 5, 5, 0),
        ("1234567", 5, 6, 6),
        ("12345", 5, 6, 5),
        ("abc", 0, 3, 0),
    ];
    for &(src, min, max, end) in cases {
        let mut r = SourceReader::from(src);
        scan_version_digits(&mut r, min, max);
        assert_eq!(r.offset(), end, "{src} ({min}, {max})");
    }
}

// === Comments ===

#[test]
fn lone_slash_is_division() {
    assert_eq!(run_on(Handler::Slash, "/ 2"), (emit(byte(b'/'), b"/"), 1));
}

#[test]
fn block_comments_are_skipped() {
    assert_eq!(run_on(Handler::Slash, "/* c */x"), (Step::Skip, 7));
    assert_eq!(run_on(Handler::Slash, "/**/x"), (Step::Skip, 4));
    assert_eq!(run_on(Handler::Slash, "/***/x"), (Step::Skip, 5));
    assert_eq!(run_on(Handler::Slash, "/* a * b **/x"), (Step::Skip, 12));
    assert_eq!(run_on(Handler::Slash, "/*M! x */"), (Step::Skip, 9));
}

#[test]
fn unterminated_comment() {
    let mut st = state();
    assert_eq!(
        run_with(Handler::Slash, "/* c", &mut st),
        (emit(TokenKind::INVALID, b"/* c"), 4)
    );
    assert_eq!(
        run_with(Handler::Slash, "/*", &mut st),
        (emit(TokenKind::INVALID, b"/*"), 2)
    );
    assert_eq!(st.errors.len(), 2);
    assert_eq!(st.errors[1].kind, ScanErrorKind::UnterminatedComment);
}

#[test]
fn vendor_comment_opens_code_block() {
    let mut st = state();
    assert_eq!(
        run_with(Handler::Slash, "/*!40101 select", &mut st),
        (Step::Skip, 8)
    );
    assert!(st.in_bang_comment);

    let mut st = state();
    assert_eq!(run_with(Handler::Slash, "/*!select", &mut st), (Step::Skip, 3));
    assert!(st.in_bang_comment);
}

#[test]
fn feature_comments() {
    let mut st = state();
    assert_eq!(
        run_with(Handler::Slash, "/*T![auto_rand] x */", &mut st),
        (Step::Skip, 15)
    );
    assert!(st.in_bang_comment);

    let mut st = state();
    assert_eq!(
        run_with(Handler::Slash, "/*T![ttl,placement] x */", &mut st),
        (Step::Skip, 19)
    );
    assert!(st.in_bang_comment);

    let mut st = state();
    assert_eq!(
        run_with(Handler::Slash, "/*T![nope] x */", &mut st),
        (Step::Skip, 15)
    );
    assert!(!st.in_bang_comment);

    let mut st = state();
    assert_eq!(run_with(Handler::Slash, "/*T! x */", &mut st), (Step::Skip, 4));
    assert!(st.in_bang_comment);
}

#[test]
fn hint_after_select() {
    let mut st = state();
    st.shift_keyword(TokenKind::SELECT);
    assert_eq!(
        run_with(Handler::Slash, "/*+ HINT */ 1", &mut st),
        (emit(TokenKind::HINT_COMMENT, b"/*+ HINT */"), 11)
    );
    assert_eq!(st.last_hint_pos, Some(Position::START));
}

#[test]
fn hint_needs_hintable_keyword() {
    let mut st = state();
    st.shift_keyword(TokenKind::FROM);
    assert_eq!(run_with(Handler::Slash, "/*+ HINT */", &mut st), (Step::Skip, 11));
    assert_eq!(st.last_hint_pos, None);
}

#[test]
fn hint_after_for_update_is_ignored() {
    let mut st = state();
    st.shift_keyword(TokenKind::FOR);
    st.shift_keyword(TokenKind::UPDATE);
    assert_eq!(run_with(Handler::Slash, "/*+ HINT */", &mut st), (Step::Skip, 11));
    assert_eq!(st.warnings.len(), 1);
    assert_eq!(st.warnings[0].kind, ScanWarningKind::IgnoredOptimizerHint);
}

#[test]
fn hint_in_create_binding_for_update() {
    let mut st = state();
    st.shift_keyword(TokenKind::BINDING);
    st.shift_keyword(TokenKind::FOR);
    st.shift_keyword(TokenKind::UPDATE);
    assert_eq!(
        run_with(Handler::Slash, "/*+ HINT */", &mut st),
        (emit(TokenKind::HINT_COMMENT, b"/*+ HINT */"), 11)
    );
    assert!(st.warnings.is_empty());
}

#[test]
fn star_closes_vendor_block() {
    let mut st = state();
    st.in_bang_comment = true;
    assert_eq!(run_with(Handler::Star, "*/ x", &mut st), (Step::Skip, 2));
    assert!(!st.in_bang_comment);

    st.identifier_dot = true;
    assert_eq!(
        run_with(Handler::Star, "*/ x", &mut st),
        (emit(byte(b'*'), b"*"), 1)
    );
    assert!(!st.identifier_dot);
}

#[test]
fn sharp_comment_runs_to_newline() {
    assert_eq!(run_on(Handler::Sharp, "# c\nx"), (Step::Skip, 3));
    assert_eq!(run_on(Handler::Sharp, "#"), (Step::Skip, 1));
}

#[test]
fn dash_forms() {
    assert_eq!(run_on(Handler::Dash, "-- c\nx"), (Step::Skip, 4));
    assert_eq!(run_on(Handler::Dash, "--\tc"), (Step::Skip, 4));
    assert_eq!(run_on(Handler::Dash, "--"), (Step::Skip, 2));
    assert_eq!(run_on(Handler::Dash, "--1"), (emit(byte(b'-'), b"-"), 1));
    assert_eq!(
        run_on(Handler::Dash, "->>'$.a'"),
        (emit(TokenKind::JSON_UNQUOTE_EXTRACT, b"->>"), 3)
    );
    assert_eq!(
        run_on(Handler::Dash, "->'$.a'"),
        (emit(TokenKind::JSON_EXTRACT, b"->"), 2)
    );
    assert_eq!(run_on(Handler::Dash, "-"), (emit(byte(b'-'), b"-"), 1));
}

// === Variables ===

#[test]
fn user_variables() {
    let cases: &[(&str, &[u8], usize)] = &[
        ("@a_3cbbc", b"a_3cbbc", 8),
        ("@a.b ", b"a.b", 4),
        ("@'x y'", b"x y", 6),
        ("@\"q\"", b"q", 4),
        ("@`q``r`", b"q`r", 7),
        ("@ x", b"", 1),
    ];
    for &(src, lit, end) in cases {
        assert_eq!(
            run_on(Handler::At, src),
            (emit(TokenKind::SINGLE_AT_IDENTIFIER, lit), end),
            "{src}"
        );
    }
}

#[test]
fn system_variables() {
    let cases: &[(&str, &[u8], usize)] = &[
        ("@@x", b"@@x", 3),
        ("@@global.max_connections", b"@@global.max_connections", 24),
        ("@@SESSION.sql_mode,", b"@@SESSION.sql_mode", 18),
        ("@@local.`a b`", b"@@local.a b", 13),
        ("@@'v'", b"@@v", 5),
        ("@@global", b"@@global", 8),
    ];
    for &(src, lit, end) in cases {
        assert_eq!(
            run_on(Handler::At, src),
            (emit(TokenKind::DOUBLE_AT_IDENTIFIER, lit), end),
            "{src}"
        );
    }
}

#[test]
fn broken_variables_are_invalid() {
    assert_eq!(run_on(Handler::At, "@"), (emit(TokenKind::INVALID, b"@"), 1));
    assert_eq!(run_on(Handler::At, "@@"), (emit(TokenKind::INVALID, b"@@"), 2));
    assert_eq!(run_on(Handler::At, "@@ x"), (emit(TokenKind::INVALID, b"@@"), 2));
    let mut st = state();
    assert_eq!(
        run_with(Handler::At, "@'abc", &mut st),
        (emit(TokenKind::INVALID, b"@'abc"), 5)
    );
    assert_eq!(st.errors[0].kind, ScanErrorKind::UnterminatedString);
}
