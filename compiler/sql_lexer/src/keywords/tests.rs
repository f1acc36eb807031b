use super::*;
use pretty_assertions::assert_eq;
use rustc_hash::FxHashSet;

use crate::EntryClass;

#[test]
fn entries_are_unique() {
    let mut seen = FxHashSet::default();
    for entry in DEFAULT_ENTRIES {
        assert!(
            seen.insert(entry.text.to_ascii_uppercase()),
            "duplicate entry {:?}",
            entry.text
        );
    }
}

#[test]
fn keyword_text_matches_kind_name() {
    for entry in DEFAULT_ENTRIES {
        if entry.class != EntryClass::Operator {
            assert_eq!(entry.kind.name(), Some(entry.text));
        }
    }
}

#[test]
fn single_byte_operators_use_their_byte() {
    for entry in DEFAULT_ENTRIES {
        if entry.class == EntryClass::Operator && entry.text.len() == 1 {
            assert_eq!(entry.kind.as_byte(), Some(entry.text.as_bytes()[0]));
        }
    }
}

#[test]
fn hintable_keywords() {
    assert!(is_hintable(TokenKind::SELECT));
    assert!(is_hintable(TokenKind::REPLACE));
    assert!(!is_hintable(TokenKind::FROM));
    assert!(!is_hintable(TokenKind::EOF));
}

#[test]
fn charsets_resolve_to_canonical_name() {
    assert_eq!(charset(b"UTF8MB4"), Some("utf8mb4"));
    assert_eq!(charset(b"latin1"), Some("latin1"));
    assert_eq!(charset(b"ebcdic"), None);
    assert_eq!(charset(b""), None);
}

#[test]
fn feature_ids_are_exact() {
    assert!(is_supported_feature(b"auto_rand"));
    assert!(is_supported_feature(b"global_index"));
    assert!(!is_supported_feature(b"AUTO_RAND"));
    assert!(!is_supported_feature(b"unsupported"));
}
