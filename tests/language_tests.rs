//! Integration tests for language tags.

#[macro_use]
mod common;

use pangoffi::prelude::*;
use pretty_assertions::assert_eq;

fn language(tag: &str) -> Language {
    Language::from_string(tag).unwrap().unwrap()
}

#[test]
fn test_from_string_normalizes_the_tag() {
    require_pango!();
    let lang = language("pt_BR");
    assert_eq!(lang.as_str().unwrap(), "pt-br");
    assert_eq!(lang.to_string(), "pt-br");
}

#[test]
fn test_empty_tag_has_no_language() {
    require_pango!();
    assert!(Language::from_string("").unwrap().is_none());
}

#[test]
fn test_default_language() {
    require_pango!();
    let lang = Language::default().unwrap();
    assert!(!lang.as_str().unwrap().is_empty());
}

#[test]
fn test_preferred_is_none_or_non_empty() {
    require_pango!();
    if let Some(langs) = Language::preferred().unwrap() {
        assert!(!langs.is_empty());
    }
}

#[test]
fn test_sample_string() {
    require_pango!();
    assert!(!language("en-US").sample_string().unwrap().is_empty());
}

#[test]
fn test_matches() {
    require_pango!();
    let lang = language("pt_BR");
    for range in ["*", "pt", "pt;de", "pt:de", "pt,de", "pt-br"] {
        assert!(lang.matches(range).unwrap(), "{range} should match");
    }
    for range in ["pt_BR", "pt-de", "de", "de;se", "de:se", "de,se"] {
        assert!(!lang.matches(range).unwrap(), "{range} should not match");
    }
}

#[test]
fn test_equal_tags_are_the_same_language() {
    require_pango!();
    assert_eq!(language("pt_BR"), language("pt-br"));
    assert_ne!(language("pt_BR"), language("de-de"));
}
