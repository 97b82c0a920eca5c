//! Integration tests for attributes and attribute lists.

#[macro_use]
mod common;

use pangoffi::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_new_attributes_cover_the_whole_text() {
    require_pango!();
    let attr = Attribute::new_size(8 * pangoffi::convert::SCALE).unwrap();
    assert_eq!(attr.start_index(), ATTR_INDEX_FROM_TEXT_BEGINNING);
    assert_eq!(attr.end_index(), ATTR_INDEX_TO_TEXT_END);
}

#[test]
fn test_start_and_end_index() {
    require_pango!();
    let mut attr = Attribute::new_size(8).unwrap().with_range(5, 9).unwrap();
    assert_eq!((attr.start_index(), attr.end_index()), (5, 9));

    attr.set_start_index(8).unwrap();
    attr.set_end_index(10);
    assert_eq!((attr.start_index(), attr.end_index()), (8, 10));

    assert!(attr.set_start_index(ATTR_INDEX_TO_TEXT_END).is_err());
    assert_eq!(attr.start_index(), 8);
}

#[test]
fn test_equality_compares_values() {
    require_pango!();
    let a = Attribute::new_size(4).unwrap();
    let b = Attribute::new_size(4).unwrap();
    let c = Attribute::new_family("aaaa").unwrap();
    assert_eq!(a, b);
    assert_ne!(b, c);
    assert_ne!(a, Attribute::new_size_absolute(4).unwrap());
}

#[test]
fn test_copy_keeps_the_range() {
    require_pango!();
    let attr = Attribute::new_rise(3).unwrap().with_range(1, 2).unwrap();
    let copy = attr.copy().unwrap();
    assert_ne!(attr.as_ptr(), copy.as_ptr());
    assert_eq!(attr, copy);
    assert_eq!((copy.start_index(), copy.end_index()), (1, 2));
}

#[test]
fn test_every_constructor() {
    require_pango!();
    let language = Language::from_string("en").unwrap().unwrap();
    let desc = FontDescription::from_string("Sans 12").unwrap();
    let red = Color::new(0xffff, 0, 0);
    let rect = Rectangle::new(0, 0, 10, 10);

    let attrs = [
        Attribute::new_language(&language),
        Attribute::new_family("Sans"),
        Attribute::new_style(Style::Italic),
        Attribute::new_variant(Variant::SmallCaps),
        Attribute::new_stretch(Stretch::Condensed),
        Attribute::new_weight(Weight::Bold),
        Attribute::new_weight(450),
        Attribute::new_size(10),
        Attribute::new_size_absolute(10),
        Attribute::new_font_description(&desc),
        Attribute::new_font_features("liga=0"),
        Attribute::new_fallback(false),
        Attribute::new_scale(1.5),
        Attribute::new_foreground(red),
        Attribute::new_background(red),
        Attribute::new_foreground_alpha(0x8000),
        Attribute::new_background_alpha(0x8000),
        Attribute::new_strikethrough(true),
        Attribute::new_strikethrough_color(red),
        Attribute::new_underline(Underline::Double),
        Attribute::new_underline_color(red),
        Attribute::new_shape(rect, rect),
        Attribute::new_rise(-2),
        Attribute::new_letter_spacing(1024),
        Attribute::new_gravity(Gravity::East),
        Attribute::new_gravity_hint(GravityHint::Strong),
    ];
    for attr in attrs {
        attr.unwrap();
    }
}

#[test]
fn test_invalid_arguments_are_rejected() {
    require_pango!();
    assert!(matches!(
        Attribute::new_weight(1200),
        Err(PangoError::InvalidArgument { name: "weight", .. })
    ));
    assert!(Attribute::new_size(-1).is_err());
    assert!(Attribute::new_size_absolute(-1).is_err());
    assert!(Attribute::new_gravity(Gravity::Auto).is_err());
}

#[test]
fn test_list_insert_and_change() {
    require_pango!();
    if !common::pango_at_least(1, 46) {
        return;
    }
    let list = AttrList::new().unwrap();
    list.insert(Attribute::new_size(5).unwrap().with_range(1, 4).unwrap()).unwrap();
    list.insert_before(Attribute::new_foreground_alpha(6).unwrap().with_range(2, 4).unwrap())
        .unwrap();

    let inserted = AttrList::new().unwrap();
    inserted.insert(Attribute::new_size(5).unwrap().with_range(1, 4).unwrap()).unwrap();
    inserted.insert(Attribute::new_foreground_alpha(6).unwrap().with_range(2, 4).unwrap())
        .unwrap();
    assert_eq!(list, inserted);

    // An equal overlapping size extends the existing one.
    list.change(Attribute::new_size(5).unwrap().with_range(1, 6).unwrap()).unwrap();
    let changed = AttrList::new().unwrap();
    changed.insert(Attribute::new_size(5).unwrap().with_range(1, 6).unwrap()).unwrap();
    changed.insert(Attribute::new_foreground_alpha(6).unwrap().with_range(2, 4).unwrap())
        .unwrap();
    assert_eq!(list, changed);
    assert_ne!(list, inserted);
}

#[test]
fn test_list_copy_is_deep() {
    require_pango!();
    if !common::pango_at_least(1, 46) {
        return;
    }
    let list = AttrList::new().unwrap();
    list.insert(Attribute::new_size(10).unwrap()).unwrap();
    let copy = list.copy().unwrap();
    assert_ne!(list.as_ptr(), copy.as_ptr());
    assert_eq!(list, copy);

    copy.insert(Attribute::new_rise(1).unwrap()).unwrap();
    assert_ne!(list, copy);
}

#[test]
fn test_empty_lists_are_equal() {
    require_pango!();
    if !common::pango_at_least(1, 46) {
        return;
    }
    assert_eq!(AttrList::new().unwrap(), AttrList::new().unwrap());
}

#[test]
fn test_splice() {
    require_pango!();
    let base = AttrList::new().unwrap();
    base.insert(Attribute::new_size(10).unwrap()).unwrap();

    let list = base.copy().unwrap();
    list.splice(&AttrList::new().unwrap(), 11, 5).unwrap();

    let list = base.copy().unwrap();
    let other = AttrList::new().unwrap();
    other.insert(Attribute::new_size(20).unwrap().with_range(0, 3).unwrap()).unwrap();
    other.insert(Attribute::new_stretch(Stretch::SemiCondensed).unwrap().with_range(2, 4).unwrap())
        .unwrap();
    list.splice(&other, 11, 5).unwrap();

    if common::pango_at_least(1, 46) {
        assert_ne!(list, base);
    }
}
