//! Integration tests for version queries and unit conversion.

#[macro_use]
mod common;

use pangoffi::convert::{self, SCALE};
use pangoffi::version;
use pretty_assertions::assert_eq;

#[test]
fn test_version_string_matches_version() {
    require_pango!();
    let encoded = version::version().unwrap();
    let parts: Vec<i32> = version::version_string()
        .unwrap()
        .split('.')
        .map(|part| part.parse().unwrap())
        .collect();
    assert_eq!(parts.len(), 3);
    assert_eq!(version::version_encode(parts[0], parts[1], parts[2]), encoded);
}

#[test]
fn test_version_check() {
    require_pango!();
    assert_eq!(version::version_check(1, 0, 0).unwrap(), None);
    assert!(version::version_at_least(1, 0, 0).unwrap());

    assert!(version::version_check(99, 0, 0).unwrap().is_some());
    assert!(!version::version_at_least(99, 0, 0).unwrap());
}

#[test]
fn test_units_to_and_from_double() {
    require_pango!();
    assert_eq!(convert::units_to_double(SCALE).unwrap(), 1.0);
    assert_eq!(convert::units_to_double(SCALE / 2).unwrap(), 0.5);
    assert_eq!(convert::units_from_double(2.5).unwrap(), 5 * SCALE / 2);
}

#[test]
fn test_pixel_conversion_without_the_library() {
    assert_eq!(convert::units_to_pixels(3 * SCALE / 2), 2);
    assert_eq!(convert::units_to_pixels_floor(3 * SCALE / 2), 1);
    assert_eq!(convert::units_to_pixels_ceil(SCALE + 1), 2);
    assert_eq!(convert::units_round(3 * SCALE / 2), 2 * SCALE);
}
