//! Conversions between Pango units and device units.
//!
//! One device unit is [`SCALE`] Pango units. [`units_to_double`] and
//! [`units_from_double`] call into the native library; the integer helpers
//! are Rust equivalents of the `PANGO_PIXELS` family of C macros and need no
//! library at all.

use crate::core::error::PangoResult;
use crate::core::native;

/// Pango units per device unit.
pub const SCALE: i32 = pangoffi_sys::PANGO_SCALE;

/// Divides `i` by [`SCALE`].
pub fn units_to_double(i: i32) -> PangoResult<f64> {
    Ok(unsafe { native::pango()?.pango_units_to_double(i) }?)
}

/// Multiplies `d` by [`SCALE`] and rounds to the nearest integer.
pub fn units_from_double(d: f64) -> PangoResult<i32> {
    Ok(unsafe { native::pango()?.pango_units_from_double(d) }?)
}

/// Rounds Pango units to the nearest whole device unit (`PANGO_PIXELS`).
pub const fn units_to_pixels(d: i32) -> i32 {
    ((d as i64 + (SCALE / 2) as i64) >> 10) as i32
}

/// Device units, rounded down (`PANGO_PIXELS_FLOOR`).
pub const fn units_to_pixels_floor(d: i32) -> i32 {
    d >> 10
}

/// Device units, rounded up (`PANGO_PIXELS_CEIL`).
pub const fn units_to_pixels_ceil(d: i32) -> i32 {
    ((d as i64 + (SCALE - 1) as i64) >> 10) as i32
}

/// Rounds down to a whole number of device units, staying in Pango units.
pub const fn units_floor(d: i32) -> i32 {
    d & !(SCALE - 1)
}

/// Rounds up to a whole number of device units, staying in Pango units.
///
/// Values within one device unit of `i32::MAX` wrap, as in C.
pub const fn units_ceil(d: i32) -> i32 {
    d.wrapping_add(SCALE - 1) & !(SCALE - 1)
}

/// Rounds to the nearest whole number of device units, staying in Pango units.
///
/// Values within half a device unit of `i32::MAX` wrap, as in C.
pub const fn units_round(d: i32) -> i32 {
    d.wrapping_add(SCALE >> 1) & !(SCALE - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pixel_rounding() {
        assert_eq!(units_to_pixels(0), 0);
        assert_eq!(units_to_pixels(511), 0);
        assert_eq!(units_to_pixels(512), 1);
        assert_eq!(units_to_pixels(3 * SCALE), 3);
        assert_eq!(units_to_pixels(-512), 0);
        assert_eq!(units_to_pixels(-513), -1);
    }

    #[test]
    fn floor_and_ceil() {
        assert_eq!(units_to_pixels_floor(1023), 0);
        assert_eq!(units_to_pixels_ceil(1), 1);
        assert_eq!(units_to_pixels_ceil(1024), 1);
        assert_eq!(units_floor(2047), 1024);
        assert_eq!(units_ceil(1025), 2048);
        assert_eq!(units_round(1535), 1024);
        assert_eq!(units_round(1536), 2048);
        assert_eq!(units_floor(-1), -1024);
    }

    #[test]
    fn limits_do_not_overflow() {
        assert_eq!(units_to_pixels(i32::MAX), 2_097_152);
        assert_eq!(units_to_pixels(i32::MIN), -2_097_152);
        assert_eq!(units_to_pixels_ceil(i32::MAX), 2_097_152);
        assert_eq!(units_to_pixels_floor(i32::MIN), -2_097_152);
        assert_eq!(units_ceil(i32::MAX), i32::MIN);
        assert_eq!(units_round(i32::MAX), i32::MIN);
        assert_eq!(units_ceil(i32::MIN), i32::MIN);
    }
}
