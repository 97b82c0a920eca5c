#![allow(non_upper_case_globals)]

use crate::core::error::{PangoError, PangoResult};
use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use pangoffi_sys::*;

/// Converts a native enum value, reporting values this crate does not know.
pub(crate) fn from_native<E>(value: i32) -> PangoResult<E>
where
    E: TryFromPrimitive<Primitive = i32>,
{
    E::try_from_primitive(value).map_err(|_| PangoError::UnknownEnumValue {
        type_name: E::NAME,
        value: value.into(),
    })
}

/// Slant of a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum Style {
    Normal = PANGO_STYLE_NORMAL,
    Oblique = PANGO_STYLE_OBLIQUE,
    Italic = PANGO_STYLE_ITALIC,
}

/// Named font weights.
///
/// Pango accepts any integer in `100..=1000`; these are the predefined
/// points on that scale. Weight getters return the raw integer, which can
/// be converted back with `Weight::try_from`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum Weight {
    Thin = PANGO_WEIGHT_THIN,
    UltraLight = PANGO_WEIGHT_ULTRALIGHT,
    Light = PANGO_WEIGHT_LIGHT,
    SemiLight = PANGO_WEIGHT_SEMILIGHT,
    Book = PANGO_WEIGHT_BOOK,
    Normal = PANGO_WEIGHT_NORMAL,
    Medium = PANGO_WEIGHT_MEDIUM,
    SemiBold = PANGO_WEIGHT_SEMIBOLD,
    Bold = PANGO_WEIGHT_BOLD,
    UltraBold = PANGO_WEIGHT_ULTRABOLD,
    Heavy = PANGO_WEIGHT_HEAVY,
    UltraHeavy = PANGO_WEIGHT_ULTRAHEAVY,
}

impl Weight {
    pub const MIN: i32 = PANGO_WEIGHT_THIN;
    pub const MAX: i32 = PANGO_WEIGHT_ULTRAHEAVY;

    /// Whether `weight` is accepted by the native setters.
    pub fn is_valid(weight: i32) -> bool {
        (Self::MIN..=Self::MAX).contains(&weight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum Variant {
    Normal = PANGO_VARIANT_NORMAL,
    SmallCaps = PANGO_VARIANT_SMALL_CAPS,
}

/// Width of a font relative to its normal width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum Stretch {
    UltraCondensed = PANGO_STRETCH_ULTRA_CONDENSED,
    ExtraCondensed = PANGO_STRETCH_EXTRA_CONDENSED,
    Condensed = PANGO_STRETCH_CONDENSED,
    SemiCondensed = PANGO_STRETCH_SEMI_CONDENSED,
    Normal = PANGO_STRETCH_NORMAL,
    SemiExpanded = PANGO_STRETCH_SEMI_EXPANDED,
    Expanded = PANGO_STRETCH_EXPANDED,
    ExtraExpanded = PANGO_STRETCH_EXTRA_EXPANDED,
    UltraExpanded = PANGO_STRETCH_ULTRA_EXPANDED,
}

/// How partial lines are positioned within the layout width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum Alignment {
    Left = PANGO_ALIGN_LEFT,
    Center = PANGO_ALIGN_CENTER,
    Right = PANGO_ALIGN_RIGHT,
}

/// Where text is shortened with an ellipsis when it does not fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum EllipsizeMode {
    None = PANGO_ELLIPSIZE_NONE,
    Start = PANGO_ELLIPSIZE_START,
    Middle = PANGO_ELLIPSIZE_MIDDLE,
    End = PANGO_ELLIPSIZE_END,
}

/// Line wrapping strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum WrapMode {
    Word = PANGO_WRAP_WORD,
    Char = PANGO_WRAP_CHAR,
    WordChar = PANGO_WRAP_WORD_CHAR,
}

/// Direction the glyph baseline points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum Gravity {
    South = PANGO_GRAVITY_SOUTH,
    East = PANGO_GRAVITY_EAST,
    North = PANGO_GRAVITY_NORTH,
    West = PANGO_GRAVITY_WEST,
    Auto = PANGO_GRAVITY_AUTO,
}

impl Gravity {
    /// Whether text set with this gravity runs vertically.
    pub fn is_vertical(self) -> bool {
        matches!(self, Gravity::East | Gravity::West)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum GravityHint {
    Natural = PANGO_GRAVITY_HINT_NATURAL,
    Strong = PANGO_GRAVITY_HINT_STRONG,
    Line = PANGO_GRAVITY_HINT_LINE,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum Underline {
    None = PANGO_UNDERLINE_NONE,
    Single = PANGO_UNDERLINE_SINGLE,
    Double = PANGO_UNDERLINE_DOUBLE,
    Low = PANGO_UNDERLINE_LOW,
    Error = PANGO_UNDERLINE_ERROR,
    SingleLine = PANGO_UNDERLINE_SINGLE_LINE,
    DoubleLine = PANGO_UNDERLINE_DOUBLE_LINE,
    ErrorLine = PANGO_UNDERLINE_ERROR_LINE,
}

/// Alignment of text at a tab stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(i32)]
pub enum TabAlign {
    Left = PANGO_TAB_LEFT,
    Right = PANGO_TAB_RIGHT,
    Center = PANGO_TAB_CENTER,
    Decimal = PANGO_TAB_DECIMAL,
}

bitflags! {
    /// Fields of a [`FontDescription`](crate::core::font_description::FontDescription)
    /// that have been set.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FontMask: u32 {
        const FAMILY = PANGO_FONT_MASK_FAMILY;
        const STYLE = PANGO_FONT_MASK_STYLE;
        const VARIANT = PANGO_FONT_MASK_VARIANT;
        const WEIGHT = PANGO_FONT_MASK_WEIGHT;
        const STRETCH = PANGO_FONT_MASK_STRETCH;
        const SIZE = PANGO_FONT_MASK_SIZE;
        const GRAVITY = PANGO_FONT_MASK_GRAVITY;
        const VARIATIONS = PANGO_FONT_MASK_VARIATIONS;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_match_native_constants() {
        assert_eq!(i32::from(Style::Italic), 2);
        assert_eq!(i32::from(Weight::Bold), 700);
        assert_eq!(i32::from(Stretch::UltraExpanded), 8);
        assert_eq!(i32::from(Underline::ErrorLine), 7);
        assert_eq!(i32::from(TabAlign::Decimal), 3);
        assert_eq!(i32::from(Gravity::Auto), 4);
    }

    #[test]
    fn unknown_values_are_reported() {
        let err = from_native::<Alignment>(9).unwrap_err();
        assert_eq!(
            err,
            PangoError::UnknownEnumValue {
                type_name: "Alignment",
                value: 9
            }
        );
        assert_eq!(from_native::<WrapMode>(2).unwrap(), WrapMode::WordChar);
    }

    #[test]
    fn weight_range() {
        assert!(Weight::is_valid(100));
        assert!(Weight::is_valid(1000));
        assert!(Weight::is_valid(450));
        assert!(!Weight::is_valid(99));
        assert!(!Weight::is_valid(1001));
        assert_eq!(Weight::try_from(380).unwrap(), Weight::Book);
    }

    #[test]
    fn font_mask_bits() {
        let mask = FontMask::FAMILY | FontMask::SIZE;
        assert_eq!(mask.bits(), 0b10_0001);
        assert_eq!(FontMask::from_bits_truncate(1 << 7), FontMask::VARIATIONS);
    }

    #[test]
    fn vertical_gravities() {
        assert!(Gravity::East.is_vertical());
        assert!(!Gravity::South.is_vertical());
    }
}
