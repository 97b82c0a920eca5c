use crate::core::error::PangoResult;
use crate::core::native;
use pangoffi_sys::PangoColor;
use std::fmt;

/// An RGB colour with 16 bits per channel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub red: u16,
    pub green: u16,
    pub blue: u16,
}

impl Color {
    pub const fn new(red: u16, green: u16, blue: u16) -> Self {
        Self { red, green, blue }
    }

    /// Parses a colour name (`"navy"`) or hex specification (`"#fff"`,
    /// `"#ffff00000000"`). Returns `None` when Pango does not understand
    /// the specification.
    pub fn parse(spec: &str) -> PangoResult<Option<Color>> {
        let mut color = Color::default();
        Ok(color.parse_into(spec)?.then_some(color))
    }

    /// Parses `spec` into `self`, returning whether it was understood.
    /// `self` is left unchanged on failure.
    pub fn parse_into(&mut self, spec: &str) -> PangoResult<bool> {
        let c_spec = native::to_cstring(spec)?;
        let mut native_color = PangoColor::from(*self);
        let parsed = unsafe { native::pango()?.pango_color_parse(&mut native_color, c_spec.as_ptr()) }?;
        if native::from_gboolean(parsed) {
            *self = native_color.into();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// The native `#rrrrggggbbbb` representation.
    pub fn to_native_string(&self) -> PangoResult<String> {
        let native_color = PangoColor::from(*self);
        unsafe { native::owned_string(native::pango()?.pango_color_to_string(&native_color)?) }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:04x}{:04x}{:04x}", self.red, self.green, self.blue)
    }
}

impl From<PangoColor> for Color {
    fn from(color: PangoColor) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl From<Color> for PangoColor {
    fn from(color: Color) -> Self {
        PangoColor {
            red: color.red,
            green: color.green,
            blue: color.blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_native_format() {
        let color = Color::new(0x1111, 0x2222, 0x3333);
        assert_eq!(color.to_string(), "#111122223333");
        assert_eq!(Color::new(0xffff, 0, 0xa).to_string(), "#ffff0000000a");
    }

    #[test]
    fn equality_compares_every_channel() {
        let base = Color::new(1, 2, 3);
        assert_eq!(base, Color::new(1, 2, 3));
        assert_ne!(base, Color::new(1, 2, 4));
        assert_ne!(base, Color::new(1, 9, 3));
        assert_ne!(base, Color::new(9, 2, 3));
    }
}
