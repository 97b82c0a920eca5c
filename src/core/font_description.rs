use crate::core::error::{PangoError, PangoResult};
use crate::core::native;
use crate::core::object::{Handle, NativeObject};
use crate::types::enums::{FontMask, Gravity, Stretch, Style, Variant, Weight, from_native};
use pangoffi_sys::PangoFontDescription;
use std::fmt;
use std::str::FromStr;

/// Describes a font: family, style, weight, size and so on.
///
/// Descriptions are single-owner values; [`copy`](NativeObject::copy)
/// duplicates the native struct and equality compares every field that is
/// set.
///
/// # Examples
///
/// ```no_run
/// use pangoffi::prelude::*;
///
/// let mut desc = FontDescription::from_string("Sans Bold 12")?;
/// assert_eq!(desc.family()?.as_deref(), Some("Sans"));
/// desc.set_style(Style::Italic)?;
/// assert_eq!(desc.to_string(), "Sans Bold Italic 12");
/// # Ok::<(), pangoffi::PangoError>(())
/// ```
pub struct FontDescription {
    handle: Handle<FontDescription>,
}

impl NativeObject for FontDescription {
    type Raw = PangoFontDescription;
    const TYPE_NAME: &'static str = "FontDescription";

    fn from_handle(handle: Handle<Self>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &Handle<Self> {
        &self.handle
    }

    unsafe fn free_raw(ptr: *mut PangoFontDescription) -> PangoResult<()> {
        unsafe { native::pango()?.pango_font_description_free(ptr) }?;
        Ok(())
    }

    unsafe fn copy_raw(ptr: *mut PangoFontDescription) -> PangoResult<*mut PangoFontDescription> {
        Ok(unsafe { native::pango()?.pango_font_description_copy(ptr) }?)
    }

    unsafe fn equal_raw(a: *mut PangoFontDescription, b: *mut PangoFontDescription) -> PangoResult<bool> {
        let equal = unsafe { native::pango()?.pango_font_description_equal(a, b) }?;
        Ok(native::from_gboolean(equal))
    }
}

native_wrapper!(FontDescription);

impl FontDescription {
    /// An empty description with no fields set.
    pub fn new() -> PangoResult<Self> {
        unsafe { Self::from_raw_full(native::pango()?.pango_font_description_new()?) }
    }

    /// Parses a description such as `"Cantarell Italic Light 15"`.
    ///
    /// Unrecognised words are treated as part of the family name; the
    /// native parser never fails.
    pub fn from_string(description: &str) -> PangoResult<Self> {
        let c_desc = native::to_cstring(description)?;
        unsafe {
            Self::from_raw_full(native::pango()?.pango_font_description_from_string(c_desc.as_ptr())?)
        }
    }

    /// The description in the format accepted by
    /// [`from_string`](Self::from_string).
    pub fn to_description_string(&self) -> PangoResult<String> {
        unsafe { native::owned_string(native::pango()?.pango_font_description_to_string(self.as_ptr())?) }
    }

    // ========== FAMILY ==========

    pub fn set_family(&mut self, family: &str) -> PangoResult<()> {
        let c_family = native::to_cstring(family)?;
        unsafe { native::pango()?.pango_font_description_set_family(self.as_ptr(), c_family.as_ptr()) }?;
        Ok(())
    }

    /// The family list, or `None` when unset.
    pub fn family(&self) -> PangoResult<Option<String>> {
        let family = unsafe { native::pango()?.pango_font_description_get_family(self.as_ptr()) }?;
        unsafe { native::borrowed_string(family) }
    }

    // ========== STYLE / VARIANT / WEIGHT / STRETCH ==========

    pub fn set_style(&mut self, style: Style) -> PangoResult<()> {
        unsafe { native::pango()?.pango_font_description_set_style(self.as_ptr(), style.into()) }?;
        Ok(())
    }

    pub fn style(&self) -> PangoResult<Style> {
        from_native(unsafe { native::pango()?.pango_font_description_get_style(self.as_ptr()) }?)
    }

    pub fn set_variant(&mut self, variant: Variant) -> PangoResult<()> {
        unsafe { native::pango()?.pango_font_description_set_variant(self.as_ptr(), variant.into()) }?;
        Ok(())
    }

    pub fn variant(&self) -> PangoResult<Variant> {
        from_native(unsafe { native::pango()?.pango_font_description_get_variant(self.as_ptr()) }?)
    }

    /// Sets the weight: a [`Weight`] or any integer in `100..=1000`.
    pub fn set_weight(&mut self, weight: impl Into<i32>) -> PangoResult<()> {
        let weight = weight.into();
        PangoError::check(
            Weight::is_valid(weight),
            "weight",
            format!("{weight} is outside {}..={}", Weight::MIN, Weight::MAX),
        )?;
        unsafe { native::pango()?.pango_font_description_set_weight(self.as_ptr(), weight) }?;
        Ok(())
    }

    /// The raw weight, which need not be one of the named [`Weight`]s.
    pub fn weight(&self) -> PangoResult<i32> {
        Ok(unsafe { native::pango()?.pango_font_description_get_weight(self.as_ptr()) }?)
    }

    pub fn set_stretch(&mut self, stretch: Stretch) -> PangoResult<()> {
        unsafe { native::pango()?.pango_font_description_set_stretch(self.as_ptr(), stretch.into()) }?;
        Ok(())
    }

    pub fn stretch(&self) -> PangoResult<Stretch> {
        from_native(unsafe { native::pango()?.pango_font_description_get_stretch(self.as_ptr()) }?)
    }

    // ========== SIZE ==========

    /// Sets the size in points scaled by [`SCALE`](crate::convert::SCALE).
    pub fn set_size(&mut self, size: i32) -> PangoResult<()> {
        PangoError::check(size >= 0, "size", "must not be negative")?;
        unsafe { native::pango()?.pango_font_description_set_size(self.as_ptr(), size) }?;
        Ok(())
    }

    /// The size in points or device units, scaled by
    /// [`SCALE`](crate::convert::SCALE). Zero when unset.
    pub fn size(&self) -> PangoResult<i32> {
        Ok(unsafe { native::pango()?.pango_font_description_get_size(self.as_ptr()) }?)
    }

    /// Sets the size in device units scaled by
    /// [`SCALE`](crate::convert::SCALE).
    pub fn set_absolute_size(&mut self, size: f64) -> PangoResult<()> {
        PangoError::check(size >= 0.0, "size", "must not be negative")?;
        unsafe { native::pango()?.pango_font_description_set_absolute_size(self.as_ptr(), size) }?;
        Ok(())
    }

    /// Whether the size is in device units rather than points.
    pub fn size_is_absolute(&self) -> PangoResult<bool> {
        let absolute = unsafe { native::pango()?.pango_font_description_get_size_is_absolute(self.as_ptr()) }?;
        Ok(native::from_gboolean(absolute))
    }

    // ========== GRAVITY ==========

    pub fn set_gravity(&mut self, gravity: Gravity) -> PangoResult<()> {
        unsafe { native::pango()?.pango_font_description_set_gravity(self.as_ptr(), gravity.into()) }?;
        Ok(())
    }

    pub fn gravity(&self) -> PangoResult<Gravity> {
        from_native(unsafe { native::pango()?.pango_font_description_get_gravity(self.as_ptr()) }?)
    }

    // ========== FIELDS ==========

    /// Which fields have been set.
    pub fn set_fields(&self) -> PangoResult<FontMask> {
        let mask = unsafe { native::pango()?.pango_font_description_get_set_fields(self.as_ptr()) }?;
        Ok(FontMask::from_bits_truncate(mask))
    }

    /// Resets the given fields to their unset defaults.
    pub fn unset_fields(&mut self, fields: FontMask) -> PangoResult<()> {
        unsafe { native::pango()?.pango_font_description_unset_fields(self.as_ptr(), fields.bits()) }?;
        Ok(())
    }

    /// Copies the fields set in `other` into `self`. Fields already set in
    /// `self` are only overwritten when `replace_existing` is true.
    pub fn merge(&mut self, other: &FontDescription, replace_existing: bool) -> PangoResult<()> {
        unsafe {
            native::pango()?.pango_font_description_merge(
                self.as_ptr(),
                other.as_ptr(),
                native::to_gboolean(replace_existing),
            )
        }?;
        Ok(())
    }
}

impl fmt::Display for FontDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_description_string().map_err(|_| fmt::Error)?)
    }
}

impl FromStr for FontDescription {
    type Err = PangoError;

    fn from_str(description: &str) -> PangoResult<Self> {
        Self::from_string(description)
    }
}
