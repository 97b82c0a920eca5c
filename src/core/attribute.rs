use crate::core::error::{PangoError, PangoResult};
use crate::core::font_description::FontDescription;
use crate::core::language::Language;
use crate::core::native;
use crate::core::object::{Handle, NativeObject};
use crate::types::color::Color;
use crate::types::enums::{Gravity, GravityHint, Stretch, Style, Underline, Variant, Weight};
use crate::types::rectangle::Rectangle;
use pangoffi_sys::{
    PANGO_ATTR_INDEX_FROM_TEXT_BEGINNING, PANGO_ATTR_INDEX_TO_TEXT_END, Pango, PangoAttribute,
    PangoRectangle,
};

/// Byte index meaning "from the start of the text".
pub const ATTR_INDEX_FROM_TEXT_BEGINNING: u32 = PANGO_ATTR_INDEX_FROM_TEXT_BEGINNING;
/// Byte index meaning "to the end of the text".
pub const ATTR_INDEX_TO_TEXT_END: u32 = PANGO_ATTR_INDEX_TO_TEXT_END;

/// A single text attribute applied to a byte range.
///
/// New attributes cover the whole text; narrow them with
/// [`with_range`](Self::with_range) or the index setters. Inserting an
/// attribute into an [`AttrList`](crate::core::attr_list::AttrList) moves
/// it into the list.
///
/// # Examples
///
/// ```no_run
/// use pangoffi::prelude::*;
///
/// let bold = Attribute::new_weight(Weight::Bold)?.with_range(0, 5)?;
/// let red = Attribute::new_foreground(Color::new(0xffff, 0, 0))?;
///
/// let list = AttrList::new()?;
/// list.insert(bold)?;
/// list.insert(red)?;
/// # Ok::<(), pangoffi::PangoError>(())
/// ```
pub struct Attribute {
    handle: Handle<Attribute>,
}

impl NativeObject for Attribute {
    type Raw = PangoAttribute;
    const TYPE_NAME: &'static str = "Attribute";

    fn from_handle(handle: Handle<Self>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &Handle<Self> {
        &self.handle
    }

    unsafe fn free_raw(ptr: *mut PangoAttribute) -> PangoResult<()> {
        unsafe { native::pango()?.pango_attribute_destroy(ptr) }?;
        Ok(())
    }

    unsafe fn copy_raw(ptr: *mut PangoAttribute) -> PangoResult<*mut PangoAttribute> {
        Ok(unsafe { native::pango()?.pango_attribute_copy(ptr) }?)
    }

    unsafe fn equal_raw(a: *mut PangoAttribute, b: *mut PangoAttribute) -> PangoResult<bool> {
        let equal = unsafe { native::pango()?.pango_attribute_equal(a, b) }?;
        Ok(native::from_gboolean(equal))
    }
}

native_wrapper!(Attribute);

impl Attribute {
    fn create(
        constructor: impl FnOnce(&'static Pango) -> Result<*mut PangoAttribute, pangoffi_sys::SymbolError>,
    ) -> PangoResult<Self> {
        let ptr = constructor(native::pango()?)?;
        unsafe { Self::from_raw_full(ptr) }
    }

    // ========== RANGE ==========

    /// Start of the range in bytes, inclusive.
    pub fn start_index(&self) -> u32 {
        unsafe { (*self.as_ptr()).start_index }
    }

    pub fn set_start_index(&mut self, start_index: u32) -> PangoResult<()> {
        PangoError::check(
            start_index < ATTR_INDEX_TO_TEXT_END,
            "start_index",
            "must be below ATTR_INDEX_TO_TEXT_END",
        )?;
        unsafe { (*self.as_ptr()).start_index = start_index };
        Ok(())
    }

    /// End of the range in bytes, exclusive.
    pub fn end_index(&self) -> u32 {
        unsafe { (*self.as_ptr()).end_index }
    }

    /// Any `u32` is accepted; [`ATTR_INDEX_TO_TEXT_END`] extends the range
    /// to the end of the text.
    pub fn set_end_index(&mut self, end_index: u32) {
        unsafe { (*self.as_ptr()).end_index = end_index };
    }

    /// Restricts the attribute to `start_index..end_index`.
    pub fn with_range(mut self, start_index: u32, end_index: u32) -> PangoResult<Self> {
        self.set_start_index(start_index)?;
        self.set_end_index(end_index);
        Ok(self)
    }

    // ========== FONT ==========

    pub fn new_language(language: &Language) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_language_new(language.as_ptr()) })
    }

    /// Font family, or a comma separated list of families.
    pub fn new_family(family: &str) -> PangoResult<Self> {
        let c_family = native::to_cstring(family)?;
        Self::create(|api| unsafe { api.pango_attr_family_new(c_family.as_ptr()) })
    }

    pub fn new_style(style: Style) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_style_new(style.into()) })
    }

    pub fn new_variant(variant: Variant) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_variant_new(variant.into()) })
    }

    pub fn new_stretch(stretch: Stretch) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_stretch_new(stretch.into()) })
    }

    /// A [`Weight`] or any integer in `100..=1000`.
    pub fn new_weight(weight: impl Into<i32>) -> PangoResult<Self> {
        let weight = weight.into();
        PangoError::check(
            Weight::is_valid(weight),
            "weight",
            format!("{weight} is outside {}..={}", Weight::MIN, Weight::MAX),
        )?;
        Self::create(|api| unsafe { api.pango_attr_weight_new(weight) })
    }

    /// Font size in points scaled by [`SCALE`](crate::convert::SCALE).
    pub fn new_size(size: i32) -> PangoResult<Self> {
        PangoError::check(size >= 0, "size", "must not be negative")?;
        Self::create(|api| unsafe { api.pango_attr_size_new(size) })
    }

    /// Font size in device units scaled by [`SCALE`](crate::convert::SCALE).
    pub fn new_size_absolute(size: i32) -> PangoResult<Self> {
        PangoError::check(size >= 0, "size", "must not be negative")?;
        Self::create(|api| unsafe { api.pango_attr_size_new_absolute(size) })
    }

    /// Sets every field that is set in `desc`.
    pub fn new_font_description(desc: &FontDescription) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_font_desc_new(desc.as_ptr()) })
    }

    /// OpenType features in CSS syntax, e.g. `"liga=0, smcp"`.
    pub fn new_font_features(features: &str) -> PangoResult<Self> {
        let c_features = native::to_cstring(features)?;
        Self::create(|api| unsafe { api.pango_attr_font_features_new(c_features.as_ptr()) })
    }

    /// Whether to fall back to other fonts for missing glyphs.
    pub fn new_fallback(enable_fallback: bool) -> PangoResult<Self> {
        let enable = native::to_gboolean(enable_fallback);
        Self::create(|api| unsafe { api.pango_attr_fallback_new(enable) })
    }

    /// Scales the font size by `scale_factor`.
    pub fn new_scale(scale_factor: f64) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_scale_new(scale_factor) })
    }

    // ========== COLOUR ==========

    pub fn new_foreground(color: Color) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_foreground_new(color.red, color.green, color.blue) })
    }

    pub fn new_background(color: Color) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_background_new(color.red, color.green, color.blue) })
    }

    pub fn new_foreground_alpha(alpha: u16) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_foreground_alpha_new(alpha) })
    }

    pub fn new_background_alpha(alpha: u16) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_background_alpha_new(alpha) })
    }

    // ========== DECORATION ==========

    pub fn new_strikethrough(strikethrough: bool) -> PangoResult<Self> {
        let strikethrough = native::to_gboolean(strikethrough);
        Self::create(|api| unsafe { api.pango_attr_strikethrough_new(strikethrough) })
    }

    pub fn new_strikethrough_color(color: Color) -> PangoResult<Self> {
        Self::create(|api| unsafe {
            api.pango_attr_strikethrough_color_new(color.red, color.green, color.blue)
        })
    }

    pub fn new_underline(underline: Underline) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_underline_new(underline.into()) })
    }

    pub fn new_underline_color(color: Color) -> PangoResult<Self> {
        Self::create(|api| unsafe {
            api.pango_attr_underline_color_new(color.red, color.green, color.blue)
        })
    }

    // ========== POSITIONING ==========

    /// Replaces the glyphs with a shape of the given extents.
    pub fn new_shape(ink_rect: Rectangle, logical_rect: Rectangle) -> PangoResult<Self> {
        let ink = PangoRectangle::from(ink_rect);
        let logical = PangoRectangle::from(logical_rect);
        Self::create(|api| unsafe { api.pango_attr_shape_new(&ink, &logical) })
    }

    /// Baseline displacement in Pango units; positive moves text up.
    pub fn new_rise(rise: i32) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_rise_new(rise) })
    }

    /// Extra space between graphemes, in Pango units.
    pub fn new_letter_spacing(letter_spacing: i32) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_letter_spacing_new(letter_spacing) })
    }

    pub fn new_gravity(gravity: Gravity) -> PangoResult<Self> {
        PangoError::check(
            gravity != Gravity::Auto,
            "gravity",
            "Gravity::Auto is not allowed for attributes",
        )?;
        Self::create(|api| unsafe { api.pango_attr_gravity_new(gravity.into()) })
    }

    pub fn new_gravity_hint(hint: GravityHint) -> PangoResult<Self> {
        Self::create(|api| unsafe { api.pango_attr_gravity_hint_new(hint.into()) })
    }
}
