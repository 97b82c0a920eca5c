use crate::core::error::PangoResult;
use crate::core::font::Font;
use crate::core::font_description::FontDescription;
use crate::core::font_map::FontMap;
use crate::core::font_metrics::FontMetrics;
use crate::core::language::Language;
use crate::core::native;
use crate::core::object::{Handle, NativeObject, gobject};
use crate::types::enums::{Gravity, GravityHint, from_native};
use pangoffi_sys::PangoContext;

/// Global settings used when itemizing and shaping text: font map, default
/// font, language and gravity.
///
/// A context without a font map cannot lay out text. Prefer
/// [`FontMap::create_context`] over [`Context::new`].
///
/// # Examples
///
/// ```no_run
/// use pangoffi::prelude::*;
///
/// let context = FontMap::new()?.create_context()?;
/// context.set_base_gravity(Gravity::East)?;
/// assert_eq!(context.gravity()?, Gravity::East);
/// # Ok::<(), pangoffi::PangoError>(())
/// ```
pub struct Context {
    handle: Handle<Context>,
}

impl NativeObject for Context {
    type Raw = PangoContext;
    const TYPE_NAME: &'static str = "Context";

    fn from_handle(handle: Handle<Self>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &Handle<Self> {
        &self.handle
    }

    unsafe fn free_raw(ptr: *mut PangoContext) -> PangoResult<()> {
        unsafe { gobject::unref(ptr) }
    }

    unsafe fn copy_raw(ptr: *mut PangoContext) -> PangoResult<*mut PangoContext> {
        unsafe { gobject::add_ref(ptr) }
    }
}

native_wrapper!(Context);

impl Context {
    /// A context with default settings and no font map.
    pub fn new() -> PangoResult<Self> {
        unsafe { Self::from_raw_full(native::pango()?.pango_context_new()?) }
    }

    // ========== FONT MAP ==========

    pub fn font_map(&self) -> PangoResult<Option<FontMap>> {
        let ptr = unsafe { native::pango()?.pango_context_get_font_map(self.as_ptr()) }?;
        if ptr.is_null() {
            return Ok(None);
        }
        unsafe { FontMap::from_raw_none(ptr) }.map(Some)
    }

    pub fn set_font_map(&self, font_map: &FontMap) -> PangoResult<()> {
        unsafe { native::pango()?.pango_context_set_font_map(self.as_ptr(), font_map.as_ptr()) }?;
        Ok(())
    }

    // ========== FONT DESCRIPTION ==========

    /// A copy of the default font description.
    pub fn font_description(&self) -> PangoResult<Option<FontDescription>> {
        let ptr = unsafe { native::pango()?.pango_context_get_font_description(self.as_ptr()) }?;
        if ptr.is_null() {
            return Ok(None);
        }
        unsafe { FontDescription::from_raw_none(ptr) }.map(Some)
    }

    pub fn set_font_description(&self, desc: &FontDescription) -> PangoResult<()> {
        unsafe { native::pango()?.pango_context_set_font_description(self.as_ptr(), desc.as_ptr()) }?;
        Ok(())
    }

    // ========== GRAVITY ==========

    pub fn base_gravity(&self) -> PangoResult<Gravity> {
        from_native(unsafe { native::pango()?.pango_context_get_base_gravity(self.as_ptr()) }?)
    }

    pub fn set_base_gravity(&self, gravity: Gravity) -> PangoResult<()> {
        unsafe { native::pango()?.pango_context_set_base_gravity(self.as_ptr(), gravity.into()) }?;
        Ok(())
    }

    /// The resolved gravity: the base gravity, unless that is
    /// [`Gravity::Auto`], in which case it is derived from the context
    /// matrix.
    pub fn gravity(&self) -> PangoResult<Gravity> {
        from_native(unsafe { native::pango()?.pango_context_get_gravity(self.as_ptr()) }?)
    }

    pub fn gravity_hint(&self) -> PangoResult<GravityHint> {
        from_native(unsafe { native::pango()?.pango_context_get_gravity_hint(self.as_ptr()) }?)
    }

    pub fn set_gravity_hint(&self, hint: GravityHint) -> PangoResult<()> {
        unsafe { native::pango()?.pango_context_set_gravity_hint(self.as_ptr(), hint.into()) }?;
        Ok(())
    }

    // ========== LANGUAGE ==========

    pub fn language(&self) -> PangoResult<Option<Language>> {
        let ptr = unsafe { native::pango()?.pango_context_get_language(self.as_ptr()) }?;
        Ok(unsafe { Language::from_raw(ptr) })
    }

    pub fn set_language(&self, language: Option<&Language>) -> PangoResult<()> {
        let language = language.map_or(std::ptr::null_mut(), Language::as_ptr);
        unsafe { native::pango()?.pango_context_set_language(self.as_ptr(), language) }?;
        Ok(())
    }

    // ========== FONTS ==========

    /// Loads the font that best matches `desc`, or `None` when the font
    /// map has nothing suitable.
    pub fn load_font(&self, desc: &FontDescription) -> PangoResult<Option<Font>> {
        let ptr = unsafe { native::pango()?.pango_context_load_font(self.as_ptr(), desc.as_ptr()) }?;
        if ptr.is_null() {
            return Ok(None);
        }
        unsafe { Font::from_raw_full(ptr) }.map(Some)
    }

    /// Metrics for the fonts matching `desc` (the context's default font
    /// when `None`) in `language` (the context's language when `None`).
    pub fn metrics(
        &self,
        desc: Option<&FontDescription>,
        language: Option<&Language>,
    ) -> PangoResult<FontMetrics> {
        let desc = desc.map_or(std::ptr::null(), |desc| desc.as_ptr().cast_const());
        let language = language.map_or(std::ptr::null_mut(), Language::as_ptr);
        unsafe {
            FontMetrics::from_raw_full(native::pango()?.pango_context_get_metrics(self.as_ptr(), desc, language)?)
        }
    }
}
