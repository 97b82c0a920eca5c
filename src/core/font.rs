use crate::core::error::PangoResult;
use crate::core::font_description::FontDescription;
use crate::core::font_metrics::FontMetrics;
use crate::core::language::Language;
use crate::core::native;
use crate::core::object::{Handle, NativeObject, gobject};
use pangoffi_sys::PangoFont;

/// A font loaded by a font map, usually through
/// [`Context::load_font`](crate::core::context::Context::load_font).
pub struct Font {
    handle: Handle<Font>,
}

impl NativeObject for Font {
    type Raw = PangoFont;
    const TYPE_NAME: &'static str = "Font";

    fn from_handle(handle: Handle<Self>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &Handle<Self> {
        &self.handle
    }

    unsafe fn free_raw(ptr: *mut PangoFont) -> PangoResult<()> {
        unsafe { gobject::unref(ptr) }
    }

    unsafe fn copy_raw(ptr: *mut PangoFont) -> PangoResult<*mut PangoFont> {
        unsafe { gobject::add_ref(ptr) }
    }
}

native_wrapper!(Font);

impl Font {
    /// Metrics for this font. With `None` the metrics cover the whole
    /// font; with a language they are tuned to that language's script.
    pub fn metrics(&self, language: Option<&Language>) -> PangoResult<FontMetrics> {
        let language = language.map_or(std::ptr::null_mut(), Language::as_ptr);
        unsafe { FontMetrics::from_raw_full(native::pango()?.pango_font_get_metrics(self.as_ptr(), language)?) }
    }

    /// A description of the font actually loaded.
    pub fn describe(&self) -> PangoResult<FontDescription> {
        unsafe { FontDescription::from_raw_full(native::pango()?.pango_font_describe(self.as_ptr())?) }
    }
}
