use crate::core::context::Context;
use crate::core::error::PangoResult;
use crate::core::native;
use crate::core::object::{Handle, NativeObject, gobject};
use pangoffi_sys::PangoFontMap;

/// The set of fonts available to a [`Context`].
///
/// Font maps come from a rendering backend; this crate obtains them from
/// PangoCairo, which must be installed next to Pango.
pub struct FontMap {
    handle: Handle<FontMap>,
}

impl NativeObject for FontMap {
    type Raw = PangoFontMap;
    const TYPE_NAME: &'static str = "FontMap";

    fn from_handle(handle: Handle<Self>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &Handle<Self> {
        &self.handle
    }

    unsafe fn free_raw(ptr: *mut PangoFontMap) -> PangoResult<()> {
        unsafe { gobject::unref(ptr) }
    }

    unsafe fn copy_raw(ptr: *mut PangoFontMap) -> PangoResult<*mut PangoFontMap> {
        unsafe { gobject::add_ref(ptr) }
    }
}

native_wrapper!(FontMap);

impl FontMap {
    /// A new font map for the default PangoCairo font backend.
    pub fn new() -> PangoResult<Self> {
        unsafe { Self::from_raw_full(native::pango_cairo()?.pango_cairo_font_map_new()?) }
    }

    /// The PangoCairo font map shared by the calling thread.
    pub fn for_thread() -> PangoResult<Self> {
        unsafe { Self::from_raw_none(native::pango_cairo()?.pango_cairo_font_map_get_default()?) }
    }

    /// A new context that uses this font map.
    pub fn create_context(&self) -> PangoResult<Context> {
        unsafe { Context::from_raw_full(native::pango()?.pango_font_map_create_context(self.as_ptr())?) }
    }
}
