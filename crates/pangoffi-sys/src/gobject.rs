use crate::loader::{GLIB_LIBRARY, GOBJECT_LIBRARY, PANGOCAIRO_LIBRARY};
use crate::types::{gpointer, PangoFontMap};

native_api! {
    /// Reference counting for the GObject-derived Pango types.
    pub struct GObject;
    library = GOBJECT_LIBRARY;

    fn g_object_ref(object: gpointer) -> gpointer;
    fn g_object_unref(object: gpointer);
}

native_api! {
    /// The GLib allocator, for strings and arrays Pango hands back.
    pub struct GLib;
    library = GLIB_LIBRARY;

    fn g_free(mem: gpointer);
}

native_api! {
    /// Font map construction from libpangocairo.
    pub struct PangoCairo;
    library = PANGOCAIRO_LIBRARY;

    fn pango_cairo_font_map_new() -> *mut PangoFontMap;
    fn pango_cairo_font_map_get_default() -> *mut PangoFontMap;
}
