//! C types shared by the Pango, GObject and GLib function tables.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_double, c_int, c_uint, c_void};

// ========== GLIB SCALARS ==========

pub type gint = c_int;
pub type guint = c_uint;
pub type guint8 = u8;
pub type guint16 = u16;
pub type guint32 = u32;
pub type gint32 = i32;
pub type gboolean = gint;
pub type gunichar = guint32;
pub type gchar = c_char;
pub type gdouble = c_double;
pub type gpointer = *mut c_void;
pub type gconstpointer = *const c_void;

pub const GFALSE: gboolean = 0;
pub const GTRUE: gboolean = 1;

// ========== OPAQUE TYPES ==========

macro_rules! opaque {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _data: [u8; 0],
                _marker: core::marker::PhantomData<(*mut u8, core::marker::PhantomPinned)>,
            }
        )*
    };
}

opaque!(
    GSList,
    PangoContext,
    PangoFontMap,
    PangoFont,
    PangoFontMetrics,
    PangoFontDescription,
    PangoLanguage,
    PangoLayout,
    PangoLayoutIter,
    PangoAttrList,
    PangoAttrClass,
    PangoTabArray,
);

// ========== PUBLIC STRUCTS ==========

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PangoRectangle {
    pub x: c_int,
    pub y: c_int,
    pub width: c_int,
    pub height: c_int,
}

#[repr(C)]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PangoColor {
    pub red: guint16,
    pub green: guint16,
    pub blue: guint16,
}

#[repr(C)]
#[derive(Debug)]
pub struct PangoAttribute {
    pub klass: *const PangoAttrClass,
    pub start_index: guint,
    pub end_index: guint,
}

#[repr(C)]
#[derive(Debug)]
pub struct PangoAnalysis {
    pub shape_engine: gpointer,
    pub lang_engine: gpointer,
    pub font: *mut PangoFont,
    pub level: guint8,
    pub gravity: guint8,
    pub flags: guint8,
    pub script: guint8,
    pub language: *mut PangoLanguage,
    pub extra_attrs: *mut GSList,
}

#[repr(C)]
#[derive(Debug)]
pub struct PangoItem {
    pub offset: c_int,
    pub length: c_int,
    pub num_chars: c_int,
    pub analysis: PangoAnalysis,
}

pub type PangoGlyph = guint32;
pub type PangoGlyphUnit = gint32;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct PangoGlyphGeometry {
    pub width: PangoGlyphUnit,
    pub x_offset: PangoGlyphUnit,
    pub y_offset: PangoGlyphUnit,
}

/// Bitfield: bit 0 is `is_cluster_start`, bit 1 is `is_color`.
pub type PangoGlyphVisAttr = guint;

#[repr(C)]
#[derive(Debug, Default, Clone, Copy)]
pub struct PangoGlyphInfo {
    pub glyph: PangoGlyph,
    pub geometry: PangoGlyphGeometry,
    pub attr: PangoGlyphVisAttr,
}

#[repr(C)]
#[derive(Debug)]
pub struct PangoGlyphString {
    pub num_glyphs: gint,
    pub glyphs: *mut PangoGlyphInfo,
    pub log_clusters: *mut gint,
    pub space: gint,
}

#[repr(C)]
#[derive(Debug)]
pub struct PangoGlyphItem {
    pub item: *mut PangoItem,
    pub glyphs: *mut PangoGlyphString,
    pub y_offset: c_int,
    pub start_x_offset: c_int,
    pub end_x_offset: c_int,
}

pub type PangoLayoutRun = PangoGlyphItem;

#[repr(C)]
#[derive(Debug)]
pub struct PangoGlyphItemIter {
    pub glyph_item: *mut PangoGlyphItem,
    pub text: *const gchar,
    pub start_glyph: c_int,
    pub start_index: c_int,
    pub start_char: c_int,
    pub end_glyph: c_int,
    pub end_index: c_int,
    pub end_char: c_int,
}

impl Default for PangoGlyphItemIter {
    fn default() -> Self {
        Self {
            glyph_item: std::ptr::null_mut(),
            text: std::ptr::null(),
            start_glyph: 0,
            start_index: 0,
            start_char: 0,
            end_glyph: 0,
            end_index: 0,
            end_char: 0,
        }
    }
}

// ========== CONSTANTS ==========

pub const PANGO_SCALE: c_int = 1024;

pub const PANGO_ATTR_INDEX_FROM_TEXT_BEGINNING: guint = 0;
pub const PANGO_ATTR_INDEX_TO_TEXT_END: guint = guint::MAX;

// ========== ENUMS ==========

pub type PangoStyle = c_int;
pub const PANGO_STYLE_NORMAL: PangoStyle = 0;
pub const PANGO_STYLE_OBLIQUE: PangoStyle = 1;
pub const PANGO_STYLE_ITALIC: PangoStyle = 2;

pub type PangoWeight = c_int;
pub const PANGO_WEIGHT_THIN: PangoWeight = 100;
pub const PANGO_WEIGHT_ULTRALIGHT: PangoWeight = 200;
pub const PANGO_WEIGHT_LIGHT: PangoWeight = 300;
pub const PANGO_WEIGHT_SEMILIGHT: PangoWeight = 350;
pub const PANGO_WEIGHT_BOOK: PangoWeight = 380;
pub const PANGO_WEIGHT_NORMAL: PangoWeight = 400;
pub const PANGO_WEIGHT_MEDIUM: PangoWeight = 500;
pub const PANGO_WEIGHT_SEMIBOLD: PangoWeight = 600;
pub const PANGO_WEIGHT_BOLD: PangoWeight = 700;
pub const PANGO_WEIGHT_ULTRABOLD: PangoWeight = 800;
pub const PANGO_WEIGHT_HEAVY: PangoWeight = 900;
pub const PANGO_WEIGHT_ULTRAHEAVY: PangoWeight = 1000;

pub type PangoVariant = c_int;
pub const PANGO_VARIANT_NORMAL: PangoVariant = 0;
pub const PANGO_VARIANT_SMALL_CAPS: PangoVariant = 1;

pub type PangoStretch = c_int;
pub const PANGO_STRETCH_ULTRA_CONDENSED: PangoStretch = 0;
pub const PANGO_STRETCH_EXTRA_CONDENSED: PangoStretch = 1;
pub const PANGO_STRETCH_CONDENSED: PangoStretch = 2;
pub const PANGO_STRETCH_SEMI_CONDENSED: PangoStretch = 3;
pub const PANGO_STRETCH_NORMAL: PangoStretch = 4;
pub const PANGO_STRETCH_SEMI_EXPANDED: PangoStretch = 5;
pub const PANGO_STRETCH_EXPANDED: PangoStretch = 6;
pub const PANGO_STRETCH_EXTRA_EXPANDED: PangoStretch = 7;
pub const PANGO_STRETCH_ULTRA_EXPANDED: PangoStretch = 8;

pub type PangoFontMask = c_uint;
pub const PANGO_FONT_MASK_FAMILY: PangoFontMask = 1 << 0;
pub const PANGO_FONT_MASK_STYLE: PangoFontMask = 1 << 1;
pub const PANGO_FONT_MASK_VARIANT: PangoFontMask = 1 << 2;
pub const PANGO_FONT_MASK_WEIGHT: PangoFontMask = 1 << 3;
pub const PANGO_FONT_MASK_STRETCH: PangoFontMask = 1 << 4;
pub const PANGO_FONT_MASK_SIZE: PangoFontMask = 1 << 5;
pub const PANGO_FONT_MASK_GRAVITY: PangoFontMask = 1 << 6;
pub const PANGO_FONT_MASK_VARIATIONS: PangoFontMask = 1 << 7;

pub type PangoAlignment = c_int;
pub const PANGO_ALIGN_LEFT: PangoAlignment = 0;
pub const PANGO_ALIGN_CENTER: PangoAlignment = 1;
pub const PANGO_ALIGN_RIGHT: PangoAlignment = 2;

pub type PangoEllipsizeMode = c_int;
pub const PANGO_ELLIPSIZE_NONE: PangoEllipsizeMode = 0;
pub const PANGO_ELLIPSIZE_START: PangoEllipsizeMode = 1;
pub const PANGO_ELLIPSIZE_MIDDLE: PangoEllipsizeMode = 2;
pub const PANGO_ELLIPSIZE_END: PangoEllipsizeMode = 3;

pub type PangoWrapMode = c_int;
pub const PANGO_WRAP_WORD: PangoWrapMode = 0;
pub const PANGO_WRAP_CHAR: PangoWrapMode = 1;
pub const PANGO_WRAP_WORD_CHAR: PangoWrapMode = 2;

pub type PangoGravity = c_int;
pub const PANGO_GRAVITY_SOUTH: PangoGravity = 0;
pub const PANGO_GRAVITY_EAST: PangoGravity = 1;
pub const PANGO_GRAVITY_NORTH: PangoGravity = 2;
pub const PANGO_GRAVITY_WEST: PangoGravity = 3;
pub const PANGO_GRAVITY_AUTO: PangoGravity = 4;

pub type PangoGravityHint = c_int;
pub const PANGO_GRAVITY_HINT_NATURAL: PangoGravityHint = 0;
pub const PANGO_GRAVITY_HINT_STRONG: PangoGravityHint = 1;
pub const PANGO_GRAVITY_HINT_LINE: PangoGravityHint = 2;

pub type PangoUnderline = c_int;
pub const PANGO_UNDERLINE_NONE: PangoUnderline = 0;
pub const PANGO_UNDERLINE_SINGLE: PangoUnderline = 1;
pub const PANGO_UNDERLINE_DOUBLE: PangoUnderline = 2;
pub const PANGO_UNDERLINE_LOW: PangoUnderline = 3;
pub const PANGO_UNDERLINE_ERROR: PangoUnderline = 4;
pub const PANGO_UNDERLINE_SINGLE_LINE: PangoUnderline = 5;
pub const PANGO_UNDERLINE_DOUBLE_LINE: PangoUnderline = 6;
pub const PANGO_UNDERLINE_ERROR_LINE: PangoUnderline = 7;

pub type PangoTabAlign = c_int;
pub const PANGO_TAB_LEFT: PangoTabAlign = 0;
pub const PANGO_TAB_RIGHT: PangoTabAlign = 1;
pub const PANGO_TAB_CENTER: PangoTabAlign = 2;
pub const PANGO_TAB_DECIMAL: PangoTabAlign = 3;
