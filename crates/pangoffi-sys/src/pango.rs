use crate::loader::PANGO_LIBRARY;
use crate::types::*;
use std::ffi::{c_char, c_double, c_int};

native_api! {
    /// Functions exported by libpango.
    pub struct Pango;
    library = PANGO_LIBRARY;

    // ========== VERSION ==========

    fn pango_version() -> c_int;
    fn pango_version_string() -> *const c_char;
    fn pango_version_check(required_major: c_int, required_minor: c_int, required_micro: c_int) -> *const c_char;

    // ========== UNITS ==========

    fn pango_units_from_double(d: c_double) -> c_int;
    fn pango_units_to_double(i: c_int) -> c_double;

    // ========== LANGUAGE ==========

    fn pango_language_from_string(language: *const c_char) -> *mut PangoLanguage;
    fn pango_language_to_string(language: *mut PangoLanguage) -> *const c_char;
    fn pango_language_matches(language: *mut PangoLanguage, range_list: *const c_char) -> gboolean;
    fn pango_language_get_default() -> *mut PangoLanguage;
    fn pango_language_get_preferred() -> *mut *mut PangoLanguage;
    fn pango_language_get_sample_string(language: *mut PangoLanguage) -> *const c_char;

    // ========== COLOR ==========

    fn pango_color_parse(color: *mut PangoColor, spec: *const c_char) -> gboolean;
    fn pango_color_to_string(color: *const PangoColor) -> *mut c_char;

    // ========== FONT DESCRIPTION ==========

    fn pango_font_description_new() -> *mut PangoFontDescription;
    fn pango_font_description_copy(desc: *const PangoFontDescription) -> *mut PangoFontDescription;
    fn pango_font_description_free(desc: *mut PangoFontDescription);
    fn pango_font_description_equal(desc1: *const PangoFontDescription, desc2: *const PangoFontDescription) -> gboolean;
    fn pango_font_description_from_string(string: *const c_char) -> *mut PangoFontDescription;
    fn pango_font_description_to_string(desc: *const PangoFontDescription) -> *mut c_char;
    fn pango_font_description_set_family(desc: *mut PangoFontDescription, family: *const c_char);
    fn pango_font_description_get_family(desc: *const PangoFontDescription) -> *const c_char;
    fn pango_font_description_set_style(desc: *mut PangoFontDescription, style: PangoStyle);
    fn pango_font_description_get_style(desc: *const PangoFontDescription) -> PangoStyle;
    fn pango_font_description_set_variant(desc: *mut PangoFontDescription, variant: PangoVariant);
    fn pango_font_description_get_variant(desc: *const PangoFontDescription) -> PangoVariant;
    fn pango_font_description_set_weight(desc: *mut PangoFontDescription, weight: PangoWeight);
    fn pango_font_description_get_weight(desc: *const PangoFontDescription) -> PangoWeight;
    fn pango_font_description_set_stretch(desc: *mut PangoFontDescription, stretch: PangoStretch);
    fn pango_font_description_get_stretch(desc: *const PangoFontDescription) -> PangoStretch;
    fn pango_font_description_set_size(desc: *mut PangoFontDescription, size: gint);
    fn pango_font_description_get_size(desc: *const PangoFontDescription) -> gint;
    fn pango_font_description_set_absolute_size(desc: *mut PangoFontDescription, size: c_double);
    fn pango_font_description_get_size_is_absolute(desc: *const PangoFontDescription) -> gboolean;
    fn pango_font_description_set_gravity(desc: *mut PangoFontDescription, gravity: PangoGravity);
    fn pango_font_description_get_gravity(desc: *const PangoFontDescription) -> PangoGravity;
    fn pango_font_description_get_set_fields(desc: *const PangoFontDescription) -> PangoFontMask;
    fn pango_font_description_unset_fields(desc: *mut PangoFontDescription, to_unset: PangoFontMask);
    fn pango_font_description_merge(desc: *mut PangoFontDescription, desc_to_merge: *const PangoFontDescription, replace_existing: gboolean);

    // ========== CONTEXT ==========

    fn pango_context_new() -> *mut PangoContext;
    fn pango_context_get_font_map(context: *mut PangoContext) -> *mut PangoFontMap;
    fn pango_context_set_font_map(context: *mut PangoContext, font_map: *mut PangoFontMap);
    fn pango_context_get_font_description(context: *mut PangoContext) -> *mut PangoFontDescription;
    fn pango_context_set_font_description(context: *mut PangoContext, desc: *const PangoFontDescription);
    fn pango_context_get_base_gravity(context: *mut PangoContext) -> PangoGravity;
    fn pango_context_set_base_gravity(context: *mut PangoContext, gravity: PangoGravity);
    fn pango_context_get_gravity(context: *mut PangoContext) -> PangoGravity;
    fn pango_context_get_gravity_hint(context: *mut PangoContext) -> PangoGravityHint;
    fn pango_context_set_gravity_hint(context: *mut PangoContext, hint: PangoGravityHint);
    fn pango_context_get_language(context: *mut PangoContext) -> *mut PangoLanguage;
    fn pango_context_set_language(context: *mut PangoContext, language: *mut PangoLanguage);
    fn pango_context_load_font(context: *mut PangoContext, desc: *const PangoFontDescription) -> *mut PangoFont;
    fn pango_context_get_metrics(context: *mut PangoContext, desc: *const PangoFontDescription, language: *mut PangoLanguage) -> *mut PangoFontMetrics;

    // ========== FONT MAP / FONT / METRICS ==========

    fn pango_font_map_create_context(font_map: *mut PangoFontMap) -> *mut PangoContext;
    fn pango_font_describe(font: *mut PangoFont) -> *mut PangoFontDescription;
    fn pango_font_get_metrics(font: *mut PangoFont, language: *mut PangoLanguage) -> *mut PangoFontMetrics;
    fn pango_font_metrics_ref(metrics: *mut PangoFontMetrics) -> *mut PangoFontMetrics;
    fn pango_font_metrics_unref(metrics: *mut PangoFontMetrics);
    fn pango_font_metrics_get_ascent(metrics: *mut PangoFontMetrics) -> c_int;
    fn pango_font_metrics_get_descent(metrics: *mut PangoFontMetrics) -> c_int;
    /// Pango 1.44
    fn pango_font_metrics_get_height(metrics: *mut PangoFontMetrics) -> c_int;
    fn pango_font_metrics_get_approximate_char_width(metrics: *mut PangoFontMetrics) -> c_int;
    fn pango_font_metrics_get_approximate_digit_width(metrics: *mut PangoFontMetrics) -> c_int;
    fn pango_font_metrics_get_underline_position(metrics: *mut PangoFontMetrics) -> c_int;
    fn pango_font_metrics_get_underline_thickness(metrics: *mut PangoFontMetrics) -> c_int;
    fn pango_font_metrics_get_strikethrough_position(metrics: *mut PangoFontMetrics) -> c_int;
    fn pango_font_metrics_get_strikethrough_thickness(metrics: *mut PangoFontMetrics) -> c_int;

    // ========== ATTRIBUTES ==========

    fn pango_attribute_copy(attr: *const PangoAttribute) -> *mut PangoAttribute;
    fn pango_attribute_destroy(attr: *mut PangoAttribute);
    fn pango_attribute_equal(attr1: *const PangoAttribute, attr2: *const PangoAttribute) -> gboolean;
    fn pango_attr_language_new(language: *mut PangoLanguage) -> *mut PangoAttribute;
    fn pango_attr_family_new(family: *const c_char) -> *mut PangoAttribute;
    fn pango_attr_style_new(style: PangoStyle) -> *mut PangoAttribute;
    fn pango_attr_variant_new(variant: PangoVariant) -> *mut PangoAttribute;
    fn pango_attr_stretch_new(stretch: PangoStretch) -> *mut PangoAttribute;
    fn pango_attr_weight_new(weight: PangoWeight) -> *mut PangoAttribute;
    fn pango_attr_size_new(size: c_int) -> *mut PangoAttribute;
    fn pango_attr_size_new_absolute(size: c_int) -> *mut PangoAttribute;
    fn pango_attr_font_desc_new(desc: *const PangoFontDescription) -> *mut PangoAttribute;
    fn pango_attr_foreground_new(red: guint16, green: guint16, blue: guint16) -> *mut PangoAttribute;
    fn pango_attr_background_new(red: guint16, green: guint16, blue: guint16) -> *mut PangoAttribute;
    fn pango_attr_strikethrough_new(strikethrough: gboolean) -> *mut PangoAttribute;
    fn pango_attr_strikethrough_color_new(red: guint16, green: guint16, blue: guint16) -> *mut PangoAttribute;
    fn pango_attr_underline_new(underline: PangoUnderline) -> *mut PangoAttribute;
    fn pango_attr_underline_color_new(red: guint16, green: guint16, blue: guint16) -> *mut PangoAttribute;
    fn pango_attr_shape_new(ink_rect: *const PangoRectangle, logical_rect: *const PangoRectangle) -> *mut PangoAttribute;
    fn pango_attr_scale_new(scale_factor: c_double) -> *mut PangoAttribute;
    fn pango_attr_rise_new(rise: c_int) -> *mut PangoAttribute;
    fn pango_attr_letter_spacing_new(letter_spacing: c_int) -> *mut PangoAttribute;
    fn pango_attr_fallback_new(enable_fallback: gboolean) -> *mut PangoAttribute;
    fn pango_attr_gravity_new(gravity: PangoGravity) -> *mut PangoAttribute;
    fn pango_attr_gravity_hint_new(hint: PangoGravityHint) -> *mut PangoAttribute;
    fn pango_attr_font_features_new(features: *const c_char) -> *mut PangoAttribute;
    fn pango_attr_foreground_alpha_new(alpha: guint16) -> *mut PangoAttribute;
    fn pango_attr_background_alpha_new(alpha: guint16) -> *mut PangoAttribute;

    // ========== ATTRIBUTE LIST ==========

    fn pango_attr_list_new() -> *mut PangoAttrList;
    fn pango_attr_list_ref(list: *mut PangoAttrList) -> *mut PangoAttrList;
    fn pango_attr_list_unref(list: *mut PangoAttrList);
    fn pango_attr_list_copy(list: *mut PangoAttrList) -> *mut PangoAttrList;
    fn pango_attr_list_insert(list: *mut PangoAttrList, attr: *mut PangoAttribute);
    fn pango_attr_list_insert_before(list: *mut PangoAttrList, attr: *mut PangoAttribute);
    fn pango_attr_list_change(list: *mut PangoAttrList, attr: *mut PangoAttribute);
    fn pango_attr_list_splice(list: *mut PangoAttrList, other: *mut PangoAttrList, pos: gint, len: gint);
    /// Pango 1.46
    fn pango_attr_list_equal(list: *mut PangoAttrList, other_list: *mut PangoAttrList) -> gboolean;

    // ========== TAB ARRAY ==========

    fn pango_tab_array_new(initial_size: gint, positions_in_pixels: gboolean) -> *mut PangoTabArray;
    fn pango_tab_array_copy(src: *mut PangoTabArray) -> *mut PangoTabArray;
    fn pango_tab_array_free(tab_array: *mut PangoTabArray);
    fn pango_tab_array_get_size(tab_array: *mut PangoTabArray) -> gint;
    fn pango_tab_array_resize(tab_array: *mut PangoTabArray, new_size: gint);
    fn pango_tab_array_set_tab(tab_array: *mut PangoTabArray, tab_index: gint, alignment: PangoTabAlign, location: gint);
    fn pango_tab_array_get_tab(tab_array: *mut PangoTabArray, tab_index: gint, alignment: *mut PangoTabAlign, location: *mut gint);
    fn pango_tab_array_get_tabs(tab_array: *mut PangoTabArray, alignments: *mut *mut PangoTabAlign, locations: *mut *mut gint);
    fn pango_tab_array_get_positions_in_pixels(tab_array: *mut PangoTabArray) -> gboolean;
    /// Pango 1.50
    fn pango_tab_array_set_positions_in_pixels(tab_array: *mut PangoTabArray, positions_in_pixels: gboolean);
    /// Pango 1.50
    fn pango_tab_array_set_decimal_point(tab_array: *mut PangoTabArray, tab_index: c_int, decimal_point: gunichar);
    /// Pango 1.50
    fn pango_tab_array_get_decimal_point(tab_array: *mut PangoTabArray, tab_index: c_int) -> gunichar;

    // ========== LAYOUT ==========

    fn pango_layout_new(context: *mut PangoContext) -> *mut PangoLayout;
    fn pango_layout_get_context(layout: *mut PangoLayout) -> *mut PangoContext;
    fn pango_layout_context_changed(layout: *mut PangoLayout);
    fn pango_layout_set_text(layout: *mut PangoLayout, text: *const c_char, length: c_int);
    fn pango_layout_get_text(layout: *mut PangoLayout) -> *const c_char;
    fn pango_layout_set_markup(layout: *mut PangoLayout, markup: *const c_char, length: c_int);
    fn pango_layout_set_font_description(layout: *mut PangoLayout, desc: *const PangoFontDescription);
    fn pango_layout_get_font_description(layout: *mut PangoLayout) -> *const PangoFontDescription;
    fn pango_layout_set_attributes(layout: *mut PangoLayout, attrs: *mut PangoAttrList);
    fn pango_layout_get_attributes(layout: *mut PangoLayout) -> *mut PangoAttrList;
    fn pango_layout_set_tabs(layout: *mut PangoLayout, tabs: *mut PangoTabArray);
    fn pango_layout_get_tabs(layout: *mut PangoLayout) -> *mut PangoTabArray;
    fn pango_layout_set_width(layout: *mut PangoLayout, width: c_int);
    fn pango_layout_get_width(layout: *mut PangoLayout) -> c_int;
    fn pango_layout_set_height(layout: *mut PangoLayout, height: c_int);
    fn pango_layout_get_height(layout: *mut PangoLayout) -> c_int;
    fn pango_layout_set_spacing(layout: *mut PangoLayout, spacing: c_int);
    fn pango_layout_get_spacing(layout: *mut PangoLayout) -> c_int;
    fn pango_layout_set_indent(layout: *mut PangoLayout, indent: c_int);
    fn pango_layout_get_indent(layout: *mut PangoLayout) -> c_int;
    fn pango_layout_set_justify(layout: *mut PangoLayout, justify: gboolean);
    fn pango_layout_get_justify(layout: *mut PangoLayout) -> gboolean;
    fn pango_layout_set_alignment(layout: *mut PangoLayout, alignment: PangoAlignment);
    fn pango_layout_get_alignment(layout: *mut PangoLayout) -> PangoAlignment;
    fn pango_layout_set_ellipsize(layout: *mut PangoLayout, ellipsize: PangoEllipsizeMode);
    fn pango_layout_get_ellipsize(layout: *mut PangoLayout) -> PangoEllipsizeMode;
    fn pango_layout_is_ellipsized(layout: *mut PangoLayout) -> gboolean;
    fn pango_layout_set_wrap(layout: *mut PangoLayout, wrap: PangoWrapMode);
    fn pango_layout_get_wrap(layout: *mut PangoLayout) -> PangoWrapMode;
    fn pango_layout_is_wrapped(layout: *mut PangoLayout) -> gboolean;
    fn pango_layout_get_extents(layout: *mut PangoLayout, ink_rect: *mut PangoRectangle, logical_rect: *mut PangoRectangle);
    fn pango_layout_get_pixel_extents(layout: *mut PangoLayout, ink_rect: *mut PangoRectangle, logical_rect: *mut PangoRectangle);
    fn pango_layout_get_size(layout: *mut PangoLayout, width: *mut c_int, height: *mut c_int);
    fn pango_layout_get_pixel_size(layout: *mut PangoLayout, width: *mut c_int, height: *mut c_int);
    fn pango_layout_get_baseline(layout: *mut PangoLayout) -> c_int;
    fn pango_layout_get_line_count(layout: *mut PangoLayout) -> c_int;
    fn pango_layout_get_iter(layout: *mut PangoLayout) -> *mut PangoLayoutIter;

    // ========== LAYOUT ITER ==========

    fn pango_layout_iter_copy(iter: *mut PangoLayoutIter) -> *mut PangoLayoutIter;
    fn pango_layout_iter_free(iter: *mut PangoLayoutIter);
    fn pango_layout_iter_next_run(iter: *mut PangoLayoutIter) -> gboolean;
    fn pango_layout_iter_next_char(iter: *mut PangoLayoutIter) -> gboolean;
    fn pango_layout_iter_next_cluster(iter: *mut PangoLayoutIter) -> gboolean;
    fn pango_layout_iter_next_line(iter: *mut PangoLayoutIter) -> gboolean;
    fn pango_layout_iter_at_last_line(iter: *mut PangoLayoutIter) -> gboolean;
    fn pango_layout_iter_get_index(iter: *mut PangoLayoutIter) -> c_int;
    fn pango_layout_iter_get_baseline(iter: *mut PangoLayoutIter) -> c_int;
    fn pango_layout_iter_get_run(iter: *mut PangoLayoutIter) -> *mut PangoLayoutRun;
    fn pango_layout_iter_get_char_extents(iter: *mut PangoLayoutIter, logical_rect: *mut PangoRectangle);
    fn pango_layout_iter_get_cluster_extents(iter: *mut PangoLayoutIter, ink_rect: *mut PangoRectangle, logical_rect: *mut PangoRectangle);
    fn pango_layout_iter_get_run_extents(iter: *mut PangoLayoutIter, ink_rect: *mut PangoRectangle, logical_rect: *mut PangoRectangle);
    fn pango_layout_iter_get_line_yrange(iter: *mut PangoLayoutIter, y0: *mut c_int, y1: *mut c_int);
    fn pango_layout_iter_get_line_extents(iter: *mut PangoLayoutIter, ink_rect: *mut PangoRectangle, logical_rect: *mut PangoRectangle);
    fn pango_layout_iter_get_layout_extents(iter: *mut PangoLayoutIter, ink_rect: *mut PangoRectangle, logical_rect: *mut PangoRectangle);

    // ========== GLYPH ITEM ==========

    fn pango_glyph_item_copy(orig: *mut PangoGlyphItem) -> *mut PangoGlyphItem;
    fn pango_glyph_item_free(glyph_item: *mut PangoGlyphItem);
    fn pango_glyph_item_split(orig: *mut PangoGlyphItem, text: *const c_char, split_index: c_int) -> *mut PangoGlyphItem;
    fn pango_glyph_item_get_logical_widths(glyph_item: *mut PangoGlyphItem, text: *const c_char, logical_widths: *mut c_int);
    fn pango_glyph_item_iter_init_start(iter: *mut PangoGlyphItemIter, glyph_item: *mut PangoGlyphItem, text: *const c_char) -> gboolean;
    fn pango_glyph_item_iter_init_end(iter: *mut PangoGlyphItemIter, glyph_item: *mut PangoGlyphItem, text: *const c_char) -> gboolean;
    fn pango_glyph_item_iter_next_cluster(iter: *mut PangoGlyphItemIter) -> gboolean;
    fn pango_glyph_item_iter_prev_cluster(iter: *mut PangoGlyphItemIter) -> gboolean;
}
