use crate::core::error::PangoResult;
use crate::core::native;
use crate::core::object::{Handle, NativeObject};
use pangoffi_sys::PangoFontMetrics;

/// Overall metrics of a font. All values are in Pango units.
///
/// Metrics are reference counted; [`copy`](NativeObject::copy) shares the
/// same native value.
pub struct FontMetrics {
    handle: Handle<FontMetrics>,
}

impl NativeObject for FontMetrics {
    type Raw = PangoFontMetrics;
    const TYPE_NAME: &'static str = "FontMetrics";

    fn from_handle(handle: Handle<Self>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &Handle<Self> {
        &self.handle
    }

    unsafe fn free_raw(ptr: *mut PangoFontMetrics) -> PangoResult<()> {
        unsafe { native::pango()?.pango_font_metrics_unref(ptr) }?;
        Ok(())
    }

    unsafe fn copy_raw(ptr: *mut PangoFontMetrics) -> PangoResult<*mut PangoFontMetrics> {
        Ok(unsafe { native::pango()?.pango_font_metrics_ref(ptr) }?)
    }
}

native_wrapper!(FontMetrics);

macro_rules! metric_getters {
    ($($(#[$meta:meta])* $name:ident => $native:ident;)*) => {
        impl FontMetrics {
            $(
                $(#[$meta])*
                pub fn $name(&self) -> PangoResult<i32> {
                    Ok(unsafe { native::pango()?.$native(self.as_ptr()) }?)
                }
            )*
        }
    };
}

metric_getters! {
    /// Distance from the baseline to the logical top of a line.
    ascent => pango_font_metrics_get_ascent;
    /// Distance from the baseline to the logical bottom of a line.
    descent => pango_font_metrics_get_descent;
    /// Line height. Requires Pango 1.44.
    height => pango_font_metrics_get_height;
    approximate_char_width => pango_font_metrics_get_approximate_char_width;
    approximate_digit_width => pango_font_metrics_get_approximate_digit_width;
    /// Distance above the baseline of the top of the underline.
    underline_position => pango_font_metrics_get_underline_position;
    underline_thickness => pango_font_metrics_get_underline_thickness;
    /// Distance above the baseline of the top of the strikethrough.
    strikethrough_position => pango_font_metrics_get_strikethrough_position;
    strikethrough_thickness => pango_font_metrics_get_strikethrough_thickness;
}
