use crate::core::attr_list::AttrList;
use crate::core::context::Context;
use crate::core::error::{PangoError, PangoResult};
use crate::core::font_description::FontDescription;
use crate::core::layout_iter::LayoutIter;
use crate::core::native;
use crate::core::object::{Handle, NativeObject, gobject};
use crate::core::tab_array::TabArray;
use crate::types::enums::{Alignment, EllipsizeMode, WrapMode, from_native};
use crate::types::rectangle::{Extents, extents_with};
use pangoffi_sys::PangoLayout;
use std::ffi::c_int;

/// A paragraph of text laid out with a single [`Context`].
///
/// Layouts are the main entry point for turning text into positioned
/// glyphs. Lengths are in Pango units unless a method says pixels.
///
/// # Examples
///
/// ```no_run
/// use pangoffi::prelude::*;
///
/// let context = FontMap::new()?.create_context()?;
/// let layout = Layout::new(&context)?;
/// layout.set_font_description(Some(&FontDescription::from_string("Sans 12")?))?;
/// layout.set_width(200 * pangoffi::convert::SCALE)?;
/// layout.set_wrap(WrapMode::Word)?;
/// layout.set_text("The quick brown fox jumps over the lazy dog")?;
///
/// let (width, height) = layout.pixel_size()?;
/// println!("{} lines, {width}x{height} px", layout.line_count()?);
/// # Ok::<(), pangoffi::PangoError>(())
/// ```
pub struct Layout {
    handle: Handle<Layout>,
}

impl NativeObject for Layout {
    type Raw = PangoLayout;
    const TYPE_NAME: &'static str = "Layout";

    fn from_handle(handle: Handle<Self>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &Handle<Self> {
        &self.handle
    }

    unsafe fn free_raw(ptr: *mut PangoLayout) -> PangoResult<()> {
        unsafe { gobject::unref(ptr) }
    }

    unsafe fn copy_raw(ptr: *mut PangoLayout) -> PangoResult<*mut PangoLayout> {
        unsafe { gobject::add_ref(ptr) }
    }
}

native_wrapper!(Layout);

impl Layout {
    /// An empty layout using `context`'s font map and defaults.
    pub fn new(context: &Context) -> PangoResult<Self> {
        unsafe { Self::from_raw_full(native::pango()?.pango_layout_new(context.as_ptr())?) }
    }

    /// The context the layout was created with.
    pub fn context(&self) -> PangoResult<Context> {
        unsafe { Context::from_raw_none(native::pango()?.pango_layout_get_context(self.as_ptr())?) }
    }

    /// Must be called after changing the context (font map, font, gravity)
    /// of a layout that has already been laid out.
    pub fn context_changed(&self) -> PangoResult<()> {
        unsafe { native::pango()?.pango_layout_context_changed(self.as_ptr()) }?;
        Ok(())
    }

    // ========== TEXT ==========

    /// Sets the text. Markup set earlier is discarded; attributes are kept.
    ///
    /// Text containing NUL is rejected with
    /// [`PangoError::StringConversion`].
    pub fn set_text(&self, text: &str) -> PangoResult<()> {
        let length = native::text_length("text", text)?;
        let text = native::to_cstring(text)?;
        unsafe { native::pango()?.pango_layout_set_text(self.as_ptr(), text.as_ptr(), length) }?;
        Ok(())
    }

    pub fn text(&self) -> PangoResult<String> {
        let text = unsafe { native::pango()?.pango_layout_get_text(self.as_ptr()) }?;
        unsafe { native::borrowed_string(text) }?.ok_or(PangoError::NullPointer)
    }

    /// Parses Pango markup and sets both the text and the attributes.
    ///
    /// Invalid markup is reported by Pango on stderr and leaves the layout
    /// empty.
    pub fn set_markup(&self, markup: &str) -> PangoResult<()> {
        let length = native::text_length("markup", markup)?;
        let markup = native::to_cstring(markup)?;
        unsafe { native::pango()?.pango_layout_set_markup(self.as_ptr(), markup.as_ptr(), length) }?;
        Ok(())
    }

    // ========== FONT / ATTRIBUTES / TABS ==========

    /// A copy of the layout's font description, or `None` when the
    /// context's font is used.
    pub fn font_description(&self) -> PangoResult<Option<FontDescription>> {
        let desc = unsafe { native::pango()?.pango_layout_get_font_description(self.as_ptr()) }?;
        if desc.is_null() {
            return Ok(None);
        }
        unsafe { FontDescription::from_raw_none(desc.cast_mut()) }.map(Some)
    }

    /// Sets the font, or falls back to the context's font with `None`.
    pub fn set_font_description(&self, desc: Option<&FontDescription>) -> PangoResult<()> {
        let desc = desc.map_or(std::ptr::null(), |desc| desc.as_ptr().cast_const());
        unsafe { native::pango()?.pango_layout_set_font_description(self.as_ptr(), desc) }?;
        Ok(())
    }

    /// The layout's attribute list. The returned list is shared with the
    /// layout.
    pub fn attributes(&self) -> PangoResult<Option<AttrList>> {
        let attrs = unsafe { native::pango()?.pango_layout_get_attributes(self.as_ptr()) }?;
        if attrs.is_null() {
            return Ok(None);
        }
        unsafe { AttrList::from_raw_none(attrs) }.map(Some)
    }

    pub fn set_attributes(&self, attrs: Option<&AttrList>) -> PangoResult<()> {
        let attrs = attrs.map_or(std::ptr::null_mut(), AttrList::as_ptr);
        unsafe { native::pango()?.pango_layout_set_attributes(self.as_ptr(), attrs) }?;
        Ok(())
    }

    /// A copy of the tab stops, or `None` for the default of one stop every
    /// eight spaces.
    pub fn tabs(&self) -> PangoResult<Option<TabArray>> {
        let tabs = unsafe { native::pango()?.pango_layout_get_tabs(self.as_ptr()) }?;
        if tabs.is_null() {
            return Ok(None);
        }
        unsafe { TabArray::from_raw_full(tabs) }.map(Some)
    }

    /// Sets the tab stops. The layout keeps its own copy.
    pub fn set_tabs(&self, tabs: Option<&TabArray>) -> PangoResult<()> {
        let tabs = tabs.map_or(std::ptr::null_mut(), TabArray::as_ptr);
        unsafe { native::pango()?.pango_layout_set_tabs(self.as_ptr(), tabs) }?;
        Ok(())
    }

    // ========== LINE LAYOUT ==========

    /// Width to wrap or ellipsize at, or -1 for no limit.
    pub fn width(&self) -> PangoResult<i32> {
        Ok(unsafe { native::pango()?.pango_layout_get_width(self.as_ptr()) }?)
    }

    /// Any negative width removes the limit.
    pub fn set_width(&self, width: i32) -> PangoResult<()> {
        unsafe { native::pango()?.pango_layout_set_width(self.as_ptr(), width) }?;
        Ok(())
    }

    /// Height to ellipsize at. Negative values are a line count.
    pub fn height(&self) -> PangoResult<i32> {
        Ok(unsafe { native::pango()?.pango_layout_get_height(self.as_ptr()) }?)
    }

    pub fn set_height(&self, height: i32) -> PangoResult<()> {
        unsafe { native::pango()?.pango_layout_set_height(self.as_ptr(), height) }?;
        Ok(())
    }

    /// Extra space between lines.
    pub fn spacing(&self) -> PangoResult<i32> {
        Ok(unsafe { native::pango()?.pango_layout_get_spacing(self.as_ptr()) }?)
    }

    pub fn set_spacing(&self, spacing: i32) -> PangoResult<()> {
        unsafe { native::pango()?.pango_layout_set_spacing(self.as_ptr(), spacing) }?;
        Ok(())
    }

    /// Indentation of the first line; negative values hang.
    pub fn indent(&self) -> PangoResult<i32> {
        Ok(unsafe { native::pango()?.pango_layout_get_indent(self.as_ptr()) }?)
    }

    pub fn set_indent(&self, indent: i32) -> PangoResult<()> {
        unsafe { native::pango()?.pango_layout_set_indent(self.as_ptr(), indent) }?;
        Ok(())
    }

    pub fn justify(&self) -> PangoResult<bool> {
        let justify = unsafe { native::pango()?.pango_layout_get_justify(self.as_ptr()) }?;
        Ok(native::from_gboolean(justify))
    }

    pub fn set_justify(&self, justify: bool) -> PangoResult<()> {
        unsafe { native::pango()?.pango_layout_set_justify(self.as_ptr(), native::to_gboolean(justify)) }?;
        Ok(())
    }

    pub fn alignment(&self) -> PangoResult<Alignment> {
        from_native(unsafe { native::pango()?.pango_layout_get_alignment(self.as_ptr()) }?)
    }

    pub fn set_alignment(&self, alignment: Alignment) -> PangoResult<()> {
        unsafe { native::pango()?.pango_layout_set_alignment(self.as_ptr(), alignment.into()) }?;
        Ok(())
    }

    pub fn ellipsize(&self) -> PangoResult<EllipsizeMode> {
        from_native(unsafe { native::pango()?.pango_layout_get_ellipsize(self.as_ptr()) }?)
    }

    pub fn set_ellipsize(&self, ellipsize: EllipsizeMode) -> PangoResult<()> {
        unsafe { native::pango()?.pango_layout_set_ellipsize(self.as_ptr(), ellipsize.into()) }?;
        Ok(())
    }

    /// Whether any paragraph was actually ellipsized.
    pub fn is_ellipsized(&self) -> PangoResult<bool> {
        let ellipsized = unsafe { native::pango()?.pango_layout_is_ellipsized(self.as_ptr()) }?;
        Ok(native::from_gboolean(ellipsized))
    }

    pub fn wrap(&self) -> PangoResult<WrapMode> {
        from_native(unsafe { native::pango()?.pango_layout_get_wrap(self.as_ptr()) }?)
    }

    pub fn set_wrap(&self, wrap: WrapMode) -> PangoResult<()> {
        unsafe { native::pango()?.pango_layout_set_wrap(self.as_ptr(), wrap.into()) }?;
        Ok(())
    }

    /// Whether any paragraph had to be wrapped.
    pub fn is_wrapped(&self) -> PangoResult<bool> {
        let wrapped = unsafe { native::pango()?.pango_layout_is_wrapped(self.as_ptr()) }?;
        Ok(native::from_gboolean(wrapped))
    }

    // ========== MEASUREMENT ==========

    /// Ink and logical extents in Pango units.
    pub fn extents(&self) -> PangoResult<Extents> {
        let api = native::pango()?;
        extents_with(|ink, logical| unsafe { api.pango_layout_get_extents(self.as_ptr(), ink, logical) })
            .map_err(PangoError::from)
    }

    /// Ink and logical extents in device units.
    pub fn pixel_extents(&self) -> PangoResult<Extents> {
        let api = native::pango()?;
        extents_with(|ink, logical| unsafe { api.pango_layout_get_pixel_extents(self.as_ptr(), ink, logical) })
            .map_err(PangoError::from)
    }

    /// Logical width and height in Pango units.
    pub fn size(&self) -> PangoResult<(i32, i32)> {
        let (mut width, mut height): (c_int, c_int) = (0, 0);
        unsafe { native::pango()?.pango_layout_get_size(self.as_ptr(), &mut width, &mut height) }?;
        Ok((width, height))
    }

    /// Logical width and height in device units.
    pub fn pixel_size(&self) -> PangoResult<(i32, i32)> {
        let (mut width, mut height): (c_int, c_int) = (0, 0);
        unsafe { native::pango()?.pango_layout_get_pixel_size(self.as_ptr(), &mut width, &mut height) }?;
        Ok((width, height))
    }

    /// Distance from the top of the layout to the first baseline.
    pub fn baseline(&self) -> PangoResult<i32> {
        Ok(unsafe { native::pango()?.pango_layout_get_baseline(self.as_ptr()) }?)
    }

    pub fn line_count(&self) -> PangoResult<i32> {
        Ok(unsafe { native::pango()?.pango_layout_get_line_count(self.as_ptr()) }?)
    }

    /// An iterator over the runs, clusters, characters and lines of the
    /// laid out text.
    pub fn iter(&self) -> PangoResult<LayoutIter> {
        unsafe { LayoutIter::from_raw_full(native::pango()?.pango_layout_get_iter(self.as_ptr())?) }
    }
}
