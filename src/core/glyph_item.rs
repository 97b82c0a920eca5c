use crate::core::error::{PangoError, PangoResult};
use crate::core::item::Item;
use crate::core::native;
use crate::core::object::{Handle, NativeObject};
use pangoffi_sys::{PangoGlyphInfo, PangoGlyphItem};
use std::ffi::{CString, c_int};
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A positioned glyph within a glyph string.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GlyphInfo {
    pub glyph: u32,
    /// Advance width in Pango units.
    pub width: i32,
    pub x_offset: i32,
    pub y_offset: i32,
    /// Whether this glyph starts a cluster.
    pub is_cluster_start: bool,
}

impl From<&PangoGlyphInfo> for GlyphInfo {
    fn from(info: &PangoGlyphInfo) -> Self {
        Self {
            glyph: info.glyph,
            width: info.geometry.width,
            x_offset: info.geometry.x_offset,
            y_offset: info.geometry.y_offset,
            is_cluster_start: info.attr & 1 != 0,
        }
    }
}

/// A run of a laid out line, borrowed from the [`LayoutIter`] that
/// produced it.
///
/// [`LayoutIter`]: crate::core::layout_iter::LayoutIter
pub type LayoutRun<'a> = GlyphItemRef<'a>;

/// A borrowed glyph item: an [`Item`] together with its shaped glyphs.
#[derive(Clone, Copy)]
pub struct GlyphItemRef<'a> {
    ptr: NonNull<PangoGlyphItem>,
    _owner: PhantomData<&'a PangoGlyphItem>,
}

impl<'a> GlyphItemRef<'a> {
    /// # Safety
    /// `ptr` must be null or point to a glyph item that outlives `'a`.
    pub(crate) unsafe fn from_raw(ptr: *mut PangoGlyphItem) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self {
            ptr,
            _owner: PhantomData,
        })
    }

    pub fn as_ptr(&self) -> *mut PangoGlyphItem {
        self.ptr.as_ptr()
    }

    fn raw(&self) -> &'a PangoGlyphItem {
        unsafe { self.ptr.as_ref() }
    }

    pub fn item(&self) -> PangoResult<Item<'a>> {
        unsafe { Item::from_raw(self.raw().item) }.ok_or(PangoError::NullPointer)
    }

    /// The shaped glyphs, in visual order.
    pub fn glyphs(&self) -> Vec<GlyphInfo> {
        let glyphs = self.raw().glyphs;
        if glyphs.is_null() {
            return Vec::new();
        }
        let glyphs = unsafe { &*glyphs };
        let count = usize::try_from(glyphs.num_glyphs).unwrap_or_default();
        if glyphs.glyphs.is_null() || count == 0 {
            return Vec::new();
        }
        unsafe { std::slice::from_raw_parts(glyphs.glyphs, count) }
            .iter()
            .map(GlyphInfo::from)
            .collect()
    }

    /// Logical width of each character of the item, in Pango units.
    ///
    /// `text` is the full text the item was created from (for a layout
    /// run, [`Layout::text`](crate::core::layout::Layout::text)). A cluster
    /// spanning several characters has its width divided evenly among them.
    pub fn logical_widths(&self, text: &str) -> PangoResult<Vec<i32>> {
        let item = self.item()?;
        let text = item_text(&item, text)?;
        let mut widths: Vec<c_int> = vec![0; usize::try_from(item.num_chars()).unwrap_or_default()];
        unsafe { native::pango()?.pango_glyph_item_get_logical_widths(self.as_ptr(), text.as_ptr(), widths.as_mut_ptr()) }?;
        Ok(widths)
    }

    /// An owned deep copy.
    pub fn to_owned(&self) -> PangoResult<GlyphItem> {
        unsafe { GlyphItem::from_raw_none(self.as_ptr()) }
    }
}

impl std::fmt::Debug for GlyphItemRef<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphItemRef")
            .field("item", &self.item().ok())
            .field("glyphs", &self.glyphs().len())
            .finish()
    }
}

/// An owned glyph item, typically a copy of a layout run or the result of
/// [`GlyphItem::split`].
pub struct GlyphItem {
    handle: Handle<GlyphItem>,
}

impl NativeObject for GlyphItem {
    type Raw = PangoGlyphItem;
    const TYPE_NAME: &'static str = "GlyphItem";

    fn from_handle(handle: Handle<Self>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &Handle<Self> {
        &self.handle
    }

    unsafe fn free_raw(ptr: *mut PangoGlyphItem) -> PangoResult<()> {
        unsafe { native::pango()?.pango_glyph_item_free(ptr) }?;
        Ok(())
    }

    unsafe fn copy_raw(ptr: *mut PangoGlyphItem) -> PangoResult<*mut PangoGlyphItem> {
        Ok(unsafe { native::pango()?.pango_glyph_item_copy(ptr) }?)
    }
}

native_wrapper!(GlyphItem);

impl GlyphItem {
    /// Borrows this item for the read accessors and cluster iteration.
    pub fn as_glyph_item_ref(&self) -> GlyphItemRef<'_> {
        GlyphItemRef {
            ptr: self.handle.as_non_null(),
            _owner: PhantomData,
        }
    }

    pub fn item(&self) -> PangoResult<Item<'_>> {
        self.as_glyph_item_ref().item()
    }

    pub fn glyphs(&self) -> Vec<GlyphInfo> {
        self.as_glyph_item_ref().glyphs()
    }

    /// See [`GlyphItemRef::logical_widths`].
    pub fn logical_widths(&self, text: &str) -> PangoResult<Vec<i32>> {
        self.as_glyph_item_ref().logical_widths(text)
    }

    /// Splits off the first `split_index` bytes of the item.
    ///
    /// `self` keeps the remainder and the returned item holds the leading
    /// part. `split_index` is relative to the start of the item and must
    /// fall strictly inside it, on a cluster boundary.
    pub fn split(&mut self, text: &str, split_index: usize) -> PangoResult<GlyphItem> {
        let item = self.item()?;
        let length = usize::try_from(item.length()).unwrap_or_default();
        PangoError::check(
            split_index > 0 && split_index < length,
            "split_index",
            format!("{split_index} is not inside an item of {length} bytes"),
        )?;
        let native_text = item_text(&item, text)?;
        let offset = item.byte_range().start;
        PangoError::check(
            text.is_char_boundary(offset + split_index),
            "split_index",
            format!("{split_index} is not on a character boundary"),
        )?;
        let index = native::to_c_int("split_index", split_index)?;
        unsafe {
            let split = native::pango()?.pango_glyph_item_split(self.as_ptr(), native_text.as_ptr(), index)?;
            Self::from_raw_full(split)
        }
    }
}

/// Checks that `text` covers `item` and converts it for the native call.
pub(crate) fn item_text(item: &Item<'_>, text: &str) -> PangoResult<CString> {
    let range = item.byte_range();
    PangoError::check(
        text.get(range.clone()).is_some(),
        "text",
        format!("bytes {range:?} are not a character range of a {}-byte text", text.len()),
    )?;
    native::to_cstring(text)
}
