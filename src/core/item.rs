use crate::core::error::PangoResult;
use crate::core::font::Font;
use crate::core::language::Language;
use crate::core::object::NativeObject;
use crate::types::enums::{Gravity, from_native};
use pangoffi_sys::PangoItem;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A segment of text with uniform font, language and direction, as
/// produced by itemization.
///
/// Borrowed from the glyph item or layout run that owns it.
#[derive(Clone, Copy)]
pub struct Item<'a> {
    ptr: NonNull<PangoItem>,
    _owner: PhantomData<&'a PangoItem>,
}

impl<'a> Item<'a> {
    /// # Safety
    /// `ptr` must be null or point to an item that outlives `'a`.
    pub(crate) unsafe fn from_raw(ptr: *mut PangoItem) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self {
            ptr,
            _owner: PhantomData,
        })
    }

    pub fn as_ptr(&self) -> *mut PangoItem {
        self.ptr.as_ptr()
    }

    fn raw(&self) -> &'a PangoItem {
        unsafe { self.ptr.as_ref() }
    }

    /// Byte offset of the item from the start of the layout text.
    pub fn offset(&self) -> i32 {
        self.raw().offset
    }

    /// Length of the item in bytes.
    pub fn length(&self) -> i32 {
        self.raw().length
    }

    /// Length of the item in characters.
    pub fn num_chars(&self) -> i32 {
        self.raw().num_chars
    }

    /// Bidirectional embedding level; odd levels are right-to-left.
    pub fn level(&self) -> u8 {
        self.raw().analysis.level
    }

    pub fn gravity(&self) -> PangoResult<Gravity> {
        from_native(i32::from(self.raw().analysis.gravity))
    }

    pub fn language(&self) -> Option<Language> {
        unsafe { Language::from_raw(self.raw().analysis.language) }
    }

    /// The font chosen for the item, if any.
    pub fn font(&self) -> PangoResult<Option<Font>> {
        let font = self.raw().analysis.font;
        if font.is_null() {
            return Ok(None);
        }
        unsafe { Font::from_raw_none(font) }.map(Some)
    }

    /// The byte range of the item within the layout text.
    pub(crate) fn byte_range(&self) -> std::ops::Range<usize> {
        let start = usize::try_from(self.offset()).unwrap_or_default();
        let length = usize::try_from(self.length()).unwrap_or_default();
        start..start + length
    }
}

impl std::fmt::Debug for Item<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Item")
            .field("offset", &self.offset())
            .field("length", &self.length())
            .field("num_chars", &self.num_chars())
            .finish()
    }
}
