use crate::core::error::PangoResult;
use crate::core::glyph_item::{GlyphItemRef, item_text};
use crate::core::native;
use pangoffi_sys::PangoGlyphItemIter;
use std::ffi::CString;

/// Walks the clusters of a glyph item, in either direction.
///
/// A cluster is the smallest unit of text that maps to a run of glyphs.
/// Glyph indices and byte/char indices are reported as half-open ranges;
/// for right-to-left items the glyph range runs backwards (`start_glyph`
/// is greater than `end_glyph`). Byte indices are relative to the start of
/// the text, char indices to the start of the item.
///
/// # Examples
///
/// ```no_run
/// use pangoffi::prelude::*;
///
/// let context = FontMap::new()?.create_context()?;
/// let layout = Layout::new(&context)?;
/// layout.set_text("Hello")?;
/// let text = layout.text()?;
///
/// let iter = layout.iter()?;
/// if let Some(run) = iter.run()? {
///     if let Some(mut clusters) = GlyphItemIter::start(run, &text)? {
///         loop {
///             println!("bytes {}..{}", clusters.start_index(), clusters.end_index());
///             if !clusters.next_cluster()? {
///                 break;
///             }
///         }
///     }
/// }
/// # Ok::<(), pangoffi::PangoError>(())
/// ```
pub struct GlyphItemIter<'a> {
    raw: PangoGlyphItemIter,
    glyph_item: GlyphItemRef<'a>,
    text: &'a str,
    // Referenced by `raw.text` for as long as the iterator lives.
    native_text: CString,
}

impl<'a> GlyphItemIter<'a> {
    /// Positions a new iterator on the first cluster, or returns `None`
    /// when the item has no clusters.
    pub fn start(glyph_item: GlyphItemRef<'a>, text: &'a str) -> PangoResult<Option<Self>> {
        Self::init(glyph_item, text, true)
    }

    /// Positions a new iterator on the last cluster, or returns `None`
    /// when the item has no clusters.
    pub fn end(glyph_item: GlyphItemRef<'a>, text: &'a str) -> PangoResult<Option<Self>> {
        Self::init(glyph_item, text, false)
    }

    fn init(glyph_item: GlyphItemRef<'a>, text: &'a str, at_start: bool) -> PangoResult<Option<Self>> {
        let native_text = item_text(&glyph_item.item()?, text)?;
        let api = native::pango()?;
        let mut iter = Self {
            raw: PangoGlyphItemIter::default(),
            glyph_item,
            text,
            native_text,
        };
        let raw = &mut iter.raw;
        let text_ptr = iter.native_text.as_ptr();
        let found = unsafe {
            if at_start {
                api.pango_glyph_item_iter_init_start(raw, glyph_item.as_ptr(), text_ptr)
            } else {
                api.pango_glyph_item_iter_init_end(raw, glyph_item.as_ptr(), text_ptr)
            }
        }?;
        Ok(native::from_gboolean(found).then_some(iter))
    }

    /// Advances to the next cluster. Returns `false`, leaving the iterator
    /// unchanged, when already on the last one.
    pub fn next_cluster(&mut self) -> PangoResult<bool> {
        let moved = unsafe { native::pango()?.pango_glyph_item_iter_next_cluster(&mut self.raw) }?;
        Ok(native::from_gboolean(moved))
    }

    /// Moves to the previous cluster. Returns `false`, leaving the iterator
    /// unchanged, when already on the first one.
    pub fn prev_cluster(&mut self) -> PangoResult<bool> {
        let moved = unsafe { native::pango()?.pango_glyph_item_iter_prev_cluster(&mut self.raw) }?;
        Ok(native::from_gboolean(moved))
    }

    pub fn glyph_item(&self) -> GlyphItemRef<'a> {
        self.glyph_item
    }

    /// The text the iterator was created with.
    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn start_glyph(&self) -> i32 {
        self.raw.start_glyph
    }

    pub fn start_index(&self) -> i32 {
        self.raw.start_index
    }

    pub fn start_char(&self) -> i32 {
        self.raw.start_char
    }

    pub fn end_glyph(&self) -> i32 {
        self.raw.end_glyph
    }

    pub fn end_index(&self) -> i32 {
        self.raw.end_index
    }

    pub fn end_char(&self) -> i32 {
        self.raw.end_char
    }

    /// The text of the current cluster.
    pub fn cluster_text(&self) -> Option<&'a str> {
        let start = usize::try_from(self.start_index()).ok()?;
        let end = usize::try_from(self.end_index()).ok()?;
        self.text.get(start..end)
    }
}

impl std::fmt::Debug for GlyphItemIter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphItemIter")
            .field("glyphs", &(self.start_glyph()..self.end_glyph()))
            .field("bytes", &(self.start_index()..self.end_index()))
            .field("chars", &(self.start_char()..self.end_char()))
            .finish()
    }
}
