use crate::core::error::{PangoError, PangoResult};
use crate::core::glyph_item::{GlyphItemRef, LayoutRun};
use crate::core::native;
use crate::core::object::{Handle, NativeObject};
use crate::types::rectangle::{Extents, Rectangle, extents_with};
use pangoffi_sys::{PangoLayoutIter, PangoRectangle};
use std::ffi::c_int;

/// A cursor over the lines, runs, clusters and characters of a laid out
/// [`Layout`](crate::core::layout::Layout).
///
/// The iterator holds a reference to its layout. Changing the layout
/// while iterating leaves the iterator pointing at stale lines, so do not.
///
/// All `next_*` methods return `false` once the end of the layout is
/// reached. Positions are in Pango units, relative to the layout's top
/// left corner.
pub struct LayoutIter {
    handle: Handle<LayoutIter>,
}

impl NativeObject for LayoutIter {
    type Raw = PangoLayoutIter;
    const TYPE_NAME: &'static str = "LayoutIter";

    fn from_handle(handle: Handle<Self>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &Handle<Self> {
        &self.handle
    }

    unsafe fn free_raw(ptr: *mut PangoLayoutIter) -> PangoResult<()> {
        unsafe { native::pango()?.pango_layout_iter_free(ptr) }?;
        Ok(())
    }

    unsafe fn copy_raw(ptr: *mut PangoLayoutIter) -> PangoResult<*mut PangoLayoutIter> {
        Ok(unsafe { native::pango()?.pango_layout_iter_copy(ptr) }?)
    }
}

native_wrapper!(LayoutIter);

impl LayoutIter {
    // ========== NAVIGATION ==========

    pub fn next_run(&mut self) -> PangoResult<bool> {
        let moved = unsafe { native::pango()?.pango_layout_iter_next_run(self.as_ptr()) }?;
        Ok(native::from_gboolean(moved))
    }

    pub fn next_char(&mut self) -> PangoResult<bool> {
        let moved = unsafe { native::pango()?.pango_layout_iter_next_char(self.as_ptr()) }?;
        Ok(native::from_gboolean(moved))
    }

    pub fn next_cluster(&mut self) -> PangoResult<bool> {
        let moved = unsafe { native::pango()?.pango_layout_iter_next_cluster(self.as_ptr()) }?;
        Ok(native::from_gboolean(moved))
    }

    pub fn next_line(&mut self) -> PangoResult<bool> {
        let moved = unsafe { native::pango()?.pango_layout_iter_next_line(self.as_ptr()) }?;
        Ok(native::from_gboolean(moved))
    }

    pub fn at_last_line(&self) -> PangoResult<bool> {
        let last = unsafe { native::pango()?.pango_layout_iter_at_last_line(self.as_ptr()) }?;
        Ok(native::from_gboolean(last))
    }

    // ========== POSITION ==========

    /// Byte index of the current position in the layout text. At the end
    /// of a line this is the index of the line's last character plus one.
    pub fn index(&self) -> PangoResult<i32> {
        Ok(unsafe { native::pango()?.pango_layout_iter_get_index(self.as_ptr()) }?)
    }

    /// Y position of the current line's baseline.
    pub fn baseline(&self) -> PangoResult<i32> {
        Ok(unsafe { native::pango()?.pango_layout_iter_get_baseline(self.as_ptr()) }?)
    }

    /// The current run, or `None` at the end of a line (including the
    /// single position of an empty layout).
    pub fn run(&self) -> PangoResult<Option<LayoutRun<'_>>> {
        let run = unsafe { native::pango()?.pango_layout_iter_get_run(self.as_ptr()) }?;
        Ok(unsafe { GlyphItemRef::from_raw(run) })
    }

    // ========== EXTENTS ==========

    /// Logical extents of the current character.
    pub fn char_extents(&self) -> PangoResult<Rectangle> {
        let mut logical = PangoRectangle::default();
        unsafe { native::pango()?.pango_layout_iter_get_char_extents(self.as_ptr(), &mut logical) }?;
        Ok(logical.into())
    }

    /// Ink and logical extents of the current cluster.
    pub fn cluster_extents(&self) -> PangoResult<Extents> {
        let api = native::pango()?;
        extents_with(|ink, logical| unsafe { api.pango_layout_iter_get_cluster_extents(self.as_ptr(), ink, logical) })
            .map_err(PangoError::from)
    }

    /// Ink and logical extents of the current run.
    pub fn run_extents(&self) -> PangoResult<Extents> {
        let api = native::pango()?;
        extents_with(|ink, logical| unsafe { api.pango_layout_iter_get_run_extents(self.as_ptr(), ink, logical) })
            .map_err(PangoError::from)
    }

    /// Ink and logical extents of the current line.
    pub fn line_extents(&self) -> PangoResult<Extents> {
        let api = native::pango()?;
        extents_with(|ink, logical| unsafe { api.pango_layout_iter_get_line_extents(self.as_ptr(), ink, logical) })
            .map_err(PangoError::from)
    }

    /// Ink and logical extents of the whole layout.
    pub fn layout_extents(&self) -> PangoResult<Extents> {
        let api = native::pango()?;
        extents_with(|ink, logical| unsafe { api.pango_layout_iter_get_layout_extents(self.as_ptr(), ink, logical) })
            .map_err(PangoError::from)
    }

    /// Top and bottom of the current line, including half the layout's
    /// line spacing above and below.
    pub fn line_yrange(&self) -> PangoResult<(i32, i32)> {
        let (mut y0, mut y1): (c_int, c_int) = (0, 0);
        unsafe { native::pango()?.pango_layout_iter_get_line_yrange(self.as_ptr(), &mut y0, &mut y1) }?;
        Ok((y0, y1))
    }
}
