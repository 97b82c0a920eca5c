use crate::core::error::{PangoError, PangoResult};
use crate::core::native;
use crate::core::object::{Handle, NativeObject};
use crate::types::enums::{TabAlign, from_native};
use pangoffi_sys::{PangoTabAlign, PangoTabArray, gint};

/// A tab stop: its alignment and its position in Pango units (or pixels
/// when the array's positions are in pixels).
pub type Tab = (TabAlign, i32);

/// An array of tab stops for a [`Layout`](crate::core::layout::Layout).
pub struct TabArray {
    handle: Handle<TabArray>,
}

impl NativeObject for TabArray {
    type Raw = PangoTabArray;
    const TYPE_NAME: &'static str = "TabArray";

    fn from_handle(handle: Handle<Self>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &Handle<Self> {
        &self.handle
    }

    unsafe fn free_raw(ptr: *mut PangoTabArray) -> PangoResult<()> {
        unsafe { native::pango()?.pango_tab_array_free(ptr) }?;
        Ok(())
    }

    unsafe fn copy_raw(ptr: *mut PangoTabArray) -> PangoResult<*mut PangoTabArray> {
        Ok(unsafe { native::pango()?.pango_tab_array_copy(ptr) }?)
    }
}

native_wrapper!(TabArray);

impl TabArray {
    /// An array of `initial_size` tabs, each left aligned at position 0.
    pub fn new(initial_size: usize, positions_in_pixels: bool) -> PangoResult<Self> {
        let size = native::to_c_int("initial_size", initial_size)?;
        let pixels = native::to_gboolean(positions_in_pixels);
        unsafe { Self::from_raw_full(native::pango()?.pango_tab_array_new(size, pixels)?) }
    }

    /// Number of tab stops.
    pub fn len(&self) -> PangoResult<usize> {
        let size = unsafe { native::pango()?.pango_tab_array_get_size(self.as_ptr()) }?;
        Ok(usize::try_from(size).unwrap_or_default())
    }

    pub fn is_empty(&self) -> PangoResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Grows or shrinks the array. New tabs are left aligned at 0.
    pub fn resize(&mut self, new_size: usize) -> PangoResult<()> {
        let size = native::to_c_int("new_size", new_size)?;
        unsafe { native::pango()?.pango_tab_array_resize(self.as_ptr(), size) }?;
        Ok(())
    }

    fn check_index(&self, index: usize) -> PangoResult<gint> {
        let len = self.len()?;
        PangoError::check(index < len, "tab_index", format!("{index} is out of bounds for {len} tabs"))?;
        native::to_c_int("tab_index", index)
    }

    pub fn set_tab(&mut self, index: usize, alignment: TabAlign, location: i32) -> PangoResult<()> {
        let index = self.check_index(index)?;
        unsafe { native::pango()?.pango_tab_array_set_tab(self.as_ptr(), index, alignment.into(), location) }?;
        Ok(())
    }

    pub fn tab(&self, index: usize) -> PangoResult<Tab> {
        let index = self.check_index(index)?;
        let mut alignment: PangoTabAlign = 0;
        let mut location: gint = 0;
        unsafe {
            native::pango()?.pango_tab_array_get_tab(self.as_ptr(), index, &mut alignment, &mut location)
        }?;
        Ok((from_native(alignment)?, location))
    }

    /// Every tab stop, in order.
    pub fn tabs(&self) -> PangoResult<Vec<Tab>> {
        let len = self.len()?;
        let api = native::pango()?;
        let mut alignments: *mut PangoTabAlign = std::ptr::null_mut();
        let mut locations: *mut gint = std::ptr::null_mut();
        unsafe { api.pango_tab_array_get_tabs(self.as_ptr(), &mut alignments, &mut locations) }?;

        let tabs: PangoResult<Vec<Tab>> = if alignments.is_null() || locations.is_null() {
            Ok(Vec::new())
        } else {
            let alignments_slice = unsafe { std::slice::from_raw_parts(alignments, len) };
            let locations_slice = unsafe { std::slice::from_raw_parts(locations, len) };
            alignments_slice
                .iter()
                .zip(locations_slice)
                .map(|(&alignment, &location)| Ok((from_native(alignment)?, location)))
                .collect()
        };

        unsafe {
            native::g_free(alignments.cast())?;
            native::g_free(locations.cast())?;
        }
        tabs
    }

    /// Replaces every tab stop, resizing the array to `tabs.len()`.
    pub fn set_tabs(&mut self, tabs: &[Tab]) -> PangoResult<()> {
        self.resize(tabs.len())?;
        for (index, &(alignment, location)) in tabs.iter().enumerate() {
            self.set_tab(index, alignment, location)?;
        }
        Ok(())
    }

    pub fn positions_in_pixels(&self) -> PangoResult<bool> {
        let pixels = unsafe { native::pango()?.pango_tab_array_get_positions_in_pixels(self.as_ptr()) }?;
        Ok(native::from_gboolean(pixels))
    }

    /// Requires Pango 1.50.
    pub fn set_positions_in_pixels(&mut self, positions_in_pixels: bool) -> PangoResult<()> {
        let pixels = native::to_gboolean(positions_in_pixels);
        unsafe { native::pango()?.pango_tab_array_set_positions_in_pixels(self.as_ptr(), pixels) }?;
        Ok(())
    }

    /// The decimal point character of each tab. `None` means the locale's
    /// decimal point. Only relevant for [`TabAlign::Decimal`] tabs.
    ///
    /// Requires Pango 1.50.
    pub fn decimal_points(&self) -> PangoResult<Vec<Option<char>>> {
        let api = native::pango()?;
        (0..self.len()?)
            .map(|index| {
                let index = native::to_c_int("tab_index", index)?;
                let point = unsafe { api.pango_tab_array_get_decimal_point(self.as_ptr(), index) }?;
                Ok(decimal_point_from_native(point))
            })
            .collect()
    }

    /// Sets the decimal point of every tab. `points` must have one entry
    /// per tab.
    ///
    /// Requires Pango 1.50.
    pub fn set_decimal_points(&mut self, points: &[Option<char>]) -> PangoResult<()> {
        let len = self.len()?;
        if points.len() != len {
            return Err(PangoError::LengthMismatch {
                expected: len,
                actual: points.len(),
            });
        }
        let api = native::pango()?;
        for (index, point) in points.iter().enumerate() {
            let index = native::to_c_int("tab_index", index)?;
            let value = point.map_or(0, u32::from);
            unsafe { api.pango_tab_array_set_decimal_point(self.as_ptr(), index, value) }?;
        }
        Ok(())
    }
}

fn decimal_point_from_native(point: u32) -> Option<char> {
    if point == 0 { None } else { char::from_u32(point) }
}
