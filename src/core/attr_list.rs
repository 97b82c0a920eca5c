use crate::core::attribute::Attribute;
use crate::core::error::PangoResult;
use crate::core::native;
use crate::core::object::{Handle, NativeObject};
use pangoffi_sys::PangoAttrList;

/// A list of attributes applying to ranges of text.
///
/// Attribute lists are reference counted. [`copy`](NativeObject::copy)
/// makes an independent deep copy; lists obtained from a
/// [`Layout`](crate::core::layout::Layout) share the layout's list.
pub struct AttrList {
    handle: Handle<AttrList>,
}

impl NativeObject for AttrList {
    type Raw = PangoAttrList;
    const TYPE_NAME: &'static str = "AttrList";

    fn from_handle(handle: Handle<Self>) -> Self {
        Self { handle }
    }

    fn handle(&self) -> &Handle<Self> {
        &self.handle
    }

    unsafe fn free_raw(ptr: *mut PangoAttrList) -> PangoResult<()> {
        unsafe { native::pango()?.pango_attr_list_unref(ptr) }?;
        Ok(())
    }

    unsafe fn copy_raw(ptr: *mut PangoAttrList) -> PangoResult<*mut PangoAttrList> {
        Ok(unsafe { native::pango()?.pango_attr_list_copy(ptr) }?)
    }

    unsafe fn ref_raw(ptr: *mut PangoAttrList) -> PangoResult<*mut PangoAttrList> {
        Ok(unsafe { native::pango()?.pango_attr_list_ref(ptr) }?)
    }

    /// Requires Pango 1.46; older libraries report
    /// [`MissingSymbol`](crate::PangoError::MissingSymbol).
    unsafe fn equal_raw(a: *mut PangoAttrList, b: *mut PangoAttrList) -> PangoResult<bool> {
        let equal = unsafe { native::pango()?.pango_attr_list_equal(a, b) }?;
        Ok(native::from_gboolean(equal))
    }
}

native_wrapper!(AttrList);

impl AttrList {
    pub fn new() -> PangoResult<Self> {
        unsafe { Self::from_raw_full(native::pango()?.pango_attr_list_new()?) }
    }

    /// Inserts `attr` after any existing attributes with the same start
    /// index. The list takes ownership of the attribute.
    pub fn insert(&self, attr: Attribute) -> PangoResult<()> {
        let api = native::pango()?;
        unsafe { api.pango_attr_list_insert(self.as_ptr(), attr.into_raw()) }?;
        Ok(())
    }

    /// Inserts `attr` before any existing attributes with the same start
    /// index. The list takes ownership of the attribute.
    pub fn insert_before(&self, attr: Attribute) -> PangoResult<()> {
        let api = native::pango()?;
        unsafe { api.pango_attr_list_insert_before(self.as_ptr(), attr.into_raw()) }?;
        Ok(())
    }

    /// Inserts `attr`, merging it with or replacing overlapping attributes
    /// of the same type. The list takes ownership of the attribute.
    pub fn change(&self, attr: Attribute) -> PangoResult<()> {
        let api = native::pango()?;
        unsafe { api.pango_attr_list_change(self.as_ptr(), attr.into_raw()) }?;
        Ok(())
    }

    /// Opens a gap of `len` bytes at `pos` and copies the attributes of
    /// `other` into it, shifted by `pos`. Attributes of `self` that span
    /// `pos` are extended across the gap.
    pub fn splice(&self, other: &AttrList, pos: usize, len: usize) -> PangoResult<()> {
        let pos = native::to_c_int("pos", pos)?;
        let len = native::to_c_int("len", len)?;
        unsafe { native::pango()?.pango_attr_list_splice(self.as_ptr(), other.as_ptr(), pos, len) }?;
        Ok(())
    }
}
