//! Access to the loaded function tables and the string/boolean coercions
//! every wrapper needs at the native boundary.

use crate::core::error::{PangoError, PangoResult};
use pangoffi_sys::{GFALSE, GLib, GObject, GTRUE, Pango, PangoCairo, gboolean, gpointer};
use std::ffi::{CStr, CString, c_char, c_int};

pub(crate) fn pango() -> PangoResult<&'static Pango> {
    Ok(pangoffi_sys::pango()?)
}

pub(crate) fn gobject() -> PangoResult<&'static GObject> {
    Ok(pangoffi_sys::gobject()?)
}

pub(crate) fn glib() -> PangoResult<&'static GLib> {
    Ok(pangoffi_sys::glib()?)
}

pub(crate) fn pango_cairo() -> PangoResult<&'static PangoCairo> {
    Ok(pangoffi_sys::pango_cairo()?)
}

pub(crate) fn to_gboolean(value: bool) -> gboolean {
    if value { GTRUE } else { GFALSE }
}

pub(crate) fn from_gboolean(value: gboolean) -> bool {
    value != GFALSE
}

pub(crate) fn to_cstring(value: &str) -> PangoResult<CString> {
    Ok(CString::new(value)?)
}

/// Copies a borrowed native string. Null maps to `None`.
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string.
pub(crate) unsafe fn borrowed_string(ptr: *const c_char) -> PangoResult<Option<String>> {
    if ptr.is_null() {
        return Ok(None);
    }
    let value = unsafe { CStr::from_ptr(ptr) }.to_str()?;
    Ok(Some(value.to_owned()))
}

/// Copies a newly allocated native string and releases it with `g_free`.
///
/// # Safety
/// `ptr` must be null or a NUL-terminated string allocated by GLib.
pub(crate) unsafe fn owned_string(ptr: *mut c_char) -> PangoResult<String> {
    if ptr.is_null() {
        return Err(PangoError::NullPointer);
    }
    let copied = unsafe { CStr::from_ptr(ptr) }.to_str().map(str::to_owned);
    unsafe { g_free(ptr.cast()) }?;
    Ok(copied?)
}

/// Releases memory allocated by GLib.
///
/// # Safety
/// `ptr` must be null or allocated by the GLib allocator.
pub(crate) unsafe fn g_free(ptr: gpointer) -> PangoResult<()> {
    unsafe { glib()?.g_free(ptr) }?;
    Ok(())
}

/// Byte length of a text argument as the native `int`.
pub(crate) fn text_length(name: &'static str, text: &str) -> PangoResult<c_int> {
    c_int::try_from(text.len()).map_err(|_| {
        PangoError::invalid_argument(name, format!("{} bytes exceeds i32::MAX", text.len()))
    })
}

/// Converts an index-like argument to the native `int`.
pub(crate) fn to_c_int(name: &'static str, value: usize) -> PangoResult<c_int> {
    c_int::try_from(value)
        .map_err(|_| PangoError::invalid_argument(name, format!("{value} exceeds i32::MAX")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gboolean_round_trips() {
        assert_eq!(to_gboolean(true), GTRUE);
        assert_eq!(to_gboolean(false), GFALSE);
        assert!(from_gboolean(2));
        assert!(!from_gboolean(GFALSE));
    }

    #[test]
    fn borrowed_null_is_none() {
        assert_eq!(unsafe { borrowed_string(std::ptr::null()) }.unwrap(), None);
        let text = c"Ubuntu";
        assert_eq!(
            unsafe { borrowed_string(text.as_ptr()) }.unwrap().as_deref(),
            Some("Ubuntu")
        );
    }

    #[test]
    fn interior_nul_is_rejected() {
        assert!(matches!(
            to_cstring("Sans\0Bold"),
            Err(PangoError::StringConversion(_))
        ));
    }

    #[test]
    fn lengths_are_range_checked() {
        assert_eq!(text_length("text", "Παν語").unwrap(), 9);
        assert!(to_c_int("index", usize::MAX).is_err());
    }
}
