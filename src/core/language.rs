use crate::core::error::{PangoError, PangoResult};
use crate::core::native;
use pangoffi_sys::PangoLanguage;
use std::ffi::CStr;
use std::fmt;
use std::ptr::NonNull;

/// An RFC-3066 language tag, interned by Pango.
///
/// Languages are never freed, so the wrapper is `Copy` and two languages
/// are equal exactly when they are the same interned pointer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    ptr: NonNull<PangoLanguage>,
}

impl Language {
    /// Wraps an interned language pointer. Null maps to `None`.
    ///
    /// # Safety
    /// `ptr` must be null or a `PangoLanguage` obtained from Pango.
    pub unsafe fn from_raw(ptr: *mut PangoLanguage) -> Option<Self> {
        NonNull::new(ptr).map(|ptr| Self { ptr })
    }

    pub fn as_ptr(&self) -> *mut PangoLanguage {
        self.ptr.as_ptr()
    }

    /// Looks up the language for a tag such as `"pt_BR"` or `"en-us"`.
    ///
    /// Returns `None` for an empty tag.
    pub fn from_string(tag: &str) -> PangoResult<Option<Language>> {
        if tag.is_empty() {
            return Ok(None);
        }
        let c_tag = native::to_cstring(tag)?;
        let ptr = unsafe { native::pango()?.pango_language_from_string(c_tag.as_ptr()) }?;
        Ok(unsafe { Self::from_raw(ptr) })
    }

    /// The language of the current locale.
    pub fn default() -> PangoResult<Language> {
        let ptr = unsafe { native::pango()?.pango_language_get_default() }?;
        unsafe { Self::from_raw(ptr) }.ok_or(PangoError::NullPointer)
    }

    /// The user's preferred languages, most preferred first, or `None` when
    /// no preference is configured.
    pub fn preferred() -> PangoResult<Option<Vec<Language>>> {
        let list = unsafe { native::pango()?.pango_language_get_preferred() }?;
        Ok(unsafe { collect_languages(list) })
    }

    /// Whether this language matches any entry of `range_list`, a list of
    /// tags separated by `;`, `:`, `,` or space. `*` matches everything.
    pub fn matches(&self, range_list: &str) -> PangoResult<bool> {
        let c_range = native::to_cstring(range_list)?;
        let matched =
            unsafe { native::pango()?.pango_language_matches(self.as_ptr(), c_range.as_ptr()) }?;
        Ok(native::from_gboolean(matched))
    }

    /// The normalized tag, e.g. `"pt-br"`.
    pub fn as_str(&self) -> PangoResult<&'static str> {
        let ptr = unsafe { native::pango()?.pango_language_to_string(self.as_ptr()) }?;
        if ptr.is_null() {
            return Err(PangoError::NullPointer);
        }
        Ok(unsafe { CStr::from_ptr(ptr) }.to_str()?)
    }

    /// A short piece of text that is representative of the language.
    pub fn sample_string(&self) -> PangoResult<String> {
        let ptr = unsafe { native::pango()?.pango_language_get_sample_string(self.as_ptr()) }?;
        unsafe { native::borrowed_string(ptr) }?.ok_or(PangoError::NullPointer)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str().map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Ok(tag) => write!(f, "Language({tag})"),
            Err(_) => write!(f, "Language({:p})", self.ptr),
        }
    }
}

/// Walks a null-terminated array of interned languages owned by Pango.
///
/// # Safety
/// `list` must be null or a null-terminated array of language pointers.
unsafe fn collect_languages(list: *mut *mut PangoLanguage) -> Option<Vec<Language>> {
    if list.is_null() {
        return None;
    }
    let mut languages = Vec::new();
    let mut cursor = list;
    while let Some(language) = unsafe { Language::from_raw(*cursor) } {
        languages.push(language);
        cursor = unsafe { cursor.add(1) };
    }
    (!languages.is_empty()).then_some(languages)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake(address: usize) -> *mut PangoLanguage {
        address as *mut PangoLanguage
    }

    #[test]
    fn null_pointer_is_no_language() {
        assert!(unsafe { Language::from_raw(std::ptr::null_mut()) }.is_none());
    }

    #[test]
    fn equality_is_pointer_identity() {
        let a = unsafe { Language::from_raw(fake(0x10)) }.unwrap();
        let b = unsafe { Language::from_raw(fake(0x10)) }.unwrap();
        let c = unsafe { Language::from_raw(fake(0x20)) }.unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn preferred_list_stops_at_null() {
        let mut list = [fake(0x10), fake(0x20), std::ptr::null_mut()];
        let languages = unsafe { collect_languages(list.as_mut_ptr()) }.unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[1].as_ptr(), fake(0x20));
    }

    #[test]
    fn missing_or_empty_preference_is_none() {
        assert!(unsafe { collect_languages(std::ptr::null_mut()) }.is_none());
        let mut empty = [std::ptr::null_mut::<PangoLanguage>()];
        assert!(unsafe { collect_languages(empty.as_mut_ptr()) }.is_none());
    }
}
