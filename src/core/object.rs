//! Shared lifetime, copy and equality semantics for every owning wrapper.
//!
//! A wrapper is a newtype around [`Handle<T>`] and implements
//! [`NativeObject`], supplying the three class-level functions of its native
//! type: how to release a pointer, how to duplicate it and how to compare
//! two of them. Everything else (taking ownership, borrowing, copying,
//! equality, `Debug`) is provided here.
//!
//! Ownership follows the GObject annotations:
//!
//! - *transfer full*: the caller owns the returned pointer, use
//!   [`NativeObject::from_raw_full`];
//! - *transfer none*: the pointer is borrowed, use
//!   [`NativeObject::from_raw_none`] which takes a reference (refcounted
//!   types) or a copy (boxed types).

use crate::core::error::{PangoError, PangoResult};
use crate::core::native;
use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

/// A native Pango type with an owning Rust wrapper.
pub trait NativeObject: Sized {
    /// The native struct the wrapper points to.
    type Raw;

    /// Name used in `Debug` output and logs.
    const TYPE_NAME: &'static str;

    fn from_handle(handle: Handle<Self>) -> Self;

    fn handle(&self) -> &Handle<Self>;

    /// Releases one owned pointer.
    ///
    /// # Safety
    /// `ptr` must be a live pointer owned by the caller.
    unsafe fn free_raw(ptr: *mut Self::Raw) -> PangoResult<()>;

    /// Produces a new owned pointer equivalent to `ptr`.
    ///
    /// # Safety
    /// `ptr` must be live.
    unsafe fn copy_raw(ptr: *mut Self::Raw) -> PangoResult<*mut Self::Raw>;

    /// Acquires ownership of a borrowed pointer. Defaults to
    /// [`copy_raw`](Self::copy_raw); reference-counted boxed types whose
    /// copy is deep take a reference here instead.
    ///
    /// # Safety
    /// `ptr` must be live.
    unsafe fn ref_raw(ptr: *mut Self::Raw) -> PangoResult<*mut Self::Raw> {
        unsafe { Self::copy_raw(ptr) }
    }

    /// Compares two live pointers. Pointer identity unless overridden.
    ///
    /// # Safety
    /// Both pointers must be live.
    unsafe fn equal_raw(a: *mut Self::Raw, b: *mut Self::Raw) -> PangoResult<bool> {
        Ok(std::ptr::eq(a, b))
    }

    /// Takes ownership of `ptr`.
    ///
    /// # Safety
    /// `ptr` must be null or a live pointer whose ownership passes to the
    /// wrapper (one reference, or sole ownership of a boxed value).
    unsafe fn from_raw_full(ptr: *mut Self::Raw) -> PangoResult<Self> {
        let handle = unsafe { Handle::new(ptr) }?;
        Ok(Self::from_handle(handle))
    }

    /// Wraps a borrowed pointer by acquiring a reference or a copy.
    ///
    /// # Safety
    /// `ptr` must be null or live for the duration of the call.
    unsafe fn from_raw_none(ptr: *mut Self::Raw) -> PangoResult<Self> {
        if ptr.is_null() {
            return Err(PangoError::NullPointer);
        }
        unsafe { Self::from_raw_full(Self::ref_raw(ptr)?) }
    }

    /// The wrapped pointer. Ownership stays with the wrapper.
    fn as_ptr(&self) -> *mut Self::Raw {
        self.handle().as_ptr()
    }

    /// Gives up ownership without releasing the pointer.
    fn into_raw(self) -> *mut Self::Raw {
        let ptr = self.as_ptr();
        std::mem::forget(self);
        ptr
    }

    /// A new wrapper over a copy (or new reference) of the native value.
    fn copy(&self) -> PangoResult<Self> {
        unsafe { Self::from_raw_full(Self::copy_raw(self.as_ptr())?) }
    }

    /// Native equality. Identical pointers are always equal.
    fn equals(&self, other: &Self) -> PangoResult<bool> {
        let (a, b) = (self.as_ptr(), other.as_ptr());
        if std::ptr::eq(a, b) {
            return Ok(true);
        }
        unsafe { Self::equal_raw(a, b) }
    }
}

/// Owning, non-null pointer that releases itself through
/// [`NativeObject::free_raw`] on drop.
///
/// Neither `Send` nor `Sync`: Pango objects are not thread-safe.
pub struct Handle<T: NativeObject> {
    ptr: NonNull<T::Raw>,
    _marker: PhantomData<*const T>,
}

impl<T: NativeObject> Handle<T> {
    /// # Safety
    /// See [`NativeObject::from_raw_full`].
    pub unsafe fn new(ptr: *mut T::Raw) -> PangoResult<Self> {
        let ptr = NonNull::new(ptr).ok_or(PangoError::NullPointer)?;
        Ok(Self {
            ptr,
            _marker: PhantomData,
        })
    }

    pub fn as_ptr(&self) -> *mut T::Raw {
        self.ptr.as_ptr()
    }

    pub fn as_non_null(&self) -> NonNull<T::Raw> {
        self.ptr
    }
}

impl<T: NativeObject> Drop for Handle<T> {
    fn drop(&mut self) {
        if let Err(err) = unsafe { T::free_raw(self.ptr.as_ptr()) } {
            log::error!("failed to release {} {:p}: {}", T::TYPE_NAME, self.ptr, err);
        }
    }
}

impl<T: NativeObject> fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:p})", T::TYPE_NAME, self.ptr)
    }
}

/// Release and reference helpers for GObject-derived types.
pub(crate) mod gobject {
    use super::*;

    /// # Safety
    /// `ptr` must be a live GObject owned by the caller.
    pub(crate) unsafe fn unref<R>(ptr: *mut R) -> PangoResult<()> {
        unsafe { native::gobject()?.g_object_unref(ptr.cast()) }?;
        Ok(())
    }

    /// # Safety
    /// `ptr` must be a live GObject.
    pub(crate) unsafe fn add_ref<R>(ptr: *mut R) -> PangoResult<*mut R> {
        let result = unsafe { native::gobject()?.g_object_ref(ptr.cast()) }?;
        if result.is_null() {
            return Err(PangoError::NullPointer);
        }
        Ok(result.cast())
    }
}

/// Implements `Debug` and `PartialEq` (via [`NativeObject::equals`]) for a
/// `struct Name { handle: Handle<Name> }` wrapper.
macro_rules! native_wrapper {
    ($name:ident) => {
        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Debug::fmt(&self.handle, f)
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                match $crate::core::object::NativeObject::equals(self, other) {
                    Ok(equal) => equal,
                    Err(err) => {
                        ::log::warn!(
                            "{} comparison failed: {}",
                            <$name as $crate::core::object::NativeObject>::TYPE_NAME,
                            err
                        );
                        false
                    }
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    thread_local! {
        static FREED: Cell<usize> = const { Cell::new(0) };
    }

    struct Dummy {
        handle: Handle<Dummy>,
    }

    impl NativeObject for Dummy {
        type Raw = u32;
        const TYPE_NAME: &'static str = "Dummy";

        fn from_handle(handle: Handle<Self>) -> Self {
            Self { handle }
        }

        fn handle(&self) -> &Handle<Self> {
            &self.handle
        }

        unsafe fn free_raw(ptr: *mut u32) -> PangoResult<()> {
            drop(unsafe { Box::from_raw(ptr) });
            FREED.with(|freed| freed.set(freed.get() + 1));
            Ok(())
        }

        unsafe fn copy_raw(ptr: *mut u32) -> PangoResult<*mut u32> {
            Ok(Box::into_raw(Box::new(unsafe { *ptr })))
        }

        unsafe fn equal_raw(a: *mut u32, b: *mut u32) -> PangoResult<bool> {
            Ok(unsafe { *a == *b })
        }
    }

    native_wrapper!(Dummy);

    fn boxed(value: u32) -> *mut u32 {
        Box::into_raw(Box::new(value))
    }

    fn freed() -> usize {
        FREED.with(Cell::get)
    }

    #[test]
    fn full_transfer_keeps_the_pointer() {
        let ptr = boxed(7);
        let dummy = unsafe { Dummy::from_raw_full(ptr) }.unwrap();
        assert_eq!(dummy.as_ptr(), ptr);
    }

    #[test]
    fn null_is_rejected() {
        let result = unsafe { Dummy::from_raw_full(std::ptr::null_mut()) };
        assert!(matches!(result, Err(PangoError::NullPointer)));
        let result = unsafe { Dummy::from_raw_none(std::ptr::null_mut()) };
        assert!(matches!(result, Err(PangoError::NullPointer)));
    }

    #[test]
    fn drop_releases_once() {
        let before = freed();
        drop(unsafe { Dummy::from_raw_full(boxed(1)) }.unwrap());
        assert_eq!(freed(), before + 1);
    }

    #[test]
    fn into_raw_skips_release() {
        let before = freed();
        let dummy = unsafe { Dummy::from_raw_full(boxed(2)) }.unwrap();
        let ptr = dummy.into_raw();
        assert_eq!(freed(), before);
        drop(unsafe { Box::from_raw(ptr) });
    }

    #[test]
    fn borrowed_pointer_is_copied() {
        let original = boxed(3);
        let dummy = unsafe { Dummy::from_raw_none(original) }.unwrap();
        assert_ne!(dummy.as_ptr(), original);
        assert_eq!(unsafe { *dummy.as_ptr() }, 3);
        drop(unsafe { Box::from_raw(original) });
    }

    #[test]
    fn equality_uses_native_comparison() {
        let a = unsafe { Dummy::from_raw_full(boxed(5)) }.unwrap();
        let b = a.copy().unwrap();
        let c = unsafe { Dummy::from_raw_full(boxed(6)) }.unwrap();
        assert_ne!(a.as_ptr(), b.as_ptr());
        assert!(a == b);
        assert!(a != c);
        assert!(a.equals(&a).unwrap());
    }

    #[test]
    fn debug_names_the_type() {
        let dummy = unsafe { Dummy::from_raw_full(boxed(9)) }.unwrap();
        assert!(format!("{dummy:?}").starts_with("Dummy(0x"));
    }
}
