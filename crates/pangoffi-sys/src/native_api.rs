//! Expands C-style declaration lists into dynamically loaded call tables.
//!
//! Each invocation produces a struct that owns the opened
//! [`libloading::Library`] and one optional function pointer per declaration.
//! Symbols the library does not export are recorded as absent instead of
//! failing the whole load, so declarations for newer Pango releases can sit
//! next to the baseline API. Calling an absent symbol returns a
//! [`SymbolError`](crate::SymbolError).
//!
//! ```ignore
//! native_api! {
//!     /// libfoo
//!     pub struct Foo;
//!     library = FOO_LIBRARY;
//!
//!     fn foo_new() -> *mut FooObject;
//!     fn foo_free(object: *mut FooObject);
//! }
//! ```

macro_rules! native_api {
    (@ret) => { () };
    (@ret $ret:ty) => { $ret };

    (
        $(#[$meta:meta])*
        pub struct $name:ident;
        library = $spec:ident;
        $(
            $(#[$fmeta:meta])*
            fn $func:ident($($arg:ident: $ty:ty),* $(,)?) $(-> $ret:ty)?;
        )*
    ) => {
        $(#[$meta])*
        #[allow(non_snake_case)]
        pub struct $name {
            library: ::libloading::Library,
            $( $func: Option<unsafe extern "C" fn($($ty),*) $(-> $ret)?>, )*
        }

        impl $name {
            /// Names of every declared function, in declaration order.
            pub const SYMBOLS: &'static [&'static str] = &[$(stringify!($func)),*];

            /// The library this table was resolved from.
            pub fn library(&self) -> &::libloading::Library {
                &self.library
            }

            /// Whether the loaded library exports `name`.
            pub fn has_symbol(&self, name: &str) -> bool {
                match name {
                    $( stringify!($func) => self.$func.is_some(), )*
                    _ => false,
                }
            }

            /// Declared functions the loaded library does not export.
            pub fn missing_symbols(&self) -> Vec<&'static str> {
                let mut missing = Vec::new();
                $(
                    if self.$func.is_none() {
                        missing.push(stringify!($func));
                    }
                )*
                missing
            }

            $(
                $(#[$fmeta])*
                ///
                /// # Safety
                /// Pointer arguments must satisfy the native function's contract.
                #[allow(clippy::too_many_arguments, clippy::missing_safety_doc)]
                pub unsafe fn $func(
                    &self,
                    $($arg: $ty),*
                ) -> Result<native_api!(@ret $($ret)?), $crate::SymbolError> {
                    match self.$func {
                        Some(function) => Ok(unsafe { function($($arg),*) }),
                        None => Err($crate::SymbolError {
                            library: $spec.label,
                            symbol: stringify!($func),
                        }),
                    }
                }
            )*
        }

        impl $crate::loader::NativeLibrary for $name {
            const SPEC: &'static $crate::loader::LibrarySpec = &$spec;

            unsafe fn from_library(library: ::libloading::Library) -> Self {
                $(
                    let $func = unsafe {
                        library
                            .get::<unsafe extern "C" fn($($ty),*) $(-> $ret)?>(
                                concat!(stringify!($func), "\0").as_bytes(),
                            )
                            .map(|symbol| *symbol)
                            .ok()
                    };
                )*
                let table = Self { library, $($func,)* };
                let missing = table.missing_symbols();
                if !missing.is_empty() {
                    ::log::debug!(
                        "{}: {} declared symbols not exported: {}",
                        $spec.label,
                        missing.len(),
                        missing.join(", ")
                    );
                }
                table
            }
        }

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.debug_struct(stringify!($name))
                    .field("library", &$spec.label)
                    .field("symbols", &Self::SYMBOLS.len())
                    .field("missing", &self.missing_symbols())
                    .finish()
            }
        }
    };
}
