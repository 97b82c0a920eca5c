//! Raw declarations for the Pango C API and the run-time loader that binds
//! them.
//!
//! The native libraries are opened with `dlopen` on first use rather than
//! linked at build time, so this crate builds without Pango headers or
//! `pkg-config`. Each library gets a call table generated from C-style
//! declarations; tables are loaded once per process and shared.
//!
//! Most users want the safe `pangoffi` crate instead.
//!
//! ## Safety
//!
//! Every table method is `unsafe`: callers must uphold the native contract
//! for each pointer argument. Null checks are the caller's responsibility.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

#[macro_use]
mod native_api;

mod error;
mod gobject;
pub mod loader;
mod pango;
pub mod types;

pub use error::{LoadAttempt, LoadError, SymbolError};
pub use gobject::{GLib, GObject, PangoCairo};
pub use loader::{LibrarySpec, LoaderConfig, NativeLibrary};
pub use pango::Pango;
pub use types::*;

pub use libloading;

use lazy_static::lazy_static;

lazy_static! {
    static ref PANGO: Result<Pango, LoadError> = Pango::load_with(&LoaderConfig::from_env());
    static ref GOBJECT: Result<GObject, LoadError> = GObject::load_with(&LoaderConfig::from_env());
    static ref GLIB: Result<GLib, LoadError> = GLib::load_with(&LoaderConfig::from_env());
    static ref PANGOCAIRO: Result<PangoCairo, LoadError> =
        PangoCairo::load_with(&LoaderConfig::from_env());
}

/// The process-wide libpango table, loaded on first call.
pub fn pango() -> Result<&'static Pango, LoadError> {
    PANGO.as_ref().map_err(Clone::clone)
}

/// The process-wide libgobject table, loaded on first call.
pub fn gobject() -> Result<&'static GObject, LoadError> {
    GOBJECT.as_ref().map_err(Clone::clone)
}

/// The process-wide libglib table, loaded on first call.
pub fn glib() -> Result<&'static GLib, LoadError> {
    GLIB.as_ref().map_err(Clone::clone)
}

/// The process-wide libpangocairo table, loaded on first call.
///
/// Only needed to obtain a font map; everything else works without it.
pub fn pango_cairo() -> Result<&'static PangoCairo, LoadError> {
    PANGOCAIRO.as_ref().map_err(Clone::clone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declaration_lists_are_populated() {
        assert!(Pango::SYMBOLS.contains(&"pango_layout_new"));
        assert!(Pango::SYMBOLS.contains(&"pango_attr_list_equal"));
        assert_eq!(GObject::SYMBOLS, &["g_object_ref", "g_object_unref"]);
        assert_eq!(GLib::SYMBOLS, &["g_free"]);
    }

    #[test]
    fn declarations_are_unique() {
        let mut symbols = Pango::SYMBOLS.to_vec();
        symbols.sort_unstable();
        let before = symbols.len();
        symbols.dedup();
        assert_eq!(before, symbols.len());
    }

    #[test]
    fn loaded_table_resolves_baseline_symbols() {
        // Hosts without Pango only exercise the error path.
        match pango() {
            Ok(api) => {
                assert!(api.has_symbol("pango_version"));
                assert!(api.has_symbol("pango_layout_new"));
                assert!(!api.has_symbol("pango_not_a_function"));
                let version = unsafe { api.pango_version() }.unwrap();
                assert!(version >= 10000);
            }
            Err(err) => {
                assert_eq!(err.library, "pango");
                assert!(!err.attempts.is_empty());
            }
        }
    }
}
