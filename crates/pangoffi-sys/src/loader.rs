//! Locating and opening the native libraries.
//!
//! Every library has a fixed list of platform-specific file names which are
//! tried in order. An explicit path can be supplied through an environment
//! variable (see [`LibrarySpec::env_var`]) or programmatically through
//! [`LoaderConfig::with_override`]; overrides are tried before the built-in
//! names.
//!
//! ```bash
//! PANGOFFI_PANGO_LIBRARY=/opt/pango/lib/libpango-1.0.so.0 cargo test
//! ```

use crate::error::{LoadAttempt, LoadError};
use libloading::Library;
use std::collections::HashMap;
use std::ffi::OsString;

/// Where to look for one native library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LibrarySpec {
    /// Short name used in logs and errors.
    pub label: &'static str,
    /// Environment variable holding an explicit path.
    pub env_var: &'static str,
    /// File names handed to the platform loader, in order.
    pub candidates: &'static [&'static str],
}

#[cfg(all(unix, not(target_os = "macos")))]
mod names {
    pub const PANGO: &[&str] = &["libpango-1.0.so.0", "libpango-1.0.so"];
    pub const PANGOCAIRO: &[&str] = &["libpangocairo-1.0.so.0", "libpangocairo-1.0.so"];
    pub const GOBJECT: &[&str] = &["libgobject-2.0.so.0", "libgobject-2.0.so"];
    pub const GLIB: &[&str] = &["libglib-2.0.so.0", "libglib-2.0.so"];
}

#[cfg(target_os = "macos")]
mod names {
    pub const PANGO: &[&str] = &["libpango-1.0.0.dylib", "libpango-1.0.dylib"];
    pub const PANGOCAIRO: &[&str] = &["libpangocairo-1.0.0.dylib", "libpangocairo-1.0.dylib"];
    pub const GOBJECT: &[&str] = &["libgobject-2.0.0.dylib", "libgobject-2.0.dylib"];
    pub const GLIB: &[&str] = &["libglib-2.0.0.dylib", "libglib-2.0.dylib"];
}

#[cfg(windows)]
mod names {
    pub const PANGO: &[&str] = &["libpango-1.0-0.dll", "pango-1.0-0.dll", "pango-1.0.dll"];
    pub const PANGOCAIRO: &[&str] = &[
        "libpangocairo-1.0-0.dll",
        "pangocairo-1.0-0.dll",
        "pangocairo-1.0.dll",
    ];
    pub const GOBJECT: &[&str] = &["libgobject-2.0-0.dll", "gobject-2.0-0.dll", "gobject-2.0.dll"];
    pub const GLIB: &[&str] = &["libglib-2.0-0.dll", "glib-2.0-0.dll", "glib-2.0.dll"];
}

#[cfg(not(any(unix, windows)))]
mod names {
    pub const PANGO: &[&str] = &[];
    pub const PANGOCAIRO: &[&str] = &[];
    pub const GOBJECT: &[&str] = &[];
    pub const GLIB: &[&str] = &[];
}

pub const PANGO_LIBRARY: LibrarySpec = LibrarySpec {
    label: "pango",
    env_var: "PANGOFFI_PANGO_LIBRARY",
    candidates: names::PANGO,
};

pub const PANGOCAIRO_LIBRARY: LibrarySpec = LibrarySpec {
    label: "pangocairo",
    env_var: "PANGOFFI_PANGOCAIRO_LIBRARY",
    candidates: names::PANGOCAIRO,
};

pub const GOBJECT_LIBRARY: LibrarySpec = LibrarySpec {
    label: "gobject",
    env_var: "PANGOFFI_GOBJECT_LIBRARY",
    candidates: names::GOBJECT,
};

pub const GLIB_LIBRARY: LibrarySpec = LibrarySpec {
    label: "glib",
    env_var: "PANGOFFI_GLIB_LIBRARY",
    candidates: names::GLIB,
};

/// Every library the bindings know how to load.
pub const ALL_LIBRARIES: [LibrarySpec; 4] =
    [PANGO_LIBRARY, PANGOCAIRO_LIBRARY, GOBJECT_LIBRARY, GLIB_LIBRARY];

/// Explicit library paths that take precedence over the built-in names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoaderConfig {
    overrides: HashMap<&'static str, OsString>,
}

impl LoaderConfig {
    /// A configuration with no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the `PANGOFFI_*_LIBRARY` variables of every known library.
    ///
    /// Empty values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var_os(name))
    }

    /// Like [`from_env`](Self::from_env) with a caller-supplied lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<OsString>) -> Self {
        let mut config = Self::new();
        for spec in ALL_LIBRARIES {
            if let Some(path) = lookup(spec.env_var).filter(|p| !p.is_empty()) {
                log::debug!("{} overridden by {}: {:?}", spec.label, spec.env_var, path);
                config.overrides.insert(spec.label, path);
            }
        }
        config
    }

    /// Sets the path tried first for `spec`.
    pub fn with_override(mut self, spec: &LibrarySpec, path: impl Into<OsString>) -> Self {
        self.overrides.insert(spec.label, path.into());
        self
    }

    /// The override for `spec`, if one is set.
    pub fn override_for(&self, spec: &LibrarySpec) -> Option<&OsString> {
        self.overrides.get(spec.label)
    }

    /// Paths tried for `spec`, in order.
    pub fn search_paths(&self, spec: &LibrarySpec) -> Vec<OsString> {
        self.override_for(spec)
            .cloned()
            .into_iter()
            .chain(spec.candidates.iter().map(OsString::from))
            .collect()
    }
}

/// Opens the first loadable path for `spec`.
pub fn open(spec: &LibrarySpec, config: &LoaderConfig) -> Result<Library, LoadError> {
    let mut attempts = Vec::new();

    for path in config.search_paths(spec) {
        log::debug!("loading {} from {:?}", spec.label, path);
        match unsafe { Library::new(&path) } {
            Ok(library) => {
                log::info!("loaded {} from {:?}", spec.label, path);
                return Ok(library);
            }
            Err(err) => attempts.push(LoadAttempt {
                path: path.to_string_lossy().into_owned(),
                reason: err.to_string(),
            }),
        }
    }

    let error = LoadError {
        library: spec.label,
        attempts,
    };
    log::warn!("{}", error);
    Err(error)
}

/// A call table produced by `native_api!`.
pub trait NativeLibrary: Sized {
    /// Where the table's library is found.
    const SPEC: &'static LibrarySpec;

    /// Resolves every declared symbol in `library`.
    ///
    /// # Safety
    /// `library` must be the native library the declarations describe; the
    /// resolved pointers are called with the declared signatures.
    unsafe fn from_library(library: Library) -> Self;

    /// Opens the library named by [`Self::SPEC`] and resolves the table.
    fn load_with(config: &LoaderConfig) -> Result<Self, LoadError> {
        let library = open(Self::SPEC, config)?;
        Ok(unsafe { Self::from_library(library) })
    }
}
