//! Shared setup for the integration tests.
//!
//! The tests need the native Pango libraries at run time. When they cannot
//! be loaded each test logs why and returns early instead of failing, so
//! the suite stays green on machines without Pango installed.

#![allow(dead_code, unused_macros)]

use pangoffi::prelude::*;

pub const SAMPLE_TEXT: &str = "Hi from Παν語";

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Whether the Pango library itself can be loaded.
pub fn pango_available() -> bool {
    init_logging();
    match pangoffi::version::version() {
        Ok(_) => true,
        Err(err) => {
            log::warn!("skipping, Pango is unavailable: {err}");
            false
        }
    }
}

/// Whether Pango is at least `major.minor`.
pub fn pango_at_least(major: i32, minor: i32) -> bool {
    pangoffi::version::version_at_least(major, minor, 0).unwrap_or(false)
}

/// A context backed by a fresh PangoCairo font map, or `None` when the
/// libraries are unavailable.
pub fn context() -> Option<Context> {
    if !pango_available() {
        return None;
    }
    match FontMap::new().and_then(|font_map| font_map.create_context()) {
        Ok(context) => Some(context),
        Err(err) => {
            log::warn!("skipping, cannot create a PangoCairo context: {err}");
            None
        }
    }
}

/// A layout holding `text`.
pub fn layout_with_text(context: &Context, text: &str) -> Layout {
    let layout = Layout::new(context).unwrap();
    layout.set_text(text).unwrap();
    layout
}

/// Returns early from the test when Pango is not available.
macro_rules! require_pango {
    () => {
        if !common::pango_available() {
            return;
        }
    };
}

/// Binds a context or returns early from the test.
macro_rules! require_context {
    () => {
        match common::context() {
            Some(context) => context,
            None => return,
        }
    };
}
