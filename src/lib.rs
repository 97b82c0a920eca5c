//! Safe bindings to the Pango text layout library.
//!
//! The native libraries (Pango, PangoCairo, GObject and GLib) are loaded at
//! run time by [`pangoffi_sys`]; nothing links against them at build time.
//! Every call can therefore fail with [`PangoError::Load`] or
//! [`PangoError::MissingSymbol`] when the libraries or a symbol are absent.
//!
//! # Examples
//!
//! ```no_run
//! use pangoffi::prelude::*;
//!
//! let context = FontMap::new()?.create_context()?;
//! let layout = Layout::new(&context)?;
//! layout.set_markup("<b>Hello</b>, world")?;
//!
//! let mut iter = layout.iter()?;
//! loop {
//!     if let Some(run) = iter.run()? {
//!         println!("run of {} bytes", run.item()?.length());
//!     }
//!     if !iter.next_run()? {
//!         break;
//!     }
//! }
//! # Ok::<(), pangoffi::PangoError>(())
//! ```

pub mod convert;
pub mod core;
pub mod types;
pub mod version;

pub use crate::core::error::{PangoError, PangoResult};

pub mod prelude {
    pub use crate::core::attr_list::*;
    pub use crate::core::attribute::*;
    pub use crate::core::context::*;
    pub use crate::core::error::{PangoError, PangoResult};
    pub use crate::core::font::*;
    pub use crate::core::font_description::*;
    pub use crate::core::font_map::*;
    pub use crate::core::font_metrics::*;
    pub use crate::core::glyph_item::*;
    pub use crate::core::glyph_item_iter::*;
    pub use crate::core::item::*;
    pub use crate::core::language::*;
    pub use crate::core::layout::*;
    pub use crate::core::layout_iter::*;
    pub use crate::core::object::NativeObject;
    pub use crate::core::tab_array::*;
    pub use crate::types::color::*;
    pub use crate::types::enums::*;
    pub use crate::types::rectangle::{Extents, Rectangle};
}
