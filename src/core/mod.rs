//! Safe wrappers over the native Pango objects.

#[macro_use]
pub mod object;

pub mod attr_list;
pub mod attribute;
pub mod context;
pub mod error;
pub mod font;
pub mod font_description;
pub mod font_map;
pub mod font_metrics;
pub mod glyph_item;
pub mod glyph_item_iter;
pub mod item;
pub mod language;
pub mod layout;
pub mod layout_iter;
pub(crate) mod native;
pub mod tab_array;
