//! Plain value types shared by the wrappers: enums and flags, rectangles
//! and colors.

pub mod color;
pub mod enums;
pub mod rectangle;
