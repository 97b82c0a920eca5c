//! Run-time version of the loaded Pango.

use crate::core::error::PangoResult;
use crate::core::native;

/// Encodes a version the way `PANGO_VERSION_ENCODE` does: major, minor and
/// micro are worth 10000, 100 and 1.
pub const fn version_encode(major: i32, minor: i32, micro: i32) -> i32 {
    major * 10000 + minor * 100 + micro
}

/// The loaded library's version, e.g. `14204` for 1.42.4.
pub fn version() -> PangoResult<i32> {
    Ok(unsafe { native::pango()?.pango_version() }?)
}

/// The loaded library's version as text, e.g. `"1.42.4"`.
pub fn version_string() -> PangoResult<String> {
    let ptr = unsafe { native::pango()?.pango_version_string() }?;
    unsafe { native::borrowed_string(ptr) }?.ok_or(crate::PangoError::NullPointer)
}

/// Checks the loaded library against a required version.
///
/// `None` when it is compatible, otherwise a message describing the
/// mismatch.
pub fn version_check(major: i32, minor: i32, micro: i32) -> PangoResult<Option<String>> {
    let ptr = unsafe { native::pango()?.pango_version_check(major, minor, micro) }?;
    unsafe { native::borrowed_string(ptr) }
}

/// Whether the loaded library is at least `major.minor.micro`.
pub fn version_at_least(major: i32, minor: i32, micro: i32) -> PangoResult<bool> {
    Ok(version()? >= version_encode(major, minor, micro))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_weights_components() {
        assert_eq!(version_encode(1, 42, 4), 14204);
        assert_eq!(version_encode(1, 50, 0), 15000);
        assert!(version_encode(1, 46, 0) > version_encode(1, 44, 99));
    }
}
