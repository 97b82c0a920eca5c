use pangoffi_sys::{LoadError, SymbolError};
use std::ffi::NulError;
use std::str::Utf8Error;
use thiserror::Error;

pub type PangoResult<T> = Result<T, PangoError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PangoError {
    #[error("Null pointer encountered")]
    NullPointer,

    #[error("Native library unavailable: {0}")]
    Load(#[from] LoadError),

    #[error("Native function `{0}` is not available in the loaded Pango")]
    MissingSymbol(&'static str),

    #[error("String conversion error: {0}")]
    StringConversion(#[from] NulError),

    #[error("UTF-8 conversion error: {0}")]
    Utf8Conversion(#[from] Utf8Error),

    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("Unknown {type_name} value: {value}")]
    UnknownEnumValue { type_name: &'static str, value: i64 },

    #[error("Length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

impl PangoError {
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        PangoError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }

    /// Fails with [`PangoError::InvalidArgument`] unless `condition` holds.
    pub fn check(condition: bool, name: &'static str, reason: impl Into<String>) -> PangoResult<()> {
        if condition {
            Ok(())
        } else {
            Err(Self::invalid_argument(name, reason))
        }
    }
}

impl From<SymbolError> for PangoError {
    fn from(err: SymbolError) -> Self {
        PangoError::MissingSymbol(err.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_error_keeps_the_symbol_name() {
        let err: PangoError = SymbolError {
            library: "pango",
            symbol: "pango_tab_array_set_decimal_point",
        }
        .into();
        assert_eq!(
            err,
            PangoError::MissingSymbol("pango_tab_array_set_decimal_point")
        );
    }

    #[test]
    fn check_reports_the_argument() {
        assert!(PangoError::check(true, "weight", "unused").is_ok());
        let err = PangoError::check(false, "weight", "must be in 100..=1000").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid argument `weight`: must be in 100..=1000"
        );
    }

    #[test]
    fn nul_bytes_become_string_conversion_errors() {
        let err: PangoError = std::ffi::CString::new("a\0b").unwrap_err().into();
        assert!(matches!(err, PangoError::StringConversion(_)));
    }
}
