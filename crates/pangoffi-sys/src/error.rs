use std::fmt;
use thiserror::Error;

/// A declared function is not exported by the loaded library.
///
/// Usually means the installed Pango is older than the release that
/// introduced the function.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("symbol `{symbol}` is not exported by {library}")]
pub struct SymbolError {
    pub library: &'static str,
    pub symbol: &'static str,
}

/// None of the candidate paths for a native library could be opened.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("failed to load {library}; tried {}", Attempts(.attempts))]
pub struct LoadError {
    pub library: &'static str,
    pub attempts: Vec<LoadAttempt>,
}

/// One failed `dlopen` of a candidate path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadAttempt {
    pub path: String,
    pub reason: String,
}

struct Attempts<'a>(&'a [LoadAttempt]);

impl fmt::Display for Attempts<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "no candidates");
        }
        for (i, attempt) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "`{}` ({})", attempt.path, attempt.reason)?;
        }
        Ok(())
    }
}
