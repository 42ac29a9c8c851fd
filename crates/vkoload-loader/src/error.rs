//! Loader error taxonomy.

use thiserror::Error;

/// Failures surfaced by the dynamic loader.
///
/// Exactly two kinds exist; both are terminal for the launcher entry points
/// and map to exit status 1. Faults raised inside the invoked export are
/// outside this taxonomy entirely.
///
/// The `Display` forms match what the launcher writes to stderr.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
    /// The library could not be found or opened.
    #[error("dlopen failure: {diagnostic}")]
    Load {
        /// Name or path handed to the loader.
        library: String,
        /// Platform loader diagnostic, or the canonical fallback.
        diagnostic: String,
    },
    /// The library loaded but the requested export is absent.
    #[error("dlsym failure: {diagnostic}")]
    SymbolNotFound {
        library: String,
        symbol: String,
        diagnostic: String,
    },
}

impl LoaderError {
    /// Which step of the sequence failed; used as a log event name.
    #[must_use]
    pub fn stage(&self) -> &'static str {
        match self {
            LoaderError::Load { .. } => "load",
            LoaderError::SymbolNotFound { .. } => "resolve",
        }
    }

    /// Library the failed operation targeted.
    #[must_use]
    pub fn library(&self) -> &str {
        match self {
            LoaderError::Load { library, .. } | LoaderError::SymbolNotFound { library, .. } => {
                library
            }
        }
    }
}
