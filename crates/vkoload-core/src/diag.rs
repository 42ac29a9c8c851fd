//! Canonical fallback diagnostics.
//!
//! `dlerror` is allowed to return null even after a failed call (another
//! call on the same thread may already have consumed the message). These
//! strings stand in so an error is never reported without a diagnostic.

/// Library could not be found or opened.
pub const ERR_NOT_FOUND: &str = "shared object not found";

/// Exported symbol absent from the loaded library.
pub const ERR_SYMBOL_NOT_FOUND: &str = "undefined symbol";
