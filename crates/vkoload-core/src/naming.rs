//! Shared-library naming rules.
//!
//! The launcher accepts either a bare stem (`vko_tracer`), which maps to the
//! platform's conventional file name, or an explicit file name / path, which
//! passes through to the loader untouched.

use std::fmt;

/// Rejected library or symbol name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// Name is empty.
    Empty,
    /// Name contains an interior NUL byte at this offset; it cannot cross
    /// the C string boundary.
    InteriorNul(usize),
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameError::Empty => write!(f, "name is empty"),
            NameError::InteriorNul(pos) => {
                write!(f, "name contains an interior NUL byte at offset {pos}")
            }
        }
    }
}

impl std::error::Error for NameError {}

/// Map a bare library stem to the platform's shared-library file name.
///
/// `vko_tracer` becomes `libvko_tracer.so` on Linux and other unixes,
/// `libvko_tracer.dylib` on macOS, `vko_tracer.dll` on Windows.
#[must_use]
pub fn shared_library_filename(stem: &str) -> String {
    if cfg!(target_os = "macos") {
        format!("lib{stem}.dylib")
    } else if cfg!(target_os = "windows") {
        format!("{stem}.dll")
    } else {
        format!("lib{stem}.so")
    }
}

/// Returns `true` if `name` addresses a file location rather than naming a
/// library for the loader's search path.
#[must_use]
pub fn is_path_like(name: &str) -> bool {
    name.contains('/') || (cfg!(target_os = "windows") && name.contains('\\'))
}

/// Returns `true` if `name` already carries a shared-library extension,
/// including versioned unix names such as `libm.so.6`.
#[must_use]
pub fn has_shared_library_extension(name: &str) -> bool {
    name.ends_with(".so")
        || name.ends_with(".dylib")
        || name.ends_with(".dll")
        || name.contains(".so.")
}

/// Resolve a user-supplied library name to what the loader should open.
///
/// Paths and names that already carry an extension pass through unchanged;
/// bare stems get the platform file name.
#[must_use]
pub fn resolve_library_name(name: &str) -> String {
    if is_path_like(name) || has_shared_library_extension(name) {
        name.to_string()
    } else {
        shared_library_filename(name)
    }
}

/// Validate a library name before it reaches the loader.
pub fn validate_library_name(name: &str) -> Result<(), NameError> {
    validate_c_name(name)
}

/// Validate an exported-symbol name before it reaches the loader.
pub fn validate_symbol_name(name: &str) -> Result<(), NameError> {
    validate_c_name(name)
}

fn validate_c_name(name: &str) -> Result<(), NameError> {
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    if let Some(pos) = name.bytes().position(|b| b == 0) {
        return Err(NameError::InteriorNul(pos));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stem_maps_to_platform_filename() {
        let name = shared_library_filename("vko_tracer");
        if cfg!(target_os = "macos") {
            assert_eq!(name, "libvko_tracer.dylib");
        } else if cfg!(target_os = "windows") {
            assert_eq!(name, "vko_tracer.dll");
        } else {
            assert_eq!(name, "libvko_tracer.so");
        }
    }

    #[test]
    fn paths_pass_through() {
        assert_eq!(
            resolve_library_name("/opt/vko/libvko_tracer.so"),
            "/opt/vko/libvko_tracer.so"
        );
        assert_eq!(resolve_library_name("./libvko_tracer.so"), "./libvko_tracer.so");
    }

    #[test]
    fn explicit_filenames_pass_through() {
        assert_eq!(resolve_library_name("libvko_tracer.so"), "libvko_tracer.so");
        assert_eq!(resolve_library_name("libvko_tracer.dylib"), "libvko_tracer.dylib");
        assert_eq!(resolve_library_name("libm.so.6"), "libm.so.6");
    }

    #[test]
    fn bare_stem_gets_mapped() {
        assert_eq!(
            resolve_library_name("vko_tracer"),
            shared_library_filename("vko_tracer")
        );
    }

    #[test]
    fn name_validation() {
        assert_eq!(validate_symbol_name("render"), Ok(()));
        assert_eq!(validate_symbol_name(""), Err(NameError::Empty));
        assert_eq!(validate_symbol_name("ren\0der"), Err(NameError::InteriorNul(3)));
        assert_eq!(validate_library_name("libvko_tracer.so"), Ok(()));
        assert_eq!(validate_library_name(""), Err(NameError::Empty));
    }

    #[test]
    fn name_error_display() {
        assert_eq!(NameError::Empty.to_string(), "name is empty");
        assert_eq!(
            NameError::InteriorNul(3).to_string(),
            "name contains an interior NUL byte at offset 3"
        );
    }
}
