//! Platform loader diagnostic capture.

use std::ffi::CStr;

/// Take the loader's diagnostic for the most recent failed call on this
/// thread, falling back to `fallback` when none is pending.
///
/// Reading `dlerror` clears the pending message, per POSIX.
pub(crate) fn take_last_error(fallback: &str) -> String {
    let msg = unsafe { libc::dlerror() };
    if msg.is_null() {
        fallback.to_string()
    } else {
        // SAFETY: a non-null dlerror result is a NUL-terminated string owned
        // by the loader, valid until the next diagnostic-producing call on
        // this thread.
        unsafe { CStr::from_ptr(msg) }.to_string_lossy().into_owned()
    }
}
