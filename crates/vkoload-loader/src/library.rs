//! RAII library handle and typed symbol resolution.

use std::ffi::{CString, c_void};
use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::Deref;
use std::ptr;

use vkoload_core::{Binding, Mode, Scope, diag};

use crate::diag::take_last_error;
use crate::error::LoaderError;
use crate::registry;

/// Registry name for the main-program pseudo-handle.
const SELF_NAME: &str = "<self>";

/// Owned handle to a loaded shared library.
///
/// The handle is released back to the platform loader exactly once, when
/// the value drops, on success and failure paths alike. The raw handle
/// makes the type neither `Send` nor `Sync`; concurrent loads need a
/// handle per thread.
#[derive(Debug)]
pub struct Library {
    handle: *mut c_void,
    name: String,
    id: u64,
}

fn raw_mode(mode: Mode) -> i32 {
    let binding = match mode.binding {
        Binding::Lazy => libc::RTLD_LAZY,
        Binding::Now => libc::RTLD_NOW,
    };
    let scope = match mode.scope {
        Scope::Local => libc::RTLD_LOCAL,
        Scope::Global => libc::RTLD_GLOBAL,
    };
    binding | scope
}

fn library_c_name(name: &str) -> Result<CString, String> {
    vkoload_core::validate_library_name(name).map_err(|err| err.to_string())?;
    CString::new(name).map_err(|err| err.to_string())
}

fn symbol_c_name(name: &str) -> Result<CString, String> {
    vkoload_core::validate_symbol_name(name).map_err(|err| err.to_string())?;
    CString::new(name).map_err(|err| err.to_string())
}

impl Library {
    /// Open `name` through the platform loader.
    ///
    /// `name` is handed to the loader verbatim; callers wanting platform
    /// name mapping go through [`vkoload_core::resolve_library_name`]
    /// first. Failure carries the loader's diagnostic.
    pub fn open(name: &str, mode: Mode) -> Result<Self, LoaderError> {
        let c_name = library_c_name(name).map_err(|diagnostic| LoaderError::Load {
            library: name.to_string(),
            diagnostic,
        })?;
        // SAFETY: c_name is NUL-terminated; dlopen has no other
        // preconditions.
        let handle = unsafe { libc::dlopen(c_name.as_ptr(), raw_mode(mode)) };
        if handle.is_null() {
            return Err(LoaderError::Load {
                library: name.to_string(),
                diagnostic: take_last_error(diag::ERR_NOT_FOUND),
            });
        }
        let id = registry::register(name);
        Ok(Library {
            handle,
            name: name.to_string(),
            id,
        })
    }

    /// Handle to the main program image (`dlopen(NULL)`).
    ///
    /// Resolves symbols already present in the process image and its
    /// global-scope dependencies.
    pub fn this() -> Result<Self, LoaderError> {
        // SAFETY: a null filename asks for the main program; always valid.
        let handle = unsafe { libc::dlopen(ptr::null(), raw_mode(Mode::lazy())) };
        if handle.is_null() {
            return Err(LoaderError::Load {
                library: SELF_NAME.to_string(),
                diagnostic: take_last_error(diag::ERR_NOT_FOUND),
            });
        }
        let id = registry::register(SELF_NAME);
        Ok(Library {
            handle,
            name: SELF_NAME.to_string(),
            id,
        })
    }

    /// Name or path this handle was opened with.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Resolve `symbol` as a value of type `T`.
    ///
    /// This is the single point where the loader's opaque address becomes a
    /// typed function pointer. A null result means the export is absent;
    /// the returned [`Symbol`] borrows `self`, so it cannot outlive the
    /// handle.
    ///
    /// # Safety
    ///
    /// `T` must be a function-pointer type matching the export's true
    /// signature. The platform loader offers no way to verify this; a
    /// mismatch is undefined behavior when the symbol is called.
    pub unsafe fn get<T: Copy>(&self, symbol: &str) -> Result<Symbol<'_, T>, LoaderError> {
        assert_eq!(
            mem::size_of::<T>(),
            mem::size_of::<*mut c_void>(),
            "symbol type must be pointer-sized"
        );
        let addr = self.resolve_raw(symbol)?;
        // SAFETY: T is pointer-sized (checked above); the caller asserts
        // the signature.
        let inner = unsafe { mem::transmute_copy::<*mut c_void, T>(&addr) };
        Ok(Symbol {
            inner,
            _lib: PhantomData,
        })
    }

    /// Check that `symbol` resolves from this library.
    ///
    /// Never produces a callable, so no signature assertion is involved;
    /// probe tooling uses this to report loadability without invoking.
    pub fn has_symbol(&self, symbol: &str) -> Result<(), LoaderError> {
        self.resolve_raw(symbol).map(|_| ())
    }

    fn resolve_raw(&self, symbol: &str) -> Result<*mut c_void, LoaderError> {
        let c_symbol = symbol_c_name(symbol).map_err(|diagnostic| LoaderError::SymbolNotFound {
            library: self.name.clone(),
            symbol: symbol.to_string(),
            diagnostic,
        })?;
        // SAFETY: the handle is live for &self and c_symbol is
        // NUL-terminated.
        let addr = unsafe { libc::dlsym(self.handle, c_symbol.as_ptr()) };
        if addr.is_null() {
            return Err(LoaderError::SymbolNotFound {
                library: self.name.clone(),
                symbol: symbol.to_string(),
                diagnostic: take_last_error(diag::ERR_SYMBOL_NOT_FOUND),
            });
        }
        Ok(addr)
    }
}

impl Drop for Library {
    fn drop(&mut self) {
        // SAFETY: the handle came from dlopen and is closed exactly once.
        // Release is best-effort; there is no path that reports a close
        // failure.
        let _ = unsafe { libc::dlclose(self.handle) };
        registry::retire(self.id);
    }
}

/// Typed symbol resolved from a [`Library`].
///
/// Borrows the library it was resolved from, so the underlying address can
/// never be used after the handle is released.
#[derive(Clone, Copy)]
pub struct Symbol<'lib, T> {
    inner: T,
    _lib: PhantomData<&'lib Library>,
}

impl<T> Deref for Symbol<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.inner
    }
}

impl<T> fmt::Debug for Symbol<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Symbol(..)")
    }
}
