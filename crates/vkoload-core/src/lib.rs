//! # vkoload-core
//!
//! Pure logic behind the vko_tracer launcher: typed dlopen binding modes,
//! platform shared-library naming, and canonical loader diagnostics.
//!
//! Actual platform-loader calls live in `vkoload-loader`; nothing in this
//! crate touches the loader, so no `unsafe` code is permitted here.

#![deny(unsafe_code)]

pub mod binding;
pub mod diag;
pub mod naming;

pub use binding::{Binding, Mode, Scope};
pub use naming::{
    NameError, resolve_library_name, shared_library_filename, validate_library_name,
    validate_symbol_name,
};
