//! # vkoload-loader
//!
//! The dynamic symbol invoker behind the vko_tracer launcher.
//!
//! Opens a shared library through the platform loader, resolves an exported
//! symbol as a typed function pointer, invokes it, and releases the handle
//! on every exit path.
//!
//! # Architecture
//!
//! ```text
//! entry point -> invoker::run_with -> Library::open -> Library::get -> call -> Drop (dlclose)
//! ```
//!
//! Both launcher entry points (the freestanding binary and the managed
//! bridge) drive the same [`invoker`] sequence; neither reimplements it.

mod diag;
pub mod error;
pub mod invoker;
pub mod library;
pub mod registry;

pub use error::LoaderError;
pub use invoker::{InvokeObserver, InvokePlan, RenderFn, SilentObserver};
pub use library::{Library, Symbol};
