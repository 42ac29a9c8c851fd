//! The shared load → resolve → invoke → unload sequence.
//!
//! Both launcher entry points (the freestanding binary and the managed
//! bridge) drive this one implementation. The sequence is strictly linear;
//! the only branches are the two failure exits, and the handle is released
//! on every path.

use vkoload_core::{Mode, resolve_library_name};

use crate::error::LoaderError;
use crate::library::Library;

/// Library stem the launcher targets by default.
pub const DEFAULT_LIBRARY_STEM: &str = "vko_tracer";

/// Exported symbol the launcher invokes by default.
pub const DEFAULT_SYMBOL: &str = "render";

/// Signature contract of the invoked export: zero arguments, zero return.
pub type RenderFn = unsafe extern "C" fn();

/// A resolved launch request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokePlan {
    /// Library name or path, exactly as handed to the loader.
    pub library: String,
    /// Exported symbol to invoke.
    pub symbol: String,
    /// Open mode.
    pub mode: Mode,
}

impl InvokePlan {
    /// Plan for the stock tracer launch: the platform file name for
    /// `vko_tracer`, the `render` export, lazy binding.
    #[must_use]
    pub fn tracer() -> Self {
        InvokePlan {
            library: resolve_library_name(DEFAULT_LIBRARY_STEM),
            symbol: DEFAULT_SYMBOL.to_string(),
            mode: Mode::lazy(),
        }
    }

    /// Plan targeting `name`, which may be a stem, file name, or path.
    #[must_use]
    pub fn for_library(name: &str) -> Self {
        InvokePlan {
            library: resolve_library_name(name),
            ..Self::tracer()
        }
    }

    #[must_use]
    pub fn with_symbol(mut self, symbol: &str) -> Self {
        self.symbol = symbol.to_string();
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }
}

impl Default for InvokePlan {
    fn default() -> Self {
        Self::tracer()
    }
}

/// Observation points in the invoke sequence.
///
/// Entry points own their console output, so the invoker reports progress
/// through this seam instead of printing.
pub trait InvokeObserver {
    /// About to open the library.
    fn loading(&mut self, _library: &str) {}
    /// Symbol resolved; about to invoke it.
    fn invoking(&mut self, _symbol: &str) {}
}

/// Observer that reports nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentObserver;

impl InvokeObserver for SilentObserver {}

/// Run the full sequence for `plan`.
pub fn run(plan: &InvokePlan) -> Result<(), LoaderError> {
    run_with(plan, &mut SilentObserver)
}

/// Run the full sequence for `plan`, reporting progress to `observer`.
///
/// The library handle is released before this returns, on success and on
/// both failure exits.
pub fn run_with(plan: &InvokePlan, observer: &mut dyn InvokeObserver) -> Result<(), LoaderError> {
    observer.loading(&plan.library);
    let library = Library::open(&plan.library, plan.mode)?;
    // SAFETY: the export's contract is zero arguments, zero return; that is
    // the launcher's sole ABI agreement with the library.
    let render = unsafe { library.get::<RenderFn>(&plan.symbol) }?;
    observer.invoking(&plan.symbol);
    // SAFETY: same contract as the resolve above.
    unsafe { (*render)() };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use vkoload_core::Binding;

    #[test]
    fn tracer_plan_defaults() {
        let plan = InvokePlan::tracer();
        assert_eq!(plan.library, resolve_library_name("vko_tracer"));
        assert_eq!(plan.symbol, "render");
        assert_eq!(plan.mode, Mode::lazy());
        assert_eq!(plan, InvokePlan::default());
    }

    #[test]
    fn for_library_maps_stems_and_keeps_paths() {
        assert_eq!(
            InvokePlan::for_library("vko_tracer").library,
            resolve_library_name("vko_tracer")
        );
        assert_eq!(
            InvokePlan::for_library("/tmp/libx.so").library,
            "/tmp/libx.so"
        );
    }

    #[test]
    fn builders() {
        let plan = InvokePlan::tracer()
            .with_symbol("render_frame")
            .with_mode(Mode::now());
        assert_eq!(plan.symbol, "render_frame");
        assert_eq!(plan.mode.binding, Binding::Now);
    }
}
