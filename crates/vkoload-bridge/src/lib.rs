//! # vkoload-bridge
//!
//! Foreign-function bridge exposing the tracer launch to a managed caller.
//!
//! A JVM host loads this cdylib and calls `Raytracer.raytrace()`, which
//! lands on [`Java_Raytracer_raytrace`] under the JNI naming and calling
//! convention. The env and object parameters stay opaque and are never
//! dereferenced; the launch itself is the same [`vkoload_loader::invoker`]
//! sequence the freestanding binary runs.

use std::ffi::c_void;
use std::process;

use vkoload_loader::invoker::{self, InvokeObserver, InvokePlan};

struct ConsoleObserver;

impl InvokeObserver for ConsoleObserver {
    fn loading(&mut self, _library: &str) {
        println!("Loading dynamic library");
    }

    fn invoking(&mut self, _symbol: &str) {
        println!("Calling render function");
    }
}

/// Launch plan used by the bridge: stock tracer defaults.
#[must_use]
pub fn launch_plan() -> InvokePlan {
    InvokePlan::tracer()
}

/// Perform the full launch sequence.
///
/// Failure terminates the hosting process with status 1 after reporting the
/// loader diagnostic to stderr; no managed-exception translation happens at
/// this boundary.
pub fn raytrace() {
    println!("Running executable");
    let plan = launch_plan();
    if let Err(err) = invoker::run_with(&plan, &mut ConsoleObserver) {
        eprintln!("{err}");
        process::exit(1);
    }
}

/// JNI entry: `Raytracer.raytrace()V`.
#[unsafe(no_mangle)]
pub extern "system" fn Java_Raytracer_raytrace(_env: *mut c_void, _this: *mut c_void) {
    raytrace();
}

#[cfg(test)]
mod tests {
    use super::*;
    use vkoload_core::{Binding, resolve_library_name};

    #[test]
    fn launch_plan_targets_the_tracer() {
        let plan = launch_plan();
        assert_eq!(plan.library, resolve_library_name("vko_tracer"));
        assert_eq!(plan.symbol, "render");
        assert_eq!(plan.mode.binding, Binding::Lazy);
    }
}
