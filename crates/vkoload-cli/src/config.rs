//! Launch configuration.
//!
//! Each knob resolves in order: command-line flag, then environment
//! variable, then built-in default.

use vkoload_core::Mode;
use vkoload_loader::invoker::{DEFAULT_LIBRARY_STEM, DEFAULT_SYMBOL, InvokePlan};

/// Environment variable overriding the library stem, file name, or path.
pub const ENV_LIBRARY: &str = "VKOLOAD_LIBRARY";

/// Environment variable overriding the exported symbol name.
pub const ENV_SYMBOL: &str = "VKOLOAD_SYMBOL";

/// Command-line overrides, already parsed.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub library: Option<String>,
    pub symbol: Option<String>,
    /// Resolve all symbols at load time instead of lazily.
    pub eager: bool,
}

/// Resolve the effective plan from `overrides` and the process environment.
#[must_use]
pub fn resolve_plan(overrides: &Overrides) -> InvokePlan {
    resolve_plan_from(overrides, |name| std::env::var(name).ok())
}

/// Same as [`resolve_plan`], with the environment lookup injected.
pub fn resolve_plan_from(
    overrides: &Overrides,
    env: impl Fn(&str) -> Option<String>,
) -> InvokePlan {
    let library = overrides
        .library
        .clone()
        .or_else(|| env(ENV_LIBRARY))
        .unwrap_or_else(|| DEFAULT_LIBRARY_STEM.to_string());
    let symbol = overrides
        .symbol
        .clone()
        .or_else(|| env(ENV_SYMBOL))
        .unwrap_or_else(|| DEFAULT_SYMBOL.to_string());
    let mode = if overrides.eager {
        Mode::now()
    } else {
        Mode::lazy()
    };
    InvokePlan::for_library(&library)
        .with_symbol(&symbol)
        .with_mode(mode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use vkoload_core::resolve_library_name;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let plan = resolve_plan_from(&Overrides::default(), no_env);
        assert_eq!(plan.library, resolve_library_name("vko_tracer"));
        assert_eq!(plan.symbol, "render");
        assert_eq!(plan.mode, Mode::lazy());
    }

    #[test]
    fn environment_overrides_defaults() {
        let env = |name: &str| match name {
            ENV_LIBRARY => Some("other_tracer".to_string()),
            ENV_SYMBOL => Some("render_frame".to_string()),
            _ => None,
        };
        let plan = resolve_plan_from(&Overrides::default(), env);
        assert_eq!(plan.library, resolve_library_name("other_tracer"));
        assert_eq!(plan.symbol, "render_frame");
    }

    #[test]
    fn flags_override_environment() {
        let env = |name: &str| match name {
            ENV_LIBRARY => Some("env_tracer".to_string()),
            ENV_SYMBOL => Some("env_symbol".to_string()),
            _ => None,
        };
        let overrides = Overrides {
            library: Some("/opt/vko/libvko_tracer.so".to_string()),
            symbol: Some("render".to_string()),
            eager: true,
        };
        let plan = resolve_plan_from(&overrides, env);
        assert_eq!(plan.library, "/opt/vko/libvko_tracer.so");
        assert_eq!(plan.symbol, "render");
        assert_eq!(plan.mode, Mode::now());
    }
}
