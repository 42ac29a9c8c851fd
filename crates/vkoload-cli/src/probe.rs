//! Probe mode: report loadability without invoking.

use serde::Serialize;

use vkoload_loader::Library;
use vkoload_loader::invoker::InvokePlan;

/// Machine-readable result of a load/resolve probe.
#[derive(Debug, Clone, Serialize)]
pub struct ProbeReport {
    pub library: String,
    pub symbol: String,
    pub mode: &'static str,
    pub load_ok: bool,
    pub symbol_ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diagnostic: Option<String>,
}

impl ProbeReport {
    /// Exit status the probe maps to: 0 when both steps succeed.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        u8::from(!self.symbol_ok)
    }
}

/// Load and resolve per `plan` without invoking; the handle is released
/// before this returns.
#[must_use]
pub fn probe(plan: &InvokePlan) -> ProbeReport {
    let mut report = ProbeReport {
        library: plan.library.clone(),
        symbol: plan.symbol.clone(),
        mode: plan.mode.label(),
        load_ok: false,
        symbol_ok: false,
        diagnostic: None,
    };
    let library = match Library::open(&plan.library, plan.mode) {
        Ok(library) => library,
        Err(err) => {
            report.diagnostic = Some(err.to_string());
            return report;
        }
    };
    report.load_ok = true;
    match library.has_symbol(&plan.symbol) {
        Ok(()) => report.symbol_ok = true,
        Err(err) => report.diagnostic = Some(err.to_string()),
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_of_missing_library_reports_load_failure() {
        let plan = InvokePlan::for_library("libdoes_not_exist_vkoload.so");
        let report = probe(&plan);
        assert!(!report.load_ok);
        assert!(!report.symbol_ok);
        assert_eq!(report.exit_code(), 1);
        let diagnostic = report.diagnostic.expect("diagnostic should be present");
        assert!(diagnostic.starts_with("dlopen failure: "));
    }

    #[test]
    fn report_serializes_without_null_diagnostic() {
        let report = ProbeReport {
            library: "libvko_tracer.so".into(),
            symbol: "render".into(),
            mode: "lazy",
            load_ok: true,
            symbol_ok: true,
            diagnostic: None,
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"load_ok\":true"));
        assert!(!json.contains("diagnostic"));
        assert_eq!(report.exit_code(), 0);
    }
}
