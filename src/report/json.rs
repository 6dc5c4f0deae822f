//! Machine-readable run summary.
//!
//! Serializes the outcome for tooling that wraps the verifier, such as the
//! course's install scripts. The shape is a flat report object so callers can
//! key off `passed` without walking the failure list.

use serde::Serialize;

use crate::checks::{Diagnostic, FailureKind, RunReport};
use crate::error::Result;

#[derive(Serialize)]
struct JsonReport {
    passed: bool,
    checks_run: usize,
    failures: Vec<JsonFailure>,
}

#[derive(Serialize)]
struct JsonFailure {
    check: &'static str,
    package: &'static str,
    kind: FailureKind,
    detail: Vec<String>,
}

impl JsonFailure {
    fn from_diagnostic(diagnostic: &Diagnostic) -> Self {
        Self {
            check: diagnostic.check.name(),
            package: diagnostic.check.package(),
            kind: diagnostic.kind,
            detail: diagnostic.detail.clone(),
        }
    }
}

/// Serialize the run outcome as pretty-printed JSON.
pub fn render(report: &RunReport) -> Result<String> {
    let view = JsonReport {
        passed: report.passed(),
        checks_run: report.checks_run,
        failures: report
            .diagnostics
            .iter()
            .map(JsonFailure::from_diagnostic)
            .collect(),
    };

    let rendered = serde_json::to_string_pretty(&view).map_err(anyhow::Error::from)?;
    Ok(rendered)
}
