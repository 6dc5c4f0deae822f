//! The verification run.
//!
//! Sequences the registry, converts probe failures into diagnostics
//! through [`wrap_failure`], and aggregates the outcome. The runner
//! never classifies a failure itself; it only collects.

use std::thread;
use std::time::Duration;

use super::diagnostic::{CheckId, Diagnostic, FailureKind, RunReport};
use super::registry::{registry, Check, Probe};
use super::{dashboard, workbook, CheckContext};
use crate::installer::{install_extra, InstallerContext};
use crate::python::snippet_source;
use crate::shell::CommandResult;
use crate::ui::{Tint, UserInterface};

/// UI pacing delay between checks.
const PACING_DELAY: Duration = Duration::from_millis(200);

/// A failure inside a probe, before it becomes a [`Diagnostic`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeFailure {
    pub kind: FailureKind,
    pub detail: Vec<String>,
}

impl ProbeFailure {
    pub fn new(kind: FailureKind, detail: Vec<String>) -> Self {
        Self { kind, detail }
    }
}

/// Run a probe and wrap its failure, if any, as a [`Diagnostic`].
///
/// This is the single boundary between "something went wrong" and
/// "a record the user will see"; no probe failure crosses a check's
/// boundary any other way.
pub fn wrap_failure<F>(id: CheckId, probe: F) -> Option<Diagnostic>
where
    F: FnOnce() -> Result<(), ProbeFailure>,
{
    match probe() {
        Ok(()) => None,
        Err(failure) => Some(Diagnostic::new(id, failure.kind, failure.detail)),
    }
}

/// Extract detail lines from a failed snippet run.
///
/// The snippet protocol puts one exception argument per stderr line;
/// stdout and the raw exit status are fallbacks for snippets that died
/// before reaching their own handler.
pub(crate) fn failure_detail(result: &CommandResult) -> Vec<String> {
    let stderr = non_blank_lines(&result.stderr);
    if !stderr.is_empty() {
        return stderr;
    }

    let stdout = non_blank_lines(&result.stdout);
    if !stdout.is_empty() {
        return stdout;
    }

    match result.exit_code {
        Some(code) => vec![format!("exit status {}", code)],
        None => vec!["terminated by signal".to_string()],
    }
}

fn non_blank_lines(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}

fn snippet_probe(ctx: &CheckContext, asset: &str, kind: FailureKind) -> Result<(), ProbeFailure> {
    let code =
        snippet_source(asset).map_err(|e| ProbeFailure::new(kind, vec![e.to_string()]))?;

    let result = ctx
        .interpreter
        .run_code(code, &[])
        .map_err(|e| ProbeFailure::new(kind, vec![e.to_string()]))?;

    tracing::debug!("{} exited with {:?}", asset, result.exit_code);

    if result.success {
        Ok(())
    } else {
        Err(ProbeFailure::new(kind, failure_detail(&result)))
    }
}

fn run_check(check: &Check, ctx: &CheckContext) -> (Option<Diagnostic>, Vec<String>) {
    match check.probe {
        Probe::Launch => {
            let mut warnings = Vec::new();
            let outcome = wrap_failure(check.id, || dashboard::probe(ctx, &mut warnings));
            (outcome, warnings)
        }
        Probe::Snippet { asset, kind } => (
            wrap_failure(check.id, || snippet_probe(ctx, asset, kind)),
            Vec::new(),
        ),
        Probe::Workbook { asset } => (
            wrap_failure(check.id, || workbook::probe(ctx, asset)),
            Vec::new(),
        ),
    }
}

/// Run the installer and every check, in order.
pub fn run_all_checks(ctx: &CheckContext, ui: &mut dyn UserInterface) -> RunReport {
    ui.show_header("Python for Structural Engineers ('PfSE')");

    if ctx.skip_extras {
        ui.message("Skipping additional package installation.");
    } else {
        // The banner prints on every platform; the installer itself
        // decides whether there is anything to do.
        ui.banner("Installing additional package for Linux...", Tint::Yellow);
        install_extra(&InstallerContext::for_platform(ctx.platform), ui);
    }

    ui.banner("Validating installed packages...", Tint::Yellow);

    let mut report = RunReport::default();
    for check in registry() {
        let mut spinner = ui.start_spinner(&format!("Checking {}", check.id.package()));
        let (outcome, warnings) = run_check(&check, ctx);

        match &outcome {
            None => spinner.finish_success(&format!("{} ok", check.id.package())),
            Some(_) => spinner.finish_error(&format!("{} failed", check.id.package())),
        }
        for warning in &warnings {
            ui.warning(warning);
        }

        report.record(outcome);

        if ctx.pacing {
            thread::sleep(PACING_DELAY);
        }
    }

    report
}
