//! The spreadsheet (openpyxl) check.
//!
//! The snippet saves a scratch workbook into the home directory,
//! verifies the file landed on disk, and deletes it. "Saved but not
//! there" is its own failure kind, signalled by a sentinel exit code
//! so nothing has to parse prose.

use super::diagnostic::FailureKind;
use super::runner::{failure_detail, ProbeFailure};
use super::CheckContext;
use crate::python::snippet_source;

/// Exit code the snippet uses when the saved file is absent.
pub const MISSING_ARTIFACT_EXIT: i32 = 3;

/// File name of the scratch workbook.
pub const WORKBOOK_FILE: &str = "empty_book.xlsx";

pub fn probe(ctx: &CheckContext, asset: &str) -> Result<(), ProbeFailure> {
    let code = snippet_source(asset)
        .map_err(|e| ProbeFailure::new(FailureKind::Runtime, vec![e.to_string()]))?;

    let target = ctx.home_dir.join(WORKBOOK_FILE);
    let target_arg = target.to_string_lossy();

    let result = ctx
        .interpreter
        .run_code(code, &[&target_arg])
        .map_err(|e| ProbeFailure::new(FailureKind::Runtime, vec![e.to_string()]))?;

    tracing::debug!("{} exited with {:?}", asset, result.exit_code);

    if result.success {
        return Ok(());
    }

    let kind = if result.exit_code == Some(MISSING_ARTIFACT_EXIT) {
        FailureKind::MissingArtifact
    } else {
        FailureKind::Runtime
    };

    Err(ProbeFailure::new(kind, failure_detail(&result)))
}
