//! The package checks and the run that sequences them.

pub mod dashboard;
pub mod diagnostic;
pub mod registry;
pub mod runner;
pub mod workbook;

use std::path::PathBuf;
use std::time::Duration;

use crate::python::Interpreter;
use crate::shell::Platform;

pub use diagnostic::{CheckId, Diagnostic, FailureKind, RunReport};
pub use registry::{registry, Check, Probe};
pub use runner::{run_all_checks, wrap_failure, ProbeFailure};

/// Bounds for the dashboard readiness poll.
#[derive(Debug, Clone, Copy)]
pub struct DashboardWait {
    /// TCP port the launcher serves on.
    pub port: u16,

    /// How long to keep polling before giving up.
    pub deadline: Duration,

    /// Delay between poll attempts.
    pub poll_interval: Duration,
}

impl Default for DashboardWait {
    fn default() -> Self {
        Self {
            port: 8501,
            deadline: Duration::from_secs(4),
            poll_interval: Duration::from_millis(150),
        }
    }
}

/// Everything a verification run needs to know.
#[derive(Debug)]
pub struct CheckContext {
    /// The course Python interpreter.
    pub interpreter: Interpreter,

    /// The dashboard launcher executable.
    pub launcher: PathBuf,

    /// Where the scratch workbook goes.
    pub home_dir: PathBuf,

    /// Platform the run is verifying.
    pub platform: Platform,

    /// Skip the pre-check extra package install.
    pub skip_extras: bool,

    /// Insert the short UI delay between checks.
    pub pacing: bool,

    /// Dashboard readiness poll bounds.
    pub dashboard_wait: DashboardWait,
}
