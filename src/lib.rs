//! Trestle - Installation checker for the PfSE course environment.
//!
//! Trestle verifies that the Python packages used in the "Python for
//! Structural Engineers" course are installed and actually work, by
//! driving the course interpreter through one small exercise per
//! package and collecting a diagnostic for everything that fails.
//!
//! # Modules
//!
//! - [`checks`] - The package checks and the run that sequences them
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`installer`] - The extra Linux package installation
//! - [`python`] - Interpreter discovery and embedded check snippets
//! - [`report`] - Human and JSON rendering of a run's outcome
//! - [`shell`] - Process execution and platform probing
//! - [`ui`] - Terminal output, spinners, and the mock UI for tests
//!
//! # Example
//!
//! ```
//! use trestle::checks::{CheckId, Diagnostic, FailureKind, RunReport};
//!
//! // A run with no diagnostics passed.
//! let mut report = RunReport::default();
//! report.record(None);
//! assert!(report.passed());
//!
//! // Recording a diagnostic fails the run.
//! report.record(Some(Diagnostic::new(
//!     CheckId::Numpy,
//!     FailureKind::Import,
//!     vec!["No module named 'numpy'".to_string()],
//! )));
//! assert!(!report.passed());
//! ```

pub mod checks;
pub mod cli;
pub mod error;
pub mod installer;
pub mod python;
pub mod report;
pub mod shell;
pub mod ui;

pub use error::{Result, TrestleError};
