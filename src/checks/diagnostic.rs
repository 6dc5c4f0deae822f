//! Check identities and failure records.
//!
//! A [`Diagnostic`] is the only thing a failing check produces. The
//! run aggregates them into a [`RunReport`] and never looks inside;
//! an empty report means the installation passed.

use serde::Serialize;

use crate::ui::Tint;

/// The six package checks, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckId {
    Streamlit,
    Vtk,
    Numpy,
    Shapely,
    SectionProperties,
    Openpyxl,
}

impl CheckId {
    /// All checks in the order the run executes them.
    pub const ALL: [CheckId; 6] = [
        CheckId::Streamlit,
        CheckId::Vtk,
        CheckId::Numpy,
        CheckId::Shapely,
        CheckId::SectionProperties,
        CheckId::Openpyxl,
    ];

    /// Registry identifier.
    pub fn name(&self) -> &'static str {
        match self {
            CheckId::Streamlit => "dashboard",
            CheckId::Vtk => "vtk-scene",
            CheckId::Numpy => "numpy-import",
            CheckId::Shapely => "shapely-import",
            CheckId::SectionProperties => "section-mesh",
            CheckId::Openpyxl => "workbook",
        }
    }

    /// The Python package the check exercises.
    pub fn package(&self) -> &'static str {
        match self {
            CheckId::Streamlit => "streamlit",
            CheckId::Vtk => "vtk",
            CheckId::Numpy => "numpy",
            CheckId::Shapely => "shapely",
            CheckId::SectionProperties => "sectionproperties",
            CheckId::Openpyxl => "openpyxl",
        }
    }

    /// Display tint for this check's diagnostic block.
    ///
    /// The palette is a course fixture, including numpy's green.
    pub fn tint(&self) -> Tint {
        match self {
            CheckId::Streamlit => Tint::Magenta,
            CheckId::Vtk => Tint::Red,
            CheckId::Numpy => Tint::Green,
            CheckId::Shapely => Tint::Cyan,
            CheckId::SectionProperties => Tint::Cyan,
            CheckId::Openpyxl => Tint::Yellow,
        }
    }

    /// First line of a failing check's output.
    pub fn failure_headline(&self) -> &'static str {
        match self {
            CheckId::Streamlit => "Streamlit did not run properly.",
            CheckId::Vtk => "vtk example did not run properly:",
            CheckId::Numpy => "numpy did not import properly:",
            CheckId::Shapely => "shapely did not import properly:",
            CheckId::SectionProperties => "sectionproperties example did not run properly:",
            CheckId::Openpyxl => "openpyxl example did not run properly:",
        }
    }

    /// One-line description for `trestle list`.
    pub fn describe(&self) -> &'static str {
        match self {
            CheckId::Streamlit => "launches the dashboard and waits for it to come up",
            CheckId::Vtk => "renders a small 3D cylinder scene once",
            CheckId::Numpy => "imports the numeric library",
            CheckId::Shapely => "imports Polygon from the geometry library",
            CheckId::SectionProperties => "meshes a circular cross-section",
            CheckId::Openpyxl => "saves, verifies and deletes a scratch workbook",
        }
    }
}

/// What went wrong inside a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The package could not be imported.
    Import,
    /// The exercised call raised.
    Runtime,
    /// An expected file was absent after the exercised call.
    MissingArtifact,
    /// An external process could not be started.
    Launch,
}

/// A failure record produced by one check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub check: CheckId,
    pub kind: FailureKind,
    pub detail: Vec<String>,
}

impl Diagnostic {
    pub fn new(check: CheckId, kind: FailureKind, detail: Vec<String>) -> Self {
        Self {
            check,
            kind,
            detail,
        }
    }

    /// Render the block shown to the user.
    ///
    /// Launch failures are a single bare line. Everything else is the
    /// headline framed by blank lines with each detail line indented
    /// by one tab.
    pub fn render(&self) -> String {
        if self.kind == FailureKind::Launch {
            return self.check.failure_headline().to_string();
        }

        let mut out = format!("\n{}\n", self.check.failure_headline());
        for line in &self.detail {
            out.push('\t');
            out.push_str(line);
            out.push('\n');
        }
        out
    }
}

/// The aggregate outcome of one verification run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub checks_run: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl RunReport {
    /// Record one check's outcome.
    pub fn record(&mut self, outcome: Option<Diagnostic>) {
        self.checks_run += 1;
        if let Some(diagnostic) = outcome {
            self.diagnostics.push(diagnostic);
        }
    }

    /// No diagnostics collected means the installation passed.
    pub fn passed(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_checks_in_course_order() {
        let names: Vec<_> = CheckId::ALL.iter().map(|c| c.package()).collect();
        assert_eq!(
            names,
            [
                "streamlit",
                "vtk",
                "numpy",
                "shapely",
                "sectionproperties",
                "openpyxl"
            ]
        );
    }

    #[test]
    fn numpy_headline_keeps_its_green_tint() {
        assert_eq!(CheckId::Numpy.tint(), Tint::Green);
        assert_eq!(
            CheckId::Numpy.failure_headline(),
            "numpy did not import properly:"
        );
    }

    #[test]
    fn render_frames_headline_and_indents_detail() {
        let diag = Diagnostic::new(
            CheckId::Vtk,
            FailureKind::Runtime,
            vec!["No module named 'vtkmodules'".to_string()],
        );

        assert_eq!(
            diag.render(),
            "\nvtk example did not run properly:\n\tNo module named 'vtkmodules'\n"
        );
    }

    #[test]
    fn render_with_no_detail_is_headline_only() {
        let diag = Diagnostic::new(CheckId::Shapely, FailureKind::Import, vec![]);
        assert_eq!(diag.render(), "\nshapely did not import properly:\n");
    }

    #[test]
    fn launch_failure_renders_bare() {
        let diag = Diagnostic::new(CheckId::Streamlit, FailureKind::Launch, vec![]);
        assert_eq!(diag.render(), "Streamlit did not run properly.");
    }

    #[test]
    fn report_passes_only_when_empty() {
        let mut report = RunReport::default();
        report.record(None);
        report.record(None);
        assert!(report.passed());
        assert_eq!(report.checks_run, 2);

        report.record(Some(Diagnostic::new(
            CheckId::Numpy,
            FailureKind::Import,
            vec![],
        )));
        assert!(!report.passed());
        assert_eq!(report.checks_run, 3);
        assert_eq!(report.diagnostics.len(), 1);
    }

    #[test]
    fn failure_kind_serializes_snake_case() {
        let json = serde_json::to_string(&FailureKind::MissingArtifact).unwrap();
        assert_eq!(json, "\"missing_artifact\"");
    }
}
