//! The fixed check registry.

use super::diagnostic::{CheckId, FailureKind};

/// How a check probes its package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Spawn the dashboard launcher and wait for its port.
    Launch,
    /// Run an embedded snippet; nonzero exit is a failure of `kind`.
    Snippet {
        asset: &'static str,
        kind: FailureKind,
    },
    /// Snippet taking the scratch workbook path as an argument, with a
    /// sentinel exit code for the missing-file case.
    Workbook { asset: &'static str },
}

/// One entry of the registry.
#[derive(Debug, Clone, Copy)]
pub struct Check {
    pub id: CheckId,
    pub probe: Probe,
}

/// All checks, in the order the run executes them.
pub fn registry() -> Vec<Check> {
    vec![
        Check {
            id: CheckId::Streamlit,
            probe: Probe::Launch,
        },
        Check {
            id: CheckId::Vtk,
            probe: Probe::Snippet {
                asset: "vtk_scene.py",
                kind: FailureKind::Runtime,
            },
        },
        Check {
            id: CheckId::Numpy,
            probe: Probe::Snippet {
                asset: "numpy_import.py",
                kind: FailureKind::Import,
            },
        },
        Check {
            id: CheckId::Shapely,
            probe: Probe::Snippet {
                asset: "shapely_import.py",
                kind: FailureKind::Import,
            },
        },
        Check {
            id: CheckId::SectionProperties,
            probe: Probe::Snippet {
                asset: "section_mesh.py",
                kind: FailureKind::Runtime,
            },
        },
        Check {
            id: CheckId::Openpyxl,
            probe: Probe::Workbook {
                asset: "workbook_roundtrip.py",
            },
        },
    ]
}
