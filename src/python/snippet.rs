//! Embedded Python snippets.
//!
//! The probe code for each package ships inside the binary so the
//! checker works without any files installed next to it.

use include_dir::{include_dir, Dir};

use crate::error::{Result, TrestleError};

static SNIPPETS_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/snippets");

/// Get the source of an embedded snippet by file name.
pub fn snippet_source(name: &str) -> Result<&'static str> {
    let file = SNIPPETS_DIR
        .get_file(name)
        .ok_or_else(|| TrestleError::SnippetNotFound {
            name: name.to_string(),
        })?;

    file.contents_utf8()
        .ok_or_else(|| TrestleError::SnippetNotFound {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_probe_snippets_are_embedded() {
        for name in [
            "streamlit_demo.py",
            "vtk_scene.py",
            "numpy_import.py",
            "shapely_import.py",
            "section_mesh.py",
            "workbook_roundtrip.py",
        ] {
            let source = snippet_source(name).unwrap();
            assert!(!source.is_empty(), "{} is empty", name);
        }
    }

    #[test]
    fn unknown_snippet_is_an_error() {
        let result = snippet_source("nonexistent.py");
        assert!(matches!(result, Err(TrestleError::SnippetNotFound { .. })));
    }

    #[test]
    fn failure_snippets_print_args_to_stderr() {
        // Every probe snippet reports failures as one exception arg per
        // stderr line and exits nonzero.
        for name in [
            "vtk_scene.py",
            "numpy_import.py",
            "shapely_import.py",
            "section_mesh.py",
        ] {
            let source = snippet_source(name).unwrap();
            assert!(source.contains("sys.stderr"), "{} lacks stderr protocol", name);
            assert!(source.contains("sys.exit(1)"), "{} lacks exit protocol", name);
        }
    }

    #[test]
    fn workbook_snippet_has_missing_file_exit() {
        let source = snippet_source("workbook_roundtrip.py").unwrap();
        assert!(source.contains("sys.exit(3)"));
        assert!(source.contains("No file found"));
    }
}
