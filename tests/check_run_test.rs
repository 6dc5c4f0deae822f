//! End-to-end runs of `trestle check` against stand-in interpreters.
//!
//! Each test points the binary at small shell scripts playing the part
//! of the course Python and the dashboard launcher, so the whole check
//! sequence runs without any real course packages installed.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]
#![cfg(unix)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A `trestle check` command wired to fakes inside `temp`.
///
/// `python_body` decides each snippet's fate; the launcher exits at
/// once, which the run treats as a warning rather than a failure.
fn check_command(temp: &TempDir, python_body: &str) -> Command {
    let python = write_script(temp.path(), "python", python_body);
    let launcher = write_script(temp.path(), "streamlit", "exit 0");

    let mut cmd = Command::new(cargo_bin("trestle"));
    cmd.env("TRESTLE_PYTHON", &python);
    cmd.env("TRESTLE_DASHBOARD", &launcher);
    cmd.env("HOME", temp.path());
    cmd.args(["check", "--skip-extras", "--no-pacing"]);
    cmd
}

#[test]
fn passing_run_prints_the_all_clear() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = check_command(&temp, "exit 0");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Python for Structural Engineers"))
        .stdout(predicate::str::contains("Skipping additional package installation."))
        .stdout(predicate::str::contains("Validating installed packages..."))
        .stdout(predicate::str::contains("numpy ok"))
        .stdout(predicate::str::contains("openpyxl ok"))
        .stdout(predicate::str::contains("PfSE installation seems ok"))
        .stdout(predicate::str::contains(
            "You can now close any windows that have opened as a result of the test.",
        ));
    Ok(())
}

#[test]
fn failing_import_renders_diagnostic_and_support_line() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let body = r#"case "$2" in
  *numpy*) echo "No module named 'numpy'" >&2; exit 1;;
esac
exit 0"#;
    let mut cmd = check_command(&temp, body);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("numpy failed"))
        .stdout(predicate::str::contains("numpy did not import properly:"))
        .stdout(predicate::str::contains("\tNo module named 'numpy'"))
        .stdout(predicate::str::contains("Inconsistencies encountered"))
        .stdout(predicate::str::contains(
            "email them to connor@structuralpython.com",
        ))
        .stdout(predicate::str::contains("PfSE installation seems ok").not());
    Ok(())
}

#[test]
fn missing_workbook_renders_openpyxl_diagnostic() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let body = r#"case "$2" in
  *openpyxl*) echo "No file found: $3" >&2; exit 3;;
esac
exit 0"#;
    let mut cmd = check_command(&temp, body);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains(
            "openpyxl example did not run properly:",
        ))
        .stdout(predicate::str::contains("No file found:"));
    Ok(())
}

#[test]
fn workbook_roundtrip_leaves_home_clean() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    // Behave like the real snippet: save the workbook, then delete it.
    let body = r#"case "$2" in
  *openpyxl*) touch "$3"; rm "$3";;
esac
exit 0"#;
    let mut cmd = check_command(&temp, body);

    cmd.assert().success();
    assert!(!temp.path().join("empty_book.xlsx").exists());
    Ok(())
}

#[test]
fn json_format_owns_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = check_command(&temp, "exit 0");
    cmd.args(["--format", "json"]);

    let output = cmd.output()?;
    assert!(output.status.success());

    // The whole of stdout must parse; banners and spinners are silenced.
    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["passed"], true);
    assert_eq!(value["checks_run"], 6);
    assert_eq!(value["failures"].as_array().map(|f| f.len()), Some(0));
    Ok(())
}

#[test]
fn json_format_reports_failures() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let body = r#"case "$2" in
  *numpy*) echo "No module named 'numpy'" >&2; exit 1;;
esac
exit 0"#;
    let mut cmd = check_command(&temp, body);
    cmd.args(["--format", "json"]);

    let output = cmd.output()?;
    assert_eq!(output.status.code(), Some(1));

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["passed"], false);
    let failure = &value["failures"][0];
    assert_eq!(failure["check"], "numpy-import");
    assert_eq!(failure["package"], "numpy");
    assert_eq!(failure["kind"], "import");
    assert_eq!(failure["detail"][0], "No module named 'numpy'");
    Ok(())
}

#[test]
fn noisy_launcher_cannot_corrupt_json_stdout() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = write_script(temp.path(), "python", "exit 0");
    // The real launcher greets on stdout before serving anything.
    let launcher = write_script(
        temp.path(),
        "streamlit",
        r#"echo "  You can now view your Streamlit app in your browser.""#,
    );

    let mut cmd = Command::new(cargo_bin("trestle"));
    cmd.env("TRESTLE_PYTHON", &python);
    cmd.env("TRESTLE_DASHBOARD", &launcher);
    cmd.env("HOME", temp.path());
    cmd.args(["check", "--skip-extras", "--no-pacing", "--format", "json"]);

    let output = cmd.output()?;
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(value["passed"], true);
    Ok(())
}

#[test]
fn discovery_prefers_python_over_python3() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python = write_script(temp.path(), "python", "exit 0");
    write_script(temp.path(), "python3", r#"echo "wrong interpreter" >&2; exit 1"#);
    let launcher = write_script(temp.path(), "streamlit", "exit 0");

    let mut cmd = Command::new(cargo_bin("trestle"));
    cmd.env_remove("TRESTLE_PYTHON");
    cmd.env("PATH", temp.path());
    cmd.env("TRESTLE_DASHBOARD", &launcher);
    cmd.env("HOME", temp.path());
    cmd.args(["check", "--skip-extras", "--no-pacing", "--verbose"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!("at {}", python.display())))
        .stdout(predicate::str::contains("python3").not());
    Ok(())
}

#[test]
fn discovery_falls_back_to_python3() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let python3 = write_script(temp.path(), "python3", "exit 0");
    let launcher = write_script(temp.path(), "streamlit", "exit 0");

    let mut cmd = Command::new(cargo_bin("trestle"));
    cmd.env_remove("TRESTLE_PYTHON");
    cmd.env("PATH", temp.path());
    cmd.env("TRESTLE_DASHBOARD", &launcher);
    cmd.env("HOME", temp.path());
    cmd.args(["check", "--skip-extras", "--no-pacing", "--verbose"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(format!("at {}", python3.display())));
    Ok(())
}

#[test]
fn quiet_run_still_shows_diagnostics() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let body = r#"case "$2" in
  *shapely*) echo "No module named 'shapely'" >&2; exit 1;;
esac
exit 0"#;
    let mut cmd = check_command(&temp, body);
    cmd.arg("--quiet");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("shapely did not import properly:"))
        .stdout(predicate::str::contains("Checking shapely").not());
    Ok(())
}
