//! The dashboard (streamlit) check.
//!
//! Deliberately weak: it verifies the launcher starts, waits a bounded
//! period for the dashboard port to answer, then kills the process.
//! Only a failed launch is a failure; a dashboard that never answers
//! is worth a warning but the package may still be fine.

use std::net::{SocketAddr, TcpStream};
use std::process::Child;
use std::time::Instant;

use super::diagnostic::FailureKind;
use super::runner::ProbeFailure;
use super::{CheckContext, DashboardWait};
use crate::python::snippet_source;
use crate::shell::{spawn_background, CommandOptions};

const DEMO_ASSET: &str = "streamlit_demo.py";

pub fn probe(ctx: &CheckContext, warnings: &mut Vec<String>) -> Result<(), ProbeFailure> {
    let source = snippet_source(DEMO_ASSET).map_err(|_| launch_failure())?;

    let staging = tempfile::TempDir::new().map_err(|_| launch_failure())?;
    let script = staging.path().join(DEMO_ASSET);
    std::fs::write(&script, source).map_err(|_| launch_failure())?;

    let options = CommandOptions {
        cwd: Some(staging.path().to_path_buf()),
        // The launcher's startup banner stays on its own pipe; the
        // checker's report owns stdout.
        capture_stdout: true,
        ..Default::default()
    };
    let script_arg = script.to_string_lossy();
    let mut child = spawn_background(&ctx.launcher, &["run", &script_arg], &options)
        .map_err(|_| launch_failure())?;

    tracing::debug!("dashboard launcher spawned (pid {})", child.id());

    if wait_until_ready(&ctx.dashboard_wait, &mut child, warnings) {
        tracing::debug!("dashboard answered on port {}", ctx.dashboard_wait.port);
    }

    child.kill().ok();
    child.wait().ok();

    Ok(())
}

fn launch_failure() -> ProbeFailure {
    ProbeFailure::new(FailureKind::Launch, Vec::new())
}

/// Poll the dashboard port until it answers, the child dies, or the
/// deadline lapses. Returns whether the port ever answered.
fn wait_until_ready(wait: &DashboardWait, child: &mut Child, warnings: &mut Vec<String>) -> bool {
    let address = SocketAddr::from(([127, 0, 0, 1], wait.port));
    let deadline = Instant::now() + wait.deadline;

    loop {
        if let Ok(Some(status)) = child.try_wait() {
            tracing::warn!("dashboard launcher exited early: {}", status);
            warnings.push(format!(
                "Dashboard launcher exited before becoming ready ({}).",
                status
            ));
            return false;
        }

        if TcpStream::connect_timeout(&address, wait.poll_interval).is_ok() {
            return true;
        }

        if Instant::now() >= deadline {
            tracing::warn!("dashboard never answered on port {}", wait.port);
            warnings.push(format!(
                "Dashboard never answered on port {} within {:.1}s; continuing.",
                wait.port,
                wait.deadline.as_secs_f32()
            ));
            return false;
        }

        std::thread::sleep(wait.poll_interval);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::CheckId;
    use crate::checks::{wrap_failure, DashboardWait};
    use crate::python::Interpreter;
    use crate::shell::Platform;
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    #[cfg(unix)]
    fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let path = dir.join(name);
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    fn context_with_launcher(temp: &tempfile::TempDir, launcher: PathBuf) -> CheckContext {
        CheckContext {
            interpreter: Interpreter::new(PathBuf::from("python")),
            launcher,
            home_dir: temp.path().to_path_buf(),
            platform: Platform::MacOS,
            skip_extras: true,
            pacing: false,
            dashboard_wait: DashboardWait {
                port: 38502,
                deadline: Duration::from_millis(200),
                poll_interval: Duration::from_millis(10),
            },
        }
    }

    #[test]
    fn missing_launcher_is_a_launch_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let ctx = context_with_launcher(&temp, PathBuf::from("/no/such/launcher"));
        let mut warnings = Vec::new();

        let failure = probe(&ctx, &mut warnings).unwrap_err();

        assert_eq!(failure.kind, FailureKind::Launch);
        assert!(failure.detail.is_empty());
    }

    #[test]
    fn launch_failure_renders_the_fixed_line() {
        let temp = tempfile::TempDir::new().unwrap();
        let ctx = context_with_launcher(&temp, PathBuf::from("/no/such/launcher"));
        let mut warnings = Vec::new();

        let diag = wrap_failure(CheckId::Streamlit, || probe(&ctx, &mut warnings)).unwrap();

        assert_eq!(diag.render(), "Streamlit did not run properly.");
    }

    #[test]
    #[cfg(unix)]
    fn unanswered_port_is_a_warning_not_a_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let launcher = write_script(temp.path(), "streamlit", "sleep 2");
        let ctx = context_with_launcher(&temp, launcher);
        let mut warnings = Vec::new();

        let result = probe(&ctx, &mut warnings);

        assert!(result.is_ok());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("never answered"));
    }

    #[test]
    #[cfg(unix)]
    fn premature_exit_is_a_warning_not_a_failure() {
        let temp = tempfile::TempDir::new().unwrap();
        let launcher = write_script(temp.path(), "streamlit", "exit 7");
        let ctx = context_with_launcher(&temp, launcher);
        let mut warnings = Vec::new();

        let result = probe(&ctx, &mut warnings);

        assert!(result.is_ok());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("exited before becoming ready"));
    }

    #[test]
    #[cfg(unix)]
    fn answering_port_produces_no_warnings() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();

        let temp = tempfile::TempDir::new().unwrap();
        let launcher = write_script(temp.path(), "streamlit", "sleep 2");
        let mut ctx = context_with_launcher(&temp, launcher);
        ctx.dashboard_wait.port = port;
        let mut warnings = Vec::new();

        let result = probe(&ctx, &mut warnings);

        assert!(result.is_ok());
        assert!(warnings.is_empty());
    }
}
