//! The pre-check platform installer.
//!
//! Linux conda environments need `libstdcxx-ng` from conda-forge so
//! vtk can find a modern C++ runtime. The install is best-effort: its
//! exit status is not inspected, and a broken conda shows up later as
//! a failing vtk check rather than an aborted run.

use std::path::Path;

use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult, Platform};
use crate::ui::{Tint, UserInterface};

const CONDA_ARGS: &[&str] = &["install", "-c", "conda-forge", "libstdcxx-ng"];

/// Dependencies of the installer, injectable for tests.
pub struct InstallerContext<'a> {
    pub platform: Platform,
    pub run_command: &'a dyn Fn(&Path, &[&str], &CommandOptions) -> Result<CommandResult>,
}

fn run_real(program: &Path, args: &[&str], options: &CommandOptions) -> Result<CommandResult> {
    execute(program, args, options)
}

impl InstallerContext<'static> {
    /// Real command execution for a given platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self {
            platform,
            run_command: &run_real,
        }
    }
}

/// Install the extra native package where the platform needs one.
pub fn install_extra(ctx: &InstallerContext, ui: &mut dyn UserInterface) {
    if ctx.platform.needs_extra_install() {
        // Conda output streams to the user's terminal, except in the
        // silent mode where the report owns stdout.
        let silent = !ui.output_mode().shows_status();
        let options = CommandOptions {
            // Auto-confirm the install plan.
            stdin: Some("y\n".to_string()),
            capture_stdout: silent,
            capture_stderr: silent,
            ..Default::default()
        };

        tracing::debug!("installing libstdcxx-ng via conda");
        if (ctx.run_command)(Path::new("conda"), CONDA_ARGS, &options).is_err() {
            tracing::warn!("conda install could not be started");
        }
    } else {
        ui.styled("No additional installations necessary. Ok.", Tint::Green);
    }
}
