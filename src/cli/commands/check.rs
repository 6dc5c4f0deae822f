//! Check command implementation.
//!
//! The `trestle check` command runs the full package verification sequence
//! against the course Python environment and renders the outcome.

use std::path::PathBuf;

use anyhow::anyhow;

use crate::checks::{run_all_checks, CheckContext, DashboardWait};
use crate::cli::args::CheckArgs;
use crate::error::{Result, TrestleError};
use crate::python::Interpreter;
use crate::report;
use crate::shell::{home_dir, Platform};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(args: CheckArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &CheckArgs {
        &self.args
    }

    fn build_context(&self, interpreter: Interpreter) -> Result<CheckContext> {
        let home_dir =
            home_dir().ok_or_else(|| anyhow!("could not determine the home directory"))?;

        let launcher = self
            .args
            .dashboard
            .clone()
            .unwrap_or_else(|| PathBuf::from("streamlit"));

        Ok(CheckContext {
            interpreter,
            launcher,
            home_dir,
            platform: Platform::current(),
            skip_extras: self.args.skip_extras,
            pacing: !self.args.no_pacing,
            dashboard_wait: DashboardWait::default(),
        })
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let interpreter = match Interpreter::resolve(self.args.python.as_deref()) {
            Ok(interpreter) => interpreter,
            Err(TrestleError::InterpreterNotFound { message }) => {
                ui.error(&format!("Python interpreter not found: {}", message));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if ui.output_mode().shows_command_output() {
            let version = interpreter.version().unwrap_or_else(|| "?".to_string());
            ui.message(&format!(
                "Using Python {} at {}",
                version,
                interpreter.program().display()
            ));
        }

        let context = self.build_context(interpreter)?;
        let report = run_all_checks(&context, ui);

        match self.args.format.as_str() {
            "json" => {
                // JSON owns stdout; the UI is silenced in this mode.
                println!("{}", report::json::render(&report)?);
            }
            _ => report::human::render(&report, ui),
        }

        if report.passed() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn missing_interpreter_reports_and_exits_two() {
        let args = CheckArgs {
            python: Some(PathBuf::from("/definitely/not/a/real/python")),
            ..CheckArgs::default()
        };
        let cmd = CheckCommand::new(args);

        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Python interpreter not found"));
    }

    #[test]
    fn context_honors_dashboard_override() {
        let args = CheckArgs {
            dashboard: Some(PathBuf::from("/opt/course/bin/streamlit")),
            skip_extras: true,
            no_pacing: true,
            ..CheckArgs::default()
        };
        let cmd = CheckCommand::new(args);

        let context = cmd
            .build_context(Interpreter::new(PathBuf::from("/usr/bin/python3")))
            .unwrap();

        assert_eq!(context.launcher, PathBuf::from("/opt/course/bin/streamlit"));
        assert!(context.skip_extras);
        assert!(!context.pacing);
    }

    #[test]
    fn context_defaults_to_streamlit_on_path() {
        let cmd = CheckCommand::new(CheckArgs::default());

        let context = cmd
            .build_context(Interpreter::new(PathBuf::from("/usr/bin/python3")))
            .unwrap();

        assert_eq!(context.launcher, PathBuf::from("streamlit"));
        assert!(!context.skip_extras);
        assert!(context.pacing);
        assert_eq!(context.dashboard_wait.port, 8501);
    }

    #[test]
    fn default_args_request_human_format() {
        let cmd = CheckCommand::new(CheckArgs::default());
        assert_eq!(cmd.args().format, "human");
    }
}
