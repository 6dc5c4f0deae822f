//! Demo command implementation.
//!
//! The `trestle demo` command stages the bundled cross-section analysis
//! script and runs it through the course interpreter, streaming the
//! interpreter's output straight to the student. It exists so instructors
//! can show one real sectionproperties workflow without shipping a second
//! script alongside the checker.

use std::fs;

use crate::cli::args::DemoArgs;
use crate::error::{Result, TrestleError};
use crate::python::{snippet_source, Interpreter};
use crate::shell::{execute, CommandOptions};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

const DEMO_ASSET: &str = "section_demo.py";

/// The demo command implementation.
pub struct DemoCommand {
    args: DemoArgs,
}

impl DemoCommand {
    /// Create a new demo command.
    pub fn new(args: DemoArgs) -> Self {
        Self { args }
    }

    fn run_demo(
        &self,
        interpreter: &Interpreter,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let source = snippet_source(DEMO_ASSET)?;

        let staging = tempfile::TempDir::new()?;
        let script = staging.path().join(DEMO_ASSET);
        fs::write(&script, source)?;

        ui.message("Running the cross-section analysis demo...");

        // Inherit stdio so the mesh summary prints straight to the student.
        let options = CommandOptions::default();
        let script_arg = script.to_string_lossy();
        let result = execute(interpreter.program(), &[script_arg.as_ref()], &options)?;

        if result.success {
            ui.success("Demo finished.");
            Ok(CommandResult::success())
        } else {
            match result.exit_code {
                Some(code) => ui.error(&format!("Demo exited with status {}", code)),
                None => ui.error("Demo was terminated by a signal"),
            }
            Ok(CommandResult::failure(1))
        }
    }
}

impl Command for DemoCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let interpreter = match Interpreter::resolve(self.args.python.as_deref()) {
            Ok(interpreter) => interpreter,
            Err(TrestleError::InterpreterNotFound { message }) => {
                ui.error(&format!("Python interpreter not found: {}", message));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        self.run_demo(&interpreter, ui)
    }
}
