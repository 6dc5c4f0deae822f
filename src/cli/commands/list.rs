//! List command implementation.
//!
//! The `trestle list` command shows the checks a verification run performs,
//! in the order they execute.

use serde::Serialize;

use crate::checks::registry;
use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::theme::TrestleTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

#[derive(Serialize)]
struct JsonCheck {
    name: &'static str,
    package: &'static str,
    description: &'static str,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn json_output(&self) -> Result<String> {
        let checks: Vec<_> = registry()
            .iter()
            .map(|check| JsonCheck {
                name: check.id.name(),
                package: check.id.package(),
                description: check.id.describe(),
            })
            .collect();

        let rendered = serde_json::to_string_pretty(&checks).map_err(anyhow::Error::from)?;
        Ok(rendered)
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            println!("{}", self.json_output()?);
            return Ok(CommandResult::success());
        }

        let theme = TrestleTheme::new();

        ui.message(&format!("  {}", theme.highlight.apply_to("Checks:")));
        for check in registry() {
            ui.message(&format!(
                "    {} {}",
                theme.highlight.apply_to(format!("{:<14}", check.id.name())),
                theme.dim.apply_to(format!("[{}]", check.id.package())),
            ));
            ui.message(&format!(
                "      {}",
                theme.dim.apply_to(check.id.describe())
            ));
        }

        Ok(CommandResult::success())
    }
}
