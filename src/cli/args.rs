//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Trestle - Installation checker for the PfSE course environment.
#[derive(Debug, Parser)]
#[command(name = "trestle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Verify the installed course packages (default if no command specified)
    Check(CheckArgs),

    /// List the checks a verification run performs
    List(ListArgs),

    /// Run the cross-section analysis demo through the course interpreter
    Demo(DemoArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    /// Python interpreter to use (a name looked up on PATH, or a path)
    #[arg(long, value_name = "PYTHON", env = "TRESTLE_PYTHON")]
    pub python: Option<PathBuf>,

    /// Dashboard launcher to use instead of `streamlit`
    #[arg(long, value_name = "LAUNCHER", env = "TRESTLE_DASHBOARD")]
    pub dashboard: Option<PathBuf>,

    /// Output format: human, json
    #[arg(long, default_value = "human")]
    pub format: String,

    /// Skip the extra Linux package installation
    #[arg(long)]
    pub skip_extras: bool,

    /// Disable the pause between checks
    #[arg(long, hide = true)]
    pub no_pacing: bool,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            python: None,
            dashboard: None,
            format: "human".to_string(),
            skip_extras: false,
            no_pacing: false,
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `demo` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DemoArgs {
    /// Python interpreter to use (a name looked up on PATH, or a path)
    #[arg(long, value_name = "PYTHON", env = "TRESTLE_PYTHON")]
    pub python: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
