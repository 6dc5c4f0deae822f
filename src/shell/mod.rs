//! Process execution and platform detection.

pub mod command;
pub mod platform;

pub use command::{
    execute, render_command, spawn_background, CommandOptions, CommandResult,
};
pub use platform::{home_dir, is_ci, Platform};
