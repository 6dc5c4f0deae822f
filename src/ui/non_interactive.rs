//! Non-interactive UI for CI/headless environments.

use super::theme::TrestleTheme;
use super::{OutputMode, SpinnerHandle, Tint, UserInterface};

/// UI implementation for non-interactive mode.
///
/// Output goes through plain `println!`/`eprintln!` so it stays
/// readable in log-based environments.
pub struct NonInteractiveUI {
    mode: OutputMode,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("{}", msg);
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }

    fn styled(&mut self, text: &str, _tint: Tint) {
        if self.mode.shows_status() {
            println!("{}", text);
        }
    }

    fn banner(&mut self, text: &str, _tint: Tint) {
        if self.mode.shows_status() {
            println!("\n{}", text);
        }
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            println!("\n{}\n", title);
        }
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        if self.mode.shows_spinners() {
            println!("  {}", message);
        }
        Box::new(NoopSpinner {
            render: self.mode.shows_spinners(),
        })
    }

    fn is_interactive(&self) -> bool {
        false
    }
}

/// Spinner stand-in that only prints its finish line.
struct NoopSpinner {
    render: bool,
}

impl SpinnerHandle for NoopSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        if self.render {
            let theme = TrestleTheme::new();
            println!("{}", theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        if self.render {
            let theme = TrestleTheme::new();
            println!("{}", theme.format_error(msg));
        }
    }

    fn finish_skipped(&mut self, msg: &str) {
        if self.render {
            let theme = TrestleTheme::new();
            println!("{}", theme.format_skipped(msg));
        }
    }
}
