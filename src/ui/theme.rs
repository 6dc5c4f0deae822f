//! Visual theme and styling.

use console::Style;

/// Accent colors used for diagnostic blocks and phase banners.
///
/// Each check renders its failure text in a fixed tint so students can
/// tell at a glance which package a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Magenta,
    Red,
    Green,
    Cyan,
    Yellow,
}

/// Trestle's visual theme.
#[derive(Debug, Clone)]
pub struct TrestleTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (magenta bold).
    pub header: Style,
    /// Bold magenta accent.
    pub magenta: Style,
    /// Bold red accent.
    pub red: Style,
    /// Bold green accent.
    pub green: Style,
    /// Bold cyan accent.
    pub cyan: Style,
    /// Bold yellow accent.
    pub yellow: Style,
}

impl Default for TrestleTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl TrestleTheme {
    /// Create the default Trestle theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().magenta(),
            magenta: Style::new().magenta().bold(),
            red: Style::new().red().bold(),
            green: Style::new().green().bold(),
            cyan: Style::new().cyan().bold(),
            yellow: Style::new().yellow().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            magenta: Style::new(),
            red: Style::new(),
            green: Style::new(),
            cyan: Style::new(),
            yellow: Style::new(),
        }
    }

    /// The accent style for a tint.
    pub fn tinted(&self, tint: Tint) -> &Style {
        match tint {
            Tint::Magenta => &self.magenta,
            Tint::Red => &self.red,
            Tint::Green => &self.green,
            Tint::Cyan => &self.cyan,
            Tint::Yellow => &self.yellow,
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a skipped message (icon + text in dim).
    pub fn format_skipped(&self, msg: &str) -> String {
        format!("{}", self.dim.apply_to(format!("○ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("🏗"),
            self.highlight.apply_to(title)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}
