//! Terminal presentation of a run's outcome.
//!
//! Each failing check renders as its own tinted block, followed by a verdict
//! banner. A clean run gets the green all-clear instead. The wording matches
//! the course material students already know from the install instructions.

use crate::checks::RunReport;
use crate::ui::{Tint, UserInterface};

/// Closing line shown under the failure banner.
pub const SUPPORT_MESSAGE: &str = "Please use Ctrl-Shift-C to copy the above \
     error messages and email them to connor@structuralpython.com";

/// Render the run outcome for a person at the terminal.
pub fn render(report: &RunReport, ui: &mut dyn UserInterface) {
    if report.passed() {
        ui.banner("PfSE installation seems ok", Tint::Green);
        ui.banner(
            "You can now close any windows that have opened as a result of the test.",
            Tint::Green,
        );
        return;
    }

    for diagnostic in &report.diagnostics {
        ui.styled(&diagnostic.render(), diagnostic.check.tint());
    }

    ui.banner("Inconsistencies encountered", Tint::Red);
    ui.banner(SUPPORT_MESSAGE, Tint::Red);
}
