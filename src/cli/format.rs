//! Output formatting for CLI display.

use std::fmt::Write;

use crate::catalog::Mission;
use crate::validate::validate;

/// Format a loaded mission as a heading and one line per step.
///
/// Steps whose example syntax is concrete but fails the step's own
/// pattern are flagged; trainees following the hint would be rejected.
pub(super) fn format_mission(mission: &Mission) -> String {
    let domain = mission.domain();
    let steps = mission.steps();
    let mut out = format!(
        "{domain}  {}  ({} steps)\n",
        domain.label(),
        steps.len()
    );
    for step in steps {
        let concrete = !step.command_syntax.contains('[');
        let flag = if concrete && !validate(&step.acceptance_pattern, &step.command_syntax) {
            "  [hint does not pass]"
        } else {
            ""
        };
        let _ = write!(
            out,
            "  {:>2}. {}\n      $ {}{flag}\n",
            step.index + 1,
            step.objective,
            step.command_syntax
        );
    }
    out
}
