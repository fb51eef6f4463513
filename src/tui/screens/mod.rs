//! Screen rendering and input handling.

mod mission;
mod select;

use ratatui::style::Color;

use crate::model::ExerciseDomain;

pub use mission::MissionScreen;
pub use select::SelectScreen;

/// Amber, for anything not tied to a domain.
const DEFAULT_ACCENT: Color = Color::Rgb(245, 158, 11);

/// Each domain's accent color.
fn accent(domain: Option<ExerciseDomain>) -> Color {
    match domain {
        None => DEFAULT_ACCENT,
        Some(ExerciseDomain::Docker) => Color::Rgb(96, 165, 250),
        Some(ExerciseDomain::Kubernetes) => Color::Rgb(37, 99, 235),
        Some(ExerciseDomain::PostgreSql) => Color::Rgb(129, 140, 248),
        Some(ExerciseDomain::Git) => Color::Rgb(249, 115, 22),
        Some(ExerciseDomain::Linux) => Color::Rgb(34, 197, 94),
    }
}
