//! Core data model for Mainframe.
//!
//! Domains, steps, and transcript entries. These are plain data:
//! the rules that connect them live in `engine`.

mod domain;
mod step;
mod transcript;

pub use domain::ExerciseDomain;
pub use step::Step;
pub use transcript::{Sender, Severity, TranscriptEntry};
