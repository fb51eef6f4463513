//! Step: one unit of a scripted exercise.

/// One unit of an exercise.
///
/// `index` is the 0-based position within the domain's ordered list.
/// Catalogs assign it; the engine checks it on load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub index: usize,

    /// Narrative context shown when the step becomes active.
    pub briefing: String,

    /// Short imperative description of the required action.
    pub objective: String,

    /// Explanatory text for the side panel.
    pub technical_guide: String,

    /// Example of the expected input, shown on hint request.
    pub command_syntax: String,

    /// Case-insensitive regular expression the trimmed input must match.
    pub acceptance_pattern: String,

    /// Emitted when the step passes.
    pub success_message: String,
}
