//! Synthetic tool output: what a real tool would have printed.
//!
//! Each domain has an ordered rule table. A rule pairs a keyword
//! predicate with a canned response; the first rule whose predicate
//! holds against the trimmed, lower-cased input wins. Nothing here
//! touches a shell, the filesystem, or the network.
//!
//! The output is flavor text. Whether the input passes the current step
//! is decided separately by `validate`.

mod docker;
mod git;
mod kubernetes;
mod linux;
mod postgres;

use crate::model::ExerciseDomain;

/// A keyword test against normalized input.
#[derive(Debug)]
pub enum Predicate {
    /// Input contains the keyword.
    Contains(&'static str),

    /// Input contains at least one of the keywords.
    AnyOf(&'static [&'static str]),

    /// Input starts with the keyword.
    StartsWith(&'static str),

    /// Every inner predicate holds.
    AllOf(&'static [Predicate]),
}

impl Predicate {
    fn holds(&self, cmd: &str) -> bool {
        match self {
            Self::Contains(k) => cmd.contains(k),
            Self::AnyOf(ks) => ks.iter().any(|k| cmd.contains(k)),
            Self::StartsWith(k) => cmd.starts_with(k),
            Self::AllOf(ps) => ps.iter().all(|p| p.holds(cmd)),
        }
    }
}

/// What a matching rule prints.
#[derive(Debug)]
pub enum Response {
    /// Fixed text.
    Text(&'static str),

    /// The tool succeeds without printing anything.
    Silent,

    /// Text derived from the normalized input.
    Render(fn(&str) -> String),
}

/// One keyword rule.
#[derive(Debug)]
pub struct Rule {
    pub when: Predicate,
    pub then: Response,
}

/// The ordered rule table for a domain.
pub fn rules(domain: ExerciseDomain) -> &'static [Rule] {
    match domain {
        ExerciseDomain::Docker => docker::RULES,
        ExerciseDomain::Kubernetes => kubernetes::RULES,
        ExerciseDomain::PostgreSql => postgres::RULES,
        ExerciseDomain::Git => git::RULES,
        ExerciseDomain::Linux => linux::RULES,
    }
}

/// Synthesize tool output for a submission.
///
/// `None` means no rule matched. A silent rule yields `Some("")`:
/// it claims the input but prints nothing.
pub fn synthesize(domain: ExerciseDomain, input: &str) -> Option<String> {
    let cmd = input.trim().to_lowercase();
    rules(domain)
        .iter()
        .find(|rule| rule.when.holds(&cmd))
        .map(|rule| match rule.then {
            Response::Text(text) => text.to_string(),
            Response::Silent => String::new(),
            Response::Render(render) => render(&cmd),
        })
}
