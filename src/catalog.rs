//! Mission catalogs: where a domain's ordered steps come from.
//!
//! A catalog only has to hand back `Step`s in order. The built-in table
//! covers every domain; a directory of generated plans can override it
//! per domain. Whatever the source, steps go through [`Mission::load`]
//! before the engine will run them, so bad content is rejected when a
//! domain is selected and never while matching input.

mod builtin;
mod generated;

use std::io;

use serde::Deserialize;

use crate::model::{ExerciseDomain, Step};
use crate::validate::AcceptancePattern;

pub use builtin::BuiltinCatalog;
pub use generated::DirectoryCatalog;

/// Errors that can occur while fetching or loading mission content.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("no mission content for {0}")]
    NotFound(ExerciseDomain),

    #[error("unknown domain in mission content: {0}")]
    UnknownDomain(String),

    #[error("mission content for {0} has no steps")]
    Empty(ExerciseDomain),

    #[error("step at position {position} of {domain} is labelled {found}")]
    OutOfOrder {
        domain: ExerciseDomain,
        position: usize,
        found: usize,
    },

    #[error("step {index} of {domain} has a malformed acceptance pattern: {source}")]
    MalformedPattern {
        domain: ExerciseDomain,
        index: usize,
        #[source]
        source: regex::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = core::result::Result<T, CatalogError>;

/// A source of ordered steps per domain.
pub trait MissionCatalog {
    /// The domain's steps in order, `index` set to the position.
    fn steps(&self, domain: ExerciseDomain) -> Result<Vec<Step>>;
}

/// A step as written in catalog content, before it has a position.
///
/// Accepts both the snake-case keys of the built-in table and the
/// camel-case keys of generated plans.
#[derive(Debug, Clone, Deserialize)]
pub struct StepDraft {
    pub briefing: String,
    pub objective: String,
    #[serde(alias = "technicalGuide")]
    pub technical_guide: String,
    #[serde(alias = "commandSyntax")]
    pub command_syntax: String,
    #[serde(alias = "validationRegex", alias = "acceptancePattern")]
    pub acceptance_pattern: String,
    #[serde(alias = "successMessage")]
    pub success_message: String,
}

impl StepDraft {
    fn into_step(self, index: usize) -> Step {
        Step {
            index,
            briefing: self.briefing,
            objective: self.objective,
            technical_guide: self.technical_guide,
            command_syntax: self.command_syntax,
            acceptance_pattern: self.acceptance_pattern,
            success_message: self.success_message,
        }
    }
}

/// Number drafts by position.
pub fn number_steps(drafts: Vec<StepDraft>) -> Vec<Step> {
    drafts
        .into_iter()
        .enumerate()
        .map(|(i, d)| d.into_step(i))
        .collect()
}

/// A domain's steps, checked and with every pattern compiled.
#[derive(Debug, Clone)]
pub struct Mission {
    domain: ExerciseDomain,
    steps: Vec<Step>,
    patterns: Vec<AcceptancePattern>,
}

impl Mission {
    /// Check and compile a step list.
    ///
    /// Rejects an empty list, indices other than `0..N`, and any pattern
    /// that fails to compile.
    pub fn load(domain: ExerciseDomain, steps: Vec<Step>) -> Result<Self> {
        if steps.is_empty() {
            return Err(CatalogError::Empty(domain));
        }

        let mut patterns = Vec::with_capacity(steps.len());
        for (position, step) in steps.iter().enumerate() {
            if step.index != position {
                return Err(CatalogError::OutOfOrder {
                    domain,
                    position,
                    found: step.index,
                });
            }
            let pattern = AcceptancePattern::compile(&step.acceptance_pattern).map_err(|source| {
                CatalogError::MalformedPattern {
                    domain,
                    index: step.index,
                    source,
                }
            })?;
            patterns.push(pattern);
        }

        Ok(Self {
            domain,
            steps,
            patterns,
        })
    }

    /// Fetch from a catalog and load.
    pub fn fetch(catalog: &dyn MissionCatalog, domain: ExerciseDomain) -> Result<Self> {
        Self::load(domain, catalog.steps(domain)?)
    }

    pub fn domain(&self) -> ExerciseDomain {
        self.domain
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn into_parts(self) -> (Vec<Step>, Vec<AcceptancePattern>) {
        (self.steps, self.patterns)
    }
}

/// Generated plans first, built-in table as fallback.
pub struct LayeredCatalog {
    overlay: Option<DirectoryCatalog>,
    fallback: BuiltinCatalog,
}

impl LayeredCatalog {
    pub fn new(overlay: Option<DirectoryCatalog>, fallback: BuiltinCatalog) -> Self {
        Self { overlay, fallback }
    }
}

impl MissionCatalog for LayeredCatalog {
    fn steps(&self, domain: ExerciseDomain) -> Result<Vec<Step>> {
        if let Some(overlay) = &self.overlay {
            match overlay.steps(domain) {
                Ok(steps) => {
                    tracing::info!(%domain, steps = steps.len(), "using generated mission plan");
                    return Ok(steps);
                }
                Err(CatalogError::NotFound(_)) => {}
                Err(e) => {
                    tracing::warn!(
                        %domain,
                        dir = %overlay.dir().display(),
                        error = %e,
                        "generated plan unusable, using built-in table"
                    );
                }
            }
        }
        self.fallback.steps(domain)
    }
}
