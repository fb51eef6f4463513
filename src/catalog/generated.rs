//! Generated mission plans: content synthesized outside this process.
//!
//! A content generator is a black box that returns a titled list of
//! steps in JSON. Plans are dropped into a directory as
//! `<domain>.json` (e.g. `docker.json`) and read on selection.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::{ExerciseDomain, Step};

use super::{CatalogError, MissionCatalog, Result, StepDraft, number_steps};

/// The JSON shape a content generator returns.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneratedPlan {
    pub title: String,
    pub steps: Vec<StepDraft>,
}

impl GeneratedPlan {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The plan's steps, indexed by position.
    pub fn into_steps(self) -> Vec<Step> {
        number_steps(self.steps)
    }
}

/// Reads generated plans from a directory, one file per domain.
#[derive(Debug, Clone)]
pub struct DirectoryCatalog {
    dir: PathBuf,
}

impl DirectoryCatalog {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn plan_path(&self, domain: ExerciseDomain) -> PathBuf {
        self.dir.join(format!("{}.json", domain.slug()))
    }
}

impl MissionCatalog for DirectoryCatalog {
    fn steps(&self, domain: ExerciseDomain) -> Result<Vec<Step>> {
        let path = self.plan_path(domain);
        let json = match fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CatalogError::NotFound(domain));
            }
            Err(e) => return Err(e.into()),
        };
        let plan = GeneratedPlan::from_json(&json)?;
        tracing::debug!(%domain, title = %plan.title, path = %path.display(), "read generated plan");
        Ok(plan.into_steps())
    }
}
