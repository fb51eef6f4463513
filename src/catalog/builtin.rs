//! The built-in mission table, embedded from `missions/builtin.toml`.

use std::collections::BTreeMap;

use crate::model::{ExerciseDomain, Step};

use super::{CatalogError, MissionCatalog, Result, StepDraft, number_steps};

const BUILTIN_TOML: &str = include_str!("../../missions/builtin.toml");

/// Static steps for every domain.
#[derive(Debug, Clone)]
pub struct BuiltinCatalog {
    table: BTreeMap<ExerciseDomain, Vec<Step>>,
}

impl BuiltinCatalog {
    /// Parse the embedded table.
    pub fn load() -> Result<Self> {
        Self::parse(BUILTIN_TOML)
    }

    /// Parse a table with one array of steps per domain key.
    pub fn parse(source: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<StepDraft>> = toml::from_str(source)?;
        let mut table = BTreeMap::new();
        for (key, drafts) in raw {
            let domain =
                ExerciseDomain::from_slug(&key).ok_or(CatalogError::UnknownDomain(key))?;
            table.insert(domain, number_steps(drafts));
        }
        Ok(Self { table })
    }
}

impl MissionCatalog for BuiltinCatalog {
    fn steps(&self, domain: ExerciseDomain) -> Result<Vec<Step>> {
        self.table
            .get(&domain)
            .cloned()
            .ok_or(CatalogError::NotFound(domain))
    }
}
