//! Rule packs: rule tables loaded from YAML

use copyguard_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use crate::rule::{Rule, RuleSpec};

/// A named collection of rules, typically loaded from a YAML file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulePack {
    /// Pack name
    pub name: String,

    /// What the pack screens for
    #[serde(default)]
    pub description: String,

    /// Version of the pack
    #[serde(default)]
    pub version: String,

    /// Rules in declaration order
    pub rules: Vec<RuleSpec>,
}

impl RulePack {
    /// Load a pack from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("failed to parse rule pack: {}", e)))
    }

    /// Load a pack from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let pack: Self = serde_yaml::from_str(&content).map_err(|e| {
            Error::config(format!(
                "failed to parse rule pack {}: {}",
                path.display(),
                e
            ))
        })?;

        info!(
            pack = %pack.name,
            rules = pack.rules.len(),
            "Loaded rule pack from {}",
            path.display()
        );
        Ok(pack)
    }

    /// Compile every rule independently and report each failure.
    ///
    /// Unlike building a rule set, this does not stop at the first broken
    /// rule, so a pack author sees all problems at once. Disabled rules are
    /// checked too.
    pub fn validate(&self) -> Vec<Error> {
        let mut seen = HashSet::new();
        let mut errors = Vec::new();

        for spec in &self.rules {
            if !seen.insert(spec.id.as_str()) {
                errors.push(Error::rule(format!("duplicate rule id '{}'", spec.id)));
                continue;
            }
            if let Err(e) = Rule::compile(spec.clone()) {
                errors.push(e);
            }
        }

        errors
    }
}
