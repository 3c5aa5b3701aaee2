//! Screener configuration

use copyguard_core::{Error, Severity};
use copyguard_rules::{RulePack, RuleSet, RuleSetBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::info;

use crate::cli::RuleArgs;

/// Config file picked up from the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "copyguard.yaml";

/// Screener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Extra rule packs, applied after the built-in table
    #[serde(default)]
    pub rule_packs: Vec<PathBuf>,

    /// Include the built-in rule table
    #[serde(default = "default_true")]
    pub include_builtin: bool,

    /// Longest slide accepted, in characters
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,

    /// Lowest severity that makes `scan` exit with a failure status
    #[serde(default)]
    pub fail_on: Option<Severity>,

    /// Report format
    #[serde(default)]
    pub format: OutputFormat,
}

impl ScreenConfig {
    /// Load configuration from an explicit file, or from
    /// `./copyguard.yaml` when present, or fall back to defaults.
    ///
    /// Relative rule pack paths are resolved against the config file's
    /// directory.
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let path = match config_path {
            Some(path) => Some(path.to_path_buf()),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                default.exists().then_some(default)
            }
        };

        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| anyhow::anyhow!("failed to read config {}: {}", path.display(), e))?;
        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("failed to parse config {}: {}", path.display(), e))?;

        if let Some(dir) = path.parent() {
            for pack in &mut config.rule_packs {
                if pack.is_relative() {
                    *pack = dir.join(&*pack);
                }
            }
        }

        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Apply rule selection flags from the command line.
    ///
    /// Packs given with `--rules` load after the configured ones.
    pub fn apply_rule_args(&mut self, args: &RuleArgs) {
        self.rule_packs.extend(args.packs.iter().cloned());
        if args.no_builtin {
            self.include_builtin = false;
        }
    }

    /// Load every configured pack and compile the combined rule set
    pub fn build_rule_set(&self) -> copyguard_core::Result<RuleSet> {
        let mut builder = RuleSetBuilder::new().include_builtin(self.include_builtin);
        for path in &self.rule_packs {
            builder = builder.pack(RulePack::from_file(path)?);
        }
        builder.build()
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            rule_packs: Vec::new(),
            include_builtin: true,
            max_text_chars: default_max_text_chars(),
            fail_on: None,
            format: OutputFormat::default(),
        }
    }
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable report
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(Error::config(format!("unknown output format '{}'", other))),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_text_chars() -> usize {
    1000
}
