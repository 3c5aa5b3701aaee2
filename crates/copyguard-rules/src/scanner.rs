//! Compliance scanner
//!
//! Runs every rule of a [`RuleSet`] against every slide of a batch and
//! collects one [`Warning`] per match. The scanner holds no mutable state:
//! a single instance can serve any number of threads through `Arc` or
//! `Clone` without locking.

use copyguard_core::{Result, Slide, Warning};
use std::sync::Arc;
use tracing::debug;

use crate::rule_set::RuleSet;

/// Deterministic rule-based screener for slide copy
#[derive(Debug, Clone)]
pub struct ComplianceScanner {
    rules: Arc<RuleSet>,
}

impl ComplianceScanner {
    /// Create a scanner over a compiled rule set
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules: Arc::new(rules),
        }
    }

    /// Create a scanner over a rule set already shared elsewhere
    pub fn from_shared(rules: Arc<RuleSet>) -> Self {
        Self { rules }
    }

    /// Create a scanner over the built-in table
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(RuleSet::builtin()?))
    }

    /// The rule set this scanner applies
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Scan a batch of slides.
    ///
    /// Warnings are ordered by slide (input order), then category, then rule
    /// declaration order, then match position. The same input always yields
    /// the same output.
    pub fn scan(&self, slides: &[Slide]) -> Vec<Warning> {
        let warnings: Vec<Warning> = slides
            .iter()
            .flat_map(|slide| self.scan_slide(slide))
            .collect();

        debug!(
            rule_set = %self.rules.name(),
            slides = slides.len(),
            warnings = warnings.len(),
            "Scanned slide batch"
        );
        warnings
    }

    /// Scan a single slide, e.g. after a one-slide rewrite
    pub fn scan_slide(&self, slide: &Slide) -> Vec<Warning> {
        let mut warnings = Vec::new();

        if slide.text.is_empty() {
            return warnings;
        }

        for rule in self.rules.iter() {
            for m in rule.find_matches(&slide.text) {
                warnings.push(Warning {
                    slide_id: slide.id.clone(),
                    source_text: slide.text.clone(),
                    matched_span: m.text.to_string(),
                    category: rule.category(),
                    severity: rule.severity(),
                    suggestion: rule.suggestion().to_string(),
                });
            }
        }

        warnings
    }
}
