//! Rule definitions

use copyguard_core::{Category, Error, Result, Severity};
use serde::{Deserialize, Serialize};

use crate::matcher::{MatchSpan, Matcher, RulePattern};

/// Declarative form of a rule, as written in a rule pack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Rule identifier, unique within a rule set
    pub id: String,

    /// Legal category the rule reports under
    pub category: Category,

    /// Severity tier
    pub severity: Severity,

    /// Pattern, written as either `regex: ...` or `literals: [...]`
    #[serde(flatten)]
    pub pattern: RulePattern,

    /// Remediation guidance shown with every warning
    pub suggestion: String,

    /// Sample copy the rule must flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,

    /// Whether this rule is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

/// A validated rule with its compiled matcher
#[derive(Debug, Clone)]
pub struct Rule {
    spec: RuleSpec,
    matcher: Matcher,
}

impl Rule {
    /// Compile and validate a rule.
    ///
    /// Fails when the id or suggestion is blank, the pattern does not
    /// compile, or the rule does not flag its own example.
    pub fn compile(spec: RuleSpec) -> Result<Self> {
        if spec.id.trim().is_empty() {
            return Err(Error::rule("rule id is empty"));
        }
        if spec.suggestion.trim().is_empty() {
            return Err(Error::rule(format!("rule '{}' has no suggestion", spec.id)));
        }

        let matcher = Matcher::compile(&spec.pattern)
            .map_err(|e| Error::rule(format!("rule '{}': {}", spec.id, e)))?;

        if let Some(example) = &spec.example {
            if !matcher.is_match(example) {
                return Err(Error::rule(format!(
                    "rule '{}' does not flag its example '{}'",
                    spec.id, example
                )));
            }
        }

        Ok(Self { spec, matcher })
    }

    /// Rule identifier
    pub fn id(&self) -> &str {
        &self.spec.id
    }

    pub fn category(&self) -> Category {
        self.spec.category
    }

    pub fn severity(&self) -> Severity {
        self.spec.severity
    }

    pub fn suggestion(&self) -> &str {
        &self.spec.suggestion
    }

    pub fn pattern(&self) -> &RulePattern {
        &self.spec.pattern
    }

    pub fn example(&self) -> Option<&str> {
        self.spec.example.as_deref()
    }

    /// The declarative form this rule was compiled from
    pub fn spec(&self) -> &RuleSpec {
        &self.spec
    }

    /// Every non-overlapping match of this rule in `text`, left to right
    pub fn find_matches<'t>(&self, text: &'t str) -> Vec<MatchSpan<'t>> {
        self.matcher.find_all(text)
    }
}
