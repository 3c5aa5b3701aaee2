//! Core types for CopyGuard

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a slide within its script.
///
/// Callers use either numeric slide positions or string keys; the engine
/// treats both as opaque and only copies them onto warnings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideId {
    /// Numeric slide id (the script generator numbers slides from 1)
    Number(i64),
    /// Free-form slide key
    Text(String),
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SlideId {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for SlideId {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for SlideId {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for SlideId {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One unit of candidate copy, scanned independently of its siblings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Caller-supplied identifier
    pub id: SlideId,

    /// Copy to screen. Script records store it under `script`.
    #[serde(alias = "script")]
    pub text: String,
}

impl Slide {
    /// Create a new slide
    pub fn new(id: impl Into<SlideId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Legal regime a rule belongs to.
///
/// Declaration order is emission order: every efficacy warning for a slide
/// precedes every misleading-claim warning for the same slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    /// Medical or therapeutic efficacy claims (pharmaceutical affairs statute)
    RegulatedEfficacy,
    /// Deceptive representation: unsubstantiated superiority, pricing, absolutes
    MisleadingClaim,
}

impl Category {
    /// All categories in emission order
    pub const ALL: [Category; 2] = [Category::RegulatedEfficacy, Category::MisleadingClaim];

    /// Wire label
    pub fn label(&self) -> &'static str {
        match self {
            Self::RegulatedEfficacy => "REGULATED_EFFICACY",
            Self::MisleadingClaim => "MISLEADING_CLAIM",
        }
    }

    /// Name of the statute the category is enforced under
    pub fn statute(&self) -> &'static str {
        match self {
            Self::RegulatedEfficacy => "薬機法",
            Self::MisleadingClaim => "景表法",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace('-', "_").as_str() {
            "REGULATED_EFFICACY" => Ok(Self::RegulatedEfficacy),
            "MISLEADING_CLAIM" => Ok(Self::MisleadingClaim),
            other => Err(crate::Error::config(format!("unknown category '{}'", other))),
        }
    }
}

/// Severity tier of a rule.
///
/// Ordered so that `High > Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Conditionally problematic: needs a disclaimer, evidence, or a time box
    Medium,
    /// Unconditionally non-compliant
    High,
}

impl Severity {
    /// Wire label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "HIGH" => Ok(Self::High),
            "MEDIUM" => Ok(Self::Medium),
            other => Err(crate::Error::config(format!("unknown severity '{}'", other))),
        }
    }
}

/// One reported match of one rule against one slide
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Warning {
    /// Id of the slide that produced the warning
    pub slide_id: SlideId,

    /// Full text of that slide
    pub source_text: String,

    /// Exact substring that triggered the rule
    pub matched_span: String,

    /// Category of the triggering rule
    pub category: Category,

    /// Severity of the triggering rule
    pub severity: Severity,

    /// Remediation guidance of the triggering rule
    pub suggestion: String,
}
