//! CopyGuard Rules
//!
//! Rule-based screening of short-form advertising copy.
//!
//! The engine is a surface-pattern matcher: each rule pairs a pattern with a
//! legal category, a severity, and a remediation suggestion. The scanner runs
//! every rule against every slide and reports each match as a warning. It
//! never rewrites text and performs no I/O while scanning.
//!
//! Rule sets are built once at startup, from the built-in Japanese table
//! and/or YAML rule packs, and fail to build if any rule is broken.

pub mod matcher;
pub mod pack;
pub mod rule;
pub mod rule_set;
pub mod scanner;
pub mod table;

pub use matcher::{MatchSpan, Matcher, RulePattern};
pub use pack::RulePack;
pub use rule::{Rule, RuleSpec};
pub use rule_set::{RuleSet, RuleSetBuilder};
pub use scanner::ComplianceScanner;
pub use table::{builtin_specs, RuleDef, BUILTIN_NAME, BUILTIN_RULES};

pub use copyguard_core::{Category, Severity, Slide, SlideId, Warning};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::pack::RulePack;
    pub use crate::rule_set::{RuleSet, RuleSetBuilder};
    pub use crate::scanner::ComplianceScanner;
    pub use copyguard_core::{Category, Severity, Slide, SlideId, Warning};
}
