//! Compiled, immutable rule sets

use copyguard_core::{Category, Error, Result};
use std::collections::HashSet;
use tracing::{debug, info};

use crate::pack::RulePack;
use crate::rule::{Rule, RuleSpec};
use crate::table::{builtin_specs, BUILTIN_NAME};

/// An ordered, validated set of rules.
///
/// Rules are grouped by category (efficacy before misleading claims) and
/// keep their declaration order within a category. A rule set is never
/// mutated after construction.
#[derive(Debug, Clone)]
pub struct RuleSet {
    name: String,
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Compile the built-in Japanese advertising table
    pub fn builtin() -> Result<Self> {
        Self::from_specs(BUILTIN_NAME, builtin_specs())
    }

    /// Compile the rules of a single pack
    pub fn from_pack(pack: &RulePack) -> Result<Self> {
        Self::from_specs(pack.name.clone(), pack.rules.iter().cloned())
    }

    /// Compile a rule set from declarative specs.
    ///
    /// Disabled rules are skipped. Any rule that fails to compile, a
    /// duplicate id, or an empty result fails the whole set.
    pub fn from_specs(
        name: impl Into<String>,
        specs: impl IntoIterator<Item = RuleSpec>,
    ) -> Result<Self> {
        let name = name.into();
        let mut seen = HashSet::new();
        let mut rules = Vec::new();

        for spec in specs {
            if !spec.enabled {
                debug!(rule = %spec.id, "Skipping disabled rule");
                continue;
            }
            if !seen.insert(spec.id.clone()) {
                return Err(Error::rule(format!("duplicate rule id '{}'", spec.id)));
            }
            rules.push(Rule::compile(spec)?);
        }

        if rules.is_empty() {
            return Err(Error::config(format!("rule set '{}' has no enabled rules", name)));
        }

        // Stable: declaration order survives within each category
        rules.sort_by_key(Rule::category);

        info!(
            rule_set = %name,
            rules = rules.len(),
            efficacy = rules.iter().filter(|r| r.category() == Category::RegulatedEfficacy).count(),
            misleading = rules.iter().filter(|r| r.category() == Category::MisleadingClaim).count(),
            "Compiled rule set"
        );

        Ok(Self { name, rules })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rules in emission order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Look up a rule by id
    pub fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id() == id)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Builder combining the built-in table with rule packs
#[derive(Debug, Clone)]
pub struct RuleSetBuilder {
    include_builtin: bool,
    packs: Vec<RulePack>,
}

impl RuleSetBuilder {
    /// Start from the built-in table
    pub fn new() -> Self {
        Self {
            include_builtin: true,
            packs: Vec::new(),
        }
    }

    /// Whether to include the built-in table
    pub fn include_builtin(mut self, include: bool) -> Self {
        self.include_builtin = include;
        self
    }

    /// Append a rule pack after the rules added so far
    pub fn pack(mut self, pack: RulePack) -> Self {
        self.packs.push(pack);
        self
    }

    /// Compile the combined rule set
    pub fn build(self) -> Result<RuleSet> {
        let mut names = Vec::new();
        let mut specs = Vec::new();

        if self.include_builtin {
            names.push(BUILTIN_NAME.to_string());
            specs.extend(builtin_specs());
        }
        for pack in self.packs {
            names.push(pack.name);
            specs.extend(pack.rules);
        }

        if names.is_empty() {
            return Err(Error::config(
                "no rules configured: the built-in table is disabled and no rule packs were given",
            ));
        }

        RuleSet::from_specs(names.join("+"), specs)
    }
}

impl Default for RuleSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::RulePattern;
    use copyguard_core::Severity;

    fn spec(id: &str, category: Category, regex: &str) -> RuleSpec {
        RuleSpec {
            id: id.to_string(),
            category,
            severity: Severity::Medium,
            pattern: RulePattern::Regex(regex.to_string()),
            suggestion: "確認してください".to_string(),
            example: None,
            enabled: true,
        }
    }

    #[test]
    fn test_builtin_compiles() {
        let rules = RuleSet::builtin().unwrap();
        assert_eq!(rules.name(), "ja-advertising");
        assert_eq!(rules.len(), 31);
        assert!(rules.get("efficacy.weight_loss").is_some());
    }

    #[test]
    fn test_rules_grouped_by_category_in_declaration_order() {
        let rules = RuleSet::from_specs(
            "mixed",
            vec![
                spec("b1", Category::MisleadingClaim, "安い"),
                spec("a1", Category::RegulatedEfficacy, "治る"),
                spec("b2", Category::MisleadingClaim, "最安"),
                spec("a2", Category::RegulatedEfficacy, "効く"),
            ],
        )
        .unwrap();

        let ids: Vec<_> = rules.iter().map(Rule::id).collect();
        assert_eq!(ids, vec!["a1", "a2", "b1", "b2"]);
    }

    #[test]
    fn test_duplicate_id_fails() {
        let err = RuleSet::from_specs(
            "dup",
            vec![
                spec("x", Category::MisleadingClaim, "安い"),
                spec("x", Category::MisleadingClaim, "最安"),
            ],
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate rule id 'x'"));
    }

    #[test]
    fn test_broken_rule_fails_whole_set() {
        let result = RuleSet::from_specs(
            "broken",
            vec![
                spec("ok", Category::MisleadingClaim, "安い"),
                spec("bad", Category::MisleadingClaim, "[unclosed"),
            ],
        );
        assert!(matches!(result, Err(Error::Rule(_))));
    }

    #[test]
    fn test_disabled_rules_are_skipped() {
        let mut disabled = spec("off", Category::MisleadingClaim, "安い");
        disabled.enabled = false;
        let rules = RuleSet::from_specs(
            "partial",
            vec![disabled, spec("on", Category::MisleadingClaim, "最安")],
        )
        .unwrap();
        assert_eq!(rules.len(), 1);
        assert!(rules.get("off").is_none());
    }

    #[test]
    fn test_empty_set_fails() {
        assert!(matches!(
            RuleSet::from_specs("empty", Vec::new()),
            Err(Error::Config(_))
        ));
        assert!(RuleSetBuilder::new().include_builtin(false).build().is_err());
    }

    #[test]
    fn test_builder_appends_pack_after_builtin() {
        let pack = RulePack {
            name: "extra".to_string(),
            description: String::new(),
            version: String::new(),
            rules: vec![
                spec("extra.cheap", Category::MisleadingClaim, "最安値"),
                spec("extra.burn", Category::RegulatedEfficacy, "脂肪燃焼"),
            ],
        };

        let rules = RuleSetBuilder::new().pack(pack).build().unwrap();
        assert_eq!(rules.name(), "ja-advertising+extra");
        assert_eq!(rules.len(), 33);

        let ids: Vec<_> = rules.iter().map(Rule::id).collect();
        let burn = ids.iter().position(|id| *id == "extra.burn").unwrap();
        let cheap = ids.iter().position(|id| *id == "extra.cheap").unwrap();
        let first_misleading = ids.iter().position(|id| id.starts_with("misleading.")).unwrap();
        assert!(burn < first_misleading);
        assert_eq!(cheap, ids.len() - 1);
    }

    #[test]
    fn test_builder_rejects_id_clash_with_builtin() {
        let pack = RulePack {
            name: "clash".to_string(),
            description: String::new(),
            version: String::new(),
            rules: vec![spec("misleading.first", Category::MisleadingClaim, "初")],
        };
        assert!(RuleSetBuilder::new().pack(pack).build().is_err());
    }

    #[test]
    fn test_from_pack_alone() {
        let mut retired = spec("retired.cheap", Category::MisleadingClaim, "激安");
        retired.enabled = false;
        let pack = RulePack {
            name: "standalone".to_string(),
            description: String::new(),
            version: "2".to_string(),
            rules: vec![
                spec("standalone.cheap", Category::MisleadingClaim, "最安値"),
                retired,
                spec("standalone.burn", Category::RegulatedEfficacy, "脂肪燃焼"),
            ],
        };

        let rules = RuleSet::from_pack(&pack).unwrap();
        assert_eq!(rules.name(), "standalone");
        assert_eq!(rules.len(), 2);
        assert!(rules.get("retired.cheap").is_none());
        assert!(rules.get("efficacy.cure").is_none());

        let ids: Vec<_> = rules.iter().map(Rule::id).collect();
        assert_eq!(ids, vec!["standalone.burn", "standalone.cheap"]);
    }
}
