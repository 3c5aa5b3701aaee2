//! Pattern matchers (regex and literal alternation)

use aho_corasick::{AhoCorasick, MatchKind};
use copyguard_core::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Source form of a rule's pattern
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulePattern {
    /// Regular expression: alternation, optional segments, lazy wildcard
    /// gaps (`.*?`, which never crosses a newline) and anchors
    Regex(String),

    /// Literal phrases, matched as a leftmost-first alternation
    Literals(Vec<String>),
}

/// A single match of a pattern inside a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan<'t> {
    /// Byte offset where the match starts
    pub start: usize,

    /// Byte offset one past the end of the match
    pub end: usize,

    /// The matched substring
    pub text: &'t str,
}

/// Compiled pattern.
///
/// Both forms are case-sensitive and report non-overlapping matches from
/// left to right.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Compiled regular expression
    Regex(Regex),
    /// Aho-Corasick automaton over the literal phrases
    Literals(AhoCorasick),
}

impl Matcher {
    /// Compile a pattern.
    ///
    /// Patterns that can match the empty string are rejected: they would
    /// flag every slide, including empty ones.
    pub fn compile(pattern: &RulePattern) -> Result<Self> {
        match pattern {
            RulePattern::Regex(source) => {
                let regex = Regex::new(source).map_err(|e| {
                    Error::rule(format!("failed to compile regex '{}': {}", source, e))
                })?;
                if regex.is_match("") {
                    return Err(Error::rule(format!(
                        "regex '{}' matches the empty string",
                        source
                    )));
                }
                Ok(Self::Regex(regex))
            }
            RulePattern::Literals(literals) => {
                if literals.is_empty() {
                    return Err(Error::rule("literal list is empty"));
                }
                if literals.iter().any(|l| l.is_empty()) {
                    return Err(Error::rule("literal list contains an empty phrase"));
                }
                let automaton = AhoCorasick::builder()
                    .match_kind(MatchKind::LeftmostFirst)
                    .build(literals)
                    .map_err(|e| {
                        Error::rule(format!("failed to build literal matcher: {}", e))
                    })?;
                Ok(Self::Literals(automaton))
            }
        }
    }

    /// Find every non-overlapping match in `text`, left to right
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<MatchSpan<'t>> {
        match self {
            Self::Regex(regex) => regex
                .find_iter(text)
                .map(|m| MatchSpan {
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str(),
                })
                .collect(),
            Self::Literals(automaton) => automaton
                .find_iter(text)
                .map(|m| MatchSpan {
                    start: m.start(),
                    end: m.end(),
                    text: &text[m.start()..m.end()],
                })
                .collect(),
        }
    }

    /// Whether `text` contains at least one match
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Regex(regex) => regex.is_match(text),
            Self::Literals(automaton) => automaton.is_match(text),
        }
    }
}
