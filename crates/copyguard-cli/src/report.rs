//! Rendering of warnings and rule tables

use copyguard_core::{Severity, Warning};
use copyguard_rules::{RulePattern, RuleSet, RuleSpec};
use std::io::Write;

use crate::config::OutputFormat;

/// Write the warnings of one scan
pub fn write_warnings<W: Write>(
    out: &mut W,
    warnings: &[Warning],
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, warnings)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            for warning in warnings {
                writeln!(
                    out,
                    "slide {} [{}] {} ({}): 「{}」",
                    warning.slide_id,
                    warning.severity,
                    warning.category,
                    warning.category.statute(),
                    warning.matched_span
                )?;
                writeln!(out, "  text: {}", warning.source_text)?;
                writeln!(out, "  suggestion: {}", warning.suggestion)?;
            }

            let high = warnings
                .iter()
                .filter(|w| w.severity == Severity::High)
                .count();
            writeln!(
                out,
                "{} warning(s): {} high, {} medium",
                warnings.len(),
                high,
                warnings.len() - high
            )?;
        }
    }
    Ok(())
}

/// Write a rule table in emission order
pub fn write_rules<W: Write>(
    out: &mut W,
    rules: &RuleSet,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let specs: Vec<&RuleSpec> = rules.iter().map(|r| r.spec()).collect();
            serde_json::to_writer_pretty(&mut *out, &specs)?;
            writeln!(out)?;
        }
        OutputFormat::Text => {
            writeln!(out, "# {} ({} rules)", rules.name(), rules.len())?;
            for rule in rules {
                let pattern = match rule.pattern() {
                    RulePattern::Regex(source) => format!("regex    {}", source),
                    RulePattern::Literals(phrases) => format!("literals {}", phrases.join(" | ")),
                };
                writeln!(
                    out,
                    "{:<36} {:<6} {:<18} {}",
                    rule.id(),
                    rule.severity().label(),
                    rule.category().label(),
                    pattern
                )?;
            }
        }
    }
    Ok(())
}
