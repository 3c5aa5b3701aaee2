//! Subcommand implementations

use anyhow::Context;
use copyguard_core::{slides_from_str, Error, Slide, Warning};
use copyguard_rules::{ComplianceScanner, RulePack};
use std::io::{Read, Write};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::{OutputFormat, ScreenConfig};
use crate::report;

/// Exit status when `--fail-on` is triggered
pub const EXIT_FLAGGED: u8 = 2;

/// Read the raw slide batch from a file or stdin (`-`)
pub fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read slides from stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("failed to read slides from {}", input))
    }
}

/// Reject the batch if any slide exceeds the configured length
pub fn enforce_length(slides: &[Slide], max_chars: usize) -> copyguard_core::Result<()> {
    for slide in slides {
        let chars = slide.text.chars().count();
        if chars > max_chars {
            return Err(Error::input(format!(
                "slide {} has {} characters, over the limit of {}",
                slide.id, chars, max_chars
            )));
        }
    }
    Ok(())
}

/// Decode, screen, and report one slide batch.
///
/// Returns the warnings so the caller can decide on the exit status.
pub fn scan<W: Write>(
    config: &ScreenConfig,
    scanner: &ComplianceScanner,
    raw: &str,
    out: &mut W,
) -> anyhow::Result<Vec<Warning>> {
    let slides = slides_from_str(raw)?;
    enforce_length(&slides, config.max_text_chars)?;

    let warnings = scanner.scan(&slides);
    report::write_warnings(out, &warnings, config.format)?;

    info!(
        slides = slides.len(),
        warnings = warnings.len(),
        "Scan complete"
    );
    Ok(warnings)
}

/// Whether any warning reaches the configured `fail_on` threshold
pub fn exceeds_threshold(config: &ScreenConfig, warnings: &[Warning]) -> bool {
    match config.fail_on {
        Some(threshold) if warnings.iter().any(|w| w.severity >= threshold) => {
            warn!(threshold = %threshold, "Warnings at or above threshold found");
            true
        }
        _ => false,
    }
}

/// List the effective rule table
pub fn rules<W: Write>(
    config: &ScreenConfig,
    format: OutputFormat,
    out: &mut W,
) -> anyhow::Result<()> {
    let rule_set = config.build_rule_set()?;
    report::write_rules(out, &rule_set, format)
}

/// Validate rule packs, writing one line per problem.
///
/// Returns the number of packs that failed.
pub fn check<W: Write>(packs: &[PathBuf], out: &mut W) -> anyhow::Result<usize> {
    let mut failed = 0;

    for path in packs {
        let pack = match RulePack::from_file(path) {
            Ok(pack) => pack,
            Err(e) => {
                writeln!(out, "FAIL {}: {}", path.display(), e)?;
                failed += 1;
                continue;
            }
        };

        let errors = pack.validate();
        if errors.is_empty() {
            writeln!(out, "ok   {} ({} rules)", path.display(), pack.rules.len())?;
        } else {
            failed += 1;
            for e in errors {
                writeln!(out, "FAIL {}: {}", path.display(), e)?;
            }
        }
    }

    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use copyguard_core::Severity;

    fn scanner() -> ComplianceScanner {
        ComplianceScanner::builtin().unwrap()
    }

    #[test]
    fn test_scan_generated_script_record() {
        let raw = r#"{
            "id": "script-1",
            "slides": [
                {"id": 1, "role": "hook", "script": "このお茶を飲めば絶対に痩せます"},
                {"id": 2, "role": "cta", "script": "毎日のリラックスタイムにどうぞ"}
            ]
        }"#;
        let config = ScreenConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };

        let mut out = Vec::new();
        let warnings = scan(&config, &scanner(), raw, &mut out).unwrap();
        assert_eq!(warnings.len(), 1);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["slideId"], 1);
        assert_eq!(value[0]["matchedSpan"], "絶対に痩せます");
        assert_eq!(value[0]["category"], "REGULATED_EFFICACY");
    }

    #[test]
    fn test_malformed_slide_does_not_block_batch() {
        let raw = r#"[{"id": 1, "text": null}, {"id": 2, "text": "全品半額"}]"#;
        let mut out: Vec<u8> = Vec::new();
        let warnings = scan(&ScreenConfig::default(), &scanner(), raw, &mut out).unwrap();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].matched_span, "半額");
    }

    #[test]
    fn test_overlong_slide_rejects_batch() {
        let config = ScreenConfig {
            max_text_chars: 5,
            ..Default::default()
        };
        let raw = r#"[{"id": 1, "text": "六文字の文章"}]"#;
        let err = scan(&config, &scanner(), raw, &mut Vec::<u8>::new()).unwrap_err();
        assert!(err.to_string().contains("over the limit of 5"));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        assert!(enforce_length(&[Slide::new(1, "あいうえお")], 5).is_ok());
    }

    #[test]
    fn test_fail_on_thresholds() {
        let raw = r#"[{"id": 1, "text": "全品半額"}]"#;
        let warnings = scan(&ScreenConfig::default(), &scanner(), raw, &mut Vec::<u8>::new()).unwrap();

        let mut config = ScreenConfig::default();
        assert!(!exceeds_threshold(&config, &warnings));

        config.fail_on = Some(Severity::High);
        assert!(!exceeds_threshold(&config, &warnings));

        config.fail_on = Some(Severity::Medium);
        assert!(exceeds_threshold(&config, &warnings));
    }

    #[test]
    fn test_check_reports_each_pack() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("good.yaml");
        std::fs::write(
            &good,
            "name: good\nrules:\n  - id: a\n    category: MISLEADING_CLAIM\n    severity: HIGH\n    regex: 最安値\n    suggestion: 出典を明示\n    example: 業界最安値\n",
        )
        .unwrap();
        let bad = dir.path().join("bad.yaml");
        std::fs::write(
            &bad,
            "name: bad\nrules:\n  - id: b\n    category: MISLEADING_CLAIM\n    severity: HIGH\n    regex: \"(\"\n    suggestion: x\n",
        )
        .unwrap();
        let missing = dir.path().join("missing.yaml");

        let mut out = Vec::new();
        let failed = check(&[good, bad, missing], &mut out).unwrap();
        assert_eq!(failed, 2);

        let text = String::from_utf8(out).unwrap();
        assert!(text.lines().next().unwrap().starts_with("ok   "));
        assert_eq!(text.matches("FAIL").count(), 2);
    }
}
