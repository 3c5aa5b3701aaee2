use clap::{Args, Parser, Subcommand};
use copyguard_core::Severity;
use std::path::PathBuf;

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "copyguard")]
#[command(
    author,
    version,
    about = "Screen short-form advertising scripts for regulated phrasing"
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (defaults to ./copyguard.yaml when present)
    #[arg(short, long, global = true, env = "COPYGUARD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a slide batch and report warnings
    Scan {
        /// JSON file with slides, or `-` for stdin
        #[arg(short, long, default_value = "-")]
        input: String,

        #[command(flatten)]
        rules: RuleArgs,

        /// Output format: text or json
        #[arg(short, long, value_parser = parse_format)]
        format: Option<OutputFormat>,

        /// Exit with status 2 when a warning at or above this severity is found
        #[arg(long, value_parser = parse_severity)]
        fail_on: Option<Severity>,

        /// Reject slides longer than this many characters
        #[arg(long)]
        max_text_chars: Option<usize>,
    },

    /// List the effective rule table in emission order
    Rules {
        #[command(flatten)]
        rules: RuleArgs,

        /// Output format: text or json
        #[arg(short, long, value_parser = parse_format)]
        format: Option<OutputFormat>,
    },

    /// Validate rule packs without scanning anything
    Check {
        /// Rule pack files
        #[arg(required = true)]
        packs: Vec<PathBuf>,
    },
}

/// Rule selection shared by `scan` and `rules`
#[derive(Args, Debug, Clone, Default)]
pub struct RuleArgs {
    /// Additional rule pack (repeatable)
    #[arg(short = 'r', long = "rules")]
    pub packs: Vec<PathBuf>,

    /// Do not include the built-in rule table
    #[arg(long)]
    pub no_builtin: bool,
}

fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: copyguard_core::Error| e.to_string())
}

fn parse_severity(s: &str) -> Result<Severity, String> {
    s.parse().map_err(|e: copyguard_core::Error| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_scan_command() {
        let cli = Cli::try_parse_from([
            "copyguard",
            "scan",
            "--input",
            "slides.json",
            "-r",
            "extra.yaml",
            "--fail-on",
            "high",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Scan {
                input,
                rules,
                format,
                fail_on,
                max_text_chars,
            } => {
                assert_eq!(input, "slides.json");
                assert_eq!(rules.packs, vec![PathBuf::from("extra.yaml")]);
                assert!(!rules.no_builtin);
                assert_eq!(format, Some(OutputFormat::Json));
                assert_eq!(fail_on, Some(Severity::High));
                assert_eq!(max_text_chars, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_severity() {
        assert!(Cli::try_parse_from(["copyguard", "scan", "--fail-on", "low"]).is_err());
    }

    #[test]
    fn test_check_requires_packs() {
        assert!(Cli::try_parse_from(["copyguard", "check"]).is_err());
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
