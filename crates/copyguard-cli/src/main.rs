//! CopyGuard CLI
//!
//! Screens generated or rewritten short-form video scripts for phrasing
//! regulated under advertising law, and reports each hit with a remediation
//! suggestion.
//!
//! Reports go to stdout; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use copyguard_rules::ComplianceScanner;
use std::io::Write;
use std::process::ExitCode;
use tracing::info;

mod cli;
mod commands;
mod config;
mod report;

use cli::{Cli, Commands};
use config::ScreenConfig;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing
    init_tracing(cli.verbose, cli.log_json);

    run(cli, &mut std::io::stdout().lock())
}

/// Dispatch a parsed command line, writing reports to `out`.
///
/// The config file is only read by commands that use it, so a broken
/// `copyguard.yaml` never stops `check`.
fn run<W: Write>(cli: Cli, out: &mut W) -> Result<ExitCode> {
    match cli.command {
        Commands::Scan {
            input,
            rules,
            format,
            fail_on,
            max_text_chars,
        } => {
            let mut config = ScreenConfig::load(cli.config.as_deref())?;
            config.apply_rule_args(&rules);
            if let Some(format) = format {
                config.format = format;
            }
            if fail_on.is_some() {
                config.fail_on = fail_on;
            }
            if let Some(max) = max_text_chars {
                config.max_text_chars = max;
            }

            // Rule sets are built once; a broken rule stops here
            let scanner = ComplianceScanner::new(config.build_rule_set()?);
            info!(
                rule_set = %scanner.rules().name(),
                rules = scanner.rules().len(),
                "Scanner ready"
            );

            let raw = commands::read_input(&input)?;
            let warnings = commands::scan(&config, &scanner, &raw, out)?;

            if commands::exceeds_threshold(&config, &warnings) {
                return Ok(ExitCode::from(commands::EXIT_FLAGGED));
            }
            Ok(ExitCode::SUCCESS)
        }

        Commands::Rules { rules, format } => {
            let mut config = ScreenConfig::load(cli.config.as_deref())?;
            config.apply_rule_args(&rules);
            let format = format.unwrap_or(config.format);
            commands::rules(&config, format, out)?;
            Ok(ExitCode::SUCCESS)
        }

        Commands::Check { packs } => {
            let failed = commands::check(&packs, out)?;
            if failed > 0 {
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Initialize tracing/logging on stderr
fn init_tracing(verbose: bool, json: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("copyguard=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("copyguard=info"))
    };

    let json_layer = json.then(|| fmt::layer().json().with_writer(std::io::stderr));
    let text_layer = (!json).then(|| fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
