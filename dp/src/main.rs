//! DocPrompt - validation prompt generator
//!
//! CLI entry point: load config, run the pipeline, report the outcome.

use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::{debug, info};

use docprompt::cli::Cli;
use docprompt::config::Config;
use docprompt::runner::{RunState, Runner};

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Priority: CLI --log-level > config file > default (WARN)
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") | None => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to WARN", other);
            tracing::Level::WARN
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .try_init()
        .map_err(|e| eyre::eyre!("{}", e))?;

    debug!("Logging initialized (level: {:?})", level);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log level is needed before the full config load can report anything
    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    let config = cli.apply(config);
    info!(scan_dir = ?config.scan_dir, output_dir = ?config.output_dir, "docprompt starting");

    if cli.api {
        println!(
            "{} --api is not implemented; writing prompts for manual submission",
            "Note:".yellow()
        );
    }

    let runner = Runner::from_config(&config).context("Failed to prepare prompt template")?;
    let summary = runner.run().context("Prompt generation failed")?;

    match summary.state {
        RunState::Done => {
            println!(
                "{} Generated {} prompts in {}",
                "✓".green(),
                summary.generated,
                runner.output_dir().display().to_string().cyan()
            );
            Ok(())
        }
        _ => {
            eprintln!(
                "{} Persona or rules document missing; no prompts generated",
                "Aborted:".red()
            );
            std::process::exit(1);
        }
    }
}
