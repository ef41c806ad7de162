//! CLI argument parsing for docprompt

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "dp")]
#[command(
    author,
    version,
    about = "Generate LLM validation prompts for every Markdown file in a docs tree",
    long_about = None
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,

    /// Root directory to scan (default: docs)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Output directory for generated prompts (default: prompts_out)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Persona document (default: ../personas/validator.md next to the program)
    #[arg(long)]
    pub persona: Option<PathBuf>,

    /// Rules document (default: ../../../.validation/checks/domain-04-technology.md next to the program)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Send prompts to the model API directly (not implemented)
    #[arg(long)]
    pub api: bool,
}

impl Cli {
    /// Apply command-line overrides on top of the loaded config
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(dir) = &self.dir {
            config.scan_dir = dir.clone();
        }
        if let Some(output) = &self.output {
            config.output_dir = output.clone();
        }
        if let Some(persona) = &self.persona {
            config.persona_path = Some(persona.clone());
        }
        if let Some(rules) = &self.rules {
            config.rules_path = Some(rules.clone());
        }
        if let Some(level) = &self.log_level {
            config.log_level = Some(level.clone());
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_leave_config_untouched() {
        let cli = Cli::parse_from(["dp"]);
        assert!(!cli.api);
        assert_eq!(cli.apply(Config::default()), Config::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::parse_from([
            "dp",
            "--dir",
            "handbook",
            "--output",
            "out/prompts",
            "--persona",
            "p.md",
            "--rules",
            "r.md",
            "--api",
        ]);
        assert!(cli.api);

        let config = cli.apply(Config::default());
        assert_eq!(config.scan_dir, PathBuf::from("handbook"));
        assert_eq!(config.output_dir, PathBuf::from("out/prompts"));
        assert_eq!(config.persona_path, Some(PathBuf::from("p.md")));
        assert_eq!(config.rules_path, Some(PathBuf::from("r.md")));
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["dp", "docs"]).is_err());
    }
}
