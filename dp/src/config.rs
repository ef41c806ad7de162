//! Configuration for docprompt

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::PromptError;

/// Config file name looked up in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "docprompt.yml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root directory to scan, relative to the working directory
    #[serde(rename = "scan-dir")]
    pub scan_dir: PathBuf,

    /// Directory receiving the generated prompts
    #[serde(rename = "output-dir")]
    pub output_dir: PathBuf,

    /// Persona document (defaults to a path next to the program)
    #[serde(rename = "persona-path", skip_serializing_if = "Option::is_none")]
    pub persona_path: Option<PathBuf>,

    /// Rules document (defaults to a path next to the program)
    #[serde(rename = "rules-path", skip_serializing_if = "Option::is_none")]
    pub rules_path: Option<PathBuf>,

    /// File name suffix selecting which files get a prompt
    pub suffix: String,

    /// Replacement for the embedded prompt template
    #[serde(rename = "template-path", skip_serializing_if = "Option::is_none")]
    pub template_path: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level", skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scan_dir: PathBuf::from(crate::DEFAULT_SCAN_DIR),
            output_dir: PathBuf::from(crate::DEFAULT_OUTPUT_DIR),
            persona_path: None,
            rules_path: None,
            suffix: crate::MARKDOWN_SUFFIX.to_string(),
            template_path: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Load config with fallback chain
    ///
    /// An explicit path must load. Implicit locations (`./docprompt.yml`, then
    /// `~/.config/docprompt/docprompt.yml`) are skipped with a warning when broken.
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self, PromptError> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let default_paths = [
            Some(PathBuf::from(CONFIG_FILE_NAME)),
            dirs::config_dir().map(|p| p.join("docprompt").join(CONFIG_FILE_NAME)),
        ];

        for path in default_paths.iter().flatten() {
            if path.exists() {
                match Self::load_from_file(path) {
                    Ok(config) => return Ok(config),
                    Err(e) => tracing::warn!("{}", e),
                }
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Read just the log level, ignoring any error
    ///
    /// Used before logging is initialised.
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        Self::load(config_path).ok().and_then(|c| c.log_level)
    }

    fn load_from_file(path: &Path) -> Result<Self, PromptError> {
        let content = fs::read_to_string(path).map_err(|e| PromptError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config: Self = serde_yaml::from_str(&content).map_err(|e| PromptError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Persona path, falling back to the location next to the program
    pub fn persona_path(&self) -> PathBuf {
        self.persona_path
            .clone()
            .unwrap_or_else(crate::context::default_persona_path)
    }

    /// Rules path, falling back to the location next to the program
    pub fn rules_path(&self) -> PathBuf {
        self.rules_path.clone().unwrap_or_else(crate::context::default_rules_path)
    }
}
