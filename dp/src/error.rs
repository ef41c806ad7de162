//! Error types for prompt generation

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while generating validation prompts
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("Context document '{name}' is missing or empty: {path}")]
    ContextMissing { name: String, path: PathBuf },

    #[error("Failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write prompt to {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Template error: {0}")]
    Template(String),

    #[error("Config error in {path}: {message}")]
    Config { path: PathBuf, message: String },
}

impl From<handlebars::TemplateError> for PromptError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Template(err.to_string())
    }
}

impl From<handlebars::RenderError> for PromptError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::Template(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_missing_message() {
        let err = PromptError::ContextMissing {
            name: "persona".to_string(),
            path: PathBuf::from("/opt/personas/validator.md"),
        };

        let msg = err.to_string();
        assert!(msg.contains("persona"));
        assert!(msg.contains("/opt/personas/validator.md"));
    }

    #[test]
    fn test_write_error_keeps_source() {
        use std::error::Error as _;

        let err = PromptError::Write {
            path: PathBuf::from("out/validate_a.md_0.txt"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.to_string().contains("validate_a.md_0.txt"));
        assert!(err.source().is_some());
    }
}
