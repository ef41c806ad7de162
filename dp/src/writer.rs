//! Output writer for generated prompts

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::PromptError;

/// Name of the prompt file for the `index`-th processed file
pub fn output_file_name(file_name: &str, index: usize) -> String {
    format!("validate_{}_{}.txt", file_name, index)
}

/// Writes prompts into a single output directory
#[derive(Debug, Clone)]
pub struct PromptWriter {
    output_dir: PathBuf,
}

impl PromptWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Create the output directory and any missing parents. Idempotent.
    pub fn ensure_dir(&self) -> Result<(), PromptError> {
        debug!(output_dir = ?self.output_dir, "PromptWriter::ensure_dir: called");
        fs::create_dir_all(&self.output_dir).map_err(|source| PromptError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })
    }

    /// Write `prompt` to `validate_<file_name>_<index>.txt`, replacing any existing file.
    pub fn write(&self, file_name: &str, index: usize, prompt: &str) -> Result<PathBuf, PromptError> {
        self.ensure_dir()?;
        let path = self.output_dir.join(output_file_name(file_name, index));
        debug!(?path, len = prompt.len(), "PromptWriter::write: writing prompt");
        fs::write(&path, prompt).map_err(|source| PromptError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
}
