//! Run orchestration
//!
//! One run is `LoadingContext -> (Aborted | Scanning) -> Done`. Context is
//! loaded once; every matched file is then composed and written in scan order,
//! one at a time, with a counter that keeps output names unique.

use std::path::{Path, PathBuf};

use colored::*;
use tracing::{debug, info};

use crate::config::Config;
use crate::context::{ContextDocuments, load_document};
use crate::error::PromptError;
use crate::prompts::PromptComposer;
use crate::scanner::MarkdownScanner;
use crate::writer::PromptWriter;

/// Phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    LoadingContext,
    Aborted,
    Scanning,
    Done,
}

impl RunState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Aborted | Self::Done)
    }
}

/// Outcome of a finished run
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Terminal state reached
    pub state: RunState,
    /// Number of prompts written
    pub generated: usize,
}

impl RunSummary {
    fn aborted() -> Self {
        Self {
            state: RunState::Aborted,
            generated: 0,
        }
    }
}

/// Drives a single prompt generation run
pub struct Runner {
    scan_dir: PathBuf,
    suffix: String,
    persona_path: PathBuf,
    rules_path: PathBuf,
    composer: PromptComposer,
    writer: PromptWriter,
}

impl Runner {
    /// Build a runner from resolved configuration
    pub fn from_config(config: &Config) -> Result<Self, PromptError> {
        debug!(?config, "Runner::from_config: called");
        let composer = match &config.template_path {
            Some(path) => PromptComposer::from_file(path)?,
            None => PromptComposer::embedded()?,
        };

        Ok(Self {
            scan_dir: config.scan_dir.clone(),
            suffix: config.suffix.clone(),
            persona_path: config.persona_path(),
            rules_path: config.rules_path(),
            composer,
            writer: PromptWriter::new(&config.output_dir),
        })
    }

    pub fn output_dir(&self) -> &Path {
        self.writer.output_dir()
    }

    /// Execute the run to a terminal state.
    ///
    /// Missing context ends in `Aborted` with nothing written. A write failure
    /// is returned as an error and stops the run.
    pub fn run(&self) -> Result<RunSummary, PromptError> {
        let mut state = RunState::LoadingContext;
        debug!(?state, "Runner::run: loading context");

        let context = match ContextDocuments::load(&self.persona_path, &self.rules_path) {
            Ok(context) => context,
            Err(e @ PromptError::ContextMissing { .. }) => {
                state = RunState::Aborted;
                info!(?state, error = %e, "Runner::run: aborting");
                return Ok(RunSummary::aborted());
            }
            Err(e) => return Err(e),
        };

        state = RunState::Scanning;
        debug!(?state, scan_dir = ?self.scan_dir, "Runner::run: scanning");
        println!("Scanning {}...", self.scan_dir.display());
        self.writer.ensure_dir()?;

        let mut generated = 0;
        for (index, path) in MarkdownScanner::new(&self.scan_dir, self.suffix.as_str()).enumerate() {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default();

            // Unreadable files still get a prompt, with empty content
            let content = load_document(&path);
            if content.is_empty() {
                debug!(?path, "Runner::run: composing with empty content");
            }

            let prompt = self
                .composer
                .compose(&content, &file_name, &context.persona, &context.rules)?;
            let written = self.writer.write(&file_name, index, &prompt)?;
            println!("  {} {}", "→".cyan(), written.display());
            generated += 1;
        }

        state = RunState::Done;
        info!(?state, generated, "Runner::run: complete");
        Ok(RunSummary { state, generated })
    }
}
