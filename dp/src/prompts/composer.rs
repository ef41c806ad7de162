//! Prompt Composer
//!
//! Combines one file's content with the persona and rules into the text of a
//! validation prompt.

use std::path::Path;

use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, info};

use super::embedded;
use crate::error::PromptError;

const TEMPLATE_NAME: &str = "validate";

/// Values available to the validation template
#[derive(Debug, Clone, Serialize)]
pub struct PromptContext<'a> {
    /// Persona text, placed first
    pub persona: &'a str,
    /// Base name of the file under check
    pub file_name: &'a str,
    /// Rule text to apply
    pub rules: &'a str,
    /// Raw file content, placed inside the fenced block
    pub content: &'a str,
}

/// Renders validation prompts from a compiled template
pub struct PromptComposer {
    hbs: Handlebars<'static>,
}

impl PromptComposer {
    /// Composer backed by the embedded `validate.pmt`
    pub fn embedded() -> Result<Self, PromptError> {
        debug!("PromptComposer::embedded: called");
        let template = embedded::get_embedded(TEMPLATE_NAME)
            .ok_or_else(|| PromptError::Template(format!("Prompt template not found: {}", TEMPLATE_NAME)))?;
        Self::from_template(template)
    }

    /// Composer backed by a `.pmt` file on disk
    pub fn from_file(path: &Path) -> Result<Self, PromptError> {
        debug!(?path, "PromptComposer::from_file: called");
        let template = std::fs::read_to_string(path)
            .map_err(|e| PromptError::Template(format!("Failed to read template {}: {}", path.display(), e)))?;
        info!("Using prompt template from {}", path.display());
        Self::from_template(&template)
    }

    /// Composer backed by the given template source
    pub fn from_template(template: &str) -> Result<Self, PromptError> {
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);
        hbs.register_template_string(TEMPLATE_NAME, template)?;
        Ok(Self { hbs })
    }

    /// Build the prompt for one file.
    ///
    /// Deterministic: identical arguments always produce identical output.
    /// Nothing is escaped, so delimiter-like text in `content` passes through.
    pub fn compose(&self, content: &str, file_name: &str, persona: &str, rules: &str) -> Result<String, PromptError> {
        debug!(%file_name, content_len = content.len(), "PromptComposer::compose: called");
        let context = PromptContext {
            persona,
            file_name,
            rules,
            content,
        };
        Ok(self.hbs.render(TEMPLATE_NAME, &context)?)
    }
}
