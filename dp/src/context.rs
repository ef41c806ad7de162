//! Context document loading
//!
//! The persona and the domain rules are read once per run. Their default
//! locations are fixed relative to the directory holding the `dp` executable,
//! not the working directory.

use std::fs;
use std::path::{Path, PathBuf};

use colored::*;
use tracing::debug;

use crate::error::PromptError;

/// Persona document, relative to the program directory
pub const PERSONA_RELATIVE_PATH: &str = "../personas/validator.md";

/// Domain 4 rule set, relative to the program directory
pub const RULES_RELATIVE_PATH: &str = "../../../.validation/checks/domain-04-technology.md";

/// Directory containing the running executable
pub fn program_dir() -> PathBuf {
    let dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."));
    debug!(?dir, "program_dir: resolved");
    dir
}

/// Default persona path next to the installed program
pub fn default_persona_path() -> PathBuf {
    program_dir().join(PERSONA_RELATIVE_PATH)
}

/// Default rules path next to the installed program
pub fn default_rules_path() -> PathBuf {
    program_dir().join(RULES_RELATIVE_PATH)
}

/// Read a text document, returning an empty string if it cannot be read.
///
/// The failure is reported on stderr with the offending path; the caller
/// decides whether an empty document is fatal.
pub fn load_document(path: &Path) -> String {
    debug!(?path, "load_document: called");
    match fs::read_to_string(path) {
        Ok(content) => {
            debug!(?path, len = content.len(), "load_document: read ok");
            content
        }
        Err(e) => {
            debug!(?path, error = %e, "load_document: read failed");
            eprintln!("{} Could not read file at {}: {}", "Error:".red(), path.display(), e);
            String::new()
        }
    }
}

/// The two documents every prompt is built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextDocuments {
    /// Role and voice the model should adopt
    pub persona: String,
    /// Compliance criteria to check against
    pub rules: String,
}

impl ContextDocuments {
    /// Load both documents; an empty or unreadable one is an error.
    pub fn load(persona_path: &Path, rules_path: &Path) -> Result<Self, PromptError> {
        debug!(?persona_path, ?rules_path, "ContextDocuments::load: called");
        let persona = load_document(persona_path);
        let rules = load_document(rules_path);

        if persona.is_empty() {
            return Err(PromptError::ContextMissing {
                name: "persona".to_string(),
                path: persona_path.to_path_buf(),
            });
        }
        if rules.is_empty() {
            return Err(PromptError::ContextMissing {
                name: "rules".to_string(),
                path: rules_path.to_path_buf(),
            });
        }

        Ok(Self { persona, rules })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_document_reads_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("persona.md");
        fs::write(&path, "Vous êtes un relecteur.").unwrap();

        assert_eq!(load_document(&path), "Vous êtes un relecteur.");
    }

    #[test]
    fn test_load_document_missing_is_empty() {
        let temp = TempDir::new().unwrap();
        assert_eq!(load_document(&temp.path().join("nope.md")), "");
    }

    #[test]
    fn test_context_documents_load() {
        let temp = TempDir::new().unwrap();
        let persona = temp.path().join("validator.md");
        let rules = temp.path().join("domain-04.md");
        fs::write(&persona, "PERSONA").unwrap();
        fs::write(&rules, "RULES").unwrap();

        let docs = ContextDocuments::load(&persona, &rules).unwrap();
        assert_eq!(docs.persona, "PERSONA");
        assert_eq!(docs.rules, "RULES");
    }

    #[test]
    fn test_context_documents_missing_persona() {
        let temp = TempDir::new().unwrap();
        let rules = temp.path().join("domain-04.md");
        fs::write(&rules, "RULES").unwrap();

        let err = ContextDocuments::load(&temp.path().join("missing.md"), &rules).unwrap_err();
        assert!(matches!(err, PromptError::ContextMissing { ref name, .. } if name == "persona"));
    }

    #[test]
    fn test_context_documents_empty_rules() {
        let temp = TempDir::new().unwrap();
        let persona = temp.path().join("validator.md");
        let rules = temp.path().join("domain-04.md");
        fs::write(&persona, "PERSONA").unwrap();
        fs::write(&rules, "").unwrap();

        let err = ContextDocuments::load(&persona, &rules).unwrap_err();
        assert!(matches!(err, PromptError::ContextMissing { ref name, .. } if name == "rules"));
    }

    #[test]
    fn test_default_paths_are_relative_to_program() {
        let dir = program_dir();
        assert!(default_persona_path().starts_with(&dir));
        assert!(default_rules_path().ends_with(".validation/checks/domain-04-technology.md"));
    }
}
