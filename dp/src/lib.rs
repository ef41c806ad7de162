//! DocPrompt - validation prompt generator for documentation trees
//!
//! Walks a docs tree and, for every Markdown file, writes a text prompt that
//! combines a persona, a rule set and the file's content. The prompts are meant
//! to be pasted into an LLM chat by hand; nothing here calls a model.
//!
//! # Pipeline
//!
//! ```text
//! context::ContextDocuments::load   (once)
//!   -> scanner::MarkdownScanner      (lazy walk, `.md` suffix)
//!   -> prompts::PromptComposer       (per file)
//!   -> writer::PromptWriter          (validate_<name>_<n>.txt)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use docprompt::{Config, Runner};
//!
//! let summary = Runner::from_config(&Config::default())?.run()?;
//! println!("{} prompts", summary.generated);
//! ```

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod prompts;
pub mod runner;
pub mod scanner;
pub mod writer;

pub use config::Config;
pub use context::{ContextDocuments, load_document};
pub use error::PromptError;
pub use prompts::{PromptComposer, PromptContext};
pub use runner::{RunState, RunSummary, Runner};
pub use scanner::MarkdownScanner;
pub use writer::{PromptWriter, output_file_name};

/// Default root directory to scan
pub const DEFAULT_SCAN_DIR: &str = "docs";

/// Default output directory
pub const DEFAULT_OUTPUT_DIR: &str = "prompts_out";

/// Suffix selecting Markdown files (case-sensitive)
pub const MARKDOWN_SUFFIX: &str = ".md";
