//! Prompt Template System
//!
//! Renders the validation prompt for one Markdown file from a `.pmt`
//! (prompt template) file.
//!
//! Template loading chain:
//! 1. `template-path` from config (user override)
//! 2. Embedded fallback in code
//!
//! Templates use Handlebars syntax for variable substitution. Escaping is
//! disabled, so every value is inserted exactly as given.

pub mod embedded;
mod composer;

pub use composer::{PromptComposer, PromptContext};
