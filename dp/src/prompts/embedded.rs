//! Embedded prompts
//!
//! These are compiled into the binary from .pmt files at build time.

use tracing::debug;

/// Validation report prompt
pub const VALIDATE: &str = include_str!("../../prompts/validate.pmt");

/// Get the embedded prompt by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    debug!(%name, "get_embedded: called");
    match name {
        "validate" => Some(VALIDATE),
        _ => {
            debug!("get_embedded: no match found");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_embedded_validate() {
        let validate = get_embedded("validate").unwrap();
        assert!(validate.contains("# INSTRUCTIONS"));
        assert!(validate.contains("## RULES TO APPLY"));
        assert!(validate.contains("## CONTENT TO CHECK"));
        assert!(validate.contains("## YOUR TASK"));
        assert!(validate.contains("{{content}}"));
    }

    #[test]
    fn test_get_embedded_unknown() {
        assert!(get_embedded("unknown-template").is_none());
    }
}
