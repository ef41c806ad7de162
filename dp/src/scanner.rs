//! Recursive discovery of Markdown files

use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

/// Lazily walks a directory tree, yielding every file whose name ends with `suffix`.
///
/// Single use: once exhausted, create a new scanner to walk again. A root that
/// does not exist, or is not a directory, yields nothing.
pub struct MarkdownScanner {
    walker: walkdir::IntoIter,
    suffix: String,
}

impl MarkdownScanner {
    /// Scan `root` for files ending with `suffix` (case-sensitive)
    pub fn new(root: impl AsRef<Path>, suffix: impl Into<String>) -> Self {
        let root = root.as_ref();
        let suffix = suffix.into();
        debug!(?root, %suffix, "MarkdownScanner::new: called");
        Self {
            // Depth 0 is the root itself; a file root yields nothing
            walker: WalkDir::new(root).min_depth(1).into_iter(),
            suffix,
        }
    }

    fn matches(&self, entry: &walkdir::DirEntry) -> bool {
        if entry.file_type().is_dir() {
            return false;
        }
        // Symlinked directories are listed but not descended into
        if entry.path_is_symlink() && entry.path().is_dir() {
            return false;
        }
        entry
            .file_name()
            .as_encoded_bytes()
            .ends_with(self.suffix.as_bytes())
    }
}

impl Iterator for MarkdownScanner {
    type Item = PathBuf;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                Err(e) => {
                    debug!(error = %e, "MarkdownScanner::next: skipping unreadable entry");
                    continue;
                }
            };
            if self.matches(&entry) {
                debug!(path = ?entry.path(), "MarkdownScanner::next: matched");
                return Some(entry.into_path());
            }
        }
    }
}
