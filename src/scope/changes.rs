// src/scope/changes.rs

use std::path::Path;

use tracing::debug;

use crate::errors::{PresubmitError, Result};
use crate::fs::FileSystem;

/// Changed paths in the order they appear in the change-list file.
pub type ChangeList = Vec<String>;

/// Read the change list at `path`: one absolute path per line.
///
/// Lines are kept verbatim apart from their terminator; a path with stray
/// whitespace is not cleaned up. Any failure to read the file is reported as
/// [`PresubmitError::InputUnreadable`].
pub fn load_changed_paths(fs: &dyn FileSystem, path: &Path) -> Result<ChangeList> {
    let bytes = fs.read(path).map_err(|source| PresubmitError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let contents = String::from_utf8_lossy(&bytes);
    let changes = split_lines(&contents);
    debug!(count = changes.len(), ?path, "loaded changed paths");
    Ok(changes)
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`.
///
/// A trailing terminator does not yield a final empty line; interior empty
/// lines are preserved.
pub fn split_lines(contents: &str) -> ChangeList {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut chars = contents.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\n' => lines.push(std::mem::take(&mut current)),
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                lines.push(std::mem::take(&mut current));
            }
            other => current.push(other),
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}
