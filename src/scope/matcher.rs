// src/scope/matcher.rs

use std::path::is_separator;

use crate::types::MatchMode;

/// Returns true if `path` belongs to the module rooted at `root`.
pub fn path_matches(mode: MatchMode, root: &str, path: &str) -> bool {
    if !path.starts_with(root) {
        return false;
    }

    match mode {
        MatchMode::LiteralPrefix => true,
        MatchMode::SegmentAware => {
            let rest = &path[root.len()..];
            rest.is_empty()
                || root.ends_with(is_separator)
                || rest.starts_with(is_separator)
        }
    }
}
