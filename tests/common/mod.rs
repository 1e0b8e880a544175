#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub use presubmit_scope_test_utils::init_tracing;

/// Write `contents` to `dir/name` and return the full path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write test file");
    path
}

/// A small three-module repo config with `app -> core -> base` dependencies
/// and a `docs` module that exposes no dependents task.
pub fn repo_config(root: &str) -> String {
    format!(
        r#"
[module.base]
root = "{root}/base"

[module.core]
root = "{root}/core"
depends_on = ["base"]

[module.app]
root = "{root}/app"
depends_on = ["core"]

[module.docs]
root = "{root}/docs"
dependents = false
"#
    )
}
