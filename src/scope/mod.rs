// src/scope/mod.rs

//! Change scoping: which modules does a change list touch?
//!
//! - [`changes`] loads the change list (one path per line).
//! - [`matcher`] decides whether a single path belongs to a module root.
//! - [`resolver`] runs the correlation pass and wires touched modules into a
//!   [`TaskGraphSink`](crate::graph::TaskGraphSink).

pub mod changes;
pub mod matcher;
pub mod resolver;

pub use changes::{load_changed_paths, split_lines, ChangeList};
pub use matcher::path_matches;
pub use resolver::{ChangeScopeResolver, TouchedSet};

/// A buildable unit known to the host build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Module {
    /// Unique module name.
    pub name: String,
    /// Absolute root directory, compared as a plain string.
    pub root: String,
    /// Task id of the module's dependents task, if it exposes one.
    pub dependents_task: Option<String>,
}

impl Module {
    pub fn new(name: impl Into<String>, root: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            root: root.into(),
            dependents_task: None,
        }
    }

    pub fn with_dependents_task(mut self, task: impl Into<String>) -> Self {
        self.dependents_task = Some(task.into());
        self
    }
}
