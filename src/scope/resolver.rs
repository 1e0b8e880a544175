// src/scope/resolver.rs

//! The change-scope correlation pass.

use tracing::{debug, trace};

use crate::graph::TaskGraphSink;
use crate::scope::matcher::path_matches;
use crate::scope::Module;
use crate::types::MatchMode;

/// Names of the modules touched by a change list, in module order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchedSet {
    names: Vec<String>,
}

impl TouchedSet {
    pub fn contains(&self, module: &str) -> bool {
        self.names.iter().any(|n| n == module)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

/// Correlates changed paths with module roots.
///
/// Holds no state between calls; `resolve` is a pure function of the module
/// list, the match mode and the change list.
#[derive(Debug, Clone)]
pub struct ChangeScopeResolver<'a> {
    modules: &'a [Module],
    mode: MatchMode,
}

impl<'a> ChangeScopeResolver<'a> {
    pub fn new(modules: &'a [Module], mode: MatchMode) -> Self {
        Self { modules, mode }
    }

    /// Compute the touched set.
    ///
    /// Each module scans the change list in order and stops at the first
    /// matching path.
    pub fn resolve(&self, changes: &[String]) -> TouchedSet {
        let mut names = Vec::new();

        for module in self.modules {
            trace!(module = %module.name, root = %module.root, "scanning changes");
            if let Some(hit) = changes
                .iter()
                .find(|path| path_matches(self.mode, &module.root, path))
            {
                debug!(module = %module.name, path = %hit, "module touched");
                names.push(module.name.clone());
            }
        }

        TouchedSet { names }
    }

    /// Add an `umbrella -> dependents task` edge for every touched module that
    /// exposes a dependents task.
    pub fn wire(&self, umbrella: &str, touched: &TouchedSet, sink: &mut dyn TaskGraphSink) {
        for module in self.modules.iter().filter(|m| touched.contains(&m.name)) {
            match &module.dependents_task {
                Some(task) => sink.add_dependency_edge(umbrella, task),
                None => debug!(module = %module.name, "touched module has no dependents task"),
            }
        }
    }
}
