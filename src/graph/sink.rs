// src/graph/sink.rs

use serde::Serialize;

/// Identifier of a task in the host build's task graph.
pub type TaskId = String;

/// Receives dependency edges produced by the resolver.
///
/// Adapters bind this to a concrete build engine; the resolver never sees
/// anything else of the host's object model.
pub trait TaskGraphSink {
    /// Make `umbrella` depend on `target`.
    fn add_dependency_edge(&mut self, umbrella: &str, target: &str);
}

/// A directed `from -> to` edge: `from` depends on `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DependencyEdge {
    pub from: TaskId,
    pub to: TaskId,
}

impl DependencyEdge {
    pub fn new(from: impl Into<TaskId>, to: impl Into<TaskId>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
