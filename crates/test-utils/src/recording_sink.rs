use presubmit_scope::graph::{DependencyEdge, TaskGraphSink};

/// A `TaskGraphSink` that keeps every call, duplicates included, so tests can
/// assert on exactly what the resolver asked the host graph to do.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub edges: Vec<DependencyEdge>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Targets in call order.
    pub fn targets(&self) -> Vec<String> {
        self.edges.iter().map(|e| e.to.clone()).collect()
    }
}

impl TaskGraphSink for RecordingSink {
    fn add_dependency_edge(&mut self, umbrella: &str, target: &str) {
        self.edges.push(DependencyEdge::new(umbrella, target));
    }
}
