// src/graph/manifest.rs

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;

use crate::errors::Result;
use crate::graph::sink::{DependencyEdge, TaskGraphSink};

/// How a manifest is printed.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Toml,
}

/// The umbrella task plus every dependency edge registered for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub umbrella_task: String,
    pub group: String,
    /// Touched modules, in module order.
    pub touched_modules: Vec<String>,
    /// Touched modules plus everything transitively depending on them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affected_modules: Option<Vec<String>>,
    pub edges: Vec<DependencyEdge>,
}

impl Manifest {
    /// A manifest with the umbrella task declared and no edges yet.
    pub fn new(umbrella_task: impl Into<String>, group: impl Into<String>) -> Self {
        Self {
            umbrella_task: umbrella_task.into(),
            group: group.into(),
            touched_modules: Vec::new(),
            affected_modules: None,
            edges: Vec::new(),
        }
    }

    /// Targets the umbrella task depends on, in registration order.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.edges.iter().map(|e| e.to.as_str())
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_string()),
            OutputFormat::Toml => Ok(toml::to_string(self)?),
        }
    }

}

impl fmt::Display for Manifest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "task {}", self.umbrella_task)?;
        writeln!(f, "  group: {}", self.group)?;
        writeln!(f, "  touched: {:?}", self.touched_modules)?;
        if let Some(ref affected) = self.affected_modules {
            writeln!(f, "  affected: {:?}", affected)?;
        }
        if self.edges.is_empty() {
            writeln!(f, "  dependsOn: (none)")?;
        }
        for edge in &self.edges {
            writeln!(f, "  dependsOn: {}", edge.to)?;
        }
        Ok(())
    }
}

impl TaskGraphSink for Manifest {
    fn add_dependency_edge(&mut self, umbrella: &str, target: &str) {
        let edge = DependencyEdge::new(umbrella, target);
        if !self.edges.contains(&edge) {
            self.edges.push(edge);
        }
    }
}
