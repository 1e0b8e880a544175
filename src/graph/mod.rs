// src/graph/mod.rs

//! Task-graph output side.
//!
//! - [`sink`] is the seam between the resolver and any build engine.
//! - [`manifest`] is the sink implementation this crate ships: it records the
//!   edges and renders them for an orchestrator to consume.
//! - [`dependents`] computes which modules transitively depend on the
//!   touched ones.

pub mod dependents;
pub mod manifest;
pub mod sink;

pub use dependents::affected_modules;
pub use manifest::{Manifest, OutputFormat};
pub use sink::{DependencyEdge, TaskGraphSink, TaskId};
