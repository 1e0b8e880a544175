// src/graph/dependents.rs

use std::collections::{BTreeMap, BTreeSet};

use petgraph::graphmap::DiGraphMap;
use petgraph::visit::Dfs;

use crate::scope::TouchedSet;

/// Touched modules plus every module that transitively depends on one of
/// them, sorted by name.
///
/// `dep_map` maps a module to its direct dependencies (`depends_on`).
pub fn affected_modules(
    dep_map: &BTreeMap<String, Vec<String>>,
    touched: &TouchedSet,
) -> Vec<String> {
    // Edge direction: dependency -> dependent, so a DFS walks downstream.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();
    for (name, deps) in dep_map {
        graph.add_node(name.as_str());
        for dep in deps {
            graph.add_edge(dep.as_str(), name.as_str(), ());
        }
    }

    let mut affected: BTreeSet<String> = BTreeSet::new();
    for start in touched.iter() {
        if !graph.contains_node(start) {
            affected.insert(start.to_string());
            continue;
        }
        let mut dfs = Dfs::new(&graph, start);
        while let Some(node) = dfs.next(&graph) {
            affected.insert(node.to_string());
        }
    }

    affected.into_iter().collect()
}
