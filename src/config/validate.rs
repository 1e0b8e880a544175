// src/config/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{PresubmitError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::PresubmitError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.module))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_modules(cfg)?;
    validate_global_config(cfg)?;
    validate_modules(cfg)?;
    validate_module_dependencies(cfg)?;
    validate_dependency_graph(cfg)?;
    Ok(())
}

fn ensure_has_modules(cfg: &RawConfigFile) -> Result<()> {
    if cfg.module.is_empty() {
        return Err(PresubmitError::ConfigError(
            "config must contain at least one [module.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_global_config(cfg: &RawConfigFile) -> Result<()> {
    if cfg.config.umbrella_task.trim().is_empty() {
        return Err(PresubmitError::ConfigError(
            "[config].umbrella_task must not be empty".to_string(),
        ));
    }
    if cfg.config.dependents_task.trim().is_empty() {
        return Err(PresubmitError::ConfigError(
            "[config].dependents_task must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_modules(cfg: &RawConfigFile) -> Result<()> {
    for (name, module) in cfg.module.iter() {
        // An empty root would prefix-match every changed path.
        if module.root.is_empty() {
            return Err(PresubmitError::ConfigError(format!(
                "module '{}' has an empty `root`",
                name
            )));
        }
        if let Some(task) = &module.dependents_task {
            if task.trim().is_empty() {
                return Err(PresubmitError::ConfigError(format!(
                    "module '{}' has an empty `dependents_task`",
                    name
                )));
            }
        }
    }
    Ok(())
}

fn validate_module_dependencies(cfg: &RawConfigFile) -> Result<()> {
    for (name, module) in cfg.module.iter() {
        for dep in module.depends_on.iter() {
            if !cfg.module.contains_key(dep) {
                return Err(PresubmitError::ConfigError(format!(
                    "module '{}' has unknown dependency '{}' in `depends_on`",
                    name, dep
                )));
            }
            if dep == name {
                return Err(PresubmitError::ConfigError(format!(
                    "module '{}' cannot depend on itself in `depends_on`",
                    name
                )));
            }
        }
    }
    Ok(())
}

fn validate_dependency_graph(cfg: &RawConfigFile) -> Result<()> {
    // Edge direction: dependency -> dependent.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in cfg.module.keys() {
        graph.add_node(name.as_str());
    }

    for (name, module) in cfg.module.iter() {
        for dep in module.depends_on.iter() {
            graph.add_edge(dep.as_str(), name.as_str(), ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(PresubmitError::DependencyCycle(format!(
            "cycle detected in module graph involving module '{}'",
            cycle.node_id()
        ))),
    }
}
