// src/config/model.rs

use std::collections::BTreeMap;
use std::path::{is_separator, Path, PathBuf, MAIN_SEPARATOR};

use serde::Deserialize;

use crate::scope::Module;
use crate::types::MatchMode;

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// umbrella_task = "runPresubmitTests"
/// group = "verification"
/// dependents_task = "buildDependents"
/// match_mode = "literal-prefix"
///
/// [module.core]
/// root = "/repo/core"
///
/// [module.app]
/// root = "/repo/app"
/// depends_on = ["core"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Global settings from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All modules from `[module.<name>]`, keyed by module name.
    #[serde(default)]
    pub module: BTreeMap<String, ModuleConfig>,
}

/// Validated configuration. Only obtainable through `TryFrom<RawConfigFile>`.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub module: BTreeMap<String, ModuleConfig>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        module: BTreeMap<String, ModuleConfig>,
    ) -> Self {
        Self { config, module }
    }

    /// Rewrite relative module roots so they hang off `base_dir`, which must
    /// be absolute.
    ///
    /// Absolute roots are left exactly as written. A trailing separator is
    /// significant to the prefix test and survives in both cases.
    pub fn resolve_roots(&mut self, base_dir: &Path) {
        for module in self.module.values_mut() {
            if Path::new(&module.root).is_absolute() {
                continue;
            }
            let joined: PathBuf = base_dir.join(&module.root).components().collect();
            let mut root = joined.to_string_lossy().into_owned();
            if module.root.ends_with(is_separator) && !root.ends_with(is_separator) {
                root.push(MAIN_SEPARATOR);
            }
            module.root = root;
        }
    }

    /// Module records in configuration (name) order, ready for the resolver.
    pub fn modules(&self) -> Vec<Module> {
        self.module
            .iter()
            .map(|(name, m)| Module {
                name: name.clone(),
                root: m.root.clone(),
                dependents_task: m
                    .effective_dependents_task(&self.config.dependents_task)
                    .map(|task| dependents_task_id(name, task)),
            })
            .collect()
    }

    /// `module -> direct dependencies` map used for the dependents closure.
    pub fn dependency_map(&self) -> BTreeMap<String, Vec<String>> {
        self.module
            .iter()
            .map(|(name, m)| (name.clone(), m.depends_on.clone()))
            .collect()
    }
}

/// Task id of a module-scoped task, in `:<module>:<task>` form.
pub fn dependents_task_id(module: &str, task: &str) -> String {
    format!(":{module}:{task}")
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Name of the synthetic task that aggregates touched modules.
    #[serde(default = "default_umbrella_task")]
    pub umbrella_task: String,

    /// Group the umbrella task is listed under.
    #[serde(default = "default_group")]
    pub group: String,

    /// Name of the per-module task that builds the module and everything
    /// depending on it.
    #[serde(default = "default_dependents_task")]
    pub dependents_task: String,

    #[serde(default)]
    pub match_mode: MatchMode,
}

fn default_umbrella_task() -> String {
    "runPresubmitTests".to_string()
}

fn default_group() -> String {
    "verification".to_string()
}

fn default_dependents_task() -> String {
    "buildDependents".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            umbrella_task: default_umbrella_task(),
            group: default_group(),
            dependents_task: default_dependents_task(),
            match_mode: MatchMode::default(),
        }
    }
}

/// `[module.<name>]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleConfig {
    /// Root directory of the module. Relative roots are resolved against the
    /// directory containing the config file.
    pub root: String,

    /// Modules this module depends on.
    #[serde(default)]
    pub depends_on: Vec<String>,

    /// Whether the module exposes a dependents task at all.
    #[serde(default = "default_true")]
    pub dependents: bool,

    /// Per-module override of `[config].dependents_task`.
    #[serde(default)]
    pub dependents_task: Option<String>,
}

impl ModuleConfig {
    /// Name of the dependents task for this module, or `None` if the module
    /// does not expose one.
    pub fn effective_dependents_task<'a>(&'a self, default_task: &'a str) -> Option<&'a str> {
        if !self.dependents {
            return None;
        }
        Some(self.dependents_task.as_deref().unwrap_or(default_task))
    }
}
