#![allow(dead_code)]

use std::collections::BTreeMap;

use presubmit_scope::config::{ConfigFile, ConfigSection, ModuleConfig, RawConfigFile};
use presubmit_scope::types::MatchMode;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                module: BTreeMap::new(),
            },
        }
    }

    pub fn with_module(mut self, name: &str, module: ModuleConfig) -> Self {
        self.config.module.insert(name.to_string(), module);
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.config.config.match_mode = mode;
        self
    }

    pub fn with_umbrella_task(mut self, name: &str) -> Self {
        self.config.config.umbrella_task = name.to_string();
        self
    }

    pub fn with_dependents_task(mut self, name: &str) -> Self {
        self.config.config.dependents_task = name.to_string();
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `ModuleConfig`.
pub struct ModuleConfigBuilder {
    module: ModuleConfig,
}

impl ModuleConfigBuilder {
    pub fn new(root: &str) -> Self {
        Self {
            module: ModuleConfig {
                root: root.to_string(),
                depends_on: vec![],
                dependents: true,
                dependents_task: None,
            },
        }
    }

    pub fn depends_on(mut self, dep: &str) -> Self {
        self.module.depends_on.push(dep.to_string());
        self
    }

    pub fn without_dependents(mut self) -> Self {
        self.module.dependents = false;
        self
    }

    pub fn dependents_task(mut self, task: &str) -> Self {
        self.module.dependents_task = Some(task.to_string());
        self
    }

    pub fn build(self) -> ModuleConfig {
        self.module
    }
}
