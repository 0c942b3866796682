//! In-memory build graph
//!
//! Stands in for the real build tool's object graph in tests and in the
//! CLI. BTreeMaps throughout so enumeration order is stable.

use std::collections::BTreeMap;

use crate::settings::BuildSettings;

use super::BuildGraph;

#[derive(Debug, Default)]
struct Target {
    configurations: BTreeMap<String, BuildSettings>,
    /// Settings as the build tool would resolve them across xcconfig
    /// levels; populated by the test or CLI fixture, not computed here.
    resolved: BuildSettings,
}

#[derive(Debug, Default)]
struct Project {
    configurations: BTreeMap<String, BuildSettings>,
}

/// In-memory implementation of [`BuildGraph`].
#[derive(Debug, Default)]
pub struct MemoryBuildGraph {
    targets: BTreeMap<String, Target>,
    aggregates: BTreeMap<String, Target>,
    projects: BTreeMap<String, Project>,
}

impl MemoryBuildGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pod target with the given build configurations.
    pub fn add_target(&mut self, name: &str, configurations: &[&str]) {
        let target = self.targets.entry(name.to_string()).or_default();
        for configuration in configurations {
            target
                .configurations
                .entry(configuration.to_string())
                .or_default();
        }
    }

    /// Add an aggregate target with the given build configurations.
    pub fn add_aggregate_target(&mut self, name: &str, configurations: &[&str]) {
        let target = self.aggregates.entry(name.to_string()).or_default();
        for configuration in configurations {
            target
                .configurations
                .entry(configuration.to_string())
                .or_default();
        }
    }

    /// Add a user project with the given build configurations.
    pub fn add_project(&mut self, name: &str, configurations: &[&str]) {
        let project = self.projects.entry(name.to_string()).or_default();
        for configuration in configurations {
            project
                .configurations
                .entry(configuration.to_string())
                .or_default();
        }
    }

    /// Record a setting as already resolved across configuration levels.
    pub fn set_resolved_setting(&mut self, target: &str, setting: &str, value: &str) {
        self.targets
            .entry(target.to_string())
            .or_default()
            .resolved
            .insert(setting.to_string(), value.to_string());
    }

    /// Read a project's per-configuration setting, for assertions.
    pub fn project_setting(
        &self,
        project: &str,
        configuration: &str,
        setting: &str,
    ) -> Option<String> {
        self.projects
            .get(project)?
            .configurations
            .get(configuration)?
            .get(setting)
            .cloned()
    }

    fn find_target(&self, name: &str) -> Option<&Target> {
        self.targets.get(name).or_else(|| self.aggregates.get(name))
    }

    fn find_target_mut(&mut self, name: &str) -> Option<&mut Target> {
        if self.targets.contains_key(name) {
            self.targets.get_mut(name)
        } else {
            self.aggregates.get_mut(name)
        }
    }
}

impl BuildGraph for MemoryBuildGraph {
    fn target_names(&self) -> Vec<String> {
        self.targets.keys().cloned().collect()
    }

    fn aggregate_target_names(&self) -> Vec<String> {
        self.aggregates.keys().cloned().collect()
    }

    fn project_names(&self) -> Vec<String> {
        self.projects.keys().cloned().collect()
    }

    fn target_configurations(&self, target: &str) -> Vec<String> {
        self.find_target(target)
            .map(|t| t.configurations.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn project_configurations(&self, project: &str) -> Vec<String> {
        self.projects
            .get(project)
            .map(|p| p.configurations.keys().cloned().collect())
            .unwrap_or_default()
    }

    fn resolved_setting(&self, target: &str, setting: &str) -> Option<String> {
        self.find_target(target)?.resolved.get(setting).cloned()
    }

    fn target_setting(&self, target: &str, configuration: &str, setting: &str) -> Option<String> {
        self.find_target(target)?
            .configurations
            .get(configuration)?
            .get(setting)
            .cloned()
    }

    fn set_target_setting(
        &mut self,
        target: &str,
        configuration: &str,
        setting: &str,
        value: &str,
    ) {
        if let Some(target) = self.find_target_mut(target) {
            if let Some(settings) = target.configurations.get_mut(configuration) {
                settings.insert(setting.to_string(), value.to_string());
            }
        }
    }

    fn set_project_setting(
        &mut self,
        project: &str,
        configuration: &str,
        setting: &str,
        value: &str,
    ) {
        if let Some(project) = self.projects.get_mut(project) {
            if let Some(settings) = project.configurations.get_mut(configuration) {
                settings.insert(setting.to_string(), value.to_string());
            }
        }
    }
}
