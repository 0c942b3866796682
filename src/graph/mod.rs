//! Build-graph abstraction
//!
//! The write-back passes touch the generated Xcode build graph only
//! through this narrow trait: enumerate targets by kind, enumerate
//! configurations, read one resolved setting, and read or write raw
//! per-configuration settings. Nothing here depends on a concrete
//! third-party object model; the in-memory implementation backs both the
//! tests and the CLI.

mod memory;

pub use memory::MemoryBuildGraph;

/// Narrow view of the external build tool's object graph.
pub trait BuildGraph {
    /// Names of pod targets in the generated pods project.
    fn target_names(&self) -> Vec<String>;

    /// Names of aggregate targets (one per user-project target).
    fn aggregate_target_names(&self) -> Vec<String>;

    /// Names of user projects.
    fn project_names(&self) -> Vec<String>;

    /// Build configuration names of a pod or aggregate target.
    fn target_configurations(&self, target: &str) -> Vec<String>;

    /// Build configuration names of a user project.
    fn project_configurations(&self, project: &str) -> Vec<String>;

    /// Read a setting with cross-file (xcconfig) inheritance already
    /// resolved by the build tool. `None` when the target does not define
    /// the setting anywhere.
    fn resolved_setting(&self, target: &str, setting: &str) -> Option<String>;

    /// Read a raw per-configuration setting on a target.
    fn target_setting(&self, target: &str, configuration: &str, setting: &str) -> Option<String>;

    /// Write a per-configuration setting on a target.
    fn set_target_setting(
        &mut self,
        target: &str,
        configuration: &str,
        setting: &str,
        value: &str,
    );

    /// Write a per-configuration setting on a user project.
    fn set_project_setting(
        &mut self,
        project: &str,
        configuration: &str,
        setting: &str,
        value: &str,
    );
}
