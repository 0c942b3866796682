//! Module spec snapshot
//!
//! The external build tool hands over a plain-data snapshot of a module's
//! declared build hash and takes the mutated snapshot back for
//! persistence. Absent fields default to empty; a module that declares
//! nothing is still resolvable.

use serde::{Deserialize, Serialize};

use crate::settings::BuildSettings;

/// One dependency declaration (name plus optional pinned version).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

impl Dependency {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    pub fn pinned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }
}

/// Snapshot of a module's build declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleSpec {
    /// Module (pod) name.
    #[serde(default)]
    pub name: String,

    /// Compiler flags as one whitespace-separated string.
    #[serde(default)]
    pub compiler_flags: String,

    /// Per-pod build settings (`pod_target_xcconfig`).
    #[serde(default)]
    pub pod_target_xcconfig: BuildSettings,

    /// Ordered dependency declarations. Augmentation appends; declarations
    /// already present are never removed.
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

impl ModuleSpec {
    /// Parse a snapshot from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Append a dependency declaration.
    pub fn add_dependency(&mut self, dependency: Dependency) {
        self.dependencies.push(dependency);
    }

    /// Whether a dependency with the given name is declared.
    pub fn depends_on(&self, name: &str) -> bool {
        self.dependencies.iter().any(|d| d.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_snapshot_parses() {
        let spec = ModuleSpec::from_json("{}").unwrap();
        assert!(spec.compiler_flags.is_empty());
        assert!(spec.pod_target_xcconfig.is_empty());
        assert!(spec.dependencies.is_empty());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let json = r#"{
            "name": "my-module",
            "compiler_flags": "-DLOCAL=1",
            "pod_target_xcconfig": {"HEADER_SEARCH_PATHS": "\"$(PODS_ROOT)/extra\""},
            "dependencies": [{"name": "Helix-Core"}, {"name": "Helix-Folly", "version": "2024.01.15.00"}]
        }"#;

        let spec = ModuleSpec::from_json(json).unwrap();
        assert_eq!(spec.name, "my-module");
        assert_eq!(spec.dependencies.len(), 2);
        assert_eq!(spec.dependencies[1].version.as_deref(), Some("2024.01.15.00"));

        let back: ModuleSpec =
            serde_json::from_str(&serde_json::to_string(&spec).unwrap()).unwrap();
        assert_eq!(back, spec);
    }

    #[test]
    fn test_depends_on() {
        let mut spec = ModuleSpec::default();
        spec.add_dependency(Dependency::new("glog"));

        assert!(spec.depends_on("glog"));
        assert!(!spec.depends_on("Helix-Core"));
    }
}
