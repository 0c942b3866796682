//! Module spec resolution
//!
//! The orchestrator for one resolution pass: read the manifest version,
//! run the version gate once, then augment the module spec — compiler
//! flags, pod-target xcconfig, header search paths, language standard,
//! and the dependency list with its conditional edges.

mod outcome;
mod spec;

pub use outcome::{ResolutionOutcome, SCHEMA_ID, SCHEMA_VERSION};
pub use spec::{Dependency, ModuleSpec};

use std::collections::BTreeMap;
use std::path::Path;

use crate::config::PodsConfig;
use crate::console::Console;
use crate::flags;
use crate::gate::{FeatureState, VersionGate};
use crate::headers;
use crate::manifest::{ManifestError, ModuleManifest};
use crate::settings::{self, CLANG_CXX_LANGUAGE_STANDARD, HEADER_SEARCH_PATHS, OTHER_CPLUSPLUSFLAGS};

/// Environment toggle: packaging mode (pods built as framework artifacts).
pub const ENV_USE_FRAMEWORKS: &str = "USE_FRAMEWORKS";

/// Environment toggle: explicit new-architecture override.
pub const ENV_NEW_ARCH: &str = "HELIX_NEW_ARCH_ENABLED";

/// Environment toggle: JS engine selection. Unset or "1" selects the
/// bundled Spark engine.
pub const ENV_JS_ENGINE: &str = "USE_SPARK";

/// Dependencies every Helix module pod receives, in declaration order.
pub const CORE_DEPENDENCIES: &[(&str, Option<&str>)] = &[
    ("Helix-Core", None),
    ("Helix-Folly", Some("2024.01.15.00")),
    ("glog", None),
    ("Helix-Render", None),
    ("Helix-Codegen", None),
    ("HelixRequired", None),
    ("HelixTypeSafety", None),
    ("HelixCommon/modules/bridging", None),
    ("HelixCommon/modules/core", None),
    ("Helix-ModulesApple", None),
    ("FlexLayout", None),
    ("Helix-Compositor", None),
    ("Helix-graphics", None),
    ("Helix-utils", None),
    ("Helix-debug", None),
    ("Helix-ImageManager", None),
    ("Helix-compositordebug", None),
    // Needed when the pod includes generated compositor sources
    ("DoubleConversion", None),
];

/// JS engine a module links against. Exactly one of the two is added per
/// resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsEngine {
    /// Bundled Spark engine (the default).
    #[default]
    Spark,
    /// System JS runtime interface, for projects that opt out of Spark.
    JsRuntime,
}

impl JsEngine {
    /// The dependency declaration this engine maps to.
    pub fn dependency_name(self) -> &'static str {
        match self {
            Self::Spark => "spark-engine",
            Self::JsRuntime => "Helix-jsruntime",
        }
    }
}

/// Read-only toggles for one resolution pass, captured once from the repo
/// config and the process environment (environment wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentContext {
    /// Pods are packaged as framework artifacts (`USE_FRAMEWORKS`).
    pub packaging_mode: bool,

    /// Selected JS engine (`USE_SPARK`).
    pub js_engine: JsEngine,

    /// Explicit new-architecture override (`HELIX_NEW_ARCH_ENABLED`).
    /// `None` when never supplied — the gate's advisory depends on the
    /// distinction.
    pub new_arch_override: Option<bool>,
}

impl EnvironmentContext {
    /// Capture the context from a config layer and a variable map.
    ///
    /// Pure so tests and the CLI control the inputs; `from_env` feeds it
    /// the real process environment.
    pub fn capture(config: &PodsConfig, vars: &BTreeMap<String, String>) -> Self {
        let packaging_mode = match vars.get(ENV_USE_FRAMEWORKS) {
            Some(value) => !value.is_empty(),
            None => config.packaging.unwrap_or(false),
        };

        let js_engine = match vars.get(ENV_JS_ENGINE).map(String::as_str) {
            None => config.js_engine(),
            Some("1") => JsEngine::Spark,
            Some(_) => JsEngine::JsRuntime,
        };

        let new_arch_override = match vars.get(ENV_NEW_ARCH) {
            Some(value) => Some(value == "1"),
            None => config.new_arch,
        };

        Self {
            packaging_mode,
            js_engine,
            new_arch_override,
        }
    }

    /// Capture the context from the process environment over `config`.
    pub fn from_env(config: &PodsConfig) -> Self {
        let mut vars = BTreeMap::new();
        for key in [ENV_USE_FRAMEWORKS, ENV_NEW_ARCH, ENV_JS_ENGINE] {
            if let Ok(value) = std::env::var(key) {
                vars.insert(key.to_string(), value);
            }
        }
        Self::capture(config, &vars)
    }
}

/// Resolution errors
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    #[error("Failed to serialize resolution outcome: {0}")]
    Serialize(String),
}

/// Augment a module spec in place for the given feature state and
/// environment.
///
/// Pure given its three inputs: repeated invocation with identical inputs
/// yields an identical spec, which the outcome serialization turns into
/// identical bytes. Everything already declared on the spec is preserved;
/// augmentation only appends.
pub fn augment_module_spec(spec: &mut ModuleSpec, state: FeatureState, env: &EnvironmentContext) {
    spec.compiler_flags = flags::append_flags(&spec.compiler_flags, flags::MODULE_COMPILER_FLAGS);

    let search_paths = headers::header_search_paths(env.packaging_mode);
    settings::merge_flag(&mut spec.pod_target_xcconfig, HEADER_SEARCH_PATHS, &search_paths);
    spec.pod_target_xcconfig.insert(
        CLANG_CXX_LANGUAGE_STANDARD.to_string(),
        flags::CPLUSPLUS_VERSION.to_string(),
    );

    if state.is_enabled() {
        settings::merge_flag(
            &mut spec.pod_target_xcconfig,
            OTHER_CPLUSPLUSFLAGS,
            flags::NEW_ARCH_CPP_FLAGS,
        );
    }

    for (name, version) in CORE_DEPENDENCIES {
        match version {
            Some(version) => spec.add_dependency(Dependency::pinned(*name, *version)),
            None => spec.add_dependency(Dependency::new(*name)),
        }
    }
    spec.add_dependency(Dependency::new(env.js_engine.dependency_name()));
}

/// Drives one resolution pass per module. Owns the version gate so the
/// override-ignored advisory fires at most once per resolver lifetime.
#[derive(Debug, Default)]
pub struct Resolver {
    gate: VersionGate,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run a full resolution pass: manifest → gate → augmentation.
    ///
    /// The spec is mutated in place; the returned outcome wraps the final
    /// snapshot together with the gate decision and manifest provenance.
    pub fn resolve(
        &mut self,
        manifest_path: &Path,
        spec: &mut ModuleSpec,
        env: &EnvironmentContext,
        console: &mut dyn Console,
    ) -> Result<ResolutionOutcome, ResolveError> {
        let manifest = ModuleManifest::read(manifest_path)?;
        let state = self
            .gate
            .decide(&manifest.version, env.new_arch_override, console);

        augment_module_spec(spec, state, env);

        Ok(ResolutionOutcome {
            schema_version: SCHEMA_VERSION,
            schema_id: SCHEMA_ID.to_string(),
            feature_state: state,
            manifest_version: manifest.version,
            manifest_digest: manifest.digest,
            spec: spec.clone(),
        })
    }
}
