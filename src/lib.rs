//! Helix Pod Gate - build-configuration synthesizer for Helix module pods
//!
//! This crate implements the configuration-resolution pass the Helix
//! dependency-resolution phase runs once per module: it gates the new
//! architecture on the release version, composes compiler flags and
//! header search paths into the module's build settings, and extends the
//! dependency list with the core pod set and the selected JS engine.

pub mod config;
pub mod console;
pub mod flags;
pub mod gate;
pub mod graph;
pub mod headers;
pub mod manifest;
pub mod propagation;
pub mod resolver;
pub mod settings;
pub mod version;

pub use config::PodsConfig;
pub use console::{Console, RecordingConsole, StderrConsole};
pub use gate::{FeatureState, VersionGate};
pub use graph::{BuildGraph, MemoryBuildGraph};
pub use manifest::ModuleManifest;
pub use resolver::{EnvironmentContext, JsEngine, ModuleSpec, ResolutionOutcome, Resolver};
pub use version::Version;
