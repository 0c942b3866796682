//! Module manifest reading
//!
//! The version decision needs the `"version"` field of the module's
//! package manifest (package.json). A missing manifest aborts the
//! resolution pass; there is no version to gate on without it.

use std::fs;
use std::io;
use std::path::Path;

use sha2::{Digest, Sha256};

/// Error types for manifest reading
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Couldn't find the module manifest at {0}")]
    NotFound(String),

    #[error("Failed to read manifest: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse manifest JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Manifest at {0} has no \"version\" field")]
    MissingVersion(String),
}

/// The slice of the package manifest the resolver consumes.
#[derive(Debug, Clone)]
pub struct ModuleManifest {
    /// Raw version string, passed to the version gate unvalidated.
    pub version: String,
    /// SHA-256 digest of the raw manifest bytes, recorded in the
    /// resolution outcome for provenance.
    pub digest: String,
}

impl ModuleManifest {
    /// Read the manifest at `path`.
    pub fn read(path: &Path) -> Result<Self, ManifestError> {
        if !path.exists() {
            return Err(ManifestError::NotFound(path.display().to_string()));
        }

        let bytes = fs::read(path)?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest = hex::encode(hasher.finalize());

        let value: serde_json::Value = serde_json::from_slice(&bytes)?;
        let version = value
            .get("version")
            .and_then(|v| v.as_str())
            .ok_or_else(|| ManifestError::MissingVersion(path.display().to_string()))?
            .to_string();

        Ok(Self { version, digest })
    }
}
