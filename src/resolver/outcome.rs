//! Resolution outcome snapshot
//!
//! Versioned wrapper around the mutated module spec, written back to the
//! external tool. Serialized via RFC 8785 JCS when byte-stable output is
//! required; identical inputs must produce identical bytes, so the
//! outcome carries no timestamp.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::gate::FeatureState;

use super::{ModuleSpec, ResolveError};

/// Schema version for the resolution outcome
pub const SCHEMA_VERSION: u32 = 1;

/// Schema identifier
pub const SCHEMA_ID: &str = "helix-pods/resolution@1";

/// The final product of one resolution pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    /// Schema version
    pub schema_version: u32,

    /// Schema identifier
    pub schema_id: String,

    /// Gate decision the pass ran under
    pub feature_state: FeatureState,

    /// Version string read from the module manifest
    pub manifest_version: String,

    /// SHA-256 digest of the raw manifest bytes
    pub manifest_digest: String,

    /// The augmented module spec
    pub spec: ModuleSpec,
}

impl ResolutionOutcome {
    /// Canonical (RFC 8785) bytes of the outcome.
    pub fn canonical_bytes(&self) -> Result<Vec<u8>, ResolveError> {
        serde_json_canonicalizer::to_vec(self).map_err(|e| ResolveError::Serialize(e.to_string()))
    }

    /// Serialize to JSON (pretty printed)
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Write to file
    pub fn write_to_file(&self, path: &Path) -> io::Result<()> {
        let json = self.to_json().map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidData, format!("JSON error: {}", e))
        })?;
        fs::write(path, json)
    }
}
