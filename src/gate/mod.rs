//! Version gate for the Helix new architecture
//!
//! Decides, once per resolution pass, whether the new architecture is
//! forced on by the release channel, switched on by the user, or off.
//! The prealpha channel always runs with the new architecture: the trunk
//! build is tagged with a large numeric major version (e.g. 1000.0.0) that
//! must not read as a stable 1.0+ release, and the prerelease marker is
//! the only reliable disambiguator.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::console::Console;
use crate::version::Version;

/// Prerelease channel that force-enables the new architecture.
///
/// Matched as a substring of the whole prerelease token for compatibility
/// with the original channel naming; "prealpha.3" and "prealpha-rc" both
/// qualify.
pub const PREALPHA_CHANNEL: &str = "prealpha";

/// Outcome of the version-gate decision for one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureState {
    /// The release channel mandates the new architecture; overrides are
    /// ignored.
    ForceEnabled,
    /// The user explicitly switched the new architecture on.
    UserEnabled,
    /// Default: the new architecture stays off.
    UserDisabled,
}

impl FeatureState {
    /// Whether new-architecture flags and dependencies apply.
    pub fn is_enabled(self) -> bool {
        !matches!(self, Self::UserDisabled)
    }
}

impl fmt::Display for FeatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ForceEnabled => write!(f, "force_enabled"),
            Self::UserEnabled => write!(f, "user_enabled"),
            Self::UserDisabled => write!(f, "user_disabled"),
        }
    }
}

/// The gate itself. Owns the advisory-emitted flag so the warning fires at
/// most once per resolver lifetime and tests can reset it by constructing
/// a fresh gate.
#[derive(Debug, Default)]
pub struct VersionGate {
    warned_override_ignored: bool,
}

impl VersionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide the feature state for `raw_version`.
    ///
    /// `override_flag` is `Some` only when the user supplied the toggle
    /// explicitly; that distinction drives the one-time advisory when the
    /// prealpha channel ignores it. Strings outside the version grammar
    /// never error; they behave as if no prerelease were present.
    pub fn decide(
        &mut self,
        raw_version: &str,
        override_flag: Option<bool>,
        console: &mut dyn Console,
    ) -> FeatureState {
        let prerelease = Version::parse(raw_version)
            .and_then(|v| v.prerelease)
            .unwrap_or_default();

        if prerelease.contains(PREALPHA_CHANNEL) {
            if override_flag.is_some() && !self.warned_override_ignored {
                console.warn(
                    "[New Architecture] Starting from version 1.0.0-prealpha the value of the \
                     HELIX_NEW_ARCH_ENABLED flag is ignored and the new architecture is enabled \
                     by default.",
                );
                self.warned_override_ignored = true;
            }
            return FeatureState::ForceEnabled;
        }

        if override_flag == Some(true) {
            FeatureState::UserEnabled
        } else {
            FeatureState::UserDisabled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;

    fn decide(raw: &str, override_flag: Option<bool>) -> FeatureState {
        let mut console = RecordingConsole::default();
        VersionGate::new().decide(raw, override_flag, &mut console)
    }

    #[test]
    fn test_stable_follows_override() {
        assert_eq!(decide("1.0.0", Some(true)), FeatureState::UserEnabled);
        assert_eq!(decide("1.0.0", Some(false)), FeatureState::UserDisabled);
        assert_eq!(decide("1.0.0", None), FeatureState::UserDisabled);
    }

    #[test]
    fn test_prealpha_forces_enabled() {
        assert_eq!(decide("0.75.0-prealpha.3", None), FeatureState::ForceEnabled);
        assert_eq!(
            decide("0.75.0-prealpha.3", Some(false)),
            FeatureState::ForceEnabled
        );
        assert_eq!(decide("1000.0.0-prealpha", Some(true)), FeatureState::ForceEnabled);
    }

    #[test]
    fn test_other_prerelease_follows_override() {
        assert_eq!(decide("0.75.0-nightly-3", None), FeatureState::UserDisabled);
        assert_eq!(decide("0.75.0-nightly-3", Some(true)), FeatureState::UserEnabled);
    }

    #[test]
    fn test_malformed_version_follows_override() {
        assert_eq!(decide("not-a-version", Some(true)), FeatureState::UserEnabled);
        assert_eq!(decide("", None), FeatureState::UserDisabled);
    }

    // Substring matching is intentionally loose; a token that merely
    // contains "prealpha" also forces the feature on.
    #[test]
    fn test_substring_match_is_loose() {
        assert_eq!(decide("1.0.0-notprealpharelated", None), FeatureState::ForceEnabled);
    }

    #[test]
    fn test_advisory_emitted_once_per_gate() {
        let mut console = RecordingConsole::default();
        let mut gate = VersionGate::new();

        gate.decide("0.76.0-prealpha.1", Some(false), &mut console);
        gate.decide("0.76.0-prealpha.1", Some(false), &mut console);

        assert_eq!(console.warnings.len(), 1);
        assert!(console.warnings[0].contains("HELIX_NEW_ARCH_ENABLED"));
    }

    #[test]
    fn test_no_advisory_without_explicit_override() {
        let mut console = RecordingConsole::default();
        let mut gate = VersionGate::new();

        gate.decide("0.76.0-prealpha.1", None, &mut console);

        assert!(console.warnings.is_empty());
    }

    #[test]
    fn test_fresh_gate_warns_again() {
        let mut console = RecordingConsole::default();

        VersionGate::new().decide("0.76.0-prealpha.1", Some(true), &mut console);
        VersionGate::new().decide("0.76.0-prealpha.1", Some(true), &mut console);

        assert_eq!(console.warnings.len(), 2);
    }

    #[test]
    fn test_is_enabled() {
        assert!(FeatureState::ForceEnabled.is_enabled());
        assert!(FeatureState::UserEnabled.is_enabled());
        assert!(!FeatureState::UserDisabled.is_enabled());
    }
}
