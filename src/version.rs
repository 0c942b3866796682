//! Helix release version parsing
//!
//! Recognizes `major.minor.patch[-prerelease]` where major/minor/patch are
//! non-negative integers and prerelease is an alphanumeric token with an
//! optional single `.`- or `-`-delimited numeric suffix (e.g. "alpha",
//! "alpha.5", "alpha-5"). Anything outside that grammar is not an error;
//! it parses to `None` and callers treat it as having no prerelease.

use regex_lite::Regex;

/// A parsed Helix release version.
///
/// Constructed once per resolution pass from the manifest version string
/// and discarded after the feature-gate decision. No semantic ordering is
/// performed on the numeric components; the gate only inspects the
/// prerelease token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    /// Prerelease tag without the leading `-` (e.g. "prealpha.3")
    pub prerelease: Option<String>,
}

impl Version {
    /// Parse a version string against the recognized grammar.
    pub fn parse(raw: &str) -> Option<Self> {
        let version_re = Regex::new(r"^(\d+)\.(\d+)\.(\d+)(?:-(\w+(?:[-.]\d+)?))?$").unwrap();
        let caps = version_re.captures(raw)?;

        // The three numeric groups only match digit runs; an overflowing
        // component is outside the grammar and parses to None.
        let major = caps.get(1)?.as_str().parse().ok()?;
        let minor = caps.get(2)?.as_str().parse().ok()?;
        let patch = caps.get(3)?.as_str().parse().ok()?;
        let prerelease = caps.get(4).map(|m| m.as_str().to_string());

        Some(Self {
            major,
            minor,
            patch,
            prerelease,
        })
    }

    /// The prerelease token, or "" when absent.
    pub fn prerelease_str(&self) -> &str {
        self.prerelease.as_deref().unwrap_or("")
    }
}
