//! Build-setting maps and inheritance-aware flag merging
//!
//! Xcode chains configuration levels through the `$(inherited)` sentinel;
//! a merge must never remove or reorder it. The merge here only ever
//! appends after existing content, which keeps the sentinel (and every
//! flag already present) intact.

use std::collections::BTreeMap;

/// Sentinel meaning "include the value from the enclosing configuration
/// level before this value".
pub const INHERITED_MARKER: &str = "$(inherited)";

/// Setting name: header search paths.
pub const HEADER_SEARCH_PATHS: &str = "HEADER_SEARCH_PATHS";

/// Setting name: extra C++ compiler flags.
pub const OTHER_CPLUSPLUSFLAGS: &str = "OTHER_CPLUSPLUSFLAGS";

/// Setting name: C++ language standard.
pub const CLANG_CXX_LANGUAGE_STANDARD: &str = "CLANG_CXX_LANGUAGE_STANDARD";

/// A build-setting map as handed over by the external build tool.
///
/// BTreeMap so serialization order is stable across runs.
pub type BuildSettings = BTreeMap<String, String>;

/// Merge `flag` into `settings[name]`.
///
/// Absent or empty entries are set to `flag` verbatim; anything else gets
/// `flag` appended after a single space. Calling this twice with the same
/// flag appends it twice; callers invoke it at most once per resolution
/// pass.
pub fn merge_flag(settings: &mut BuildSettings, name: &str, flag: &str) {
    let entry = settings.entry(name.to_string()).or_default();
    if entry.is_empty() {
        *entry = flag.to_string();
    } else {
        entry.push(' ');
        entry.push_str(flag);
    }
}
