//! Static compiler-flag tables for Helix module pods
//!
//! All flag strings are fixed at compile time; composition is append-only
//! so nothing a module already declares is ever removed or reordered.

/// Flags shared by every Helix C++ target: coroutine support off, mobile
/// numeric/library behavior on.
pub const SHARED_FLAGS: &str = "-DCORE_NO_CONFIG -DCORE_MOBILE=1 -DCORE_USE_LIBCPP=1 -DCORE_CFG_NO_COROUTINES=1 -DCORE_HAVE_CLOCK_GETTIME=1";

/// Compiler flags applied to module pods: the shared set plus warning
/// suppressions for generated code.
pub const MODULE_COMPILER_FLAGS: &str = "-DCORE_NO_CONFIG -DCORE_MOBILE=1 -DCORE_USE_LIBCPP=1 -DCORE_CFG_NO_COROUTINES=1 -DCORE_HAVE_CLOCK_GETTIME=1 -Wno-comma -Wno-shorten-64-to-32";

/// Flags that switch a target onto the new architecture, merged into
/// `OTHER_CPLUSPLUSFLAGS`. The merger owns the whitespace separator.
pub const NEW_ARCH_CPP_FLAGS: &str = "-DHELIX_NEW_ARCH_ENABLED=1 -DCORE_NO_CONFIG -DCORE_MOBILE=1 -DCORE_USE_LIBCPP=1 -DCORE_CFG_NO_COROUTINES=1 -DCORE_HAVE_CLOCK_GETTIME=1";

/// C++ language standard pinned onto every pod and propagated to user
/// projects.
pub const CPLUSPLUS_VERSION: &str = "c++20";

/// Append `addition` to an existing flag string, preserving everything
/// already present. Empty existing content yields `addition` verbatim.
pub fn append_flags(existing: &str, addition: &str) -> String {
    if existing.is_empty() {
        addition.to_string()
    } else {
        format!("{} {}", existing, addition)
    }
}
