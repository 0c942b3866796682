//! Header search path construction
//!
//! Produces the ordered, quoted header search path fragments for a module
//! pod. When the consuming project packages each pod as a framework
//! (`USE_FRAMEWORKS`), headers no longer resolve through the static pods
//! root, so one fragment per Helix framework is appended from a fixed
//! table. Order is table order on every run; downstream config diffing
//! depends on it.

/// Build-setting variable naming the per-configuration build output
/// directory the framework products land in.
pub const PODS_BUILD_DIR_VAR: &str = "PODS_CONFIGURATION_BUILD_DIR";

/// Search path fragments required by every module pod.
const BASE_SEARCH_PATHS: &[&str] = &[
    "$(PODS_ROOT)/boost",
    "$(PODS_ROOT)/Headers/Private/FlexLayout",
];

/// Extra non-framework fragments required only in packaging mode.
const PACKAGING_SEARCH_PATHS: &[&str] = &[
    "$(PODS_ROOT)/DoubleConversion",
    "$(PODS_ROOT)/fmt/include",
];

/// A Helix framework whose headers modules compile against.
#[derive(Debug)]
pub struct FrameworkHeaders {
    /// Pod name (directory under the build output dir).
    pub pod: &'static str,
    /// Framework product name.
    pub product: &'static str,
    /// Platform subdirectories exported in addition to the canonical
    /// Headers directory.
    pub subpaths: &'static [&'static str],
}

/// Frameworks whose header directories are added in packaging mode.
pub const FRAMEWORK_HEADER_TABLE: &[FrameworkHeaders] = &[
    FrameworkHeaders {
        pod: "Helix-graphics",
        product: "Helix_graphics",
        subpaths: &["helix/compositor/graphics/platform/ios"],
    },
    FrameworkHeaders {
        pod: "Helix-Compositor",
        product: "Helix_Compositor",
        subpaths: &["helix/compositor/components/view/platform/cxx"],
    },
    FrameworkHeaders {
        pod: "Helix-CompositorImage",
        product: "Helix_CompositorImage",
        subpaths: &[],
    },
    FrameworkHeaders {
        pod: "HelixCommon",
        product: "HelixCommon",
        subpaths: &["helix/module/core"],
    },
    FrameworkHeaders {
        pod: "Helix-ModulesApple",
        product: "Helix_ModulesApple",
        subpaths: &[],
    },
    FrameworkHeaders {
        pod: "Helix-Render",
        product: "HelixRender",
        subpaths: &[],
    },
    FrameworkHeaders {
        pod: "Helix-utils",
        product: "Helix_utils",
        subpaths: &[],
    },
    FrameworkHeaders {
        pod: "Helix-debug",
        product: "Helix_debug",
        subpaths: &[],
    },
    FrameworkHeaders {
        pod: "Helix-ImageManager",
        product: "Helix_ImageManager",
        subpaths: &[],
    },
    FrameworkHeaders {
        pod: "Helix-compositordebug",
        product: "Helix_compositordebug",
        subpaths: &[],
    },
];

/// Header paths for one framework: the canonical Headers directory first,
/// then one path per extra subpath, all under the same pod's build output
/// directory variable.
pub fn framework_header_paths(
    build_dir_var: &str,
    pod: &str,
    product: &str,
    subpaths: &[&str],
) -> Vec<String> {
    let headers_dir = format!("$({})/{}/{}.framework/Headers", build_dir_var, pod, product);
    let mut paths = Vec::with_capacity(1 + subpaths.len());
    for subpath in subpaths {
        paths.push(format!("{}/{}", headers_dir, subpath));
    }
    paths.insert(0, headers_dir);
    paths
}

/// The ordered, quoted search path fragments for one module pod.
pub fn search_path_fragments(packaging_mode: bool) -> Vec<String> {
    let mut fragments: Vec<String> = BASE_SEARCH_PATHS.iter().map(|p| quote(p)).collect();

    if packaging_mode {
        fragments.extend(PACKAGING_SEARCH_PATHS.iter().map(|p| quote(p)));
        for framework in FRAMEWORK_HEADER_TABLE {
            for path in framework_header_paths(
                PODS_BUILD_DIR_VAR,
                framework.pod,
                framework.product,
                framework.subpaths,
            ) {
                fragments.push(quote(&path));
            }
        }
    }

    fragments
}

/// Fragments joined into the single `HEADER_SEARCH_PATHS` string.
pub fn header_search_paths(packaging_mode: bool) -> String {
    search_path_fragments(packaging_mode).join(" ")
}

fn quote(path: &str) -> String {
    format!("\"{}\"", path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_two_fragments_without_packaging() {
        let fragments = search_path_fragments(false);
        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0], "\"$(PODS_ROOT)/boost\"");
        assert_eq!(fragments[1], "\"$(PODS_ROOT)/Headers/Private/FlexLayout\"");
    }

    #[test]
    fn test_packaging_adds_framework_fragments() {
        let fragments = search_path_fragments(true);
        // 2 base + 2 packaging + 10 framework Headers dirs + 2 subpaths
        assert_eq!(fragments.len(), 16);
        assert!(fragments.contains(&quote(
            "$(PODS_CONFIGURATION_BUILD_DIR)/Helix-graphics/Helix_graphics.framework/Headers"
        )));
        assert!(fragments.contains(&quote(
            "$(PODS_CONFIGURATION_BUILD_DIR)/Helix-graphics/Helix_graphics.framework/Headers/helix/compositor/graphics/platform/ios"
        )));
    }

    #[test]
    fn test_no_duplicate_fragments() {
        let fragments = search_path_fragments(true);
        let unique: HashSet<&String> = fragments.iter().collect();
        assert_eq!(unique.len(), fragments.len());
    }

    #[test]
    fn test_output_stable_across_calls() {
        assert_eq!(search_path_fragments(true), search_path_fragments(true));
        assert_eq!(header_search_paths(false), header_search_paths(false));
    }

    #[test]
    fn test_every_fragment_quoted() {
        for fragment in search_path_fragments(true) {
            assert!(fragment.starts_with('"') && fragment.ends_with('"'));
        }
    }

    #[test]
    fn test_framework_paths_without_subpaths() {
        let paths = framework_header_paths(PODS_BUILD_DIR_VAR, "Helix-utils", "Helix_utils", &[]);
        assert_eq!(
            paths,
            vec!["$(PODS_CONFIGURATION_BUILD_DIR)/Helix-utils/Helix_utils.framework/Headers"]
        );
    }

    #[test]
    fn test_framework_paths_with_subpaths() {
        let paths =
            framework_header_paths(PODS_BUILD_DIR_VAR, "HelixCommon", "HelixCommon", &["helix/module/core"]);
        assert_eq!(paths.len(), 2);
        assert_eq!(
            paths[1],
            "$(PODS_CONFIGURATION_BUILD_DIR)/HelixCommon/HelixCommon.framework/Headers/helix/module/core"
        );
    }

    #[test]
    fn test_joined_string_matches_fragments() {
        let joined = header_search_paths(false);
        assert_eq!(
            joined,
            "\"$(PODS_ROOT)/boost\" \"$(PODS_ROOT)/Headers/Private/FlexLayout\""
        );
    }
}
