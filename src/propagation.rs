//! Write-back passes over the generated build graph
//!
//! Two independent, best-effort passes that run after target generation:
//! copying the core pod's C++ language standard onto user projects, and
//! injecting the new-architecture flags into aggregate targets and the
//! core pod. Both operate only through the [`BuildGraph`] trait.

use crate::console::Console;
use crate::flags::{append_flags, NEW_ARCH_CPP_FLAGS};
use crate::graph::BuildGraph;
use crate::settings::{CLANG_CXX_LANGUAGE_STANDARD, OTHER_CPLUSPLUSFLAGS};

/// Substring identifying the core pod target. The build tool may suffix
/// the target name, so matching is containment, not equality.
pub const CORE_TARGET_SUBSTRING: &str = "Helix-Core";

/// Copy the core pod's resolved C++ language standard onto every build
/// configuration of every user project.
///
/// Best-effort: with no matching target, or no observed value on it, the
/// pass is a silent no-op. No value is ever invented.
pub fn propagate_language_standard(graph: &mut dyn BuildGraph, console: &mut dyn Console) {
    let mut standard = None;
    for target in graph.target_names() {
        if target.contains(CORE_TARGET_SUBSTRING) {
            standard = graph.resolved_setting(&target, CLANG_CXX_LANGUAGE_STANDARD);
            if standard.is_some() {
                break;
            }
        }
    }

    let Some(standard) = standard else {
        return;
    };

    for project in graph.project_names() {
        console.note(&format!(
            "Setting CLANG_CXX_LANGUAGE_STANDARD to {} on {}",
            standard, project
        ));
        for configuration in graph.project_configurations(&project) {
            graph.set_project_setting(
                &project,
                &configuration,
                CLANG_CXX_LANGUAGE_STANDARD,
                &standard,
            );
        }
    }
}

/// Merge the new-architecture flags into `OTHER_CPLUSPLUSFLAGS` of every
/// aggregate target and of the core pod's build configurations. A no-op
/// when the feature is disabled.
pub fn inject_new_arch_flags(graph: &mut dyn BuildGraph, enabled: bool) {
    if !enabled {
        return;
    }

    for target in graph.aggregate_target_names() {
        for configuration in graph.target_configurations(&target) {
            merge_new_arch_flag(graph, &target, &configuration);
        }
    }

    for target in graph.target_names() {
        if target.contains(CORE_TARGET_SUBSTRING) {
            for configuration in graph.target_configurations(&target) {
                merge_new_arch_flag(graph, &target, &configuration);
            }
        }
    }
}

fn merge_new_arch_flag(graph: &mut dyn BuildGraph, target: &str, configuration: &str) {
    let current = graph
        .target_setting(target, configuration, OTHER_CPLUSPLUSFLAGS)
        .unwrap_or_default();
    let merged = append_flags(&current, NEW_ARCH_CPP_FLAGS);
    graph.set_target_setting(target, configuration, OTHER_CPLUSPLUSFLAGS, &merged);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RecordingConsole;
    use crate::graph::MemoryBuildGraph;

    fn graph_with_core() -> MemoryBuildGraph {
        let mut graph = MemoryBuildGraph::new();
        graph.add_target("Helix-Core.common", &["Debug", "Release"]);
        graph.add_target("OtherPod", &["Debug", "Release"]);
        graph.add_project("MyApp", &["Debug", "Release"]);
        graph
    }

    #[test]
    fn test_propagates_to_all_project_configurations() {
        let mut graph = graph_with_core();
        graph.set_resolved_setting("Helix-Core.common", CLANG_CXX_LANGUAGE_STANDARD, "c++20");
        let mut console = RecordingConsole::default();

        propagate_language_standard(&mut graph, &mut console);

        for configuration in ["Debug", "Release"] {
            assert_eq!(
                graph
                    .project_setting("MyApp", configuration, CLANG_CXX_LANGUAGE_STANDARD)
                    .as_deref(),
                Some("c++20")
            );
        }
        assert_eq!(console.notes.len(), 1);
        assert!(console.notes[0].contains("c++20"));
    }

    #[test]
    fn test_no_core_target_is_a_noop() {
        let mut graph = MemoryBuildGraph::new();
        graph.add_target("OtherPod", &["Debug"]);
        graph.add_project("MyApp", &["Debug"]);
        let mut console = RecordingConsole::default();

        propagate_language_standard(&mut graph, &mut console);

        assert_eq!(graph.project_setting("MyApp", "Debug", CLANG_CXX_LANGUAGE_STANDARD), None);
        assert!(console.notes.is_empty());
    }

    #[test]
    fn test_no_observed_value_is_a_noop() {
        let mut graph = graph_with_core();
        let mut console = RecordingConsole::default();

        propagate_language_standard(&mut graph, &mut console);

        assert_eq!(graph.project_setting("MyApp", "Debug", CLANG_CXX_LANGUAGE_STANDARD), None);
    }

    #[test]
    fn test_substring_match_on_suffixed_target() {
        let mut graph = MemoryBuildGraph::new();
        graph.add_target("Helix-Core-60309c9c", &["Debug"]);
        graph.add_project("MyApp", &["Debug"]);
        graph.set_resolved_setting("Helix-Core-60309c9c", CLANG_CXX_LANGUAGE_STANDARD, "c++17");
        let mut console = RecordingConsole::default();

        propagate_language_standard(&mut graph, &mut console);

        assert_eq!(
            graph
                .project_setting("MyApp", "Debug", CLANG_CXX_LANGUAGE_STANDARD)
                .as_deref(),
            Some("c++17")
        );
    }

    #[test]
    fn test_inject_disabled_is_a_noop() {
        let mut graph = graph_with_core();
        graph.add_aggregate_target("Pods-MyApp", &["Debug"]);

        inject_new_arch_flags(&mut graph, false);

        assert_eq!(graph.target_setting("Pods-MyApp", "Debug", OTHER_CPLUSPLUSFLAGS), None);
    }

    #[test]
    fn test_inject_touches_aggregates_and_core_only() {
        let mut graph = graph_with_core();
        graph.add_aggregate_target("Pods-MyApp", &["Debug"]);

        inject_new_arch_flags(&mut graph, true);

        assert_eq!(
            graph
                .target_setting("Pods-MyApp", "Debug", OTHER_CPLUSPLUSFLAGS)
                .as_deref(),
            Some(NEW_ARCH_CPP_FLAGS)
        );
        assert_eq!(
            graph
                .target_setting("Helix-Core.common", "Debug", OTHER_CPLUSPLUSFLAGS)
                .as_deref(),
            Some(NEW_ARCH_CPP_FLAGS)
        );
        assert_eq!(graph.target_setting("OtherPod", "Debug", OTHER_CPLUSPLUSFLAGS), None);
    }

    #[test]
    fn test_inject_preserves_inherited_marker() {
        let mut graph = graph_with_core();
        graph.set_target_setting(
            "Helix-Core.common",
            "Debug",
            OTHER_CPLUSPLUSFLAGS,
            "$(inherited) -DFOO",
        );

        inject_new_arch_flags(&mut graph, true);

        let merged = graph
            .target_setting("Helix-Core.common", "Debug", OTHER_CPLUSPLUSFLAGS)
            .unwrap();
        assert!(merged.starts_with("$(inherited) -DFOO "));
        assert!(merged.ends_with(NEW_ARCH_CPP_FLAGS));
    }
}
