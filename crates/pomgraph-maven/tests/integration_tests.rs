//! Integration tests for build target analysis against fixture projects

use pomgraph_core::{DependencyGraph, PackageId};
use pomgraph_maven::{
    graph_from_target, resolve_manifest, Coordinate, LoadError, MavenAnalyzer, MavenError,
};
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../fixtures")
        .join(name)
}

fn target(path: &PathBuf) -> &str {
    path.to_str().unwrap()
}

#[test]
fn directory_and_file_targets_agree() {
    let dir = fixture("simple-project");
    let file = dir.join("pom.xml");

    let from_dir = resolve_manifest(target(&dir)).unwrap();
    let from_file = resolve_manifest(target(&file)).unwrap();

    assert_eq!(from_dir, from_file);
}

#[test]
fn simple_project_graph() {
    let graph = graph_from_target(target(&fixture("simple-project"))).unwrap();

    let direct: Vec<String> = graph.direct().iter().map(|i| i.resolved.locator()).collect();
    assert_eq!(direct, vec!["mvn+com.a:x$1.0", "mvn+com.b:y$2.0"]);

    assert_eq!(graph.len_transitive(), 2);
    assert!(graph.contains(&PackageId::maven("com.a:x", "1.0")));
    assert!(graph.contains(&PackageId::maven("com.b:y", "2.0")));
}

#[test]
fn simple_project_manifest_fields() {
    let manifest = resolve_manifest(target(&fixture("simple-project"))).unwrap();

    assert_eq!(manifest.coordinate, Coordinate::new("com.example", "simple-project", "1.0.0"));
    assert_eq!(manifest.name, "Simple Project");
    assert_eq!(manifest.description, "Two declared dependencies");
    assert_eq!(manifest.url, "https://example.com/simple-project");
    assert_eq!(manifest.dependencies[1].scope, "test");
    assert!(manifest.dependencies.iter().all(|dep| !dep.failed()));
}

#[test]
fn duplicates_preserved_in_direct_collapsed_in_transitive() {
    let graph = graph_from_target(target(&fixture("duplicate-deps"))).unwrap();

    assert_eq!(graph.len_direct(), 3);
    assert_eq!(graph.len_transitive(), 2);
    assert!(graph.contains(&PackageId::maven("com.a:x", "1.0")));
    assert!(graph.contains(&PackageId::maven("com.a:x", "1.1")));
}

#[test]
fn multi_module_carries_parent_and_modules() {
    let analysis = MavenAnalyzer::default()
        .analyze(target(&fixture("multi-module")))
        .unwrap();

    let manifest = &analysis.manifest;
    assert_eq!(manifest.parent, Some(Coordinate::new("com.example", "example-parent", "3")));
    assert_eq!(manifest.modules, vec!["core", "web"]);
    assert!(manifest.is_aggregator());

    // Managed versions are not applied: the declared version stays empty.
    assert_eq!(manifest.dependencies.len(), 1);
    assert_eq!(manifest.dependencies[0].version, "");
    assert!(analysis.graph.contains(&PackageId::maven("org.slf4j:slf4j-api", "")));
}

#[test]
fn malformed_manifest_reports_path() {
    let file = fixture("malformed").join("pom.xml");

    let err = graph_from_target(target(&file)).unwrap_err();
    assert!(matches!(err, MavenError::ManifestRead { source: LoadError::Decode(_), .. }));
    assert!(err.to_string().contains(&file.display().to_string()));
}

#[test]
fn module_identifiers_get_module_diagnosis() {
    for id in ["com.example:lib", "org.slf4j:slf4j-api", "a:b"] {
        let err = graph_from_target(id).unwrap_err();
        assert!(
            matches!(err, MavenError::ModuleIdentifierUnsupported { .. }),
            "{id} gave {err}"
        );
    }
}

#[test]
fn other_missing_targets_get_generic_diagnosis() {
    for id in ["no-such-dir", "no/such/pom.xml", "a:b:c", "x::y"] {
        let err = graph_from_target(id).unwrap_err();
        assert!(
            matches!(err, MavenError::TargetUnresolvable { .. }),
            "{id} gave {err}"
        );
    }
}

#[test]
fn graph_json_is_stable_across_runs() {
    let dir = fixture("duplicate-deps");

    // Separate builds hash their maps with different seeds.
    let first = graph_from_target(target(&dir)).unwrap();
    let second = graph_from_target(target(&dir)).unwrap();

    let first_json = serde_json::to_string(&first).unwrap();
    let second_json = serde_json::to_string(&second).unwrap();
    assert_eq!(first_json, second_json);

    let parsed: DependencyGraph = serde_json::from_str(&first_json).unwrap();
    assert_eq!(parsed, first);
}
