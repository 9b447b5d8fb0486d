//! Dependency graph construction
//!
//! From a single POM we don't know what really depends on what, so every declared
//! dependency is listed both as a direct import and as an entry of the transitive map.
//! Packages carry no imports of their own.

use pomgraph_core::{DependencyGraph, Import, Package};
use crate::manifest::{Dependency, Manifest};

/// Build the declared dependency graph of a manifest
pub fn build_graph(manifest: &Manifest) -> DependencyGraph {
    let mut graph = DependencyGraph {
        direct: imports(&manifest.dependencies),
        ..DependencyGraph::default()
    };

    for dep in &manifest.dependencies {
        graph.insert(Package::new(dep.package_id()));
    }

    tracing::debug!(
        manifest = %manifest.coordinate,
        direct = graph.len_direct(),
        packages = graph.len_transitive(),
        "built dependency graph"
    );
    graph
}

/// One import per dependency, declaration order, duplicates kept
fn imports(deps: &[Dependency]) -> Vec<Import> {
    deps.iter()
        .map(|dep| Import::new(dep.version.clone(), dep.package_id()))
        .collect()
}
