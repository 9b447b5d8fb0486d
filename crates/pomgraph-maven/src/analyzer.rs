//! Build target analysis pipeline
//!
//! resolve target -> load manifest -> build graph. The first failure ends the run;
//! nothing is cached between calls.

use std::path::PathBuf;
use pomgraph_core::{Config, DependencyGraph};
use crate::error::Result;
use crate::graph::build_graph;
use crate::loader::ManifestLoader;
use crate::manifest::Manifest;
use crate::target::BuildTargetResolver;

/// Everything produced for one build target
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Manifest file the target resolved to
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
    pub graph: DependencyGraph,
}

/// Resolves build targets into dependency graphs
#[derive(Debug, Clone, Default)]
pub struct MavenAnalyzer {
    resolver: BuildTargetResolver,
    loader: ManifestLoader,
}

impl MavenAnalyzer {
    /// Create an analyzer from configuration
    pub fn new(config: &Config) -> Self {
        Self {
            resolver: BuildTargetResolver::from_config(&config.maven),
            loader: ManifestLoader::new(),
        }
    }

    pub fn resolver(&self) -> &BuildTargetResolver {
        &self.resolver
    }

    /// Resolve `target` and load the manifest it points to
    pub fn resolve_manifest(&self, target: &str) -> Result<(PathBuf, Manifest)> {
        let path = self.resolver.resolve(target)?;
        let manifest = self.loader.load(&path)?;
        Ok((path, manifest))
    }

    /// Run the whole pipeline for `target`
    pub fn analyze(&self, target: &str) -> Result<Analysis> {
        let (manifest_path, manifest) = self.resolve_manifest(target)?;
        let graph = build_graph(&manifest);

        tracing::info!(
            target_name = target,
            manifest = %manifest_path.display(),
            dependencies = graph.len_direct(),
            "analyzed build target"
        );

        Ok(Analysis {
            manifest_path,
            manifest,
            graph,
        })
    }
}

/// Resolve `target` with default settings and load its manifest
pub fn resolve_manifest(target: &str) -> Result<Manifest> {
    MavenAnalyzer::default()
        .resolve_manifest(target)
        .map(|(_, manifest)| manifest)
}

/// The declared dependency graph of `target` with default settings
pub fn graph_from_target(target: &str) -> Result<DependencyGraph> {
    MavenAnalyzer::default()
        .analyze(target)
        .map(|analysis| analysis.graph)
}
