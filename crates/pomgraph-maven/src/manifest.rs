//! POM manifest model
//!
//! Typed view of the fields a manifest declares. These types carry no parsing logic;
//! the markup mapping lives in [`crate::pom`].

use pomgraph_core::PackageId;
use std::fmt;

/// `{groupId, artifactId, version}` triple
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Coordinate {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }

    /// `groupId:artifactId`, without the version
    pub fn id(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}

/// A POM manifest (subset of fields we care about)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Manifest {
    /// Inherited manifest. Carried as data only, never merged.
    pub parent: Option<Coordinate>,

    /// Sub-module paths in declaration order. Not traversed.
    pub modules: Vec<String>,

    /// This manifest's own coordinate
    pub coordinate: Coordinate,

    pub name: String,
    pub description: String,
    pub url: String,

    /// Declared dependencies in source order, duplicates preserved
    pub dependencies: Vec<Dependency>,
}

impl Manifest {
    /// `groupId:artifactId` of this manifest
    pub fn id(&self) -> String {
        self.coordinate.id()
    }

    /// Whether the manifest lists sub-modules
    pub fn is_aggregator(&self) -> bool {
        !self.modules.is_empty()
    }

    /// Declared dependencies with the given scope, in source order
    pub fn dependencies_in_scope<'a>(&'a self, scope: &'a str) -> impl Iterator<Item = &'a Dependency> + 'a {
        self.dependencies.iter().filter(move |dep| dep.scope == scope)
    }
}

/// Outcome of resolving a dependency in a later pipeline stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionOutcome {
    Resolved,
    Failed { reason: String },
}

/// One declared dependency
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dependency {
    pub group_id: String,
    pub artifact_id: String,

    /// May be empty when the version is managed elsewhere
    pub version: String,

    /// Where the dependency is used, such as "test" or "runtime"
    pub scope: String,

    /// Set only by resolution stages outside this crate; `None` after decoding
    pub outcome: Option<ResolutionOutcome>,
}

impl Dependency {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            scope: String::new(),
            outcome: None,
        }
    }

    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Dependency identifier as `groupId:artifactId`.
    ///
    /// Consumers deduplicate on this value.
    pub fn id(&self) -> String {
        format!("{}:{}", self.group_id, self.artifact_id)
    }

    /// Package identifier for this dependency at its declared version
    pub fn package_id(&self) -> PackageId {
        PackageId::maven(self.id(), self.version.clone())
    }

    pub fn failed(&self) -> bool {
        matches!(self.outcome, Some(ResolutionOutcome::Failed { .. }))
    }
}
