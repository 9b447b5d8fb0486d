//! Maven POM analysis
//!
//! This crate handles:
//! - Resolving a build target (directory, manifest path, module identifier) to a `pom.xml`
//! - Decoding the manifest's declared fields
//! - Building the declared dependency graph
//!
//! No real dependency resolution happens here: parents are not merged, properties are
//! not interpolated, and the transitive map is the declared set.

pub mod analyzer;
pub mod decode;
pub mod error;
pub mod graph;
pub mod loader;
pub mod manifest;
pub mod pom;
pub mod target;

pub use analyzer::{graph_from_target, resolve_manifest, Analysis, MavenAnalyzer};
pub use decode::{DecodeError, ManifestDecoder, XmlDecoder};
pub use error::{LoadError, MavenError, Result};
pub use graph::build_graph;
pub use loader::ManifestLoader;
pub use manifest::{Coordinate, Dependency, Manifest, ResolutionOutcome};
pub use target::BuildTargetResolver;
