//! pomgraph Core
//!
//! Package model, dependency graph record and configuration shared by the analyzers.
//! Never rename `PackageType` string forms - they are part of the locator format.

pub mod package;
pub mod graph;
pub mod config;

pub use package::{Import, Package, PackageId, PackageType};
pub use graph::DependencyGraph;
pub use config::{Config, ConfigError, MavenConfig, OutputConfig, OutputFormat, DEFAULT_CONFIG_FILE, DEFAULT_MANIFEST_NAME};
