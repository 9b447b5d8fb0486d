//! Build target resolution
//!
//! Turns a caller-supplied target string into the path of a manifest file.
//! A target is one of:
//! - a directory containing the manifest (conventionally `pom.xml`)
//! - a path to the manifest file itself
//! - a module identifier (`groupId:artifactId`), which is rejected
//!
//! The module identifier check counts colons only, so any non-existent target with
//! exactly one colon (including some malformed paths) gets the module diagnosis.

use std::path::PathBuf;
use pomgraph_core::{MavenConfig, DEFAULT_MANIFEST_NAME};
use crate::error::{MavenError, Result};

/// Maps build targets to manifest paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTargetResolver {
    manifest_name: String,
}

impl Default for BuildTargetResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MANIFEST_NAME)
    }
}

impl BuildTargetResolver {
    /// Create a resolver that appends `manifest_name` to directory targets
    pub fn new(manifest_name: impl Into<String>) -> Self {
        Self {
            manifest_name: manifest_name.into(),
        }
    }

    pub fn from_config(config: &MavenConfig) -> Self {
        Self::new(config.manifest_name.clone())
    }

    pub fn manifest_name(&self) -> &str {
        &self.manifest_name
    }

    /// Resolve `target` to a manifest path.
    ///
    /// Performs a single stat; the manifest itself is not opened.
    pub fn resolve(&self, target: &str) -> Result<PathBuf> {
        let metadata = match std::fs::metadata(target) {
            Ok(metadata) => metadata,
            Err(err) => {
                tracing::debug!(build_target = target, error = %err, "build target is not a path");
                return Err(classify_missing(target));
            }
        };

        let path = if metadata.is_dir() {
            PathBuf::from(target).join(&self.manifest_name)
        } else {
            PathBuf::from(target)
        };

        tracing::debug!(build_target = target, manifest = %path.display(), "resolved build target");
        Ok(path)
    }
}

fn classify_missing(target: &str) -> MavenError {
    if target.matches(':').count() == 1 {
        MavenError::ModuleIdentifierUnsupported {
            target: target.to_string(),
        }
    } else {
        MavenError::TargetUnresolvable {
            target: target.to_string(),
        }
    }
}
