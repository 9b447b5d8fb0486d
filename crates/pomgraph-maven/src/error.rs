//! Errors for manifest resolution

use crate::decode::DecodeError;
use std::path::PathBuf;

/// Errors returned by the resolve/load pipeline
#[derive(Debug, thiserror::Error)]
pub enum MavenError {
    /// Target is neither an existing path nor a recognizable module identifier
    #[error("manifest file for {target:?} cannot be read")]
    TargetUnresolvable { target: String },

    /// Target looks like `groupId:artifactId` but there is no module-to-path index
    #[error("cannot identify manifest file for module {target:?}")]
    ModuleIdentifierUnsupported { target: String },

    /// Resolved path could not be read or decoded
    #[error("failed to read manifest {}: {source}", .path.display())]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: LoadError,
    },
}

impl MavenError {
    /// True for both target failures, including the module identifier case
    pub fn is_unresolvable_target(&self) -> bool {
        matches!(
            self,
            Self::TargetUnresolvable { .. } | Self::ModuleIdentifierUnsupported { .. }
        )
    }
}

/// Underlying cause of a [`MavenError::ManifestRead`]
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Decode(#[from] DecodeError),
}

pub type Result<T> = std::result::Result<T, MavenError>;
