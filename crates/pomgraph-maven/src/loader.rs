//! Manifest loading

use std::path::Path;
use crate::decode::{ManifestDecoder, XmlDecoder};
use crate::error::{LoadError, MavenError, Result};
use crate::manifest::Manifest;

/// Reads a manifest file and decodes it
#[derive(Debug, Clone, Default)]
pub struct ManifestLoader<D = XmlDecoder> {
    decoder: D,
}

impl ManifestLoader<XmlDecoder> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: ManifestDecoder> ManifestLoader<D> {
    /// Use a different decoder for the same file handling
    pub fn with_decoder(decoder: D) -> Self {
        Self { decoder }
    }

    /// Load the manifest at `path`.
    ///
    /// Any read or decode failure is returned with `path` attached. Field values are
    /// not validated.
    pub fn load(&self, path: &Path) -> Result<Manifest> {
        let wrap = |source: LoadError| MavenError::ManifestRead {
            path: path.to_path_buf(),
            source,
        };

        let bytes = std::fs::read(path).map_err(|e| wrap(e.into()))?;
        let manifest = self.decoder.decode(&bytes).map_err(|e| wrap(e.into()))?;

        tracing::debug!(
            manifest = %path.display(),
            dependencies = manifest.dependencies.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }
}
