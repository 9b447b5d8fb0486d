//! Manifest decoding
//!
//! The decoder turns raw bytes into a [`Manifest`] using the mapping in [`crate::pom`].
//! Loaders depend on the [`ManifestDecoder`] trait only.

use crate::manifest::Manifest;
use crate::pom::PomProject;

/// Decode bytes into a manifest, or fail with a structural/format error
pub trait ManifestDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Manifest, DecodeError>;
}

/// Decoder for `pom.xml` markup
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlDecoder;

impl ManifestDecoder for XmlDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Manifest, DecodeError> {
        let text = std::str::from_utf8(bytes)?;
        let project: PomProject = quick_xml::de::from_str(text)?;
        Ok(project.into())
    }
}

/// Decoding errors
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("manifest is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("malformed manifest markup: {0}")]
    Xml(#[from] quick_xml::DeError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_project() {
        let manifest = XmlDecoder
            .decode(b"<project><groupId>com.a</groupId><artifactId>x</artifactId></project>")
            .unwrap();
        assert_eq!(manifest.id(), "com.a:x");
    }

    #[test]
    fn rejects_mismatched_tags() {
        let result = XmlDecoder.decode(b"<project><groupId>com.a</artifactId></project>");
        assert!(matches!(result, Err(DecodeError::Xml(_))));
    }

    #[test]
    fn rejects_invalid_utf8() {
        let result = XmlDecoder.decode(&[b'<', 0xff, 0xfe, b'>']);
        assert!(matches!(result, Err(DecodeError::Utf8(_))));
    }
}
