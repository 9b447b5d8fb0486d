//! Package identifiers and records
//!
//! These types are shared with the surrounding analysis tool.
//! The string forms of `PackageType` are part of the locator format - do not rename them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Package ecosystem tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum PackageType {
    /// Maven coordinate (`groupId:artifactId`)
    Maven,
}

impl PackageType {
    /// Get the package type as a stable locator prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Maven => "mvn",
        }
    }
}

impl fmt::Display for PackageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity of a package: type tag, name and revision
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PackageId {
    /// Ecosystem the name belongs to
    #[serde(rename = "type")]
    pub package_type: PackageType,

    /// Package name (for Maven, `groupId:artifactId`)
    pub name: String,

    /// Revision as declared; may be empty
    pub revision: String,
}

impl PackageId {
    /// Create a new package identifier
    pub fn new(package_type: PackageType, name: impl Into<String>, revision: impl Into<String>) -> Self {
        Self {
            package_type,
            name: name.into(),
            revision: revision.into(),
        }
    }

    /// Shorthand for a Maven package identifier
    pub fn maven(name: impl Into<String>, revision: impl Into<String>) -> Self {
        Self::new(PackageType::Maven, name, revision)
    }

    /// Render as `type+name$revision`
    pub fn locator(&self) -> String {
        format!("{}+{}${}", self.package_type, self.name, self.revision)
    }
}

impl fmt::Display for PackageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.locator())
    }
}

/// A reference from the analysed project to a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Import {
    /// Requirement as written in the manifest (empty when the version is managed elsewhere)
    pub target: String,

    /// Package the requirement was mapped to
    pub resolved: PackageId,
}

impl Import {
    pub fn new(target: impl Into<String>, resolved: PackageId) -> Self {
        Self {
            target: target.into(),
            resolved,
        }
    }
}

/// A package record in a dependency graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    pub id: PackageId,

    /// Packages this package imports.
    ///
    /// Empty when the source cannot tell what depends on what.
    #[serde(default)]
    pub imports: Vec<Import>,
}

impl Package {
    /// Create a package record with no known imports
    pub fn new(id: PackageId) -> Self {
        Self {
            id,
            imports: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locator_format() {
        let id = PackageId::maven("com.example:lib", "1.2.3");
        assert_eq!(id.locator(), "mvn+com.example:lib$1.2.3");
        assert_eq!(id.to_string(), "mvn+com.example:lib$1.2.3");
    }

    #[test]
    fn locator_with_empty_revision() {
        let id = PackageId::maven("com.example:lib", "");
        assert_eq!(id.locator(), "mvn+com.example:lib$");
    }

    #[test]
    fn ids_differ_by_revision() {
        let a = PackageId::maven("com.a:x", "1.0");
        let b = PackageId::maven("com.a:x", "2.0");
        assert_ne!(a, b);
        assert!(a < b);
    }

    #[test]
    fn package_type_serializes_lowercase() {
        let json = serde_json::to_string(&PackageType::Maven).unwrap();
        assert_eq!(json, "\"maven\"");
    }

    #[test]
    fn new_package_has_no_imports() {
        let package = Package::new(PackageId::maven("com.a:x", "1.0"));
        assert!(package.imports.is_empty());
    }
}
