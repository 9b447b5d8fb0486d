//! Dependency graph record
//!
//! The output handed to downstream consumers.
//!
//! A graph built from a single manifest cannot tell what depends on what beyond the
//! manifest's own declarations. In that case `transitive` is a pseudo-closure: it holds
//! exactly the declared set, and every package in it has no known imports. Consumers
//! must not read depth information out of it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use crate::package::{Import, Package, PackageId};

/// Declared dependencies of one build unit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGraph {
    /// Direct imports, in declaration order, duplicates preserved
    pub direct: Vec<Import>,

    /// Every known package keyed by its identifier.
    ///
    /// Encoded as an array of packages sorted by id, since identifiers are not string keys.
    #[serde(with = "transitive_entries")]
    pub transitive: HashMap<PackageId, Package>,
}

impl DependencyGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Direct imports in declaration order
    pub fn direct(&self) -> &[Import] {
        &self.direct
    }

    /// All packages keyed by identifier
    pub fn transitive(&self) -> &HashMap<PackageId, Package> {
        &self.transitive
    }

    /// Number of direct imports (duplicates counted)
    pub fn len_direct(&self) -> usize {
        self.direct.len()
    }

    /// Number of distinct packages
    pub fn len_transitive(&self) -> usize {
        self.transitive.len()
    }

    pub fn is_empty(&self) -> bool {
        self.direct.is_empty() && self.transitive.is_empty()
    }

    /// Check if a package is part of the graph
    pub fn contains(&self, id: &PackageId) -> bool {
        self.transitive.contains_key(id)
    }

    /// Get a package record by identifier
    pub fn get(&self, id: &PackageId) -> Option<&Package> {
        self.transitive.get(id)
    }

    /// Insert or overwrite the record for `package.id`
    pub fn insert(&mut self, package: Package) -> Option<Package> {
        self.transitive.insert(package.id.clone(), package)
    }

    /// Packages sorted by identifier, for stable output
    pub fn packages_sorted(&self) -> Vec<&Package> {
        let mut packages: Vec<&Package> = self.transitive.values().collect();
        packages.sort_by(|a, b| a.id.cmp(&b.id));
        packages
    }
}

mod transitive_entries {
    use super::{Package, PackageId};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    pub fn serialize<S>(map: &HashMap<PackageId, Package>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut packages: Vec<&Package> = map.values().collect();
        packages.sort_by(|a, b| a.id.cmp(&b.id));
        packages.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<PackageId, Package>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let packages = Vec::<Package>::deserialize(deserializer)?;
        Ok(packages
            .into_iter()
            .map(|package| (package.id.clone(), package))
            .collect())
    }
}
