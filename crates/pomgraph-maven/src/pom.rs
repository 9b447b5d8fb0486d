//! POM markup mapping
//!
//! Wire structs that map `pom.xml` tags onto fields. Unrecognized elements and
//! attributes are ignored; missing strings and lists default to empty.

use serde::Deserialize;
use crate::manifest::{Coordinate, Dependency, Manifest};

/// `<project>` root element
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PomProject {
    pub parent: Option<PomParent>,
    pub modules: PomModules,
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    #[serde(rename = "groupId")]
    pub group_id: String,
    pub version: String,
    pub description: String,
    pub name: String,
    pub url: String,
    pub dependencies: PomDependencies,
}

/// `<parent>`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PomParent {
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    #[serde(rename = "groupId")]
    pub group_id: String,
    pub version: String,
}

/// `<modules><module>...</module></modules>`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PomModules {
    pub module: Vec<String>,
}

/// `<dependencies><dependency>...</dependency></dependencies>`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PomDependencies {
    pub dependency: Vec<PomDependency>,
}

/// `<dependency>`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PomDependency {
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "artifactId")]
    pub artifact_id: String,
    pub version: String,
    pub scope: String,
}

impl From<PomParent> for Coordinate {
    fn from(parent: PomParent) -> Self {
        Coordinate::new(parent.group_id, parent.artifact_id, parent.version)
    }
}

impl From<PomDependency> for Dependency {
    fn from(dep: PomDependency) -> Self {
        Dependency::new(dep.group_id, dep.artifact_id, dep.version).with_scope(dep.scope)
    }
}

impl From<PomProject> for Manifest {
    fn from(project: PomProject) -> Self {
        Manifest {
            parent: project.parent.map(Coordinate::from),
            modules: project.modules.module,
            coordinate: Coordinate::new(project.group_id, project.artifact_id, project.version),
            name: project.name,
            description: project.description,
            url: project.url,
            dependencies: project
                .dependencies
                .dependency
                .into_iter()
                .map(Dependency::from)
                .collect(),
        }
    }
}
