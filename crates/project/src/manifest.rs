//! Manifest analysis for Synapse project membership

use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use synassist_core::FileSystem;
use tracing::debug;

/// Dependency-declaration file expected at each workspace root.
pub const MANIFEST_FILE: &str = "package.json";

/// Prefix identifying packages that belong to the Synapse framework.
pub const NAMESPACE_PREFIX: &str = "@synapse/";

/// Package whose declared range is reported as the framework version.
pub const CORE_PACKAGE: &str = "@synapse/core";

#[derive(Debug, Default, Deserialize)]
struct PackageManifest {
    #[serde(default)]
    dependencies: HashMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: HashMap<String, String>,
}

/// Facts derived from one workspace manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFacts {
    pub is_project: bool,
    pub version: Option<String>,
    pub dependencies: HashMap<String, String>,
}

impl ProjectFacts {
    /// The fail-closed value: an unreadable or malformed manifest counts
    /// as "not a Synapse project", with no error surfaced.
    pub fn absent() -> Self {
        Self {
            is_project: false,
            version: None,
            dependencies: HashMap::new(),
        }
    }
}

/// Read and analyze the manifest at `workspace`.
///
/// Any read or parse failure degrades to [`ProjectFacts::absent`] so a
/// broken manifest never interrupts the host.
pub fn analyze_manifest(fs: &dyn FileSystem, workspace: &Path) -> ProjectFacts {
    let manifest_path = workspace.join(MANIFEST_FILE);

    let content = match fs.read_to_string(&manifest_path) {
        Ok(content) => content,
        Err(err) => {
            debug!(path = ?manifest_path, error = %err, "manifest unreadable");
            return ProjectFacts::absent();
        }
    };

    let manifest: PackageManifest = match serde_json::from_str(&content) {
        Ok(manifest) => manifest,
        Err(err) => {
            debug!(path = ?manifest_path, error = %err, "manifest malformed");
            return ProjectFacts::absent();
        }
    };

    // Production entries win over devDependencies on key collision.
    let mut merged = manifest.dev_dependencies;
    merged.extend(manifest.dependencies);

    // Version is looked up in the merged map, before namespace filtering.
    let version = merged.get(CORE_PACKAGE).cloned();

    let dependencies: HashMap<String, String> = merged
        .into_iter()
        .filter(|(name, _)| name.starts_with(NAMESPACE_PREFIX))
        .collect();

    ProjectFacts {
        is_project: !dependencies.is_empty(),
        version,
        dependencies,
    }
}
