//! Structural validation of Synapse workspaces

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use synassist_core::FileSystem;

/// Required workspace paths with the message reported when one is missing.
/// Every message names the artifact and carries a copy-pasteable fix.
const REQUIRED_PATHS: &[(&str, &str)] = &[
    (
        "src",
        "Missing required 'src/' directory. Synapse projects keep their TypeScript sources there. Create it with: mkdir src",
    ),
    (
        "tsconfig.json",
        "Missing 'tsconfig.json'. Synapse requires a TypeScript configuration for type checking and compilation. Create one with: npx tsc --init",
    ),
];

/// Convention directories; absence of all of them yields a single warning.
const CONVENTION_DIRS: &[&str] = &["neurons", "circuits"];

const NOT_A_PROJECT: &str = "Not a Synapse project: no @synapse/* dependencies found in package.json. Install the framework first with: npm install @synapse/core. Visit https://github.com/kluth/synapse for more information.";

const NO_CONVENTION_DIRS: &str = "No neurons/ or circuits/ directories found. Consider organizing Synapse components in dedicated directories: neurons/ for individual processing units, circuits/ for composed neuron workflows. This improves code organization and follows Synapse best practices.";

#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Check a workspace against the expected Synapse layout.
///
/// Missing required paths accumulate; the caller sees every problem at
/// once. A failing existence probe (permissions and the like) is caught
/// here and reported as one generic error rather than propagated.
pub(crate) fn validate_workspace(
    fs: &dyn FileSystem,
    workspace: &Path,
    is_project: bool,
) -> ValidationReport {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !is_project {
        errors.push(NOT_A_PROJECT.to_string());
        return ValidationReport {
            is_valid: false,
            errors,
            warnings,
        };
    }

    if let Err(err) = check_layout(fs, workspace, &mut errors, &mut warnings) {
        errors.push(format!(
            "Validation failed unexpectedly: {:#}. This may indicate filesystem permission problems; check workspace permissions and try again.",
            err
        ));
    }

    ValidationReport {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}

fn check_layout(
    fs: &dyn FileSystem,
    workspace: &Path,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) -> Result<()> {
    for (rel, missing) in REQUIRED_PATHS {
        if !fs.try_exists(&workspace.join(rel))? {
            errors.push((*missing).to_string());
        }
    }

    let mut has_convention_dir = false;
    for dir in CONVENTION_DIRS {
        if fs.try_exists(&workspace.join(dir))? {
            has_convention_dir = true;
        }
    }
    if !has_convention_dir {
        warnings.push(NO_CONVENTION_DIRS.to_string());
    }

    Ok(())
}
