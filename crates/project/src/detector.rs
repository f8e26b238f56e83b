//! Synapse project detection with cached manifest analysis

use crate::cache::{DetectionCache, DEFAULT_CACHE_TTL};
use crate::manifest::{analyze_manifest, ProjectFacts};
use crate::validate::{validate_workspace, ValidationReport};
use crate::watch::{ManifestWatcher, WatchError};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Duration;
use synassist_core::FileSystem;
use tracing::debug;

/// Detects and validates Synapse projects per workspace.
///
/// Results are cached for the TTL window and evicted when the watch
/// subscription reports a manifest change. The detector owns both the
/// cache and the subscription; [`ProjectDetector::dispose`] releases them.
pub struct ProjectDetector {
    fs: Arc<dyn FileSystem>,
    cache: Arc<DetectionCache>,
    watcher: Option<ManifestWatcher>,
}

impl ProjectDetector {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self::with_ttl(fs, DEFAULT_CACHE_TTL)
    }

    pub fn with_ttl(fs: Arc<dyn FileSystem>, ttl: Duration) -> Self {
        Self {
            fs,
            cache: Arc::new(DetectionCache::new(ttl)),
            watcher: None,
        }
    }

    /// Subscribe to manifest changes under `root`, evicting the affected
    /// workspace from the cache on every create/change/delete event.
    pub fn watch_manifests(&mut self, root: &Path) -> Result<(), WatchError> {
        self.watcher = Some(ManifestWatcher::new(root, Arc::clone(&self.cache), None)?);
        Ok(())
    }

    /// Like [`ProjectDetector::watch_manifests`], additionally forwarding
    /// each invalidated workspace path to `events`.
    pub fn watch_manifests_with_events(
        &mut self,
        root: &Path,
        events: Sender<PathBuf>,
    ) -> Result<(), WatchError> {
        self.watcher = Some(ManifestWatcher::new(
            root,
            Arc::clone(&self.cache),
            Some(events),
        )?);
        Ok(())
    }

    fn facts(&self, workspace: &Path) -> ProjectFacts {
        if let Some(facts) = self.cache.get(workspace) {
            return facts;
        }

        debug!(workspace = ?workspace, "analyzing workspace manifest");
        let facts = analyze_manifest(self.fs.as_ref(), workspace);
        self.cache.put(workspace, facts.clone());
        facts
    }

    /// Whether the workspace manifest declares any `@synapse/*` dependency.
    pub fn is_synapse_project(&self, workspace: &Path) -> bool {
        self.facts(workspace).is_project
    }

    /// The declared range of `@synapse/core`, if present.
    pub fn synapse_version(&self, workspace: &Path) -> Option<String> {
        self.facts(workspace).version
    }

    /// All `@synapse/*` dependencies across both manifest sections.
    pub fn all_synapse_dependencies(&self, workspace: &Path) -> HashMap<String, String> {
        self.facts(workspace).dependencies
    }

    /// Check the workspace against the expected Synapse project layout.
    pub fn validate_structure(&self, workspace: &Path) -> ValidationReport {
        let is_project = self.is_synapse_project(workspace);
        validate_workspace(self.fs.as_ref(), workspace, is_project)
    }

    /// Drop the cached result for one workspace.
    pub fn invalidate(&self, workspace: &Path) {
        self.cache.invalidate(workspace);
    }

    pub fn cached_workspaces(&self) -> usize {
        self.cache.len()
    }

    /// Release the watch subscription and clear the cache. Safe to call
    /// more than once; also run on drop.
    pub fn dispose(&mut self) {
        self.watcher = None;
        self.cache.clear();
    }
}

impl Drop for ProjectDetector {
    fn drop(&mut self) {
        self.dispose();
    }
}
