//! Watch-based cache invalidation for workspace manifests

use crate::cache::DetectionCache;
use crate::manifest::MANIFEST_FILE;
use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("Failed to subscribe to manifest changes: {0}")]
    Subscribe(#[from] notify::Error),
}

/// Filesystem subscription mapping manifest events to cache evictions.
///
/// Dropping the watcher releases the subscription; eviction is idempotent,
/// so duplicate events for the same manifest are harmless.
pub struct ManifestWatcher {
    _watcher: RecommendedWatcher,
}

impl ManifestWatcher {
    /// Watch `root` recursively for created, changed, or deleted files
    /// named `package.json`. Each event evicts the containing workspace
    /// from `cache`; the workspace path is also forwarded on `events`
    /// when a sender is given.
    pub fn new(
        root: &Path,
        cache: Arc<DetectionCache>,
        events: Option<Sender<PathBuf>>,
    ) -> Result<Self, WatchError> {
        let mut watcher =
            notify::recommended_watcher(move |result: notify::Result<Event>| match result {
                Ok(event) => handle_event(&cache, events.as_ref(), &event),
                Err(err) => warn!(error = %err, "manifest watch error"),
            })?;
        watcher.watch(root, RecursiveMode::Recursive)?;
        debug!(root = ?root, "watching for manifest changes");

        Ok(Self { _watcher: watcher })
    }
}

fn handle_event(cache: &DetectionCache, events: Option<&Sender<PathBuf>>, event: &Event) {
    if !matches!(
        event.kind,
        EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
    ) {
        return;
    }

    for path in &event.paths {
        if !path.file_name().is_some_and(|name| name == MANIFEST_FILE) {
            continue;
        }
        let Some(workspace) = path.parent() else {
            continue;
        };

        debug!(workspace = ?workspace, "manifest changed, evicting cached result");
        cache.invalidate(workspace);

        if let Some(sender) = events {
            // A closed receiver only means the host stopped listening.
            let _ = sender.send(workspace.to_path_buf());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::DEFAULT_CACHE_TTL;
    use crate::manifest::ProjectFacts;
    use notify::event::{AccessKind, ModifyKind};
    use std::sync::mpsc;

    fn cache_with(workspace: &Path) -> Arc<DetectionCache> {
        let cache = Arc::new(DetectionCache::new(DEFAULT_CACHE_TTL));
        cache.put(workspace, ProjectFacts::absent());
        cache
    }

    #[test]
    fn test_manifest_event_evicts_containing_workspace() {
        let workspace = Path::new("/workspace/app");
        let cache = cache_with(workspace);

        let event = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(workspace.join("package.json"));
        handle_event(&cache, None, &event);

        assert!(cache.get(workspace).is_none());
    }

    #[test]
    fn test_other_workspaces_are_untouched() {
        let app = Path::new("/workspace/app");
        let lib = Path::new("/workspace/lib");
        let cache = Arc::new(DetectionCache::new(DEFAULT_CACHE_TTL));
        cache.put(app, ProjectFacts::absent());
        cache.put(lib, ProjectFacts::absent());

        let event =
            Event::new(EventKind::Remove(notify::event::RemoveKind::File))
                .add_path(app.join("package.json"));
        handle_event(&cache, None, &event);

        assert!(cache.get(app).is_none());
        assert!(cache.get(lib).is_some());
    }

    #[test]
    fn test_non_manifest_files_are_ignored() {
        let workspace = Path::new("/workspace/app");
        let cache = cache_with(workspace);

        let event = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(workspace.join("tsconfig.json"));
        handle_event(&cache, None, &event);

        assert!(cache.get(workspace).is_some());
    }

    #[test]
    fn test_access_events_are_ignored() {
        let workspace = Path::new("/workspace/app");
        let cache = cache_with(workspace);

        let event = Event::new(EventKind::Access(AccessKind::Any))
            .add_path(workspace.join("package.json"));
        handle_event(&cache, None, &event);

        assert!(cache.get(workspace).is_some());
    }

    #[test]
    fn test_events_are_forwarded_to_host() {
        let workspace = Path::new("/workspace/app");
        let cache = cache_with(workspace);
        let (tx, rx) = mpsc::channel();

        let event = Event::new(EventKind::Create(notify::event::CreateKind::File))
            .add_path(workspace.join("package.json"));
        handle_event(&cache, Some(&tx), &event);

        assert_eq!(rx.try_recv().unwrap(), workspace.to_path_buf());
    }

    #[test]
    fn test_closed_receiver_does_not_panic() {
        let workspace = Path::new("/workspace/app");
        let cache = cache_with(workspace);
        let (tx, rx) = mpsc::channel();
        drop(rx);

        let event = Event::new(EventKind::Modify(ModifyKind::Any))
            .add_path(workspace.join("package.json"));
        handle_event(&cache, Some(&tx), &event);

        assert!(cache.get(workspace).is_none());
    }
}
