//! TTL cache for per-workspace detection results

use crate::manifest::ProjectFacts;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use std::time::{Duration, Instant};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
struct CacheSlot {
    facts: ProjectFacts,
    stored_at: Instant,
}

/// Keyed store of analyzed manifests with lazy, read-time expiry.
///
/// Mutation is a single map insertion or removal behind the lock, so the
/// watcher thread and query callers observe pre- or post-update state only.
pub struct DetectionCache {
    slots: RwLock<HashMap<PathBuf, CacheSlot>>,
    ttl: Duration,
}

impl DetectionCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    /// Returns the cached facts for `workspace` if still fresh; evicts
    /// and returns `None` once the entry has outlived the TTL.
    pub fn get(&self, workspace: &Path) -> Option<ProjectFacts> {
        let expired = {
            let slots = self.slots.read().ok()?;
            match slots.get(workspace) {
                Some(slot) if slot.stored_at.elapsed() <= self.ttl => {
                    return Some(slot.facts.clone())
                }
                Some(_) => true,
                None => false,
            }
        };

        if expired {
            self.invalidate(workspace);
        }
        None
    }

    pub fn put(&self, workspace: &Path, facts: ProjectFacts) {
        if let Ok(mut slots) = self.slots.write() {
            slots.insert(
                workspace.to_path_buf(),
                CacheSlot {
                    facts,
                    stored_at: Instant::now(),
                },
            );
        }
    }

    pub fn invalidate(&self, workspace: &Path) {
        if let Ok(mut slots) = self.slots.write() {
            slots.remove(workspace);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slots) = self.slots.write() {
            slots.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.slots.read().map(|s| s.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn sample_facts() -> ProjectFacts {
        let mut dependencies = HashMap::new();
        dependencies.insert("@synapse/core".to_string(), "^1.0.0".to_string());
        ProjectFacts {
            is_project: true,
            version: Some("^1.0.0".to_string()),
            dependencies,
        }
    }

    #[test]
    fn test_put_and_get() {
        let cache = DetectionCache::new(DEFAULT_CACHE_TTL);
        let workspace = Path::new("/workspace/app");

        assert!(cache.get(workspace).is_none());

        cache.put(workspace, sample_facts());
        assert_eq!(cache.get(workspace), Some(sample_facts()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_expired_entry_is_evicted() {
        let cache = DetectionCache::new(Duration::from_millis(10));
        let workspace = Path::new("/workspace/app");

        cache.put(workspace, sample_facts());
        thread::sleep(Duration::from_millis(30));

        assert!(cache.get(workspace).is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_put_refreshes_timestamp() {
        let cache = DetectionCache::new(Duration::from_millis(50));
        let workspace = Path::new("/workspace/app");

        cache.put(workspace, sample_facts());
        thread::sleep(Duration::from_millis(30));
        cache.put(workspace, sample_facts());
        thread::sleep(Duration::from_millis(30));

        assert_eq!(cache.get(workspace), Some(sample_facts()));
    }

    #[test]
    fn test_invalidate() {
        let cache = DetectionCache::new(DEFAULT_CACHE_TTL);
        let app = Path::new("/workspace/app");
        let lib = Path::new("/workspace/lib");

        cache.put(app, sample_facts());
        cache.put(lib, ProjectFacts::absent());

        cache.invalidate(app);

        assert!(cache.get(app).is_none());
        assert_eq!(cache.get(lib), Some(ProjectFacts::absent()));
    }

    #[test]
    fn test_invalidate_missing_entry_is_a_no_op() {
        let cache = DetectionCache::new(DEFAULT_CACHE_TTL);
        cache.invalidate(Path::new("/workspace/absent"));
        assert!(cache.is_empty());
    }

    #[test]
    fn test_clear() {
        let cache = DetectionCache::new(DEFAULT_CACHE_TTL);
        cache.put(Path::new("/a"), sample_facts());
        cache.put(Path::new("/b"), ProjectFacts::absent());

        cache.clear();

        assert!(cache.is_empty());
    }

    #[test]
    fn test_cross_thread_invalidation() {
        let cache = Arc::new(DetectionCache::new(DEFAULT_CACHE_TTL));
        let workspace = PathBuf::from("/workspace/app");

        cache.put(&workspace, sample_facts());

        let cache_clone = Arc::clone(&cache);
        let key = workspace.clone();
        let handle = thread::spawn(move || {
            cache_clone.invalidate(&key);
        });
        handle.join().unwrap();

        assert!(cache.get(&workspace).is_none());
    }
}
