pub mod cache;
pub mod detector;
pub mod manifest;
pub mod validate;
pub mod watch;

pub use cache::{DetectionCache, DEFAULT_CACHE_TTL};
pub use detector::ProjectDetector;
pub use manifest::{ProjectFacts, CORE_PACKAGE, MANIFEST_FILE, NAMESPACE_PREFIX};
pub use validate::ValidationReport;
pub use watch::{ManifestWatcher, WatchError};
