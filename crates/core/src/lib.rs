pub mod config;
pub mod fs;

pub use config::{ConfigError, SynassistConfig};
pub use fs::{FileSystem, MockFileSystem, RealFileSystem};
