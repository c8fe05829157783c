//! Shared, reloadable configuration.

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

/// Cheap-to-clone handle to the active [`Config`] and the file it came from.
#[derive(Clone)]
pub struct ConfigStore {
    current: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            current: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Snapshot of the active config.
    pub fn get(&self) -> Config {
        self.current.read().clone()
    }

    /// Re-reads the file. A file that fails to load or validate leaves the
    /// active config untouched.
    pub fn reload(&self) -> Result<Config, ConfigError> {
        let fresh = Config::load_from(&self.path)?;
        *self.current.write() = fresh.clone();
        tracing::info!(path = %self.path.display(), "config reloaded");
        Ok(fresh)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
