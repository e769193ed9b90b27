//! Durable key/value storage for the persisted session record.
//!
//! Access is synchronous and local. Callers treat every failure here as
//! "no prior session", so implementations only need to report errors, never
//! recover from them.

use anyhow::{Context, anyhow};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::errors::PortalResult;

/// Key/value store holding serialized records.
pub trait SessionStorage: Send + Sync {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> PortalResult<Option<String>>;

    /// Stores `value` under `key`, replacing any prior value.
    fn set(&self, key: &str, value: &str) -> PortalResult<()>;

    /// Deletes `key`. Removing an absent key succeeds.
    fn remove(&self, key: &str) -> PortalResult<()>;
}

/// Process-local storage. Used by tests and by embedders that do not need
/// the session to survive a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> PortalResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| anyhow!("memory storage lock poisoned").into())
    }
}

impl SessionStorage for MemoryStorage {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> PortalResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

/// File-backed storage: one `<key>.json` file per key inside `root`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Creates the storage, making sure the root directory exists.
    pub fn open(root: impl Into<PathBuf>) -> PortalResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)
            .with_context(|| format!("creating storage directory {}", root.display()))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("reading {}", path.display()))
                .into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        let path = self.path_for(key);
        fs::write(&path, value).with_context(|| format!("writing {}", path.display()))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> PortalResult<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("removing {}", path.display()))
                .into()),
        }
    }
}
