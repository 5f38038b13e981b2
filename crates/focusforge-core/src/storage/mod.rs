mod config;
pub mod database;
mod persist;
pub mod snapshot;

pub use config::{AppearanceConfig, Config, CuesConfig, LoggingConfig};
pub use database::Database;
pub use persist::PersistObserver;
pub use snapshot::{decode, encode, SCHEMA_VERSION, SNAPSHOT_KEY};

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

use crate::error::StorageError;

/// Key-value medium holding the one persisted snapshot.
pub trait SnapshotStore {
    /// Raw snapshot, or `None` when nothing was ever saved.
    fn load(&self) -> Result<Option<String>, StorageError>;
    /// Replace the stored snapshot wholesale.
    fn save(&self, snapshot: &str) -> Result<(), StorageError>;
}

/// In-process store. Clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(snapshot.into()))),
        }
    }

    pub fn contents(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, snapshot: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(snapshot.to_string());
        Ok(())
    }
}

/// Returns the data directory.
///
/// `FOCUSFORGE_DATA_DIR` wins when set. Otherwise `~/.config/focusforge`, or
/// `~/.config/focusforge-dev` when `FOCUSFORGE_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("FOCUSFORGE_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");
            let env = std::env::var("FOCUSFORGE_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("focusforge-dev")
            } else {
                base_dir.join("focusforge")
            }
        }
    };

    std::fs::create_dir_all(&dir).map_err(StorageError::DataDir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_slot() {
        let store = MemoryStore::new();
        let handle = store.clone();
        assert!(store.load().unwrap().is_none());
        handle.save("{}").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("{}"));
    }
}
