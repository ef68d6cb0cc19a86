//! Persistent key-value storage using redb.
//!
//! The application keeps its state the way a web page keeps `localStorage`:
//! string values under string keys, scoped to one data directory. This
//! module provides:
//! - [`KeyValueStore`]: the narrow get/set contract
//! - [`Storage`]: the redb-backed implementation
//! - [`MemoryStore`]: an in-process implementation for tests and for
//!   running without a writable data directory
//! - [`ProfileStore`]: loads and persists the [`ProfileState`](crate::ProfileState)

use crate::error::{GamerTagsError, Result};
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

// Submodules
mod memory;
mod profiles;

pub use memory::MemoryStore;
pub use profiles::{ProfileStore, PROFILE_KEY};

/// File name of the database inside the data directory
pub const DATABASE_FILE: &str = "gamertags.redb";

// Table definitions
const LOCAL_STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("local_storage");

/// String key-value store.
///
/// `set` overwrites any previous value under the same key.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the key-value table
    pub fn new(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        // Create parent directory if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                GamerTagsError::Storage(format!(
                    "cannot create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        tracing::debug!(path = %path.display(), "opened storage");

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }

    /// Open (or create) the database file inside `data_dir`.
    pub fn open_in(data_dir: impl AsRef<Path>) -> Result<Self> {
        Self::new(data_dir.as_ref().join(DATABASE_FILE))
    }
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_storage_creation() {
        let dir = tempdir().unwrap();
        let storage = Storage::open_in(dir.path());
        assert!(storage.is_ok());
        assert!(dir.path().join(DATABASE_FILE).exists());
    }

    #[test]
    fn test_creates_missing_parent_dirs() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        Storage::open_in(&nested).unwrap();
        assert!(nested.join(DATABASE_FILE).exists());
    }

    #[test]
    fn test_data_dir_blocked_by_file() {
        let dir = tempdir().unwrap();
        let occupied = dir.path().join("occupied");
        std::fs::write(&occupied, b"not a directory").unwrap();

        let err = Storage::open_in(&occupied).err().unwrap();
        assert!(matches!(err, GamerTagsError::Storage(_)), "{:?}", err);
        assert!(err.to_string().contains("cannot create data directory"));
    }

    #[test]
    fn test_get_missing_key() {
        let dir = tempdir().unwrap();
        let storage = Storage::open_in(dir.path()).unwrap();
        assert_eq!(storage.get("nothing").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let dir = tempdir().unwrap();
        let storage = Storage::open_in(dir.path()).unwrap();

        storage.set("k", "first").unwrap();
        storage.set("k", "second").unwrap();

        assert_eq!(storage.get("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempdir().unwrap();
        {
            let storage = Storage::open_in(dir.path()).unwrap();
            storage.set("k", "kept").unwrap();
        }
        let storage = Storage::open_in(dir.path()).unwrap();
        assert_eq!(storage.get("k").unwrap().as_deref(), Some("kept"));
    }
}
