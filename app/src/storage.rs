//! Persistence layer.
//!
//! The event collection and the current session are each serialized as a
//! single opaque JSON blob under a fixed key in a key-value store, exactly
//! mirroring the browser-local-storage model this demo replaces: whole
//! collection overwrites, no schema versioning, no migration. The implicit
//! transaction is the entire collection at save time, which is sound only
//! because the store runtime is the single writer.

use crate::seed;
use crate::types::{Event, User};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Fixed key for the serialized event collection
pub const EVENTS_KEY: &str = "eh_events";

/// Fixed key for the serialized session
pub const SESSION_KEY: &str = "eh_user";

/// Errors produced by the persistence layer
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the underlying store failed
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A blob could not be serialized
    #[error("storage serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Key-value store of opaque string blobs
///
/// The local-storage abstraction: fixed keys, whole-value reads and writes.
pub trait KeyValueStore: Send + Sync {
    /// Read the blob stored under a key, if any
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store a blob under a key, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be written.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the blob stored under a key; removing a missing key is fine
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying store cannot be written.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory store, used by tests and the default demo setup
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    /// Creates an empty in-memory store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an Arc-wrapped instance for sharing
    #[must_use]
    pub fn shared() -> Arc<dyn KeyValueStore> {
        Arc::new(Self::new())
    }

    /// Lock the map, recovering from a poisoned lock
    ///
    /// A panic while holding the lock leaves the map intact, so continuing
    /// with the inner value is safe.
    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.lock().remove(key);
        Ok(())
    }
}

/// File-backed store: one JSON file per key under a directory
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at the given directory, creating it if needed
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StorageError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Path of the file backing a key
    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        std::fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match std::fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Typed persistence facade over a [`KeyValueStore`]
///
/// Loads never fail the caller: a missing events blob yields the built-in
/// seed dataset, a missing session blob yields "not logged in", and a
/// corrupt or unreadable blob is logged and treated as missing so a bad
/// write can never brick the app.
#[derive(Clone)]
pub struct AppStorage {
    kv: Arc<dyn KeyValueStore>,
}

impl AppStorage {
    /// Wrap a key-value store
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Creates storage over a fresh in-memory store
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::shared())
    }

    /// Load the event collection, defaulting to the seed dataset
    #[must_use]
    pub fn load_events(&self) -> Vec<Event> {
        match self.kv.get(EVENTS_KEY) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(events) => events,
                Err(error) => {
                    tracing::warn!(%error, "corrupt events blob, using seed dataset");
                    seed::initial_events()
                },
            },
            Ok(None) => seed::initial_events(),
            Err(error) => {
                tracing::warn!(%error, "failed to read events blob, using seed dataset");
                seed::initial_events()
            },
        }
    }

    /// Persist the full event collection as one blob
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the underlying write fails.
    pub fn save_events(&self, events: &[Event]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(events)?;
        self.kv.put(EVENTS_KEY, &blob)
    }

    /// Load the current session, if any
    #[must_use]
    pub fn load_session(&self) -> Option<User> {
        match self.kv.get(SESSION_KEY) {
            Ok(Some(blob)) => match serde_json::from_str(&blob) {
                Ok(user) => Some(user),
                Err(error) => {
                    tracing::warn!(%error, "corrupt session blob, treating as logged out");
                    None
                },
            },
            Ok(None) => None,
            Err(error) => {
                tracing::warn!(%error, "failed to read session blob, treating as logged out");
                None
            },
        }
    }

    /// Persist the current session
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the underlying write fails.
    pub fn save_session(&self, user: &User) -> Result<(), StorageError> {
        let blob = serde_json::to_string(user)?;
        self.kv.put(SESSION_KEY, &blob)
    }

    /// Remove the persisted session
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying write fails.
    pub fn clear_session(&self) -> Result<(), StorageError> {
        self.kv.remove(SESSION_KEY)
    }
}

impl std::fmt::Debug for AppStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppStorage").finish_non_exhaustive()
    }
}
