//! The persistence port and its adapters.
//!
//! The store never touches the filesystem directly: it talks to a single opaque
//! key-value slot through the [`KeyValueSlot`] trait. Two adapters are provided:
//!
//! - [`FileSlot`]: one `<key>.json` file under a data directory, payload stored
//!   verbatim. The concrete adapter used by the CLI.
//! - [`MemorySlot`]: a shared in-memory map, for tests and embedding.
//!
//! Adapters report I/O failures; the *policy* for those failures (degrade to
//! empty on read, log-and-continue on write) lives in the store, not here.

use crate::error::{StoryError, StoryResult};
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::{fmt, fs};

/// A single opaque key-value persistence slot.
pub trait KeyValueSlot {
    /// Reads the payload stored under `key`, or `None` if the slot is absent.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::SlotRead`] if the slot exists but cannot be read.
    fn read(&self, key: &str) -> StoryResult<Option<String>>;

    /// Writes `payload` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StoryError::StorageDirCreation`] or [`StoryError::SlotWrite`]
    /// if the payload cannot be stored.
    fn write(&mut self, key: &str, payload: &str) -> StoryResult<()>;
}

/// File-backed slot adapter.
///
/// Each key maps to `<data_dir>/<key>.json`. The data directory is created on
/// first write, not at construction, so opening a store against a directory
/// that does not exist yet reads as empty rather than failing.
#[derive(Debug, Clone)]
pub struct FileSlot {
    data_dir: PathBuf,
}

impl FileSlot {
    /// Creates a slot adapter rooted at `data_dir`.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the file path backing `key`.
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }

    /// Returns the data directory this adapter is rooted at.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

impl KeyValueSlot for FileSlot {
    fn read(&self, key: &str) -> StoryResult<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoryError::SlotRead(e)),
        }
    }

    fn write(&mut self, key: &str, payload: &str) -> StoryResult<()> {
        fs::create_dir_all(&self.data_dir).map_err(StoryError::StorageDirCreation)?;
        fs::write(self.slot_path(key), payload).map_err(StoryError::SlotWrite)
    }
}

/// In-memory slot adapter backed by a shared map.
///
/// Clones share the same underlying map, so a test can hand one handle to a
/// store and keep another to inspect what was persisted, or to reopen a second
/// store over the same data (simulating a reload).
#[derive(Clone, Default)]
pub struct MemorySlot {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlot {
    /// Creates an empty in-memory slot.
    pub fn new() -> Self {
        Self::default()
    }
}

impl fmt::Debug for MemorySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySlot").finish_non_exhaustive()
    }
}

impl KeyValueSlot for MemorySlot {
    fn read(&self, key: &str) -> StoryResult<Option<String>> {
        let entries = self.entries.lock().expect("memory slot lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, payload: &str) -> StoryResult<()> {
        let mut entries = self.entries.lock().expect("memory slot lock poisoned");
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
