//! High score persistence
//!
//! The high score lives in a plain key/value store as a stringified integer,
//! under a fixed key shared by every game instance. Storage trouble never
//! stops a game: unreadable values count as zero and failed writes leave the
//! record in memory for the rest of the session.

use anyhow::{Context, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::rc::Rc;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// One file per key inside a data directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err).with_context(|| format!("Failed to read {:?}", path)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create directory: {:?}", self.dir))?;

        let path = self.path_for(key);
        std::fs::write(&path, value).with_context(|| format!("Failed to write {:?}", path))
    }
}

/// In-memory store; clones share the same map
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Best score across sessions, backed by a store
pub struct HighScoreRecord {
    store: Box<dyn KeyValueStore>,
    key: String,
    value: u32,
}

impl HighScoreRecord {
    /// Read the stored record, treating anything unusable as zero
    pub fn load(store: Box<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        let key = key.into();
        let value = read_value(store.as_ref(), &key).unwrap_or_else(|err| {
            log::warn!("High score unavailable, starting from zero: {:#}", err);
            0
        });

        Self { store, key, value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Offer a final score; returns true when it beats the record.
    ///
    /// The store is read again first, so a record written by another game
    /// sharing the key is never overwritten by a lower score. A failed read
    /// falls back to the value in memory and a failed write keeps the new
    /// value in memory.
    pub fn submit(&mut self, score: u32) -> bool {
        match read_value(self.store.as_ref(), &self.key) {
            Ok(stored) => self.value = self.value.max(stored),
            Err(err) => log::debug!("Comparing against the high score in memory: {:#}", err),
        }

        if score <= self.value {
            return false;
        }

        self.value = score;
        if let Err(err) = self.store.set(&self.key, &score.to_string()) {
            log::warn!("Failed to persist high score {}: {:#}", score, err);
        }
        true
    }
}

/// Stored value under `key`; a missing or malformed entry reads as zero
fn read_value(store: &dyn KeyValueStore, key: &str) -> Result<u32> {
    let Some(raw) = store.get(key)? else {
        return Ok(0);
    };

    Ok(raw.trim().parse().unwrap_or_else(|_| {
        log::warn!("Ignoring malformed high score {:?} under {:?}", raw, key);
        0
    }))
}
