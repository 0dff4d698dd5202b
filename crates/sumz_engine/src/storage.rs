use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, PoisonError};

use crate::persist::{AtomicFileWriter, PersistError};

/// Named-slot string storage: each key holds one whole value.
pub trait KeyValueStorage: Send {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError>;
}

/// One file per key, `{dir}/{key}.json`, replaced atomically on every write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    writer: AtomicFileWriter,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            writer: AtomicFileWriter::new(dir.into()),
        }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.writer.dir().join(file_name(key))
    }
}

fn file_name(key: &str) -> String {
    format!("{key}.json")
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.writer.write(&file_name(key), value)?;
        Ok(())
    }
}

/// In-process storage. Clones share the same slots.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage whose `key` slot already holds `value`.
    pub fn with_item(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.insert(key, value);
        storage
    }

    fn insert(&self, key: &str, value: &str) {
        self.items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, PersistError> {
        Ok(self
            .items
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), PersistError> {
        self.insert(key, value);
        Ok(())
    }
}
