//! Key-value store for orders, registered accounts and the session
//!
//! Every key is stored under a `landbridge_` prefix. The directory backend
//! keeps one pretty-printed JSON file per key; the memory backend is used by
//! tests and throwaway sessions.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use landbridge_types::{Result, StorageError};

const KEY_PREFIX: &str = "landbridge_";

#[derive(Debug, Clone)]
enum Backend {
    Directory(PathBuf),
    Memory(Rc<RefCell<HashMap<String, String>>>),
}

/// Typed key-value store. Clones share the same underlying data.
#[derive(Debug, Clone)]
pub struct Store {
    backend: Backend,
}

impl Store {
    /// Create or open a directory-backed store
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        debug!(dir = %store_dir.display(), "opened store");
        Ok(Self {
            backend: Backend::Directory(store_dir),
        })
    }

    /// Create an empty in-memory store
    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(Rc::new(RefCell::new(HashMap::new()))),
        }
    }

    /// Directory holding the store files, if directory-backed
    pub fn dir(&self) -> Option<&Path> {
        match &self.backend {
            Backend::Directory(dir) => Some(dir),
            Backend::Memory(_) => None,
        }
    }

    fn storage_key(key: &str) -> String {
        format!("{}{}", KEY_PREFIX, key)
    }

    fn file_path(dir: &Path, key: &str) -> PathBuf {
        dir.join(format!("{}.json", Self::storage_key(key)))
    }

    /// Read and decode a value. Missing keys yield `None`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let corrupted = |e: serde_json::Error| StorageError::Corrupted {
            key: key.to_string(),
            reason: e.to_string(),
        };

        match &self.backend {
            Backend::Directory(dir) => {
                let path = Self::file_path(dir, key);
                let file = match File::open(&path) {
                    Ok(file) => file,
                    Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
                    Err(e) => return Err(StorageError::IoError(e.to_string()).into()),
                };
                let value = serde_json::from_reader(BufReader::new(file)).map_err(corrupted)?;
                Ok(Some(value))
            }
            Backend::Memory(map) => match map.borrow().get(&Self::storage_key(key)) {
                Some(raw) => Ok(Some(serde_json::from_str(raw).map_err(corrupted)?)),
                None => Ok(None),
            },
        }
    }

    /// Encode and write a value, replacing any previous one
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        match &self.backend {
            Backend::Directory(dir) => {
                let path = Self::file_path(dir, key);
                let file =
                    File::create(&path).map_err(|e| StorageError::IoError(e.to_string()))?;
                let writer = BufWriter::new(file);
                serde_json::to_writer_pretty(writer, value)?;
            }
            Backend::Memory(map) => {
                let raw = serde_json::to_string(value)?;
                map.borrow_mut().insert(Self::storage_key(key), raw);
            }
        }
        debug!(key, "stored value");
        Ok(())
    }

    /// Remove a key. Removing a missing key is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        match &self.backend {
            Backend::Directory(dir) => match fs::remove_file(Self::file_path(dir, key)) {
                Ok(()) => Ok(()),
                Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
                Err(e) => Err(StorageError::IoError(e.to_string()).into()),
            },
            Backend::Memory(map) => {
                map.borrow_mut().remove(&Self::storage_key(key));
                Ok(())
            }
        }
    }

    /// List stored keys (without prefix), sorted
    pub fn list(&self) -> Result<Vec<String>> {
        let mut keys: Vec<String> = match &self.backend {
            Backend::Directory(dir) => {
                let mut keys = Vec::new();
                for entry in fs::read_dir(dir)? {
                    let name = entry?.file_name().to_string_lossy().into_owned();
                    if let Some(key) = name
                        .strip_prefix(KEY_PREFIX)
                        .and_then(|rest| rest.strip_suffix(".json"))
                    {
                        keys.push(key.to_string());
                    }
                }
                keys
            }
            Backend::Memory(map) => map
                .borrow()
                .keys()
                .filter_map(|k| k.strip_prefix(KEY_PREFIX).map(str::to_string))
                .collect(),
        };
        keys.sort();
        Ok(keys)
    }

    /// Read a value, falling back to `T::default()` when missing.
    pub fn get_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T> {
        Ok(self.get(key)?.unwrap_or_default())
    }
}
