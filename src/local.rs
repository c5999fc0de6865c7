// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Device-local key-value storage.
//!
//! Stands in for browser localStorage: a directory of `<key>.json` files
//! holding serialized values. Only the friend list and the session cache
//! live here; nothing in this store is ever synchronized anywhere.

use crate::error::{AppError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File-backed local store rooted at a data directory.
#[derive(Debug, Clone)]
pub struct LocalStore {
    dir: PathBuf,
}

impl LocalStore {
    /// Open (creating if needed) a local store at the given directory.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .map_err(|e| AppError::LocalStorage(format!("{}: {}", dir.display(), e)))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read a value by key. `Ok(None)` when the key was never written.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::LocalStorage(format!("{}: {}", path.display(), e))),
        };
        let value = serde_json::from_str(&raw)
            .map_err(|e| AppError::LocalStorage(format!("{}: {}", path.display(), e)))?;
        Ok(Some(value))
    }

    /// Write a value under a key, replacing any previous value.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.path_for(key);
        let raw = serde_json::to_string(value)
            .map_err(|e| AppError::LocalStorage(format!("{}: {}", path.display(), e)))?;
        fs::write(&path, raw)
            .map_err(|e| AppError::LocalStorage(format!("{}: {}", path.display(), e)))
    }

    /// Remove a key. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::LocalStorage(format!("{}: {}", path.display(), e))),
        }
    }
}
