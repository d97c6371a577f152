//! File-backed session slot.
//!
//! The slot is `<dir>/<key>.json`. Writes go to a sibling temp file which is
//! fsynced and renamed over the target, so a crash never leaves a half-written
//! session behind.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use vivanz_core::error::CoreError;
use vivanz_core::session::{SessionSlot, SESSION_KEY};

use crate::error::StoreError;

#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Open the default session slot under `dir`, creating the directory.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_key(dir, SESSION_KEY)
    }

    /// Open the slot for `key` under `dir`, creating the directory.
    pub fn open_key(dir: impl AsRef<Path>, key: &str) -> Result<Self, StoreError> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;
        Ok(Self {
            path: dir.join(format!("{key}.json")),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        self.path.with_extension("json.tmp")
    }

    fn write_atomic(&self, value: &str) -> Result<(), StoreError> {
        let tmp = self.tmp_path();
        {
            let mut file = File::create(&tmp).map_err(|e| StoreError::io(&tmp, e))?;
            file.write_all(value.as_bytes())
                .map_err(|e| StoreError::io(&tmp, e))?;
            file.sync_all().map_err(|e| StoreError::io(&tmp, e))?;
        }
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))
    }
}

impl SessionSlot for FileSlot {
    fn read(&self) -> Result<Option<String>, CoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(&self.path, e).into()),
        }
    }

    fn write(&self, value: &str) -> Result<(), CoreError> {
        self.write_atomic(value)?;
        tracing::debug!(path = %self.path.display(), "Session slot written");
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "Session slot cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&self.path, e).into()),
        }
    }
}
