//! Minimal string key-value storage backed by one file per key.

use crate::errors::{AppError, AppResult};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub(crate) struct KeyValueDir {
    root: PathBuf,
}

fn unavailable(what: &str, path: &Path, e: std::io::Error) -> AppError {
    AppError::StorageUnavailable(format!("{what} {}: {e}", path.display()))
}

impl KeyValueDir {
    pub(crate) fn open(root: PathBuf) -> AppResult<Self> {
        fs::create_dir_all(&root).map_err(|e| unavailable("cannot create", &root, e))?;
        Ok(Self { root })
    }

    pub(crate) fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }

    /// `None` when the key has never been written.
    pub(crate) fn get(&self, key: &str) -> AppResult<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) if e.kind() == ErrorKind::InvalidData => Err(AppError::CorruptState(format!(
                "{} is not valid UTF-8",
                path.display()
            ))),
            Err(e) => Err(unavailable("cannot read", &path, e)),
        }
    }

    /// Write to a sibling temp file and rename over the key, so readers only
    /// ever see the old or the new value.
    pub(crate) fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value).map_err(|e| unavailable("cannot write", &tmp, e))?;
        fs::rename(&tmp, &path).map_err(|e| unavailable("cannot replace", &path, e))?;
        Ok(())
    }
}
