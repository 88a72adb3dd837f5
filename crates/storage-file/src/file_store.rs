use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::warn;
use serde_json::Value;

use finapp_core::errors::{Result, StoreError};
use finapp_core::store::KvStore;

/// Durable [`KvStore`] backend storing each key as `<key>.json` in one
/// directory.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Opens (creating if needed) the storage directory.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .map_err(|e| StoreError::Unavailable(format!("{}: {}", dir.display(), e)))?;
        Ok(FileStore { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Maps a key to its file, rejecting anything that could escape the
    /// storage directory.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
            && !key.starts_with('.');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()).into());
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        let path = self.path_for(key)?;
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StoreError::Io(format!("{}: {}", path.display(), e)).into()),
        };

        match serde_json::from_str(&contents) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                // Unreadable documents count as absent; the collection layer
                // logs and rebuilds on the next save.
                warn!("Malformed JSON in {}: {}", path.display(), e);
                Ok(None)
            }
        }
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        let path = self.path_for(key)?;
        let contents = serde_json::to_vec_pretty(&value).map_err(|e| StoreError::Serialization {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, contents)
            .map_err(|e| StoreError::Io(format!("{}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &path)
            .map_err(|e| StoreError::Io(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::Io(format!("{}: {}", path.display(), e)).into()),
        }
    }
}
