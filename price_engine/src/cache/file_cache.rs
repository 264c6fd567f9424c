use std::{
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use chrono::Duration;
use log::*;
use tempfile::NamedTempFile;

use crate::traits::{CacheEntry, RateCache, RateCacheError};

/// Persists the rate cache entry as a single JSON document on disk.
///
/// Every write goes to its own uniquely named temporary file in the same directory, which is then renamed over the
/// cache file. Concurrent writers therefore never share a partial file, the last rename wins, and a reader sees either
/// the previous entry or a complete new one.
#[derive(Debug, Clone)]
pub struct FileRateCache {
    path: PathBuf,
    ttl: Duration,
}

impl FileRateCache {
    pub fn new<P: Into<PathBuf>>(path: P, ttl: Duration) -> Self {
        Self { path: path.into(), ttl }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RateCache for FileRateCache {
    fn ttl(&self) -> Duration {
        self.ttl
    }

    async fn get(&self) -> Result<Option<CacheEntry>, RateCacheError> {
        let data = match tokio::fs::read(&self.path).await {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                trace!("🗃️ No rate cache at {}", self.path.display());
                return Ok(None);
            },
            Err(e) => return Err(RateCacheError::StorageError(format!("{}. {e}", self.path.display()))),
        };
        let entry = serde_json::from_slice::<CacheEntry>(&data)
            .map_err(|e| RateCacheError::CorruptEntry(format!("{}. {e}", self.path.display())))?;
        trace!("🗃️ Read {} cached rates from {}", entry.rates.len(), self.path.display());
        Ok(Some(entry))
    }

    async fn set(&self, entry: &CacheEntry) -> Result<(), RateCacheError> {
        let data = serde_json::to_vec(entry).map_err(|e| RateCacheError::CorruptEntry(e.to_string()))?;
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || replace_file(&path, &data))
            .await
            .map_err(|e| RateCacheError::StorageError(format!("{}. {e}", self.path.display())))??;
        debug!("🗃️ Saved {} rates to {}", entry.rates.len(), self.path.display());
        Ok(())
    }
}

fn storage_error(path: &Path, e: std::io::Error) -> RateCacheError {
    RateCacheError::StorageError(format!("{}. {e}", path.display()))
}

/// Writes `data` to a fresh temporary file next to `path` and renames it into place.
fn replace_file(path: &Path, data: &[u8]) -> Result<(), RateCacheError> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => parent,
        None => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| storage_error(dir, e))?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| storage_error(dir, e))?;
    tmp.write_all(data).map_err(|e| storage_error(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| storage_error(path, e.error))?;
    Ok(())
}
