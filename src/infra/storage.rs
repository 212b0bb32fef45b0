//! Durable key/value storage.
//!
//! The client persists two small strings between runs: the session token
//! and the theme preference. Backends are synchronous; they are only touched
//! while holding the token store lock, never across an await point.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tempfile::NamedTempFile;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

#[cfg(test)]
use mockall::automock;

/// String key/value store surviving process restarts.
///
/// Reads never fail: an unreadable store behaves as an empty one.
#[cfg_attr(test, automock)]
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`; removing a missing key is not an error
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// Pick the backend for a configuration
pub fn open(config: &Config) -> Arc<dyn KeyValueStore> {
    match &config.storage_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "Using file storage");
            Arc::new(FileStorage::new(path.clone()))
        }
        None => {
            tracing::warn!("No storage location available, session will not persist");
            Arc::new(NullStorage)
        }
    }
}

// =============================================================================
// JSON file
// =============================================================================

/// Flat JSON object on disk, one string value per key
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> BTreeMap<String, String> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(_) => return BTreeMap::new(),
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(path = %self.path.display(), error = %e, "Ignoring corrupt storage file");
            BTreeMap::new()
        })
    }

    /// Write to a sibling temp file, then rename it over the old file.
    /// A crash mid-write leaves the previous contents in place.
    fn save(&self, entries: &BTreeMap<String, String>) -> AppResult<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        fs::create_dir_all(dir)?;

        let json = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::storage(format!("Failed to encode storage: {}", e)))?;

        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(json.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }
}

impl KeyValueStore for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.load().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = self.load();
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = self.load();
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(&entries)
    }
}

// =============================================================================
// In-memory
// =============================================================================

/// Process-local store, mostly for tests
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: Mutex::new(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect(),
            ),
        }
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::storage("Memory storage lock poisoned"))
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }
}

// =============================================================================
// Unavailable
// =============================================================================

/// Storage that holds nothing: reads are empty and writes are dropped
#[derive(Debug, Default, Clone, Copy)]
pub struct NullStorage;

impl KeyValueStore for NullStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, _key: &str, _value: &str) -> AppResult<()> {
        Ok(())
    }

    fn remove(&self, _key: &str) -> AppResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_persists_between_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let first = FileStorage::new(&path);
        first.set("auth_token", "abc").unwrap();
        first.set("theme_mode", "dark").unwrap();

        let second = FileStorage::new(&path);
        assert_eq!(second.get("auth_token"), Some("abc".to_string()));
        assert_eq!(second.get("theme_mode"), Some("dark".to_string()));

        second.remove("auth_token").unwrap();
        assert_eq!(first.get("auth_token"), None);
        assert_eq!(first.get("theme_mode"), Some("dark".to_string()));
    }

    #[test]
    fn test_file_storage_missing_or_corrupt_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");

        let storage = FileStorage::new(&path);
        assert_eq!(storage.get("auth_token"), None);
        assert!(storage.remove("auth_token").is_ok());

        fs::write(&path, "not json").unwrap();
        assert_eq!(storage.get("auth_token"), None);

        storage.set("auth_token", "xyz").unwrap();
        assert_eq!(storage.get("auth_token"), Some("xyz".to_string()));
    }

    #[test]
    fn test_file_storage_writes_leave_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let storage = FileStorage::new(dir.path().join("storage.json"));

        storage.set("auth_token", "abc").unwrap();
        storage.set("theme_mode", "dark").unwrap();
        storage.remove("auth_token").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["storage.json"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_storage_replaces_file_instead_of_truncating() {
        use std::io::Read;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("storage.json");
        let storage = FileStorage::new(&path);
        storage.set("auth_token", "abc").unwrap();

        // A handle opened before the write keeps seeing complete old contents
        let mut old = fs::File::open(&path).unwrap();
        storage.set("auth_token", "a-much-longer-replacement-token").unwrap();

        let mut raw = String::new();
        old.read_to_string(&mut raw).unwrap();
        let entries: BTreeMap<String, String> = serde_json::from_str(&raw).unwrap();
        assert_eq!(entries["auth_token"], "abc");
        assert_eq!(
            storage.get("auth_token"),
            Some("a-much-longer-replacement-token".to_string())
        );
    }

    #[test]
    fn test_file_storage_write_failure_is_storage_error() {
        let dir = TempDir::new().unwrap();
        // A directory where the file should be
        let storage = FileStorage::new(dir.path());

        let err = storage.set("auth_token", "abc").unwrap_err();
        assert_eq!(err.code(), "STORAGE_ERROR");
    }

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::with_entries([("theme_mode", "dark")]);
        assert_eq!(storage.get("theme_mode"), Some("dark".to_string()));

        storage.set("auth_token", "t").unwrap();
        storage.remove("theme_mode").unwrap();
        assert_eq!(storage.get("theme_mode"), None);
        assert_eq!(storage.get("auth_token"), Some("t".to_string()));
    }

    #[test]
    fn test_null_storage_drops_writes() {
        let storage = NullStorage;
        storage.set("auth_token", "abc").unwrap();
        assert_eq!(storage.get("auth_token"), None);
    }

    #[test]
    fn test_open_without_path_uses_null_backend() {
        let storage = open(&Config::default());
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k"), None);
    }
}
