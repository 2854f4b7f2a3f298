use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::rc::Rc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage is not available")]
    Unavailable,
    #[error("preferences file: {0}")]
    Io(#[from] std::io::Error),
    #[error("preferences file is not a JSON object: {0}")]
    Json(#[from] serde_json::Error),
}

/// Small string key-value store for client preferences.
pub trait PreferenceStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl PreferenceStore for MemoryStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Flat JSON object on disk, rewritten on every save.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match std::fs::read(&self.path) {
            Ok(bytes) if bytes.is_empty() => Ok(BTreeMap::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl PreferenceStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        self.read_all().ok()?.remove(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut all = self.read_all()?;
        all.insert(key.to_string(), value.to_string());
        std::fs::write(&self.path, serde_json::to_vec_pretty(&all)?)?;
        Ok(())
    }
}

/// Browser `window.localStorage`.
#[cfg(feature = "web")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStore;

#[cfg(feature = "web")]
impl LocalStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

#[cfg(feature = "web")]
impl PreferenceStore for LocalStore {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = Self::storage().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|_| StoreError::Unavailable)
    }
}

/// Picks the backend for the current build.
pub fn default_store() -> Rc<dyn PreferenceStore> {
    #[cfg(feature = "web")]
    {
        Rc::new(LocalStore)
    }
    #[cfg(all(feature = "desktop", not(feature = "web")))]
    {
        Rc::new(FileStore::new(crate::settings::get().prefs_path.clone()))
    }
    #[cfg(not(any(feature = "web", feature = "desktop")))]
    {
        Rc::new(MemoryStore::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trip() {
        let store = MemoryStore::default();
        assert_eq!(store.load("theme"), None);
        store.save("theme", "light").unwrap();
        assert_eq!(store.load("theme").as_deref(), Some("light"));
    }

    #[test]
    fn file_store_missing_file_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("prefs.json"));
        assert_eq!(store.load("theme"), None);
    }

    #[test]
    fn file_store_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        let store = FileStore::new(&path);
        store.save("theme", "dark").unwrap();
        store.save("other", "x").unwrap();
        store.save("theme", "light").unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(reopened.load("theme").as_deref(), Some("light"));
        assert_eq!(reopened.load("other").as_deref(), Some("x"));
    }

    #[test]
    fn file_store_rejects_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();
        let store = FileStore::new(&path);
        assert_eq!(store.load("theme"), None);
        assert!(matches!(store.save("theme", "dark"), Err(StoreError::Json(_))));
    }
}
