//! localStorage-backed preferences

use web_sys::{Storage, Window};

use playboard::{PreferenceStore, StoreError};

pub struct LocalStorageStore {
    storage: Storage,
}

impl LocalStorageStore {
    /// Fails in contexts where the browser withholds storage
    pub fn open(window: &Window) -> Result<Self, StoreError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StoreError::Unavailable(
                "localStorage is not available".to_string(),
            )),
            Err(e) => Err(StoreError::Unavailable(format!("{:?}", e))),
        }
    }
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage
            .get_item(key)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{:?}", e)))
    }
}
