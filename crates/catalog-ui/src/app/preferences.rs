//! Persistence and environment helpers for the app shell.

use crate::core::auth::{TokenStorage, stored_token};
use crate::core::config::CatalogConfig;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

/// Bearer token slot in browser local storage, kept as the raw token string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct LocalTokenStorage {
    key: String,
}

impl LocalTokenStorage {
    pub(crate) fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self) -> Option<String> {
        let raw = LocalStorage::raw()
            .get_item(&self.key)
            .unwrap_or_else(|err| {
                log_storage_error("get", &self.key, &format!("{err:?}"));
                None
            });
        stored_token(raw)
    }

    fn store(&self, token: &str) {
        if let Err(err) = LocalStorage::raw().set_item(&self.key, token) {
            log_storage_error("set", &self.key, &format!("{err:?}"));
        }
    }

    fn clear(&self) {
        if let Err(err) = LocalStorage::raw().remove_item(&self.key) {
            log_storage_error("delete", &self.key, &format!("{err:?}"));
        }
    }
}

/// Build-time configuration, falling back to defaults when an override is unusable.
pub(crate) fn load_config() -> (CatalogConfig, Option<String>) {
    match CatalogConfig::from_build_env() {
        Ok(config) => (config, None),
        Err(err) => (CatalogConfig::default(), Some(err.to_string())),
    }
}

fn log_storage_error(operation: &'static str, key: &str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
