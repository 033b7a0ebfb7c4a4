//! Process-wide credential storage.
//!
//! A synchronous key/value store shared by the whole client: the auth
//! controller writes on login/logout, every outbound request reads the
//! bearer token. Writes are infrequent and user-triggered, so a plain
//! `RwLock` around the map is enough; readers take an atomic snapshot.
//!
//! An optional JSON file backs the map so a restarted client stays signed
//! in. Persistence is best effort: a failed write is logged and the
//! in-memory value stays authoritative.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;

use tracing::warn;

/// Key under which the bearer token is stored.
pub const ACCESS_TOKEN_KEY: &str = "access_token";

#[derive(Debug, Default)]
pub struct CredentialStore {
    values: RwLock<HashMap<String, String>>,
    path: Option<PathBuf>,
}

impl CredentialStore {
    /// A store that lives only for the current process.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// A store backed by a JSON file. Existing contents are loaded if the
    /// file is present and parseable; anything else starts empty.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("credential file {} is corrupt, starting empty: {e}", path.display());
                HashMap::new()
            }),
            Err(_) => HashMap::new(),
        };
        Self {
            values: RwLock::new(values),
            path: Some(path),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }

    pub fn set(&self, key: &str, value: &str) {
        let mut values = self
            .values
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        values.insert(key.to_string(), value.to_string());
        self.persist(&values);
    }

    pub fn remove(&self, key: &str) {
        let mut values = self
            .values
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        values.remove(key);
        self.persist(&values);
    }

    /// Convenience read of the bearer token.
    pub fn token(&self) -> Option<String> {
        self.get(ACCESS_TOKEN_KEY)
    }

    fn persist(&self, values: &HashMap<String, String>) {
        let Some(path) = &self.path else {
            return;
        };
        let serialized = match serde_json::to_string_pretty(values) {
            Ok(s) => s,
            Err(e) => {
                warn!("failed to serialize credentials: {e}");
                return;
            }
        };
        if let Err(e) = fs::write(path, serialized) {
            warn!("failed to write credential file {}: {e}", path.display());
        }
    }
}
