//! Store configuration.

use std::path::PathBuf;

use crate::store::JsonFileStore;

/// Ledger file used when nothing else is configured (relative to the CWD).
pub const DEFAULT_STORE_PATH: &str = "inventory.json";

/// Environment variable overriding [`DEFAULT_STORE_PATH`].
pub const STORE_PATH_ENV: &str = "STOCKLEDGER_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_STORE_PATH),
        }
    }
}

impl StoreConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup` (environment-shaped).
    ///
    /// Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(STORE_PATH_ENV) {
            Some(path) if !path.trim().is_empty() => Self {
                path: PathBuf::from(path),
            },
            _ => Self::default(),
        }
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    pub fn open(&self) -> JsonFileStore {
        JsonFileStore::new(self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_inventory_json() {
        let config = StoreConfig::from_lookup(|_| None);
        assert_eq!(config.path, PathBuf::from("inventory.json"));
    }

    #[test]
    fn environment_overrides_default_path() {
        let config = StoreConfig::from_lookup(|key| {
            (key == STORE_PATH_ENV).then(|| "/var/lib/stock/ledger.json".to_string())
        });
        assert_eq!(
            config.open().path(),
            std::path::Path::new("/var/lib/stock/ledger.json")
        );
    }

    #[test]
    fn blank_environment_value_is_ignored() {
        let config = StoreConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn explicit_path_wins() {
        let config = StoreConfig::default().with_path("other.json");
        assert_eq!(config.path, PathBuf::from("other.json"));
    }
}
