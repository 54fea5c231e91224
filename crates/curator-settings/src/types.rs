//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and implement
//! [`Default`] with production default values. `#[serde(default)]` allows
//! partial JSON; missing fields get their default value.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root settings type for the Curator client.
///
/// Loaded from `~/.curator/settings.json` with defaults applied for missing
/// fields. Environment variables can override specific values.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Content service settings.
    pub api: ApiSettings,
    /// Local storage settings.
    pub storage: StorageSettings,
}

/// Content service connection settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSettings {
    /// Base URL of the content service.
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000/api".to_string(),
        }
    }
}

/// Local storage settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageSettings {
    /// Data directory for the persisted credential. `None` resolves to
    /// `~/.curator`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

impl StorageSettings {
    /// Resolve the effective data directory.
    #[must_use]
    pub fn resolve_data_dir(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => PathBuf::from(dir),
            None => {
                let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".to_string());
                PathBuf::from(home).join(".curator")
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sensible() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, "http://localhost:5000/api");
        assert!(settings.storage.data_dir.is_none());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"api":{"baseUrl":"https://content.example.com/api"}}"#)
                .unwrap();
        assert_eq!(settings.api.base_url, "https://content.example.com/api");
        assert!(settings.storage.data_dir.is_none());
    }

    #[test]
    fn explicit_data_dir_wins() {
        let storage = StorageSettings {
            data_dir: Some("/var/lib/curator".to_string()),
        };
        assert_eq!(storage.resolve_data_dir(), PathBuf::from("/var/lib/curator"));
    }
}
