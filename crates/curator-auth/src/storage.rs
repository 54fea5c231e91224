//! Credential file I/O.
//!
//! Persists the single bearer credential to `credential.json` under the data
//! directory, with 0o600 permissions on Unix. Exactly one credential is
//! stored; there is no multi-account support.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::AuthError;

/// Default credential file name.
const CREDENTIAL_FILE_NAME: &str = "credential.json";

/// Supported storage schema version.
const STORAGE_VERSION: u32 = 1;

/// On-disk credential envelope.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CredentialFile {
    /// Storage schema version.
    version: u32,
    /// The opaque bearer token.
    credential: String,
    /// Last write time, RFC 3339.
    last_updated: String,
}

/// Get the credential file path under the given data directory.
pub fn credential_file_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CREDENTIAL_FILE_NAME)
}

/// Load the persisted credential.
///
/// Returns `None` if the file doesn't exist, is invalid JSON, or carries an
/// unsupported version. Invalid files are reported via `tracing::warn!` but
/// never surfaced as errors; a broken credential file means "logged out".
pub fn load_credential(path: &Path) -> Option<String> {
    let data = match std::fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return None,
        Err(e) => {
            tracing::warn!("failed to read credential file: {e}");
            return None;
        }
    };

    match serde_json::from_str::<CredentialFile>(&data) {
        Ok(file) if file.version == STORAGE_VERSION => Some(file.credential),
        Ok(file) => {
            tracing::warn!("unsupported credential storage version: {}", file.version);
            None
        }
        Err(e) => {
            tracing::warn!("failed to parse credential file: {e}");
            None
        }
    }
}

/// Persist the credential.
///
/// Creates parent directories if needed. Sets file permissions to 0o600.
pub fn save_credential(path: &Path, credential: &str) -> Result<(), AuthError> {
    let file = CredentialFile {
        version: STORAGE_VERSION,
        credential: credential.to_string(),
        last_updated: chrono::Utc::now().to_rfc3339(),
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, &json)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = std::fs::Permissions::from_mode(0o600);
        let _ = std::fs::set_permissions(path, perms);
    }

    Ok(())
}

/// Erase the persisted credential. A missing file is not an error.
pub fn clear_credential(path: &Path) -> Result<(), AuthError> {
    match std::fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(AuthError::Io(e)),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
