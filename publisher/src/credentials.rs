use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::PublishError;

/// Stored account credentials. The publishing API issues the token once
/// per account; persisting it lets later publishes reuse the account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub access_token: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub author_name: Option<String>,
}

/// TOML-file-backed credential store.
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        CredentialStore { path: path.into() }
    }

    /// Default location under the user's configuration directory, or
    /// None when the platform reports no such directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("telemark").join("credentials.toml"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load stored credentials. A missing file is not an error: it
    /// means no account has been created yet.
    pub fn load(&self) -> Result<Option<Credentials>, PublishError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(PublishError::CredentialIo(e)),
        };
        let credentials = toml::from_str(&content)?;
        Ok(Some(credentials))
    }

    /// Write credentials, creating parent directories as needed.
    pub fn store(&self, credentials: &Credentials) -> Result<(), PublishError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(credentials)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}
