use std::env;
use std::fs;
use std::path::PathBuf;

use crate::error::{PixGenError, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

#[derive(Debug, Clone)]
pub struct PixGenConfig {
    pub base_url: String,
    pub api_key: Option<String>,
}

impl Default for PixGenConfig {
    fn default() -> Self {
        PixGenConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl PixGenConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let base_url =
            env::var("PIXGEN_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = env::var("PIXGEN_API_KEY").ok();

        PixGenConfig { base_url, api_key }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
}

/// Persistent store for the single API key credential. The key lives in one
/// file under the user's config directory and is read once at startup and
/// rewritten only on an explicit save.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new() -> Result<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| PixGenError::ConfigError("No config directory available".into()))?;

        Ok(Self {
            path: dir.join("pixgen").join("api_key"),
        })
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let key = contents.trim().to_string();
                if key.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(key))
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PixGenError::ConfigError(format!(
                "Failed to read API key: {}",
                e
            ))),
        }
    }

    pub fn save(&self, api_key: &str) -> Result<()> {
        if api_key.trim().is_empty() {
            return Err(PixGenError::ValidationError(
                "API key cannot be empty".into(),
            ));
        }

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PixGenError::ConfigError(format!("Failed to create config directory: {}", e))
            })?;
        }

        fs::write(&self.path, api_key.trim())
            .map_err(|e| PixGenError::ConfigError(format!("Failed to write API key: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_base_url_points_at_local_backend() {
        let config = PixGenConfig::new();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn builder_overrides_fields() {
        let config = PixGenConfig::new()
            .with_base_url("http://images.example.com/api")
            .with_api_key("sk-test");

        assert_eq!(config.base_url, "http://images.example.com/api");
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn credential_store_round_trips_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::with_path(dir.path().join("api_key"));

        store.save("sk-live-123\n").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("sk-live-123"));
    }

    #[test]
    fn missing_key_file_loads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::with_path(dir.path().join("api_key"));

        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn empty_key_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::with_path(dir.path().join("api_key"));

        assert!(store.save("   ").is_err());
    }
}
