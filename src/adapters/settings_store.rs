use std::fs;
use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::{AppConfig, DomainError};
use crate::ports::SettingsStore;

/// TOML-based settings store with OS-specific paths.
pub struct TomlSettingsStore {
    data_dir: PathBuf,
}

impl TomlSettingsStore {
    /// Create a new TomlSettingsStore.
    /// Uses OS-specific application data directories.
    pub fn new() -> Result<Self, DomainError> {
        let data_dir = Self::get_data_dir()?;

        // Ensure the data directory exists
        fs::create_dir_all(&data_dir)?;

        info!(data_dir = ?data_dir, "SettingsStore initialized");

        Ok(Self { data_dir })
    }

    /// Get the OS-specific application data directory.
    /// - macOS: ~/Library/Application Support/ScribeFlow/
    /// - Windows: %APPDATA%\ScribeFlow\
    /// - Linux: ~/.config/ScribeFlow/
    fn get_data_dir() -> Result<PathBuf, DomainError> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir()
                .map(|p| p.join("ScribeFlow"))
                .ok_or_else(|| {
                    DomainError::Config("Could not find application data directory".to_string())
                })
        }

        #[cfg(not(target_os = "macos"))]
        {
            dirs::config_dir()
                .map(|p| p.join("ScribeFlow"))
                .ok_or_else(|| {
                    DomainError::Config("Could not find application data directory".to_string())
                })
        }
    }

    /// Get the OS-specific log directory.
    fn get_logs_dir(&self) -> PathBuf {
        #[cfg(target_os = "linux")]
        {
            dirs::data_dir()
                .map(|p| p.join("ScribeFlow").join("logs"))
                .unwrap_or_else(|| self.data_dir.join("logs"))
        }

        #[cfg(not(target_os = "linux"))]
        {
            self.data_dir.join("logs")
        }
    }
}

impl SettingsStore for TomlSettingsStore {
    fn load(&self) -> Result<AppConfig, DomainError> {
        let config_path = self.config_path();

        if config_path.exists() {
            debug!(path = ?config_path, "Loading configuration");
            let content = fs::read_to_string(&config_path)?;
            let config: AppConfig = toml::from_str(&content)?;
            info!(path = ?config_path, "Configuration loaded");
            Ok(config)
        } else {
            info!(path = ?config_path, "Configuration file not found, creating default");
            let config = AppConfig::new();
            self.save(&config)?;
            Ok(config)
        }
    }

    fn save(&self, config: &AppConfig) -> Result<(), DomainError> {
        let config_path = self.config_path();

        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&config_path, content)?;

        info!(path = ?config_path, "Configuration saved");
        Ok(())
    }

    fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    fn logs_dir(&self) -> PathBuf {
        self.get_logs_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_settings_roundtrip() {
        // Use a temporary directory for testing
        let temp_dir = env::temp_dir().join("scribeflow_settings_test");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let store = TomlSettingsStore {
            data_dir: temp_dir.clone(),
        };

        // Create and save a config
        let mut config = AppConfig::new();
        config.session.model = "onnx-community/whisper-small".to_string();
        config.session.gpu = true;
        config.logging.level = "debug".to_string();

        store.save(&config).unwrap();

        // Load it back
        let loaded = store.load().unwrap();
        assert_eq!(loaded.session.model, "onnx-community/whisper-small");
        assert!(loaded.session.gpu);
        assert_eq!(loaded.logging.level, "debug");

        // Cleanup
        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_load_creates_default_when_missing() {
        let temp_dir = env::temp_dir().join("scribeflow_settings_default_test");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let store = TomlSettingsStore {
            data_dir: temp_dir.clone(),
        };

        let config = store.load().unwrap();
        assert_eq!(config.session.language, "auto");
        assert!(store.config_path().exists());

        let _ = fs::remove_dir_all(&temp_dir);
    }
}
