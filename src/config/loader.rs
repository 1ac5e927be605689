use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, ShareGuardError};

use super::Config;

/// Trait for loading configuration from various sources.
pub trait ConfigLoader {
    /// Load configuration from the default location.
    ///
    /// # Errors
    /// Returns an error if the config file cannot be read or parsed.
    fn load(&self) -> Result<Config>;

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    fn load_from_path(&self, path: &Path) -> Result<Config>;
}

pub const LOCAL_CONFIG_NAME: &str = ".drive-share-guard.toml";
const USER_CONFIG_NAME: &str = "config.toml";

/// Environment variable that overrides `notify.webhook_url`.
pub const WEBHOOK_URL_ENV: &str = "DRIVE_SHARE_GUARD_WEBHOOK_URL";

/// Trait for filesystem and process-environment access (for testability).
pub trait FileSystem {
    /// Read file contents as a string.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> std::io::Result<String>;

    /// Check if a path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Get the current working directory.
    ///
    /// # Errors
    /// Returns an error if the current directory cannot be determined.
    fn current_dir(&self) -> std::io::Result<PathBuf>;

    /// Get the platform-specific configuration directory for drive-share-guard.
    ///
    /// - Windows: `%APPDATA%\drive-share-guard`
    /// - macOS: `~/Library/Application Support/drive-share-guard`
    /// - Linux: `~/.config/drive-share-guard` (XDG)
    fn config_dir(&self) -> Option<PathBuf>;

    /// Read an environment variable. Unset and non-UTF-8 values are `None`.
    fn env_var(&self, key: &str) -> Option<String>;
}

/// Real filesystem implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn config_dir(&self) -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "drive-share-guard")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    fn env_var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Loads configuration from the filesystem.
///
/// Search order:
/// 1. `.drive-share-guard.toml` in current directory
/// 2. `config.toml` in the platform-specific user config directory
/// 3. Returns `Config::default()` if no config found
///
/// Whatever the source, `DRIVE_SHARE_GUARD_WEBHOOK_URL` replaces `notify.webhook_url`
/// when set and non-empty.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    fn local_config_path(&self) -> Option<PathBuf> {
        self.fs
            .current_dir()
            .ok()
            .map(|dir| dir.join(LOCAL_CONFIG_NAME))
    }

    fn user_config_path(&self) -> Option<PathBuf> {
        self.fs.config_dir().map(|dir| dir.join(USER_CONFIG_NAME))
    }

    fn read_config(&self, path: &Path) -> Result<Config> {
        debug!("loading configuration from {}", path.display());
        let content = self.fs.read_to_string(path).map_err(|e| {
            ShareGuardError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config: Config = toml::from_str(&content)?;
        Ok(self.apply_env_overrides(config))
    }

    fn apply_env_overrides(&self, mut config: Config) -> Config {
        if let Some(url) = self.fs.env_var(WEBHOOK_URL_ENV).filter(|u| !u.is_empty()) {
            config.notify.webhook_url = url;
        }
        config
    }

    /// Built-in defaults with environment overrides applied (`--no-config`).
    #[must_use]
    pub fn load_defaults(&self) -> Config {
        self.apply_env_overrides(Config::default())
    }

    /// Read the listing API access token named by `drive.access_token_env`.
    #[must_use]
    pub fn access_token(&self, config: &Config) -> Option<String> {
        self.fs
            .env_var(&config.drive.access_token_env)
            .filter(|token| !token.is_empty())
    }
}

impl<F: FileSystem> ConfigLoader for FileConfigLoader<F> {
    fn load(&self) -> Result<Config> {
        for path in [self.local_config_path(), self.user_config_path()]
            .into_iter()
            .flatten()
        {
            if self.fs.exists(&path) {
                return self.read_config(&path);
            }
        }
        debug!("no configuration file found, using defaults");
        Ok(self.load_defaults())
    }

    fn load_from_path(&self, path: &Path) -> Result<Config> {
        if !self.fs.exists(path) {
            return Err(ShareGuardError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }
        self.read_config(path)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
