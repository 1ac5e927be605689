use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_ACCESS_TOKEN_ENV};
use crate::error::ShareGuardError;

use super::*;

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    env: HashMap<String, String>,
    current_dir: PathBuf,
    config_dir: Option<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            env: HashMap::new(),
            current_dir: PathBuf::from("/project"),
            config_dir: Some(PathBuf::from("/home/user/.config/drive-share-guard")),
        }
    }

    fn with_file(mut self, path: impl Into<PathBuf>, content: &str) -> Self {
        self.files.insert(path.into(), content.to_string());
        self
    }

    fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.insert(key.to_string(), value.to_string());
        self
    }

    fn without_config_dir(mut self) -> Self {
        self.config_dir = None;
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path)
    }

    fn current_dir(&self) -> std::io::Result<PathBuf> {
        Ok(self.current_dir.clone())
    }

    fn config_dir(&self) -> Option<PathBuf> {
        self.config_dir.clone()
    }

    fn env_var(&self, key: &str) -> Option<String> {
        self.env.get(key).cloned()
    }
}

const LOCAL: &str = "/project/.drive-share-guard.toml";
const USER: &str = "/home/user/.config/drive-share-guard/config.toml";

#[test]
fn load_returns_defaults_without_files() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    assert_eq!(loader.load().unwrap(), Config::default());
}

#[test]
fn load_prefers_local_config() {
    let fs = MockFileSystem::new()
        .with_file(LOCAL, "[audit]\nroot_folder_id = \"local\"\n")
        .with_file(USER, "[audit]\nroot_folder_id = \"user\"\n");
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.audit.root_folder_id, "local");
}

#[test]
fn load_falls_back_to_user_config() {
    let fs = MockFileSystem::new().with_file(USER, "[audit]\nroot_folder_id = \"user\"\n");
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.audit.root_folder_id, "user");
}

#[test]
fn load_without_config_dir_still_works() {
    let fs = MockFileSystem::new().without_config_dir();
    assert!(FileConfigLoader::with_fs(fs).load().is_ok());
}

#[test]
fn load_from_missing_path_is_config_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let err = loader.load_from_path(Path::new("/nope.toml")).unwrap_err();
    assert!(matches!(err, ShareGuardError::Config(ref m) if m.contains("/nope.toml")));
}

#[test]
fn load_from_path_reports_toml_errors() {
    let fs = MockFileSystem::new().with_file("/custom.toml", "[audit\n");
    let err = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/custom.toml"))
        .unwrap_err();
    assert!(matches!(err, ShareGuardError::TomlParse(_)));
}

#[test]
fn webhook_env_overrides_file() {
    let fs = MockFileSystem::new()
        .with_file(LOCAL, "[notify]\nwebhook_url = \"https://file.example/hook\"\n")
        .with_env(WEBHOOK_URL_ENV, "https://env.example/hook");
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.notify.webhook_url, "https://env.example/hook");
}

#[test]
fn empty_webhook_env_is_ignored() {
    let fs = MockFileSystem::new()
        .with_file(LOCAL, "[notify]\nwebhook_url = \"https://file.example/hook\"\n")
        .with_env(WEBHOOK_URL_ENV, "");
    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.notify.webhook_url, "https://file.example/hook");
}

#[test]
fn access_token_comes_from_named_variable() {
    let fs = MockFileSystem::new()
        .with_env(DEFAULT_ACCESS_TOKEN_ENV, "ya29.token")
        .with_env("OTHER_TOKEN", "other");
    let loader = FileConfigLoader::with_fs(fs);

    let mut config = Config::default();
    assert_eq!(loader.access_token(&config).as_deref(), Some("ya29.token"));

    config.drive.access_token_env = "OTHER_TOKEN".to_string();
    assert_eq!(loader.access_token(&config).as_deref(), Some("other"));

    config.drive.access_token_env = "UNSET".to_string();
    assert_eq!(loader.access_token(&config), None);
}

#[test]
fn load_defaults_applies_env_overrides() {
    let fs = MockFileSystem::new()
        .with_file(LOCAL, "[audit]\nroot_folder_id = \"ignored\"\n")
        .with_env(WEBHOOK_URL_ENV, "https://env.example/hook");
    let config = FileConfigLoader::with_fs(fs).load_defaults();
    assert!(config.audit.root_folder_id.is_empty());
    assert_eq!(config.notify.webhook_url, "https://env.example/hook");
}
