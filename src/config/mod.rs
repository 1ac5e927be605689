mod loader;
mod model;
mod validation;

pub use loader::{
    ConfigLoader, FileConfigLoader, FileSystem, LOCAL_CONFIG_NAME, RealFileSystem,
    WEBHOOK_URL_ENV,
};
pub use model::{
    AuditConfig, Config, DEFAULT_ACCESS_TOKEN_ENV, DEFAULT_API_BASE, DEFAULT_IGNORE_KEYWORD,
    DriveConfig, NotifyConfig,
};
pub use validation::{validate_config_semantics, validate_for_audit, validate_for_delivery};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert!(config.audit.root_folder_id.is_empty());
        assert_eq!(config.drive.api_base, DEFAULT_API_BASE);
        assert_eq!(config.audit.ignore_keyword.as_deref(), Some(DEFAULT_IGNORE_KEYWORD));
        assert!(!config.audit.allow_list.is_empty());
    }
}
