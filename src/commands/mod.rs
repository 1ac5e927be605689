pub mod audit;
pub mod config;
pub mod init;

pub use audit::{apply_cli_overrides, outcome_exit_code, run_audit_command, run_audit_impl};
pub use config::{format_config_text, run_config, run_config_validate_impl};
pub use init::{generate_config_template, run_init, run_init_impl};
