use std::path::PathBuf;

use super::*;

#[test]
fn cli_audit_defaults() {
    let cli = Cli::parse_from(["drive-share-guard", "audit"]);
    match cli.command {
        Commands::Audit(args) => {
            assert!(args.config.is_none());
            assert!(args.allow.is_empty());
            assert!(!args.dry_run);
            assert!(!args.strict);
        }
        _ => panic!("Expected Audit command"),
    }
}

#[test]
fn cli_audit_with_overrides() {
    let cli = Cli::parse_from([
        "drive-share-guard",
        "audit",
        "--root",
        "0AbC",
        "--webhook",
        "https://hooks.example/x",
        "--allow",
        "gmail.com",
        "-a",
        "fw@gmail.com",
        "--ignore-keyword",
        "[public]",
        "--shared-drives",
        "--dry-run",
        "--strict",
    ]);
    match cli.command {
        Commands::Audit(args) => {
            assert_eq!(args.root.as_deref(), Some("0AbC"));
            assert_eq!(args.webhook.as_deref(), Some("https://hooks.example/x"));
            assert_eq!(args.allow, vec!["gmail.com", "fw@gmail.com"]);
            assert_eq!(args.ignore_keyword.as_deref(), Some("[public]"));
            assert!(args.shared_drives);
            assert!(args.dry_run);
            assert!(args.strict);
        }
        _ => panic!("Expected Audit command"),
    }
}

#[test]
fn cli_audit_with_config() {
    let cli = Cli::parse_from(["drive-share-guard", "audit", "--config", "custom.toml"]);
    match cli.command {
        Commands::Audit(args) => assert_eq!(args.config, Some(PathBuf::from("custom.toml"))),
        _ => panic!("Expected Audit command"),
    }
}

#[test]
fn cli_init_default_output() {
    let cli = Cli::parse_from(["drive-share-guard", "init"]);
    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output, PathBuf::from(".drive-share-guard.toml"));
            assert!(!args.force);
        }
        _ => panic!("Expected Init command"),
    }
}

#[test]
fn cli_config_show_json() {
    let cli = Cli::parse_from(["drive-share-guard", "config", "show", "--format", "json"]);
    match cli.command {
        Commands::Config(ConfigArgs {
            action: ConfigAction::Show { format, config },
        }) => {
            assert_eq!(format, ConfigOutputFormat::Json);
            assert!(config.is_none());
        }
        _ => panic!("Expected Config Show command"),
    }
}

#[test]
fn log_filter_follows_flags() {
    assert_eq!(Cli::parse_from(["x", "init"]).log_filter(), "info");
    assert_eq!(Cli::parse_from(["x", "-v", "init"]).log_filter(), "debug");
    assert_eq!(Cli::parse_from(["x", "-vv", "init"]).log_filter(), "trace");
    assert_eq!(Cli::parse_from(["x", "-q", "-v", "init"]).log_filter(), "warn");
}
