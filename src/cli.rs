use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "drive-share-guard")]
#[command(author, version, about = "Audit a Drive folder tree for files shared outside an allow-list")]
#[command(long_about = "Walks every file below a Drive folder, flags files shared with \
    anyone holding the link or with addresses outside the allow-list, and posts one \
    summary message to a Slack incoming webhook.\n\n\
    Exit codes:\n  \
    0 - Audit completed\n  \
    1 - Violations found (with --strict)\n  \
    2 - Configuration or runtime error\n  \
    3 - Listing the folder tree failed\n  \
    4 - Notification delivery failed")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log warnings and errors, hide the progress spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Default log filter for the verbosity flags. `RUST_LOG` still wins.
    #[must_use]
    pub const fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "warn";
        }
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk the folder tree and report sharing violations
    Audit(AuditArgs),

    /// Generate a default configuration file
    Init(InitArgs),

    /// Configuration file utilities
    Config(ConfigArgs),
}

#[derive(Parser, Debug, Default)]
pub struct AuditArgs {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root folder ID to audit (overrides config)
    #[arg(long)]
    pub root: Option<String>,

    /// Incoming-webhook URL (overrides config and environment)
    #[arg(long)]
    pub webhook: Option<String>,

    /// Allowed domain suffix or address (repeatable, replaces the configured list)
    #[arg(long = "allow", short = 'a')]
    pub allow: Vec<String>,

    /// Skip files whose name contains this text (overrides config, empty disables)
    #[arg(long)]
    pub ignore_keyword: Option<String>,

    /// Include items stored in shared drives
    #[arg(long)]
    pub shared_drives: bool,

    /// Print the notification payload to stdout instead of posting it
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with code 1 when violations are found
    #[arg(long)]
    pub strict: bool,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = ".drive-share-guard.toml")]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ConfigOutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate configuration file syntax and values
    Validate {
        /// Path to configuration file
        #[arg(short, long, default_value = ".drive-share-guard.toml")]
        config: PathBuf,
    },

    /// Display the effective configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ConfigOutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
