//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for iconforge using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// iconforge - Batch Iconify icon exporter
#[derive(Parser, Debug)]
#[command(name = "iconforge")]
#[command(version, about, long_about = None)]
#[command(author = "iconforge Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "iconforge.toml", env = "ICONFORGE_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "ICONFORGE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export configured icon collections as size/color/format variants
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["iconforge", "export"]);
        assert_eq!(cli.config, "iconforge.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["iconforge", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["iconforge", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_export_with_variants() {
        let cli = Cli::parse_from([
            "iconforge", "export", "--size", "24", "--size", "40x60", "--color", "#FF0000",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert_eq!(args.sizes, vec!["24".to_string(), "40x60".to_string()]);
                assert_eq!(args.colors, vec!["#FF0000".to_string()]);
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["iconforge", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["iconforge", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }
}
