//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the iconforge configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        // load_config already validated; show the effective settings
        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Collections:     {:?}", config.export.collections);
        if config.export.icons.is_empty() {
            println!("  Icons:           all");
        } else {
            println!("  Icons:           {:?}", config.export.icons);
        }
        println!("  Output Dir:      {}", config.export.output_dir.display());
        println!("  Default Size:    {}", config.export.default_size);
        println!("  Default Color:   {}", config.export.default_color);
        let formats: Vec<String> = config
            .export
            .formats
            .iter()
            .map(|f| f.to_string())
            .collect();
        println!("  Formats:         {}", formats.join(", "));
        println!("  Parallel Icons:  {}", config.export.parallel_icons);
        println!("  Naming Pattern:  {}", config.naming.pattern);
        println!("  Naming Case:     {}", config.naming.case);
        println!("  Folders Enabled: {}", config.folders.enabled);
        println!(
            "  Collections Dir: {}",
            config.provider.collections_dir.display()
        );
        println!();
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_creation() {
        let args = ValidateArgs {};
        let _ = format!("{args:?}");
    }
}
