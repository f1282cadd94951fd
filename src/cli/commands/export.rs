//! Export command implementation
//!
//! This module implements the `export` command, the main entry point for
//! a batch export run.

use crate::config::load_config;
use crate::core::export::Exporter;
use crate::domain::IconSize;
use clap::Args;
use std::str::FromStr;

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Sizes to export, repeatable (`--size 24 --size 40x60`); defaults to
    /// the configured default size
    #[arg(long = "size", value_name = "SIZE")]
    pub sizes: Vec<String>,

    /// Colors to export, repeatable (`--color "#FF0000"`); defaults to the
    /// configured default color
    #[arg(long = "color", value_name = "COLOR")]
    pub colors: Vec<String>,
}

impl ExportArgs {
    /// Execute the export command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Starting export");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("❌ Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let sizes = match self.parse_sizes() {
            Ok(sizes) => sizes,
            Err(e) => {
                eprintln!("❌ {e}");
                return Ok(2);
            }
        };

        let exporter = match Exporter::new(config) {
            Ok(exporter) => exporter,
            Err(e) => {
                eprintln!("❌ Invalid configuration: {e}");
                return Ok(2);
            }
        };

        let summary = if sizes.is_empty() && self.colors.is_empty() {
            exporter.export_icons().await?
        } else {
            exporter
                .export_with_variants(sizes, self.colors.clone())
                .await?
        };

        println!();
        println!("Export Summary:");
        println!("  Processed: {}", summary.processed);
        println!("  Errors:    {}", summary.errors);
        println!("  Skipped:   {}", summary.skipped);
        println!("  Duration:  {:.2}s", summary.duration.as_secs_f64());
        println!();

        if summary.is_success() {
            println!("✅ Export completed successfully");
            Ok(0)
        } else {
            println!("⚠️  Export completed with errors");
            Ok(1) // Partial failure exit code
        }
    }

    fn parse_sizes(&self) -> Result<Vec<IconSize>, String> {
        self.sizes
            .iter()
            .map(|s| IconSize::from_str(s))
            .collect()
    }
}
