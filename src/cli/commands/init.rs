//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "iconforge.toml")]
    pub output: String,

    /// Include example values and comments
    #[arg(long)]
    pub with_examples: bool,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing iconforge configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        let config_content = if self.with_examples {
            Self::generate_config_with_examples()
        } else {
            Self::generate_minimal_config()
        };

        match fs::write(&self.output, config_content) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. Place Iconify collection JSON files in the collections dir");
                println!("  3. Validate configuration: iconforge validate-config");
                println!("  4. Run export: iconforge export");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {}", e);
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate minimal configuration
    fn generate_minimal_config() -> String {
        r#"# iconforge Configuration File
# Batch Iconify icon exporter

[export]
collections = ["mdi"]
output_dir = "./icons"
default_size = 48
default_color = "currentColor"
formats = ["svg"]
parallel_icons = 8
write_summary = false

[naming]
pattern = "{collection}-{icon}-{width}x{height}"
sanitize = true
case = "kebab"

[folders]
enabled = true
pattern = "{collection}"
group_by_size = false
group_by_color = false
group_by_format = false

[provider]
collections_dir = "./collections"

[logging]
level = "info"
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
        .to_string()
    }

    /// Generate configuration with examples and comments
    fn generate_config_with_examples() -> String {
        r##"# iconforge Configuration File
# Batch Iconify icon exporter
#
# This file contains all configuration options with examples and explanations.

# ============================================================================
# Export Settings
# ============================================================================
[export]
# Collections to export, by Iconify prefix
collections = ["mdi", "devicon"]

# Restrict the export to these icons (empty = every icon in each collection)
icons = []

# Root output directory
output_dir = "./icons"

# Default size: a scalar for square icons, or an explicit pair
default_size = 48
# default_size = { width = 40, height = 60 }

# Default color. "currentColor" keeps the icon's intrinsic colors;
# any other value (e.g. "#FF0000") is injected as a fill override.
default_color = "currentColor"

# Output formats: svg, png, jpeg (jpg accepted), webp
formats = ["svg", "png"]

# Number of icons processed concurrently (1-64)
parallel_icons = 8

# Write export-summary.json into the output directory after each run
write_summary = false

# ============================================================================
# Filename Derivation
# ============================================================================
[naming]
# Placeholders: {collection} {icon} {size} {width} {height} {color} {format}
pattern = "{collection}-{icon}-{width}x{height}"

# Strip filesystem-unsafe characters from resolved filenames
sanitize = true

# Case style: camel, pascal, snake, kebab, original
case = "kebab"

# ============================================================================
# Folder Layout
# ============================================================================
[folders]
# When false, every file lands directly in output_dir
enabled = true

# Base folder pattern under output_dir (icon name not available here)
pattern = "{collection}"

# Optional grouping segments, appended in fixed order: size, color, format
group_by_size = false
group_by_color = false
group_by_format = false

# ============================================================================
# Icon Data Provider
# ============================================================================
[provider]
# Directory of Iconify collection JSON files, one {prefix}.json per collection
collections_dir = "./collections"

# ============================================================================
# Logging Configuration
# ============================================================================
[logging]
# Log level (trace, debug, info, warn, error)
level = "info"

# Enable local file logging
local_enabled = false

# Local log file path
local_path = "./logs"

# Log rotation (hourly, daily, never)
local_rotation = "daily"
"##
        .to_string()
    }
}
