//! Configuration schema and validation
//!
//! This module defines the configuration structure for iconforge,
//! deserialized from TOML with serde. Every field carries a default so a
//! minimal config file only needs to name its collections.

use crate::domain::{FileCase, IconSize, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForgeConfig {
    /// Export settings: what to export and where
    #[serde(default)]
    pub export: ExportConfig,

    /// Filename derivation settings
    #[serde(default)]
    pub naming: NamingConfig,

    /// Output folder layout settings
    #[serde(default)]
    pub folders: FolderConfig,

    /// Icon data provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Export settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Collections to export, by Iconify prefix (e.g. `mdi`)
    #[serde(default)]
    pub collections: Vec<String>,

    /// Restrict the export to these icons; empty means every icon in each
    /// collection
    #[serde(default)]
    pub icons: Vec<String>,

    /// Root output directory
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Size used when the caller supplies none
    #[serde(default = "default_size")]
    pub default_size: IconSize,

    /// Color used when the caller supplies none; `currentColor` keeps the
    /// icon's intrinsic colors
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Output formats to produce for every variant
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,

    /// Maximum number of icons processed concurrently
    #[serde(default = "default_parallel_icons")]
    pub parallel_icons: usize,

    /// Write an `export-summary.json` report next to the exported icons
    #[serde(default)]
    pub write_summary: bool,
}

/// Filename derivation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Filename pattern, resolved per variant
    #[serde(default = "default_naming_pattern")]
    pub pattern: String,

    /// Strip filesystem-unsafe characters from resolved filenames
    #[serde(default = "default_true")]
    pub sanitize: bool,

    /// Case style applied to the resolved filename stem
    #[serde(default)]
    pub case: FileCase,
}

/// Output folder layout settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderConfig {
    /// When `false`, every file lands directly in the output directory
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Base folder pattern under the output directory
    #[serde(default = "default_folder_pattern")]
    pub pattern: String,

    /// Append a `size-{size}` segment per target size
    #[serde(default)]
    pub group_by_size: bool,

    /// Append a `color-{color}` segment when a color override is active
    #[serde(default)]
    pub group_by_color: bool,

    /// Append a per-format segment (`svg`, `png`, ...)
    #[serde(default)]
    pub group_by_format: bool,
}

/// Icon data provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Directory holding Iconify collection JSON files (`{prefix}.json`)
    #[serde(default = "default_collections_dir")]
    pub collections_dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Enable local file logging in addition to the console
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_log_path")]
    pub local_path: String,

    /// Log file rotation: hourly, daily, never
    #[serde(default = "default_log_rotation")]
    pub local_rotation: String,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("./icons")
}

fn default_size() -> IconSize {
    IconSize::Square(48)
}

fn default_color() -> String {
    "currentColor".to_string()
}

fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Svg]
}

fn default_parallel_icons() -> usize {
    8
}

fn default_naming_pattern() -> String {
    "{collection}-{icon}-{width}x{height}".to_string()
}

fn default_folder_pattern() -> String {
    "{collection}".to_string()
}

fn default_true() -> bool {
    true
}

fn default_collections_dir() -> PathBuf {
    PathBuf::from("./collections")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_path() -> String {
    "./logs".to_string()
}

fn default_log_rotation() -> String {
    "daily".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            collections: Vec::new(),
            icons: Vec::new(),
            output_dir: default_output_dir(),
            default_size: default_size(),
            default_color: default_color(),
            formats: default_formats(),
            parallel_icons: default_parallel_icons(),
            write_summary: false,
        }
    }
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            pattern: default_naming_pattern(),
            sanitize: true,
            case: FileCase::default(),
        }
    }
}

impl Default for FolderConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            pattern: default_folder_pattern(),
            group_by_size: false,
            group_by_color: false,
            group_by_format: false,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            collections_dir: default_collections_dir(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            local_enabled: false,
            local_path: default_log_path(),
            local_rotation: default_log_rotation(),
        }
    }
}

impl Default for ForgeConfig {
    fn default() -> Self {
        Self {
            export: ExportConfig::default(),
            naming: NamingConfig::default(),
            folders: FolderConfig::default(),
            provider: ProviderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ForgeConfig {
    /// Validates the full configuration
    ///
    /// # Errors
    ///
    /// Returns a message describing the first invalid field found.
    pub fn validate(&self) -> Result<(), String> {
        self.export.validate()?;
        self.naming.validate()?;
        self.folders.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl ExportConfig {
    fn validate(&self) -> Result<(), String> {
        if self.collections.is_empty() {
            return Err("export.collections cannot be empty".to_string());
        }
        if self.collections.iter().any(|c| c.trim().is_empty()) {
            return Err("export.collections entries cannot be empty".to_string());
        }
        if self.icons.iter().any(|i| i.trim().is_empty()) {
            return Err("export.icons entries cannot be empty".to_string());
        }
        if self.formats.is_empty() {
            return Err("export.formats cannot be empty".to_string());
        }
        self.default_size
            .validate()
            .map_err(|e| format!("export.default_size: {e}"))?;
        if self.parallel_icons == 0 || self.parallel_icons > 64 {
            return Err("export.parallel_icons must be between 1 and 64".to_string());
        }
        Ok(())
    }
}

impl NamingConfig {
    fn validate(&self) -> Result<(), String> {
        if self.pattern.trim().is_empty() {
            return Err("naming.pattern cannot be empty".to_string());
        }
        Ok(())
    }
}

impl FolderConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.pattern.trim().is_empty() {
            return Err("folders.pattern cannot be empty when folders are enabled".to_string());
        }
        Ok(())
    }
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log level '{}'. Valid levels: {}",
                self.level,
                valid_levels.join(", ")
            ));
        }
        let valid_rotations = ["hourly", "daily", "never"];
        if !valid_rotations.contains(&self.local_rotation.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid log rotation '{}'. Valid rotations: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}
