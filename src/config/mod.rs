//! Configuration management for iconforge
//!
//! Configuration is loaded from a TOML file with environment variable
//! substitution (`${VAR}`) and `ICONFORGE_*` overrides, then validated
//! before any export work starts.

pub mod loader;
pub mod schema;

pub use loader::load_config;
pub use schema::{
    ExportConfig, FolderConfig, ForgeConfig, LoggingConfig, NamingConfig, ProviderConfig,
};
