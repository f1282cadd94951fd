// iconforge - Batch Iconify icon exporter
// Copyright (c) 2025 iconforge Contributors
// Licensed under the MIT License

//! # iconforge - Batch Iconify icon exporter
//!
//! iconforge turns Iconify collection JSON into files on disk: it expands a
//! configured set of icons across sizes, colors, and output formats, derives
//! deterministic filenames and folder layouts, and writes every variant in
//! one concurrent batch run.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Expanding** icons into a (sizes x colors x formats) variant cross-product
//! - **Deriving** filenames and folders from placeholder patterns
//! - **Rendering** standalone SVG documents with optional color overrides
//! - **Rasterizing** to PNG, JPEG, and WebP via resvg
//!
//! ## Architecture
//!
//! iconforge follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (naming, rendering, export orchestration)
//! - [`adapters`] - External integrations (icon data providers, rasterizers)
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use iconforge::config::load_config;
//! use iconforge::core::export::Exporter;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Load and validate configuration
//!     let config = load_config("iconforge.toml")?;
//!
//!     // Create the exporter and run with configured defaults
//!     let exporter = Exporter::new(config)?;
//!     let summary = exporter.export_icons().await?;
//!
//!     println!("Exported {} variants", summary.processed);
//!     Ok(())
//! }
//! ```
//!
//! ## Variant Expansion
//!
//! A run over N icons, S sizes, C colors, and F formats attempts exactly
//! N x S x C x F exports. Failures are isolated per attempt and counted,
//! never silently dropped:
//!
//! ```rust,no_run
//! use iconforge::config::load_config;
//! use iconforge::core::export::Exporter;
//! use iconforge::domain::IconSize;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let exporter = Exporter::new(load_config("iconforge.toml")?)?;
//! let summary = exporter
//!     .export_with_variants(
//!         vec![IconSize::Square(24), IconSize::Square(48)],
//!         vec!["currentColor".to_string(), "#FF0000".to_string()],
//!     )
//!     .await?;
//!
//! println!(
//!     "Processed: {}, Errors: {}, Skipped: {}",
//!     summary.processed, summary.errors, summary.skipped
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! iconforge uses the [`domain::ForgeError`] type for all errors:
//!
//! ```rust,no_run
//! use iconforge::domain::ForgeError;
//!
//! fn example() -> Result<(), ForgeError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = iconforge::config::load_config("iconforge.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! iconforge uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn, error};
//!
//! info!("Starting export");
//! warn!(icon = "home", "Icon not found in collection");
//! error!(error = "disk full", "Export failed");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
