//! Domain models and types for iconforge.
//!
//! This module contains the core domain models, types, and business rules.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`CollectionId`], [`IconName`])
//! - **Icon data model** ([`IconCollection`], [`IconRecord`], [`IconRenderData`])
//! - **Variant vocabulary** ([`IconSize`], [`OutputFormat`], [`FileCase`], [`Variant`])
//! - **Error types** ([`ForgeError`], [`CollectionError`], [`RenderError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Identifiers use the newtype pattern so collection and icon names can't be
//! mixed up:
//!
//! ```rust
//! use iconforge::domain::{CollectionId, IconName};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let collection = CollectionId::new("mdi")?;
//! let icon = IconName::new("home")?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: CollectionId = icon;  // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, ForgeError>`]:
//!
//! ```rust
//! use iconforge::domain::{ForgeError, Result};
//!
//! fn example() -> Result<()> {
//!     // Errors are automatically converted using the ? operator
//!     let config = iconforge::config::load_config("iconforge.toml")?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod icon;
pub mod ids;
pub mod result;
pub mod variant;

// Re-export commonly used types for convenience
pub use errors::{CollectionError, ForgeError, RenderError};
pub use icon::{IconCollection, IconRecord, IconRenderData};
pub use ids::{CollectionId, IconName};
pub use result::Result;
pub use variant::{is_color_override, FileCase, IconSize, OutputFormat, Variant, VariantOptions};
