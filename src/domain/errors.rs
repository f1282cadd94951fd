//! Domain error types
//!
//! This module defines the error hierarchy for iconforge. All errors are
//! domain-specific and don't expose third-party types. The severity ladder
//! matters: configuration and output-root failures are fatal to a run,
//! collection failures are fatal to that collection only, and everything
//! below that is contained by the export coordinator and converted into
//! counter increments.

use thiserror::Error;

/// Main iconforge error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum ForgeError {
    /// Configuration-related errors (fatal, construction-time)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Collection loading and lookup errors
    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),

    /// Rendering and rasterization errors
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Failure to create the root output directory (the only I/O failure
    /// that aborts an entire run)
    #[error("Output directory error: {0}")]
    Directory(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Collection-specific errors
///
/// Errors that occur while locating, reading, or querying an icon
/// collection. These don't expose the provider's underlying I/O or parser
/// types.
#[derive(Debug, Error)]
pub enum CollectionError {
    /// Collection identifier could not be resolved to a readable resource
    #[error("Collection not found: {0}")]
    NotFound(String),

    /// Collection resource exists but could not be read
    #[error("Failed to read collection '{collection}': {message}")]
    Read { collection: String, message: String },

    /// Collection resource could not be parsed
    #[error("Failed to parse collection '{collection}': {message}")]
    Parse { collection: String, message: String },

    /// Icon absent from the collection's data
    #[error("Icon '{icon}' not found in collection '{collection}'")]
    IconNotFound { collection: String, icon: String },
}

/// Render-specific errors
///
/// Errors raised while turning an icon body into an SVG document or while
/// rasterizing that document into pixels.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Icon body markup could not be rendered
    #[error("Invalid icon body: {0}")]
    InvalidBody(String),

    /// Rasterization to a pixel buffer failed
    #[error("Failed to rasterize to {format}: {message}")]
    Rasterize { format: String, message: String },

    /// Encoding the pixel buffer into the target format failed
    #[error("Failed to encode {format}: {message}")]
    Encode { format: String, message: String },

    /// Writing the output file failed
    #[error("Failed to write '{path}': {message}")]
    Write { path: String, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for ForgeError {
    fn from(err: std::io::Error) -> Self {
        ForgeError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        ForgeError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for ForgeError {
    fn from(err: toml::de::Error) -> Self {
        ForgeError::Configuration(format!("TOML parse error: {err}"))
    }
}
