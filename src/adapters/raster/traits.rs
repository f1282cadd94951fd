//! Rasterizer trait

use crate::domain::{OutputFormat, Result};

/// Converts a standalone SVG document into encoded raster bytes
///
/// Rasterization is CPU-bound and synchronous; the export coordinator runs
/// it inside per-icon tasks.
pub trait Rasterizer: Send + Sync {
    /// Renders `svg` at the given pixel dimensions and encodes it as
    /// `format`
    ///
    /// # Errors
    ///
    /// Returns an error if the SVG cannot be parsed, rendered, or encoded.
    /// `format` must be a raster format; `svg` is rejected.
    fn rasterize(&self, svg: &str, format: OutputFormat, width: u32, height: u32)
        -> Result<Vec<u8>>;
}
