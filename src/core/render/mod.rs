//! Rendering core: color injection and SVG document assembly
//!
//! The base SVG document for a (size, color) pair is built once here and
//! shared across all output formats; rasterization lives behind the
//! [`crate::adapters::raster`] boundary.

pub mod color;
pub mod svg;

pub use color::apply_color;
pub use svg::svg_document;
