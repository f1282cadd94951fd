//! Rasterization adapters

pub mod resvg;
pub mod traits;

pub use self::resvg::ResvgRasterizer;
pub use traits::Rasterizer;
