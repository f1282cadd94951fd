//! SVG document assembly
//!
//! Wraps an icon body in a standalone `<svg>` document. The viewBox always
//! reflects the icon's intrinsic coordinate space; width and height carry
//! the requested output size, so scaling is left to the SVG consumer (or to
//! the rasterizer).

use crate::core::render::color::apply_color;
use crate::domain::{IconRenderData, IconSize};

/// Builds a standalone SVG document for one (size, color) variant
pub fn svg_document(data: &IconRenderData, size: IconSize, color: &str) -> String {
    let body = apply_color(&data.body, color);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{}" width="{}" height="{}">{}</svg>"#,
        data.view_box,
        size.width(),
        size.height(),
        body
    )
}
