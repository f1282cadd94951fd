//! resvg-backed rasterizer
//!
//! Parses the SVG with usvg, renders it into a tiny-skia pixmap scaled to
//! the target dimensions, and encodes the result with the image crate.
//! JPEG output is flattened onto a white background since the format has no
//! alpha channel.

use crate::adapters::raster::traits::Rasterizer;
use crate::domain::{OutputFormat, RenderError, Result};
use image::{DynamicImage, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{Options, Tree};
use std::io::Cursor;

/// Default rasterizer built on resvg and the image crate
#[derive(Debug, Default, Clone, Copy)]
pub struct ResvgRasterizer;

impl ResvgRasterizer {
    pub fn new() -> Self {
        Self
    }

    fn render_pixmap(&self, svg: &str, width: u32, height: u32) -> Result<Pixmap> {
        let tree = Tree::from_str(svg, &Options::default())
            .map_err(|e| RenderError::InvalidBody(e.to_string()))?;

        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| RenderError::Rasterize {
            format: "pixmap".to_string(),
            message: format!("cannot allocate {width}x{height} pixmap"),
        })?;

        let size = tree.size();
        let scale_x = width as f32 / size.width();
        let scale_y = height as f32 / size.height();
        resvg::render(
            &tree,
            Transform::from_scale(scale_x, scale_y),
            &mut pixmap.as_mut(),
        );

        Ok(pixmap)
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(
        &self,
        svg: &str,
        format: OutputFormat,
        width: u32,
        height: u32,
    ) -> Result<Vec<u8>> {
        if !format.is_raster() {
            return Err(RenderError::Rasterize {
                format: format.to_string(),
                message: "not a raster format".to_string(),
            }
            .into());
        }

        let pixmap = self.render_pixmap(svg, width, height)?;
        let rgba = pixmap_to_rgba(&pixmap);

        let (image, image_format) = match format {
            OutputFormat::Png => (DynamicImage::ImageRgba8(rgba), ImageFormat::Png),
            OutputFormat::Webp => (DynamicImage::ImageRgba8(rgba), ImageFormat::WebP),
            OutputFormat::Jpeg => (
                DynamicImage::ImageRgb8(flatten_onto_white(&rgba)),
                ImageFormat::Jpeg,
            ),
            OutputFormat::Svg => unreachable!("rejected above"),
        };

        let mut buffer = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buffer), image_format)
            .map_err(|e| RenderError::Encode {
                format: format.to_string(),
                message: e.to_string(),
            })?;

        Ok(buffer)
    }
}

/// Converts the premultiplied tiny-skia pixmap into a straight-alpha image
fn pixmap_to_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (src, dst) in pixmap.pixels().iter().zip(image.pixels_mut()) {
        let color = src.demultiply();
        *dst = Rgba([color.red(), color.green(), color.blue(), color.alpha()]);
    }
    image
}

/// Alpha-blends the image onto a white background for alpha-less formats
fn flatten_onto_white(image: &RgbaImage) -> RgbImage {
    let mut flattened = RgbImage::new(image.width(), image.height());
    for (src, dst) in image.pixels().zip(flattened.pixels_mut()) {
        let alpha = src[3] as u32;
        let blend = |channel: u8| ((channel as u32 * alpha + 255 * (255 - alpha)) / 255) as u8;
        *dst = Rgb([blend(src[0]), blend(src[1]), blend(src[2])]);
    }
    flattened
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED_SQUARE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 16 16" width="32" height="32"><rect fill="#FF0000" x="0" y="0" width="16" height="16"/></svg>"##;

    #[test]
    fn test_png_output_has_magic_bytes() {
        let rasterizer = ResvgRasterizer::new();
        let bytes = rasterizer
            .rasterize(RED_SQUARE, OutputFormat::Png, 32, 32)
            .unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_jpeg_output_has_magic_bytes() {
        let rasterizer = ResvgRasterizer::new();
        let bytes = rasterizer
            .rasterize(RED_SQUARE, OutputFormat::Jpeg, 32, 32)
            .unwrap();
        assert_eq!(&bytes[..2], b"\xFF\xD8");
    }

    #[test]
    fn test_webp_output_has_magic_bytes() {
        let rasterizer = ResvgRasterizer::new();
        let bytes = rasterizer
            .rasterize(RED_SQUARE, OutputFormat::Webp, 32, 32)
            .unwrap();
        assert_eq!(&bytes[..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn test_invalid_svg_is_rejected() {
        let rasterizer = ResvgRasterizer::new();
        let result = rasterizer.rasterize("<svg", OutputFormat::Png, 32, 32);
        assert!(result.is_err());
    }

    #[test]
    fn test_svg_format_is_rejected() {
        let rasterizer = ResvgRasterizer::new();
        let result = rasterizer.rasterize(RED_SQUARE, OutputFormat::Svg, 32, 32);
        assert!(result.is_err());
    }
}
