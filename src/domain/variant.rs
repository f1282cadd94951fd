//! Variant vocabulary: sizes, output formats, filename cases
//!
//! A variant is one unit of export work: `(collection, icon, size, color,
//! format)`. The enums here form the closed vocabularies the configuration
//! validates against, and `IconSize` replaces the loose width/height options
//! bags of ad-hoc exporters with an explicit tagged value.

use crate::domain::ids::{CollectionId, IconName};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target dimensions for an exported icon
///
/// Either a square pixel size or an explicit width/height pair. In TOML this
/// deserializes from `48` or `{ width = 40, height = 60 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconSize {
    /// Square output, one scalar pixel size
    Square(u32),
    /// Non-square output with explicit dimensions
    Rectangular { width: u32, height: u32 },
}

impl IconSize {
    /// Output width in pixels
    pub fn width(&self) -> u32 {
        match self {
            IconSize::Square(n) => *n,
            IconSize::Rectangular { width, .. } => *width,
        }
    }

    /// Output height in pixels
    pub fn height(&self) -> u32 {
        match self {
            IconSize::Square(n) => *n,
            IconSize::Rectangular { height, .. } => *height,
        }
    }

    /// Human-readable size label: `48` for squares, `40x60` for rectangles.
    ///
    /// This is what the `{size}` placeholder and `size-` grouping folders
    /// render.
    pub fn label(&self) -> String {
        match self {
            IconSize::Square(n) => n.to_string(),
            IconSize::Rectangular { width, height } => format!("{width}x{height}"),
        }
    }

    /// Validates that all dimensions are strictly positive
    pub fn validate(&self) -> Result<(), String> {
        match self {
            IconSize::Square(0) => Err("size must be strictly positive".to_string()),
            IconSize::Rectangular { width: 0, .. } | IconSize::Rectangular { height: 0, .. } => {
                Err("width and height must be strictly positive".to_string())
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for IconSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for IconSize {
    type Err = String;

    /// Parses `48` or `40x60`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_dim = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|_| format!("Invalid size '{s}'. Expected a number or WIDTHxHEIGHT"))
        };

        let size = match s.split_once('x') {
            Some((width, height)) => IconSize::Rectangular {
                width: parse_dim(width)?,
                height: parse_dim(height)?,
            },
            None => IconSize::Square(parse_dim(s)?),
        };

        size.validate()?;
        Ok(size)
    }
}

/// Output format vocabulary
///
/// Closed set: `svg`, `png`, `jpeg`, `webp`. The `jpg` spelling is accepted
/// during deserialization and normalized to `Jpeg`, before validation and
/// before any template resolution, so `{format}` always renders `jpeg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Plain-text SVG output
    Svg,
    /// PNG raster output
    Png,
    /// JPEG raster output (accepts the `jpg` alias)
    #[serde(alias = "jpg")]
    Jpeg,
    /// WebP raster output
    Webp,
}

impl OutputFormat {
    /// File extension (and `{format}` placeholder value), always normalized
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpeg",
            OutputFormat::Webp => "webp",
        }
    }

    /// Whether this format requires rasterization
    pub fn is_raster(&self) -> bool {
        !matches!(self, OutputFormat::Svg)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(OutputFormat::Svg),
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "webp" => Ok(OutputFormat::Webp),
            other => Err(format!(
                "Invalid output format '{other}'. Supported: svg, png, jpeg, webp"
            )),
        }
    }
}

/// Filename case conversion vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileCase {
    /// camelCase
    Camel,
    /// PascalCase
    Pascal,
    /// snake_case
    Snake,
    /// kebab-case
    #[default]
    Kebab,
    /// No transformation (true passthrough)
    Original,
}

impl fmt::Display for FileCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileCase::Camel => "camel",
            FileCase::Pascal => "pascal",
            FileCase::Snake => "snake",
            FileCase::Kebab => "kebab",
            FileCase::Original => "original",
        };
        write!(f, "{name}")
    }
}

impl FromStr for FileCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "camel" => Ok(FileCase::Camel),
            "pascal" => Ok(FileCase::Pascal),
            "snake" => Ok(FileCase::Snake),
            "kebab" => Ok(FileCase::Kebab),
            "original" => Ok(FileCase::Original),
            other => Err(format!(
                "Invalid case '{other}'. Supported: camel, pascal, snake, kebab, original"
            )),
        }
    }
}

/// Returns `true` when `color` is an explicit override rather than the
/// "keep the icon's intrinsic color" sentinel (`currentColor` or empty).
pub fn is_color_override(color: &str) -> bool {
    !color.is_empty() && color != "currentColor"
}

/// Per-attempt variant options: target dimensions, color token, format
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantOptions {
    /// Target dimensions
    pub size: IconSize,
    /// Requested color token (`currentColor`/empty means no override)
    pub color: String,
    /// Output format
    pub format: OutputFormat,
}

/// One unit of export work
///
/// Created and consumed entirely within a single export attempt; never
/// persisted.
#[derive(Debug, Clone)]
pub struct Variant {
    /// Source collection
    pub collection: CollectionId,
    /// Icon name within the collection
    pub icon: IconName,
    /// Sizing, color, and format options
    pub options: VariantOptions,
}
