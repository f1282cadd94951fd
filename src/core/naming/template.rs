//! Placeholder template resolution
//!
//! Resolves `{collection}`, `{icon}`, `{size}`, `{width}`, `{height}`,
//! `{color}`, and `{format}` placeholders in filename and folder patterns.
//! Placeholders whose value is not supplied in the current context are left
//! verbatim, so folder patterns referencing `{icon}` degrade visibly rather
//! than silently.

use crate::domain::{is_color_override, IconSize, OutputFormat};

/// Placeholder value rendered when no explicit color override is active
const DEFAULT_COLOR_LABEL: &str = "default";

/// Values available to a pattern in the current resolution context
///
/// Fields set to `None` leave their placeholders untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderValues<'a> {
    /// Collection prefix, always available
    pub collection: &'a str,
    /// Icon name; absent when resolving folder patterns
    pub icon: Option<&'a str>,
    /// Target dimensions; drives `{size}`, `{width}`, `{height}`
    pub size: Option<IconSize>,
    /// Requested color token; the no-override sentinel renders as `default`
    pub color: Option<&'a str>,
    /// Output format; renders its normalized extension
    pub format: Option<OutputFormat>,
}

/// Resolves every known placeholder in `pattern`
///
/// `{size}` renders the scalar for square sizes and `WxH` for rectangular
/// ones. `{color}` renders `default` when the color is absent or is the
/// no-override sentinel. Unknown placeholders pass through unchanged.
pub fn resolve(pattern: &str, values: &PlaceholderValues) -> String {
    let mut resolved = pattern.replace("{collection}", values.collection);

    if let Some(icon) = values.icon {
        resolved = resolved.replace("{icon}", icon);
    }

    if let Some(size) = values.size {
        resolved = resolved.replace("{size}", &size.label());
        resolved = resolved.replace("{width}", &size.width().to_string());
        resolved = resolved.replace("{height}", &size.height().to_string());
    }

    let color_label = values
        .color
        .filter(|c| is_color_override(c))
        .unwrap_or(DEFAULT_COLOR_LABEL);
    resolved = resolved.replace("{color}", color_label);

    if let Some(format) = values.format {
        resolved = resolved.replace("{format}", format.extension());
    }

    resolved
}
