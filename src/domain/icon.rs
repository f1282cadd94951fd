//! Icon collection data model
//!
//! Parsed form of an Iconify collection JSON document: a prefix plus a map
//! of icon name to vector body, with collection-level dimension defaults.
//! The export core treats all of this as read-only; a collection is loaded
//! once per run and shared across every variant derived from it.

use crate::domain::ids::IconName;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Iconify's dimension default when neither the icon nor the collection
/// declares one.
const DEFAULT_DIMENSION: u32 = 16;

/// A single icon record inside a collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconRecord {
    /// Inner SVG markup (the `<path .../>` etc., without the `<svg>` wrapper)
    pub body: String,

    /// Icon-specific width; falls back to the collection default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Icon-specific height; falls back to the collection default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// ViewBox left offset
    #[serde(default)]
    pub left: i32,

    /// ViewBox top offset
    #[serde(default)]
    pub top: i32,
}

/// A parsed icon collection
///
/// Owned by the icon data provider; read-only to the export core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconCollection {
    /// Collection prefix, e.g. `mdi`
    pub prefix: String,

    /// Icon name -> record
    pub icons: HashMap<String, IconRecord>,

    /// Collection-wide default width
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Collection-wide default height
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl IconCollection {
    /// Returns `true` if the collection contains the named icon
    pub fn contains(&self, icon: &IconName) -> bool {
        self.icons.contains_key(icon.as_str())
    }

    /// Number of icons in the collection
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    /// Returns `true` if the collection has no icons
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// Icon names in deterministic (sorted) order
    ///
    /// Sorting keeps export ordering and log output stable across runs even
    /// though the underlying map is unordered.
    pub fn icon_names(&self) -> Vec<IconName> {
        let mut names: Vec<&String> = self.icons.keys().collect();
        names.sort();
        names
            .into_iter()
            .filter_map(|n| IconName::new(n.as_str()).ok())
            .collect()
    }

    /// Resolves render data for one icon, or `None` if it is absent
    ///
    /// Dimension fallback order: icon record, then collection default, then
    /// the Iconify default of 16.
    pub fn icon_render_data(&self, icon: &IconName) -> Option<IconRenderData> {
        let record = self.icons.get(icon.as_str())?;
        let width = record
            .width
            .or(self.width)
            .unwrap_or(DEFAULT_DIMENSION);
        let height = record
            .height
            .or(self.height)
            .unwrap_or(DEFAULT_DIMENSION);

        Some(IconRenderData {
            body: record.body.clone(),
            width,
            height,
            view_box: format!("{} {} {} {}", record.left, record.top, width, height),
        })
    }
}

/// Everything needed to render one icon to a standalone SVG document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRenderData {
    /// Inner SVG markup
    pub body: String,
    /// Intrinsic width
    pub width: u32,
    /// Intrinsic height
    pub height: u32,
    /// Computed `viewBox` attribute value
    pub view_box: String,
}
