//! Output path derivation
//!
//! Combines the folder layout and filename rules into the final path for a
//! variant: `{output_dir}/[folder pattern]/[grouping segments]/{file name}`.
//! Grouping segments always appear in the fixed order size, color, format
//! regardless of configuration order.

use crate::config::{ForgeConfig, NamingConfig};
use crate::core::naming::case::apply_case;
use crate::core::naming::sanitize::sanitize;
use crate::core::naming::template::{resolve, PlaceholderValues};
use crate::domain::{is_color_override, CollectionId, IconName, VariantOptions};
use std::path::PathBuf;

/// Derives output folders and filenames from the naming and folder config
#[derive(Debug, Clone, Copy)]
pub struct PathBuilder<'a> {
    config: &'a ForgeConfig,
}

impl<'a> PathBuilder<'a> {
    pub fn new(config: &'a ForgeConfig) -> Self {
        Self { config }
    }

    /// Final filename for a variant, extension included
    ///
    /// The stem goes through template resolution, then sanitization, then
    /// case conversion; the extension is appended last and always reflects
    /// the normalized format.
    pub fn file_name(
        &self,
        collection: &CollectionId,
        icon: &IconName,
        options: &VariantOptions,
    ) -> String {
        let naming: &NamingConfig = &self.config.naming;

        let values = PlaceholderValues {
            collection: collection.as_str(),
            icon: Some(icon.as_str()),
            size: Some(options.size),
            color: Some(options.color.as_str()),
            format: Some(options.format),
        };

        let stem = resolve(&naming.pattern, &values);
        let stem = sanitize(&stem, naming.sanitize);
        let stem = apply_case(&stem, naming.case);

        format!("{stem}.{}", options.format.extension())
    }

    /// Output folder for a variant
    ///
    /// With folders disabled this is the output directory itself. Otherwise
    /// the folder pattern is resolved (the icon name is never available to
    /// it), then grouping segments are appended in fixed order: a
    /// `size-{label}` segment, a `color-{value}` segment only when an
    /// explicit color override is active (with `#` stripped so hex colors
    /// stay filesystem-safe), and a bare format segment.
    pub fn folder_path(&self, collection: &CollectionId, options: &VariantOptions) -> PathBuf {
        let mut path = self.config.export.output_dir.clone();
        let folders = &self.config.folders;

        if !folders.enabled {
            return path;
        }

        let values = PlaceholderValues {
            collection: collection.as_str(),
            icon: None,
            size: Some(options.size),
            color: Some(options.color.as_str()),
            format: Some(options.format),
        };

        let base = resolve(&folders.pattern, &values);
        if !base.is_empty() {
            path.push(base);
        }

        if folders.group_by_size {
            path.push(format!("size-{}", options.size.label()));
        }
        if folders.group_by_color && is_color_override(&options.color) {
            path.push(format!("color-{}", options.color.replace('#', "")));
        }
        if folders.group_by_format {
            path.push(options.format.extension());
        }

        path
    }

    /// Full output path for a variant
    pub fn variant_path(
        &self,
        collection: &CollectionId,
        icon: &IconName,
        options: &VariantOptions,
    ) -> PathBuf {
        let mut path = self.folder_path(collection, options);
        path.push(self.file_name(collection, icon, options));
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FileCase, IconSize, OutputFormat};

    fn base_config() -> ForgeConfig {
        let mut config = ForgeConfig::default();
        config.export.collections = vec!["mdi".to_string()];
        config.export.output_dir = PathBuf::from("/out");
        config
    }

    fn options(size: IconSize, color: &str, format: OutputFormat) -> VariantOptions {
        VariantOptions {
            size,
            color: color.to_string(),
            format,
        }
    }

    fn mdi() -> CollectionId {
        CollectionId::new("mdi").unwrap()
    }

    fn home() -> IconName {
        IconName::new("home").unwrap()
    }

    #[test]
    fn test_file_name_default_pattern() {
        let config = base_config();
        let builder = PathBuilder::new(&config);
        let name = builder.file_name(
            &mdi(),
            &home(),
            &options(IconSize::Square(48), "currentColor", OutputFormat::Svg),
        );
        assert_eq!(name, "mdi-home-48x48.svg");
    }

    #[test]
    fn test_file_name_extension_follows_format() {
        let config = base_config();
        let builder = PathBuilder::new(&config);
        let name = builder.file_name(
            &mdi(),
            &home(),
            &options(IconSize::Square(48), "currentColor", OutputFormat::Jpeg),
        );
        assert_eq!(name, "mdi-home-48x48.jpeg");
    }

    #[test]
    fn test_file_name_sanitizes_resolved_stem() {
        let mut config = base_config();
        config.naming.pattern = "{collection}/{icon}-{color}".to_string();
        let builder = PathBuilder::new(&config);
        let name = builder.file_name(
            &mdi(),
            &home(),
            &options(IconSize::Square(48), "#FF0000", OutputFormat::Svg),
        );
        // Slash and hash are stripped by sanitization; kebab case lowercases.
        assert_eq!(name, "mdihome-ff0000.svg");
    }

    #[test]
    fn test_file_name_case_applied_after_sanitize() {
        let mut config = base_config();
        config.naming.pattern = "{collection} {icon}".to_string();
        config.naming.case = FileCase::Pascal;
        let builder = PathBuilder::new(&config);
        let name = builder.file_name(
            &mdi(),
            &home(),
            &options(IconSize::Square(48), "currentColor", OutputFormat::Png),
        );
        assert_eq!(name, "MdiHome.png");
    }

    #[test]
    fn test_folder_path_disabled_is_output_dir() {
        let mut config = base_config();
        config.folders.enabled = false;
        config.folders.group_by_size = true;
        config.folders.group_by_format = true;
        let builder = PathBuilder::new(&config);
        let path = builder.folder_path(
            &mdi(),
            &options(IconSize::Square(48), "currentColor", OutputFormat::Svg),
        );
        // Disabled folders override every grouping flag.
        assert_eq!(path, PathBuf::from("/out"));
    }

    #[test]
    fn test_folder_path_default_pattern() {
        let config = base_config();
        let builder = PathBuilder::new(&config);
        let path = builder.folder_path(
            &mdi(),
            &options(IconSize::Square(48), "currentColor", OutputFormat::Svg),
        );
        assert_eq!(path, PathBuf::from("/out/mdi"));
    }

    #[test]
    fn test_folder_path_grouping_segments_fixed_order() {
        let mut config = base_config();
        config.folders.group_by_size = true;
        config.folders.group_by_color = true;
        config.folders.group_by_format = true;
        let builder = PathBuilder::new(&config);
        let path = builder.folder_path(
            &mdi(),
            &options(IconSize::Square(48), "#FF0000", OutputFormat::Png),
        );
        assert_eq!(path, PathBuf::from("/out/mdi/size-48/color-FF0000/png"));
    }

    #[test]
    fn test_folder_path_color_segment_skipped_without_override() {
        let mut config = base_config();
        config.folders.group_by_color = true;
        let builder = PathBuilder::new(&config);
        let path = builder.folder_path(
            &mdi(),
            &options(IconSize::Square(48), "currentColor", OutputFormat::Svg),
        );
        assert_eq!(path, PathBuf::from("/out/mdi"));
    }

    #[test]
    fn test_folder_path_rectangular_size_label() {
        let mut config = base_config();
        config.folders.group_by_size = true;
        let builder = PathBuilder::new(&config);
        let size = IconSize::Rectangular {
            width: 40,
            height: 60,
        };
        let path = builder.folder_path(&mdi(), &options(size, "currentColor", OutputFormat::Svg));
        assert_eq!(path, PathBuf::from("/out/mdi/size-40x60"));
    }

    #[test]
    fn test_variant_path_joins_folder_and_file() {
        let config = base_config();
        let builder = PathBuilder::new(&config);
        let path = builder.variant_path(
            &mdi(),
            &home(),
            &options(IconSize::Square(48), "currentColor", OutputFormat::Svg),
        );
        assert_eq!(path, PathBuf::from("/out/mdi/mdi-home-48x48.svg"));
    }
}
