//! Export coordinator
//!
//! Drives a full export run: loads each collection once, expands the
//! (icons x sizes x colors x formats) variant cross-product, and fans icon
//! work out across bounded batches of tokio tasks. Failures are isolated at
//! the variant attempt level; one bad icon or format never aborts the run.

use crate::adapters::provider::{IconDataProvider, IconifyDirProvider};
use crate::adapters::raster::{Rasterizer, ResvgRasterizer};
use crate::config::ForgeConfig;
use crate::core::export::batch::{variant_set_size, IconOutcome};
use crate::core::export::summary::{ExportSummary, RunReport};
use crate::core::naming::PathBuilder;
use crate::core::render::svg_document;
use crate::domain::{
    CollectionError, CollectionId, ForgeError, IconCollection, IconName, IconSize, RenderError,
    Result, Variant, VariantOptions,
};
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// Filename of the optional end-of-run report
const RUN_REPORT_FILE: &str = "export-summary.json";

/// Batch icon exporter
///
/// Construction validates the configuration eagerly; a misconfigured
/// exporter never starts a run.
pub struct Exporter {
    config: Arc<ForgeConfig>,
    provider: Arc<dyn IconDataProvider>,
    rasterizer: Arc<dyn Rasterizer>,
}

impl Exporter {
    /// Creates an exporter with the default local-directory provider and
    /// resvg rasterizer
    pub fn new(config: ForgeConfig) -> Result<Self> {
        let provider = Arc::new(IconifyDirProvider::new(
            config.provider.collections_dir.clone(),
        ));
        Self::with_adapters(config, provider, Arc::new(ResvgRasterizer::new()))
    }

    /// Creates an exporter with explicit adapters
    pub fn with_adapters(
        config: ForgeConfig,
        provider: Arc<dyn IconDataProvider>,
        rasterizer: Arc<dyn Rasterizer>,
    ) -> Result<Self> {
        config.validate().map_err(ForgeError::Configuration)?;
        Ok(Self {
            config: Arc::new(config),
            provider,
            rasterizer,
        })
    }

    /// Exports every configured icon at the configured default size and
    /// color
    pub async fn export_icons(&self) -> Result<ExportSummary> {
        let size = self.config.export.default_size;
        let color = self.config.export.default_color.clone();
        self.export_with_variants(vec![size], vec![color]).await
    }

    /// Exports every configured icon across the given sizes and colors
    ///
    /// Empty size or color lists fall back to the configured defaults.
    /// Returns `Err` only for run-fatal conditions (invalid sizes, an
    /// uncreatable output directory); per-variant failures are counted in
    /// the summary instead.
    pub async fn export_with_variants(
        &self,
        sizes: Vec<IconSize>,
        colors: Vec<String>,
    ) -> Result<ExportSummary> {
        let sizes = if sizes.is_empty() {
            vec![self.config.export.default_size]
        } else {
            sizes
        };
        let colors = if colors.is_empty() {
            vec![self.config.export.default_color.clone()]
        } else {
            colors
        };

        for size in &sizes {
            size.validate().map_err(ForgeError::Configuration)?;
        }

        let started = Instant::now();

        tokio::fs::create_dir_all(&self.config.export.output_dir)
            .await
            .map_err(|e| {
                ForgeError::Directory(format!(
                    "cannot create output directory {}: {e}",
                    self.config.export.output_dir.display()
                ))
            })?;

        info!(
            collections = self.config.export.collections.len(),
            sizes = sizes.len(),
            colors = colors.len(),
            formats = self.config.export.formats.len(),
            "Starting export run"
        );

        let sizes = Arc::new(sizes);
        let colors = Arc::new(colors);
        let mut summary = ExportSummary::new();
        // Collections are loaded once per run, even if listed twice.
        let mut cache: HashMap<String, Arc<IconCollection>> = HashMap::new();

        for name in &self.config.export.collections {
            match CollectionId::new(name.as_str()) {
                Ok(collection) => {
                    self.export_collection(&collection, &sizes, &colors, &mut cache, &mut summary)
                        .await;
                }
                Err(e) => {
                    error!(collection = %name, error = %e, "Invalid collection name");
                    summary.add_errors(self.collection_failure_charge(&sizes, &colors));
                }
            }
        }

        summary.set_duration(started.elapsed());

        if self.config.export.write_summary {
            if let Err(e) = self.write_run_report(&summary).await {
                warn!(error = %e, "Failed to write run report");
            }
        }

        summary.log_summary();
        Ok(summary)
    }

    /// Exports one collection's icons, folding outcomes into `summary`
    async fn export_collection(
        &self,
        collection: &CollectionId,
        sizes: &Arc<Vec<IconSize>>,
        colors: &Arc<Vec<String>>,
        cache: &mut HashMap<String, Arc<IconCollection>>,
        summary: &mut ExportSummary,
    ) {
        let data = match cache.get(collection.as_str()) {
            Some(data) => Arc::clone(data),
            None => match self.provider.collection(collection).await {
                Ok(data) => {
                    let data = Arc::new(data);
                    cache.insert(collection.as_str().to_string(), Arc::clone(&data));
                    data
                }
                Err(e) => {
                    error!(collection = %collection, error = %e, "Failed to load collection");
                    summary.add_errors(self.collection_failure_charge(sizes, colors));
                    return;
                }
            },
        };

        let icons = self.icons_for(&data);
        info!(
            collection = %collection,
            icons = icons.len(),
            "Processing collection"
        );

        let variant_set = variant_set_size(sizes, colors, &self.config.export.formats);

        for chunk in icons.chunks(self.config.export.parallel_icons) {
            let mut handles = Vec::with_capacity(chunk.len());

            for icon in chunk {
                let task = IconTask {
                    config: Arc::clone(&self.config),
                    rasterizer: Arc::clone(&self.rasterizer),
                    data: Arc::clone(&data),
                    collection: collection.clone(),
                    icon: icon.clone(),
                    sizes: Arc::clone(sizes),
                    colors: Arc::clone(colors),
                };
                handles.push(tokio::spawn(task.run()));
            }

            // A batch fully settles before the next one starts.
            for result in futures::future::join_all(handles).await {
                match result {
                    Ok(outcome) => summary.merge(&outcome),
                    Err(e) => {
                        error!(collection = %collection, error = %e, "Icon task panicked");
                        summary.add_errors(variant_set);
                    }
                }
            }
        }
    }

    /// Icons to export from a loaded collection: the configured restriction
    /// list, or every icon the collection holds
    fn icons_for(&self, data: &IconCollection) -> Vec<IconName> {
        if self.config.export.icons.is_empty() {
            data.icon_names()
        } else {
            self.config
                .export
                .icons
                .iter()
                .filter_map(|name| IconName::new(name.as_str()).ok())
                .collect()
        }
    }

    /// Error charge when a whole collection fails to load
    ///
    /// A restricted export planned one variant set per listed icon; an
    /// unrestricted one is charged a single variant set since the icon
    /// count was never learned.
    fn collection_failure_charge(&self, sizes: &[IconSize], colors: &[String]) -> usize {
        let icons = if self.config.export.icons.is_empty() {
            1
        } else {
            self.config.export.icons.len()
        };
        icons * variant_set_size(sizes, colors, &self.config.export.formats)
    }

    async fn write_run_report(&self, summary: &ExportSummary) -> Result<()> {
        let report = RunReport::new((*self.config).clone(), summary);
        let json = serde_json::to_vec_pretty(&report)?;
        let path = self.config.export.output_dir.join(RUN_REPORT_FILE);
        tokio::fs::write(&path, &json).await?;
        info!(path = %path.display(), "Wrote run report");
        Ok(())
    }
}

/// One icon's unit of work, owned by a spawned task
struct IconTask {
    config: Arc<ForgeConfig>,
    rasterizer: Arc<dyn Rasterizer>,
    data: Arc<IconCollection>,
    collection: CollectionId,
    icon: IconName,
    sizes: Arc<Vec<IconSize>>,
    colors: Arc<Vec<String>>,
}

impl IconTask {
    /// Processes the icon's entire variant set; never fails the task itself
    async fn run(self) -> IconOutcome {
        let mut outcome = IconOutcome::new();
        let variant_set =
            variant_set_size(&self.sizes, &self.colors, &self.config.export.formats);

        let render_data = match self.data.icon_render_data(&self.icon) {
            Some(data) => data,
            None => {
                let err = CollectionError::IconNotFound {
                    collection: self.collection.to_string(),
                    icon: self.icon.to_string(),
                };
                warn!(error = %err, "Skipping icon");
                outcome.record_skip(variant_set);
                return outcome;
            }
        };

        let builder = PathBuilder::new(&self.config);

        for size in self.sizes.iter() {
            for color in self.colors.iter() {
                // One base document per (size, color), shared by every format.
                let svg = svg_document(&render_data, *size, color);

                for format in &self.config.export.formats {
                    let variant = Variant {
                        collection: self.collection.clone(),
                        icon: self.icon.clone(),
                        options: VariantOptions {
                            size: *size,
                            color: color.clone(),
                            format: *format,
                        },
                    };

                    match self.export_variant(&builder, &svg, &variant).await {
                        Ok(path) => {
                            outcome.record_success();
                            info!(path = %path.display(), "Exported icon variant");
                        }
                        Err(e) => {
                            outcome.record_error();
                            error!(
                                collection = %variant.collection,
                                icon = %variant.icon,
                                size = %variant.options.size,
                                color = %variant.options.color,
                                format = %variant.options.format,
                                error = %e,
                                "Failed to export icon variant"
                            );
                        }
                    }
                }
            }
        }

        outcome
    }

    /// Writes one variant to disk, returning the path it landed at
    async fn export_variant(
        &self,
        builder: &PathBuilder<'_>,
        svg: &str,
        variant: &Variant,
    ) -> Result<PathBuf> {
        let options = &variant.options;
        let folder = builder.folder_path(&variant.collection, options);
        tokio::fs::create_dir_all(&folder).await.map_err(|e| {
            ForgeError::Directory(format!("cannot create {}: {e}", folder.display()))
        })?;

        let path = folder.join(builder.file_name(&variant.collection, &variant.icon, options));

        let bytes = if options.format.is_raster() {
            self.rasterizer.rasterize(
                svg,
                options.format,
                options.size.width(),
                options.size.height(),
            )?
        } else {
            svg.as_bytes().to_vec()
        };

        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|e| RenderError::Write {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CollectionError, OutputFormat};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::path::Path;

    /// In-memory provider for coordinator tests
    struct FakeProvider {
        collections: HashMap<String, IconCollection>,
    }

    impl FakeProvider {
        fn with_collection(json: &str) -> Self {
            let collection: IconCollection = serde_json::from_str(json).unwrap();
            let mut collections = HashMap::new();
            collections.insert(collection.prefix.clone(), collection);
            Self { collections }
        }
    }

    #[async_trait]
    impl IconDataProvider for FakeProvider {
        async fn locate_collection(&self, collection: &CollectionId) -> Option<PathBuf> {
            self.collections
                .contains_key(collection.as_str())
                .then(|| PathBuf::from(format!("{}.json", collection.as_str())))
        }

        async fn load_collection(
            &self,
            collection: &CollectionId,
            _path: &Path,
        ) -> Result<IconCollection> {
            self.collections
                .get(collection.as_str())
                .cloned()
                .ok_or_else(|| CollectionError::NotFound(collection.to_string()).into())
        }
    }

    /// Rasterizer that returns fixed bytes, or fails for chosen formats
    struct FakeRasterizer {
        fail_format: Option<OutputFormat>,
    }

    impl Rasterizer for FakeRasterizer {
        fn rasterize(
            &self,
            _svg: &str,
            format: OutputFormat,
            _width: u32,
            _height: u32,
        ) -> Result<Vec<u8>> {
            if self.fail_format == Some(format) {
                return Err(RenderError::Rasterize {
                    format: format.to_string(),
                    message: "boom".to_string(),
                }
                .into());
            }
            Ok(vec![0u8; 4])
        }
    }

    /// Rasterizer that panics, for exercising lost-task accounting
    struct PanickingRasterizer;

    impl Rasterizer for PanickingRasterizer {
        fn rasterize(
            &self,
            _svg: &str,
            _format: OutputFormat,
            _width: u32,
            _height: u32,
        ) -> Result<Vec<u8>> {
            panic!("rasterizer blew up");
        }
    }

    const DEMO_JSON: &str = r#"{
        "prefix": "demo",
        "icons": {
            "home": { "body": "<path d=\"M1 1\"/>", "width": 24, "height": 24 },
            "bell": { "body": "<path d=\"M2 2\"/>", "width": 24, "height": 24 }
        }
    }"#;

    fn test_config(output_dir: &Path) -> ForgeConfig {
        let mut config = ForgeConfig::default();
        config.export.collections = vec!["demo".to_string()];
        config.export.output_dir = output_dir.to_path_buf();
        config
    }

    fn exporter(config: ForgeConfig, fail_format: Option<OutputFormat>) -> Exporter {
        Exporter::with_adapters(
            config,
            Arc::new(FakeProvider::with_collection(DEMO_JSON)),
            Arc::new(FakeRasterizer { fail_format }),
        )
        .unwrap()
    }

    const FLEET_JSON: &str = r#"{
        "prefix": "demo",
        "icons": {
            "home": { "body": "<path d=\"M1 1\"/>", "width": 24, "height": 24 },
            "bell": { "body": "<path d=\"M2 2\"/>", "width": 24, "height": 24 },
            "star": { "body": "<path d=\"M3 3\"/>", "width": 24, "height": 24 },
            "gear": { "body": "<path d=\"M4 4\"/>", "width": 24, "height": 24 },
            "lock": { "body": "<path d=\"M5 5\"/>", "width": 24, "height": 24 }
        }
    }"#;

    #[tokio::test]
    async fn test_export_icons_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = exporter(test_config(dir.path()), None);

        let summary = exporter.export_icons().await.unwrap();

        // Two icons, one size, one color, one format (svg).
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.errors, 0);
        assert!(summary.is_success());
        assert!(dir.path().join("demo/demo-home-48x48.svg").exists());
        assert!(dir.path().join("demo/demo-bell-48x48.svg").exists());
    }

    #[tokio::test]
    async fn test_cross_product_attempt_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.export.formats = vec![OutputFormat::Svg, OutputFormat::Png];
        let exporter = exporter(config, None);

        let summary = exporter
            .export_with_variants(
                vec![IconSize::Square(24), IconSize::Square(48)],
                vec!["currentColor".to_string(), "#FF0000".to_string()],
            )
            .await
            .unwrap();

        // 2 icons x 2 sizes x 2 colors x 2 formats.
        assert_eq!(summary.total_attempts(), 16);
        assert_eq!(summary.processed, 16);
    }

    #[tokio::test]
    async fn test_missing_icon_charges_variant_set_but_run_continues() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.export.icons = vec!["home".to_string(), "missing".to_string()];
        config.export.formats = vec![OutputFormat::Svg, OutputFormat::Png];
        let exporter = exporter(config, None);

        let summary = exporter.export_icons().await.unwrap();

        assert_eq!(summary.processed, 2);
        assert_eq!(summary.errors, 2);
        assert_eq!(summary.skipped, 1);
    }

    #[tokio::test]
    async fn test_format_failure_isolated_per_attempt() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.export.icons = vec!["home".to_string()];
        config.export.formats = vec![OutputFormat::Svg, OutputFormat::Png, OutputFormat::Webp];
        let exporter = exporter(config, Some(OutputFormat::Png));

        let summary = exporter.export_icons().await.unwrap();

        // svg and webp land; png fails; each format accounted separately.
        assert_eq!(summary.processed, 2);
        assert_eq!(summary.errors, 1);
        assert!(dir.path().join("demo/demo-home-48x48.svg").exists());
        assert!(dir.path().join("demo/demo-home-48x48.webp").exists());
        assert!(!dir.path().join("demo/demo-home-48x48.png").exists());
    }

    #[tokio::test]
    async fn test_unknown_collection_charged_and_run_completes() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.export.collections = vec!["demo".to_string(), "ghost".to_string()];
        config.export.icons = vec!["home".to_string()];
        let exporter = exporter(config, None);

        let summary = exporter.export_icons().await.unwrap();

        // demo/home succeeds; ghost is charged one variant set per listed icon.
        assert_eq!(summary.processed, 1);
        assert_eq!(summary.errors, 1);
    }

    #[tokio::test]
    async fn test_serial_batches_cover_every_icon() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.export.parallel_icons = 1;
        let exporter = Exporter::with_adapters(
            config,
            Arc::new(FakeProvider::with_collection(FLEET_JSON)),
            Arc::new(FakeRasterizer { fail_format: None }),
        )
        .unwrap();

        let summary = exporter.export_icons().await.unwrap();

        // Five icons dispatched one batch at a time still all land.
        assert_eq!(summary.processed, 5);
        assert_eq!(summary.errors, 0);
        for icon in ["home", "bell", "star", "gear", "lock"] {
            assert!(dir
                .path()
                .join(format!("demo/demo-{icon}-48x48.svg"))
                .exists());
        }
    }

    #[tokio::test]
    async fn test_panicked_task_charged_full_variant_set() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.export.formats = vec![OutputFormat::Svg, OutputFormat::Png];
        let exporter = Exporter::with_adapters(
            config,
            Arc::new(FakeProvider::with_collection(DEMO_JSON)),
            Arc::new(PanickingRasterizer),
        )
        .unwrap();

        let summary = exporter.export_icons().await.unwrap();

        // Each icon task dies on png and its partial outcome is lost, so
        // both icons are charged their whole two-attempt set.
        assert_eq!(summary.processed, 0);
        assert_eq!(summary.errors, 4);
        assert!(!summary.is_success());
    }

    #[tokio::test]
    async fn test_invalid_size_is_run_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = exporter(test_config(dir.path()), None);

        let result = exporter
            .export_with_variants(vec![IconSize::Square(0)], vec![])
            .await;
        assert!(matches!(result, Err(ForgeError::Configuration(_))));
    }

    #[tokio::test]
    async fn test_empty_variant_lists_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.export.icons = vec!["home".to_string()];
        let exporter = exporter(config, None);

        let summary = exporter
            .export_with_variants(Vec::new(), Vec::new())
            .await
            .unwrap();

        assert_eq!(summary.processed, 1);
        assert!(dir.path().join("demo/demo-home-48x48.svg").exists());
    }

    #[tokio::test]
    async fn test_run_report_written_when_enabled() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = test_config(dir.path());
        config.export.write_summary = true;
        let exporter = exporter(config, None);

        exporter.export_icons().await.unwrap();

        let report = std::fs::read_to_string(dir.path().join("export-summary.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(json["stats"]["processed"], 2);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = ForgeConfig::default();
        let result = Exporter::with_adapters(
            config,
            Arc::new(FakeProvider {
                collections: HashMap::new(),
            }),
            Arc::new(FakeRasterizer { fail_format: None }),
        );
        assert!(matches!(result, Err(ForgeError::Configuration(_))));
    }
}
