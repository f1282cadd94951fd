//! Local-directory Iconify collection provider
//!
//! Reads collections from a directory of Iconify JSON documents, one file
//! per collection, named `{prefix}.json`.

use crate::adapters::provider::traits::IconDataProvider;
use crate::domain::{CollectionError, CollectionId, IconCollection, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Provider backed by a local directory of `{prefix}.json` files
#[derive(Debug, Clone)]
pub struct IconifyDirProvider {
    collections_dir: PathBuf,
}

impl IconifyDirProvider {
    pub fn new(collections_dir: PathBuf) -> Self {
        Self { collections_dir }
    }
}

#[async_trait]
impl IconDataProvider for IconifyDirProvider {
    async fn locate_collection(&self, collection: &CollectionId) -> Option<PathBuf> {
        let path = self
            .collections_dir
            .join(format!("{}.json", collection.as_str()));
        if tokio::fs::try_exists(&path).await.unwrap_or(false) {
            Some(path)
        } else {
            None
        }
    }

    async fn load_collection(
        &self,
        collection: &CollectionId,
        path: &Path,
    ) -> Result<IconCollection> {
        debug!(
            collection = %collection,
            path = %path.display(),
            "Loading icon collection"
        );

        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| CollectionError::Read {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        let parsed: IconCollection =
            serde_json::from_str(&raw).map_err(|e| CollectionError::Parse {
                collection: collection.to_string(),
                message: e.to_string(),
            })?;

        debug!(
            collection = %collection,
            icons = parsed.len(),
            "Loaded icon collection"
        );

        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ForgeError, IconName};
    use std::io::Write;

    fn write_collection(dir: &Path, prefix: &str, json: &str) {
        let mut file = std::fs::File::create(dir.join(format!("{prefix}.json"))).unwrap();
        file.write_all(json.as_bytes()).unwrap();
    }

    #[tokio::test]
    async fn test_locate_existing_collection() {
        let dir = tempfile::tempdir().unwrap();
        write_collection(
            dir.path(),
            "demo",
            r#"{ "prefix": "demo", "icons": { "home": { "body": "<path/>" } } }"#,
        );

        let provider = IconifyDirProvider::new(dir.path().to_path_buf());
        let located = provider
            .locate_collection(&CollectionId::new("demo").unwrap())
            .await;
        assert_eq!(located, Some(dir.path().join("demo.json")));
    }

    #[tokio::test]
    async fn test_locate_missing_collection() {
        let dir = tempfile::tempdir().unwrap();
        let provider = IconifyDirProvider::new(dir.path().to_path_buf());
        let located = provider
            .locate_collection(&CollectionId::new("absent").unwrap())
            .await;
        assert!(located.is_none());
    }

    #[tokio::test]
    async fn test_collection_loads_and_parses() {
        let dir = tempfile::tempdir().unwrap();
        write_collection(
            dir.path(),
            "demo",
            r#"{ "prefix": "demo", "icons": { "home": { "body": "<path d=\"M1 1\"/>", "width": 24, "height": 24 } } }"#,
        );

        let provider = IconifyDirProvider::new(dir.path().to_path_buf());
        let collection = provider
            .collection(&CollectionId::new("demo").unwrap())
            .await
            .unwrap();
        assert!(collection.contains(&IconName::new("home").unwrap()));
    }

    #[tokio::test]
    async fn test_collection_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let provider = IconifyDirProvider::new(dir.path().to_path_buf());
        let err = provider
            .collection(&CollectionId::new("absent").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Collection(CollectionError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_collection_malformed_json_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        write_collection(dir.path(), "broken", "{ not json");

        let provider = IconifyDirProvider::new(dir.path().to_path_buf());
        let err = provider
            .collection(&CollectionId::new("broken").unwrap())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ForgeError::Collection(CollectionError::Parse { .. })
        ));
    }
}
