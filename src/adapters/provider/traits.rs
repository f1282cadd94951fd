//! Icon data provider trait

use crate::domain::{CollectionError, CollectionId, IconCollection, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Source of Iconify collection data
///
/// The export core only talks to this trait; where collections actually
/// live (a local directory, a test fixture) is an adapter concern.
#[async_trait]
pub trait IconDataProvider: Send + Sync {
    /// Finds the backing path for a collection, or `None` if it does not
    /// exist at this provider
    async fn locate_collection(&self, collection: &CollectionId) -> Option<PathBuf>;

    /// Loads and parses a collection from a previously located path
    async fn load_collection(
        &self,
        collection: &CollectionId,
        path: &Path,
    ) -> Result<IconCollection>;

    /// Locates and loads a collection in one step
    async fn collection(&self, collection: &CollectionId) -> Result<IconCollection> {
        let path = self
            .locate_collection(collection)
            .await
            .ok_or_else(|| CollectionError::NotFound(collection.to_string()))?;
        self.load_collection(collection, &path).await
    }
}
