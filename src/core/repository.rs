use crate::adapters::storage::{BundledStorage, HIRING_RESOURCE};
use crate::core::loader::ItemLoader;
use crate::domain::model::HiringItemMap;
use crate::domain::ports::Storage;
use crate::utils::error::Result;

/// Owns where the hiring document comes from and feeds it to the loader.
///
/// Built once by the caller and shared behind an `Arc`.
pub struct HiringRepository<S: Storage> {
    storage: S,
    path: String,
    loader: ItemLoader,
}

impl HiringRepository<BundledStorage> {
    /// Repository over the hiring list compiled into the binary.
    pub fn bundled() -> Self {
        Self::new(BundledStorage::new(), HIRING_RESOURCE)
    }
}

impl<S: Storage> HiringRepository<S> {
    pub fn new(storage: S, path: impl Into<String>) -> Self {
        Self {
            storage,
            path: path.into(),
            loader: ItemLoader::new(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn loader(&self) -> ItemLoader {
        self.loader
    }

    /// Raw bytes of the hiring document.
    pub async fn read_document(&self) -> Result<Vec<u8>> {
        self.storage.read_file(&self.path).await
    }

    /// Reads the document and returns the hiring items grouped by list id.
    pub async fn hiring_item_map(&self) -> Result<HiringItemMap> {
        let data = self.read_document().await?;
        let map = self.loader.load_slice(&data)?;
        tracing::debug!("Loaded {} lists from {}", map.len(), self.path);
        Ok(map)
    }
}
