use super::assets_model::{Asset, AssetUpdate, NewAsset};
use crate::errors::Result;

/// Trait defining the contract for Asset service operations.
#[async_trait::async_trait]
pub trait AssetServiceTrait: Send + Sync {
    fn get_assets(&self) -> Result<Vec<Asset>>;
    fn get_asset(&self, asset_id: i32) -> Result<Asset>;
    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset>;
    async fn update_asset(&self, asset_id: i32, changes: AssetUpdate) -> Result<Asset>;
    async fn delete_asset(&self, asset_id: i32) -> Result<()>;
}

/// Trait defining the contract for Asset repository operations.
///
/// Lookups that can miss report absence in the `Ok` channel (`None` / `false`)
/// so that `Err` always means the store itself failed.
#[async_trait::async_trait]
pub trait AssetRepositoryTrait: Send + Sync {
    /// Inserts a new row; the store assigns `id` and `created_at`.
    async fn create(&self, new_asset: NewAsset) -> Result<Asset>;
    /// Replaces every mutable field of the row, leaving `id` and `created_at` untouched.
    async fn update(&self, asset_id: i32, changes: AssetUpdate) -> Result<Option<Asset>>;
    async fn delete(&self, asset_id: i32) -> Result<bool>;
    fn get_by_id(&self, asset_id: i32) -> Result<Option<Asset>>;
    /// Lists every asset in insertion order.
    fn list(&self) -> Result<Vec<Asset>>;
}
