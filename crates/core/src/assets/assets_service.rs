use log::{debug, info};
use std::sync::Arc;

use super::assets_model::{Asset, AssetUpdate, NewAsset};
use super::assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
use crate::errors::{Error, Result};

/// Service for managing assets
pub struct AssetService {
    asset_repository: Arc<dyn AssetRepositoryTrait>,
}

impl AssetService {
    /// Creates a new AssetService instance
    pub fn new(asset_repository: Arc<dyn AssetRepositoryTrait>) -> Self {
        Self { asset_repository }
    }
}

#[async_trait::async_trait]
impl AssetServiceTrait for AssetService {
    /// Lists all assets
    fn get_assets(&self) -> Result<Vec<Asset>> {
        self.asset_repository.list()
    }

    /// Retrieves an asset by its ID
    fn get_asset(&self, asset_id: i32) -> Result<Asset> {
        self.asset_repository
            .get_by_id(asset_id)?
            .ok_or(Error::AssetNotFound(asset_id))
    }

    async fn create_asset(&self, new_asset: NewAsset) -> Result<Asset> {
        new_asset.validate()?;
        let asset = self.asset_repository.create(new_asset).await?;
        info!("Created asset {} ({})", asset.id, asset.name);
        Ok(asset)
    }

    async fn update_asset(&self, asset_id: i32, changes: AssetUpdate) -> Result<Asset> {
        changes.validate()?;
        match self.asset_repository.update(asset_id, changes).await? {
            Some(asset) => {
                info!("Updated asset {}", asset_id);
                Ok(asset)
            }
            None => {
                debug!("Update skipped, asset {} does not exist", asset_id);
                Err(Error::AssetNotFound(asset_id))
            }
        }
    }

    async fn delete_asset(&self, asset_id: i32) -> Result<()> {
        if self.asset_repository.delete(asset_id).await? {
            info!("Deleted asset {}", asset_id);
            Ok(())
        } else {
            debug!("Delete skipped, asset {} does not exist", asset_id);
            Err(Error::AssetNotFound(asset_id))
        }
    }
}
