//! In-process asset store.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;

use super::assets_model::{Asset, AssetUpdate, NewAsset};
use super::assets_traits::AssetRepositoryTrait;
use crate::errors::{DatabaseError, Error, Result};

#[derive(Default)]
struct MemoryState {
    assets: BTreeMap<i32, Asset>,
    last_id: i32,
}

/// Asset repository kept entirely in memory.
///
/// Ids come from a counter that never goes backwards, so an id freed by a
/// delete is not handed out again (same as SQLite `AUTOINCREMENT`).
#[derive(Default)]
pub struct InMemoryAssetRepository {
    state: RwLock<MemoryState>,
}

impl InMemoryAssetRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Database(DatabaseError::Internal(
        "in-memory asset store lock poisoned".to_string(),
    ))
}

#[async_trait]
impl AssetRepositoryTrait for InMemoryAssetRepository {
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.last_id += 1;
        let asset = Asset {
            id: state.last_id,
            name: new_asset.name,
            category: new_asset.category,
            value: new_asset.value,
            purchase_date: new_asset.purchase_date,
            description: new_asset.description,
            created_at: Utc::now().naive_utc(),
        };
        state.assets.insert(asset.id, asset.clone());
        Ok(asset)
    }

    async fn update(&self, asset_id: i32, changes: AssetUpdate) -> Result<Option<Asset>> {
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.assets.get_mut(&asset_id).map(|asset| {
            asset.name = changes.name;
            asset.category = changes.category;
            asset.value = changes.value;
            asset.purchase_date = changes.purchase_date;
            asset.description = changes.description;
            asset.clone()
        }))
    }

    async fn delete(&self, asset_id: i32) -> Result<bool> {
        let mut state = self.state.write().map_err(poisoned)?;
        Ok(state.assets.remove(&asset_id).is_some())
    }

    fn get_by_id(&self, asset_id: i32) -> Result<Option<Asset>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.assets.get(&asset_id).cloned())
    }

    fn list(&self) -> Result<Vec<Asset>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.assets.values().cloned().collect())
    }
}
