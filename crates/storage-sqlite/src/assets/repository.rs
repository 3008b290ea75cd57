use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use asset_registry_core::assets::{Asset, AssetRepositoryTrait, AssetUpdate, NewAsset};
use asset_registry_core::Result;

use super::model::{AssetChangesetDB, AssetDB, NewAssetDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::{IntoCore, StorageError};
use crate::schema::assets;

/// Repository for managing asset data in the database
pub struct AssetRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl AssetRepository {
    /// Creates a new AssetRepository instance
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        Self { pool, writer }
    }

    /// Retrieves an asset by its ID
    pub fn get_by_id_impl(&self, asset_id: i32) -> Result<Option<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        let result = assets::table
            .find(asset_id)
            .select(AssetDB::as_select())
            .first::<AssetDB>(&mut conn)
            .optional()
            .into_core()?;

        Ok(result.map(Asset::from))
    }

    /// Lists all assets in the database
    pub fn list_impl(&self) -> Result<Vec<Asset>> {
        let mut conn = get_connection(&self.pool)?;

        let results = assets::table
            .select(AssetDB::as_select())
            .order(assets::id.asc())
            .load::<AssetDB>(&mut conn)
            .into_core()?;

        Ok(results.into_iter().map(Asset::from).collect())
    }
}

#[async_trait]
impl AssetRepositoryTrait for AssetRepository {
    /// Creates a new asset in the database
    async fn create(&self, new_asset: NewAsset) -> Result<Asset> {
        let new_asset_db: NewAssetDB = new_asset.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Asset> {
                let result_db = diesel::insert_into(assets::table)
                    .values(&new_asset_db)
                    .returning(AssetDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(result_db.into())
            })
            .await
    }

    /// Overwrites the mutable columns of an existing asset
    async fn update(&self, asset_id: i32, changes: AssetUpdate) -> Result<Option<Asset>> {
        let changeset: AssetChangesetDB = changes.into();

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Option<Asset>> {
                let result_db = diesel::update(assets::table.find(asset_id))
                    .set(&changeset)
                    .returning(AssetDB::as_returning())
                    .get_result(conn)
                    .optional()
                    .map_err(StorageError::from)?;
                Ok(result_db.map(Asset::from))
            })
            .await
    }

    async fn delete(&self, asset_id: i32) -> Result<bool> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<bool> {
                let deleted = diesel::delete(assets::table.find(asset_id))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(deleted > 0)
            })
            .await
    }

    fn get_by_id(&self, asset_id: i32) -> Result<Option<Asset>> {
        self.get_by_id_impl(asset_id)
    }

    fn list(&self) -> Result<Vec<Asset>> {
        self.list_impl()
    }
}
