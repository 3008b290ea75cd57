//! Database models for assets.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use asset_registry_core::assets::{Asset, AssetUpdate, NewAsset};

/// Database model for assets
#[derive(Queryable, Identifiable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct AssetDB {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub value: f64,
    pub purchase_date: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Database model for inserting an asset.
///
/// `id` and `created_at` are left to the column defaults.
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
pub struct NewAssetDB {
    pub name: String,
    pub category: String,
    pub value: f64,
    pub purchase_date: String,
    pub description: Option<String>,
}

/// Changeset for a wholesale update.
///
/// `treat_none_as_null` makes a missing description clear the column
/// instead of being skipped.
#[derive(AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::assets)]
#[diesel(treat_none_as_null = true)]
pub struct AssetChangesetDB {
    pub name: String,
    pub category: String,
    pub value: f64,
    pub purchase_date: String,
    pub description: Option<String>,
}

impl From<AssetDB> for Asset {
    fn from(db: AssetDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            category: db.category,
            value: db.value,
            purchase_date: db.purchase_date,
            description: db.description,
            created_at: db.created_at,
        }
    }
}

impl From<NewAsset> for NewAssetDB {
    fn from(domain: NewAsset) -> Self {
        Self {
            name: domain.name,
            category: domain.category,
            value: domain.value,
            purchase_date: domain.purchase_date,
            description: domain.description,
        }
    }
}

impl From<AssetUpdate> for AssetChangesetDB {
    fn from(domain: AssetUpdate) -> Self {
        Self {
            name: domain.name,
            category: domain.category,
            value: domain.value,
            purchase_date: domain.purchase_date,
            description: domain.description,
        }
    }
}
