use asset_registry_core::assets as core_assets;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct Asset {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub value: f64,
    pub purchase_date: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

impl From<core_assets::Asset> for Asset {
    fn from(a: core_assets::Asset) -> Self {
        Self {
            id: a.id,
            name: a.name,
            category: a.category,
            value: a.value,
            purchase_date: a.purchase_date,
            description: a.description,
            created_at: a.created_at,
        }
    }
}

/// Body accepted by both create and full-replacement update.
///
/// Any `id` or `created_at` sent by the client is ignored.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct AssetInput {
    pub name: String,
    pub category: String,
    pub value: f64,
    /// `YYYY-MM-DD`
    pub purchase_date: String,
    pub description: Option<String>,
}

impl From<AssetInput> for core_assets::NewAsset {
    fn from(a: AssetInput) -> Self {
        Self {
            name: a.name,
            category: a.category,
            value: a.value,
            purchase_date: a.purchase_date,
            description: a.description,
        }
    }
}

impl From<AssetInput> for core_assets::AssetUpdate {
    fn from(a: AssetInput) -> Self {
        Self {
            name: a.name,
            category: a.category,
            value: a.value,
            purchase_date: a.purchase_date,
            description: a.description,
        }
    }
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone)]
pub struct DeleteAssetResponse {
    pub message: String,
}
