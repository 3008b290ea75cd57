//! Asset domain models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// Domain model representing a tracked physical asset.
///
/// `id` and `created_at` are assigned by the store and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: i32,
    pub name: String,
    /// Free-text grouping label (e.g. "Furniture", "Vehicles").
    pub category: String,
    pub value: f64,
    /// ISO-8601 calendar date (`YYYY-MM-DD`) kept as text.
    pub purchase_date: String,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Input model for creating a new asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAsset {
    pub name: String,
    pub category: String,
    pub value: f64,
    pub purchase_date: String,
    pub description: Option<String>,
}

/// Full replacement of an asset's mutable fields.
///
/// There is no partial patch: every field here overwrites the stored one,
/// including `description` (a `None` clears it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetUpdate {
    pub name: String,
    pub category: String,
    pub value: f64,
    pub purchase_date: String,
    pub description: Option<String>,
}

impl NewAsset {
    /// Validates the new asset data.
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.name, &self.category, self.value, &self.purchase_date)
    }
}

impl AssetUpdate {
    /// Validates the replacement data.
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.name, &self.category, self.value, &self.purchase_date)
    }
}

impl From<Asset> for AssetUpdate {
    fn from(asset: Asset) -> Self {
        Self {
            name: asset.name,
            category: asset.category,
            value: asset.value,
            purchase_date: asset.purchase_date,
            description: asset.description,
        }
    }
}

impl From<NewAsset> for AssetUpdate {
    fn from(new_asset: NewAsset) -> Self {
        Self {
            name: new_asset.name,
            category: new_asset.category,
            value: new_asset.value,
            purchase_date: new_asset.purchase_date,
            description: new_asset.description,
        }
    }
}

fn validate_fields(name: &str, category: &str, value: f64, purchase_date: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("name".to_string()).into());
    }
    if category.trim().is_empty() {
        return Err(ValidationError::MissingField("category".to_string()).into());
    }
    if !value.is_finite() || value < 0.0 {
        return Err(ValidationError::InvalidInput(format!(
            "value must be a non-negative number, got {}",
            value
        ))
        .into());
    }
    if !is_iso_date_shaped(purchase_date) {
        return Err(ValidationError::InvalidInput(format!(
            "purchase_date must be formatted as YYYY-MM-DD, got '{}'",
            purchase_date
        ))
        .into());
    }
    Ok(())
}

/// Checks the `YYYY-MM-DD` shape only; "2024-02-31" passes.
fn is_iso_date_shaped(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
