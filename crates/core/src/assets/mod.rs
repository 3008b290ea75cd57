//! Assets module - domain models, services, and traits.

mod assets_memory_repository;
mod assets_model;
mod assets_service;
mod assets_traits;


// Re-export the public interface
pub use assets_memory_repository::InMemoryAssetRepository;
pub use assets_model::{Asset, AssetUpdate, NewAsset};
pub use assets_service::AssetService;
pub use assets_traits::{AssetRepositoryTrait, AssetServiceTrait};
