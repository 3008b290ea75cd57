//! SQLite storage implementation for assets.

mod model;
mod repository;

pub use model::{AssetChangesetDB, AssetDB, NewAssetDB};
pub use repository::AssetRepository;
