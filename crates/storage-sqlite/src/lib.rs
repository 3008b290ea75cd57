//! SQLite storage implementation for the asset registry.
//!
//! This crate provides all database-related functionality using Diesel ORM with SQLite.
//! It implements the repository trait defined in `asset-registry-core` and contains:
//! - Database connection pooling and management
//! - The embedded schema bootstrap (Diesel migrations)
//! - The single-writer actor that serializes writes
//! - The asset repository and its Diesel model types
//!
//! # Architecture
//!
//! This crate is the only place in the application where Diesel dependencies exist.
//! The core crate is database-agnostic and works with traits.
//!
//! ```text
//!        core (domain)
//!              │
//!              ▼
//!   storage-sqlite (this crate)
//!              │
//!              ▼
//!          SQLite DB
//! ```

pub mod assets;
pub mod db;
pub mod errors;
pub mod schema;

// Re-export database utilities
pub use db::{
    create_pool, get_connection, init, initialize, run_migrations, spawn_writer, DbConnection,
    DbPool, WriteHandle,
};

// Re-export storage errors and conversion helpers
pub use errors::{IntoCore, StorageError};

// Re-export from asset-registry-core for convenience
pub use asset_registry_core::errors::{DatabaseError, Error, Result};
