//! Asset Registry Core - Domain entities, services, and traits.
//!
//! This crate contains the business rules for tracking organizational assets.
//! It is database-agnostic and defines the repository trait that is implemented
//! by the `storage-sqlite` crate (and by an in-memory store for tests).

pub mod assets;
pub mod errors;

pub use assets::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
