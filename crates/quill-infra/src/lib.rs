//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `mongodb` - MongoDB document store support

pub mod database;

// Re-exports - In-Memory
pub use database::InMemoryPostRepository;

// Re-exports - MongoDB
#[cfg(feature = "mongodb")]
pub use database::{DatabaseConfig, DatabaseConnection, MongoPostRepository};
