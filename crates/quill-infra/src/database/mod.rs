//! Post storage: the document store connector and the repositories.

mod memory;

#[cfg(feature = "mongodb")]
mod connections;
#[cfg(feature = "mongodb")]
pub mod entity;
#[cfg(feature = "mongodb")]
mod mongo_repo;

pub use memory::InMemoryPostRepository;

#[cfg(feature = "mongodb")]
pub use connections::{DatabaseConfig, DatabaseConnection, POSTS_COLLECTION};
#[cfg(feature = "mongodb")]
pub use mongo_repo::MongoPostRepository;
