//! # Quill Core
//!
//! The domain layer of the Quill blog service.
//! This crate contains the post entity and the repository port, with no
//! knowledge of the document store behind it.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::RepoError;
