//! Document schemas for MongoDB collections.

pub mod post;
