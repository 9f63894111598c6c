//! Document store access: connection handle and repositories

pub mod repos;
pub mod store;

pub use repos::{Product, ProductRepo};
pub use store::Store;

use thiserror::Error;

/// Store error type
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document store error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
