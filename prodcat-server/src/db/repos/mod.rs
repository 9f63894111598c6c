//! Repository implementations for store access
//!
//! Single-document operations only; every mutation commits before the
//! call returns.

pub mod products;

pub use products::{Product, ProductRepo};
