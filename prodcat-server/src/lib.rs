//! prodcat-server: product catalog HTTP API
//!
//! One resource (products), five operations (list, get, create, update,
//! delete), backed by a document store. The HTTP layer is stateless; the
//! only shared state is the lazily-established store handle.

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ApiError, AppState, ServerConfig};
