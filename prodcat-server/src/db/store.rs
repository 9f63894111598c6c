//! Store connection management
//!
//! The database handle is established at most once per process and shared
//! by every request. Concurrent first requests all await the same in-flight
//! initialization; a failed attempt is not cached, so the next request
//! retries. Startup probes the connection but keeps serving on failure --
//! requests then fail individually until the store comes back.

use mongodb::bson::doc;
use mongodb::{Client, Database};
use prodcat_core::config::StoreSection;
use tokio::sync::OnceCell;

use super::StoreError;

/// Lazily-connected handle to the document store.
pub struct Store {
    uri: String,
    database: String,
    handle: OnceCell<Database>,
}

impl Store {
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
            handle: OnceCell::new(),
        }
    }

    /// Build a store handle from the loaded configuration.
    pub fn from_config(config: &StoreSection) -> Self {
        Self::new(&config.uri, &config.database)
    }

    /// Get the database handle, connecting on first use.
    ///
    /// The connection is verified with a `ping` so a bad URI surfaces here
    /// rather than on the first real query.
    pub async fn database(&self) -> Result<&Database, StoreError> {
        self.handle
            .get_or_try_init(|| async {
                let client = Client::with_uri_str(&self.uri).await?;
                let db = client.database(&self.database);
                db.run_command(doc! { "ping": 1 }).await?;
                tracing::info!(database = %self.database, "connected to document store");
                Ok(db)
            })
            .await
    }

    /// Startup probe: attempt one connection, log on failure, keep going.
    pub async fn warm_up(&self) {
        if let Err(err) = self.database().await {
            tracing::warn!(
                error = %err,
                "document store unavailable at startup; will retry on first request"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests require a real store.
    // Run with: MONGODB_URI=mongodb://... cargo test -p prodcat-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn connects_and_reuses_handle() {
        let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI required");
        let store = Store::new(&uri, "prodcat_test");

        let first = store.database().await.expect("first connect failed");
        let second = store.database().await.expect("second call failed");

        // Same cached handle, not a reconnect
        assert!(std::ptr::eq(first, second));
    }

    #[tokio::test]
    async fn bad_uri_fails_per_call_without_poisoning() {
        let store = Store::new("not-a-connection-string", "prodcat_test");

        assert!(store.database().await.is_err());
        // A failed init is not cached; the next call attempts again
        assert!(store.database().await.is_err());
    }
}
