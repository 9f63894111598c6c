//! Product repository
//!
//! Merge semantics for updates: only fields present in the patch are
//! written, via a single `$set`, and the full post-update document is
//! returned. Timestamps are maintained here -- insert sets both, every
//! update bumps `updatedAt`.

use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime;
use mongodb::bson::{self, doc, Document};
use mongodb::options::ReturnDocument;
use mongodb::{Collection, Database};
use serde::{Deserialize, Serialize};

use crate::db::StoreError;
use crate::models::{NewProduct, ProductId, ProductPatch};

/// Collection name in the store
const COLLECTION: &str = "products";

/// Product document as persisted in the store
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Product repository
pub struct ProductRepo<'a> {
    db: &'a Database,
}

impl<'a> ProductRepo<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Product> {
        self.db.collection(COLLECTION)
    }

    /// List all products in store order.
    pub async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let cursor = self.collection().find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    /// Get a single product by id.
    pub async fn get(&self, id: ProductId) -> Result<Product, StoreError> {
        self.collection()
            .find_one(doc! { "_id": id.as_object_id() })
            .await?
            .ok_or_else(|| StoreError::NotFound {
                resource: "product",
                id: id.to_hex(),
            })
    }

    /// Insert a new product, assigning its id and timestamps.
    pub async fn create(&self, input: NewProduct) -> Result<Product, StoreError> {
        let now = Utc::now();
        let product = Product {
            id: ObjectId::new(),
            name: input.name,
            description: input.description,
            long_description: input.long_description,
            price: input.price,
            image: input.image,
            features: input.features,
            created_at: now,
            updated_at: now,
        };

        self.collection().insert_one(&product).await?;

        Ok(product)
    }

    /// Merge the patch into the stored document and return the result.
    pub async fn update(&self, id: ProductId, patch: ProductPatch) -> Result<Product, StoreError> {
        let update = doc! { "$set": set_document(&patch, Utc::now()) };

        self.collection()
            .find_one_and_update(doc! { "_id": id.as_object_id() }, update)
            .return_document(ReturnDocument::After)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                resource: "product",
                id: id.to_hex(),
            })
    }

    /// Remove a product permanently.
    pub async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        self.collection()
            .find_one_and_delete(doc! { "_id": id.as_object_id() })
            .await?
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound {
                resource: "product",
                id: id.to_hex(),
            })
    }
}

/// Build the `$set` document for a merge update.
///
/// Only fields present in the patch appear; `_id` and `createdAt` never do.
fn set_document(patch: &ProductPatch, now: DateTime<Utc>) -> Document {
    let mut set = doc! { "updatedAt": bson::DateTime::from_chrono(now) };

    if let Some(name) = &patch.name {
        set.insert("name", name.clone());
    }
    if let Some(description) = &patch.description {
        set.insert("description", description.clone());
    }
    if let Some(long_description) = &patch.long_description {
        set.insert("longDescription", long_description.clone());
    }
    if let Some(price) = patch.price {
        set.insert("price", price);
    }
    if let Some(image) = &patch.image {
        set.insert("image", image.clone());
    }
    if let Some(features) = &patch.features {
        set.insert("features", features.clone());
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;

    #[test]
    fn set_document_contains_only_patched_fields() {
        let patch = ProductPatch {
            price: Some(12.5),
            ..Default::default()
        };
        let set = set_document(&patch, Utc::now());

        assert_eq!(set.get_f64("price").unwrap(), 12.5);
        assert!(set.get("updatedAt").is_some());
        assert!(set.get("name").is_none());
        assert!(set.get("features").is_none());
    }

    #[test]
    fn set_document_never_touches_immutable_fields() {
        let patch = ProductPatch {
            name: Some("Widget".into()),
            description: Some("small".into()),
            long_description: Some("a small widget".into()),
            price: Some(9.99),
            image: Some("https://example.com/w.png".into()),
            features: Some(vec!["durable".into()]),
        };
        let set = set_document(&patch, Utc::now());

        assert!(set.get("_id").is_none());
        assert!(set.get("createdAt").is_none());
        assert_eq!(set.get_str("longDescription").unwrap(), "a small widget");
    }

    #[test]
    fn empty_patch_still_bumps_updated_at() {
        let set = set_document(&ProductPatch::default(), Utc::now());
        assert_eq!(set.len(), 1);
        assert!(set.get("updatedAt").is_some());
    }

    #[test]
    fn product_document_shape() {
        let now = Utc::now();
        let product = Product {
            id: ObjectId::new(),
            name: "Widget".into(),
            description: None,
            long_description: None,
            price: 9.99,
            image: None,
            features: vec![],
            created_at: now,
            updated_at: now,
        };

        let document = bson::to_document(&product).unwrap();
        assert!(document.get_object_id("_id").is_ok());
        assert_eq!(document.get_str("name").unwrap(), "Widget");
        // Absent optionals are omitted from the stored document
        assert!(document.get("description").is_none());
        assert!(document.get_datetime("createdAt").is_ok());
        assert!(document.get_datetime("updatedAt").is_ok());
    }

    // Integration tests require a real store.
    // Run with: MONGODB_URI=mongodb://... cargo test -p prodcat-server -- --ignored

    async fn test_repo_db() -> Database {
        let uri = std::env::var("MONGODB_URI").expect("MONGODB_URI required");
        let store = Store::new(&uri, "prodcat_test");
        let db = store.database().await.expect("store connect failed");
        db.collection::<Product>(COLLECTION)
            .drop()
            .await
            .expect("collection drop failed");
        db.clone()
    }

    fn widget() -> NewProduct {
        serde_json::from_str(r#"{"name": "Widget", "price": 9.99}"#).unwrap()
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get_round_trips() {
        let db = test_repo_db().await;
        let repo = ProductRepo::new(&db);

        let created = repo.create(widget()).await.unwrap();
        assert_eq!(created.name, "Widget");
        assert_eq!(created.price, 9.99);
        assert!(created.features.is_empty());

        let fetched = repo.get(ProductId::from(created.id)).await.unwrap();
        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.price, created.price);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_merges_without_replacing() {
        let db = test_repo_db().await;
        let repo = ProductRepo::new(&db);

        let created = repo.create(widget()).await.unwrap();
        let id = ProductId::from(created.id);

        let patch: ProductPatch = serde_json::from_str(r#"{"price": 12.5}"#).unwrap();
        let updated = repo.update(id, patch).await.unwrap();

        assert_eq!(updated.price, 12.5);
        assert_eq!(updated.name, "Widget");
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at.timestamp(), created.created_at.timestamp());
        // Store timestamps have millisecond precision
        assert!(updated.updated_at.timestamp_millis() >= created.updated_at.timestamp_millis());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_makes_id_not_found() {
        let db = test_repo_db().await;
        let repo = ProductRepo::new(&db);

        let created = repo.create(widget()).await.unwrap();
        let id = ProductId::from(created.id);

        repo.delete(id).await.unwrap();

        assert!(matches!(
            repo.get(id).await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            repo.update(id, ProductPatch::default()).await,
            Err(StoreError::NotFound { .. })
        ));
        assert!(matches!(
            repo.delete(id).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn list_reflects_creates_and_deletes() {
        let db = test_repo_db().await;
        let repo = ProductRepo::new(&db);

        let mut ids = Vec::new();
        for _ in 0..3 {
            ids.push(repo.create(widget()).await.unwrap().id);
        }
        repo.delete(ProductId::from(ids[0])).await.unwrap();

        let products = repo.list().await.unwrap();
        assert_eq!(products.len(), 2);
        assert!(products.iter().all(|p| p.id != ids[0]));
    }
}
