//! Product endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::db::{Product, ProductRepo};
use crate::http::error::ApiError;
use crate::http::extractors::ValidProductId;
use crate::http::server::AppState;
use crate::models::{NewProduct, ProductPatch};

/// Product response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub features: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.to_hex(),
            name: p.name,
            description: p.description,
            long_description: p.long_description,
            price: p.price,
            image: p.image,
            features: p.features,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

/// Delete confirmation response
#[derive(Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// GET /products - list all products
async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ProductResponse>>, ApiError> {
    let db = state.store.database().await?;
    let products = ProductRepo::new(db).list().await?;

    Ok(Json(products.into_iter().map(ProductResponse::from).collect()))
}

/// POST /products - create a new product
async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(input): Json<NewProduct>,
) -> Result<(StatusCode, Json<ProductResponse>), ApiError> {
    input.validate()?;

    let db = state.store.database().await?;
    let product = ProductRepo::new(db).create(input).await?;

    Ok((StatusCode::CREATED, Json(ProductResponse::from(product))))
}

/// GET /products/{id} - get a single product
async fn get_product(
    State(state): State<Arc<AppState>>,
    ValidProductId(id): ValidProductId,
) -> Result<Json<ProductResponse>, ApiError> {
    let db = state.store.database().await?;
    let product = ProductRepo::new(db).get(id).await?;

    Ok(Json(ProductResponse::from(product)))
}

/// PUT /products/{id} - merge fields into a product
async fn update_product(
    State(state): State<Arc<AppState>>,
    ValidProductId(id): ValidProductId,
    Json(patch): Json<ProductPatch>,
) -> Result<Json<ProductResponse>, ApiError> {
    patch.validate()?;

    let db = state.store.database().await?;
    let product = ProductRepo::new(db).update(id, patch).await?;

    Ok(Json(ProductResponse::from(product)))
}

/// DELETE /products/{id} - remove a product
async fn delete_product(
    State(state): State<Arc<AppState>>,
    ValidProductId(id): ValidProductId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let db = state.store.database().await?;
    ProductRepo::new(db).delete(id).await?;

    Ok(Json(DeleteResponse {
        message: "Product deleted successfully",
    }))
}

/// Product routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/products", get(list_products).post(create_product))
        .route(
            "/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}
