//! Custom Axum extractors

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{ProductId, ValidationError};

/// Extract and validate a product id from the path.
///
/// Converts the external hex form into the store's key type before the
/// handler runs, so a malformed id is rejected as a validation failure.
pub struct ValidProductId(pub ProductId);

impl<S> FromRequestParts<S> for ValidProductId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::Validation(ValidationError::Empty { field: "id" }))?;

        let id = ProductId::parse(&id)?;
        Ok(Self(id))
    }
}
