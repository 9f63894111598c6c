//! Product identifiers and validated request inputs
//!
//! The external id form is a 24-char hex string; it is parsed into the
//! store's native key type before any query runs, so a malformed id is a
//! validation failure rather than a store error.

use std::fmt;

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use super::ValidationError;

/// Validated product identifier (wraps the store's native key type)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(ObjectId);

impl ProductId {
    /// Parse the external hex form of an id.
    ///
    /// # Example
    /// ```
    /// use prodcat_server::models::ProductId;
    ///
    /// assert!(ProductId::parse("65b2f1a9c3e4d5f6a7b8c9d0").is_ok());
    /// assert!(ProductId::parse("widget-1").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| ValidationError::InvalidId {
                value: s.to_owned(),
            })
    }

    /// The store's native key.
    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }

    /// External hex form.
    pub fn to_hex(&self) -> String {
        self.0.to_hex()
    }
}

impl From<ObjectId> for ProductId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// Create input: the fields a caller may submit for a new product.
///
/// `name` and `price` are required; unknown fields are rejected at
/// deserialization so nothing undeclared reaches the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub price: f64,
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl NewProduct {
    /// Check the semantic invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::Empty { field: "name" });
        }
        Ok(())
    }
}

/// Merge-update input: every field optional, absent fields left unchanged.
///
/// The id and creation timestamp are not part of the patch surface at all,
/// so they stay immutable without any runtime check.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub price: Option<f64>,
    pub image: Option<String>,
    pub features: Option<Vec<String>>,
}

impl ProductPatch {
    /// Check the semantic invariants serde cannot express.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            if name.trim().is_empty() {
                return Err(ValidationError::Empty { field: "name" });
            }
        }
        Ok(())
    }

    /// True when no field is present (the merge would only bump `updatedAt`).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.long_description.is_none()
            && self.price.is_none()
            && self.image.is_none()
            && self.features.is_none()
    }
}
