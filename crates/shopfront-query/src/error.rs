//! Error types for catalog loading and validation.
//!
//! Querying never fails; only building a [`Catalog`](crate::Catalog) does.

use std::path::PathBuf;

use thiserror::Error;

use crate::product::ProductId;

/// Errors that can occur when loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be opened or read.
    #[error("failed to read catalog from {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog is not a JSON array of products.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two products share the same identifier.
    #[error("duplicate product id '{0}'")]
    DuplicateId(ProductId),

    /// Price is negative, NaN or infinite.
    #[error("product '{id}' has invalid price {price}: must be finite and non-negative")]
    InvalidPrice { id: ProductId, price: f64 },

    /// Rating is NaN or infinite.
    #[error("product '{id}' has invalid rating {rating}: must be finite")]
    InvalidRating { id: ProductId, rating: f64 },
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
