//! Commerce error types.

use thiserror::Error;

use crate::ids::ProductId;

/// Errors raised while building the catalog.
///
/// Cart operations never fail; they have no variant here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// The catalog must contain at least one product.
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// Two products share an id.
    #[error("Duplicate product id: {0}")]
    DuplicateProductId(ProductId),

    /// A product carries a negative price.
    #[error("Negative price for product {id}: {amount}")]
    NegativePrice { id: ProductId, amount: i64 },
}
