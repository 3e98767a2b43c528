//! Persistence port for products.

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use catalog_core::ProductId;

use crate::product::Product;

/// Repository operation error.
///
/// `Cancelled` is kept apart from `Persistence` so callers can tell "not done"
/// from "failed".
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The entity could not be stored (connectivity, constraint violation, storage full).
    #[error("persistence failure: {0}")]
    Persistence(String),

    /// The caller cancelled the operation before it completed.
    #[error("operation cancelled")]
    Cancelled,
}

impl RepositoryError {
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }
}

/// Durable storage for products.
///
/// ## Add Semantics
///
/// `add()`:
/// - takes ownership of a transient product and returns it with its identity set
/// - makes the product durable before returning `Ok`
/// - is all or nothing: on `Err` no product is observable through `get`/`list`
/// - must honor `cancel` by aborting the write and returning `Cancelled`
///
/// Implementations must be safe to call concurrently from independent tasks.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn add(&self, product: Product, cancel: &CancellationToken) -> Result<Product, RepositoryError>;

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError>;

    /// All products, ordered by id.
    async fn list(&self) -> Result<Vec<Product>, RepositoryError>;
}

#[async_trait]
impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    async fn add(&self, product: Product, cancel: &CancellationToken) -> Result<Product, RepositoryError> {
        (**self).add(product, cancel).await
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        (**self).get(id).await
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        (**self).list().await
    }
}
