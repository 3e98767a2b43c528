use std::collections::BTreeMap;
use std::sync::RwLock;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use catalog_core::{Entity, ProductId};
use catalog_products::{Product, ProductRepository, RepositoryError};

use crate::config::CatalogConfig;

#[derive(Debug)]
struct Table {
    next_id: i64,
    rows: BTreeMap<ProductId, Product>,
}

/// In-memory product repository.
///
/// Intended for tests/dev. Ids are issued from a counter that lives under the
/// same lock as the rows, so concurrent `add`s never share an id and an id is
/// never reused. An optional write latency simulates a slow backend; the write
/// can be cancelled while it is pending.
#[derive(Debug)]
pub struct InMemoryProductRepository {
    table: RwLock<Table>,
    write_latency: Duration,
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::starting_at(ProductId::new(1))
    }

    /// Repository whose first issued id is `first_id`.
    pub fn starting_at(first_id: ProductId) -> Self {
        Self {
            table: RwLock::new(Table {
                next_id: first_id.get(),
                rows: BTreeMap::new(),
            }),
            write_latency: Duration::ZERO,
        }
    }

    pub fn from_config(config: &CatalogConfig) -> Self {
        Self::starting_at(config.first_product_id).with_write_latency(config.store_write_latency)
    }

    pub fn with_write_latency(mut self, latency: Duration) -> Self {
        self.write_latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.table.read().map(|t| t.rows.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert(&self, product: Product) -> Result<Product, RepositoryError> {
        let mut table = self
            .table
            .write()
            .map_err(|_| RepositoryError::persistence("lock poisoned"))?;

        let id = ProductId::new(table.next_id);
        table.next_id = table
            .next_id
            .checked_add(1)
            .ok_or_else(|| RepositoryError::persistence("product id space exhausted"))?;

        let persisted = product.with_id(id);
        table.rows.insert(id, persisted.clone());
        Ok(persisted)
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn add(&self, product: Product, cancel: &CancellationToken) -> Result<Product, RepositoryError> {
        if let Some(id) = product.id() {
            return Err(RepositoryError::persistence(format!(
                "entity already has identity {id}"
            )));
        }

        if cancel.is_cancelled() {
            return Err(RepositoryError::Cancelled);
        }

        if !self.write_latency.is_zero() {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tracing::debug!("product write cancelled while pending");
                    return Err(RepositoryError::Cancelled);
                }
                _ = tokio::time::sleep(self.write_latency) => {}
            }
        }

        let persisted = self.insert(product)?;
        tracing::debug!(product_id = ?persisted.id(), "product stored");
        Ok(persisted)
    }

    async fn get(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::persistence("lock poisoned"))?;

        Ok(table.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>, RepositoryError> {
        let table = self
            .table
            .read()
            .map_err(|_| RepositoryError::persistence("lock poisoned"))?;

        Ok(table.rows.values().cloned().collect())
    }
}
