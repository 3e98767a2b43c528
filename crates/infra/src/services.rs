//! Service wiring for the catalog command side.

use std::sync::Arc;

use catalog_products::CreateProductHandler;

use crate::config::{CatalogConfig, ConfigError};
use crate::repository::InMemoryProductRepository;

/// Handler type produced by the in-memory wiring.
pub type InMemoryCreateProductHandler = CreateProductHandler<Arc<InMemoryProductRepository>>;

/// Shared, cloneable handles to the wired catalog services.
#[derive(Debug, Clone)]
pub struct CatalogServices {
    pub repository: Arc<InMemoryProductRepository>,
    pub create_product: Arc<InMemoryCreateProductHandler>,
}

impl CatalogServices {
    /// In-memory wiring (dev/test): one repository shared by every handler.
    pub fn in_memory(config: &CatalogConfig) -> Self {
        let repository = Arc::new(InMemoryProductRepository::from_config(config));
        let create_product = Arc::new(CreateProductHandler::new(Arc::clone(&repository)));

        tracing::info!(
            first_product_id = %config.first_product_id,
            write_latency_ms = config.store_write_latency.as_millis() as u64,
            "catalog services wired with in-memory repository"
        );

        Self {
            repository,
            create_product,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        let config = CatalogConfig::from_env()?;
        Ok(Self::in_memory(&config))
    }
}
