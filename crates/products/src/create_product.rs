//! `CreateProduct` command handler.
//!
//! ```text
//! CreateProduct
//!   ↓
//! 1. Build a transient Product (fields copied, created_at = now, UTC)
//!   ↓
//! 2. ProductRepository::add (the only suspension point; token threaded through)
//!   ↓
//! 3. Mapper: Product → ProductDto
//! ```
//!
//! The handler adds no recovery of its own. Repository and mapper errors reach
//! the caller as they were raised.

use async_trait::async_trait;
use chrono::Utc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use catalog_cqrs::{Command, CommandHandler, Mapper, MappingError};

use crate::mapper::ProductDtoMapper;
use crate::product::{CreateProduct, Product, ProductDto};
use crate::repository::{ProductRepository, RepositoryError};

/// Failure of a `CreateProduct` handling.
///
/// Both variants are transparent: the display and source are those of the
/// collaborator error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CreateProductError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl CreateProductError {
    /// `true` when the operation was cancelled rather than failed.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Repository(RepositoryError::Cancelled))
    }
}

/// Creates products: one repository write, one projection.
///
/// Stateless between calls; share it behind an `Arc` across tasks.
#[derive(Debug, Clone)]
pub struct CreateProductHandler<R, M = ProductDtoMapper> {
    repository: R,
    mapper: M,
}

impl<R> CreateProductHandler<R, ProductDtoMapper> {
    pub fn new(repository: R) -> Self {
        Self::with_mapper(repository, ProductDtoMapper)
    }
}

impl<R, M> CreateProductHandler<R, M> {
    pub fn with_mapper(repository: R, mapper: M) -> Self {
        Self { repository, mapper }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[async_trait]
impl<R, M> CommandHandler<CreateProduct> for CreateProductHandler<R, M>
where
    R: ProductRepository,
    M: Mapper<Product, ProductDto>,
{
    type Error = CreateProductError;

    async fn handle(
        &self,
        command: CreateProduct,
        cancel: &CancellationToken,
    ) -> Result<ProductDto, CreateProductError> {
        tracing::debug!(
            command = command.command_type(),
            name = %command.name,
            category_id = %command.category_id,
            "handling command"
        );

        let product = Product::from_command(command, Utc::now());

        if cancel.is_cancelled() {
            return Err(RepositoryError::Cancelled.into());
        }

        let persisted = match self.repository.add(product, cancel).await {
            Ok(p) => p,
            Err(err) => {
                tracing::warn!(error = %err, "product was not created");
                return Err(err.into());
            }
        };

        let dto = self.mapper.map(&persisted)?;
        tracing::info!(product_id = %dto.id(), "product created");

        Ok(dto)
    }
}
