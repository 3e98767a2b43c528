//! Products catalog module (command side).
//!
//! Holds the product entity, the `CreateProduct` command and its handler, the
//! repository port the handler persists through, and the explicit projection to
//! the `ProductDto` read shape. No storage engine lives here; adapters are in
//! `catalog-infra`.

pub mod create_product;
pub mod mapper;
pub mod product;
pub mod repository;

pub use create_product::{CreateProductError, CreateProductHandler};
pub use mapper::ProductDtoMapper;
pub use product::{CreateProduct, Product, ProductDto};
pub use repository::{ProductRepository, RepositoryError};
