//! Infrastructure layer: storage adapters, config, service wiring.

pub mod config;
pub mod repository;
pub mod services;

pub use config::{CatalogConfig, ConfigError};
pub use repository::InMemoryProductRepository;
pub use services::CatalogServices;
