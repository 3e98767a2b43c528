//! `ProductRepository` adapters.
//!
//! Only an in-memory adapter lives here; durable engines plug in behind the
//! same port.

pub mod in_memory;

pub use in_memory::InMemoryProductRepository;
