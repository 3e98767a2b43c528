//! Command-side application abstractions.
//!
//! A command is paired with its result type at compile time (`Command::Output`)
//! and with its handler through `CommandHandler<C>`; there is no runtime
//! dispatch table. Read shapes are produced by explicit `Mapper`s.

pub mod command;
pub mod handler;
pub mod mapper;

pub use command::Command;
pub use handler::CommandHandler;
pub use mapper::{Mapper, MappingError};

pub use tokio_util::sync::CancellationToken;
