use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::Command;

/// Handles one command type and produces its `Output` (command handler abstraction).
///
/// The handler is the only place a command's effect is performed. It receives
/// the caller's `CancellationToken` and must thread it into every suspending
/// call it makes, so an in-flight operation can observe cancellation.
///
/// Errors are handler-specific, therefore the error type is associated.
#[async_trait]
pub trait CommandHandler<C: Command>: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn handle(&self, command: C, cancel: &CancellationToken) -> Result<C::Output, Self::Error>;
}

#[async_trait]
impl<C, H> CommandHandler<C> for Arc<H>
where
    C: Command,
    H: CommandHandler<C> + ?Sized,
{
    type Error = H::Error;

    async fn handle(&self, command: C, cancel: &CancellationToken) -> Result<C::Output, Self::Error> {
        (**self).handle(command, cancel).await
    }
}
