/// A request to change state (command abstraction).
///
/// Commands represent **intent**, e.g. "create a product with these fields".
/// They are **transient**: built by the caller, handed to exactly one handler,
/// and discarded afterwards.
///
/// ## Result pairing
///
/// `Output` names what a successful handling returns to the caller. Tying it
/// to the command type means callers never need a runtime lookup to know what
/// comes back from `CommandHandler::<C>::handle`.
///
/// ## Design Constraints
///
/// Commands must be:
/// - **Cloneable**: they may be copied for logging or tests
/// - **Send + Sync**: handlers run on async executors across threads
/// - **'static**: commands own all their data
pub trait Command: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Result produced by a successful handling of this command.
    type Output: Send + 'static;

    /// Stable identifier used in logs (e.g. `"products.create_product"`).
    fn command_type(&self) -> &'static str;
}
