//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities created by a command are *transient* until a repository persists
/// them; persistence is what assigns the identifier. Before that point `id()`
/// returns `None`.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier, if persistence has assigned one.
    fn id(&self) -> Option<&Self::Id>;

    /// `true` once the entity carries a persistence-assigned identity.
    fn is_persisted(&self) -> bool {
        self.id().is_some()
    }
}
