//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// The inventory store looks products up through this trait, so anything it
/// holds only needs to expose a comparable identifier.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
