//! Entity trait: identity + continuity across state changes.

use crate::id::RecordId;

/// A persisted record whose identity is assigned by the store.
///
/// `Draft` is the field set a caller supplies on creation; the store combines
/// it with a freshly assigned id via [`Entity::from_draft`].
pub trait Entity: Clone + Send + Sync + 'static {
    /// Strongly-typed entity identifier.
    type Id: RecordId;

    /// Fields of the entity without its identity.
    type Draft: Clone + Send + Sync + 'static;

    /// Human-readable entity name used in logs and errors.
    const NAME: &'static str;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// Attach an identity to a draft.
    fn from_draft(id: Self::Id, draft: Self::Draft) -> Self;

    /// Strip the identity again.
    fn into_draft(self) -> Self::Draft;
}
