//! Identifier generation port.

use uuid::Uuid;

/// Source of fresh entity identifiers.
///
/// Sources take `&self` so a single source can be shared between stores.
/// Implementations must never repeat an identifier they have handed out or
/// been told about through [`IdSource::observe`].
#[cfg_attr(test, mockall::automock)]
pub trait IdSource {
    /// Returns the next identifier.
    fn next_id(&self) -> Uuid;

    /// Records an identifier that is already in use elsewhere.
    fn observe(&self, id: Uuid);
}
