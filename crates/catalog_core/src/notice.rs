use crate::error::{SlotError, StoreError, ValidationError};
use crate::{ImportSummary, ListingId};

/// Outcome of a message, reported back to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    ListingAdded(ListingId),
    ListingUpdated(ListingId),
    ListingDeleted(ListingId),
    ImportFinished(ImportSummary),
    /// Form submission rejected; nothing was applied.
    Rejected(ValidationError),
    /// The targeted listing no longer exists.
    NotFound(ListingId),
    /// The slot write failed and the mutation was not committed.
    PersistFailed(SlotError),
}

impl From<StoreError> for Notice {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Validation(error) => Notice::Rejected(error),
            StoreError::NotFound(id) => Notice::NotFound(id),
            StoreError::Persistence(error) => Notice::PersistFailed(error),
        }
    }
}
