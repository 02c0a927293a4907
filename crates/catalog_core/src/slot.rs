use crate::error::SlotError;
use crate::Listing;

/// Durable location holding the whole collection, rewritten in full on every save.
pub trait ListingSlot {
    /// Reads the stored collection; an empty slot yields an empty vector.
    fn load(&mut self) -> Result<Vec<Listing>, SlotError>;

    /// Replaces the stored collection. Must not return before the write is durable.
    fn save(&mut self, listings: &[Listing]) -> Result<(), SlotError>;
}

/// In-memory slot for tests and embedders without a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    stored: Vec<Listing>,
    saves: usize,
    fail_saves: bool,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds `listings`, as if saved by an earlier session.
    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            stored: listings,
            ..Self::default()
        }
    }

    /// Makes every following save fail until reset.
    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }

    pub fn stored(&self) -> &[Listing] {
        &self.stored
    }

    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl ListingSlot for MemorySlot {
    fn load(&mut self) -> Result<Vec<Listing>, SlotError> {
        Ok(self.stored.clone())
    }

    fn save(&mut self, listings: &[Listing]) -> Result<(), SlotError> {
        if self.fail_saves {
            return Err(SlotError::Write("quota exceeded".into()));
        }
        self.stored = listings.to_vec();
        self.saves += 1;
        Ok(())
    }
}

impl<T: ListingSlot + ?Sized> ListingSlot for Box<T> {
    fn load(&mut self) -> Result<Vec<Listing>, SlotError> {
        (**self).load()
    }

    fn save(&mut self, listings: &[Listing]) -> Result<(), SlotError> {
        (**self).save(listings)
    }
}
