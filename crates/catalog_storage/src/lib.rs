//! Catalog storage: the file-backed listing slot.
mod json_slot;

pub use json_slot::{JsonFileSlot, SlotConfig, DEFAULT_SLOT_NAME};
