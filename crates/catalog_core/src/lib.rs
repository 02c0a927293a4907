//! Catalog core: listing store, URL identifier extraction, import and view projection.
mod error;
mod import;
mod listing;
mod msg;
mod notice;
mod projection;
mod slot;
mod state;
mod store;
mod update;
mod video_id;
mod view_model;
pub mod vocabulary;

pub use error::{Field, FieldError, Problem, SlotError, StoreError, ValidationError};
pub use import::{reconcile, ImportRow, ImportSummary, SkippedRow};
pub use listing::{AttributeChange, Listing, ListingDraft, ListingId, ListingPatch};
pub use msg::Msg;
pub use notice::Notice;
pub use projection::{collate, project, FilterField, ListingFilters, SortKey, SortOrder};
pub use slot::{ListingSlot, MemorySlot};
pub use state::CatalogState;
pub use store::RecordStore;
pub use update::update;
pub use video_id::{extract_video_id, thumbnail_url, VIDEO_ID_LEN};
pub use view_model::{CatalogViewModel, ListingRowView};
