use crate::{ImportSummary, Listing, ListingDraft, ListingFilters, ListingId, SortKey, SortOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogViewModel {
    /// Filtered and sorted rows.
    pub rows: Vec<ListingRowView>,
    /// Size of the whole collection, before filtering.
    pub total: usize,
    pub filters: ListingFilters,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub editing: Option<ListingId>,
    /// Form contents while a listing is being edited.
    pub edit_form: Option<ListingDraft>,
    pub last_import: Option<ImportSummary>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRowView {
    pub id: ListingId,
    pub name: String,
    pub url: String,
    pub technique: String,
    pub format: String,
    pub direction: String,
    pub attack: String,
    pub stance: String,
    pub thumbnail_url: Option<String>,
}

impl From<&Listing> for ListingRowView {
    fn from(listing: &Listing) -> Self {
        Self {
            id: listing.id.clone(),
            name: listing.name.clone(),
            url: listing.url.clone(),
            technique: listing.technique.clone(),
            format: listing.format.clone(),
            direction: listing.direction.clone().unwrap_or_default(),
            attack: listing.attack.clone().unwrap_or_default(),
            stance: listing.stance.clone().unwrap_or_default(),
            thumbnail_url: listing.thumbnail_url(),
        }
    }
}
