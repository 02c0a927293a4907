use crate::{FilterField, ImportRow, ListingDraft, ListingId, SortKey, SortOrder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted the listing form (adds, or saves the listing being edited).
    FormSubmitted(ListingDraft),
    /// User chose to edit a listing from the table.
    EditRequested(ListingId),
    /// User abandoned the current edit.
    EditCancelled,
    /// User clicked Delete on a row.
    DeleteClicked(ListingId),
    /// Rows parsed from an import file.
    RowsImported(Vec<ImportRow>),
    /// A filter selector changed; `None` or a blank value means "all".
    FilterChanged {
        field: FilterField,
        value: Option<String>,
    },
    /// User picked a sort column or direction.
    SortChanged { key: SortKey, order: SortOrder },
    /// Fallback for placeholder wiring.
    NoOp,
}
