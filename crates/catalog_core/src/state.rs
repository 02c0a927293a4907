use crate::slot::ListingSlot;
use crate::view_model::{CatalogViewModel, ListingRowView};
use crate::{
    project, ImportSummary, ListingDraft, ListingFilters, ListingId, RecordStore, SortKey,
    SortOrder,
};

/// Store plus the presentation parameters of one editing session.
#[derive(Debug)]
pub struct CatalogState<S> {
    store: RecordStore<S>,
    filters: ListingFilters,
    sort_key: SortKey,
    sort_order: SortOrder,
    editing: Option<ListingId>,
    last_import: Option<ImportSummary>,
    dirty: bool,
}

impl<S: ListingSlot> CatalogState<S> {
    pub fn new(store: RecordStore<S>) -> Self {
        Self {
            store,
            filters: ListingFilters::default(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            editing: None,
            last_import: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> CatalogViewModel {
        let rows = project(
            self.store.all(),
            &self.filters,
            self.sort_key,
            self.sort_order,
        )
        .into_iter()
        .map(ListingRowView::from)
        .collect();

        let edit_form = self
            .editing
            .as_ref()
            .and_then(|id| self.store.get(id))
            .map(ListingDraft::from);

        CatalogViewModel {
            rows,
            total: self.store.len(),
            filters: self.filters.clone(),
            sort_key: self.sort_key,
            sort_order: self.sort_order,
            editing: self.editing.clone(),
            edit_form,
            last_import: self.last_import.clone(),
            dirty: self.dirty,
        }
    }

    pub fn store(&self) -> &RecordStore<S> {
        &self.store
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn store_mut(&mut self) -> &mut RecordStore<S> {
        &mut self.store
    }

    pub(crate) fn filters(&self) -> &ListingFilters {
        &self.filters
    }

    pub(crate) fn filters_mut(&mut self) -> &mut ListingFilters {
        &mut self.filters
    }

    pub(crate) fn editing(&self) -> Option<&ListingId> {
        self.editing.as_ref()
    }

    pub(crate) fn set_editing(&mut self, editing: Option<ListingId>) {
        if self.editing != editing {
            self.editing = editing;
            self.mark_dirty();
        }
    }

    /// Returns `true` when the sort actually changed.
    pub(crate) fn set_sort(&mut self, key: SortKey, order: SortOrder) -> bool {
        if self.sort_key == key && self.sort_order == order {
            return false;
        }
        self.sort_key = key;
        self.sort_order = order;
        true
    }

    pub(crate) fn set_last_import(&mut self, summary: ImportSummary) {
        self.last_import = Some(summary);
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
