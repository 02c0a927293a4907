use crate::error::StoreError;
use crate::slot::ListingSlot;
use crate::{reconcile, CatalogState, ListingPatch, Msg, Notice};

/// Applies a message to state and returns what happened.
pub fn update<S: ListingSlot>(
    mut state: CatalogState<S>,
    msg: Msg,
) -> (CatalogState<S>, Vec<Notice>) {
    let notices = match msg {
        Msg::FormSubmitted(draft) => match state.editing().cloned() {
            Some(id) => {
                let result = state.store_mut().update(&id, ListingPatch::from_form(draft));
                match result {
                    Ok(()) => {
                        state.set_editing(None);
                        state.mark_dirty();
                        vec![Notice::ListingUpdated(id)]
                    }
                    Err(StoreError::NotFound(id)) => {
                        state.set_editing(None);
                        vec![Notice::NotFound(id)]
                    }
                    Err(err) => vec![err.into()],
                }
            }
            None => match state.store_mut().add(draft) {
                Ok(listing) => {
                    state.mark_dirty();
                    vec![Notice::ListingAdded(listing.id)]
                }
                Err(err) => vec![err.into()],
            },
        },
        Msg::EditRequested(id) => {
            if state.store().get(&id).is_some() {
                state.set_editing(Some(id));
                Vec::new()
            } else {
                vec![Notice::NotFound(id)]
            }
        }
        Msg::EditCancelled => {
            state.set_editing(None);
            Vec::new()
        }
        Msg::DeleteClicked(id) => match state.store_mut().delete(&id) {
            Ok(true) => {
                if state.editing() == Some(&id) {
                    state.set_editing(None);
                }
                state.mark_dirty();
                vec![Notice::ListingDeleted(id)]
            }
            Ok(false) => Vec::new(),
            Err(err) => vec![err.into()],
        },
        Msg::RowsImported(rows) => {
            let result = reconcile(state.store_mut(), rows);
            // Rows before a failure stay committed, so redraw either way.
            state.mark_dirty();
            match result {
                Ok(summary) => {
                    state.set_last_import(summary.clone());
                    vec![Notice::ImportFinished(summary)]
                }
                Err(err) => vec![err.into()],
            }
        }
        Msg::FilterChanged { field, value } => {
            let value = value.filter(|value| !value.trim().is_empty());
            if state.filters().get(field) != value.as_deref() {
                state.filters_mut().set(field, value);
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SortChanged { key, order } => {
            if state.set_sort(key, order) {
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, notices)
}
