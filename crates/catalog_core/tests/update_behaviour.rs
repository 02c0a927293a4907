use std::sync::Once;

use catalog_core::{
    update, CatalogState, FilterField, ImportRow, ListingDraft, ListingId, MemorySlot, Msg,
    Notice, RecordStore, SortKey, SortOrder,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

fn new_state() -> CatalogState<MemorySlot> {
    CatalogState::new(RecordStore::open(MemorySlot::new()).unwrap())
}

fn draft(name: &str, url: &str, technique: &str) -> ListingDraft {
    ListingDraft::new(name, url, technique, "Oyo")
}

fn submit(
    state: CatalogState<MemorySlot>,
    draft: ListingDraft,
) -> (CatalogState<MemorySlot>, ListingId) {
    let (state, notices) = update(state, Msg::FormSubmitted(draft));
    match notices.as_slice() {
        [Notice::ListingAdded(id)] => {
            let id = id.clone();
            (state, id)
        }
        other => panic!("unexpected notices {other:?}"),
    }
}

#[test]
fn form_submission_adds_listing_and_marks_dirty() {
    init_logging();
    let (mut state, id) = submit(
        new_state(),
        draft("Ikkyo", "https://youtu.be/dQw4w9WgXcQ", "Ikkyo"),
    );

    let view = state.view();
    assert_eq!(view.total, 1);
    assert_eq!(view.rows[0].id, id);
    assert_eq!(
        view.rows[0].thumbnail_url.as_deref(),
        Some("https://img.youtube.com/vi/dQw4w9WgXcQ/mqdefault.jpg")
    );
    assert!(view.dirty);
    assert!(state.consume_dirty());
    assert!(!state.consume_dirty());
}

#[test]
fn invalid_submission_is_rejected() {
    init_logging();
    let (state, notices) = update(
        new_state(),
        Msg::FormSubmitted(draft("x", "https://example.com/video", "Ikkyo")),
    );

    assert!(matches!(notices.as_slice(), [Notice::Rejected(_)]));
    assert_eq!(state.view().total, 0);
    assert!(!state.view().dirty);
}

#[test]
fn editing_replaces_required_fields_and_leaves_edit_mode() {
    init_logging();
    let (state, id) = submit(
        new_state(),
        draft("Old", "https://youtu.be/aaaaaaaaaaa", "Ikkyo").with_direction("Omote"),
    );

    let (state, notices) = update(state, Msg::EditRequested(id.clone()));
    assert!(notices.is_empty());
    let view = state.view();
    assert_eq!(view.editing, Some(id.clone()));
    let form = view.edit_form.expect("edit form");
    assert_eq!(form.name, "Old");
    assert_eq!(form.direction.as_deref(), Some("Omote"));

    let (state, notices) = update(
        state,
        Msg::FormSubmitted(draft("New", "https://youtu.be/bbbbbbbbbbb", "Nikyo")),
    );
    assert_eq!(notices, vec![Notice::ListingUpdated(id.clone())]);

    let listing = state.store().get(&id).unwrap();
    assert_eq!(listing.name, "New");
    assert_eq!(listing.video_id.as_deref(), Some("bbbbbbbbbbb"));
    assert_eq!(listing.direction.as_deref(), Some("Omote"));
    assert_eq!(state.view().editing, None);
    assert_eq!(state.view().total, 1);
}

#[test]
fn edit_with_blank_optional_keeps_stored_value() {
    init_logging();
    let (state, id) = submit(
        new_state(),
        draft("Old", "https://youtu.be/aaaaaaaaaaa", "Ikkyo")
            .with_direction("Omote")
            .with_stance("Aihanmi"),
    );
    let (state, _) = update(state, Msg::EditRequested(id.clone()));

    let (state, notices) = update(
        state,
        Msg::FormSubmitted(
            draft("Old", "https://youtu.be/aaaaaaaaaaa", "Ikkyo")
                .with_direction("")
                .with_stance("Gyakuhanmi"),
        ),
    );
    assert_eq!(notices, vec![Notice::ListingUpdated(id.clone())]);

    let listing = state.store().get(&id).unwrap();
    assert_eq!(listing.direction.as_deref(), Some("Omote"));
    assert_eq!(listing.stance.as_deref(), Some("Gyakuhanmi"));
}

#[test]
fn rejected_edit_stays_in_edit_mode() {
    init_logging();
    let (state, id) = submit(
        new_state(),
        draft("Old", "https://youtu.be/aaaaaaaaaaa", "Ikkyo"),
    );
    let (state, _) = update(state, Msg::EditRequested(id.clone()));

    let (state, notices) = update(state, Msg::FormSubmitted(draft("", "", "Ikkyo")));

    assert!(matches!(notices.as_slice(), [Notice::Rejected(_)]));
    assert_eq!(state.view().editing, Some(id.clone()));
    assert_eq!(state.store().get(&id).unwrap().name, "Old");
}

#[test]
fn edit_of_unknown_listing_reports_not_found() {
    init_logging();
    let missing = ListingId::from("missing");
    let (state, notices) = update(new_state(), Msg::EditRequested(missing.clone()));

    assert_eq!(notices, vec![Notice::NotFound(missing)]);
    assert_eq!(state.view().editing, None);
}

#[test]
fn deleting_edited_listing_cancels_edit() {
    init_logging();
    let (state, id) = submit(
        new_state(),
        draft("a", "https://youtu.be/aaaaaaaaaaa", "Ikkyo"),
    );
    let (state, _) = update(state, Msg::EditRequested(id.clone()));

    let (state, notices) = update(state, Msg::DeleteClicked(id.clone()));
    assert_eq!(notices, vec![Notice::ListingDeleted(id.clone())]);
    assert_eq!(state.view().editing, None);
    assert_eq!(state.view().total, 0);

    let (_state, notices) = update(state, Msg::DeleteClicked(id));
    assert!(notices.is_empty());
}

#[test]
fn edit_cancelled_clears_form() {
    init_logging();
    let (state, id) = submit(
        new_state(),
        draft("a", "https://youtu.be/aaaaaaaaaaa", "Ikkyo"),
    );
    let (state, _) = update(state, Msg::EditRequested(id));
    let (state, _) = update(state, Msg::EditCancelled);

    let view = state.view();
    assert_eq!(view.editing, None);
    assert_eq!(view.edit_form, None);
}

#[test]
fn filter_and_sort_drive_rows() {
    init_logging();
    let (state, _) = submit(
        new_state(),
        draft("charlie", "https://youtu.be/aaaaaaaaaaa", "Ikkyo"),
    );
    let (state, _) = submit(state, draft("alpha", "https://youtu.be/bbbbbbbbbbb", "Ikkyo"));
    let (mut state, _) = submit(state, draft("bravo", "https://youtu.be/ccccccccccc", "Nikyo"));
    state.consume_dirty();

    let (mut state, _) = update(
        state,
        Msg::FilterChanged {
            field: FilterField::Technique,
            value: Some("Ikkyo".into()),
        },
    );
    assert!(state.consume_dirty());
    let names: Vec<String> = state.view().rows.into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["alpha", "charlie"]);

    let (mut state, _) = update(
        state,
        Msg::SortChanged {
            key: SortKey::Name,
            order: SortOrder::Descending,
        },
    );
    assert!(state.consume_dirty());
    let names: Vec<String> = state.view().rows.into_iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["charlie", "alpha"]);
    assert_eq!(state.view().total, 3);

    let (mut state, _) = update(
        state,
        Msg::FilterChanged {
            field: FilterField::Technique,
            value: Some(String::new()),
        },
    );
    assert!(state.consume_dirty());
    assert_eq!(state.view().rows.len(), 3);
    assert_eq!(state.view().filters.technique, None);
}

#[test]
fn unchanged_sort_does_not_mark_dirty() {
    init_logging();
    let (mut state, _) = update(
        new_state(),
        Msg::SortChanged {
            key: SortKey::Name,
            order: SortOrder::Ascending,
        },
    );
    assert!(!state.consume_dirty());
}

#[test]
fn imported_rows_are_summarized() {
    init_logging();
    let rows = vec![
        ImportRow {
            name: Some("a".into()),
            url: Some("https://youtu.be/aaaaaaaaaaa".into()),
            technique: Some("Ikkyo".into()),
            format: Some("Oyo".into()),
            ..ImportRow::default()
        },
        ImportRow::default(),
    ];

    let (state, notices) = update(new_state(), Msg::RowsImported(rows));

    let [Notice::ImportFinished(summary)] = notices.as_slice() else {
        panic!("unexpected notices {notices:?}");
    };
    assert_eq!(summary.added, 1);
    assert_eq!(summary.skipped.len(), 1);
    let view = state.view();
    assert_eq!(view.last_import.as_ref(), Some(summary));
    assert_eq!(view.total, 1);
    assert!(view.dirty);
}

#[test]
fn persistence_failure_is_reported() {
    init_logging();
    let mut store = RecordStore::open(MemorySlot::new()).unwrap();
    store.slot_mut().set_fail_saves(true);
    let state = CatalogState::new(store);

    let (state, notices) = update(
        state,
        Msg::FormSubmitted(draft("a", "https://youtu.be/aaaaaaaaaaa", "Ikkyo")),
    );

    assert!(matches!(notices.as_slice(), [Notice::PersistFailed(_)]));
    assert_eq!(state.view().total, 0);
}
