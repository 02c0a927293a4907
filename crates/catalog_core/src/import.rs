use catalog_logging::{catalog_info, catalog_warn};
use serde::Deserialize;

use crate::error::{StoreError, ValidationError};
use crate::listing::AttributeChange;
use crate::slot::ListingSlot;
use crate::{ListingDraft, ListingPatch, RecordStore};

/// One parsed row of a bulk-import table, keyed by column header.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct ImportRow {
    pub name: Option<String>,
    pub url: Option<String>,
    pub technique: Option<String>,
    pub format: Option<String>,
    pub direction: Option<String>,
    pub attack: Option<String>,
    pub stance: Option<String>,
}

impl ImportRow {
    fn draft(&self) -> ListingDraft {
        ListingDraft {
            name: self.name.clone().unwrap_or_default(),
            url: self.url.clone().unwrap_or_default(),
            technique: self.technique.clone().unwrap_or_default(),
            format: self.format.clone().unwrap_or_default(),
            direction: self.direction.clone(),
            attack: self.attack.clone(),
            stance: self.stance.clone(),
        }
    }

    /// Row values over an existing listing; blank optionals leave it untouched.
    fn patch(&self, draft: ListingDraft) -> ListingPatch {
        ListingPatch {
            direction: AttributeChange::set_if_present(self.direction.as_deref()),
            attack: AttributeChange::set_if_present(self.attack.as_deref()),
            stance: AttributeChange::set_if_present(self.stance.as_deref()),
            name: Some(draft.name),
            url: Some(draft.url),
            technique: Some(draft.technique),
            format: Some(draft.format),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// Zero-based position in the batch.
    pub index: usize,
    pub error: ValidationError,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImportSummary {
    pub added: usize,
    pub updated: usize,
    pub skipped: Vec<SkippedRow>,
}

/// Upserts each row by exact URL match, in order.
///
/// Invalid rows are skipped and reported in the summary. A persistence failure
/// stops the batch; rows before it remain committed.
pub fn reconcile<S: ListingSlot>(
    store: &mut RecordStore<S>,
    rows: impl IntoIterator<Item = ImportRow>,
) -> Result<ImportSummary, StoreError> {
    let mut summary = ImportSummary::default();

    for (index, row) in rows.into_iter().enumerate() {
        let draft = row.draft();
        if let Err(error) = draft.validate() {
            catalog_warn!("Skipping import row {}: {}", index, error);
            summary.skipped.push(SkippedRow { index, error });
            continue;
        }

        let existing = store.find_by_url(&draft.url).map(|listing| listing.id.clone());
        match existing {
            Some(id) => {
                store.update(&id, row.patch(draft))?;
                summary.updated += 1;
            }
            None => {
                store.add(draft)?;
                summary.added += 1;
            }
        }
    }

    catalog_info!(
        "Import finished: {} added, {} updated, {} skipped",
        summary.added,
        summary.updated,
        summary.skipped.len()
    );
    Ok(summary)
}
