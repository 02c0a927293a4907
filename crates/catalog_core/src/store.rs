use std::collections::HashSet;

use catalog_logging::{catalog_debug, catalog_error, catalog_info, catalog_warn};

use crate::error::{SlotError, StoreError};
use crate::listing::normalize_attribute;
use crate::slot::ListingSlot;
use crate::video_id::extract_video_id;
use crate::vocabulary;
use crate::{Listing, ListingDraft, ListingId, ListingPatch};

/// Ordered collection of listings, persisted through a [`ListingSlot`].
///
/// Every mutator writes the full collection to the slot before returning.
/// A failed write leaves the in-memory collection as it was before the call.
#[derive(Debug)]
pub struct RecordStore<S> {
    listings: Vec<Listing>,
    slot: S,
}

impl<S: ListingSlot> RecordStore<S> {
    /// Loads the slot once and normalizes what it holds.
    pub fn open(mut slot: S) -> Result<Self, StoreError> {
        let loaded = slot.load()?;
        let listings = normalize_loaded(loaded);
        catalog_info!("Opened record store with {} listings", listings.len());
        Ok(Self { listings, slot })
    }

    pub fn add(&mut self, draft: ListingDraft) -> Result<Listing, StoreError> {
        let video_id = draft.validate()?;

        let listing = Listing {
            id: self.fresh_id(),
            name: draft.name,
            url: draft.url,
            technique: draft.technique,
            format: draft.format,
            direction: normalize_attribute(draft.direction),
            attack: normalize_attribute(draft.attack),
            stance: normalize_attribute(draft.stance),
            video_id: Some(video_id),
        };
        warn_unknown_values(&listing);

        let mut next = self.listings.clone();
        next.push(listing.clone());
        self.commit(next)?;
        catalog_info!("Added listing {} ({})", listing.id, listing.name);
        Ok(listing)
    }

    pub fn update(&mut self, id: &ListingId, patch: ListingPatch) -> Result<(), StoreError> {
        let Some(index) = self.position(id) else {
            catalog_warn!("Update ignored: no listing with id {}", id);
            return Err(StoreError::NotFound(id.clone()));
        };

        let updated = patch.apply_to(&self.listings[index])?;
        warn_unknown_values(&updated);

        let mut next = self.listings.clone();
        next[index] = updated;
        self.commit(next)?;
        catalog_info!("Updated listing {}", id);
        Ok(())
    }

    /// Removes the listing; returns `false` without writing when it is absent.
    pub fn delete(&mut self, id: &ListingId) -> Result<bool, StoreError> {
        let Some(index) = self.position(id) else {
            catalog_debug!("Delete of absent listing {} is a no-op", id);
            return Ok(false);
        };

        let mut next = self.listings.clone();
        next.remove(index);
        self.commit(next)?;
        catalog_info!("Deleted listing {}", id);
        Ok(true)
    }

    /// Current collection in insertion order.
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    /// First listing whose `url` is exactly `url`.
    pub fn find_by_url(&self, url: &str) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.url == url)
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn slot_mut(&mut self) -> &mut S {
        &mut self.slot
    }

    fn position(&self, id: &ListingId) -> Option<usize> {
        self.listings.iter().position(|listing| &listing.id == id)
    }

    fn fresh_id(&self) -> ListingId {
        loop {
            let id = ListingId::generate();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    fn commit(&mut self, next: Vec<Listing>) -> Result<(), SlotError> {
        if let Err(err) = self.slot.save(&next) {
            catalog_error!("Failed to persist {} listings: {}", next.len(), err);
            return Err(err);
        }
        self.listings = next;
        Ok(())
    }
}

fn normalize_loaded(loaded: Vec<Listing>) -> Vec<Listing> {
    let mut seen = HashSet::new();
    let mut listings = Vec::with_capacity(loaded.len());
    for mut listing in loaded {
        if !seen.insert(listing.id.clone()) {
            catalog_warn!("Dropping stored listing with duplicate id {}", listing.id);
            continue;
        }
        listing.direction = normalize_attribute(listing.direction);
        listing.attack = normalize_attribute(listing.attack);
        listing.stance = normalize_attribute(listing.stance);

        let derived = extract_video_id(&listing.url);
        if derived != listing.video_id {
            catalog_debug!(
                "Re-derived video id for listing {}: {:?} -> {:?}",
                listing.id,
                listing.video_id,
                derived
            );
            listing.video_id = derived;
        }
        listings.push(listing);
    }
    listings
}

fn warn_unknown_values(listing: &Listing) {
    let id = &listing.id;
    let technique = Some(listing.technique.as_str());
    let format = Some(listing.format.as_str());
    warn_if_unknown(id, "technique", technique, vocabulary::is_known_technique);
    warn_if_unknown(id, "format", format, vocabulary::is_known_format);
    let direction = listing.direction.as_deref();
    warn_if_unknown(id, "direction", direction, vocabulary::is_known_direction);
    let attack = listing.attack.as_deref();
    warn_if_unknown(id, "attack", attack, vocabulary::is_known_attack);
    let stance = listing.stance.as_deref();
    warn_if_unknown(id, "stance", stance, vocabulary::is_known_stance);
}

fn warn_if_unknown(id: &ListingId, field: &str, value: Option<&str>, is_known: fn(&str) -> bool) {
    if let Some(value) = value.filter(|value| !is_known(value)) {
        catalog_warn!("Listing {} has {} {:?} outside the vocabulary", id, field, value);
    }
}
