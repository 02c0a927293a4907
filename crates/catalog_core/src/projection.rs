use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::Listing;

/// Attribute a filter applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Technique,
    Format,
    Direction,
    Attack,
    Stance,
}

/// Required value per attribute; `None` admits every listing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingFilters {
    pub technique: Option<String>,
    pub format: Option<String>,
    pub direction: Option<String>,
    pub attack: Option<String>,
    pub stance: Option<String>,
}

impl ListingFilters {
    pub fn set(&mut self, field: FilterField, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    pub fn get(&self, field: FilterField) -> Option<&str> {
        match field {
            FilterField::Technique => self.technique.as_deref(),
            FilterField::Format => self.format.as_deref(),
            FilterField::Direction => self.direction.as_deref(),
            FilterField::Attack => self.attack.as_deref(),
            FilterField::Stance => self.stance.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Conjunction of every active filter.
    pub fn admits(&self, listing: &Listing) -> bool {
        passes(self.technique.as_deref(), Some(listing.technique.as_str()))
            && passes(self.format.as_deref(), Some(listing.format.as_str()))
            && passes(self.direction.as_deref(), listing.direction.as_deref())
            && passes(self.attack.as_deref(), listing.attack.as_deref())
            && passes(self.stance.as_deref(), listing.stance.as_deref())
    }

    fn slot_mut(&mut self, field: FilterField) -> &mut Option<String> {
        match field {
            FilterField::Technique => &mut self.technique,
            FilterField::Format => &mut self.format,
            FilterField::Direction => &mut self.direction,
            FilterField::Attack => &mut self.attack,
            FilterField::Stance => &mut self.stance,
        }
    }
}

fn passes(required: Option<&str>, actual: Option<&str>) -> bool {
    match required {
        Some(required) => actual == Some(required),
        None => true,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Url,
    Technique,
    Format,
    Direction,
    Attack,
    Stance,
}

impl SortKey {
    /// Field value used for ordering; absent optionals sort as "".
    pub fn value_of(self, listing: &Listing) -> &str {
        match self {
            SortKey::Name => &listing.name,
            SortKey::Url => &listing.url,
            SortKey::Technique => &listing.technique,
            SortKey::Format => &listing.format,
            SortKey::Direction => listing.direction.as_deref().unwrap_or(""),
            SortKey::Attack => listing.attack.as_deref().unwrap_or(""),
            SortKey::Stance => listing.stance.as_deref().unwrap_or(""),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Filtered, stably sorted view over `collection`.
pub fn project<'a>(
    collection: &'a [Listing],
    filters: &ListingFilters,
    sort_key: SortKey,
    sort_order: SortOrder,
) -> Vec<&'a Listing> {
    let mut rows: Vec<&Listing> = collection
        .iter()
        .filter(|listing| filters.admits(listing))
        .collect();

    rows.sort_by(|a, b| {
        let ordering = collate(sort_key.value_of(a), sort_key.value_of(b));
        match sort_order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    });
    rows
}

/// Dictionary-style string comparison.
///
/// Three levels, each consulted only when the previous one ties: base
/// letters with accents and case removed, then accents (unaccented first),
/// then case (lowercase first). "Ōmote" therefore sorts among the O's.
pub fn collate(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(case_key(b)))
}

fn unmarked(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().filter(|c| !is_combining_mark(*c))
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    unmarked(text).flat_map(char::to_lowercase)
}

/// Combining marks grouped by the base character they follow.
fn accent_key(text: &str) -> Vec<Vec<char>> {
    let mut key: Vec<Vec<char>> = Vec::new();
    for c in text.nfd() {
        if !is_combining_mark(c) {
            key.push(Vec::new());
        } else if let Some(marks) = key.last_mut() {
            marks.push(c);
        }
    }
    key
}

fn case_key(text: &str) -> impl Iterator<Item = bool> + '_ {
    unmarked(text).map(char::is_uppercase)
}
