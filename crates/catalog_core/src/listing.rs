use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Field, FieldError, Problem, ValidationError};
use crate::video_id::{extract_video_id, thumbnail_url};

/// Opaque listing identifier assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub(crate) fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ListingId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ListingId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One catalog record. This is also the persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub url: String,
    pub technique: String,
    pub format: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

impl Listing {
    pub fn thumbnail_url(&self) -> Option<String> {
        self.video_id.as_deref().map(thumbnail_url)
    }
}

/// Everything needed to create a listing; the store assigns `id` and derives `video_id`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingDraft {
    pub name: String,
    pub url: String,
    pub technique: String,
    pub format: String,
    pub direction: Option<String>,
    pub attack: Option<String>,
    pub stance: Option<String>,
}

impl ListingDraft {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
        technique: impl Into<String>,
        format: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            technique: technique.into(),
            format: format.into(),
            ..Self::default()
        }
    }

    pub fn with_direction(mut self, direction: impl Into<String>) -> Self {
        self.direction = Some(direction.into());
        self
    }

    pub fn with_attack(mut self, attack: impl Into<String>) -> Self {
        self.attack = Some(attack.into());
        self
    }

    pub fn with_stance(mut self, stance: impl Into<String>) -> Self {
        self.stance = Some(stance.into());
        self
    }

    /// Checks required fields and the URL; returns the derived video id.
    pub fn validate(&self) -> Result<String, ValidationError> {
        let mut fields = Vec::new();
        require(&mut fields, Field::Name, &self.name);
        let video_id = check_url(&mut fields, &self.url);
        require(&mut fields, Field::Technique, &self.technique);
        require(&mut fields, Field::Format, &self.format);
        match video_id {
            Some(video_id) if fields.is_empty() => Ok(video_id),
            _ => Err(ValidationError { fields }),
        }
    }
}

impl From<&Listing> for ListingDraft {
    fn from(listing: &Listing) -> Self {
        Self {
            name: listing.name.clone(),
            url: listing.url.clone(),
            technique: listing.technique.clone(),
            format: listing.format.clone(),
            direction: listing.direction.clone(),
            attack: listing.attack.clone(),
            stance: listing.stance.clone(),
        }
    }
}

/// Change applied to an optional attribute by an update.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AttributeChange {
    #[default]
    Keep,
    /// A blank value is treated as `Clear`.
    Set(String),
    Clear,
}

impl AttributeChange {
    /// `Set` for non-blank values, `Keep` otherwise.
    pub fn set_if_present(value: Option<&str>) -> Self {
        match value {
            Some(value) if !is_blank(value) => Self::Set(value.to_string()),
            _ => Self::Keep,
        }
    }

    fn apply(self, slot: &mut Option<String>) {
        match self {
            Self::Keep => {}
            Self::Set(value) => *slot = normalize_attribute(Some(value)),
            Self::Clear => *slot = None,
        }
    }
}

/// Partial update; `None` and `Keep` leave the current value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingPatch {
    pub name: Option<String>,
    pub url: Option<String>,
    pub technique: Option<String>,
    pub format: Option<String>,
    pub direction: AttributeChange,
    pub attack: AttributeChange,
    pub stance: AttributeChange,
}

impl ListingPatch {
    pub fn url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// Patch for a submitted edit form.
    ///
    /// Required fields are replaced. Optional attributes left blank keep their
    /// stored value; removing one takes an explicit `AttributeChange::Clear`.
    pub fn from_form(draft: ListingDraft) -> Self {
        Self {
            direction: AttributeChange::set_if_present(draft.direction.as_deref()),
            attack: AttributeChange::set_if_present(draft.attack.as_deref()),
            stance: AttributeChange::set_if_present(draft.stance.as_deref()),
            name: Some(draft.name),
            url: Some(draft.url),
            technique: Some(draft.technique),
            format: Some(draft.format),
        }
    }

    /// Applies the patch to a copy of `current`, validating supplied fields.
    pub(crate) fn apply_to(self, current: &Listing) -> Result<Listing, ValidationError> {
        let mut fields = Vec::new();
        let mut next = current.clone();

        if let Some(name) = self.name {
            require(&mut fields, Field::Name, &name);
            next.name = name;
        }
        if let Some(url) = self.url {
            next.video_id = check_url(&mut fields, &url);
            next.url = url;
        }
        if let Some(technique) = self.technique {
            require(&mut fields, Field::Technique, &technique);
            next.technique = technique;
        }
        if let Some(format) = self.format {
            require(&mut fields, Field::Format, &format);
            next.format = format;
        }
        self.direction.apply(&mut next.direction);
        self.attack.apply(&mut next.attack);
        self.stance.apply(&mut next.stance);

        if fields.is_empty() {
            Ok(next)
        } else {
            Err(ValidationError { fields })
        }
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Optional attributes are never kept as empty strings.
pub(crate) fn normalize_attribute(value: Option<String>) -> Option<String> {
    value.filter(|value| !is_blank(value))
}

fn require(fields: &mut Vec<FieldError>, field: Field, value: &str) {
    if is_blank(value) {
        fields.push(FieldError {
            field,
            problem: Problem::Missing,
        });
    }
}

fn check_url(fields: &mut Vec<FieldError>, url: &str) -> Option<String> {
    if is_blank(url) {
        fields.push(FieldError {
            field: Field::Url,
            problem: Problem::Missing,
        });
        return None;
    }
    let video_id = extract_video_id(url);
    if video_id.is_none() {
        fields.push(FieldError {
            field: Field::Url,
            problem: Problem::NoVideoId,
        });
    }
    video_id
}
