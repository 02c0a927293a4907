use std::fmt;

use thiserror::Error;

use crate::ListingId;

/// Listing field named in a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Url,
    Technique,
    Format,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Name => write!(f, "name"),
            Field::Url => write!(f, "url"),
            Field::Technique => write!(f, "technique"),
            Field::Format => write!(f, "format"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    /// Required field absent, empty, or whitespace only.
    Missing,
    /// URL carries no recognizable video identifier.
    NoVideoId,
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Problem::Missing => write!(f, "is required"),
            Problem::NoVideoId => write!(f, "has no video identifier"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub problem: Problem,
}

/// One entry per failing field; never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid listing: {}", describe(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

impl ValidationError {
    pub fn has(&self, field: Field, problem: Problem) -> bool {
        self.fields
            .iter()
            .any(|entry| entry.field == field && entry.problem == problem)
    }
}

fn describe(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|entry| format!("{} {}", entry.field, entry.problem))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure reported by a persistence port.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("slot could not be read: {0}")]
    Read(String),
    #[error("slot contents are malformed: {0}")]
    Malformed(String),
    #[error("slot could not be written: {0}")]
    Write(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no listing with id {0}")]
    NotFound(ListingId),
    #[error("persistence failed: {0}")]
    Persistence(#[from] SlotError),
}
