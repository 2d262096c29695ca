use std::fmt::{self, Display};

use crate::media_type::MediaKind;

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A rating fell outside `Rating::MIN..=Rating::MAX`.
    RatingOutOfRange(i64),
    /// The value handed to the catalog does not describe a media item.
    NotMedia(String),
    /// A form named a valid kind but left out one of its fields.
    MissingField {
        kind: MediaKind,
        field: &'static str,
    },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::RatingOutOfRange(_) => {
                write!(f, "Rating should be between 1 and 5.")
            }
            ModelError::NotMedia(kind) => write!(
                f,
                "The item must be an instance of Media! ('{kind}' is not a book, movie or cd)"
            ),
            ModelError::MissingField { kind, field } => {
                write!(f, "{kind} requires a value for '{field}'")
            }
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
