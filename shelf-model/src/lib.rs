//! Core data model definitions shared across Shelf crates.
#![allow(missing_docs)]

pub mod error;
pub mod form;
pub mod media;
pub mod media_type;
pub mod prelude;
pub mod rating;
pub mod record;

// Intentionally curated re-exports for downstream consumers.
pub use error::{ModelError, Result as ModelResult};
pub use form::ItemForm;
pub use media::{Book, Cd, MediaItem, Movie};
pub use media_type::MediaKind;
pub use rating::Rating;
pub use record::MediaRecord;
