//! Shell focused snapshot of the model surface.
//! Prefer importing from this module instead of individual tree nodes when
//! working in shelfctl or other presentation layers.

pub use super::error::ModelError;
pub use super::form::ItemForm;
pub use super::media::{Book, Cd, MediaItem, Movie};
pub use super::media_type::MediaKind;
pub use super::rating::Rating;
pub use super::record::MediaRecord;
