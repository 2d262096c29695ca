use std::fmt;

use shelf_contracts::prelude::MediaLike;
use shelf_model::MediaKind;

/// Display-ready summary of one catalog entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRow {
    pub index: usize,
    pub title: String,
    pub kind: MediaKind,
    pub is_checked_out: bool,
    pub average_rating: u32,
}

impl CatalogRow {
    pub fn from_item(index: usize, item: &impl MediaLike) -> Self {
        Self {
            index,
            title: item.title().to_string(),
            kind: item.kind(),
            is_checked_out: item.is_checked_out(),
            average_rating: item.average_rating(),
        }
    }
}

impl fmt::Display for CatalogRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Checked Out: {} - Average Rating: {}",
            self.title, self.kind, self.is_checked_out, self.average_rating
        )
    }
}
