use shelf_contracts::prelude::MediaLike;
use shelf_model::{ItemForm, MediaItem};
use tracing::debug;

use crate::error::Result;

/// Insertion-ordered collection of media items.
///
/// Positions are display order and the index space used for removal.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<MediaItem>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MediaItem> {
        self.items.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut MediaItem> {
        self.items.get_mut(index)
    }

    /// Appends an item and returns its position.
    pub fn add_item(&mut self, item: impl Into<MediaItem>) -> usize {
        let item = item.into();
        debug!(title = item.title(), kind = %item.kind(), "adding catalog item");
        self.items.push(item);
        self.items.len() - 1
    }

    /// Converts an untyped form and appends it. On failure the catalog is
    /// left untouched.
    pub fn try_add_item(&mut self, form: ItemForm) -> Result<usize> {
        let item = MediaItem::try_from(form)?;
        Ok(self.add_item(item))
    }

    /// Removes the item at `index`, shifting later items down by one.
    /// Out-of-range positions are ignored.
    pub fn remove_item(&mut self, index: usize) -> Option<MediaItem> {
        if index >= self.items.len() {
            debug!(index, len = self.items.len(), "remove ignored, out of range");
            return None;
        }
        let removed = self.items.remove(index);
        debug!(index, title = removed.title(), "removed catalog item");
        Some(removed)
    }

    /// Titles joined with `", "` in catalog order.
    pub fn list_items(&self) -> String {
        self.items
            .iter()
            .map(MediaLike::title)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MediaItem;
    type IntoIter = std::slice::Iter<'a, MediaItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
