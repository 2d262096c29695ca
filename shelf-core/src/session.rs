//! Session-scoped controller owned by an input surface.
//!
//! A [`Session`] holds the catalog together with the [`Draft`] that collects
//! ratings, songs and the checked-out flag while the next item is being
//! described. [`Session::commit`] applies the draft to a freshly built item
//! and clears it.

use rand::SeedableRng;
use rand::rngs::StdRng;
use shelf_contracts::prelude::{MediaLike, MediaLikeMut};
use shelf_model::{ItemForm, MediaItem, Rating};
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{CatalogError, Result};
use crate::row::CatalogRow;

/// State staged for the next committed item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    ratings: Vec<Rating>,
    songs: Vec<String>,
    checked_out: bool,
}

impl Draft {
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    pub fn songs(&self) -> &[String] {
        &self.songs
    }

    pub fn checked_out(&self) -> bool {
        self.checked_out
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty() && self.songs.is_empty() && !self.checked_out
    }
}

#[derive(Debug)]
pub struct Session {
    catalog: Catalog,
    draft: Draft,
    rng: StdRng,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deterministic shuffles, for scripted runs and tests.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            catalog: Catalog::new(),
            draft: Draft::default(),
            rng,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Validates and stages one rating. Rejected values are not staged.
    pub fn stage_rating(&mut self, value: i64) -> Result<Rating> {
        let rating = Rating::new(value)?;
        self.draft.ratings.push(rating);
        Ok(rating)
    }

    /// Stages a song for the next CD. Blank names are ignored.
    pub fn stage_song(&mut self, song: &str) -> bool {
        let song = song.trim();
        if song.is_empty() {
            return false;
        }
        self.draft.songs.push(song.to_string());
        true
    }

    pub fn stage_checked_out(&mut self, checked_out: bool) {
        self.draft.checked_out = checked_out;
    }

    pub fn reset_draft(&mut self) {
        self.draft = Draft::default();
    }

    /// Builds the item described by `form`, applies the draft to it and
    /// appends it to the catalog. Returns the new item's position.
    ///
    /// A rejected form leaves both the catalog and the draft as they were.
    pub fn commit(&mut self, form: ItemForm) -> Result<usize> {
        let mut item = MediaItem::try_from(form)?;

        item.set_checked_out(self.draft.checked_out);
        item.record_mut()
            .extend_ratings(self.draft.ratings.iter().copied());
        if let Some(cd) = item.as_cd_mut() {
            cd.add_song(self.draft.songs.iter().cloned());
        } else if !self.draft.songs.is_empty() {
            debug!(
                dropped = self.draft.songs.len(),
                kind = %item.kind(),
                "staged songs only apply to CDs"
            );
        }

        let index = self.catalog.add_item(item);
        self.reset_draft();
        Ok(index)
    }

    /// Removes the item at `index`; out-of-range positions do nothing.
    pub fn remove(&mut self, index: usize) -> Option<MediaItem> {
        self.catalog.remove_item(index)
    }

    /// Flips the checked-out flag and returns the new value.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let item = self.item_mut(index)?;
        item.toggle_check_out_status();
        Ok(item.is_checked_out())
    }

    /// Rates an item already in the catalog. Same partial semantics as
    /// [`shelf_model::MediaRecord::add_rating`].
    pub fn rate<I>(&mut self, index: usize, values: I) -> Result<()>
    where
        I: IntoIterator<Item = i64>,
    {
        self.item_mut(index)?.add_rating(values)?;
        Ok(())
    }

    /// Random song from the CD at `index`, `None` when it has no songs.
    pub fn shuffle(&mut self, index: usize) -> Result<Option<String>> {
        let cd = self
            .catalog
            .get(index)
            .ok_or(CatalogError::NoSuchItem(index))?
            .as_cd()
            .ok_or(CatalogError::NotACd(index))?;
        Ok(cd.shuffle_with(&mut self.rng).map(str::to_owned))
    }

    pub fn rows(&self) -> Vec<CatalogRow> {
        self.catalog
            .items()
            .iter()
            .enumerate()
            .map(|(index, item)| CatalogRow::from_item(index, item))
            .collect()
    }

    pub fn list_items(&self) -> String {
        self.catalog.list_items()
    }

    pub fn export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.catalog)?)
    }

    fn item_mut(&mut self, index: usize) -> Result<&mut MediaItem> {
        self.catalog
            .get_mut(index)
            .ok_or(CatalogError::NoSuchItem(index))
    }
}
