use crate::error::Result;
use crate::rating::Rating;

/// State shared by every catalog entry regardless of its kind.
///
/// The title is fixed at construction. The checked-out flag and the rating
/// list are the only mutable parts.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaRecord {
    title: String,
    #[cfg_attr(feature = "serde", serde(default))]
    is_checked_out: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    ratings: Vec<Rating>,
}

impl MediaRecord {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            is_checked_out: false,
            ratings: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_checked_out(&self) -> bool {
        self.is_checked_out
    }

    pub fn set_checked_out(&mut self, checked_out: bool) {
        self.is_checked_out = checked_out;
    }

    pub fn toggle_check_out_status(&mut self) {
        self.is_checked_out = !self.is_checked_out;
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Appends each value in order, stopping at the first one outside 1..=5.
    ///
    /// This is not atomic: values accepted before the failing one stay in
    /// the list, and nothing after it is looked at. `add_rating([2, 7, 3])`
    /// leaves `[2]` behind and reports the 7.
    pub fn add_rating<I>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = i64>,
    {
        for value in values {
            let rating = Rating::new(value)?;
            self.ratings.push(rating);
        }
        Ok(())
    }

    /// Appends already validated ratings. Cannot fail.
    pub fn extend_ratings<I>(&mut self, ratings: I)
    where
        I: IntoIterator<Item = Rating>,
    {
        self.ratings.extend(ratings);
    }

    /// Floor of the mean rating, or 0 when nothing has been rated yet.
    pub fn average_rating(&self) -> u32 {
        if self.ratings.is_empty() {
            return 0;
        }
        let total: u64 = self
            .ratings
            .iter()
            .map(|rating| u64::from(rating.value()))
            .sum();
        let count = u64::try_from(self.ratings.len()).unwrap_or(u64::MAX);
        // Bounded by Rating::MAX, so the narrowing always fits.
        u32::try_from(total / count).unwrap_or(u32::MAX)
    }
}
