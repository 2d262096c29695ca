use shelf_model::error::ModelError;
use shelf_model::media::{Book, Cd, MediaItem, Movie};
use shelf_model::media_type::MediaKind;
use shelf_model::rating::Rating;
use shelf_model::record::MediaRecord;

// ===== Media Trait System =====
//
// Every kind embeds a `MediaRecord`. Implementors only say where that record
// lives; the shared behaviour is written once in the provided methods.

/// Read-only operations shared by every catalog entry
pub trait MediaLike {
    /// The shared base record
    fn record(&self) -> &MediaRecord;

    /// Which kind of media this is
    fn kind(&self) -> MediaKind;

    fn title(&self) -> &str {
        self.record().title()
    }

    fn is_checked_out(&self) -> bool {
        self.record().is_checked_out()
    }

    fn ratings(&self) -> &[Rating] {
        self.record().ratings()
    }

    /// Floor of the mean rating, 0 when unrated
    fn average_rating(&self) -> u32 {
        self.record().average_rating()
    }
}

/// Mutable operations shared by every catalog entry
pub trait MediaLikeMut: MediaLike {
    fn record_mut(&mut self) -> &mut MediaRecord;

    fn toggle_check_out_status(&mut self) {
        self.record_mut().toggle_check_out_status();
    }

    fn set_checked_out(&mut self, checked_out: bool) {
        self.record_mut().set_checked_out(checked_out);
    }

    /// See [`MediaRecord::add_rating`]; earlier values in a failing batch
    /// are kept.
    fn add_rating<I>(&mut self, values: I) -> Result<(), ModelError>
    where
        I: IntoIterator<Item = i64>,
        Self: Sized,
    {
        self.record_mut().add_rating(values)
    }
}

macro_rules! impl_media_like {
    ($ty:ty, $kind:expr) => {
        impl MediaLike for $ty {
            fn record(&self) -> &MediaRecord {
                <$ty>::record(self)
            }

            fn kind(&self) -> MediaKind {
                $kind
            }
        }

        impl MediaLikeMut for $ty {
            fn record_mut(&mut self) -> &mut MediaRecord {
                <$ty>::record_mut(self)
            }
        }
    };
}

impl_media_like!(Book, MediaKind::Book);
impl_media_like!(Movie, MediaKind::Movie);
impl_media_like!(Cd, MediaKind::Cd);

impl MediaLike for MediaItem {
    fn record(&self) -> &MediaRecord {
        MediaItem::record(self)
    }

    fn kind(&self) -> MediaKind {
        MediaItem::kind(self)
    }
}

impl MediaLikeMut for MediaItem {
    fn record_mut(&mut self) -> &mut MediaRecord {
        MediaItem::record_mut(self)
    }
}
