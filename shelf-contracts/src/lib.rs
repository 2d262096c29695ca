//! Trait surfaces that describe interactions with Shelf data models.
#![allow(missing_docs)]

pub mod media_like;

/// Frequently used trait combinators for the core and shell crates.
pub mod prelude {
    pub use super::media_like::{MediaLike, MediaLikeMut};
}
