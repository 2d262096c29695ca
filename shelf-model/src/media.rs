use rand::Rng;

use super::{media_type::MediaKind, record::MediaRecord};

/// A catalog entry of any supported kind
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "lowercase"))]
pub enum MediaItem {
    /// Book entry
    Book(Book),
    /// Movie entry
    Movie(Movie),
    /// CD entry
    Cd(Cd),
}

impl MediaItem {
    pub fn kind(&self) -> MediaKind {
        match self {
            MediaItem::Book(_) => MediaKind::Book,
            MediaItem::Movie(_) => MediaKind::Movie,
            MediaItem::Cd(_) => MediaKind::Cd,
        }
    }

    pub fn record(&self) -> &MediaRecord {
        match self {
            MediaItem::Book(book) => &book.record,
            MediaItem::Movie(movie) => &movie.record,
            MediaItem::Cd(cd) => &cd.record,
        }
    }

    pub fn record_mut(&mut self) -> &mut MediaRecord {
        match self {
            MediaItem::Book(book) => &mut book.record,
            MediaItem::Movie(movie) => &mut movie.record,
            MediaItem::Cd(cd) => &mut cd.record,
        }
    }

    pub fn as_book(&self) -> Option<&Book> {
        match self {
            MediaItem::Book(book) => Some(book),
            _ => None,
        }
    }

    pub fn as_movie(&self) -> Option<&Movie> {
        match self {
            MediaItem::Movie(movie) => Some(movie),
            _ => None,
        }
    }

    pub fn as_cd(&self) -> Option<&Cd> {
        match self {
            MediaItem::Cd(cd) => Some(cd),
            _ => None,
        }
    }

    pub fn as_cd_mut(&mut self) -> Option<&mut Cd> {
        match self {
            MediaItem::Cd(cd) => Some(cd),
            _ => None,
        }
    }
}

impl From<Book> for MediaItem {
    fn from(book: Book) -> Self {
        MediaItem::Book(book)
    }
}

impl From<Movie> for MediaItem {
    fn from(movie: Movie) -> Self {
        MediaItem::Movie(movie)
    }
}

impl From<Cd> for MediaItem {
    fn from(cd: Cd) -> Self {
        MediaItem::Cd(cd)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Book {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) record: MediaRecord,
    author: String,
    pages: u32,
}

impl Book {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
    ) -> Self {
        Self {
            record: MediaRecord::new(title),
            author: author.into(),
            pages,
        }
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn pages(&self) -> u32 {
        self.pages
    }

    pub fn record(&self) -> &MediaRecord {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut MediaRecord {
        &mut self.record
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Movie {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) record: MediaRecord,
    director: String,
    /// Minutes
    run_time: u32,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        director: impl Into<String>,
        run_time: u32,
    ) -> Self {
        Self {
            record: MediaRecord::new(title),
            director: director.into(),
            run_time,
        }
    }

    pub fn director(&self) -> &str {
        &self.director
    }

    pub fn run_time(&self) -> u32 {
        self.run_time
    }

    pub fn record(&self) -> &MediaRecord {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut MediaRecord {
        &mut self.record
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cd {
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub(crate) record: MediaRecord,
    artist: String,
    /// Playback order
    #[cfg_attr(feature = "serde", serde(default))]
    songs: Vec<String>,
}

impl Cd {
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            record: MediaRecord::new(title),
            artist: artist.into(),
            songs: Vec::new(),
        }
    }

    pub fn artist(&self) -> &str {
        &self.artist
    }

    pub fn songs(&self) -> &[String] {
        &self.songs
    }

    /// Appends every song as given, duplicates and empty names included.
    pub fn add_song<I, S>(&mut self, songs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.songs.extend(songs.into_iter().map(Into::into));
    }

    /// Picks a song uniformly at random using the thread-local generator.
    pub fn shuffle(&self) -> Option<&str> {
        self.shuffle_with(&mut rand::rng())
    }

    /// Picks a song uniformly at random, `None` when the CD has no songs.
    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&str> {
        if self.songs.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.songs.len());
        self.songs.get(index).map(String::as_str)
    }

    pub fn record(&self) -> &MediaRecord {
        &self.record
    }

    pub fn record_mut(&mut self) -> &mut MediaRecord {
        &mut self.record
    }
}
