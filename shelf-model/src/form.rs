use crate::error::{ModelError, Result};
use crate::media::{Book, Cd, MediaItem, Movie};
use crate::media_type::MediaKind;

/// Untyped description of an item as it arrives from an input surface.
///
/// Only the fields belonging to `kind` are consulted when converting, the
/// others are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemForm {
    pub kind: String,
    pub title: String,
    pub author: Option<String>,
    pub pages: Option<u32>,
    pub director: Option<String>,
    pub run_time: Option<u32>,
    pub artist: Option<String>,
}

impl ItemForm {
    pub fn new(kind: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn book(
        title: impl Into<String>,
        author: impl Into<String>,
        pages: u32,
    ) -> Self {
        Self {
            author: Some(author.into()),
            pages: Some(pages),
            ..Self::new("book", title)
        }
    }

    pub fn movie(
        title: impl Into<String>,
        director: impl Into<String>,
        run_time: u32,
    ) -> Self {
        Self {
            director: Some(director.into()),
            run_time: Some(run_time),
            ..Self::new("movie", title)
        }
    }

    pub fn cd(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            artist: Some(artist.into()),
            ..Self::new("cd", title)
        }
    }
}

fn required<T>(
    value: Option<T>,
    kind: MediaKind,
    field: &'static str,
) -> Result<T> {
    value.ok_or(ModelError::MissingField { kind, field })
}

impl TryFrom<ItemForm> for MediaItem {
    type Error = ModelError;

    fn try_from(form: ItemForm) -> Result<Self> {
        let kind: MediaKind = form.kind.parse()?;
        let item = match kind {
            MediaKind::Book => Book::new(
                form.title,
                required(form.author, kind, "author")?,
                required(form.pages, kind, "pages")?,
            )
            .into(),
            MediaKind::Movie => Movie::new(
                form.title,
                required(form.director, kind, "director")?,
                required(form.run_time, kind, "run_time")?,
            )
            .into(),
            MediaKind::Cd => {
                Cd::new(form.title, required(form.artist, kind, "artist")?)
                    .into()
            }
        };
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_each_kind_from_its_fields() {
        let book = MediaItem::try_from(ItemForm::book("Dune", "Herbert", 412))
            .unwrap();
        assert_eq!(book.as_book().map(Book::pages), Some(412));

        let movie =
            MediaItem::try_from(ItemForm::movie("Alien", "Scott", 117)).unwrap();
        assert_eq!(movie.as_movie().map(Movie::director), Some("Scott"));

        let cd = MediaItem::try_from(ItemForm::cd("Blue", "Mitchell")).unwrap();
        assert_eq!(cd.kind(), MediaKind::Cd);
        assert_eq!(cd.record().title(), "Blue");
    }

    #[test]
    fn unknown_kind_is_not_media() {
        let err = MediaItem::try_from(ItemForm::new("vinyl", "Kind of Blue"))
            .unwrap_err();
        assert_eq!(err, ModelError::NotMedia("vinyl".to_string()));
    }

    #[test]
    fn missing_variant_field_is_reported() {
        let mut form = ItemForm::book("Dune", "Herbert", 412);
        form.pages = None;
        assert_eq!(
            MediaItem::try_from(form),
            Err(ModelError::MissingField {
                kind: MediaKind::Book,
                field: "pages",
            })
        );
    }
}
