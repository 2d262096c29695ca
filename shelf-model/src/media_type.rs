use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Simple enum for the kinds of media a catalog can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaKind {
    /// Book media type
    Book = 0,
    /// Movie media type
    Movie = 1,
    /// CD media type
    Cd = 2,
}

impl MediaKind {
    pub const ALL: [MediaKind; 3] =
        [MediaKind::Book, MediaKind::Movie, MediaKind::Cd];
}

impl Display for MediaKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Book => write!(f, "Book"),
            MediaKind::Movie => write!(f, "Movie"),
            MediaKind::Cd => write!(f, "CD"),
        }
    }
}

impl FromStr for MediaKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "book" => Ok(MediaKind::Book),
            "movie" => Ok(MediaKind::Movie),
            "cd" => Ok(MediaKind::Cd),
            _ => Err(ModelError::NotMedia(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_kinds_case_insensitively() {
        assert_eq!("book".parse::<MediaKind>(), Ok(MediaKind::Book));
        assert_eq!(" Movie ".parse::<MediaKind>(), Ok(MediaKind::Movie));
        assert_eq!("CD".parse::<MediaKind>(), Ok(MediaKind::Cd));
    }

    #[test]
    fn rejects_unknown_kind() {
        assert_eq!(
            "vinyl".parse::<MediaKind>(),
            Err(ModelError::NotMedia("vinyl".to_string()))
        );
    }

    #[test]
    fn display_matches_list_labels() {
        let labels: Vec<String> =
            MediaKind::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(labels, ["Book", "Movie", "CD"]);
    }
}
