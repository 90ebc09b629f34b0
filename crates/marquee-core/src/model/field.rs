use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One editable field of a [`MovieRecord`](crate::model::MovieRecord).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MovieField {
    Title,
    Genre,
    NumberInStock,
    Rate,
}

impl MovieField {
    /// All fields in form order.
    pub const ALL: [MovieField; 4] = [
        MovieField::Title,
        MovieField::Genre,
        MovieField::NumberInStock,
        MovieField::Rate,
    ];

    /// The input name used by forms (`title`, `genre`, `numberInStock`, `rate`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Genre => "genre",
            Self::NumberInStock => "numberInStock",
            Self::Rate => "rate",
        }
    }

    /// Human-readable label used in validation messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Title",
            Self::Genre => "Genre",
            Self::NumberInStock => "Number In Stock",
            Self::Rate => "Rate",
        }
    }

    /// Position of the field in [`MovieField::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Title => 0,
            Self::Genre => 1,
            Self::NumberInStock => 2,
            Self::Rate => 3,
        }
    }
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MovieField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::UnknownField(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip() {
        for field in MovieField::ALL {
            assert_eq!(field.name().parse::<MovieField>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_name() {
        let err = "dailyRentalRate".parse::<MovieField>().unwrap_err();
        assert!(matches!(err, Error::UnknownField(name) if name == "dailyRentalRate"));
    }

    #[test]
    fn test_index_matches_order() {
        for (i, field) in MovieField::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }
}
