use serde::{Deserialize, Serialize};

use crate::model::field::MovieField;
use crate::model::movie::Movie;

/// The editable state of a movie form.
///
/// Every field holds the raw text as entered. Nothing is parsed or trimmed
/// here; the validation schema decides what the text means.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieRecord {
    pub title: String,
    /// Genre *name*, matched against the genre list on save.
    pub genre: String,
    pub number_in_stock: String,
    pub rate: String,
}

impl MovieRecord {
    /// An empty record, as shown when creating a new movie.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Hydrate a record from a stored movie for editing.
    #[must_use]
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            genre: movie.genre.name.clone(),
            number_in_stock: movie.number_in_stock.to_string(),
            rate: movie.daily_rental_rate.to_string(),
        }
    }

    #[must_use]
    pub fn get(&self, field: MovieField) -> &str {
        match field {
            MovieField::Title => &self.title,
            MovieField::Genre => &self.genre,
            MovieField::NumberInStock => &self.number_in_stock,
            MovieField::Rate => &self.rate,
        }
    }

    pub fn set(&mut self, field: MovieField, value: impl Into<String>) {
        let slot = match field {
            MovieField::Title => &mut self.title,
            MovieField::Genre => &mut self.genre,
            MovieField::NumberInStock => &mut self.number_in_stock,
            MovieField::Rate => &mut self.rate,
        };
        *slot = value.into();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Genre;

    #[test]
    fn test_empty_record() {
        let record = MovieRecord::empty();
        for field in MovieField::ALL {
            assert_eq!(record.get(field), "");
        }
    }

    #[test]
    fn test_from_movie_uses_genre_name() {
        let movie = Movie::new("m1", "Terminator", Genre::new("g1", "Action"), 6, 2.5);
        let record = MovieRecord::from_movie(&movie);
        assert_eq!(record.title, "Terminator");
        assert_eq!(record.genre, "Action");
        assert_eq!(record.number_in_stock, "6");
        assert_eq!(record.rate, "2.5");
    }

    #[test]
    fn test_from_movie_whole_rate_has_no_fraction() {
        let movie = Movie::new("m1", "Die Hard", Genre::new("g1", "Action"), 5, 3.0);
        assert_eq!(MovieRecord::from_movie(&movie).rate, "3");
    }

    #[test]
    fn test_set_is_verbatim() {
        let mut record = MovieRecord::empty();
        record.set(MovieField::NumberInStock, " 12abc ");
        assert_eq!(record.get(MovieField::NumberInStock), " 12abc ");
        assert_eq!(record.get(MovieField::Title), "");
    }
}
