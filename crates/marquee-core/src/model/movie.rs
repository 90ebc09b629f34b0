use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::genre::Genre;
use crate::model::ids::{GenreId, MovieId};

/// A movie as stored by the catalog service.
///
/// The service nests the full genre object and may carry fields the form
/// never edits (e.g. `liked`, `publishDate`). Those are kept in `extra` so an
/// update can send them back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(rename = "_id")]
    pub id: MovieId,
    pub title: String,
    pub genre: Genre,
    pub number_in_stock: u32,
    pub daily_rental_rate: f64,

    /// Fields not modeled above, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Movie {
    #[must_use]
    pub fn new(
        id: impl Into<MovieId>,
        title: impl Into<String>,
        genre: Genre,
        number_in_stock: u32,
        daily_rental_rate: f64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genre,
            number_in_stock,
            daily_rental_rate,
            extra: Map::new(),
        }
    }

    /// Find the movie whose id matches `id` exactly.
    pub fn find_by_id<'a>(movies: &'a [Movie], id: &MovieId) -> Option<&'a Movie> {
        movies.iter().find(|m| &m.id == id)
    }

    /// Build the body of an update request for this stored movie.
    ///
    /// The result is the stored movie without `_id` and the nested `genre`,
    /// with the form-controlled fields replaced by `payload`. The genre is
    /// sent as `genreId` only.
    #[must_use]
    pub fn update_body(&self, payload: &MoviePayload) -> Map<String, Value> {
        let mut body = self.extra.clone();
        body.remove("_id");
        body.remove("genre");

        body.insert("title".to_string(), Value::from(payload.title.as_str()));
        body.insert("genreId".to_string(), Value::from(payload.genre_id.as_str()));
        body.insert(
            "numberInStock".to_string(),
            Value::from(payload.number_in_stock),
        );
        body.insert(
            "dailyRentalRate".to_string(),
            Value::from(payload.daily_rental_rate),
        );

        body
    }
}

/// The body sent to the catalog service when creating or updating a movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoviePayload {
    pub title: String,
    pub genre_id: GenreId,
    pub number_in_stock: u32,
    pub daily_rental_rate: f64,
}
