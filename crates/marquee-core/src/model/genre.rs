use serde::{Deserialize, Serialize};

use crate::model::ids::GenreId;

/// A genre as stored by the catalog service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genre {
    #[serde(rename = "_id")]
    pub id: GenreId,

    /// Display name (e.g., "Comedy"). Forms select genres by this name.
    pub name: String,
}

impl Genre {
    #[must_use]
    pub fn new(id: impl Into<GenreId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Find the genre whose name matches `name` exactly.
    pub fn find_by_name<'a>(genres: &'a [Genre], name: &str) -> Option<&'a Genre> {
        genres.iter().find(|g| g.name == name)
    }
}
