use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self::new(id)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(
    MovieId,
    "Server-assigned identifier of a stored movie (the `_id` field)."
);
define_id!(
    GenreId,
    "Server-assigned identifier of a genre (the `_id` field)."
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_id_display() {
        let id = MovieId::new("5b21ca3eeb7f6fbccd471815");
        assert_eq!(id.to_string(), "5b21ca3eeb7f6fbccd471815");
        assert_eq!(id.as_str(), "5b21ca3eeb7f6fbccd471815");
    }

    #[test]
    fn test_id_serializes_as_bare_string() {
        let id = GenreId::from("g1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"g1\"");

        let back: GenreId = serde_json::from_str("\"g1\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_ids_compare_exactly() {
        assert_ne!(MovieId::from("abc"), MovieId::from("ABC"));
        assert_ne!(MovieId::from("abc"), MovieId::from("abc "));
    }
}
