//! Movie form validation schema.
//!
//! Each field is validated on its own, against the raw text the user
//! entered:
//!
//! | field           | rule                                  |
//! |-----------------|---------------------------------------|
//! | `title`         | required, at least 5 characters       |
//! | `genre`         | required                              |
//! | `numberInStock` | required number, integer, 0 to 100    |
//! | `rate`          | required number, 0 to 10              |
//!
//! Messages take the form `"<Label>" <reason>`.

use serde::{Deserialize, Serialize};

use crate::model::{MovieField, MovieRecord};

pub const TITLE_MIN_LEN: usize = 5;
pub const STOCK_MIN: f64 = 0.0;
pub const STOCK_MAX: f64 = 100.0;
pub const RATE_MIN: f64 = 0.0;
pub const RATE_MAX: f64 = 10.0;

/// Per-field validation messages. An empty string means "no error".
///
/// There is exactly one slot per [`MovieField`], so the keys always mirror
/// those of [`MovieRecord`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorState {
    pub title: String,
    pub genre: String,
    pub number_in_stock: String,
    pub rate: String,
}

impl ErrorState {
    #[must_use]
    pub fn get(&self, field: MovieField) -> &str {
        match field {
            MovieField::Title => &self.title,
            MovieField::Genre => &self.genre,
            MovieField::NumberInStock => &self.number_in_stock,
            MovieField::Rate => &self.rate,
        }
    }

    /// Set or clear the message for `field`.
    pub fn set(&mut self, field: MovieField, message: Option<String>) {
        let slot = match field {
            MovieField::Title => &mut self.title,
            MovieField::Genre => &mut self.genre,
            MovieField::NumberInStock => &mut self.number_in_stock,
            MovieField::Rate => &mut self.rate,
        };
        *slot = message.unwrap_or_default();
    }

    /// `true` when no field carries a message.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        MovieField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Fields that currently carry a message, in form order.
    pub fn failing(&self) -> impl Iterator<Item = (MovieField, &str)> {
        MovieField::ALL
            .into_iter()
            .map(move |f| (f, self.get(f)))
            .filter(|(_, message)| !message.is_empty())
    }
}

/// Validate a single field value.
///
/// Returns the error message, or `None` when the value is acceptable.
#[must_use]
pub fn validate_field(field: MovieField, value: &str) -> Option<String> {
    match field {
        MovieField::Title => required(field, value).or_else(|| min_length(field, value)),
        MovieField::Genre => required(field, value),
        MovieField::NumberInStock => number_in_range(field, value, STOCK_MIN, STOCK_MAX, true),
        MovieField::Rate => number_in_range(field, value, RATE_MIN, RATE_MAX, false),
    }
}

/// Validate every field of `record`.
///
/// Returns `Ok(())` when the record may be submitted, otherwise the error
/// state with every failing field populated.
pub fn validate_all(record: &MovieRecord) -> Result<(), ErrorState> {
    let mut errors = ErrorState::default();
    for field in MovieField::ALL {
        errors.set(field, validate_field(field, record.get(field)));
    }

    if errors.is_clear() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Parse numeric form text the way the schema reads it.
///
/// Surrounding whitespace is ignored; anything that is not a finite decimal
/// number yields `None`.
#[must_use]
pub fn parse_number(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

fn required(field: MovieField, value: &str) -> Option<String> {
    value
        .is_empty()
        .then(|| format!("\"{}\" is not allowed to be empty", field.label()))
}

fn min_length(field: MovieField, value: &str) -> Option<String> {
    (value.chars().count() < TITLE_MIN_LEN).then(|| {
        format!(
            "\"{}\" length must be at least {} characters long",
            field.label(),
            TITLE_MIN_LEN
        )
    })
}

fn number_in_range(
    field: MovieField,
    value: &str,
    min: f64,
    max: f64,
    integer: bool,
) -> Option<String> {
    let label = field.label();
    let Some(number) = parse_number(value) else {
        return Some(format!("\"{}\" must be a number", label));
    };

    if integer && number.fract() != 0.0 {
        Some(format!("\"{}\" must be an integer", label))
    } else if number < min {
        Some(format!("\"{}\" must be larger than or equal to {}", label, min))
    } else if number > max {
        Some(format!("\"{}\" must be less than or equal to {}", label, max))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_record() -> MovieRecord {
        MovieRecord {
            title: "Inception".to_string(),
            genre: "Drama".to_string(),
            number_in_stock: "10".to_string(),
            rate: "7.5".to_string(),
        }
    }

    #[test]
    fn test_title_rules() {
        assert_eq!(
            validate_field(MovieField::Title, "").as_deref(),
            Some("\"Title\" is not allowed to be empty")
        );
        assert_eq!(
            validate_field(MovieField::Title, "Jaws").as_deref(),
            Some("\"Title\" length must be at least 5 characters long")
        );
        assert!(validate_field(MovieField::Title, "Alien").is_none());
        assert!(validate_field(MovieField::Title, "Amélie").is_none());
    }

    #[test]
    fn test_title_length_counts_characters() {
        // Four characters, more than five bytes.
        assert!(validate_field(MovieField::Title, "Léon").is_some());
    }

    #[test]
    fn test_genre_rules() {
        assert_eq!(
            validate_field(MovieField::Genre, "").as_deref(),
            Some("\"Genre\" is not allowed to be empty")
        );
        assert!(validate_field(MovieField::Genre, "X").is_none());
        assert!(validate_field(MovieField::Genre, "Not A Known Genre").is_none());
    }

    #[test]
    fn test_number_in_stock_rules() {
        let check = |v: &str| validate_field(MovieField::NumberInStock, v);

        assert_eq!(check("").as_deref(), Some("\"Number In Stock\" must be a number"));
        assert_eq!(check("ten").as_deref(), Some("\"Number In Stock\" must be a number"));
        assert_eq!(check("12abc").as_deref(), Some("\"Number In Stock\" must be a number"));
        assert_eq!(check("2.5").as_deref(), Some("\"Number In Stock\" must be an integer"));
        assert_eq!(
            check("-1").as_deref(),
            Some("\"Number In Stock\" must be larger than or equal to 0")
        );
        assert_eq!(
            check("101").as_deref(),
            Some("\"Number In Stock\" must be less than or equal to 100")
        );

        for ok in ["0", "100", "42", " 7 ", "10.0"] {
            assert!(check(ok).is_none(), "{ok:?} should be valid");
        }
    }

    #[test]
    fn test_rate_rules() {
        let check = |v: &str| validate_field(MovieField::Rate, v);

        assert_eq!(check("").as_deref(), Some("\"Rate\" must be a number"));
        assert_eq!(check("NaN").as_deref(), Some("\"Rate\" must be a number"));
        assert_eq!(check("inf").as_deref(), Some("\"Rate\" must be a number"));
        assert_eq!(
            check("-0.5").as_deref(),
            Some("\"Rate\" must be larger than or equal to 0")
        );
        assert_eq!(
            check("10.01").as_deref(),
            Some("\"Rate\" must be less than or equal to 10")
        );

        for ok in ["0", "10", "7.5", ".5", "3"] {
            assert!(check(ok).is_none(), "{ok:?} should be valid");
        }
    }

    #[test]
    fn test_validate_all_valid_record() {
        assert!(validate_all(&valid_record()).is_ok());
    }

    #[test]
    fn test_validate_all_reports_every_failing_field() {
        let record = MovieRecord {
            title: "Up".to_string(),
            genre: "Drama".to_string(),
            number_in_stock: "500".to_string(),
            rate: String::new(),
        };

        let errors = validate_all(&record).unwrap_err();
        assert!(!errors.title.is_empty());
        assert!(errors.genre.is_empty());
        assert!(!errors.number_in_stock.is_empty());
        assert!(!errors.rate.is_empty());

        let failing: Vec<MovieField> = errors.failing().map(|(f, _)| f).collect();
        assert_eq!(
            failing,
            vec![MovieField::Title, MovieField::NumberInStock, MovieField::Rate]
        );
    }

    #[test]
    fn test_validate_all_agrees_with_validate_field() {
        let values = ["", "abc", "Inception", "0", "5", "10", "11", "7.5", "-1"];
        for title in values {
            for stock in values {
                for rate in values {
                    let record = MovieRecord {
                        title: title.to_string(),
                        genre: "Drama".to_string(),
                        number_in_stock: stock.to_string(),
                        rate: rate.to_string(),
                    };
                    let each_ok = MovieField::ALL
                        .iter()
                        .all(|f| validate_field(*f, record.get(*f)).is_none());
                    assert_eq!(validate_all(&record).is_ok(), each_ok, "{record:?}");
                }
            }
        }
    }

    #[test]
    fn test_error_state_set_and_clear() {
        let mut errors = ErrorState::default();
        assert!(errors.is_clear());

        errors.set(MovieField::Rate, Some("bad".to_string()));
        assert_eq!(errors.get(MovieField::Rate), "bad");
        assert!(!errors.is_clear());

        errors.set(MovieField::Rate, None);
        assert!(errors.is_clear());
    }

    #[test]
    fn test_error_state_serializes_with_form_keys() {
        let json = serde_json::to_value(ErrorState::default()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        for field in MovieField::ALL {
            assert!(keys.contains(&field.name()));
        }
        assert_eq!(keys.len(), MovieField::ALL.len());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" 10 "), Some(10.0));
        assert_eq!(parse_number("1e1"), Some(10.0));
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("Infinity"), None);
    }
}
