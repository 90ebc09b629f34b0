//! Gateway and form error types.

use marquee_core::MovieId;
use thiserror::Error;

/// Errors that can occur talking to the catalog service.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The service answered with a non-success status.
    #[error("HTTP {status} from {url}: {message}")]
    Http {
        url: String,
        status: u16,
        message: String,
    },

    /// A response body could not be decoded.
    #[error("parse error from {url}: {message}")]
    Parse { url: String, message: String },

    /// The request could not be sent or its response not received.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

impl GatewayError {
    /// Returns `true` when the service rejected the request as invalid (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Http { status, .. } if (400..500).contains(status))
    }

    /// Returns `true` when the service reported that the resource is missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}

/// Convenience alias for gateway results.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Errors surfaced by a movie form.
#[derive(Debug, Error)]
pub enum FormError {
    /// Edit was requested for a movie that is not in the supplied list.
    #[error("movie not found: {0}")]
    MovieNotFound(MovieId),

    /// The selected genre name has no matching genre on the service.
    #[error("genre not found: {0:?}")]
    GenreNotFound(String),

    /// A change was addressed to a field the form does not have.
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// A numeric field could not be converted for the request body.
    #[error("invalid value for {field}: {value:?}")]
    InvalidValue { field: &'static str, value: String },

    /// The catalog service call failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

impl From<marquee_core::Error> for FormError {
    fn from(err: marquee_core::Error) -> Self {
        match err {
            marquee_core::Error::UnknownField(name) => Self::UnknownField(name),
        }
    }
}

/// Convenience alias for form results.
pub type FormResult<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn http(status: u16) -> GatewayError {
        GatewayError::Http {
            url: "http://localhost:3900/api/movies".to_string(),
            status,
            message: "boom".to_string(),
        }
    }

    #[test]
    fn test_status_classification() {
        assert!(http(400).is_client_error());
        assert!(http(404).is_not_found());
        assert!(!http(500).is_client_error());
        assert!(!http(500).is_not_found());
    }

    #[test]
    fn test_unknown_field_maps_through() {
        let err: FormError = marquee_core::Error::UnknownField("liked".to_string()).into();
        assert!(matches!(err, FormError::UnknownField(name) if name == "liked"));
    }

    #[test]
    fn test_form_error_display() {
        let err = FormError::MovieNotFound(MovieId::from("m404"));
        assert_eq!(err.to_string(), "movie not found: m404");

        let err = FormError::from(http(500));
        assert!(err.to_string().starts_with("HTTP 500"));
    }
}
