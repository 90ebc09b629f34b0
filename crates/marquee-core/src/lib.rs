//! Core domain model for marquee.
//!
//! This crate defines the stored movie and genre shapes returned by the
//! catalog service, the editable [`MovieRecord`] a form works on, and the
//! per-field validation schema that gates saving.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod model;
pub mod validation;

pub use error::{Error, Result};
pub use model::{Genre, GenreId, Movie, MovieField, MovieId, MoviePayload, MovieRecord};
pub use validation::{validate_all, validate_field, ErrorState};
