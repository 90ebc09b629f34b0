//! The movie form controller.
//!
//! A [`MovieForm`] owns one edit session: the raw field values, the
//! per-field error messages, and the genre options offered to the user.
//! Each change revalidates only the changed field. Submitting revalidates
//! the whole record and, when it passes, saves through the gateway, waits
//! the configured delay, and navigates to the movie list.

use std::time::Duration;

use marquee_core::validation::parse_number;
use marquee_core::{
    validate_all, validate_field, ErrorState, Genre, Movie, MovieField, MovieId, MoviePayload,
    MovieRecord,
};

use crate::error::{FormError, FormResult};
use crate::gateway::MovieGateway;
use crate::navigation::{LogNotifier, Navigator, Notifier, Route};

/// Message shown while a save is in flight.
pub const SAVING_MESSAGE: &str = "Saving...";

/// Default pause between a successful save and navigating away.
pub const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(1000);

/// Whether the form creates a new movie or edits a stored one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(MovieId),
}

/// Validation state of a single field.
///
/// A field starts `Untouched` and becomes `Valid` or `Invalid` on its first
/// change. It never returns to `Untouched`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Untouched,
    Valid,
    Invalid,
}

/// Result of [`MovieForm::submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The movie was saved and the form navigated to the movie list.
    Saved,
    /// The record failed validation; nothing was sent.
    Invalid,
    /// The form was already saved; nothing was sent.
    AlreadySubmitted,
}

/// Editable state and submit flow for one movie.
#[derive(Debug)]
pub struct MovieForm<G> {
    gateway: G,
    mode: FormMode,
    record: MovieRecord,
    errors: ErrorState,
    touched: [bool; MovieField::ALL.len()],
    genre_options: Vec<String>,
    notifier: Box<dyn Notifier>,
    save_delay: Duration,
    submitted: bool,
}

impl<G: MovieGateway> MovieForm<G> {
    /// A form for a new movie, with every field empty.
    pub fn create(gateway: G) -> Self {
        Self::with_state(gateway, FormMode::Create, MovieRecord::empty())
    }

    /// A form for the stored movie `id`, hydrated from `movies`.
    ///
    /// The caller supplies the movie list; nothing is fetched here.
    ///
    /// # Errors
    /// Returns [`FormError::MovieNotFound`] when no movie in `movies` has
    /// exactly this id.
    pub fn edit(gateway: G, id: MovieId, movies: &[Movie]) -> FormResult<Self> {
        let movie = Movie::find_by_id(movies, &id).ok_or_else(|| {
            log::error!("Movie {} is not in the supplied list of {}", id, movies.len());
            FormError::MovieNotFound(id.clone())
        })?;

        let record = MovieRecord::from_movie(movie);
        Ok(Self::with_state(gateway, FormMode::Edit(id), record))
    }

    fn with_state(gateway: G, mode: FormMode, record: MovieRecord) -> Self {
        Self {
            gateway,
            mode,
            record,
            errors: ErrorState::default(),
            touched: [false; MovieField::ALL.len()],
            genre_options: Vec::new(),
            notifier: Box::new(LogNotifier),
            save_delay: DEFAULT_SAVE_DELAY,
            submitted: false,
        }
    }

    #[must_use]
    pub fn with_notifier(mut self, notifier: Box<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    #[must_use]
    pub fn with_save_delay(mut self, delay: Duration) -> Self {
        self.save_delay = delay;
        self
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn record(&self) -> &MovieRecord {
        &self.record
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    /// The page this form is shown on: `/movies/new` or `/movies/{id}`.
    pub fn route(&self) -> Route {
        match &self.mode {
            FormMode::Create => Route::NewMovie,
            FormMode::Edit(id) => Route::Movie(id.clone()),
        }
    }

    /// Genre names offered for selection, led by the empty "unselected"
    /// entry once loaded.
    pub fn genre_options(&self) -> &[String] {
        &self.genre_options
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn field_status(&self, field: MovieField) -> FieldStatus {
        if !self.touched[field.index()] {
            FieldStatus::Untouched
        } else if self.errors.get(field).is_empty() {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }

    /// Apply a change addressed by input name (`title`, `genre`,
    /// `numberInStock`, `rate`).
    pub fn change(&mut self, name: &str, value: impl Into<String>) -> FormResult<()> {
        let field: MovieField = name.parse()?;
        self.set_field(field, value);
        Ok(())
    }

    /// Store `value` verbatim and revalidate that field only.
    pub fn set_field(&mut self, field: MovieField, value: impl Into<String>) {
        self.record.set(field, value);
        let message = validate_field(field, self.record.get(field));
        log::debug!("{} changed; error: {:?}", field, message);

        self.errors.set(field, message);
        self.touched[field.index()] = true;
    }

    /// Whether the whole record currently passes validation. This is the
    /// gate for the save button.
    pub fn can_submit(&self) -> bool {
        validate_all(&self.record).is_ok()
    }

    /// Fetch the genre list and offer its names, after a leading empty
    /// option.
    pub async fn load_genre_options(&mut self) -> FormResult<&[String]> {
        let genres = self.gateway.list_genres().await?;

        let mut options = Vec::with_capacity(genres.len() + 1);
        options.push(String::new());
        options.extend(genres.into_iter().map(|g| g.name));
        log::debug!("Loaded {} genre options", options.len() - 1);

        self.genre_options = options;
        Ok(self.genre_options.as_slice())
    }

    /// Build the outgoing body from the current record.
    ///
    /// The genre name is resolved to its id against a fresh genre list.
    pub async fn payload(&self) -> FormResult<MoviePayload> {
        let genres = self.gateway.list_genres().await?;
        let genre = Genre::find_by_name(&genres, &self.record.genre)
            .ok_or_else(|| FormError::GenreNotFound(self.record.genre.clone()))?;

        Ok(MoviePayload {
            title: self.record.title.clone(),
            genre_id: genre.id.clone(),
            number_in_stock: parse_stock(&self.record.number_in_stock)?,
            daily_rental_rate: parse_number(&self.record.rate).ok_or_else(|| {
                FormError::InvalidValue {
                    field: MovieField::Rate.name(),
                    value: self.record.rate.clone(),
                }
            })?,
        })
    }

    /// Validate and save the record, then navigate to the movie list.
    ///
    /// An invalid record is not sent and leaves the error state as it was.
    /// A failed save is returned as an error and does not navigate.
    pub async fn submit(&mut self, navigator: &mut dyn Navigator) -> FormResult<SubmitOutcome> {
        if self.submitted {
            log::warn!("Ignoring submit of an already saved form");
            return Ok(SubmitOutcome::AlreadySubmitted);
        }

        if let Err(errors) = validate_all(&self.record) {
            log::debug!("Submit blocked: {:?}", errors);
            return Ok(SubmitOutcome::Invalid);
        }

        self.notifier.notify(SAVING_MESSAGE);

        let saved = match self.mode.clone() {
            FormMode::Create => self.save_new().await,
            FormMode::Edit(id) => self.save_existing(&id).await,
        };
        if let Err(e) = saved {
            log::warn!("Saving {:?} failed: {}", self.record.title, e);
            return Err(e);
        }

        self.submitted = true;
        tokio::time::sleep(self.save_delay).await;
        navigator.navigate(Route::Movies);

        Ok(SubmitOutcome::Saved)
    }

    async fn save_new(&self) -> FormResult<()> {
        let payload = self.payload().await?;
        self.gateway.create_movie(&payload).await?;
        Ok(())
    }

    async fn save_existing(&self, id: &MovieId) -> FormResult<()> {
        let stored = self
            .gateway
            .find_movie_by_id(id)
            .await?
            .ok_or_else(|| FormError::MovieNotFound(id.clone()))?;

        let payload = self.payload().await?;
        let body = stored.update_body(&payload);
        self.gateway.update_movie(id, &body).await?;
        Ok(())
    }
}

/// Convert validated stock text to a count.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn parse_stock(value: &str) -> FormResult<u32> {
    parse_number(value)
        .filter(|n| n.fract() == 0.0 && *n >= 0.0 && *n <= f64::from(u32::MAX))
        .map(|n| n as u32)
        .ok_or_else(|| FormError::InvalidValue {
            field: MovieField::NumberInStock.name(),
            value: value.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock("10").unwrap(), 10);
        assert_eq!(parse_stock(" 0 ").unwrap(), 0);
        assert_eq!(parse_stock("100.0").unwrap(), 100);
        assert!(parse_stock("2.5").is_err());
        assert!(parse_stock("-3").is_err());
        assert!(parse_stock("").is_err());
    }
}
