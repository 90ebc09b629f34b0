//! Where a form goes when it is done, and how it tells the user.

use std::fmt;

use marquee_core::MovieId;

/// A destination inside the catalog application.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// The movie listing, `/movies`.
    Movies,
    /// The form for a new movie, `/movies/new`.
    NewMovie,
    /// The form for an existing movie, `/movies/{id}`.
    Movie(MovieId),
    /// The fallback page, `/not-found`.
    NotFound,
}

impl Route {
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Movies => "/movies".to_string(),
            Self::NewMovie => "/movies/new".to_string(),
            Self::Movie(id) => format!("/movies/{id}"),
            Self::NotFound => "/not-found".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Receives the redirects a form or page issues.
pub trait Navigator: Send {
    fn navigate(&mut self, route: Route);
}

/// Shows transient status messages ("toasts") to the user.
pub trait Notifier: fmt::Debug + Send + Sync {
    fn notify(&self, message: &str);
}

/// A [`Notifier`] that writes messages to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, message: &str) {
        log::info!("{}", message);
    }
}
