//! Entry point of the movie page.
//!
//! The page receives the movie id from the route and the movie list the
//! caller navigated from. The page is only reachable from that list: without
//! it the page redirects to `/not-found`, for a new movie as for an edit.

use marquee_core::{Movie, MovieId};

use crate::error::FormResult;
use crate::form::MovieForm;
use crate::gateway::MovieGateway;
use crate::navigation::{Navigator, Route};

/// Open the movie page for `id`.
///
/// - no movie list: redirects to [`Route::NotFound`] and returns `Ok(None)`;
/// - a movie list but no id: a create form;
/// - a movie list and an id: an edit form hydrated from the list.
///
/// # Errors
/// Returns [`FormError::MovieNotFound`](crate::FormError::MovieNotFound) when
/// the list is supplied but does not contain `id`.
pub fn open_movie_page<G: MovieGateway>(
    gateway: G,
    id: Option<MovieId>,
    movies: Option<&[Movie]>,
    navigator: &mut dyn Navigator,
) -> FormResult<Option<MovieForm<G>>> {
    let Some(movies) = movies else {
        log::warn!("No movie list supplied for movie page {:?}; redirecting", id);
        navigator.navigate(Route::NotFound);
        return Ok(None);
    };

    match id {
        None => Ok(Some(MovieForm::create(gateway))),
        Some(id) => MovieForm::edit(gateway, id, movies).map(Some),
    }
}
