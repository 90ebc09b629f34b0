//! Catalog service access.
//!
//! [`MovieGateway`] is the seam between a form and the REST backend. The
//! production implementation, [`RestGateway`], issues one HTTP call per
//! operation with no retries: every call either succeeds or returns a
//! [`GatewayError`] to the caller.

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use marquee_core::{Genre, Movie, MovieId, MoviePayload};

use crate::config::Config;
use crate::error::{GatewayError, GatewayResult};

const USER_AGENT: &str = concat!("marquee/", env!("CARGO_PKG_VERSION"));

/// REST operations on the movie catalog.
#[async_trait::async_trait]
pub trait MovieGateway: Send + Sync {
    /// All genres, in the order the service returns them.
    async fn list_genres(&self) -> GatewayResult<Vec<Genre>>;

    /// All stored movies.
    async fn list_movies(&self) -> GatewayResult<Vec<Movie>>;

    /// Locate a stored movie by id, scanning the full movie list.
    async fn find_movie_by_id(&self, id: &MovieId) -> GatewayResult<Option<Movie>> {
        let movies = self.list_movies().await?;
        Ok(movies.into_iter().find(|m| &m.id == id))
    }

    /// Store a new movie.
    async fn create_movie(&self, payload: &MoviePayload) -> GatewayResult<()>;

    /// Replace the stored movie `id` with `body`.
    async fn update_movie(&self, id: &MovieId, body: &Map<String, Value>) -> GatewayResult<()>;
}

/// HTTP client for the catalog service.
///
/// Endpoints are derived from [`Config`]: `{base_url}:{port}{genres_url}` and
/// `{base_url}:{port}{movies_url}`.
#[derive(Debug, Clone)]
pub struct RestGateway {
    http: Client,
    config: Config,
}

impl RestGateway {
    /// Create a new gateway for the service described by `config`.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &Config) -> GatewayResult<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            config: config.clone(),
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> GatewayResult<T> {
        log::debug!("GET {}", url);
        let response = self.http.get(url).send().await?;
        let response = check_status(url, response).await?;

        response.json::<T>().await.map_err(|e| GatewayError::Parse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait::async_trait]
impl MovieGateway for RestGateway {
    async fn list_genres(&self) -> GatewayResult<Vec<Genre>> {
        self.get_json(&self.config.genres_endpoint()).await
    }

    async fn list_movies(&self) -> GatewayResult<Vec<Movie>> {
        self.get_json(&self.config.movies_endpoint()).await
    }

    async fn create_movie(&self, payload: &MoviePayload) -> GatewayResult<()> {
        let url = self.config.movies_endpoint();
        log::debug!("POST {}", url);

        let response = self.http.post(&url).json(payload).send().await?;
        check_status(&url, response).await?;

        log::info!("Created movie {:?}", payload.title);
        Ok(())
    }

    async fn update_movie(&self, id: &MovieId, body: &Map<String, Value>) -> GatewayResult<()> {
        let url = self.config.movie_endpoint(id);
        log::debug!("PUT {}", url);

        let response = self.http.put(&url).json(body).send().await?;
        check_status(&url, response).await?;

        log::info!("Updated movie {}", id);
        Ok(())
    }
}

/// Turn a non-success response into [`GatewayError::Http`], keeping the
/// response body as the message.
async fn check_status(url: &str, response: Response) -> GatewayResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .unwrap_or_else(|e| format!("<unreadable body: {e}>"));
    log::warn!("{} answered {}: {}", url, status, message);

    Err(GatewayError::Http {
        url: url.to_string(),
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_creation() {
        let gateway = RestGateway::new(&Config::default());
        assert!(gateway.is_ok());
    }

    #[test]
    fn test_gateway_keeps_config() {
        let config = Config::default().with_overrides(None, Some(4100));
        let gateway = RestGateway::new(&config).unwrap();
        assert_eq!(gateway.config().port, 4100);

        let debug = format!("{gateway:?}");
        assert!(debug.contains("RestGateway"));
    }

    #[test]
    fn test_user_agent_names_crate() {
        assert!(USER_AGENT.starts_with("marquee/"));
    }
}
