//! # Spotify Integration Module
//!
//! Thin client for the three Spotify Web API endpoints the service needs:
//!
//! - `POST /api/token` - authorization-code exchange ([`auth`])
//! - `GET /me` - current user's profile ([`tracks`])
//! - `GET /me/top/tracks` - paged top tracks listing ([`tracks`])
//!
//! The operations are exposed through the [`SpotifyApi`] trait so the HTTP
//! front end and the collector can be driven by something other than the real
//! web API. [`SpotifyClient`] is the production implementation.
//!
//! ## Error Handling
//!
//! Every call is made exactly once. Network failures surface as
//! [`AppError::Spotify`], non-success statuses as [`AppError::Upstream`] with
//! the response body attached. There is no retry, no token refresh and no
//! rate limit handling.

pub mod auth;
pub mod tracks;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    config::Config,
    error::AppError,
    types::{SpotifyTrack, TimeRange, Token},
};

/// Operations against the Spotify Web API.
#[async_trait]
pub trait SpotifyApi: Send + Sync {
    /// Exchanges an authorization code for an access token.
    async fn exchange_code(&self, code: &str) -> Result<Token, AppError>;

    /// Resolves the Spotify user id the token belongs to.
    async fn current_user_id(&self, token: &str) -> Result<String, AppError>;

    /// Fetches one page of the user's top tracks. An empty vector means the
    /// listing is exhausted.
    async fn top_tracks_page(
        &self,
        token: &str,
        offset: u32,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<Vec<SpotifyTrack>, AppError>;
}

/// [`SpotifyApi`] backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    client_id: String,
    client_secret: String,
    redirect_uri: String,
    token_url: String,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: Client::new(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            token_url: config.token_url.clone(),
            api_url: config.api_url.clone(),
        }
    }
}

#[async_trait]
impl SpotifyApi for SpotifyClient {
    async fn exchange_code(&self, code: &str) -> Result<Token, AppError> {
        self.request_token(code).await
    }

    async fn current_user_id(&self, token: &str) -> Result<String, AppError> {
        Ok(self.get_profile(token).await?.id)
    }

    async fn top_tracks_page(
        &self,
        token: &str,
        offset: u32,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<Vec<SpotifyTrack>, AppError> {
        Ok(self
            .get_top_tracks(token, offset, limit, time_range)
            .await?
            .items)
    }
}

/// Decodes a JSON body, turning non-success statuses into
/// [`AppError::Upstream`].
async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(AppError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    Ok(response.json::<T>().await?)
}
