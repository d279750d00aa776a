use url::Url;

use super::{SpotifyClient, parse_json};
use crate::{
    config::Config,
    error::AppError,
    types::{Token, TokenResponse},
};

/// Builds the Spotify authorization URL the browser is sent to by `/login`.
///
/// The URL carries `client_id`, `response_type=code`, `redirect_uri` and
/// `scope`, all query-encoded.
///
/// # Example
///
/// ```
/// let url = authorize_url(&config)?;
/// // https://accounts.spotify.com/authorize?client_id=...&response_type=code&...
/// ```
pub fn authorize_url(config: &Config) -> Result<Url, AppError> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("scope", config.scope.as_str()),
        ],
    )?;
    Ok(url)
}

impl SpotifyClient {
    /// Exchanges an authorization code for an access token.
    ///
    /// Completes the authorization-code flow by posting the code together with
    /// the client credentials to the token endpoint. The call is made once; a
    /// non-success status or a network failure is returned as is.
    ///
    /// # Token Contents
    ///
    /// Only the access token is used afterwards. Scope and lifetime are kept
    /// for logging; the service never refreshes.
    pub(super) async fn request_token(&self, code: &str) -> Result<Token, AppError> {
        let res = self
            .http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", self.redirect_uri.as_str()),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await?;

        let json: TokenResponse = parse_json(res).await?;

        Ok(Token {
            access_token: json.access_token,
            scope: json.scope.unwrap_or_default(),
            expires_in: json.expires_in.unwrap_or(3600),
        })
    }
}
