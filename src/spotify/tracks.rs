use super::{SpotifyClient, parse_json};
use crate::{
    error::AppError,
    types::{TimeRange, TopTracksResponse, UserProfile},
};

impl SpotifyClient {
    pub(super) async fn get_profile(&self, token: &str) -> Result<UserProfile, AppError> {
        let api_url = format!("{uri}/me", uri = self.api_url);

        let response = self.http.get(&api_url).bearer_auth(token).send().await?;
        parse_json(response).await
    }

    /// Retrieves one page of the user's top tracks.
    ///
    /// # Arguments
    ///
    /// * `token` - Valid access token for Spotify API authentication
    /// * `offset` - Index of the first item to return
    /// * `limit` - Maximum number of tracks in this page (1-50)
    /// * `time_range` - Ranking window, the service always asks for `long_term`
    ///
    /// # Returns
    ///
    /// The page as sent by Spotify. Once the listing is exhausted the `items`
    /// array comes back empty.
    pub(super) async fn get_top_tracks(
        &self,
        token: &str,
        offset: u32,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<TopTracksResponse, AppError> {
        let api_url = format!(
            "{uri}/me/top/tracks?limit={limit}&offset={offset}&time_range={time_range}",
            uri = self.api_url,
        );

        let response = self.http.get(&api_url).bearer_auth(token).send().await?;
        parse_json(response).await
    }
}
