use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub scope: String,
    pub expires_in: u64,
}

/// Body of the token endpoint's reply to an authorization-code exchange.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub expires_in: Option<u64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: String,
}

/// Ranking window of the top items endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeRange {
    ShortTerm,
    MediumTerm,
    #[default]
    LongTerm,
}

impl TimeRange {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::ShortTerm => "short_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::LongTerm => "long_term",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopTracksResponse {
    #[serde(default)]
    pub items: Vec<SpotifyTrack>,
}

/// A track object as returned by the top items endpoint, trimmed to the
/// fields that end up in a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyTrack {
    pub name: String,
    #[serde(default)]
    pub artists: Vec<SpotifyArtist>,
    pub album: SpotifyAlbum,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

impl SpotifyTrack {
    /// Artist names in the order Spotify lists them, joined with `", "`.
    pub fn artist_names(&self) -> String {
        self.artists
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Key two listings of the same song share: `"<name> - <artists>"`.
    pub fn dedup_key(&self) -> String {
        format!("{} - {}", self.name, self.artist_names())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpotifyAlbum {
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub name: String,
    pub artist: String,
    pub album: String,
    pub spotify_url: String,
    #[serde(default)]
    pub artwork: Option<String>,
}

impl From<&SpotifyTrack> for Track {
    fn from(raw: &SpotifyTrack) -> Self {
        Track {
            name: raw.name.clone(),
            artist: raw.artist_names(),
            album: raw.album.name.clone(),
            spotify_url: raw.external_urls.spotify.clone().unwrap_or_default(),
            artwork: raw.album.images.first().map(|i| i.url.clone()),
        }
    }
}

/// The single stored set of a user's top tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSnapshot {
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
    pub tracks: Vec<Track>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub name: String,
    pub artist: String,
    pub album: String,
}
