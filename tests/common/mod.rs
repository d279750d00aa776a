#![allow(dead_code)]

use std::{
    collections::HashMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use toptracks::{
    config::Config,
    error::AppError,
    spotify::SpotifyApi,
    types::{ExternalUrls, Image, SpotifyAlbum, SpotifyArtist, SpotifyTrack, TimeRange, Token},
};

// Spotify stand-in serving a fixed list of pages
pub struct FakeSpotify {
    pub pages: Vec<Vec<SpotifyTrack>>,
    pub user_id: String,
    pub fail_exchange: bool,
    pub fail_pages: bool,
    pub exchange_calls: AtomicUsize,
    pub page_requests: Mutex<Vec<(u32, u32, TimeRange)>>,
}

impl FakeSpotify {
    pub fn with_pages(pages: Vec<Vec<SpotifyTrack>>) -> Self {
        Self {
            pages,
            user_id: "user-1".to_string(),
            fail_exchange: false,
            fail_pages: false,
            exchange_calls: AtomicUsize::new(0),
            page_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn exchange_count(&self) -> usize {
        self.exchange_calls.load(Ordering::SeqCst)
    }

    pub fn requested_offsets(&self) -> Vec<u32> {
        self.page_requests
            .lock()
            .unwrap()
            .iter()
            .map(|(offset, _, _)| *offset)
            .collect()
    }
}

#[async_trait]
impl SpotifyApi for FakeSpotify {
    async fn exchange_code(&self, code: &str) -> Result<Token, AppError> {
        self.exchange_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_exchange {
            return Err(AppError::Upstream {
                status: 400,
                body: "invalid_grant".to_string(),
            });
        }

        Ok(Token {
            access_token: format!("token-{code}"),
            scope: "user-top-read".to_string(),
            expires_in: 3600,
        })
    }

    async fn current_user_id(&self, _token: &str) -> Result<String, AppError> {
        Ok(self.user_id.clone())
    }

    async fn top_tracks_page(
        &self,
        _token: &str,
        offset: u32,
        limit: u32,
        time_range: TimeRange,
    ) -> Result<Vec<SpotifyTrack>, AppError> {
        self.page_requests
            .lock()
            .unwrap()
            .push((offset, limit, time_range));
        if self.fail_pages {
            return Err(AppError::Upstream {
                status: 401,
                body: "The access token expired".to_string(),
            });
        }

        let index = (offset / limit) as usize;
        Ok(self.pages.get(index).cloned().unwrap_or_default())
    }
}

pub fn raw_track(name: &str, artists: &[&str], album: &str, image: Option<&str>) -> SpotifyTrack {
    SpotifyTrack {
        name: name.to_string(),
        artists: artists
            .iter()
            .map(|a| SpotifyArtist {
                name: a.to_string(),
            })
            .collect(),
        album: SpotifyAlbum {
            name: album.to_string(),
            images: image
                .map(|url| vec![Image {
                    url: url.to_string(),
                }])
                .unwrap_or_default(),
        },
        external_urls: ExternalUrls {
            spotify: Some(format!("https://open.spotify.com/track/{name}")),
        },
    }
}

// `count` distinct tracks named "<prefix>-<i>" by "Artist <prefix>"
pub fn unique_page(prefix: &str, count: usize) -> Vec<SpotifyTrack> {
    (0..count)
        .map(|i| {
            let artist = format!("Artist {prefix}");
            raw_track(
                &format!("{prefix}-{i}"),
                &[artist.as_str()],
                &format!("Album {prefix}"),
                None,
            )
        })
        .collect()
}

pub fn test_config() -> Config {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("SPOTIFY_API_AUTH_CLIENT_ID", "client-123"),
        ("SPOTIFY_API_AUTH_CLIENT_SECRET", "secret-456"),
        ("SPOTIFY_API_REDIRECT_URI", "http://127.0.0.1:3000/callback"),
        ("DATABASE_URL", "sqlite::memory:"),
    ]);
    Config::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap()
}
