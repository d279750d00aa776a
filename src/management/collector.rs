use std::collections::HashSet;

use crate::{
    error::AppError,
    spotify::SpotifyApi,
    types::{TimeRange, Track},
};

pub const MAX_SONGS: usize = 150;
pub const PAGE_LIMIT: u32 = 50;

/// Walks the paged top tracks listing until enough unique tracks are found.
#[derive(Debug, Clone, Copy)]
pub struct TopTracksCollector {
    pub max_songs: usize,
    pub limit: u32,
    pub time_range: TimeRange,
}

impl Default for TopTracksCollector {
    fn default() -> Self {
        Self {
            max_songs: MAX_SONGS,
            limit: PAGE_LIMIT,
            time_range: TimeRange::LongTerm,
        }
    }
}

impl TopTracksCollector {
    /// Collects up to `max_songs` unique tracks, in the order they were first seen.
    ///
    /// Pages are requested from offset 0 in steps of `limit`. Before each request
    /// the loop stops if `max_songs` tracks have been collected; after it, the
    /// loop stops if the page was empty. Tracks sharing the same
    /// `"<name> - <artists>"` key are dropped after their first occurrence, and a
    /// page is only consumed until the target count is reached.
    ///
    /// Any failing page request aborts the walk and the partial result is
    /// discarded.
    pub async fn collect(&self, api: &dyn SpotifyApi, token: &str) -> Result<Vec<Track>, AppError> {
        let mut tracks: Vec<Track> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut offset: u32 = 0;

        while tracks.len() < self.max_songs {
            let page = api
                .top_tracks_page(token, offset, self.limit, self.time_range)
                .await?;
            tracing::debug!(offset, items = page.len(), "fetched top tracks page");

            if page.is_empty() {
                break;
            }

            for raw in &page {
                if tracks.len() >= self.max_songs {
                    break;
                }
                if seen.insert(raw.dedup_key()) {
                    tracks.push(Track::from(raw));
                }
            }

            offset += self.limit;
        }

        Ok(tracks)
    }
}
