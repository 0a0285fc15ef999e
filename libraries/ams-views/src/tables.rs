//! Artist and song tables.

use crate::list_view::{ListState, ListView, Phase};
use ams_core::{Artist, ArtistId, Gateway, Result, Song};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

/// Shown for a song whose artist id is not in the fetched artist list.
pub const UNKNOWN_ARTIST: &str = "Unknown Artist";

/// The artist table needs nothing beyond the generic list behaviour.
pub type ArtistTable = ListView<Artist>;

/// Song row with its artist resolved for display.
#[derive(Debug, Clone, PartialEq)]
pub struct SongRow {
    pub song: Song,
    pub artist_name: String,
}

/// Song table.
///
/// Loading fetches songs and artists in parallel; artists are only used to
/// turn `artist_id` into a display name and to populate the artist picker.
pub struct SongTable {
    songs: ListView<Song>,
    artists: RwLock<Vec<Artist>>,
}

impl SongTable {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            songs: ListView::new(gateway),
            artists: RwLock::new(Vec::new()),
        }
    }

    /// Fetch songs and artists together; either failing puts the table in
    /// the error phase.
    pub async fn load(&self) -> Result<()> {
        self.songs.begin_load().await;

        let gateway = self.songs.gateway();
        let fetched = tokio::try_join!(gateway.list_songs(), gateway.list_artists());

        match fetched {
            Ok((songs, artists)) => {
                debug!(artists = artists.len(), "Artist names loaded");
                *self.artists.write().await = artists;
                self.songs.finish_load(Ok(songs)).await
            }
            Err(e) => self.songs.finish_load(Err(e)).await,
        }
    }

    pub async fn reload(&self) -> Result<()> {
        self.load().await
    }

    /// Mutations (create, update, two-step delete) go through the list.
    pub fn songs(&self) -> &ListView<Song> {
        &self.songs
    }

    pub async fn snapshot(&self) -> ListState<Song> {
        self.songs.snapshot().await
    }

    pub async fn phase(&self) -> Phase {
        self.songs.phase().await
    }

    pub async fn artists(&self) -> Vec<Artist> {
        self.artists.read().await.clone()
    }

    pub async fn artist_name(&self, id: ArtistId) -> String {
        self.artists
            .read()
            .await
            .iter()
            .find(|a| a.id == id)
            .map_or_else(|| UNKNOWN_ARTIST.to_string(), |a| a.name.clone())
    }

    /// Current rows joined with artist names.
    pub async fn rows(&self) -> Vec<SongRow> {
        let names: HashMap<ArtistId, String> = self
            .artists
            .read()
            .await
            .iter()
            .map(|a| (a.id, a.name.clone()))
            .collect();

        self.songs
            .snapshot()
            .await
            .items
            .into_iter()
            .map(|song| SongRow {
                artist_name: names
                    .get(&song.artist_id)
                    .cloned()
                    .unwrap_or_else(|| UNKNOWN_ARTIST.to_string()),
                song,
            })
            .collect()
    }
}
