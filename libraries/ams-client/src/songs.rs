//! Song endpoints (served under `music/`).

use crate::error::Result;
use crate::response::{authorize, endpoint, parse, parse_value, send};
use crate::types::SongListResponse;
use ams_core::{Song, SongId, SongInput, SongPatch};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Song client.
pub struct SongClient<'a> {
    http: &'a Client,
    base_url: &'a Url,
    access_token: Option<&'a str>,
}

impl<'a> SongClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a Url, access_token: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    pub async fn list(&self) -> Result<Vec<Song>> {
        let url = endpoint(self.base_url, "music/")?;
        debug!(url = %url, "Fetching songs");

        let response = send(authorize(self.http.get(url), self.access_token)).await?;
        let list: SongListResponse = parse(response, "song list").await?;

        debug!(count = list.music.len(), "Fetched songs");
        Ok(list.music)
    }

    pub async fn get(&self, id: SongId) -> Result<Song> {
        let url = endpoint(self.base_url, &format!("music/{}/", id))?;
        debug!(url = %url, "Fetching song");

        let response = send(authorize(self.http.get(url), self.access_token)).await?;
        parse(response, "song").await
    }

    pub async fn create(&self, song: &SongInput) -> Result<Song> {
        let url = endpoint(self.base_url, "music/")?;
        debug!(url = %url, title = %song.title, artist_id = song.artist_id, "Creating song");

        let response = send(authorize(self.http.post(url).json(song), self.access_token)).await?;
        parse(response, "created song").await
    }

    pub async fn update(&self, id: SongId, patch: &SongPatch) -> Result<Song> {
        let url = endpoint(self.base_url, &format!("music/{}/", id))?;
        debug!(url = %url, "Updating song");

        let response = send(authorize(self.http.put(url).json(patch), self.access_token)).await?;
        parse(response, "updated song").await
    }

    pub async fn delete(&self, id: SongId) -> Result<serde_json::Value> {
        let url = endpoint(self.base_url, &format!("music/{}/", id))?;
        debug!(url = %url, "Deleting song");

        let response = send(authorize(self.http.delete(url), self.access_token)).await?;
        parse_value(response, "delete response").await
    }
}
