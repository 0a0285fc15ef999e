//! Artist endpoints.

use crate::error::Result;
use crate::response::{authorize, endpoint, parse, parse_value, send};
use crate::types::ArtistListResponse;
use ams_core::{Artist, ArtistId, ArtistInput, ArtistPatch};
use reqwest::Client;
use tracing::debug;
use url::Url;

/// Artist client.
pub struct ArtistClient<'a> {
    http: &'a Client,
    base_url: &'a Url,
    access_token: Option<&'a str>,
}

impl<'a> ArtistClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a Url, access_token: Option<&'a str>) -> Self {
        Self {
            http,
            base_url,
            access_token,
        }
    }

    /// Fetch all artists.
    pub async fn list(&self) -> Result<Vec<Artist>> {
        let url = endpoint(self.base_url, "artists/")?;
        debug!(url = %url, "Fetching artists");

        let response = send(authorize(self.http.get(url), self.access_token)).await?;
        let list: ArtistListResponse = parse(response, "artist list").await?;

        debug!(count = list.artists.len(), "Fetched artists");
        Ok(list.artists)
    }

    /// Fetch a single artist.
    pub async fn get(&self, id: ArtistId) -> Result<Artist> {
        let url = endpoint(self.base_url, &format!("artists/{}/", id))?;
        debug!(url = %url, "Fetching artist");

        let response = send(authorize(self.http.get(url), self.access_token)).await?;
        parse(response, "artist").await
    }

    /// Create an artist; the server assigns the id.
    pub async fn create(&self, artist: &ArtistInput) -> Result<Artist> {
        let url = endpoint(self.base_url, "artists/")?;
        debug!(url = %url, name = %artist.name, "Creating artist");

        let response = send(authorize(self.http.post(url).json(artist), self.access_token)).await?;
        parse(response, "created artist").await
    }

    /// Update an artist with the fields present in `patch`.
    pub async fn update(&self, id: ArtistId, patch: &ArtistPatch) -> Result<Artist> {
        let url = endpoint(self.base_url, &format!("artists/{}/", id))?;
        debug!(url = %url, "Updating artist");

        let response = send(authorize(self.http.put(url).json(patch), self.access_token)).await?;
        parse(response, "updated artist").await
    }

    /// Delete an artist.
    pub async fn delete(&self, id: ArtistId) -> Result<serde_json::Value> {
        let url = endpoint(self.base_url, &format!("artists/{}/", id))?;
        debug!(url = %url, "Deleting artist");

        let response = send(authorize(self.http.delete(url), self.access_token)).await?;
        parse_value(response, "delete response").await
    }
}
