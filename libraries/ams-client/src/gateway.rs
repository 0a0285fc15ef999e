//! `Gateway` implementation over HTTP.

use crate::client::AmsClient;
use ams_core::{
    Artist, ArtistId, ArtistInput, ArtistPatch, Credentials, Gateway, LoginResponse,
    Result as AmsResult, SignupRequest, Song, SongId, SongInput, SongPatch,
};
use async_trait::async_trait;

#[async_trait]
impl Gateway for AmsClient {
    async fn sign_up(&self, request: &SignupRequest) -> AmsResult<serde_json::Value> {
        Ok(self.auth().sign_up(request).await?)
    }

    async fn login(&self, credentials: &Credentials) -> AmsResult<LoginResponse> {
        Ok(self.auth().login(credentials).await?)
    }

    async fn list_artists(&self) -> AmsResult<Vec<Artist>> {
        Ok(self.handle().artists().list().await?)
    }

    async fn get_artist(&self, id: ArtistId) -> AmsResult<Artist> {
        Ok(self.handle().artists().get(id).await?)
    }

    async fn create_artist(&self, artist: &ArtistInput) -> AmsResult<Artist> {
        Ok(self.handle().artists().create(artist).await?)
    }

    async fn update_artist(&self, id: ArtistId, patch: &ArtistPatch) -> AmsResult<Artist> {
        Ok(self.handle().artists().update(id, patch).await?)
    }

    async fn delete_artist(&self, id: ArtistId) -> AmsResult<serde_json::Value> {
        Ok(self.handle().artists().delete(id).await?)
    }

    async fn list_songs(&self) -> AmsResult<Vec<Song>> {
        Ok(self.handle().songs().list().await?)
    }

    async fn get_song(&self, id: SongId) -> AmsResult<Song> {
        Ok(self.handle().songs().get(id).await?)
    }

    async fn create_song(&self, song: &SongInput) -> AmsResult<Song> {
        Ok(self.handle().songs().create(song).await?)
    }

    async fn update_song(&self, id: SongId, patch: &SongPatch) -> AmsResult<Song> {
        Ok(self.handle().songs().update(id, patch).await?)
    }

    async fn delete_song(&self, id: SongId) -> AmsResult<serde_json::Value> {
        Ok(self.handle().songs().delete(id).await?)
    }
}
