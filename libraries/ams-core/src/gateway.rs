//! Gateway trait for the remote REST API

use crate::error::Result;
use crate::types::{
    Artist, ArtistId, ArtistInput, ArtistPatch, Credentials, LoginResponse, SignupRequest, Song,
    SongId, SongInput, SongPatch,
};
use async_trait::async_trait;

/// Boundary between the views and the remote API.
///
/// One method per resource operation. Implementations shape the request and
/// normalize failures into `AmsError::Transport` / `AmsError::Api`; they carry
/// no business logic and make a single attempt per call.
#[async_trait]
pub trait Gateway: Send + Sync {
    // ========================================================================
    // Users
    // ========================================================================

    /// Register a new account. The response body is returned as-is.
    async fn sign_up(&self, request: &SignupRequest) -> Result<serde_json::Value>;

    /// Authenticate with email and password
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse>;

    // ========================================================================
    // Artists
    // ========================================================================

    /// Get all artists
    async fn list_artists(&self) -> Result<Vec<Artist>>;

    /// Get artist by ID
    async fn get_artist(&self, id: ArtistId) -> Result<Artist>;

    /// Create a new artist
    async fn create_artist(&self, artist: &ArtistInput) -> Result<Artist>;

    /// Update an artist
    async fn update_artist(&self, id: ArtistId, patch: &ArtistPatch) -> Result<Artist>;

    /// Delete an artist. The response body is returned as-is.
    async fn delete_artist(&self, id: ArtistId) -> Result<serde_json::Value>;

    // ========================================================================
    // Songs
    // ========================================================================

    /// Get all songs
    async fn list_songs(&self) -> Result<Vec<Song>>;

    /// Get song by ID
    async fn get_song(&self, id: SongId) -> Result<Song>;

    /// Create a new song
    async fn create_song(&self, song: &SongInput) -> Result<Song>;

    /// Update a song
    async fn update_song(&self, id: SongId, patch: &SongPatch) -> Result<Song>;

    /// Delete a song. The response body is returned as-is.
    async fn delete_song(&self, id: SongId) -> Result<serde_json::Value>;
}
