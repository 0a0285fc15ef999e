//! Types for API requests and responses that only the client needs.

use ams_core::{Artist, Song};
use serde::{Deserialize, Serialize};

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/";

/// Configuration for connecting to the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL that resource paths are joined onto
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

// =============================================================================
// Collection Responses
// =============================================================================

/// Response from `GET artists/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArtistListResponse {
    #[serde(default)]
    pub artists: Vec<Artist>,
}

/// Response from `GET music/`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SongListResponse {
    #[serde(default)]
    pub music: Vec<Song>,
}
