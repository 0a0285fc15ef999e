//! Song types

use super::ArtistId;
use serde::{Deserialize, Serialize};

pub type SongId = i64;

/// Music genres the API accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Rnb,
    Country,
    Classic,
    Rock,
    Jazz,
}

impl Genre {
    /// All genres in the order the pickers list them
    pub const ALL: [Genre; 5] = [
        Genre::Rnb,
        Genre::Country,
        Genre::Classic,
        Genre::Rock,
        Genre::Jazz,
    ];

    /// Parse form input: accepts the wire code or the label.
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.code().eq_ignore_ascii_case(raw) || g.label().eq_ignore_ascii_case(raw))
    }

    pub fn code(self) -> &'static str {
        match self {
            Genre::Rnb => "rnb",
            Genre::Country => "country",
            Genre::Classic => "classic",
            Genre::Rock => "rock",
            Genre::Jazz => "jazz",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Genre::Rnb => "R&B",
            Genre::Country => "Country",
            Genre::Classic => "Classic",
            Genre::Rock => "Rock",
            Genre::Jazz => "Jazz",
        }
    }
}

/// A song as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub id: SongId,
    pub artist_id: ArtistId,
    pub title: String,
    pub album_name: String,
    pub genre: Genre,
}

/// Data for creating a new song
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongInput {
    pub artist_id: ArtistId,
    pub title: String,
    pub album_name: String,
    pub genre: Genre,
}

/// Partial update
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SongPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist_id: Option<ArtistId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<Genre>,
}

impl Song {
    pub fn from_input(id: SongId, input: SongInput) -> Self {
        Self {
            id,
            artist_id: input.artist_id,
            title: input.title,
            album_name: input.album_name,
            genre: input.genre,
        }
    }

    /// Apply a patch locally, mirroring what the server does on PUT.
    pub fn apply(&mut self, patch: &SongPatch) {
        if let Some(artist_id) = patch.artist_id {
            self.artist_id = artist_id;
        }
        if let Some(title) = &patch.title {
            self.title.clone_from(title);
        }
        if let Some(album) = &patch.album_name {
            self.album_name.clone_from(album);
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
    }
}

impl From<&Song> for SongInput {
    fn from(song: &Song) -> Self {
        Self {
            artist_id: song.artist_id,
            title: song.title.clone(),
            album_name: song.album_name.clone(),
            genre: song.genre,
        }
    }
}

impl From<SongInput> for SongPatch {
    fn from(input: SongInput) -> Self {
        Self {
            artist_id: Some(input.artist_id),
            title: Some(input.title),
            album_name: Some(input.album_name),
            genre: Some(input.genre),
        }
    }
}
