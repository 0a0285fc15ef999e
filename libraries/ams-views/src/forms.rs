//! Artist and song working copies.

use crate::dialog::{required, Form};
use ams_core::types::dates::{format_date, parse_date, parse_release_year};
use ams_core::{AmsError, Artist, ArtistId, ArtistInput, Gender, Genre, Result, Song, SongInput};

/// Artist add/edit form. Every field is kept as typed text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistForm {
    pub name: String,
    /// `YYYY-MM-DD`
    pub dob: String,
    /// `m`, `f` or `o`
    pub gender: String,
    pub address: String,
    pub first_release_year: String,
    pub no_of_albums_released: String,
}

impl From<&Artist> for ArtistForm {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            dob: format_date(artist.dob),
            gender: match artist.gender {
                Gender::Unknown => String::new(),
                gender => gender.code().to_string(),
            },
            address: artist.address.clone(),
            first_release_year: artist.first_release_year.to_string(),
            no_of_albums_released: artist.no_of_albums_released.to_string(),
        }
    }
}

impl Form for ArtistForm {
    type Output = ArtistInput;

    fn validate(&self) -> Result<ArtistInput> {
        let name = required(&self.name, "Name")?;
        let dob = required(&self.dob, "Date of birth")?;
        let gender = required(&self.gender, "Gender")?;
        let address = required(&self.address, "Address")?;
        let year = required(&self.first_release_year, "First release year")?;
        let albums = required(&self.no_of_albums_released, "Number of albums")?;

        Ok(ArtistInput {
            name: name.to_string(),
            dob: parse_date(dob)
                .ok_or_else(|| AmsError::validation(format!("Invalid date of birth: {dob}")))?,
            gender: Gender::parse(gender)
                .ok_or_else(|| AmsError::validation(format!("Invalid gender: {gender}")))?,
            address: address.to_string(),
            first_release_year: parse_release_year(year)
                .ok_or_else(|| AmsError::validation(format!("Invalid release year: {year}")))?,
            no_of_albums_released: albums
                .parse()
                .map_err(|_| AmsError::validation(format!("Invalid number of albums: {albums}")))?,
        })
    }
}

/// An artist the song form can be attached to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistChoice {
    pub id: ArtistId,
    pub name: String,
}

impl From<&Artist> for ArtistChoice {
    fn from(artist: &Artist) -> Self {
        Self {
            id: artist.id,
            name: artist.name.clone(),
        }
    }
}

/// Song add/edit form; the artist is picked by name from `artists`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SongForm {
    pub title: String,
    pub artist_name: String,
    pub album_name: String,
    pub genre: String,
    pub artists: Vec<ArtistChoice>,
}

impl SongForm {
    /// Working copy for editing `song`, with the artist picker filled in.
    pub fn edit(song: &Song, artists: &[Artist]) -> Self {
        let mut form = Self {
            title: song.title.clone(),
            album_name: song.album_name.clone(),
            genre: song.genre.code().to_string(),
            ..Self::default()
        };
        form.set_artists(artists);
        form.artist_name = artists
            .iter()
            .find(|a| a.id == song.artist_id)
            .map(|a| a.name.clone())
            .unwrap_or_default();
        form
    }

    pub fn set_artists(&mut self, artists: &[Artist]) {
        self.artists = artists.iter().map(ArtistChoice::from).collect();
    }

    fn artist_id(&self, name: &str) -> Option<ArtistId> {
        self.artists.iter().find(|a| a.name == name).map(|a| a.id)
    }
}

impl Form for SongForm {
    type Output = SongInput;

    fn validate(&self) -> Result<SongInput> {
        let title = required(&self.title, "Title")?;
        let artist = required(&self.artist_name, "Artist")?;
        let album = required(&self.album_name, "Album name")?;
        let genre = required(&self.genre, "Genre")?;

        Ok(SongInput {
            artist_id: self
                .artist_id(artist)
                .ok_or_else(|| AmsError::validation(format!("Unknown artist: {artist}")))?,
            title: title.to_string(),
            album_name: album.to_string(),
            genre: Genre::parse(genre)
                .ok_or_else(|| AmsError::validation(format!("Invalid genre: {genre}")))?,
        })
    }
}
