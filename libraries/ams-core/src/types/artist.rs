//! Artist types

use super::dates;
use super::Gender;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub type ArtistId = i64;

/// An artist as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: ArtistId,
    pub name: String,
    #[serde(with = "dates::date")]
    pub dob: NaiveDate,
    pub gender: Gender,
    pub address: String,
    #[serde(with = "dates::release_year")]
    pub first_release_year: i32,
    #[serde(with = "dates::count")]
    pub no_of_albums_released: u32,
}

/// Data for creating a new artist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistInput {
    pub name: String,
    #[serde(with = "dates::date")]
    pub dob: NaiveDate,
    pub gender: Gender,
    pub address: String,
    pub first_release_year: i32,
    pub no_of_albums_released: u32,
}

/// Partial update; absent fields are left untouched server-side
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ArtistPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_release_year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_of_albums_released: Option<u32>,
}

impl Artist {
    /// Attach a server-assigned id to submitted fields.
    pub fn from_input(id: ArtistId, input: ArtistInput) -> Self {
        Self {
            id,
            name: input.name,
            dob: input.dob,
            gender: input.gender,
            address: input.address,
            first_release_year: input.first_release_year,
            no_of_albums_released: input.no_of_albums_released,
        }
    }

    /// Apply a patch locally, mirroring what the server does on PUT.
    pub fn apply(&mut self, patch: &ArtistPatch) {
        if let Some(name) = &patch.name {
            self.name.clone_from(name);
        }
        if let Some(dob) = patch.dob.as_deref().and_then(dates::parse_date) {
            self.dob = dob;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(address) = &patch.address {
            self.address.clone_from(address);
        }
        if let Some(year) = patch.first_release_year {
            self.first_release_year = year;
        }
        if let Some(count) = patch.no_of_albums_released {
            self.no_of_albums_released = count;
        }
    }
}

impl From<&Artist> for ArtistInput {
    fn from(artist: &Artist) -> Self {
        Self {
            name: artist.name.clone(),
            dob: artist.dob,
            gender: artist.gender,
            address: artist.address.clone(),
            first_release_year: artist.first_release_year,
            no_of_albums_released: artist.no_of_albums_released,
        }
    }
}

impl From<ArtistInput> for ArtistPatch {
    fn from(input: ArtistInput) -> Self {
        Self {
            name: Some(input.name),
            dob: Some(dates::format_date(input.dob)),
            gender: Some(input.gender),
            address: Some(input.address),
            first_release_year: Some(input.first_release_year),
            no_of_albums_released: Some(input.no_of_albums_released),
        }
    }
}
