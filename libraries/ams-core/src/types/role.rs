//! Role types

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Authorization tag carried on a user profile.
///
/// Closed set: any value the server sends that is not one of the three known
/// roles (or no value at all) is read as `Guest`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    ArtistManager,
    Artist,
    #[default]
    Guest,
}

impl Role {
    /// Roles a user can register with.
    pub const ASSIGNABLE: [Role; 3] = [Role::SuperAdmin, Role::ArtistManager, Role::Artist];

    /// Map a wire value to a role, falling back to `Guest`.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("super_admin") => Role::SuperAdmin,
            Some("artist_manager") => Role::ArtistManager,
            Some("artist") => Role::Artist,
            _ => Role::Guest,
        }
    }

    /// Parse a role for signup; unlike `from_wire` this rejects unknown input.
    pub fn parse_assignable(raw: &str) -> Option<Self> {
        match Self::from_wire(Some(raw)) {
            Role::Guest => None,
            role => Some(role),
        }
    }

    /// Wire identifier
    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::ArtistManager => "artist_manager",
            Role::Artist => "artist",
            Role::Guest => "guest",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super Admin",
            Role::ArtistManager => "Artist Manager",
            Role::Artist => "Artist",
            Role::Guest => "Guest",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(Role::from_wire(raw.as_deref()))
    }
}
