//! Role-to-navigation resolver
//!
//! Table-driven: exactly one fixed sequence per role. Consumers call
//! [`resolve`] on every render with the role from the current session
//! snapshot; nothing here is cached.

use crate::types::Role;

pub const SIDEBAR_HEADER: &str = "Artist Management System";
pub const SIDEBAR_GROUP_LABEL: &str = "Navigation";

/// Icon shown next to a navigation entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    LayoutDashboard,
    Music,
    MicVocal,
    LibraryBig,
    ListMusic,
    UsersRound,
}

impl Icon {
    /// Icon identifier in the upstream icon set
    pub fn name(self) -> &'static str {
        match self {
            Icon::LayoutDashboard => "layout-dashboard",
            Icon::Music => "music",
            Icon::MicVocal => "mic-vocal",
            Icon::LibraryBig => "library-big",
            Icon::ListMusic => "list-music",
            Icon::UsersRound => "users-round",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub title: &'static str,
    pub url: &'static str,
    pub icon: Icon,
}

const fn entry(title: &'static str, url: &'static str, icon: Icon) -> NavEntry {
    NavEntry { title, url, icon }
}

const SUPER_ADMIN: [NavEntry; 6] = [
    entry("Dashboard", "/dashboard", Icon::LayoutDashboard),
    entry("Songs", "/song", Icon::Music),
    entry("Artists", "/artist", Icon::MicVocal),
    entry("Albums", "#", Icon::LibraryBig),
    entry("Genre", "#", Icon::ListMusic),
    entry("Users", "/user", Icon::UsersRound),
];

const ARTIST_MANAGER: [NavEntry; 5] = [
    entry("Dashboard", "/dashboard", Icon::LayoutDashboard),
    entry("Songs", "/songlist", Icon::Music),
    entry("Artists", "/artist", Icon::MicVocal),
    entry("Albums", "#", Icon::LibraryBig),
    entry("Genre", "#", Icon::ListMusic),
];

const ARTIST: [NavEntry; 4] = [
    entry("Dashboard", "/dashboard", Icon::LayoutDashboard),
    entry("My Songs", "../song", Icon::Music),
    entry("My Albums", "#", Icon::LibraryBig),
    entry("Genre", "#", Icon::ListMusic),
];

const GUEST: [NavEntry; 1] = [entry("Home", "/dashboard", Icon::LayoutDashboard)];

/// Navigation entries for a role; no role resolves to the guest sequence.
pub fn resolve(role: Option<Role>) -> &'static [NavEntry] {
    match role.unwrap_or(Role::Guest) {
        Role::SuperAdmin => &SUPER_ADMIN,
        Role::ArtistManager => &ARTIST_MANAGER,
        Role::Artist => &ARTIST,
        Role::Guest => &GUEST,
    }
}

/// Navigation entries for a raw wire role string.
pub fn resolve_raw(raw: Option<&str>) -> &'static [NavEntry] {
    resolve(Some(Role::from_wire(raw)))
}
