//! Shell views: dashboard panels and breadcrumb trail
//!
//! Both are derived from the role in the current session snapshot.

use crate::types::Role;

/// Dashboard content for a role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dashboard {
    Panels {
        heading: &'static str,
        panels: &'static [&'static str],
    },
    Unauthorized,
}

impl Dashboard {
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::SuperAdmin => Dashboard::Panels {
                heading: "Super Admin Dashboard",
                panels: &["Manage Users", "View Reports", "System Settings"],
            },
            Role::ArtistManager => Dashboard::Panels {
                heading: "Artist Manager Dashboard",
                panels: &["Manage Artists", "View Statistics", "Handle Promotions"],
            },
            Role::Artist => Dashboard::Panels {
                heading: "Artist Dashboard",
                panels: &["My Music", "My Albums"],
            },
            Role::Guest => Dashboard::Unauthorized,
        }
    }
}

/// Message shown in place of the dashboard for guests
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized Access";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crumb {
    pub label: String,
    pub href: String,
    /// Last segment; rendered as the current page rather than a link
    pub current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    /// First item: the raw role identifier
    pub role_label: &'static str,
    pub crumbs: Vec<Crumb>,
}

fn segment_label(segment: &str) -> Option<&'static str> {
    match segment {
        "dashboard" => Some("Dashboard"),
        "music" => Some("Music"),
        "artist" => Some("Artists"),
        "my-music" => Some("My Music"),
        "my-albums" => Some("My Albums"),
        "users" => Some("Users"),
        "genre" => Some("Genre"),
        "albums" => Some("Albums"),
        _ => None,
    }
}

impl Breadcrumb {
    /// Build the trail for `path`; unknown segments are shown verbatim.
    pub fn build(role: Role, path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let last = segments.len().saturating_sub(1);

        let crumbs = segments
            .iter()
            .enumerate()
            .map(|(index, segment)| Crumb {
                label: segment_label(segment).map_or_else(|| (*segment).to_string(), str::to_string),
                href: format!("/{}", segments[..=index].join("/")),
                current: index == last,
            })
            .collect();

        Self {
            role_label: role.as_str(),
            crumbs,
        }
    }
}
