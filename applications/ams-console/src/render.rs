//! Plain-text rendering of views.

use ams_core::navigation::{self, SIDEBAR_GROUP_LABEL, SIDEBAR_HEADER};
use ams_core::shell::{Breadcrumb, Dashboard, UNAUTHORIZED_MESSAGE};
use ams_core::types::dates::format_date;
use ams_core::{Artist, Role, SessionState, Song};
use ams_views::{ListState, Phase, Resource, SongRow};
use std::fmt::Write;

pub const DELETE_TITLE: &str = "Confirm Deletion";

/// Confirmation prompt shown after a delete request.
pub fn delete_prompt(noun: &str) -> String {
    format!(
        "{DELETE_TITLE}\nAre you sure you want to delete this {noun}? This action cannot be undone.\n\
         Type `{noun}s confirm` to delete or `{noun}s cancel` to keep it."
    )
}

/// Render rows as left-aligned columns sized to their widest cell.
fn table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect();
        let _ = writeln!(out, "{}", padded.join("  ").trim_end());
    };

    line(headers.to_vec());
    for row in rows {
        line(row.iter().map(String::as_str).collect());
    }
    out
}

/// Lines common to every list: phase message or empty state.
fn list_preamble<R: Resource>(state: &ListState<R>) -> Option<String> {
    match &state.phase {
        Phase::Loading => Some("Loading...".to_string()),
        Phase::Error(msg) if state.items.is_empty() => Some(msg.clone()),
        Phase::Ready if state.items.is_empty() => Some(ListState::<R>::empty_text()),
        _ => None,
    }
}

fn error_banner(phase: &Phase) -> String {
    match phase {
        Phase::Error(msg) => format!("{msg}\n"),
        _ => String::new(),
    }
}

pub fn artist_table(state: &ListState<Artist>) -> String {
    if let Some(text) = list_preamble(state) {
        return text;
    }

    let rows: Vec<Vec<String>> = state
        .items
        .iter()
        .map(|a| {
            vec![
                a.id.to_string(),
                a.name.clone(),
                format_date(a.dob),
                a.gender.label().to_string(),
                a.address.clone(),
                a.first_release_year.to_string(),
                a.no_of_albums_released.to_string(),
            ]
        })
        .collect();

    format!(
        "{}{}Total: {} artists",
        error_banner(&state.phase),
        table(
            &["ID", "Name", "DOB", "Gender", "Address", "First Release", "Albums"],
            &rows
        ),
        state.total()
    )
}

pub fn song_table(state: &ListState<Song>, rows: &[SongRow]) -> String {
    if let Some(text) = list_preamble(state) {
        return text;
    }

    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.song.id.to_string(),
                r.song.title.clone(),
                r.artist_name.clone(),
                r.song.album_name.clone(),
                r.song.genre.label().to_string(),
            ]
        })
        .collect();

    format!(
        "{}{}Total: {} songs",
        error_banner(&state.phase),
        table(&["ID", "Title", "Artist", "Album", "Genre"], &cells),
        state.total()
    )
}

pub fn artist_detail(artist: &Artist) -> String {
    format!(
        "Name: {}\nDOB: {}\nGender: {}\nAddress: {}\nFirst release year: {}\nAlbums released: {}",
        artist.name,
        format_date(artist.dob),
        artist.gender.label(),
        artist.address,
        artist.first_release_year,
        artist.no_of_albums_released
    )
}

pub fn song_detail(row: &SongRow) -> String {
    format!(
        "Title: {}\nArtist: {}\nAlbum: {}\nGenre: {}",
        row.song.title,
        row.artist_name,
        row.song.album_name,
        row.song.genre.label()
    )
}

/// Sidebar for a role.
pub fn nav(role: Role) -> String {
    let mut out = format!("{SIDEBAR_HEADER}\n{SIDEBAR_GROUP_LABEL}\n");
    let entries = navigation::resolve(Some(role));
    let width = entries.iter().map(|e| e.title.len()).max().unwrap_or(0);
    for entry in entries {
        let _ = writeln!(
            out,
            "  {:<width$}  {:<12}  [{}]",
            entry.title,
            entry.url,
            entry.icon.name()
        );
    }
    out.trim_end().to_string()
}

pub fn dashboard(role: Role) -> String {
    match Dashboard::for_role(role) {
        Dashboard::Panels { heading, panels } => {
            let mut out = format!("{heading}\n");
            for panel in panels {
                let _ = writeln!(out, "  - {panel}");
            }
            out.trim_end().to_string()
        }
        Dashboard::Unauthorized => UNAUTHORIZED_MESSAGE.to_string(),
    }
}

pub fn breadcrumb(role: Role, path: &str) -> String {
    let trail = Breadcrumb::build(role, path);
    let mut parts = vec![trail.role_label.to_string()];
    parts.extend(trail.crumbs.iter().map(|crumb| {
        if crumb.current {
            crumb.label.clone()
        } else {
            format!("{} ({})", crumb.label, crumb.href)
        }
    }));
    parts.join(" > ")
}

/// The user menu: name and email, or a hint to log in.
pub fn whoami(state: &SessionState) -> String {
    match (&state.user, state.authenticated) {
        (Some(user), _) => format!(
            "{}\n{}\nRole: {}",
            if user.first_name.is_empty() {
                user.display_name()
            } else {
                user.first_name.clone()
            },
            user.email,
            user.role.label()
        ),
        (None, true) => "Logged in (no profile cached)".to_string(),
        (None, false) => "Not logged in".to_string(),
    }
}
