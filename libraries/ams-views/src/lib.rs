//! Artist Management System Views
//!
//! Presentation state for the admin console, independent of how it is drawn:
//!
//! - **List views**: artist and song tables with `Loading/Ready/Error` phases,
//!   in-place reconciliation after mutations and two-step delete
//! - **Form dialogs**: add/edit working copies with validation and
//!   close-on-success submission
//! - **Auth forms**: login (stores the session) and signup
//!
//! Every view talks to the backend through an injected
//! [`ams_core::Gateway`], so tests can substitute an in-memory fake.

pub mod auth;
pub mod dialog;
pub mod forms;
pub mod list_view;
pub mod tables;

pub use auth::{LoginForm, Route, SignupFields, SignupForm};
pub use dialog::{Form, FormDialog};
pub use forms::{ArtistChoice, ArtistForm, SongForm};
pub use list_view::{ListState, ListView, Phase, Resource};
pub use tables::{ArtistTable, SongRow, SongTable, UNKNOWN_ARTIST};
