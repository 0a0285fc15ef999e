//! Artist Management System Gateway Client
//!
//! HTTP client library for the Artist Management System REST API.
//!
//! # Features
//!
//! - **Authentication**: Sign up, login with email/password
//! - **Artists**: List, get, create, update, delete
//! - **Songs**: List, get, create, update, delete
//!
//! Every call is a single attempt. Failures are normalized: a structured
//! error body from the server is surfaced as-is, anything else becomes a
//! transport message.
//!
//! # Example
//!
//! ```ignore
//! use ams_client::{AmsClient, ClientConfig};
//! use ams_core::{Gateway, SessionStore};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let session = Arc::new(SessionStore::in_memory());
//!     let client = AmsClient::new(ClientConfig::default(), session)?;
//!
//!     let artists = client.list_artists().await?;
//!     println!("Found {} artists", artists.len());
//!
//!     Ok(())
//! }
//! ```

mod artists;
mod auth;
mod client;
mod error;
mod gateway;
mod response;
mod songs;
mod types;

// Re-export main types
pub use client::{AmsClient, RequestHandle};
pub use error::{ClientError, Result};
pub use types::{ArtistListResponse, ClientConfig, SongListResponse, DEFAULT_BASE_URL};

// Re-export sub-clients for direct use if needed
pub use artists::ArtistClient;
pub use auth::AuthClient;
pub use songs::SongClient;
