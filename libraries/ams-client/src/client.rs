//! Main Artist Management System API client.

use crate::artists::ArtistClient;
use crate::auth::AuthClient;
use crate::error::{ClientError, Result};
use crate::songs::SongClient;
use crate::types::ClientConfig;
use ams_core::SessionStore;
use reqwest::Client;
use std::sync::Arc;
use tracing::debug;
use url::Url;

/// Main client for the Artist Management System API.
///
/// The client reads the access token from the shared [`SessionStore`] at the
/// start of every call, so a login or logout elsewhere takes effect on the
/// next request without notifying the client.
///
/// # Example
///
/// ```ignore
/// use ams_client::{AmsClient, ClientConfig};
/// use ams_core::SessionStore;
/// use std::sync::Arc;
///
/// let session = Arc::new(SessionStore::in_memory());
/// let client = AmsClient::new(ClientConfig::new("http://localhost:8000/api"), session)?;
///
/// let handle = client.handle();
/// let artists = handle.artists().list().await?;
/// println!("Found {} artists", artists.len());
/// ```
pub struct AmsClient {
    http: Client,
    base_url: Url,
    session: Arc<SessionStore>,
}

impl AmsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig, session: Arc<SessionStore>) -> Result<Self> {
        let base_url = normalize_base_url(&config.base_url)?;

        // No timeout and no retry: one attempt per call
        let http = Client::builder()
            .user_agent(format!("ams-console/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        debug!(base_url = %base_url, "Created API client");

        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    /// Get the normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Session the client reads its token from.
    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    /// Authentication endpoints (no token attached).
    pub fn auth(&self) -> AuthClient<'_> {
        AuthClient::new(&self.http, &self.base_url)
    }

    /// Capture the current token for a batch of resource calls.
    pub fn handle(&self) -> RequestHandle {
        RequestHandle {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            access_token: self.session.access_token(),
        }
    }
}

/// Resource endpoints bound to the token that was current when the handle
/// was taken.
pub struct RequestHandle {
    http: Client,
    base_url: Url,
    access_token: Option<String>,
}

impl RequestHandle {
    pub fn artists(&self) -> ArtistClient<'_> {
        ArtistClient::new(&self.http, &self.base_url, self.access_token.as_deref())
    }

    pub fn songs(&self) -> SongClient<'_> {
        SongClient::new(&self.http, &self.base_url, self.access_token.as_deref())
    }

    pub fn is_authorized(&self) -> bool {
        self.access_token.is_some()
    }
}

fn normalize_base_url(raw: &str) -> Result<Url> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
    }
    if !raw.starts_with("http://") && !raw.starts_with("https://") {
        return Err(ClientError::InvalidUrl(
            "URL must start with http:// or https://".into(),
        ));
    }

    // Resource paths are relative, so the base must end with exactly one '/'
    let with_slash = format!("{}/", raw.trim_end_matches('/'));
    Url::parse(&with_slash).map_err(|e| ClientError::InvalidUrl(e.to_string()))
}
