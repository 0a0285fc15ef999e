//! Authentication endpoints.

use crate::error::Result;
use crate::response::{endpoint, parse, parse_value, send};
use ams_core::{Credentials, LoginResponse, SignupRequest};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

/// Authentication client for the users endpoints.
pub struct AuthClient<'a> {
    http: &'a Client,
    base_url: &'a Url,
}

impl<'a> AuthClient<'a> {
    pub(crate) fn new(http: &'a Client, base_url: &'a Url) -> Self {
        Self { http, base_url }
    }

    /// Register a new account.
    pub async fn sign_up(&self, request: &SignupRequest) -> Result<serde_json::Value> {
        let url = endpoint(self.base_url, "users/signup/")?;
        debug!(url = %url, email = %request.email, role = %request.role, "Attempting signup");

        let response = send(self.http.post(url).json(request)).await?;
        let body = parse_value(response, "signup response").await?;

        info!(email = %request.email, "Signup successful");
        Ok(body)
    }

    /// Login with email and password.
    ///
    /// The response is returned as-is; deciding whether it carries usable
    /// tokens is up to the caller.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let url = endpoint(self.base_url, "users/login/")?;
        debug!(url = %url, email = %credentials.email, "Attempting login");

        let response = send(self.http.post(url).json(credentials)).await?;
        let login: LoginResponse = parse(response, "login response").await?;

        info!(
            email = %credentials.email,
            has_token = login.access_token.is_some(),
            "Login request completed"
        );

        Ok(login)
    }
}
