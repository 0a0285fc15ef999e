//! Authentication request/response types

use super::{Gender, Role, UserProfile};
use serde::{Deserialize, Serialize};

/// Request body for the login endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Response from the login endpoint.
///
/// Every field is optional on the wire; a response without an access token is
/// rejected by the login form rather than by deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub refresh_token: Option<String>,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

/// Request body for the signup endpoint.
///
/// The password confirmation is checked client-side and never sent.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    pub dob: String,
    pub gender: Gender,
    pub address: String,
    pub role: Role,
}
