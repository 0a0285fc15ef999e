//! Login and signup forms.
//!
//! Unlike the entity dialogs these surface their failures to the user through
//! `error`, and report where the user should be sent next.

use crate::dialog::{required, required_raw};
use ams_core::{
    AmsError, Credentials, Gateway, Gender, Result, Role, SessionStore, SessionTokens,
    SignupRequest,
};
use tracing::{error, info, warn};

pub const INVALID_CREDENTIALS: &str = "Invalid email or password. Please try again.";
pub const INVALID_RESPONSE: &str = "Invalid response from server";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match!";
pub const REGISTRATION_FAILED: &str = "Registration failed. Please try again.";

/// Where the user goes after a successful form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Dashboard => "/dashboard",
        }
    }
}

/// Email/password login form.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    error: Option<String>,
    submitting: bool,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Authenticate and, on success, store the session.
    ///
    /// Returns the route to navigate to, or `None` with `error()` set.
    pub async fn submit(&mut self, gateway: &dyn Gateway, session: &SessionStore) -> Option<Route> {
        self.error = None;

        let credentials = match self.credentials() {
            Ok(credentials) => credentials,
            Err(e) => {
                self.error = Some(validation_message(&e));
                return None;
            }
        };

        self.submitting = true;
        let result = gateway.login(&credentials).await;
        self.submitting = false;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!(error = %e, email = %credentials.email, "Login failed");
                self.error = Some(INVALID_CREDENTIALS.to_string());
                return None;
            }
        };

        let Some(access_token) = response.access_token.filter(|t| !t.is_empty()) else {
            error!(email = %credentials.email, "Login response carried no access token");
            self.error = Some(INVALID_RESPONSE.to_string());
            return None;
        };

        let tokens = SessionTokens::new(access_token, response.refresh_token);
        if let Err(e) = session.set_session(tokens, response.user.as_ref()) {
            error!(error = %e, "Failed to store session");
            self.error = Some(e.to_string());
            return None;
        }

        info!(email = %credentials.email, role = %session.role(), "Logged in");
        self.password.clear();
        Some(Route::Dashboard)
    }

    fn credentials(&self) -> Result<Credentials> {
        Ok(Credentials {
            email: required(&self.email, "Email")?.to_string(),
            password: required_raw(&self.password, "Password")?.to_string(),
        })
    }
}

/// Typed text of the registration form.
#[derive(Debug, Clone, Default)]
pub struct SignupFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub dob: String,
    /// `m`, `f` or `o`
    pub gender: String,
    pub address: String,
    /// `super_admin`, `artist_manager` or `artist`
    pub role: String,
}

/// Account registration form.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub fields: SignupFields,
    error: Option<String>,
    submitting: bool,
}

impl SignupForm {
    pub fn new(fields: SignupFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Register the account.
    ///
    /// The password confirmation is compared before anything is sent; a
    /// mismatch never reaches the server.
    pub async fn submit(&mut self, gateway: &dyn Gateway) -> Option<Route> {
        self.error = None;

        let request = match self.request() {
            Ok(request) => request,
            Err(e) => {
                self.error = Some(validation_message(&e));
                return None;
            }
        };

        self.submitting = true;
        let result = gateway.sign_up(&request).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                info!(email = %request.email, role = %request.role, "Account registered");
                Some(Route::Login)
            }
            Err(e) => {
                error!(error = %e, email = %request.email, "Registration failed");
                self.error = Some(registration_message(&e));
                None
            }
        }
    }

    fn request(&self) -> Result<SignupRequest> {
        let f = &self.fields;
        let first_name = required(&f.first_name, "First name")?;
        let last_name = required(&f.last_name, "Last name")?;
        let email = required(&f.email, "Email")?;
        let password = required_raw(&f.password, "Password")?;
        let confirm = required_raw(&f.confirm_password, "Confirm password")?;
        let phone = required(&f.phone, "Phone")?;
        let dob = required(&f.dob, "Date of birth")?;
        let gender = required(&f.gender, "Gender")?;
        let address = required(&f.address, "Address")?;
        let role = required(&f.role, "Role")?;

        if password != confirm {
            return Err(AmsError::validation(PASSWORD_MISMATCH));
        }

        Ok(SignupRequest {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            phone: phone.to_string(),
            dob: dob.to_string(),
            gender: Gender::parse(gender)
                .ok_or_else(|| AmsError::validation(format!("Invalid gender: {gender}")))?,
            address: address.to_string(),
            role: Role::parse_assignable(role)
                .ok_or_else(|| AmsError::validation(format!("Invalid role: {role}")))?,
        })
    }
}

fn validation_message(e: &AmsError) -> String {
    match e {
        AmsError::Validation(msg) => msg.clone(),
        other => other.to_string(),
    }
}

/// Structured server errors are shown verbatim as JSON; anything else gets
/// the generic message.
fn registration_message(e: &AmsError) -> String {
    match e.api_body() {
        Some(body @ (serde_json::Value::Object(_) | serde_json::Value::Array(_))) => {
            body.to_string()
        }
        _ => REGISTRATION_FAILED.to_string(),
    }
}
