/// User profile as cached in the session
use super::{Gender, Role};
use serde::{Deserialize, Serialize};

pub type UserId = i64;

/// Profile returned by the login endpoint.
///
/// Every field except the role is informational. The role is stored under
/// `role_type`; `role` is read only when `role_type` is absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "WireProfile")]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<UserId>,

    #[serde(default)]
    pub first_name: String,

    #[serde(default)]
    pub last_name: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub phone: String,

    #[serde(default)]
    pub dob: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    #[serde(default)]
    pub address: String,

    #[serde(rename = "role_type")]
    pub role: Role,
}

/// Inbound shape: both role keys may be present.
#[derive(Deserialize)]
struct WireProfile {
    #[serde(default)]
    id: Option<UserId>,
    #[serde(default)]
    first_name: String,
    #[serde(default)]
    last_name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    dob: String,
    #[serde(default)]
    gender: Option<Gender>,
    #[serde(default)]
    address: String,
    #[serde(default)]
    role_type: Option<Role>,
    #[serde(default)]
    role: Option<Role>,
}

impl From<WireProfile> for UserProfile {
    fn from(wire: WireProfile) -> Self {
        Self {
            id: wire.id,
            first_name: wire.first_name,
            last_name: wire.last_name,
            email: wire.email,
            phone: wire.phone,
            dob: wire.dob,
            gender: wire.gender,
            address: wire.address,
            role: wire.role_type.or(wire.role).unwrap_or_default(),
        }
    }
}

impl UserProfile {
    /// Minimal profile, mostly useful in tests and fixtures.
    pub fn with_role(email: impl Into<String>, role: Role) -> Self {
        Self {
            email: email.into(),
            role,
            ..Default::default()
        }
    }

    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }
}
