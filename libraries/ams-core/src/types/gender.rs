//! Gender codes used by user and artist records

use serde::{Deserialize, Serialize};

/// Single-letter gender code as the API stores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
    #[serde(rename = "o")]
    Other,
    /// Anything else the server sends
    #[serde(other, rename = "unknown")]
    Unknown,
}

impl Gender {
    /// Parse form input: accepts the wire code or the full word.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "m" | "male" => Some(Gender::Male),
            "f" | "female" => Some(Gender::Female),
            "o" | "other" | "others" => Some(Gender::Other),
            _ => None,
        }
    }

    /// Wire code
    pub fn code(self) -> &'static str {
        match self {
            Gender::Male => "m",
            Gender::Female => "f",
            Gender::Other => "o",
            Gender::Unknown => "unknown",
        }
    }

    /// Display label
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::Unknown => "Unknown",
        }
    }
}
