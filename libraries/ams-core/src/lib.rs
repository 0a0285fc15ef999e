//! Artist Management System Core
//!
//! Platform-agnostic types, session state and role handling shared by the
//! gateway client, the view-state library and the console.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Artist`, `Song`, `UserProfile`, `Role`, etc.
//! - **Gateway Trait**: the async boundary every remote operation goes through
//! - **Session Store**: tokens and the cached user profile, with change notification
//! - **Navigation / Shell**: role-driven sidebar, dashboard and breadcrumb data
//! - **Error Handling**: Unified `AmsError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use ams_core::navigation;
//! use ams_core::session::{SessionStore, SessionTokens};
//! use ams_core::types::{Role, UserProfile};
//!
//! let session = SessionStore::in_memory();
//! assert_eq!(navigation::resolve(Some(session.role())).len(), 1);
//!
//! let user = UserProfile::with_role("ada@example.com", Role::ArtistManager);
//! session
//!     .set_session(SessionTokens::new("access", None), Some(&user))
//!     .unwrap();
//! assert_eq!(session.role(), Role::ArtistManager);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod gateway;
pub mod navigation;
pub mod session;
pub mod shell;
pub mod types;

// Re-export commonly used types
pub use error::{AmsError, Result};
pub use gateway::Gateway;
pub use navigation::{Icon, NavEntry};
pub use session::{MemoryStorage, SessionState, SessionStorage, SessionStore, SessionTokens};

pub use types::{
    Artist, ArtistId, ArtistInput, ArtistPatch, Credentials, Gender, Genre, LoginResponse, Role,
    SignupRequest, Song, SongId, SongInput, SongPatch, UserProfile,
};
