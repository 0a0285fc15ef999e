mod artist;
mod auth;
pub mod dates;
mod gender;
mod role;
mod song;
mod user;

pub use artist::{Artist, ArtistId, ArtistInput, ArtistPatch};
pub use auth::{Credentials, LoginResponse, SignupRequest};
pub use gender::Gender;
pub use role::Role;
pub use song::{Genre, Song, SongId, SongInput, SongPatch};
pub use user::{UserId, UserProfile};
