//! In-memory gateway used by the view tests.

#![allow(dead_code)]

use ams_core::{
    AmsError, Artist, ArtistId, ArtistInput, ArtistPatch, Credentials, Gateway, Gender,
    LoginResponse, Result, SignupRequest, Song, SongId, SongInput, SongPatch,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Gateway backed by vectors, with per-operation call counts, forced
/// failures and scripted delays for update calls.
pub struct FakeGateway {
    artists: Mutex<Vec<Artist>>,
    songs: Mutex<Vec<Song>>,
    calls: Mutex<HashMap<&'static str, usize>>,
    failing: Mutex<HashSet<&'static str>>,
    update_delays: Mutex<VecDeque<Duration>>,
    login_response: Mutex<LoginResponse>,
    signups: Mutex<Vec<SignupRequest>>,
    next_id: AtomicI64,
}

impl FakeGateway {
    pub fn new(artists: Vec<Artist>, songs: Vec<Song>) -> Self {
        Self {
            artists: Mutex::new(artists),
            songs: Mutex::new(songs),
            calls: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            update_delays: Mutex::new(VecDeque::new()),
            login_response: Mutex::new(LoginResponse::default()),
            signups: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(100),
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Make every later call to `op` fail with a transport error.
    pub fn fail(&self, op: &'static str) {
        self.failing.lock().unwrap().insert(op);
    }

    pub fn delay_next_update(&self, delay: Duration) {
        self.update_delays.lock().unwrap().push_back(delay);
    }

    pub fn set_login_response(&self, response: LoginResponse) {
        *self.login_response.lock().unwrap() = response;
    }

    pub fn calls(&self, op: &str) -> usize {
        self.calls.lock().unwrap().get(op).copied().unwrap_or(0)
    }

    pub fn signups(&self) -> Vec<SignupRequest> {
        self.signups.lock().unwrap().clone()
    }

    fn record(&self, op: &'static str) -> Result<()> {
        *self.calls.lock().unwrap().entry(op).or_insert(0) += 1;
        if self.failing.lock().unwrap().contains(op) {
            return Err(AmsError::transport(format!("{op} failed")));
        }
        Ok(())
    }

    fn next_id(&self) -> i64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    async fn update_delay(&self) {
        let delay = self.update_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
    }

    fn not_found(id: i64) -> AmsError {
        AmsError::Api {
            status: 404,
            body: serde_json::json!({"detail": format!("{id} not found")}),
        }
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn sign_up(&self, request: &SignupRequest) -> Result<serde_json::Value> {
        self.record("sign_up")?;
        self.signups.lock().unwrap().push(request.clone());
        Ok(serde_json::json!({"email": request.email}))
    }

    async fn login(&self, _credentials: &Credentials) -> Result<LoginResponse> {
        self.record("login")?;
        Ok(self.login_response.lock().unwrap().clone())
    }

    async fn list_artists(&self) -> Result<Vec<Artist>> {
        self.record("list_artists")?;
        Ok(self.artists.lock().unwrap().clone())
    }

    async fn get_artist(&self, id: ArtistId) -> Result<Artist> {
        self.record("get_artist")?;
        self.artists
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create_artist(&self, artist: &ArtistInput) -> Result<Artist> {
        self.record("create_artist")?;
        let created = Artist::from_input(self.next_id(), artist.clone());
        self.artists.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_artist(&self, id: ArtistId, patch: &ArtistPatch) -> Result<Artist> {
        self.record("update_artist")?;
        self.update_delay().await;
        let mut artists = self.artists.lock().unwrap();
        let artist = artists
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        artist.apply(patch);
        Ok(artist.clone())
    }

    async fn delete_artist(&self, id: ArtistId) -> Result<serde_json::Value> {
        self.record("delete_artist")?;
        self.artists.lock().unwrap().retain(|a| a.id != id);
        Ok(serde_json::Value::Null)
    }

    async fn list_songs(&self) -> Result<Vec<Song>> {
        self.record("list_songs")?;
        Ok(self.songs.lock().unwrap().clone())
    }

    async fn get_song(&self, id: SongId) -> Result<Song> {
        self.record("get_song")?;
        self.songs
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| Self::not_found(id))
    }

    async fn create_song(&self, song: &SongInput) -> Result<Song> {
        self.record("create_song")?;
        let created = Song::from_input(self.next_id(), song.clone());
        self.songs.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn update_song(&self, id: SongId, patch: &SongPatch) -> Result<Song> {
        self.record("update_song")?;
        self.update_delay().await;
        // Each save answers with the stored row plus its own patch, the way a
        // server echoes the fields it just wrote.
        let mut songs = self.songs.lock().unwrap();
        let song = songs
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| Self::not_found(id))?;
        song.apply(patch);
        Ok(song.clone())
    }

    async fn delete_song(&self, id: SongId) -> Result<serde_json::Value> {
        self.record("delete_song")?;
        self.songs.lock().unwrap().retain(|s| s.id != id);
        Ok(serde_json::Value::Null)
    }
}

pub fn artist(id: ArtistId, name: &str) -> Artist {
    Artist {
        id,
        name: name.to_string(),
        dob: NaiveDate::from_ymd_opt(1990, 4, 12).unwrap(),
        gender: Gender::Female,
        address: "Kathmandu".to_string(),
        first_release_year: 2012,
        no_of_albums_released: 3,
    }
}

pub fn song(id: SongId, artist_id: ArtistId, title: &str) -> Song {
    Song {
        id,
        artist_id,
        title: title.to_string(),
        album_name: "Album".to_string(),
        genre: ams_core::Genre::Rock,
    }
}
