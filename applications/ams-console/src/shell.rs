//! Interactive shell.
//!
//! Each input line is parsed as a command (`artists list`, `login ...`) and
//! dispatched to the views; output is returned as text so the loop and the
//! tests share one path.

use crate::error::Result;
use crate::render;
use ams_core::{ArtistId, ArtistPatch, Gateway, SessionStore, SongId, SongPatch};
use ams_views::{
    ArtistForm, ArtistTable, FormDialog, LoginForm, Phase, Route, SignupFields, SignupForm,
    SongForm, SongTable,
};
use clap::{Args, Parser, Subcommand};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info};

#[derive(Parser, Debug)]
#[command(multicall = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in with email and password
    Login { email: String, password: String },
    /// Register a new account
    Signup(SignupArgs),
    /// Clear the session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Show the navigation for the current role
    Nav,
    /// Show the dashboard for the current role
    Dashboard,
    /// Show the breadcrumb trail for a path
    Breadcrumb { path: String },
    /// Manage artists
    #[command(subcommand)]
    Artists(ArtistCommand),
    /// Manage songs
    #[command(subcommand)]
    Songs(SongCommand),
    /// Leave the shell
    #[command(alias = "quit")]
    Exit,
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    confirm_password: String,
    #[arg(long)]
    phone: String,
    /// YYYY-MM-DD
    #[arg(long)]
    dob: String,
    /// m, f or o
    #[arg(long)]
    gender: String,
    #[arg(long)]
    address: String,
    /// super_admin, artist_manager or artist
    #[arg(long)]
    role: String,
}

#[derive(Subcommand, Debug)]
enum ArtistCommand {
    /// List artists
    List,
    /// Show one artist
    Show { id: ArtistId },
    /// Add an artist
    Add(ArtistFields),
    /// Edit an artist; only the given fields change
    Edit {
        id: ArtistId,
        #[command(flatten)]
        fields: ArtistFields,
    },
    /// Ask to delete an artist
    Delete { id: ArtistId },
    /// Delete the artist awaiting confirmation
    Confirm,
    /// Keep the artist awaiting confirmation
    Cancel,
    /// Fetch the list again
    Reload,
}

#[derive(Args, Debug)]
struct ArtistFields {
    #[arg(long)]
    name: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    dob: Option<String>,
    /// m, f or o
    #[arg(long)]
    gender: Option<String>,
    #[arg(long)]
    address: Option<String>,
    /// Year, or a date whose year is used
    #[arg(long)]
    first_release_year: Option<String>,
    #[arg(long)]
    albums: Option<String>,
}

impl ArtistFields {
    fn apply(self, form: &mut ArtistForm) {
        set(&mut form.name, self.name);
        set(&mut form.dob, self.dob);
        set(&mut form.gender, self.gender);
        set(&mut form.address, self.address);
        set(&mut form.first_release_year, self.first_release_year);
        set(&mut form.no_of_albums_released, self.albums);
    }
}

#[derive(Subcommand, Debug)]
enum SongCommand {
    /// List songs
    List,
    /// Show one song
    Show { id: SongId },
    /// Add a song
    Add(SongFields),
    /// Edit a song; only the given fields change
    Edit {
        id: SongId,
        #[command(flatten)]
        fields: SongFields,
    },
    /// Ask to delete a song
    Delete { id: SongId },
    /// Delete the song awaiting confirmation
    Confirm,
    /// Keep the song awaiting confirmation
    Cancel,
    /// Fetch the list again
    Reload,
}

#[derive(Args, Debug)]
struct SongFields {
    #[arg(long)]
    title: Option<String>,
    /// Artist name, as listed by `artists list`
    #[arg(long)]
    artist: Option<String>,
    #[arg(long)]
    album: Option<String>,
    /// rnb, country, classic, rock or jazz
    #[arg(long)]
    genre: Option<String>,
}

impl SongFields {
    fn apply(self, form: &mut SongForm) {
        set(&mut form.title, self.title);
        set(&mut form.artist_name, self.artist);
        set(&mut form.album_name, self.album);
        set(&mut form.genre, self.genre);
    }
}

fn set(field: &mut String, value: Option<String>) {
    if let Some(value) = value {
        *field = value;
    }
}

/// Result of one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Exit,
}

pub struct Shell {
    gateway: Arc<dyn Gateway>,
    session: Arc<SessionStore>,
    artists: ArtistTable,
    songs: SongTable,
    artist_dialog: FormDialog<ArtistForm>,
    song_dialog: FormDialog<SongForm>,
    artists_mounted: bool,
    songs_mounted: bool,
}

impl Shell {
    pub fn new(gateway: Arc<dyn Gateway>, session: Arc<SessionStore>) -> Self {
        Self {
            artists: ArtistTable::new(gateway.clone()),
            songs: SongTable::new(gateway.clone()),
            gateway,
            session,
            artist_dialog: FormDialog::new(),
            song_dialog: FormDialog::new(),
            artists_mounted: false,
            songs_mounted: false,
        }
    }

    pub fn prompt(&self) -> String {
        format!("ams ({})> ", self.session.role())
    }

    /// Read commands from stdin until `exit` or end of input.
    pub async fn run(mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        loop {
            stdout.write_all(self.prompt().as_bytes()).await?;
            stdout.flush().await?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            match self.execute(&line).await {
                Outcome::Continue(text) if text.is_empty() => {}
                Outcome::Continue(text) => {
                    stdout.write_all(text.as_bytes()).await?;
                    stdout.write_all(b"\n").await?;
                }
                Outcome::Exit => break,
            }
        }

        info!("Shell closed");
        Ok(())
    }

    /// Run one line of input.
    pub async fn execute(&mut self, input: &str) -> Outcome {
        let tokens = match tokenize(input) {
            Ok(tokens) if tokens.is_empty() => return Outcome::Continue(String::new()),
            Ok(tokens) => tokens,
            Err(msg) => return Outcome::Continue(msg),
        };

        // Arguments may carry passwords, so only the command word is logged
        debug!(command = %tokens[0], "Executing command");
        let command = match Line::try_parse_from(tokens) {
            Ok(line) => line.command,
            Err(e) => return Outcome::Continue(e.render().to_string().trim_end().to_string()),
        };

        let text = match command {
            Command::Login { email, password } => self.login(email, password).await,
            Command::Signup(args) => self.signup(args).await,
            Command::Logout => self.logout(),
            Command::Whoami => render::whoami(&self.session.snapshot()),
            Command::Nav => render::nav(self.session.role()),
            Command::Dashboard => render::dashboard(self.session.role()),
            Command::Breadcrumb { path } => render::breadcrumb(self.session.role(), &path),
            Command::Artists(action) => self.artists(action).await,
            Command::Songs(action) => self.songs(action).await,
            Command::Exit => return Outcome::Exit,
        };
        Outcome::Continue(text)
    }

    // ========================================================================
    // Session
    // ========================================================================

    async fn login(&mut self, email: String, password: String) -> String {
        let mut form = LoginForm::new(email, password);
        match form.submit(self.gateway.as_ref(), &self.session).await {
            Some(route) => {
                self.unmount();
                let name = self
                    .session
                    .user()
                    .map_or_else(|| form.email.clone(), |u| u.display_name());
                format!(
                    "Welcome, {name}\n{}\n\n{}",
                    route.path(),
                    render::dashboard(self.session.role())
                )
            }
            None => form.error().unwrap_or("Login failed").to_string(),
        }
    }

    async fn signup(&mut self, args: SignupArgs) -> String {
        let mut form = SignupForm::new(SignupFields {
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            password: args.password,
            confirm_password: args.confirm_password,
            phone: args.phone,
            dob: args.dob,
            gender: args.gender,
            address: args.address,
            role: args.role,
        });

        match form.submit(self.gateway.as_ref()).await {
            Some(Route::Login) => "Account created. Log in with `login EMAIL PASSWORD`.".to_string(),
            Some(route) => route.path().to_string(),
            None => form.error().unwrap_or("Registration failed").to_string(),
        }
    }

    fn logout(&mut self) -> String {
        self.session.clear();
        self.unmount();
        format!("Logged out\n{}", Route::Login.path())
    }

    /// Drop the views so the next command mounts fresh ones with the new
    /// token. Pending deletes and open dialogs go with them.
    fn unmount(&mut self) {
        self.artists = ArtistTable::new(self.gateway.clone());
        self.songs = SongTable::new(self.gateway.clone());
        self.artist_dialog = FormDialog::new();
        self.song_dialog = FormDialog::new();
        self.artists_mounted = false;
        self.songs_mounted = false;
    }

    // ========================================================================
    // Artists
    // ========================================================================

    async fn mount_artists(&mut self) {
        if !self.artists_mounted {
            // Failures land in the table's error phase
            let _ = self.artists.load().await;
            self.artists_mounted = true;
        }
    }

    async fn artists(&mut self, action: ArtistCommand) -> String {
        self.mount_artists().await;

        match action {
            ArtistCommand::List => render::artist_table(&self.artists.snapshot().await),
            ArtistCommand::Reload => {
                let _ = self.artists.reload().await;
                render::artist_table(&self.artists.snapshot().await)
            }
            ArtistCommand::Show { id } => match self.artists.find(id).await {
                Some(artist) => render::artist_detail(&artist),
                None => format!("Artist {id} not found"),
            },
            ArtistCommand::Add(fields) => {
                self.artist_dialog.open_add();
                fields.apply(self.artist_dialog.form_mut());

                let table = &self.artists;
                let result = self
                    .artist_dialog
                    .submit(|input| async move { table.create(&input).await })
                    .await;

                match result {
                    Ok(artist) => format!("Added artist {} ({})", artist.name, artist.id),
                    Err(e) => self.artist_failure(&e).await,
                }
            }
            ArtistCommand::Edit { id, fields } => {
                let Some(artist) = self.artists.find(id).await else {
                    return format!("Artist {id} not found");
                };
                self.artist_dialog.open_edit(ArtistForm::from(&artist));
                fields.apply(self.artist_dialog.form_mut());

                let table = &self.artists;
                let result = self
                    .artist_dialog
                    .submit(|input| async move {
                        table.update(id, &ArtistPatch::from(input)).await
                    })
                    .await;

                match result {
                    Ok(artist) => render::artist_detail(&artist),
                    Err(e) => self.artist_failure(&e).await,
                }
            }
            ArtistCommand::Delete { id } => {
                if self.artists.find(id).await.is_none() {
                    return format!("Artist {id} not found");
                }
                self.artists.request_delete(id).await;
                render::delete_prompt("artist")
            }
            ArtistCommand::Confirm => match self.artists.confirm_delete().await {
                Ok(Some(id)) => format!(
                    "Deleted artist {id}\n{}",
                    render::artist_table(&self.artists.snapshot().await)
                ),
                Ok(None) => "No artist is awaiting deletion".to_string(),
                Err(_) => phase_message(self.artists.phase().await),
            },
            ArtistCommand::Cancel => {
                self.artists.cancel_delete().await;
                "Deletion cancelled".to_string()
            }
        }
    }

    async fn artist_failure(&self, e: &ams_core::AmsError) -> String {
        match e {
            ams_core::AmsError::Validation(msg) => msg.clone(),
            _ => phase_message(self.artists.phase().await),
        }
    }

    // ========================================================================
    // Songs
    // ========================================================================

    async fn mount_songs(&mut self) {
        if !self.songs_mounted {
            let _ = self.songs.load().await;
            self.songs_mounted = true;
        }
    }

    async fn songs(&mut self, action: SongCommand) -> String {
        self.mount_songs().await;

        match action {
            SongCommand::List => self.render_songs().await,
            SongCommand::Reload => {
                let _ = self.songs.reload().await;
                self.render_songs().await
            }
            SongCommand::Show { id } => {
                let rows = self.songs.rows().await;
                match rows.iter().find(|row| row.song.id == id) {
                    Some(row) => render::song_detail(row),
                    None => format!("Song {id} not found"),
                }
            }
            SongCommand::Add(fields) => {
                let artists = self.songs.artists().await;
                self.song_dialog.open_add();
                self.song_dialog.form_mut().set_artists(&artists);
                fields.apply(self.song_dialog.form_mut());

                let list = self.songs.songs();
                let result = self
                    .song_dialog
                    .submit(|input| async move { list.create(&input).await })
                    .await;

                match result {
                    Ok(song) => format!(
                        "Added song {} ({}) by {}",
                        song.title,
                        song.id,
                        self.songs.artist_name(song.artist_id).await
                    ),
                    Err(e) => self.song_failure(&e).await,
                }
            }
            SongCommand::Edit { id, fields } => {
                let Some(song) = self.songs.songs().find(id).await else {
                    return format!("Song {id} not found");
                };
                let artists = self.songs.artists().await;
                self.song_dialog.open_edit(SongForm::edit(&song, &artists));
                fields.apply(self.song_dialog.form_mut());

                let list = self.songs.songs();
                let result = self
                    .song_dialog
                    .submit(|input| async move { list.update(id, &SongPatch::from(input)).await })
                    .await;

                match result {
                    Ok(song) => format!("Updated song {} ({})", song.title, song.id),
                    Err(e) => self.song_failure(&e).await,
                }
            }
            SongCommand::Delete { id } => {
                if self.songs.songs().find(id).await.is_none() {
                    return format!("Song {id} not found");
                }
                self.songs.songs().request_delete(id).await;
                render::delete_prompt("song")
            }
            SongCommand::Confirm => match self.songs.songs().confirm_delete().await {
                Ok(Some(id)) => format!("Deleted song {id}\n{}", self.render_songs().await),
                Ok(None) => "No song is awaiting deletion".to_string(),
                Err(_) => phase_message(self.songs.phase().await),
            },
            SongCommand::Cancel => {
                self.songs.songs().cancel_delete().await;
                "Deletion cancelled".to_string()
            }
        }
    }

    async fn render_songs(&self) -> String {
        render::song_table(&self.songs.snapshot().await, &self.songs.rows().await)
    }

    async fn song_failure(&self, e: &ams_core::AmsError) -> String {
        match e {
            ams_core::AmsError::Validation(msg) => msg.clone(),
            _ => phase_message(self.songs.phase().await),
        }
    }
}

fn phase_message(phase: Phase) -> String {
    match phase {
        Phase::Error(msg) => msg,
        Phase::Loading => "Loading...".to_string(),
        Phase::Ready => String::new(),
    }
}

/// Split a line into words, honouring single and double quotes.
fn tokenize(input: &str) -> std::result::Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;

    for c in input.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return Err("Unterminated quote".to_string());
    }
    if in_token {
        tokens.push(current);
    }
    Ok(tokens)
}
