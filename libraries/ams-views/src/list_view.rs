//! Generic entity list view.
//!
//! A list view moves through `Loading -> {Ready, Error}` on mount and patches
//! its rows in place after each mutation instead of re-fetching. State sits
//! behind an async `RwLock` that is never held across a gateway call, so
//! concurrent actions interleave and reconcile in completion order.

use ams_core::{
    Artist, ArtistId, ArtistInput, ArtistPatch, Gateway, Result, Song, SongId, SongInput,
    SongPatch,
};
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// An entity collection the views know how to fetch and mutate.
#[async_trait]
pub trait Resource: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + fmt::Display + fmt::Debug + Send + Sync;
    type Input: Send + Sync;
    type Patch: Send + Sync;

    /// Lowercase singular noun used in user-facing messages
    const SINGULAR: &'static str;
    /// Lowercase plural noun used in user-facing messages
    const PLURAL: &'static str;

    fn id(&self) -> Self::Id;

    async fn fetch_all(gateway: &dyn Gateway) -> Result<Vec<Self>>;
    async fn create(gateway: &dyn Gateway, input: &Self::Input) -> Result<Self>;
    async fn update(gateway: &dyn Gateway, id: Self::Id, patch: &Self::Patch) -> Result<Self>;
    async fn delete(gateway: &dyn Gateway, id: Self::Id) -> Result<()>;
}

#[async_trait]
impl Resource for Artist {
    type Id = ArtistId;
    type Input = ArtistInput;
    type Patch = ArtistPatch;

    const SINGULAR: &'static str = "artist";
    const PLURAL: &'static str = "artists";

    fn id(&self) -> ArtistId {
        self.id
    }

    async fn fetch_all(gateway: &dyn Gateway) -> Result<Vec<Self>> {
        gateway.list_artists().await
    }

    async fn create(gateway: &dyn Gateway, input: &ArtistInput) -> Result<Self> {
        gateway.create_artist(input).await
    }

    async fn update(gateway: &dyn Gateway, id: ArtistId, patch: &ArtistPatch) -> Result<Self> {
        gateway.update_artist(id, patch).await
    }

    async fn delete(gateway: &dyn Gateway, id: ArtistId) -> Result<()> {
        gateway.delete_artist(id).await.map(|_| ())
    }
}

#[async_trait]
impl Resource for Song {
    type Id = SongId;
    type Input = SongInput;
    type Patch = SongPatch;

    const SINGULAR: &'static str = "song";
    const PLURAL: &'static str = "songs";

    fn id(&self) -> SongId {
        self.id
    }

    async fn fetch_all(gateway: &dyn Gateway) -> Result<Vec<Self>> {
        gateway.list_songs().await
    }

    async fn create(gateway: &dyn Gateway, input: &SongInput) -> Result<Self> {
        gateway.create_song(input).await
    }

    async fn update(gateway: &dyn Gateway, id: SongId, patch: &SongPatch) -> Result<Self> {
        gateway.update_song(id, patch).await
    }

    async fn delete(gateway: &dyn Gateway, id: SongId) -> Result<()> {
        gateway.delete_song(id).await.map(|_| ())
    }
}

/// Observable phase of a list view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
    /// Generic user-facing message; the underlying error is only logged
    Error(String),
}

/// Snapshot of a list view, cloned out for rendering.
#[derive(Debug, Clone)]
pub struct ListState<R: Resource> {
    pub phase: Phase,
    pub items: Vec<R>,
    pub pending_delete: Option<R::Id>,
}

impl<R: Resource> Default for ListState<R> {
    fn default() -> Self {
        Self {
            phase: Phase::Loading,
            items: Vec::new(),
            pending_delete: None,
        }
    }
}

impl<R: Resource> ListState<R> {
    pub fn total(&self) -> usize {
        self.items.len()
    }

    pub fn find(&self, id: R::Id) -> Option<&R> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Message shown when there are no rows to render.
    pub fn empty_text() -> String {
        format!("No {} found", R::PLURAL)
    }

    fn append(&mut self, item: R) {
        self.items.push(item);
    }

    fn replace(&mut self, item: R) -> bool {
        match self.items.iter_mut().find(|row| row.id() == item.id()) {
            Some(row) => {
                *row = item;
                true
            }
            None => false,
        }
    }

    fn remove(&mut self, id: R::Id) -> bool {
        let before = self.items.len();
        self.items.retain(|row| row.id() != id);
        self.items.len() != before
    }
}

/// List view over one resource collection.
pub struct ListView<R: Resource> {
    gateway: Arc<dyn Gateway>,
    state: RwLock<ListState<R>>,
}

impl<R: Resource> ListView<R> {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            state: RwLock::new(ListState::default()),
        }
    }

    pub(crate) fn gateway(&self) -> &dyn Gateway {
        self.gateway.as_ref()
    }

    /// Fetch the collection and enter `Ready` or `Error`.
    pub async fn load(&self) -> Result<()> {
        self.begin_load().await;
        let result = R::fetch_all(self.gateway()).await;
        self.finish_load(result).await
    }

    /// Re-run the mount fetch.
    pub async fn reload(&self) -> Result<()> {
        self.load().await
    }

    pub(crate) async fn begin_load(&self) {
        self.state.write().await.phase = Phase::Loading;
    }

    pub(crate) async fn finish_load(&self, result: Result<Vec<R>>) -> Result<()> {
        let mut state = self.state.write().await;
        match result {
            Ok(items) => {
                debug!(count = items.len(), kind = R::PLURAL, "List loaded");
                state.items = items;
                state.phase = Phase::Ready;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, kind = R::PLURAL, "Failed to load list");
                state.phase = Phase::Error(format!("Failed to load {}", R::PLURAL));
                Err(e)
            }
        }
    }

    pub async fn snapshot(&self) -> ListState<R> {
        self.state.read().await.clone()
    }

    pub async fn phase(&self) -> Phase {
        self.state.read().await.phase.clone()
    }

    pub async fn total(&self) -> usize {
        self.state.read().await.total()
    }

    pub async fn find(&self, id: R::Id) -> Option<R> {
        self.state.read().await.find(id).cloned()
    }

    /// Create through the gateway and append the returned row.
    pub async fn create(&self, input: &R::Input) -> Result<R> {
        match R::create(self.gateway(), input).await {
            Ok(created) => {
                info!(id = %created.id(), kind = R::SINGULAR, "Created");
                self.state.write().await.append(created.clone());
                Ok(created)
            }
            Err(e) => Err(self.fail("create", e).await),
        }
    }

    /// Update through the gateway and replace the row with the same id.
    pub async fn update(&self, id: R::Id, patch: &R::Patch) -> Result<R> {
        match R::update(self.gateway(), id, patch).await {
            Ok(updated) => {
                info!(id = %id, kind = R::SINGULAR, "Updated");
                if !self.state.write().await.replace(updated.clone()) {
                    debug!(id = %id, kind = R::SINGULAR, "Updated row no longer listed");
                }
                Ok(updated)
            }
            Err(e) => Err(self.fail("update", e).await),
        }
    }

    /// First step of a delete: remember which row is awaiting confirmation.
    pub async fn request_delete(&self, id: R::Id) {
        self.state.write().await.pending_delete = Some(id);
    }

    pub async fn cancel_delete(&self) {
        self.state.write().await.pending_delete = None;
    }

    pub async fn pending_delete(&self) -> Option<R::Id> {
        self.state.read().await.pending_delete
    }

    /// Second step of a delete.
    ///
    /// The pending id is cleared before the gateway call, so it is gone
    /// whether the call succeeds or fails. Returns the deleted id, or `None`
    /// when nothing was pending.
    pub async fn confirm_delete(&self) -> Result<Option<R::Id>> {
        let Some(id) = self.state.write().await.pending_delete.take() else {
            return Ok(None);
        };

        match R::delete(self.gateway(), id).await {
            Ok(()) => {
                info!(id = %id, kind = R::SINGULAR, "Deleted");
                self.state.write().await.remove(id);
                Ok(Some(id))
            }
            Err(e) => Err(self.fail("delete", e).await),
        }
    }

    /// Enter the error phase, keeping the rows already shown.
    async fn fail(&self, action: &str, e: ams_core::AmsError) -> ams_core::AmsError {
        error!(error = %e, kind = R::SINGULAR, action, "Mutation failed");
        self.state.write().await.phase =
            Phase::Error(format!("Failed to {} {}", action, R::SINGULAR));
        e
    }
}
