//! Client record store.
//!
//! Holds the latest known snapshot of each entity collection and a
//! tri-state status per collection. The store exclusively owns its
//! collections: callers read snapshots and dispatch fetch/mutate
//! operations, never mutate records directly.
//!
//! Operation contract, uniform across entities:
//! - fetch-all replaces the snapshot atomically on success; on failure the
//!   previous snapshot stays untouched and the error slot gets a
//!   displayable message
//! - create appends, update replaces in place by id, delete filters out by
//!   id - each only after the remote request succeeded
//! - every operation is request-scoped; a second call while one is in
//!   flight is allowed and results apply in arrival order
//!
//! Errors are both recorded on the collection and returned, so callers can
//! branch immediately while views keep rendering from the slots.

mod auth;
mod categories;
mod recipes;
mod shopping;
mod users;

pub use auth::AuthStore;
pub use categories::CategoryStore;
pub use recipes::RecipeStore;
pub use shopping::ShoppingListStore;
pub use users::UserStore;

use crate::config::Config;
use crate::error::ApiError;
use crate::session::SessionSlot;

/// Load status of one entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    /// No request in flight; the snapshot is whatever last landed.
    #[default]
    Idle,
    /// A request is in flight. There is no timeout recovery: a request
    /// that never resolves leaves the collection loading.
    Loading,
    /// The last request failed; see the error slot.
    Error,
}

/// One entity collection: the last-fetched snapshot, a load status, and a
/// last-error message slot.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    records: Vec<T>,
    status: LoadStatus,
    error: Option<String>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            status: LoadStatus::Idle,
            error: None,
        }
    }
}

impl<T> Collection<T> {
    /// Mark a request in flight and clear the previous error.
    pub(crate) fn begin(&mut self) {
        self.status = LoadStatus::Loading;
        self.error = None;
    }

    /// Replace the snapshot atomically.
    pub(crate) fn complete(&mut self, records: Vec<T>) {
        self.status = LoadStatus::Idle;
        self.records = records;
    }

    /// Finish a request that edits records in place (or not at all).
    pub(crate) fn settle(&mut self) {
        self.status = LoadStatus::Idle;
    }

    /// Record a failure, leaving the snapshot untouched.
    pub(crate) fn fail(&mut self, error: &ApiError) {
        self.status = LoadStatus::Error;
        self.error = Some(error.user_message());
    }

    /// In-place access for the post-mutation local edits.
    pub(crate) const fn records_mut(&mut self) -> &mut Vec<T> {
        &mut self.records
    }

    /// The current snapshot.
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.records
    }

    /// The collection's load status.
    #[must_use]
    pub const fn status(&self) -> LoadStatus {
        self.status
    }

    /// The last error message, if the last request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether a request is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self.status, LoadStatus::Loading)
    }
}

/// The full client-side state container.
///
/// Constructed once at composition time and passed by reference to the
/// presentation layer; there is no ambient global state.
#[derive(Debug)]
pub struct RecordStore {
    /// Recipe collection, recent preview, and selection.
    pub recipes: RecipeStore,
    /// Category collection.
    pub categories: CategoryStore,
    /// Users derived from recipe ownership.
    pub users: UserStore,
    /// The authenticated user's shopping list.
    pub shopping: ShoppingListStore,
    /// Authentication state backed by the durable session slot.
    pub auth: AuthStore,
}

impl RecordStore {
    /// Create the store, restoring any persisted session from
    /// `config.session_dir`.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self::with_session_slot(SessionSlot::new(&config.session_dir))
    }

    /// Create the store against an explicit session slot.
    #[must_use]
    pub fn with_session_slot(slot: SessionSlot) -> Self {
        Self {
            recipes: RecipeStore::default(),
            categories: CategoryStore::default(),
            users: UserStore::default(),
            shopping: ShoppingListStore::default(),
            auth: AuthStore::restore(slot),
        }
    }
}
