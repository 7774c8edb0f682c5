//! Authentication state.
//!
//! At most one authenticated user at a time. The state is backed by the
//! durable session slot: restored at startup, written on login/register,
//! cleared on logout. Slot writes are best-effort - a persistence failure
//! is logged, not surfaced, since the in-memory session is already valid.

use tracing::warn;

use recipe_box_core::User;

use crate::error::ApiError;
use crate::remote::{Credentials, RecordService, Registration};
use crate::session::SessionSlot;

use super::LoadStatus;

/// The current session and its request status.
#[derive(Debug)]
pub struct AuthStore {
    slot: SessionSlot,
    user: Option<User>,
    status: LoadStatus,
    error: Option<String>,
}

impl AuthStore {
    /// Build the store, restoring any persisted session from the slot.
    pub(crate) fn restore(slot: SessionSlot) -> Self {
        let user = slot.load();
        Self {
            slot,
            user,
            status: LoadStatus::Idle,
            error: None,
        }
    }

    /// Authenticate; on success the session becomes the returned user and
    /// is persisted to the slot.
    ///
    /// # Errors
    ///
    /// The error is recorded on the store and returned; any previous
    /// session stays untouched.
    pub async fn login(
        &mut self,
        service: &impl RecordService,
        credentials: Credentials,
    ) -> Result<(), ApiError> {
        self.begin();
        match service.login(&credentials).await {
            Ok(user) => {
                self.establish(user);
                Ok(())
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Register a new account; on success the session becomes the created
    /// user and is persisted to the slot.
    ///
    /// # Errors
    ///
    /// The error is recorded on the store and returned.
    pub async fn register(
        &mut self,
        service: &impl RecordService,
        registration: Registration,
    ) -> Result<(), ApiError> {
        self.begin();
        match service.register(&registration).await {
            Ok(user) => {
                self.establish(user);
                Ok(())
            }
            Err(err) => {
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// End the session and clear the durable slot. Purely local; never
    /// fails the caller.
    pub fn logout(&mut self) {
        self.user = None;
        self.status = LoadStatus::Idle;
        self.error = None;
        if let Err(err) = self.slot.clear() {
            warn!(error = %err, "failed to clear session slot");
        }
    }

    /// The authenticated user, if any.
    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a session is established.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The store's request status.
    #[must_use]
    pub const fn status(&self) -> LoadStatus {
        self.status
    }

    /// The last error message, if the last request failed.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn begin(&mut self) {
        self.status = LoadStatus::Loading;
        self.error = None;
    }

    fn establish(&mut self, user: User) {
        self.status = LoadStatus::Idle;
        if let Err(err) = self.slot.save(&user) {
            warn!(error = %err, "failed to persist session slot");
        }
        self.user = Some(user);
    }

    fn fail(&mut self, error: &ApiError) {
        self.status = LoadStatus::Error;
        self.error = Some(error.user_message());
    }
}
