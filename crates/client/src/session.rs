//! Durable session slot.
//!
//! A single key-value entry holding the serialized current user, keyed by a
//! fixed file name under the configured directory. Read at startup, written
//! on login/register, cleared on logout. Corrupt contents are discarded and
//! the slot removed - never fatal.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::warn;

use recipe_box_core::User;

/// Fixed file name of the session entry.
pub const SESSION_FILE: &str = "session.json";

/// Errors writing or clearing the session slot.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Filesystem access failed.
    #[error("session I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The user record could not be serialized.
    #[error("session serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The durable slot persisting the logged-in user across runs.
#[derive(Debug, Clone)]
pub struct SessionSlot {
    path: PathBuf,
}

impl SessionSlot {
    /// A slot stored as `dir/session.json`.
    #[must_use]
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(SESSION_FILE),
        }
    }

    /// Read the persisted user, if any.
    ///
    /// A missing slot yields `None`. Unreadable or corrupt contents are
    /// discarded: the slot is removed and `None` returned.
    #[must_use]
    pub fn load(&self) -> Option<User> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return None,
            Err(err) => {
                warn!(error = %err, path = %self.path.display(), "failed to read session slot");
                return None;
            }
        };

        match serde_json::from_str(&contents) {
            Ok(user) => Some(user),
            Err(err) => {
                warn!(error = %err, "discarding corrupt session slot");
                if let Err(err) = fs::remove_file(&self.path) {
                    warn!(error = %err, "failed to remove corrupt session slot");
                }
                None
            }
        }
    }

    /// Persist `user` as the current session.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created or the entry
    /// cannot be written.
    pub fn save(&self, user: &User) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string(user)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }

    /// Remove the persisted session. Clearing an empty slot is fine.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing entry cannot be removed.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
