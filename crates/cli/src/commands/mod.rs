//! Command implementations.
//!
//! Every command builds a fresh [`Context`]: configuration from the
//! environment, an HTTP service against the configured base URL, and a
//! record store that restores any persisted session. Commands that act on
//! owned records resolve the acting user from that session.

pub mod auth;
pub mod categories;
pub mod recipes;
pub mod shopping;

use thiserror::Error;

use recipe_box_client::config::{Config, ConfigError};
use recipe_box_client::error::ApiError;
use recipe_box_client::remote::HttpRecordService;
use recipe_box_client::store::RecordStore;
use recipe_box_core::{InvalidDifficulty, UserId};

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The remote service call failed.
    #[error("{}", .0.user_message())]
    Api(#[from] ApiError),

    /// A difficulty flag outside the 1-4 scale.
    #[error(transparent)]
    InvalidDifficulty(#[from] InvalidDifficulty),

    /// An ingredient flag that does not parse.
    #[error("Invalid ingredient {0:?}. Expected name:count:unit, e.g. \"chickpeas:500:grams\"")]
    InvalidIngredient(String),

    /// No session; the command needs a signed-in user.
    #[error("Not signed in. Run `recipe-box login` first")]
    NotSignedIn,
}

/// Everything a command needs: the HTTP service and the record store with
/// the restored session.
pub struct Context {
    pub service: HttpRecordService,
    pub store: RecordStore,
}

impl Context {
    /// Load configuration and build the service and store.
    pub fn load() -> Result<Self, CliError> {
        let config = Config::from_env()?;
        let service = HttpRecordService::new(&config)?;
        let store = RecordStore::new(&config);
        Ok(Self { service, store })
    }

    /// The signed-in user's id, or [`CliError::NotSignedIn`].
    pub fn session_user(&self) -> Result<UserId, CliError> {
        self.store
            .auth
            .current_user()
            .map(|user| user.id)
            .ok_or(CliError::NotSignedIn)
    }
}
