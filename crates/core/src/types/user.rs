//! User entity.

use serde::{Deserialize, Serialize};

use super::id::UserId;

/// A user as held by the client record store.
///
/// Passwords are write-only: they travel in login/registration payloads at
/// the service boundary and are never stored on this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identity.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Login name.
    pub user_name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// National ID number.
    pub national_id: String,
}
