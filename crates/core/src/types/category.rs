//! Recipe category entity.

use serde::{Deserialize, Serialize};

use super::id::CategoryId;

/// A flat recipe category. No hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category identity.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
}
