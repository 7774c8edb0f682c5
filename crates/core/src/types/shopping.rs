//! Shopping-list item entity.

use serde::{Deserialize, Serialize};

use super::id::{ShoppingItemId, UserId};

/// One item on a user's shopping list.
///
/// Items are scoped to their owner: removal on the remote service is keyed
/// by the (owner, item) pair, and the store mirrors that when filtering out
/// a deleted item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    /// Item identity.
    pub id: ShoppingItemId,
    /// Owning user.
    pub owner_id: UserId,
    /// Ingredient or product name.
    pub name: String,
    /// Quantity to buy.
    pub count: f64,
    /// Unit label for the quantity.
    pub unit: String,
}
