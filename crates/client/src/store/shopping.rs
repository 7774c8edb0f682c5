//! Shopping-list store.

use recipe_box_core::{ShoppingItem, ShoppingItemId, UserId};

use crate::error::ApiError;
use crate::remote::{NewShoppingItem, RecordService};

use super::{Collection, LoadStatus};

/// The authenticated user's shopping list.
#[derive(Debug, Default)]
pub struct ShoppingListStore {
    collection: Collection<ShoppingItem>,
}

impl ShoppingListStore {
    /// Fetch `user`'s shopping list, replacing the snapshot on success.
    ///
    /// # Errors
    ///
    /// The error is recorded on the collection and returned; the previous
    /// snapshot stays untouched.
    pub async fn fetch_all(
        &mut self,
        service: &impl RecordService,
        user: UserId,
    ) -> Result<(), ApiError> {
        self.collection.begin();
        match service.list_shopping_items(user).await {
            Ok(records) => {
                self.collection.complete(records);
                Ok(())
            }
            Err(err) => {
                self.collection.fail(&err);
                Err(err)
            }
        }
    }

    /// Add a batch of items; on success the returned records are appended.
    ///
    /// # Errors
    ///
    /// The error is recorded on the collection and returned.
    pub async fn add(
        &mut self,
        service: &impl RecordService,
        items: &[NewShoppingItem],
    ) -> Result<(), ApiError> {
        self.collection.begin();
        match service.add_shopping_items(items).await {
            Ok(created) => {
                self.collection.settle();
                self.collection.records_mut().extend(created);
                Ok(())
            }
            Err(err) => {
                self.collection.fail(&err);
                Err(err)
            }
        }
    }

    /// Update an item; on success the snapshot entry is replaced in place.
    ///
    /// # Errors
    ///
    /// The error is recorded on the collection and returned.
    pub async fn update(
        &mut self,
        service: &impl RecordService,
        item: &ShoppingItem,
    ) -> Result<(), ApiError> {
        self.collection.begin();
        match service.update_shopping_item(item).await {
            Ok(updated) => {
                self.collection.settle();
                if let Some(existing) = self
                    .collection
                    .records_mut()
                    .iter_mut()
                    .find(|i| i.id == updated.id)
                {
                    *existing = updated;
                }
                Ok(())
            }
            Err(err) => {
                self.collection.fail(&err);
                Err(err)
            }
        }
    }

    /// Delete an item, keyed by the (owner, item) pair; on success exactly
    /// that pair is filtered out of the snapshot.
    ///
    /// # Errors
    ///
    /// The error is recorded on the collection and returned.
    pub async fn delete(
        &mut self,
        service: &impl RecordService,
        user: UserId,
        item: ShoppingItemId,
    ) -> Result<(), ApiError> {
        self.collection.begin();
        match service.delete_shopping_item(user, item).await {
            Ok(()) => {
                self.collection.settle();
                self.collection
                    .records_mut()
                    .retain(|i| !(i.id == item && i.owner_id == user));
                Ok(())
            }
            Err(err) => {
                self.collection.fail(&err);
                Err(err)
            }
        }
    }

    /// The current snapshot.
    #[must_use]
    pub fn all(&self) -> &[ShoppingItem] {
        self.collection.records()
    }

    /// The collection's load status.
    #[must_use]
    pub const fn status(&self) -> LoadStatus {
        self.collection.status()
    }

    /// The last error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.collection.error()
    }
}
