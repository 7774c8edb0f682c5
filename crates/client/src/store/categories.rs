//! Category collection store.

use recipe_box_core::Category;

use crate::error::ApiError;
use crate::remote::RecordService;

use super::{Collection, LoadStatus};

/// The flat category collection.
#[derive(Debug, Default)]
pub struct CategoryStore {
    collection: Collection<Category>,
}

impl CategoryStore {
    /// Fetch the full collection, replacing the snapshot on success.
    ///
    /// # Errors
    ///
    /// The error is recorded on the collection and returned; the previous
    /// snapshot stays untouched.
    pub async fn fetch_all(&mut self, service: &impl RecordService) -> Result<(), ApiError> {
        self.collection.begin();
        match service.list_categories().await {
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

    /// Create a category; on success the returned record is appended.
    ///
    /// # Errors
    ///
    /// The error is recorded on the collection and returned.
    pub async fn add(
        &mut self,
        service: &impl RecordService,
        name: &str,
    ) -> Result<(), ApiError> {
        self.collection.begin();
        match service.create_category(name).await {
            Ok(created) => {
                self.collection.settle();
                self.collection.records_mut().push(created);
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
    pub fn all(&self) -> &[Category] {
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
