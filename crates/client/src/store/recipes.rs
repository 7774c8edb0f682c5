//! Recipe collection store.

use recipe_box_core::{Recipe, RecipeId, UserId};

use crate::error::ApiError;
use crate::pipeline::{self, RECENT_COUNT};
use crate::remote::{NewRecipe, RecordService};

use super::{Collection, LoadStatus};

/// Recipes: the full snapshot, the recent preview, and the currently
/// selected record.
///
/// The recent preview and the detail selection are separate derivations of
/// the same remote collection; fetching either never disturbs the main
/// snapshot.
#[derive(Debug, Default)]
pub struct RecipeStore {
    collection: Collection<Recipe>,
    recent: Vec<Recipe>,
    selected: Option<Recipe>,
}

impl RecipeStore {
    /// Fetch the full collection, replacing the snapshot on success.
    ///
    /// # Errors
    ///
    /// The error is recorded on the collection and returned; the previous
    /// snapshot stays untouched.
    pub async fn fetch_all(&mut self, service: &impl RecordService) -> Result<(), ApiError> {
        self.collection.begin();
        match service.list_recipes().await {
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

    /// Refresh the recent preview: highest id first, truncated to
    /// [`RECENT_COUNT`].
    ///
    /// # Errors
    ///
    /// The error is recorded on the collection and returned.
    pub async fn fetch_recent(&mut self, service: &impl RecordService) -> Result<(), ApiError> {
        self.collection.begin();
        match service.list_recipes().await {
            Ok(records) => {
                self.collection.settle();
                self.recent = pipeline::recent(&records, RECENT_COUNT);
                Ok(())
            }
            Err(err) => {
                self.collection.fail(&err);
                Err(err)
            }
        }
    }

    /// Fetch one recipe by id and make it the selection.
    ///
    /// The service has no reliable single-record endpoint, so this fetches
    /// the full collection and locates the record client-side. Not-found is
    /// a recorded error, not a crash; the previous selection stays.
    ///
    /// # Errors
    ///
    /// The error is recorded on the collection and returned.
    pub async fn fetch_by_id(
        &mut self,
        service: &impl RecordService,
        id: RecipeId,
    ) -> Result<(), ApiError> {
        self.collection.begin();
        let records = match service.list_recipes().await {
            Ok(records) => records,
            Err(err) => {
                self.collection.fail(&err);
                return Err(err);
            }
        };

        match records.into_iter().find(|recipe| recipe.id == id) {
            Some(recipe) => {
                self.collection.settle();
                self.selected = Some(recipe);
                Ok(())
            }
            None => {
                let err = ApiError::NotFound(format!("recipe {id}"));
                self.collection.fail(&err);
                Err(err)
            }
        }
    }

    /// Create a recipe; on success the returned record is appended to the
    /// snapshot.
    ///
    /// # Errors
    ///
    /// The error is recorded on the collection and returned; the snapshot
    /// stays unchanged.
    pub async fn create(
        &mut self,
        service: &impl RecordService,
        recipe: NewRecipe,
    ) -> Result<RecipeId, ApiError> {
        self.collection.begin();
        match service.create_recipe(&recipe).await {
            Ok(created) => {
                self.collection.settle();
                let id = created.id;
                self.collection.records_mut().push(created);
                Ok(id)
            }
            Err(err) => {
                self.collection.fail(&err);
                Err(err)
            }
        }
    }

    /// Update a recipe; on success the snapshot entry is replaced in place
    /// and the selection follows the updated record.
    ///
    /// # Errors
    ///
    /// Refused locally with [`ApiError::Forbidden`] when `acting_user` is
    /// not the owner - no request is issued. Remote failures are recorded
    /// and returned with the snapshot unchanged.
    pub async fn update(
        &mut self,
        service: &impl RecordService,
        acting_user: UserId,
        recipe: Recipe,
    ) -> Result<(), ApiError> {
        if !recipe.is_owned_by(acting_user) {
            let err = ApiError::Forbidden("only the owner may edit this recipe".to_string());
            self.collection.fail(&err);
            return Err(err);
        }

        self.collection.begin();
        match service.update_recipe(&recipe).await {
            Ok(updated) => {
                self.collection.settle();
                if let Some(existing) = self
                    .collection
                    .records_mut()
                    .iter_mut()
                    .find(|r| r.id == updated.id)
                {
                    *existing = updated.clone();
                }
                self.selected = Some(updated);
                Ok(())
            }
            Err(err) => {
                self.collection.fail(&err);
                Err(err)
            }
        }
    }

    /// Delete a recipe; on success it is filtered out of the snapshot, and
    /// a matching selection is cleared.
    ///
    /// # Errors
    ///
    /// Refused locally when the record is unknown or `acting_user` is not
    /// the owner - no request is issued. Remote failures are recorded and
    /// returned with the snapshot unchanged.
    pub async fn delete(
        &mut self,
        service: &impl RecordService,
        acting_user: UserId,
        id: RecipeId,
    ) -> Result<(), ApiError> {
        let Some(existing) = self.collection.records().iter().find(|r| r.id == id) else {
            let err = ApiError::NotFound(format!("recipe {id}"));
            self.collection.fail(&err);
            return Err(err);
        };
        if !existing.is_owned_by(acting_user) {
            let err = ApiError::Forbidden("only the owner may delete this recipe".to_string());
            self.collection.fail(&err);
            return Err(err);
        }

        self.collection.begin();
        match service.delete_recipe(id).await {
            Ok(()) => {
                self.collection.settle();
                self.collection.records_mut().retain(|r| r.id != id);
                if self.selected.as_ref().is_some_and(|r| r.id == id) {
                    self.selected = None;
                }
                Ok(())
            }
            Err(err) => {
                self.collection.fail(&err);
                Err(err)
            }
        }
    }

    /// The full snapshot, in the order the service returned it.
    #[must_use]
    pub fn all(&self) -> &[Recipe] {
        self.collection.records()
    }

    /// The recent preview.
    #[must_use]
    pub fn recent(&self) -> &[Recipe] {
        &self.recent
    }

    /// The currently selected record.
    #[must_use]
    pub const fn selected(&self) -> Option<&Recipe> {
        self.selected.as_ref()
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
