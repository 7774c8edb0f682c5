//! User collection store.
//!
//! The service exposes no list-users endpoint; the collection is derived
//! from recipe ownership instead - unique owner ids in first-seen order,
//! with only the fields the recipe payload carries.

use recipe_box_core::{Recipe, User};

use crate::error::ApiError;
use crate::remote::RecordService;

use super::{Collection, LoadStatus};

/// Users known to the client, derived from the recipe collection.
#[derive(Debug, Default)]
pub struct UserStore {
    collection: Collection<User>,
}

fn derive_users(recipes: &[Recipe]) -> Vec<User> {
    let mut users: Vec<User> = Vec::new();
    for recipe in recipes {
        if users.iter().any(|user| user.id == recipe.owner_id) {
            continue;
        }
        users.push(User {
            id: recipe.owner_id,
            name: recipe
                .owner_name
                .clone()
                .unwrap_or_else(|| format!("User {}", recipe.owner_id)),
            user_name: String::new(),
            email: String::new(),
            phone: String::new(),
            national_id: String::new(),
        });
    }
    users
}

impl UserStore {
    /// Rebuild the user collection from the recipe collection.
    ///
    /// # Errors
    ///
    /// The error is recorded on the collection and returned; the previous
    /// snapshot stays untouched.
    pub async fn fetch_all(&mut self, service: &impl RecordService) -> Result<(), ApiError> {
        self.collection.begin();
        match service.list_recipes().await {
            Ok(recipes) => {
                self.collection.complete(derive_users(&recipes));
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
    pub fn all(&self) -> &[User] {
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

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use recipe_box_core::{CategoryId, Difficulty, RecipeId, UserId};

    use super::*;

    fn recipe(id: i32, owner: i32, owner_name: Option<&str>) -> Recipe {
        Recipe {
            id: RecipeId::new(id),
            name: format!("Recipe {id}"),
            description: String::new(),
            instructions: vec![],
            ingredients: vec![],
            difficulty: Difficulty::Easy,
            duration_minutes: 10,
            category_id: CategoryId::new(1),
            owner_id: UserId::new(owner),
            owner_name: owner_name.map(ToString::to_string),
            image_url: None,
        }
    }

    #[test]
    fn test_derive_users_unique_in_first_seen_order() {
        let recipes = vec![
            recipe(1, 5, Some("Dana")),
            recipe(2, 3, None),
            recipe(3, 5, Some("Dana again")),
            recipe(4, 8, Some("Noa")),
        ];
        let users = derive_users(&recipes);

        let ids: Vec<_> = users.iter().map(|u| u.id.as_i32()).collect();
        assert_eq!(ids, vec![5, 3, 8]);
        assert_eq!(users[0].name, "Dana");
        // Missing display name falls back to a synthetic one
        assert_eq!(users[1].name, "User 3");
    }
}
