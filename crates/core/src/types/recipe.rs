//! Recipe and ingredient entities.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::id::{CategoryId, RecipeId, UserId};

/// A single ingredient line in a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name.
    pub name: String,
    /// Quantity of the ingredient.
    pub count: f64,
    /// Unit label for the quantity (e.g. "grams", "cups").
    pub unit: String,
}

/// A recipe as held by the client record store.
///
/// The owner reference determines edit/delete permission: mutating
/// operations check [`Recipe::is_owned_by`] locally before any request is
/// issued to the remote service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Recipe identity.
    pub id: RecipeId,
    /// Recipe name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Ordered preparation steps.
    pub instructions: Vec<String>,
    /// Ordered ingredient lines.
    pub ingredients: Vec<Ingredient>,
    /// Difficulty on the 1-4 scale.
    pub difficulty: Difficulty,
    /// Preparation time in minutes.
    pub duration_minutes: u32,
    /// Category reference.
    pub category_id: CategoryId,
    /// Owner reference.
    pub owner_id: UserId,
    /// Owner's display name, when the service includes it.
    pub owner_name: Option<String>,
    /// Image URL; `None` when the recipe has no image of its own.
    pub image_url: Option<String>,
}

impl Recipe {
    /// Whether `user` owns this recipe and may edit or delete it.
    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.owner_id == user
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample() -> Recipe {
        Recipe {
            id: RecipeId::new(1),
            name: "Shakshuka".to_string(),
            description: "Eggs poached in tomato sauce".to_string(),
            instructions: vec!["Simmer sauce".to_string(), "Add eggs".to_string()],
            ingredients: vec![Ingredient {
                name: "eggs".to_string(),
                count: 4.0,
                unit: "units".to_string(),
            }],
            difficulty: Difficulty::Easy,
            duration_minutes: 30,
            category_id: CategoryId::new(2),
            owner_id: UserId::new(7),
            owner_name: None,
            image_url: None,
        }
    }

    #[test]
    fn test_ownership_check() {
        let recipe = sample();
        assert!(recipe.is_owned_by(UserId::new(7)));
        assert!(!recipe.is_owned_by(UserId::new(8)));
    }
}
