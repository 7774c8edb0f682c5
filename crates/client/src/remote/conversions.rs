//! Wire-to-entity conversion functions.
//!
//! The only place where server field shapes meet client entity shapes.

use secrecy::ExposeSecret;

use recipe_box_core::{Category, Ingredient, Recipe, ShoppingItem, User};

use super::wire::{
    CategoryWire, CredentialsWire, IngredientWire, NewRecipeWire, NewShoppingItemWire,
    PLACEHOLDER_IMAGE, RecipeWire, RegistrationWire, ShoppingItemWire, UserWire,
};
use super::{Credentials, NewRecipe, NewShoppingItem, Registration};

fn ingredient_from_wire(wire: IngredientWire) -> Ingredient {
    Ingredient {
        name: wire.name,
        count: wire.count,
        unit: wire.unit,
    }
}

fn ingredient_to_wire(ingredient: &Ingredient) -> IngredientWire {
    IngredientWire {
        name: ingredient.name.clone(),
        count: ingredient.count,
        unit: ingredient.unit.clone(),
    }
}

/// Image URL sent to the server: the record's own, or the placeholder.
fn outbound_image(image_url: Option<&str>) -> String {
    match image_url {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => PLACEHOLDER_IMAGE.to_string(),
    }
}

pub fn recipe_from_wire(wire: RecipeWire) -> Recipe {
    Recipe {
        id: wire.id,
        name: wire.name,
        description: wire.description,
        instructions: wire.instructions,
        ingredients: wire.ingredients.into_iter().map(ingredient_from_wire).collect(),
        difficulty: wire.difficulty,
        duration_minutes: wire.duration,
        category_id: wire.category_id,
        owner_id: wire.user_id,
        owner_name: wire.user_name.filter(|name| !name.is_empty()),
        image_url: if wire.img.is_empty() {
            None
        } else {
            Some(wire.img)
        },
    }
}

pub fn recipe_to_wire(recipe: &Recipe) -> RecipeWire {
    RecipeWire {
        id: recipe.id,
        name: recipe.name.clone(),
        description: recipe.description.clone(),
        instructions: recipe.instructions.clone(),
        ingredients: recipe.ingredients.iter().map(ingredient_to_wire).collect(),
        difficulty: recipe.difficulty,
        duration: recipe.duration_minutes,
        category_id: recipe.category_id,
        user_id: recipe.owner_id,
        user_name: None,
        img: outbound_image(recipe.image_url.as_deref()),
    }
}

pub fn new_recipe_to_wire(recipe: &NewRecipe) -> NewRecipeWire {
    NewRecipeWire {
        name: recipe.name.clone(),
        description: recipe.description.clone(),
        instructions: recipe.instructions.clone(),
        ingredients: recipe.ingredients.iter().map(ingredient_to_wire).collect(),
        difficulty: recipe.difficulty,
        duration: recipe.duration_minutes,
        category_id: recipe.category_id,
        user_id: recipe.owner_id,
        img: outbound_image(recipe.image_url.as_deref()),
    }
}

pub fn category_from_wire(wire: CategoryWire) -> Category {
    Category {
        id: wire.id,
        name: wire.name,
    }
}

pub fn user_from_wire(wire: UserWire) -> User {
    User {
        id: wire.id,
        name: wire.name,
        user_name: wire.user_name,
        email: wire.email,
        phone: wire.phone,
        national_id: wire.national_id,
    }
}

pub fn credentials_to_wire(credentials: &Credentials) -> CredentialsWire {
    CredentialsWire {
        user_name: credentials.user_name.clone(),
        password: credentials.password.expose_secret().to_string(),
    }
}

pub fn registration_to_wire(registration: &Registration) -> RegistrationWire {
    RegistrationWire {
        name: registration.name.clone(),
        user_name: registration.user_name.clone(),
        password: registration.password.expose_secret().to_string(),
        email: registration.email.clone(),
        phone: registration.phone.clone(),
        national_id: registration.national_id.clone(),
    }
}

pub fn shopping_item_from_wire(wire: ShoppingItemWire) -> ShoppingItem {
    ShoppingItem {
        id: wire.id,
        owner_id: wire.user_id,
        name: wire.name,
        count: wire.count,
        unit: wire.unit,
    }
}

pub fn shopping_item_to_wire(item: &ShoppingItem) -> ShoppingItemWire {
    ShoppingItemWire {
        id: item.id,
        user_id: item.owner_id,
        name: item.name.clone(),
        count: item.count,
        unit: item.unit.clone(),
    }
}

pub fn new_shopping_item_to_wire(item: &NewShoppingItem) -> NewShoppingItemWire {
    NewShoppingItemWire {
        user_id: item.owner_id,
        name: item.name.clone(),
        count: item.count,
        unit: item.unit.clone(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use recipe_box_core::{CategoryId, Difficulty, RecipeId, UserId};

    use super::*;

    fn sample_wire() -> RecipeWire {
        RecipeWire {
            id: RecipeId::new(10),
            name: "Falafel".to_string(),
            description: "Fried chickpea balls".to_string(),
            instructions: vec!["Soak".to_string(), "Grind".to_string(), "Fry".to_string()],
            ingredients: vec![IngredientWire {
                name: "chickpeas".to_string(),
                count: 500.0,
                unit: "grams".to_string(),
            }],
            difficulty: Difficulty::Medium,
            duration: 45,
            category_id: CategoryId::new(2),
            user_id: UserId::new(3),
            user_name: Some("Dana".to_string()),
            img: String::new(),
        }
    }

    #[test]
    fn test_recipe_from_wire_maps_names() {
        let recipe = recipe_from_wire(sample_wire());
        assert_eq!(recipe.owner_id, UserId::new(3));
        assert_eq!(recipe.category_id, CategoryId::new(2));
        assert_eq!(recipe.owner_name.as_deref(), Some("Dana"));
        assert_eq!(recipe.ingredients[0].unit, "grams");
        // Empty image becomes None
        assert!(recipe.image_url.is_none());
    }

    #[test]
    fn test_recipe_to_wire_substitutes_placeholder_image() {
        let recipe = recipe_from_wire(sample_wire());
        let wire = recipe_to_wire(&recipe);
        assert_eq!(wire.img, PLACEHOLDER_IMAGE);

        let with_image = Recipe {
            image_url: Some("/img/falafel.jpg".to_string()),
            ..recipe
        };
        assert_eq!(recipe_to_wire(&with_image).img, "/img/falafel.jpg");
    }

    #[test]
    fn test_credentials_to_wire_exposes_password_once() {
        let credentials = Credentials {
            user_name: "dana".to_string(),
            password: "s3cret".into(),
        };
        let wire = credentials_to_wire(&credentials);
        assert_eq!(wire.password, "s3cret");
        // The source value stays redacted in Debug output
        assert!(!format!("{credentials:?}").contains("s3cret"));
    }

    #[test]
    fn test_shopping_item_roundtrip_maps_owner() {
        let wire = ShoppingItemWire {
            id: 4.into(),
            user_id: UserId::new(9),
            name: "tahini".to_string(),
            count: 1.0,
            unit: "jar".to_string(),
        };
        let item = shopping_item_from_wire(wire.clone());
        assert_eq!(item.owner_id, UserId::new(9));
        assert_eq!(shopping_item_to_wire(&item), wire);
    }
}
