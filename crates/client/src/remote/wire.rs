//! Server-side payload shapes.
//!
//! The remote service uses PascalCase field names and a few spellings of
//! its own (`Ingridents`, `Categoryid`). These structs mirror the payloads
//! exactly; [`super::conversions`] maps them to and from the client entity
//! types. Nothing outside the `remote` module should touch these.

use serde::{Deserialize, Serialize};

use recipe_box_core::{CategoryId, Difficulty, RecipeId, ShoppingItemId, UserId};

/// Image path the server expects when a recipe has no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder-recipe.jpg";

/// One ingredient line as the server shapes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientWire {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Count")]
    pub count: f64,
    #[serde(rename = "Type")]
    pub unit: String,
}

/// A recipe as the server returns it.
///
/// Responses are inconsistent about the ingredient field (`Ingridents` vs
/// `Ingrident`) and the category reference (`Categoryid` vs `CategoryId`);
/// aliases accept either. Missing ingredient/instruction arrays are
/// normalized to empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeWire {
    #[serde(rename = "Id")]
    pub id: RecipeId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "Instructions", default)]
    pub instructions: Vec<String>,
    #[serde(rename = "Ingridents", alias = "Ingrident", default)]
    pub ingredients: Vec<IngredientWire>,
    #[serde(rename = "Difficulty")]
    pub difficulty: Difficulty,
    #[serde(rename = "Duration")]
    pub duration: u32,
    #[serde(rename = "Categoryid", alias = "CategoryId")]
    pub category_id: CategoryId,
    #[serde(rename = "UserId")]
    pub user_id: UserId,
    #[serde(rename = "UserName", default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(rename = "Img", default)]
    pub img: String,
}

/// A recipe creation payload; the server assigns `Id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRecipeWire {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Instructions")]
    pub instructions: Vec<String>,
    #[serde(rename = "Ingridents")]
    pub ingredients: Vec<IngredientWire>,
    #[serde(rename = "Difficulty")]
    pub difficulty: Difficulty,
    #[serde(rename = "Duration")]
    pub duration: u32,
    #[serde(rename = "Categoryid")]
    pub category_id: CategoryId,
    #[serde(rename = "UserId")]
    pub user_id: UserId,
    #[serde(rename = "Img")]
    pub img: String,
}

/// A category as the server shapes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryWire {
    #[serde(rename = "Id")]
    pub id: CategoryId,
    #[serde(rename = "Name")]
    pub name: String,
}

/// A category creation payload; the server assigns `Id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewCategoryWire {
    #[serde(rename = "Name")]
    pub name: String,
}

/// A user as the server returns it. Contact fields may be absent on some
/// responses; they default to empty. Any `Password` field in the response
/// is deliberately not represented and is dropped on deserialization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserWire {
    #[serde(rename = "Id")]
    pub id: UserId,
    #[serde(rename = "Name", default)]
    pub name: String,
    #[serde(rename = "UserName", alias = "Username", default)]
    pub user_name: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Phone", default)]
    pub phone: String,
    #[serde(rename = "Tz", default)]
    pub national_id: String,
}

/// Login payload.
#[derive(Debug, Clone, Serialize)]
pub struct CredentialsWire {
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "Password")]
    pub password: String,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationWire {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "UserName")]
    pub user_name: String,
    #[serde(rename = "Password")]
    pub password: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Phone")]
    pub phone: String,
    #[serde(rename = "Tz")]
    pub national_id: String,
}

/// A shopping-list item as the server shapes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItemWire {
    #[serde(rename = "Id")]
    pub id: ShoppingItemId,
    #[serde(rename = "UserId")]
    pub user_id: UserId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Count")]
    pub count: f64,
    #[serde(rename = "Type")]
    pub unit: String,
}

/// A shopping-item creation payload; the server assigns `Id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewShoppingItemWire {
    #[serde(rename = "UserId")]
    pub user_id: UserId,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Count")]
    pub count: f64,
    #[serde(rename = "Type")]
    pub unit: String,
}

/// Optional error body on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_wire_accepts_either_ingredient_spelling() {
        let canonical = r#"{
            "Id": 1, "Name": "Soup", "Description": "d", "Instructions": ["x"],
            "Ingridents": [{"Name": "water", "Count": 1.0, "Type": "liter"}],
            "Difficulty": 1, "Duration": 20, "Categoryid": 3, "UserId": 9, "Img": ""
        }"#;
        let alternate = r#"{
            "Id": 1, "Name": "Soup", "Description": "d", "Instructions": ["x"],
            "Ingrident": [{"Name": "water", "Count": 1.0, "Type": "liter"}],
            "Difficulty": 1, "Duration": 20, "CategoryId": 3, "UserId": 9, "Img": ""
        }"#;

        let a: RecipeWire = serde_json::from_str(canonical).unwrap();
        let b: RecipeWire = serde_json::from_str(alternate).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.ingredients.len(), 1);
        assert_eq!(a.category_id, CategoryId::new(3));
    }

    #[test]
    fn test_recipe_wire_missing_arrays_default_empty() {
        let json = r#"{
            "Id": 2, "Name": "Toast",
            "Difficulty": 2, "Duration": 5, "Categoryid": 1, "UserId": 4
        }"#;
        let wire: RecipeWire = serde_json::from_str(json).unwrap();
        assert!(wire.ingredients.is_empty());
        assert!(wire.instructions.is_empty());
        assert!(wire.description.is_empty());
        assert!(wire.img.is_empty());
    }

    #[test]
    fn test_recipe_wire_serializes_server_names() {
        let wire = RecipeWire {
            id: RecipeId::new(1),
            name: "Soup".to_string(),
            description: String::new(),
            instructions: vec![],
            ingredients: vec![],
            difficulty: Difficulty::Easy,
            duration: 20,
            category_id: CategoryId::new(3),
            user_id: UserId::new(9),
            user_name: None,
            img: PLACEHOLDER_IMAGE.to_string(),
        };
        let json = serde_json::to_value(&wire).unwrap();
        assert_eq!(json["Categoryid"], 3);
        assert!(json.get("Ingridents").is_some());
        assert!(json.get("UserName").is_none());
    }

    #[test]
    fn test_user_wire_drops_password_and_defaults_contact_fields() {
        let json = r#"{"Id": 7, "Name": "Dana", "UserName": "dana", "Password": "hunter2"}"#;
        let wire: UserWire = serde_json::from_str(json).unwrap();
        assert_eq!(wire.user_name, "dana");
        assert!(wire.email.is_empty());
        // No Password field exists on the type to leak
        let debug = format!("{wire:?}");
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_error_body_tolerates_missing_message() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.message.is_none());
        let body: ErrorBody = serde_json::from_str(r#"{"message": "nope"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("nope"));
    }
}
