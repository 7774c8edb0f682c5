//! Remote record service boundary.
//!
//! # Architecture
//!
//! - The server is the source of truth - no local sync, direct API calls
//! - [`RecordService`] is the seam the record store is written against; the
//!   production implementation is [`HttpRecordService`] (JSON over HTTP
//!   against a fixed base host)
//! - The server's field spellings differ from the client entity shapes
//!   (`Ingridents`, `Categoryid`, `UserName`, ...); translation is
//!   centralized in the private `wire` and `conversions` modules and never
//!   leaks inward
//!
//! # Example
//!
//! ```rust,ignore
//! use recipe_box_client::remote::{HttpRecordService, RecordService};
//!
//! let service = HttpRecordService::new(&config)?;
//! let recipes = service.list_recipes().await?;
//! ```

mod conversions;
mod http;
mod wire;

pub use http::HttpRecordService;

use async_trait::async_trait;
use secrecy::SecretString;

use recipe_box_core::{
    Category, CategoryId, Difficulty, Ingredient, Recipe, RecipeId, ShoppingItem, ShoppingItemId,
    User, UserId,
};

use crate::error::ApiError;

/// Login credentials. The password is write-only: it is exposed exactly
/// once, when the wire payload is built.
#[derive(Clone)]
pub struct Credentials {
    /// Login name.
    pub user_name: String,
    /// Password, redacted from `Debug` output.
    pub password: SecretString,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("user_name", &self.user_name)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Registration payload for a new user account.
#[derive(Clone)]
pub struct Registration {
    /// Display name.
    pub name: String,
    /// Login name.
    pub user_name: String,
    /// Password, redacted from `Debug` output.
    pub password: SecretString,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// National ID number.
    pub national_id: String,
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("user_name", &self.user_name)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("national_id", &self.national_id)
            .finish()
    }
}

/// A recipe to be created; the server assigns the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRecipe {
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
    /// Image URL; the boundary substitutes the server's placeholder when
    /// absent.
    pub image_url: Option<String>,
}

/// A shopping-list item to be created; the server assigns the identity.
#[derive(Debug, Clone, PartialEq)]
pub struct NewShoppingItem {
    /// Owning user.
    pub owner_id: UserId,
    /// Ingredient or product name.
    pub name: String,
    /// Quantity to buy.
    pub count: f64,
    /// Unit label for the quantity.
    pub unit: String,
}

/// The remote record service consumed by the record store.
///
/// One method per operation the service exposes. Implementations translate
/// between wire and client entity shapes so callers never see server field
/// names.
#[async_trait]
pub trait RecordService: Send + Sync {
    /// Fetch the full recipe collection.
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError>;

    /// Create a recipe; returns the created record with its assigned id.
    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, ApiError>;

    /// Update a recipe; returns the updated record.
    async fn update_recipe(&self, recipe: &Recipe) -> Result<Recipe, ApiError>;

    /// Delete a recipe by id.
    async fn delete_recipe(&self, id: RecipeId) -> Result<(), ApiError>;

    /// Fetch the full category collection.
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError>;

    /// Create a category; returns the created record with its assigned id.
    async fn create_category(&self, name: &str) -> Result<Category, ApiError>;

    /// Authenticate and return the user record.
    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError>;

    /// Register a new account and return the created user record.
    async fn register(&self, registration: &Registration) -> Result<User, ApiError>;

    /// Fetch a user's shopping list.
    async fn list_shopping_items(&self, user: UserId) -> Result<Vec<ShoppingItem>, ApiError>;

    /// Add a batch of shopping items; returns the created records.
    async fn add_shopping_items(
        &self,
        items: &[NewShoppingItem],
    ) -> Result<Vec<ShoppingItem>, ApiError>;

    /// Update a shopping item; returns the updated record.
    async fn update_shopping_item(&self, item: &ShoppingItem) -> Result<ShoppingItem, ApiError>;

    /// Delete a shopping item, keyed by the (owner, item) pair.
    async fn delete_shopping_item(
        &self,
        user: UserId,
        item: ShoppingItemId,
    ) -> Result<(), ApiError>;
}
