//! Shared type definitions.
//!
//! # Modules
//!
//! - [`id`] - Type-safe ID newtypes via the `define_id!` macro
//! - [`difficulty`] - Recipe difficulty scale
//! - [`recipe`] - Recipe and ingredient entities
//! - [`category`] - Recipe category entity
//! - [`user`] - User entity
//! - [`shopping`] - Shopping-list item entity

pub mod category;
pub mod difficulty;
pub mod id;
pub mod recipe;
pub mod shopping;
pub mod user;

pub use category::Category;
pub use difficulty::{Difficulty, InvalidDifficulty};
pub use id::{CategoryId, RecipeId, ShoppingItemId, UserId};
pub use recipe::{Ingredient, Recipe};
pub use shopping::ShoppingItem;
pub use user::User;
