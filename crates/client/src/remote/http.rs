//! Reqwest-backed implementation of [`RecordService`].

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, instrument};
use url::Url;

use recipe_box_core::{Category, Recipe, RecipeId, ShoppingItem, ShoppingItemId, User, UserId};

use crate::config::Config;
use crate::error::ApiError;

use super::conversions::{
    category_from_wire, credentials_to_wire, new_recipe_to_wire, new_shopping_item_to_wire,
    recipe_from_wire, recipe_to_wire, registration_to_wire, shopping_item_from_wire,
    shopping_item_to_wire, user_from_wire,
};
use super::wire::{CategoryWire, ErrorBody, NewCategoryWire, RecipeWire, ShoppingItemWire, UserWire};
use super::{Credentials, NewRecipe, NewShoppingItem, RecordService, Registration};

/// Route serving both login and registration, spelled as the server
/// deploys it.
const AUTH_ROUTE: &str = "api/user/sighin";

/// JSON-over-HTTP client for the remote record service.
///
/// Each call is request-scoped: no de-duplication of concurrent identical
/// requests, no retries. Failures surface as [`ApiError`] values which the
/// record store converts to displayable strings.
#[derive(Debug, Clone)]
pub struct HttpRecordService {
    client: reqwest::Client,
    base_url: Url,
}

impl HttpRecordService {
    /// Create a client against the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.api_base_url.clone(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Check the status and parse the body, preferring the server's own
    /// `message` on failure and falling back to `context`.
    async fn handle<T: DeserializeOwned>(
        response: reqwest::Response,
        context: &str,
    ) -> Result<T, ApiError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| context.to_string());
            error!(status = %status, %message, "record service returned non-success status");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| {
            error!(
                error = %e,
                body = %text.chars().take(200).collect::<String>(),
                "failed to parse record service response"
            );
            ApiError::Parse(e)
        })
    }

    /// Check the status of a response whose body carries no record.
    async fn handle_no_content(response: reqwest::Response, context: &str) -> Result<(), ApiError> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| context.to_string());
            error!(status = %status, %message, "record service returned non-success status");
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = self.client.get(self.endpoint(path)).send().await?;
        Self::handle(response, context).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        context: &str,
    ) -> Result<T, ApiError> {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;
        Self::handle(response, context).await
    }

    async fn post_no_content(&self, path: &str, context: &str) -> Result<(), ApiError> {
        let response = self.client.post(self.endpoint(path)).send().await?;
        Self::handle_no_content(response, context).await
    }
}

#[async_trait]
impl RecordService for HttpRecordService {
    #[instrument(skip(self))]
    async fn list_recipes(&self) -> Result<Vec<Recipe>, ApiError> {
        let wires: Vec<RecipeWire> = self
            .get_json("api/recipe", "failed to load recipes")
            .await?;
        Ok(wires.into_iter().map(recipe_from_wire).collect())
    }

    #[instrument(skip(self, recipe), fields(name = %recipe.name))]
    async fn create_recipe(&self, recipe: &NewRecipe) -> Result<Recipe, ApiError> {
        let wire: RecipeWire = self
            .post_json(
                "api/recipe",
                &new_recipe_to_wire(recipe),
                "failed to add the recipe",
            )
            .await?;
        Ok(recipe_from_wire(wire))
    }

    #[instrument(skip(self, recipe), fields(id = %recipe.id))]
    async fn update_recipe(&self, recipe: &Recipe) -> Result<Recipe, ApiError> {
        let wire: RecipeWire = self
            .post_json(
                "api/recipe/edit",
                &recipe_to_wire(recipe),
                "failed to update the recipe",
            )
            .await?;
        Ok(recipe_from_wire(wire))
    }

    #[instrument(skip(self))]
    async fn delete_recipe(&self, id: RecipeId) -> Result<(), ApiError> {
        self.post_no_content(
            &format!("api/recipe/delete/{id}"),
            "failed to delete the recipe",
        )
        .await
    }

    #[instrument(skip(self))]
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let wires: Vec<CategoryWire> = self
            .get_json("api/category", "failed to load categories")
            .await?;
        Ok(wires.into_iter().map(category_from_wire).collect())
    }

    #[instrument(skip(self))]
    async fn create_category(&self, name: &str) -> Result<Category, ApiError> {
        let wire: CategoryWire = self
            .post_json(
                "api/category",
                &NewCategoryWire {
                    name: name.to_string(),
                },
                "failed to add the category",
            )
            .await?;
        Ok(category_from_wire(wire))
    }

    #[instrument(skip(self, credentials), fields(user_name = %credentials.user_name))]
    async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let result: Result<UserWire, ApiError> = self
            .post_json(AUTH_ROUTE, &credentials_to_wire(credentials), "login failed")
            .await;

        match result {
            Ok(wire) => Ok(user_from_wire(wire)),
            // A 401 carries no useful body; substitute a displayable message
            Err(err) if err.is_unauthorized() => Err(ApiError::Server {
                status: 401,
                message: "invalid user name or password".to_string(),
            }),
            Err(err) => Err(err),
        }
    }

    #[instrument(skip(self, registration), fields(user_name = %registration.user_name))]
    async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        let wire: UserWire = self
            .post_json(
                AUTH_ROUTE,
                &registration_to_wire(registration),
                "registration failed",
            )
            .await?;
        Ok(user_from_wire(wire))
    }

    #[instrument(skip(self))]
    async fn list_shopping_items(&self, user: UserId) -> Result<Vec<ShoppingItem>, ApiError> {
        let wires: Vec<ShoppingItemWire> = self
            .get_json(&format!("api/bay/{user}"), "failed to load the shopping list")
            .await?;
        Ok(wires.into_iter().map(shopping_item_from_wire).collect())
    }

    #[instrument(skip(self, items), fields(count = items.len()))]
    async fn add_shopping_items(
        &self,
        items: &[NewShoppingItem],
    ) -> Result<Vec<ShoppingItem>, ApiError> {
        let payload: Vec<_> = items.iter().map(new_shopping_item_to_wire).collect();
        let wires: Vec<ShoppingItemWire> = self
            .post_json("api/bay", &payload, "failed to add shopping items")
            .await?;
        Ok(wires.into_iter().map(shopping_item_from_wire).collect())
    }

    #[instrument(skip(self, item), fields(id = %item.id))]
    async fn update_shopping_item(&self, item: &ShoppingItem) -> Result<ShoppingItem, ApiError> {
        let wire: ShoppingItemWire = self
            .post_json(
                "api/bay/edit",
                &shopping_item_to_wire(item),
                "failed to update the shopping item",
            )
            .await?;
        Ok(shopping_item_from_wire(wire))
    }

    #[instrument(skip(self))]
    async fn delete_shopping_item(
        &self,
        user: UserId,
        item: ShoppingItemId,
    ) -> Result<(), ApiError> {
        self.post_no_content(
            &format!("api/bay/delete/{user}/{item}"),
            "failed to delete the shopping item",
        )
        .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = Config::default();
        let service = HttpRecordService::new(&config).unwrap();
        assert_eq!(
            service.endpoint("api/recipe"),
            "http://localhost:8080/api/recipe"
        );
        assert_eq!(
            service.endpoint("api/bay/delete/3/7"),
            "http://localhost:8080/api/bay/delete/3/7"
        );
    }
}
