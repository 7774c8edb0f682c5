//! Shopping-list commands. All of them require a session.
//!
//! # Usage
//!
//! ```bash
//! recipe-box shopping list
//! recipe-box shopping add -n tahini -c 1 --unit jar
//! recipe-box shopping edit 7 --count 2
//! recipe-box shopping remove 7
//! ```

use recipe_box_client::error::ApiError;
use recipe_box_client::remote::NewShoppingItem;
use recipe_box_core::ShoppingItemId;

use super::{CliError, Context};

/// Show the signed-in user's shopping list.
pub async fn list() -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    let user = ctx.session_user()?;
    ctx.store.shopping.fetch_all(&ctx.service, user).await?;

    if ctx.store.shopping.all().is_empty() {
        println!("The shopping list is empty.");
        return Ok(());
    }
    for item in ctx.store.shopping.all() {
        let id = format!("#{}", item.id);
        println!("{id:<5} {:<30} {} {}", item.name, item.count, item.unit);
    }
    Ok(())
}

/// Add one item to the shopping list.
pub async fn add(name: &str, count: f64, unit: &str) -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    let user = ctx.session_user()?;
    ctx.store
        .shopping
        .add(
            &ctx.service,
            &[NewShoppingItem {
                owner_id: user,
                name: name.to_string(),
                count,
                unit: unit.to_string(),
            }],
        )
        .await?;

    println!("Added {count} {unit} {name}.");
    Ok(())
}

/// Edit an item on the shopping list; only the given flags change.
pub async fn edit(
    id: i32,
    name: Option<String>,
    count: Option<f64>,
    unit: Option<String>,
) -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    let user = ctx.session_user()?;

    ctx.store.shopping.fetch_all(&ctx.service, user).await?;
    let item_id = ShoppingItemId::new(id);
    let Some(existing) = ctx.store.shopping.all().iter().find(|i| i.id == item_id) else {
        return Err(ApiError::NotFound(format!("shopping item {id}")).into());
    };

    let mut item = existing.clone();
    if let Some(name) = name {
        item.name = name;
    }
    if let Some(count) = count {
        item.count = count;
    }
    if let Some(unit) = unit {
        item.unit = unit;
    }
    ctx.store.shopping.update(&ctx.service, &item).await?;

    println!("Updated item #{id}.");
    Ok(())
}

/// Remove an item from the shopping list.
pub async fn remove(id: i32) -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    let user = ctx.session_user()?;
    ctx.store
        .shopping
        .delete(&ctx.service, user, ShoppingItemId::new(id))
        .await?;

    println!("Removed item #{id}.");
    Ok(())
}
