//! Category commands.
//!
//! # Usage
//!
//! ```bash
//! recipe-box categories list
//! recipe-box categories add "Desserts"
//! ```

use super::{CliError, Context};

/// List all categories.
pub async fn list() -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    ctx.store.categories.fetch_all(&ctx.service).await?;

    if ctx.store.categories.all().is_empty() {
        println!("No categories yet.");
        return Ok(());
    }
    for category in ctx.store.categories.all() {
        let id = format!("#{}", category.id);
        println!("{id:<5} {}", category.name);
    }
    Ok(())
}

/// Add a category.
pub async fn add(name: &str) -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    ctx.store.categories.add(&ctx.service, name).await?;

    println!("Added category {name}.");
    Ok(())
}
