//! Recipe browsing and management commands.
//!
//! # Usage
//!
//! ```bash
//! recipe-box recipes list --search hummus --max-duration 45
//! recipe-box recipes show 5
//! recipe-box recipes recent
//! recipe-box recipes add -n "Hummus" -c 2 -g "chickpeas:500:grams" -i "Soak" -i "Blend"
//! recipe-box recipes edit 5 --duration 20
//! recipe-box recipes delete 5
//! ```
//!
//! Ingredient flags use the `name:count:unit` form, repeated once per line.
//! `edit` only touches the fields whose flags were given; repeated flags
//! (`--instruction`, `--ingredient`) replace the whole list when present.

use recipe_box_client::error::ApiError;
use recipe_box_client::pipeline::{self, DEFAULT_DURATION_RANGE, LIST_PAGE_SIZE, RecipeFilters};
use recipe_box_client::remote::NewRecipe;
use recipe_box_core::{CategoryId, Difficulty, Ingredient, Recipe, RecipeId, UserId};

use super::{CliError, Context};

/// Filter and page flags of `recipes list`.
#[derive(clap::Args)]
pub struct ListArgs {
    /// Free-text search over name and description
    #[arg(short, long)]
    pub search: Option<String>,

    /// Restrict to one category id
    #[arg(short, long)]
    pub category: Option<i32>,

    /// Difficulty level (1 easy .. 4 hard)
    #[arg(short, long)]
    pub difficulty: Option<u8>,

    /// Minimum duration in minutes
    #[arg(long)]
    pub min_duration: Option<u32>,

    /// Maximum duration in minutes
    #[arg(long)]
    pub max_duration: Option<u32>,

    /// Restrict to one owner id
    #[arg(short, long)]
    pub owner: Option<i32>,

    /// Page number (clamped to the available range)
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,
}

impl ListArgs {
    fn filters(&self) -> Result<RecipeFilters, CliError> {
        let difficulty = self.difficulty.map(Difficulty::try_from).transpose()?;
        let (default_min, default_max) = DEFAULT_DURATION_RANGE;
        Ok(RecipeFilters {
            search: self.search.clone().unwrap_or_default(),
            category: self.category.map(CategoryId::new),
            difficulty,
            duration: (
                self.min_duration.unwrap_or(default_min),
                self.max_duration.unwrap_or(default_max),
            ),
            owner: self.owner.map(UserId::new),
        })
    }
}

/// Field flags of `recipes add`.
#[derive(clap::Args)]
pub struct AddArgs {
    /// Recipe name
    #[arg(short, long)]
    pub name: String,

    /// Short description
    #[arg(long, default_value = "")]
    pub description: String,

    /// Preparation step, repeatable in order
    #[arg(short = 'i', long = "instruction")]
    pub instructions: Vec<String>,

    /// Ingredient line as name:count:unit, repeatable
    #[arg(short = 'g', long = "ingredient")]
    pub ingredients: Vec<String>,

    /// Difficulty level (1 easy .. 4 hard)
    #[arg(short, long, default_value_t = 1)]
    pub difficulty: u8,

    /// Preparation time in minutes
    #[arg(long, default_value_t = 30)]
    pub duration: u32,

    /// Category id
    #[arg(short, long)]
    pub category: i32,

    /// Image URL
    #[arg(long)]
    pub image: Option<String>,
}

/// Field flags of `recipes edit`; unset flags leave the field as is.
#[derive(clap::Args)]
pub struct EditArgs {
    /// Recipe id
    pub id: i32,

    /// New recipe name
    #[arg(short, long)]
    pub name: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// Replacement preparation step, repeatable in order
    #[arg(short = 'i', long = "instruction")]
    pub instructions: Vec<String>,

    /// Replacement ingredient line as name:count:unit, repeatable
    #[arg(short = 'g', long = "ingredient")]
    pub ingredients: Vec<String>,

    /// New difficulty level (1 easy .. 4 hard)
    #[arg(short, long)]
    pub difficulty: Option<u8>,

    /// New preparation time in minutes
    #[arg(long)]
    pub duration: Option<u32>,

    /// New category id
    #[arg(short, long)]
    pub category: Option<i32>,

    /// New image URL
    #[arg(long)]
    pub image: Option<String>,
}

/// List recipes, filtered and paginated.
///
/// The requested page is clamped into the available range, so `--page 999`
/// shows the last page rather than an empty one.
pub async fn list(args: ListArgs) -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    ctx.store.recipes.fetch_all(&ctx.service).await?;

    let filters = args.filters()?;
    let recipes = ctx.store.recipes.all();
    let filtered_count = pipeline::filter(recipes, &filters).count();

    if filtered_count == 0 {
        println!("No recipes match.");
        return Ok(());
    }

    let total = pipeline::total_pages(filtered_count, LIST_PAGE_SIZE);
    let page = args.page.clamp(1, total);
    for recipe in pipeline::page(recipes, &filters, page, LIST_PAGE_SIZE) {
        print_row(recipe);
    }
    println!();
    println!("Page {page} of {total} ({filtered_count} recipes)");
    Ok(())
}

/// Show one recipe in full.
pub async fn show(id: i32) -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    ctx.store
        .recipes
        .fetch_by_id(&ctx.service, RecipeId::new(id))
        .await?;

    // fetch_by_id only succeeds once the selection is set
    let Some(recipe) = ctx.store.recipes.selected() else {
        return Ok(());
    };

    println!("{} (#{})", recipe.name, recipe.id);
    if let Some(owner) = &recipe.owner_name {
        println!("  by {owner}");
    }
    println!(
        "  {} | {} min | category {}",
        recipe.difficulty, recipe.duration_minutes, recipe.category_id
    );
    if !recipe.description.is_empty() {
        println!("  {}", recipe.description);
    }
    if !recipe.ingredients.is_empty() {
        println!();
        println!("Ingredients:");
        for ingredient in &recipe.ingredients {
            println!(
                "  - {} {} {}",
                ingredient.count, ingredient.unit, ingredient.name
            );
        }
    }
    if !recipe.instructions.is_empty() {
        println!();
        println!("Instructions:");
        for (index, step) in recipe.instructions.iter().enumerate() {
            println!("  {}. {step}", index + 1);
        }
    }
    Ok(())
}

/// Show the most recent recipes.
pub async fn recent() -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    ctx.store.recipes.fetch_recent(&ctx.service).await?;

    if ctx.store.recipes.recent().is_empty() {
        println!("No recipes yet.");
        return Ok(());
    }
    for recipe in ctx.store.recipes.recent() {
        print_row(recipe);
    }
    Ok(())
}

/// Create a recipe owned by the signed-in user.
pub async fn add(args: AddArgs) -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    let owner = ctx.session_user()?;

    let recipe = NewRecipe {
        name: args.name,
        description: args.description,
        instructions: args.instructions,
        ingredients: parse_ingredients(&args.ingredients)?,
        difficulty: Difficulty::try_from(args.difficulty)?,
        duration_minutes: args.duration,
        category_id: CategoryId::new(args.category),
        owner_id: owner,
        image_url: args.image,
    };
    let id = ctx.store.recipes.create(&ctx.service, recipe).await?;

    println!("Added recipe #{id}.");
    Ok(())
}

/// Edit a recipe the signed-in user owns; only the given flags change.
pub async fn edit(args: EditArgs) -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    let acting_user = ctx.session_user()?;

    ctx.store.recipes.fetch_all(&ctx.service).await?;
    let id = RecipeId::new(args.id);
    let Some(existing) = ctx.store.recipes.all().iter().find(|r| r.id == id) else {
        return Err(ApiError::NotFound(format!("recipe {id}")).into());
    };

    let mut recipe = existing.clone();
    apply_edits(&mut recipe, &args)?;
    ctx.store
        .recipes
        .update(&ctx.service, acting_user, recipe)
        .await?;

    println!("Updated recipe #{id}.");
    Ok(())
}

/// Delete a recipe the signed-in user owns.
pub async fn delete(id: i32) -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    let acting_user = ctx.session_user()?;

    // The snapshot backs the local ownership check
    ctx.store.recipes.fetch_all(&ctx.service).await?;
    ctx.store
        .recipes
        .delete(&ctx.service, acting_user, RecipeId::new(id))
        .await?;

    println!("Deleted recipe #{id}.");
    Ok(())
}

fn apply_edits(recipe: &mut Recipe, args: &EditArgs) -> Result<(), CliError> {
    if let Some(name) = &args.name {
        recipe.name = name.clone();
    }
    if let Some(description) = &args.description {
        recipe.description = description.clone();
    }
    if !args.instructions.is_empty() {
        recipe.instructions = args.instructions.clone();
    }
    if !args.ingredients.is_empty() {
        recipe.ingredients = parse_ingredients(&args.ingredients)?;
    }
    if let Some(level) = args.difficulty {
        recipe.difficulty = Difficulty::try_from(level)?;
    }
    if let Some(duration) = args.duration {
        recipe.duration_minutes = duration;
    }
    if let Some(category) = args.category {
        recipe.category_id = CategoryId::new(category);
    }
    if let Some(image) = &args.image {
        recipe.image_url = Some(image.clone());
    }
    Ok(())
}

fn parse_ingredients(raw: &[String]) -> Result<Vec<Ingredient>, CliError> {
    raw.iter().map(|line| parse_ingredient(line)).collect()
}

fn parse_ingredient(raw: &str) -> Result<Ingredient, CliError> {
    let invalid = || CliError::InvalidIngredient(raw.to_string());
    let mut parts = raw.splitn(3, ':');
    let (Some(name), Some(count), Some(unit)) = (parts.next(), parts.next(), parts.next()) else {
        return Err(invalid());
    };
    let name = name.trim();
    let unit = unit.trim();
    if name.is_empty() || unit.is_empty() {
        return Err(invalid());
    }
    let count: f64 = count.trim().parse().map_err(|_| invalid())?;
    Ok(Ingredient {
        name: name.to_string(),
        count,
        unit: unit.to_string(),
    })
}

fn print_row(recipe: &Recipe) {
    let id = format!("#{}", recipe.id);
    println!(
        "{id:<5} {:<30} {:<12} {:>4} min",
        recipe.name,
        recipe.difficulty.label(),
        recipe.duration_minutes
    );
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: RecipeId::new(5),
            name: "Hummus".to_string(),
            description: "Creamy".to_string(),
            instructions: vec!["Soak".to_string(), "Blend".to_string()],
            ingredients: vec![Ingredient {
                name: "chickpeas".to_string(),
                count: 500.0,
                unit: "grams".to_string(),
            }],
            difficulty: Difficulty::Easy,
            duration_minutes: 30,
            category_id: CategoryId::new(1),
            owner_id: UserId::new(3),
            owner_name: None,
            image_url: None,
        }
    }

    #[test]
    fn test_parse_ingredient_line() {
        let ingredient = parse_ingredient("chickpeas:500:grams").unwrap();
        assert_eq!(ingredient.name, "chickpeas");
        assert!((ingredient.count - 500.0).abs() < f64::EPSILON);
        assert_eq!(ingredient.unit, "grams");

        // Whitespace around the separators is tolerated
        let ingredient = parse_ingredient("olive oil : 2 : tbsp").unwrap();
        assert_eq!(ingredient.name, "olive oil");
        assert_eq!(ingredient.unit, "tbsp");
    }

    #[test]
    fn test_parse_ingredient_rejects_malformed_lines() {
        assert!(parse_ingredient("chickpeas").is_err());
        assert!(parse_ingredient("chickpeas:lots:grams").is_err());
        assert!(parse_ingredient(":500:grams").is_err());
        assert!(parse_ingredient("chickpeas:500:").is_err());
    }

    #[test]
    fn test_edit_touches_only_the_given_fields() {
        let mut recipe = sample_recipe();
        let args = EditArgs {
            id: 5,
            name: None,
            description: None,
            instructions: vec![],
            ingredients: vec![],
            difficulty: Some(3),
            duration: Some(20),
            category: None,
            image: None,
        };
        apply_edits(&mut recipe, &args).unwrap();

        assert_eq!(recipe.difficulty, Difficulty::Challenging);
        assert_eq!(recipe.duration_minutes, 20);
        // Everything else is untouched
        assert_eq!(recipe.name, "Hummus");
        assert_eq!(recipe.instructions.len(), 2);
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.category_id, CategoryId::new(1));
    }

    #[test]
    fn test_edit_replaces_repeated_lists_wholesale() {
        let mut recipe = sample_recipe();
        let args = EditArgs {
            id: 5,
            name: Some("Extra Hummus".to_string()),
            description: None,
            instructions: vec!["Blend longer".to_string()],
            ingredients: vec!["tahini:2:tbsp".to_string()],
            difficulty: None,
            duration: None,
            category: None,
            image: None,
        };
        apply_edits(&mut recipe, &args).unwrap();

        assert_eq!(recipe.name, "Extra Hummus");
        assert_eq!(recipe.instructions, vec!["Blend longer".to_string()]);
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "tahini");
    }

    #[test]
    fn test_edit_rejects_invalid_difficulty() {
        let mut recipe = sample_recipe();
        let args = EditArgs {
            id: 5,
            name: None,
            description: None,
            instructions: vec![],
            ingredients: vec![],
            difficulty: Some(9),
            duration: None,
            category: None,
            image: None,
        };
        assert!(apply_edits(&mut recipe, &args).is_err());
    }
}
