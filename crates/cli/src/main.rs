//! Recipe Box CLI - browse and manage recipes from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the recipe list (filters are optional)
//! recipe-box recipes list --search hummus --difficulty 2 --page 1
//!
//! # Show one recipe in full
//! recipe-box recipes show 5
//!
//! # Create and edit recipes (requires a session)
//! recipe-box recipes add -n "Hummus" -c 2 -g "chickpeas:500:grams" -i "Soak" -i "Blend"
//! recipe-box recipes edit 5 --duration 20
//!
//! # The six most recent recipes
//! recipe-box recipes recent
//!
//! # Sign in, inspect the session, sign out
//! recipe-box login -u dana -p s3cret
//! recipe-box whoami
//! recipe-box logout
//!
//! # Shopping list (requires a session)
//! recipe-box shopping list
//! recipe-box shopping add -n tahini -c 1 --unit jar
//! ```
//!
//! # Commands
//!
//! - `recipes` - List, show, add, edit, and delete recipes
//! - `categories` - List and add categories
//! - `shopping` - Manage the signed-in user's shopping list
//! - `login` / `register` / `logout` / `whoami` - Session management
//!
//! # Environment Variables
//!
//! - `RECIPE_BOX_API_BASE_URL` - Base URL of the remote record service
//! - `RECIPE_BOX_SESSION_DIR` - Directory for the durable session slot

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

use commands::recipes::{AddArgs, EditArgs, ListArgs};

#[derive(Parser)]
#[command(name = "recipe-box")]
#[command(author, version, about = "Recipe Box command-line client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and manage recipes
    Recipes {
        #[command(subcommand)]
        action: RecipeAction,
    },
    /// Browse and manage categories
    Categories {
        #[command(subcommand)]
        action: CategoryAction,
    },
    /// Manage the signed-in user's shopping list
    Shopping {
        #[command(subcommand)]
        action: ShoppingAction,
    },
    /// Sign in and persist the session
    Login {
        /// Login name
        #[arg(short, long)]
        user: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and persist the session
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Login name
        #[arg(short, long)]
        user: String,

        /// Password
        #[arg(short, long)]
        password: String,

        /// Contact email address
        #[arg(short, long)]
        email: String,

        /// Contact phone number
        #[arg(long, default_value = "")]
        phone: String,

        /// National ID number
        #[arg(long, default_value = "")]
        national_id: String,
    },
    /// End the session
    Logout,
    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand)]
enum RecipeAction {
    /// List recipes, filtered and paginated
    List(ListArgs),
    /// Show one recipe in full
    Show {
        /// Recipe id
        id: i32,
    },
    /// Show the most recent recipes
    Recent,
    /// Create a recipe you own
    Add(AddArgs),
    /// Edit a recipe you own
    Edit(EditArgs),
    /// Delete a recipe you own
    Delete {
        /// Recipe id
        id: i32,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// List all categories
    List,
    /// Add a category
    Add {
        /// Category name
        name: String,
    },
}

#[derive(Subcommand)]
enum ShoppingAction {
    /// Show the shopping list
    List,
    /// Add an item
    Add {
        /// Ingredient or product name
        #[arg(short, long)]
        name: String,

        /// Quantity to buy
        #[arg(short, long, default_value_t = 1.0)]
        count: f64,

        /// Unit label for the quantity
        #[arg(short, long, default_value = "pcs")]
        unit: String,
    },
    /// Edit an item
    Edit {
        /// Item id
        id: i32,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New quantity
        #[arg(short, long)]
        count: Option<f64>,

        /// New unit label
        #[arg(short, long)]
        unit: Option<String>,
    },
    /// Remove an item
    Remove {
        /// Item id
        id: i32,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Recipes { action } => match action {
            RecipeAction::List(args) => commands::recipes::list(args).await?,
            RecipeAction::Show { id } => commands::recipes::show(id).await?,
            RecipeAction::Recent => commands::recipes::recent().await?,
            RecipeAction::Add(args) => commands::recipes::add(args).await?,
            RecipeAction::Edit(args) => commands::recipes::edit(args).await?,
            RecipeAction::Delete { id } => commands::recipes::delete(id).await?,
        },
        Commands::Categories { action } => match action {
            CategoryAction::List => commands::categories::list().await?,
            CategoryAction::Add { name } => commands::categories::add(&name).await?,
        },
        Commands::Shopping { action } => match action {
            ShoppingAction::List => commands::shopping::list().await?,
            ShoppingAction::Add { name, count, unit } => {
                commands::shopping::add(&name, count, &unit).await?;
            }
            ShoppingAction::Edit {
                id,
                name,
                count,
                unit,
            } => {
                commands::shopping::edit(id, name, count, unit).await?;
            }
            ShoppingAction::Remove { id } => commands::shopping::remove(id).await?,
        },
        Commands::Login { user, password } => commands::auth::login(&user, password).await?,
        Commands::Register {
            name,
            user,
            password,
            email,
            phone,
            national_id,
        } => {
            commands::auth::register(&name, &user, password, &email, &phone, &national_id).await?;
        }
        Commands::Logout => commands::auth::logout()?,
        Commands::Whoami => commands::auth::whoami()?,
    }
    Ok(())
}
