//! Session management commands.
//!
//! # Usage
//!
//! ```bash
//! recipe-box login -u dana -p s3cret
//! recipe-box register -n "Dana Levi" -u dana -p s3cret -e dana@example.com
//! recipe-box whoami
//! recipe-box logout
//! ```
//!
//! Login and register persist the session to the durable slot under
//! `RECIPE_BOX_SESSION_DIR`; later commands restore it from there.

use recipe_box_client::remote::{Credentials, Registration};

use super::{CliError, Context};

/// Sign in and persist the session.
pub async fn login(user: &str, password: String) -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    ctx.store
        .auth
        .login(
            &ctx.service,
            Credentials {
                user_name: user.to_string(),
                password: password.into(),
            },
        )
        .await?;

    // login only succeeds once the session is established
    if let Some(user) = ctx.store.auth.current_user() {
        println!("Signed in as {} (#{}).", user.name, user.id);
    }
    Ok(())
}

/// Create an account and persist the session.
pub async fn register(
    name: &str,
    user: &str,
    password: String,
    email: &str,
    phone: &str,
    national_id: &str,
) -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    ctx.store
        .auth
        .register(
            &ctx.service,
            Registration {
                name: name.to_string(),
                user_name: user.to_string(),
                password: password.into(),
                email: email.to_string(),
                phone: phone.to_string(),
                national_id: national_id.to_string(),
            },
        )
        .await?;

    if let Some(user) = ctx.store.auth.current_user() {
        println!("Account created. Signed in as {} (#{}).", user.name, user.id);
    }
    Ok(())
}

/// End the session and clear the durable slot.
pub fn logout() -> Result<(), CliError> {
    let mut ctx = Context::load()?;
    if !ctx.store.auth.is_authenticated() {
        println!("Not signed in.");
        return Ok(());
    }
    ctx.store.auth.logout();
    println!("Signed out.");
    Ok(())
}

/// Show the signed-in user.
pub fn whoami() -> Result<(), CliError> {
    let ctx = Context::load()?;
    match ctx.store.auth.current_user() {
        Some(user) => println!("{} (#{}) <{}>", user.name, user.id, user.email),
        None => println!("Not signed in."),
    }
    Ok(())
}
