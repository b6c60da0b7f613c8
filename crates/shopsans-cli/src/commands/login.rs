//! `shopsans login` command implementation
//!
//! The session cookie only lives as long as the client, so this command is
//! mostly a connectivity and credential check; listing commands work against
//! backends that leave the demo session open.

use crate::error::Result;
use colored::Colorize;
use shopsans_api::ApiClient;
use tracing::debug;

/// Run the login command
pub async fn run(server_url: String, email: &str, password: &str) -> Result<()> {
    let client = ApiClient::new(server_url)?;

    debug!(email = %email, "Logging in");

    client.login(email, password).await?;

    println!("{}", "Logged in.".green());

    Ok(())
}
