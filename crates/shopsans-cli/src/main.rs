//! ShopSans CLI - Main entry point

use clap::Parser;
use shopsans_cli::{AnalyticsCommand, Cli, Commands, CustomerCommand, OrderCommand, ProductCommand};
use std::process;
use tracing::error;

#[tokio::main]
async fn main() {
    // .env files carry the local server URL during development
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    shopsans_cli::logging::init_logging(cli.verbose);

    if let Err(e) = execute_command(&cli).await {
        error!(error = %e, "Command failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Execute the CLI command
async fn execute_command(cli: &Cli) -> shopsans_cli::Result<()> {
    match &cli.command {
        Commands::Customers { command } => match command {
            CustomerCommand::List {
                query,
                page,
                page_size,
                format,
            } => {
                shopsans_cli::commands::customers::list(
                    cli.server_url.clone(),
                    query.clone(),
                    *page,
                    *page_size,
                    format,
                )
                .await
            }
            CustomerCommand::Get { id } => {
                shopsans_cli::commands::customers::get(cli.server_url.clone(), id).await
            }
        },

        Commands::Orders { command } => match command {
            OrderCommand::List {
                status,
                channel,
                page,
                page_size,
                format,
            } => {
                shopsans_cli::commands::orders::list(
                    cli.server_url.clone(),
                    status.clone(),
                    channel.clone(),
                    *page,
                    *page_size,
                    format,
                )
                .await
            }
        },

        Commands::Products { command } => match command {
            ProductCommand::List {
                query,
                page,
                page_size,
                format,
            } => {
                shopsans_cli::commands::products::list(
                    cli.server_url.clone(),
                    query.clone(),
                    *page,
                    *page_size,
                    format,
                )
                .await
            }
        },

        Commands::Analytics { command } => match command {
            None => shopsans_cli::commands::analytics::dashboard(cli.server_url.clone()).await,
            Some(AnalyticsCommand::Overview) => {
                shopsans_cli::commands::analytics::overview(cli.server_url.clone()).await
            }
            Some(AnalyticsCommand::Revenue) => {
                shopsans_cli::commands::analytics::revenue(cli.server_url.clone()).await
            }
            Some(AnalyticsCommand::Statuses) => {
                shopsans_cli::commands::analytics::statuses(cli.server_url.clone()).await
            }
        },

        Commands::Login { email, password } => {
            shopsans_cli::commands::login::run(cli.server_url.clone(), email, password).await
        }
    }
}
