//! ShopSans CLI Library
//!
//! Terminal front end for the ShopSans e-commerce back office.
//!
//! # Overview
//!
//! Each subcommand fetches from the backend through [`shopsans_api`] and
//! renders the result:
//!
//! - **Customers**: search and page through customers, inspect one with its
//!   account metrics (`shopsans customers list/get`)
//! - **Orders**: page through orders with status/channel filters
//!   (`shopsans orders list`)
//! - **Products**: search and page through the catalog
//!   (`shopsans products list`)
//! - **Analytics**: KPIs, daily revenue, and status breakdown
//!   (`shopsans analytics [overview|revenue|statuses]`)
//! - **Login**: establish the session cookie (`shopsans login`)

pub mod commands;
pub mod error;
pub mod format;
pub mod logging;

// Re-export commonly used types
pub use error::{CliError, Result};

use clap::{Parser, Subcommand};

/// ShopSans - e-commerce back-office terminal client
#[derive(Parser, Debug)]
#[command(name = "shopsans")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Back-office API server URL
    #[arg(
        long,
        env = "SHOPSANS_API_BASE",
        default_value = shopsans_api::DEFAULT_API_BASE,
        global = true
    )]
    pub server_url: String,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse customers
    Customers {
        #[command(subcommand)]
        command: CustomerCommand,
    },

    /// Browse orders
    Orders {
        #[command(subcommand)]
        command: OrderCommand,
    },

    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        command: ProductCommand,
    },

    /// Sales analytics (all sections unless one is selected)
    Analytics {
        #[command(subcommand)]
        command: Option<AnalyticsCommand>,
    },

    /// Authenticate and store the session cookie
    Login {
        /// Account email
        #[arg(short, long, default_value = "admin@demo.com")]
        email: String,

        /// Account password
        #[arg(short, long, default_value = "admin123")]
        password: String,
    },
}

/// Customer subcommands
#[derive(Subcommand, Debug)]
pub enum CustomerCommand {
    /// List customers
    List {
        /// Search text (name or email)
        #[arg(short, long)]
        query: Option<String>,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: i32,

        /// Results per page
        #[arg(long, default_value_t = 10)]
        page_size: i32,

        /// Output format (table, json, compact)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show one customer with account metrics
    Get {
        /// Customer id
        id: String,
    },
}

/// Order subcommands
#[derive(Subcommand, Debug)]
pub enum OrderCommand {
    /// List orders
    List {
        /// Filter by status
        #[arg(long, value_parser = ["pending", "paid", "shipped", "delivered", "cancelled"])]
        status: Option<String>,

        /// Filter by sales channel
        #[arg(long, value_parser = ["web", "mobile", "store", "marketplace"])]
        channel: Option<String>,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: i32,

        /// Results per page
        #[arg(long, default_value_t = 10)]
        page_size: i32,

        /// Output format (table, json, compact)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

/// Product subcommands
#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    /// List products
    List {
        /// Search text (title or category)
        #[arg(short, long)]
        query: Option<String>,

        /// Page number
        #[arg(long, default_value_t = 1)]
        page: i32,

        /// Results per page
        #[arg(long, default_value_t = 10)]
        page_size: i32,

        /// Output format (table, json, compact)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

/// Analytics subcommands
#[derive(Subcommand, Debug)]
pub enum AnalyticsCommand {
    /// KPIs and top products for the reporting range
    Overview,

    /// Daily revenue series
    Revenue,

    /// Order counts grouped by status
    Statuses,
}
