//! ShopSans Back-Office API Client
//!
//! HTTP client for the ShopSans e-commerce back-office server.
//!
//! # Overview
//!
//! The backend speaks JSON over HTTP and authenticates with session cookies.
//! [`ApiClient`] wraps that wire contract:
//!
//! - the base URL is resolved once (environment override, local default) and
//!   joined with every relative path verbatim
//! - requests default to `Content-Type: application/json`, carry the session
//!   cookie jar, and tell intermediaries not to serve cached responses
//! - non-success statuses become [`ApiError::Api`] with the status code and
//!   whatever could be read from the body; everything else the transport
//!   reports passes through unclassified
//!
//! # Example
//!
//! ```no_run
//! use shopsans_api::ApiClient;
//!
//! # async fn example() -> shopsans_api::Result<()> {
//! let client = ApiClient::from_env()?;
//! let customers = client.list_customers(Some("ada"), 1, 10).await?;
//! println!("{} customers match", customers.total);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use client::{ApiClient, RequestOptions, DEFAULT_API_BASE};
pub use error::{ApiError, ErrorDetails, Result};
pub use types::*;
