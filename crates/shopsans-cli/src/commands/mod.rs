//! CLI command implementations
//!
//! Each subcommand has its own module with a `run`-style entry function.
//! Shared listing helpers (pagination bounds, JSON rendering) live here.

pub mod analytics;
pub mod customers;
pub mod login;
pub mod orders;
pub mod products;

use crate::error::{CliError, Result};
use serde::Serialize;

/// Validate the pagination bounds shared by every listing command
pub(crate) fn validate_paging(page: i32, page_size: i32) -> Result<()> {
    if page < 1 {
        return Err(CliError::config("Page must be greater than 0"));
    }

    if !(1..=100).contains(&page_size) {
        return Err(CliError::config("Page size must be between 1 and 100"));
    }

    Ok(())
}

/// Render any payload as pretty JSON
pub(crate) fn display_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Total page count for a listing summary
pub(crate) fn total_pages(total: i64, page_size: i32) -> i64 {
    ((total as f64) / (page_size as f64)).ceil().max(1.0) as i64
}
