//! `shopsans customers` command implementation

use crate::commands::{display_json, total_pages, validate_paging};
use crate::error::Result;
use crate::format::{format_date, format_usd};
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use shopsans_api::{ApiClient, Customer, Page};
use tracing::debug;

/// Run the customers list command
pub async fn list(
    server_url: String,
    query: Option<String>,
    page: i32,
    page_size: i32,
    format: &str,
) -> Result<()> {
    validate_paging(page, page_size)?;

    let client = ApiClient::new(server_url)?;

    debug!(query = ?query, page = page, page_size = page_size, "Listing customers");

    let result = client
        .list_customers(query.as_deref(), page, page_size)
        .await?;

    if format == "json" {
        return display_json(&result);
    }

    if let Some(note) = &result.note {
        println!("{}", format!("Note: {}", note).yellow());
    }

    if result.data.is_empty() {
        println!("No customers found.");
        return Ok(());
    }

    match format {
        "compact" => display_compact(&result),
        _ => display_table(&result),
    }

    Ok(())
}

/// Run the customer detail command
pub async fn get(server_url: String, id: &str) -> Result<()> {
    let client = ApiClient::new(server_url)?;

    debug!(id = %id, "Fetching customer");

    let detail = client.get_customer(id).await?;

    println!();
    println!("{}", detail.name.bold());
    println!();

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);

    table.add_row(vec!["ID", &detail.id]);
    table.add_row(vec!["Email", detail.email.as_deref().unwrap_or("-")]);
    table.add_row(vec!["Country", detail.country.as_deref().unwrap_or("-")]);
    table.add_row(vec!["Since", &format_date(&detail.created_at)]);
    table.add_row(vec!["Orders", &detail.metrics.orders.to_string()]);
    table.add_row(vec!["Tickets", &detail.metrics.tickets.to_string()]);
    table.add_row(vec![
        "Lifetime value",
        &format_usd(detail.metrics.lifetime_value_cents),
    ]);

    println!("{}", table);

    Ok(())
}

/// Display customers in compact format (one per line)
fn display_compact(result: &Page<Customer>) {
    for customer in &result.data {
        println!("{}  {}", customer.id, customer.name);
    }
}

/// Display customers in table format
fn display_table(result: &Page<Customer>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Name", "Email", "Country", "Created"]);

    for customer in &result.data {
        table.add_row(vec![
            customer.name.clone(),
            customer.email.clone().unwrap_or_else(|| "-".to_string()),
            customer.country.clone().unwrap_or_else(|| "-".to_string()),
            format_date(&customer.created_at),
        ]);
    }

    println!();
    println!("{}", table);
    println!();
    println!(
        "Showing {} of {} customers (page {}/{})",
        result.data.len(),
        result.total,
        result.page,
        total_pages(result.total, result.page_size)
    );
}
