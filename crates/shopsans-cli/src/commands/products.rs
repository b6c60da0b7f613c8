//! `shopsans products` command implementation

use crate::commands::{display_json, total_pages, validate_paging};
use crate::error::Result;
use crate::format::format_usd;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, CellAlignment, Table};
use shopsans_api::{ApiClient, Page, Product};
use tracing::debug;

/// Run the products list command
pub async fn list(
    server_url: String,
    query: Option<String>,
    page: i32,
    page_size: i32,
    format: &str,
) -> Result<()> {
    validate_paging(page, page_size)?;

    let client = ApiClient::new(server_url)?;

    debug!(query = ?query, page = page, page_size = page_size, "Listing products");

    let result = client
        .list_products(query.as_deref(), page, page_size)
        .await?;

    if format == "json" {
        return display_json(&result);
    }

    if let Some(note) = &result.note {
        println!("{}", format!("Note: {}", note).yellow());
    }

    if result.data.is_empty() {
        println!("No products found.");
        return Ok(());
    }

    match format {
        "compact" => display_compact(&result),
        _ => display_table(&result),
    }

    Ok(())
}

/// Display products in compact format (one per line)
fn display_compact(result: &Page<Product>) {
    for product in &result.data {
        println!("{}  {}", product.sku, product.title);
    }
}

/// Display products in table format
fn display_table(result: &Page<Product>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["SKU", "Title", "Category", "Price"]);

    for product in &result.data {
        table.add_row(vec![
            product.sku.clone(),
            product.title.clone(),
            product.category.clone().unwrap_or_else(|| "-".to_string()),
            format_usd(product.price_cents),
        ]);
    }

    if let Some(column) = table.column_mut(3) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!();
    println!("{}", table);
    println!();
    println!(
        "Showing {} of {} products (page {}/{})",
        result.data.len(),
        result.total,
        result.page,
        total_pages(result.total, result.page_size)
    );
}
