//! `shopsans orders` command implementation

use crate::commands::{display_json, total_pages, validate_paging};
use crate::error::Result;
use crate::format::{format_datetime, format_usd};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, CellAlignment, Table};
use shopsans_api::{ApiClient, Order, Page};
use tracing::debug;

/// Run the orders list command
pub async fn list(
    server_url: String,
    status: Option<String>,
    channel: Option<String>,
    page: i32,
    page_size: i32,
    format: &str,
) -> Result<()> {
    validate_paging(page, page_size)?;

    let client = ApiClient::new(server_url)?;

    debug!(
        status = ?status,
        channel = ?channel,
        page = page,
        page_size = page_size,
        "Listing orders"
    );

    let result = client
        .list_orders(status.as_deref(), channel.as_deref(), page, page_size)
        .await?;

    if format == "json" {
        return display_json(&result);
    }

    if result.data.is_empty() {
        println!("No orders found.");
        return Ok(());
    }

    match format {
        "compact" => display_compact(&result),
        _ => display_table(&result),
    }

    Ok(())
}

/// Display orders in compact format (one per line)
fn display_compact(result: &Page<Order>) {
    for order in &result.data {
        println!(
            "{}  {}  {}",
            order.id,
            order.status,
            format_usd(order.total_cents)
        );
    }
}

/// Display orders in table format
fn display_table(result: &Page<Order>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Date", "Customer", "Status", "Channel", "Items", "Total"]);

    for order in &result.data {
        let customer = format!(
            "{} ({})",
            order.customer.name.as_deref().unwrap_or("-"),
            order.customer.email.as_deref().unwrap_or("-")
        );

        table.add_row(vec![
            format_datetime(&order.order_date),
            customer,
            order.status.to_string(),
            order.channel.to_string(),
            order.count.items.to_string(),
            format_usd(order.total_cents),
        ]);
    }

    // Numeric columns read right-aligned
    if let Some(column) = table.column_mut(4) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    if let Some(column) = table.column_mut(5) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!();
    println!("{}", table);
    println!();
    println!(
        "Showing {} of {} orders (page {}/{})",
        result.data.len(),
        result.total,
        result.page,
        total_pages(result.total, result.page_size)
    );
}
