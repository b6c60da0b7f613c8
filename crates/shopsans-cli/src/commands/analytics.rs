//! `shopsans analytics` command implementation
//!
//! The bare `analytics` command loads all three sections concurrently and
//! renders whichever ones come back; a failing section is reported without
//! cancelling the others.

use crate::error::{CliError, Result};
use crate::format::{format_date, format_usd};
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, CellAlignment, Table};
use shopsans_api::{AnalyticsOverview, ApiClient, OrdersByStatus, RevenueByDay};
use tracing::debug;

/// Run the full analytics dashboard
pub async fn dashboard(server_url: String) -> Result<()> {
    let client = ApiClient::new(server_url)?;

    debug!("Loading analytics dashboard");

    let (overview, revenue, statuses) = tokio::join!(
        client.analytics_overview(),
        client.revenue_by_day(),
        client.orders_by_status(),
    );

    let mut first_err: Option<CliError> = None;
    let mut failures = 0;

    match overview {
        Ok(data) => display_overview(&data),
        Err(e) => record_failure("overview", e.into(), &mut first_err, &mut failures),
    }

    match revenue {
        Ok(data) => display_revenue(&data),
        Err(e) => record_failure("revenue", e.into(), &mut first_err, &mut failures),
    }

    match statuses {
        Ok(data) => display_statuses(&data),
        Err(e) => record_failure("order statuses", e.into(), &mut first_err, &mut failures),
    }

    // Partial dashboards still succeed; a fully failed load does not
    if failures == 3 {
        if let Some(err) = first_err {
            return Err(err);
        }
    }

    Ok(())
}

/// Run the overview section alone
pub async fn overview(server_url: String) -> Result<()> {
    let client = ApiClient::new(server_url)?;
    let data = client.analytics_overview().await?;
    display_overview(&data);
    Ok(())
}

/// Run the revenue section alone
pub async fn revenue(server_url: String) -> Result<()> {
    let client = ApiClient::new(server_url)?;
    let data = client.revenue_by_day().await?;
    display_revenue(&data);
    Ok(())
}

/// Run the status breakdown section alone
pub async fn statuses(server_url: String) -> Result<()> {
    let client = ApiClient::new(server_url)?;
    let data = client.orders_by_status().await?;
    display_statuses(&data);
    Ok(())
}

fn record_failure(
    section: &str,
    err: CliError,
    first_err: &mut Option<CliError>,
    failures: &mut u32,
) {
    eprintln!("{}", format!("Failed to load {}: {}", section, err).red());
    *failures += 1;
    if first_err.is_none() {
        *first_err = Some(err);
    }
}

fn display_overview(data: &AnalyticsOverview) {
    println!();
    println!(
        "{} ({} to {})",
        "Overview".cyan().bold(),
        format_date(&data.range.from),
        format_date(&data.range.to)
    );
    println!();

    let mut kpis = Table::new();
    kpis.load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Revenue", "Orders", "AOV", "Customers"]);
    kpis.add_row(vec![
        format_usd(data.kpis.revenue_cents),
        data.kpis.orders_count.to_string(),
        format_usd(data.kpis.aov_cents),
        data.kpis.customers_count.to_string(),
    ]);

    println!("{}", kpis);

    if data.top_products.is_empty() {
        println!("No product revenue in range.");
        return;
    }

    println!();
    println!("{}", "Top Products (by revenue)".cyan().bold());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Title", "Units", "Revenue"]);

    for product in &data.top_products {
        table.add_row(vec![
            product.title.clone(),
            product.units.to_string(),
            format_usd(product.revenue_cents),
        ]);
    }

    for index in [1, 2] {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }

    println!("{}", table);
}

fn display_revenue(data: &RevenueByDay) {
    println!();
    println!(
        "{} ({} to {})",
        "Revenue by Day".cyan().bold(),
        format_date(&data.range.from),
        format_date(&data.range.to)
    );

    if data.series.is_empty() {
        println!("No revenue in range.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Day", "Revenue"]);

    for point in &data.series {
        table.add_row(vec![point.day.clone(), format_usd(point.revenue_cents)]);
    }

    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{}", table);
}

fn display_statuses(data: &OrdersByStatus) {
    println!();
    println!("{}", "Orders by Status".cyan().bold());

    if data.breakdown.is_empty() {
        println!("No orders.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Status", "Orders"]);

    for bucket in &data.breakdown {
        table.add_row(vec![bucket.status.clone(), bucket.count.to_string()]);
    }

    if let Some(column) = table.column_mut(1) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{}", table);
}
