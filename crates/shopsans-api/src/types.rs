//! API request and response types
//!
//! Matches the back-office backend wire format (camelCase field names,
//! money amounts in cents, timestamps as ISO 8601 strings).

use serde::{Deserialize, Serialize};

/// Standard list envelope returned by the paginated endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub data: Vec<T>,
    pub page: i32,
    pub page_size: i32,
    pub total: i64,

    /// Advisory notice from the server (e.g. full-text search fell back to
    /// substring matching)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Customer list entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub country: Option<String>,
    pub created_at: String,
}

/// Customer detail with aggregated account metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetail {
    pub id: String,
    pub name: String,
    pub email: Option<String>,
    pub country: Option<String>,
    pub created_at: String,
    pub metrics: CustomerMetrics,
}

/// Aggregates computed by the backend per customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerMetrics {
    pub orders: i64,
    pub tickets: i64,
    pub lifetime_value_cents: i64,
}

/// Order list entry, joined with its customer and item count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub customer_id: String,
    pub order_date: String,
    pub channel: OrderChannel,
    pub status: OrderStatus,
    pub total_cents: i64,

    /// Relation counts, keyed `_count` on the wire
    #[serde(rename = "_count")]
    pub count: OrderCounts,
    pub customer: OrderCustomer,
}

/// Relation counts attached to an order row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCounts {
    pub items: i64,
}

/// Customer summary embedded in an order row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Order lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// All statuses, in lifecycle order
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Paid,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Paid => "paid",
            OrderStatus::Shipped => "shipped",
            OrderStatus::Delivered => "delivered",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sales channel an order came in through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderChannel {
    Web,
    Mobile,
    Store,
    Marketplace,
}

impl OrderChannel {
    /// Wire name of the channel
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderChannel::Web => "web",
            OrderChannel::Mobile => "mobile",
            OrderChannel::Store => "store",
            OrderChannel::Marketplace => "marketplace",
        }
    }
}

impl std::fmt::Display for OrderChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Product catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,
    pub sku: String,
    pub title: String,
    pub category: Option<String>,
    pub price_cents: i64,
    pub created_at: String,
}

/// Analytics overview: KPIs and top products over the reporting range
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub range: DateRange,
    pub kpis: Kpis,
    pub top_products: Vec<TopProduct>,
}

/// Reporting window boundaries (ISO 8601)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DateRange {
    pub from: String,
    pub to: String,
}

/// Headline figures for the reporting range
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kpis {
    pub revenue_cents: i64,
    pub orders_count: i64,
    pub aov_cents: i64,
    pub customers_count: i64,
}

/// Product ranked by revenue within the reporting range
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopProduct {
    pub product_id: String,
    pub title: String,
    pub revenue_cents: i64,
    pub units: i64,
}

/// Daily revenue series
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueByDay {
    pub range: DateRange,
    pub series: Vec<RevenuePoint>,
}

/// One day of revenue
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub day: String,
    pub revenue_cents: i64,
}

/// Order counts grouped by status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrdersByStatus {
    pub breakdown: Vec<StatusCount>,
}

/// One status bucket
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: String,
    pub count: i64,
}
