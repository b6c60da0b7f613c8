//! API endpoint path builders
//!
//! Helper functions to construct relative request paths. The client joins
//! them onto the configured base URL; user-supplied search text is
//! percent-encoded here, pagination numbers are rendered verbatim.

/// Build customers list path
pub fn customers_path(query: Option<&str>, page: i32, page_size: i32) -> String {
    let mut path = format!("/customers?page={}&pageSize={}", page, page_size);

    if let Some(q) = query {
        path.push_str(&format!("&q={}", urlencoding::encode(q)));
    }

    path
}

/// Build customer detail path
pub fn customer_detail_path(id: &str) -> String {
    format!("/customers/{}", id)
}

/// Build orders list path
pub fn orders_path(
    status: Option<&str>,
    channel: Option<&str>,
    page: i32,
    page_size: i32,
) -> String {
    let mut path = format!("/orders?page={}&pageSize={}", page, page_size);

    if let Some(s) = status {
        path.push_str(&format!("&status={}", s));
    }

    if let Some(c) = channel {
        path.push_str(&format!("&channel={}", c));
    }

    path
}

/// Build products list path
pub fn products_path(query: Option<&str>, page: i32, page_size: i32) -> String {
    let mut path = format!("/products?page={}&pageSize={}", page, page_size);

    if let Some(q) = query {
        path.push_str(&format!("&q={}", urlencoding::encode(q)));
    }

    path
}

/// Build analytics overview path
pub fn analytics_overview_path() -> String {
    "/analytics/overview".to_string()
}

/// Build revenue-by-day path
pub fn revenue_by_day_path() -> String {
    "/analytics/revenue-by-day".to_string()
}

/// Build orders-by-status path
pub fn orders_by_status_path() -> String {
    "/analytics/orders-by-status".to_string()
}

/// Build login path
pub fn login_path() -> String {
    "/auth/login".to_string()
}
