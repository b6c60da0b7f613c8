//! HTTP API client for the ShopSans back-office server
//!
//! One method, [`ApiClient::fetch`], carries the whole request/response
//! contract; the typed endpoint methods are thin wrappers over it.

use crate::endpoints;
use crate::error::{ApiError, ErrorDetails, Result};
use crate::types::*;
use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, CONTENT_TYPE};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde_json::Value;

// ============================================================================
// API Client Constants
// ============================================================================

/// Default back-office server URL when not specified via environment variable.
pub const DEFAULT_API_BASE: &str = "http://localhost:4000";

/// API client for the back-office server.
///
/// Holds the configured base URL for the lifetime of the client and a
/// cookie-jar-backed `reqwest::Client`, so the session cookie set by
/// [`ApiClient::login`] rides along on every later call. Calls are
/// independent async operations; nothing here retries, dedupes, or caches.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

/// Per-request overrides for [`ApiClient::fetch`].
///
/// The default is a GET with no extra headers and no body. Caller headers
/// take precedence over the default `Content-Type: application/json` on
/// conflicting names.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub body: Option<Value>,
}

impl RequestOptions {
    /// A POST carrying the given JSON body
    pub fn post(body: Value) -> Self {
        Self {
            method: Method::POST,
            body: Some(body),
            ..Self::default()
        }
    }
}

impl ApiClient {
    /// Create a new API client against the given base URL
    pub fn new(base_url: String) -> Result<Self> {
        let client = Client::builder().cookie_store(true).build()?;

        Ok(Self { client, base_url })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("SHOPSANS_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());

        Self::new(base_url)
    }

    /// Issue one request and decode the JSON response body.
    ///
    /// The path is concatenated onto the base URL verbatim, including any
    /// query string the caller rendered into it. A non-success status becomes
    /// [`ApiError::Api`] carrying the status code and the best-effort body
    /// details; transport failures and undecodable success bodies pass
    /// through as [`ApiError::Http`].
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        for (name, value) in options.headers.iter() {
            headers.insert(name.clone(), value.clone());
        }
        // Not overridable: every call must reach the server
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));

        let mut request = self.client.request(options.method, url).headers(headers);
        if let Some(body) = options.body {
            request = request.body(body.to_string());
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::api(
                status.as_u16(),
                extract_details(response).await,
            ));
        }

        Ok(response.json::<T>().await?)
    }

    /// List customers, optionally filtered by search text
    pub async fn list_customers(
        &self,
        query: Option<&str>,
        page: i32,
        page_size: i32,
    ) -> Result<Page<Customer>> {
        self.fetch(
            &endpoints::customers_path(query, page, page_size),
            RequestOptions::default(),
        )
        .await
    }

    /// Get one customer with account metrics
    pub async fn get_customer(&self, id: &str) -> Result<CustomerDetail> {
        self.fetch(&endpoints::customer_detail_path(id), RequestOptions::default())
            .await
    }

    /// List orders, optionally filtered by status and channel
    pub async fn list_orders(
        &self,
        status: Option<&str>,
        channel: Option<&str>,
        page: i32,
        page_size: i32,
    ) -> Result<Page<Order>> {
        self.fetch(
            &endpoints::orders_path(status, channel, page, page_size),
            RequestOptions::default(),
        )
        .await
    }

    /// List products, optionally filtered by search text
    pub async fn list_products(
        &self,
        query: Option<&str>,
        page: i32,
        page_size: i32,
    ) -> Result<Page<Product>> {
        self.fetch(
            &endpoints::products_path(query, page, page_size),
            RequestOptions::default(),
        )
        .await
    }

    /// Get analytics KPIs and top products
    pub async fn analytics_overview(&self) -> Result<AnalyticsOverview> {
        self.fetch(&endpoints::analytics_overview_path(), RequestOptions::default())
            .await
    }

    /// Get the daily revenue series
    pub async fn revenue_by_day(&self) -> Result<RevenueByDay> {
        self.fetch(&endpoints::revenue_by_day_path(), RequestOptions::default())
            .await
    }

    /// Get order counts grouped by status
    pub async fn orders_by_status(&self) -> Result<OrdersByStatus> {
        self.fetch(&endpoints::orders_by_status_path(), RequestOptions::default())
            .await
    }

    /// Authenticate against the backend.
    ///
    /// On success the session cookie lands in the client's cookie jar; the
    /// response body is parsed and discarded.
    pub async fn login(&self, email: &str, password: &str) -> Result<()> {
        let options = RequestOptions::post(serde_json::json!({
            "email": email,
            "password": password,
        }));

        let _: Value = self.fetch(&endpoints::login_path(), options).await?;

        Ok(())
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Best-effort capture of a failing response's body.
///
/// JSON responses are parsed, anything else is read as text. A body that
/// cannot be read or parsed is dropped on purpose; the caller still gets
/// the status code.
async fn extract_details(response: Response) -> Option<ErrorDetails> {
    let is_json = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.contains("application/json"));

    if is_json {
        response.json::<Value>().await.ok().map(ErrorDetails::Json)
    } else {
        response.text().await.ok().map(ErrorDetails::Text)
    }
}
