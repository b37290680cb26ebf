//! Low-level HTTP client — `CoinGeckoHttp`.
//!
//! One method per API endpoint. Returns wire types (conversion to domain types
//! happens at the client boundary). Internal to the SDK — `CoinscopeClient`
//! wraps this.

use crate::config::ApiConfig;
use crate::domain::category::wire::CategoryResponse;
use crate::domain::chart::wire::OhlcResponse;
use crate::domain::coin::wire::{CoinDetailResponse, CoinMarketResponse, MarketsQuery, SearchResponse};
use crate::domain::price::wire::SimplePriceResponse;
use crate::domain::trending::wire::TrendingResponse;
use crate::error::HttpError;
use crate::http::retry::{RetryConfig, RetryPolicy};
use crate::shared::Period;

use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Query parameter list. `None` and empty values are left out of the URL.
pub type QueryParams<'a> = [(&'a str, Option<String>)];

/// Low-level HTTP client for the CoinGecko REST API.
#[derive(Clone)]
pub struct CoinGeckoHttp {
    base_url: String,
    client: Client,
    key_header: &'static str,
    /// NEVER exposed publicly.
    api_key: Option<String>,
    retry: RetryPolicy,
}

impl std::fmt::Debug for CoinGeckoHttp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinGeckoHttp")
            .field("base_url", &self.base_url)
            .field("key_header", &self.key_header)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl CoinGeckoHttp {
    pub fn new(config: &ApiConfig) -> Result<Self, HttpError> {
        let mut builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        {
            builder = builder
                .timeout(config.timeout)
                .pool_max_idle_per_host(10);
        }

        Ok(Self {
            base_url: config.normalized_base_url().to_string(),
            client: builder.build()?,
            key_header: config.plan.key_header(),
            api_key: config.api_key.clone(),
            retry: RetryPolicy::Idempotent,
        })
    }

    /// Override the retry policy used for every request.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Coins ────────────────────────────────────────────────────────────

    pub async fn get_coins_markets(
        &self,
        query: &MarketsQuery,
    ) -> Result<Vec<CoinMarketResponse>, HttpError> {
        self.get("coins/markets", &query.to_params()).await
    }

    pub async fn get_coin(&self, id: &str) -> Result<CoinDetailResponse, HttpError> {
        let path = format!("coins/{}", urlencoding::encode(id));
        self.get(
            &path,
            &[
                ("localization", Some("false".to_string())),
                ("tickers", Some("false".to_string())),
                ("community_data", Some("true".to_string())),
                ("developer_data", Some("true".to_string())),
                ("sparkline", Some("false".to_string())),
            ],
        )
        .await
    }

    pub async fn get_coin_ohlc(
        &self,
        id: &str,
        vs_currency: &str,
        period: Period,
    ) -> Result<OhlcResponse, HttpError> {
        let path = format!("coins/{}/ohlc", urlencoding::encode(id));
        self.get(
            &path,
            &[
                ("vs_currency", Some(vs_currency.to_string())),
                ("days", Some(period.days().to_string())),
                ("precision", Some("full".to_string())),
            ],
        )
        .await
    }

    pub async fn get_coins_categories(&self) -> Result<Vec<CategoryResponse>, HttpError> {
        self.get("coins/categories", &[]).await
    }

    // ── Search ───────────────────────────────────────────────────────────

    pub async fn search(&self, query: &str) -> Result<SearchResponse, HttpError> {
        self.get("search", &[("query", Some(query.to_string()))])
            .await
    }

    pub async fn get_trending(&self) -> Result<TrendingResponse, HttpError> {
        self.get("search/trending", &[]).await
    }

    // ── Prices ───────────────────────────────────────────────────────────

    /// `ids` is a comma-separated list of coin ids.
    pub async fn get_simple_price(
        &self,
        ids: &str,
        vs_currency: &str,
    ) -> Result<SimplePriceResponse, HttpError> {
        self.get(
            "simple/price",
            &[
                ("ids", Some(ids.to_string())),
                ("vs_currencies", Some(vs_currency.to_ascii_lowercase())),
                ("include_24hr_change", Some("true".to_string())),
                ("include_last_updated_at", Some("true".to_string())),
                ("precision", Some("full".to_string())),
            ],
        )
        .await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &QueryParams<'_>,
    ) -> Result<T, HttpError> {
        let url = build_url(&self.base_url, path, params);
        self.request_with_retry(&url, &self.retry).await
    }

    async fn request_with_retry<T: DeserializeOwned>(
        &self,
        url: &str,
        retry: &RetryPolicy,
    ) -> Result<T, HttpError> {
        let config = match retry {
            RetryPolicy::None => {
                return self.do_request(url).await;
            }
            RetryPolicy::Idempotent => RetryConfig::idempotent(),
            RetryPolicy::Custom(c) => c.clone(),
        };

        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match self.do_request::<T>(url).await {
                Ok(resp) => return Ok(resp),
                Err(e) => {
                    let should_retry = match &e {
                        HttpError::ServerError { status, .. } => {
                            config.retryable_statuses.contains(status)
                        }
                        HttpError::RateLimited { retry_after_ms } => {
                            if let Some(ms) = retry_after_ms {
                                let delay = Duration::from_millis(*ms).min(config.max_delay);
                                futures_timer::Delay::new(delay).await;
                            }
                            config.retryable_statuses.contains(&429)
                        }
                        HttpError::Timeout => true,
                        HttpError::Reqwest(re) => {
                            #[cfg(not(target_arch = "wasm32"))]
                            let retryable = re.is_connect() || re.is_timeout() || re.is_request();
                            #[cfg(target_arch = "wasm32")]
                            let retryable = re.is_timeout() || re.is_request();
                            retryable
                        }
                        _ => false,
                    };

                    if should_retry && attempt < config.max_retries {
                        let delay = config.delay_for_attempt(attempt);
                        tracing::debug!(
                            attempt = attempt + 1,
                            max = config.max_retries,
                            delay_ms = delay.as_millis() as u64,
                            "Retrying request to {}",
                            redact_url(url)
                        );
                        futures_timer::Delay::new(delay).await;
                        last_error = Some(e);
                    } else {
                        return Err(e);
                    }
                }
            }
        }

        Err(HttpError::MaxRetriesExceeded {
            attempts: config.max_retries + 1,
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        })
    }

    async fn do_request<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        let mut req = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json");

        if let Some(key) = &self.api_key {
            req = req.header(self.key_header, key);
        }

        let resp = req.send().await?;
        let status = resp.status();

        if status.is_success() {
            let parsed = resp.json::<T>().await?;
            return Ok(parsed);
        }

        let retry_after_ms = resp
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(parse_retry_after);
        let body_text = resp.text().await.unwrap_or_default();

        Err(classify_error(status.as_u16(), body_text, retry_after_ms))
    }
}

/// Join base URL, path and non-empty query parameters.
pub(crate) fn build_url(base_url: &str, path: &str, params: &QueryParams<'_>) -> String {
    let mut url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    let query: Vec<String> = params
        .iter()
        .filter_map(|(key, value)| {
            value
                .as_deref()
                .filter(|v| !v.is_empty())
                .map(|v| format!("{}={}", key, urlencoding::encode(v)))
        })
        .collect();
    if !query.is_empty() {
        url = format!("{}?{}", url, query.join("&"));
    }
    url
}

/// `Retry-After` in whole seconds → milliseconds. HTTP-date values are ignored.
pub(crate) fn parse_retry_after(value: &str) -> Option<u64> {
    value
        .trim()
        .parse::<u64>()
        .ok()
        .map(|secs| secs.saturating_mul(1000))
}

/// Extract the message from a CoinGecko error body.
///
/// Handles `{"error": "..."}` and `{"status": {"error_message": "..."}}`.
pub(crate) fn parse_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.as_str())
        .or_else(|| {
            value
                .get("status")
                .and_then(|s| s.get("error_message"))
                .and_then(|m| m.as_str())
        })
        .map(str::to_string)
}

/// Map a non-2xx response to an [`HttpError`].
pub(crate) fn classify_error(status: u16, body: String, retry_after_ms: Option<u64>) -> HttpError {
    let message = parse_error_message(&body);
    match status {
        401 | 403 => HttpError::Unauthorized(message.unwrap_or(body)),
        404 => HttpError::NotFound(message.unwrap_or(body)),
        408 => HttpError::Timeout,
        429 => HttpError::RateLimited { retry_after_ms },
        400..=499 => match message {
            Some(message) => HttpError::Api { status, message },
            None => HttpError::BadRequest(body),
        },
        _ => HttpError::ServerError { status, body },
    }
}

/// Strip the query string before logging a URL.
fn redact_url(url: &str) -> &str {
    url.split('?').next().unwrap_or(url)
}
