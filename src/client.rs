//! High-level client — `CoinscopeClient` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared cache state, and accessor methods.

use crate::config::{ApiConfig, ApiPlan};
use crate::domain::category::client::Categories;
use crate::domain::category::Category;
use crate::domain::chart::client::Charts;
use crate::domain::coin::client::Coins;
use crate::domain::coin::CoinDetail;
use crate::domain::price::client::Prices;
use crate::domain::trending::client::Trending;
use crate::domain::trending::TrendingCoin;
use crate::error::SdkError;
use crate::http::{CoinGeckoHttp, RetryPolicy};

use async_lock::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

// Re-export sub-client types for convenience.
pub use crate::domain::category::client::Categories as CategoriesClient;
pub use crate::domain::chart::client::Charts as ChartsClient;
pub use crate::domain::coin::client::Coins as CoinsClient;
pub use crate::domain::price::client::Prices as PricesClient;
pub use crate::domain::trending::client::Trending as TrendingClient;

/// Timestamped list cache slot.
pub(crate) type ListCache<T> = Arc<RwLock<Option<(Vec<T>, Instant)>>>;

/// The primary entry point for the SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.coins()`, `client.charts()`, etc.
pub struct CoinscopeClient {
    pub(crate) http: CoinGeckoHttp,
    /// Coin detail cache: id → (CoinDetail, fetched_at)
    pub(crate) coin_cache: Arc<RwLock<HashMap<String, (CoinDetail, Instant)>>>,
    pub(crate) trending_cache: ListCache<TrendingCoin>,
    pub(crate) categories_cache: ListCache<Category>,
    pub(crate) coin_cache_ttl: Duration,
    pub(crate) trending_cache_ttl: Duration,
    pub(crate) categories_cache_ttl: Duration,
}

impl CoinscopeClient {
    pub fn builder() -> CoinscopeClientBuilder {
        CoinscopeClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn coins(&self) -> Coins<'_> {
        Coins { client: self }
    }

    pub fn charts(&self) -> Charts<'_> {
        Charts { client: self }
    }

    pub fn trending(&self) -> Trending<'_> {
        Trending { client: self }
    }

    pub fn categories(&self) -> Categories<'_> {
        Categories { client: self }
    }

    pub fn prices(&self) -> Prices<'_> {
        Prices { client: self }
    }

    /// Clear all HTTP caches.
    pub async fn clear_all_caches(&self) {
        self.coin_cache.write().await.clear();
        *self.trending_cache.write().await = None;
        *self.categories_cache.write().await = None;
    }
}

impl std::fmt::Debug for CoinscopeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinscopeClient")
            .field("http", &self.http)
            .field("coin_cache_ttl", &self.coin_cache_ttl)
            .field("trending_cache_ttl", &self.trending_cache_ttl)
            .field("categories_cache_ttl", &self.categories_cache_ttl)
            .finish_non_exhaustive()
    }
}

impl Clone for CoinscopeClient {
    fn clone(&self) -> Self {
        Self {
            http: self.http.clone(),
            coin_cache: self.coin_cache.clone(),
            trending_cache: self.trending_cache.clone(),
            categories_cache: self.categories_cache.clone(),
            coin_cache_ttl: self.coin_cache_ttl,
            trending_cache_ttl: self.trending_cache_ttl,
            categories_cache_ttl: self.categories_cache_ttl,
        }
    }
}

/// Read a list cache slot if it is younger than `ttl`.
pub(crate) async fn read_fresh<T: Clone>(cache: &ListCache<T>, ttl: Duration) -> Option<Vec<T>> {
    let slot = cache.read().await;
    match slot.as_ref() {
        Some((items, fetched_at)) if fetched_at.elapsed() < ttl => Some(items.clone()),
        _ => None,
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CoinscopeClientBuilder {
    config: ApiConfig,
    retry: RetryPolicy,
    coin_cache_ttl: Duration,
    trending_cache_ttl: Duration,
    categories_cache_ttl: Duration,
}

impl Default for CoinscopeClientBuilder {
    fn default() -> Self {
        Self {
            config: ApiConfig::default(),
            retry: RetryPolicy::Idempotent,
            coin_cache_ttl: Duration::from_secs(60),
            trending_cache_ttl: Duration::from_secs(300),
            categories_cache_ttl: Duration::from_secs(60),
        }
    }
}

impl CoinscopeClientBuilder {
    /// Start from `COINGECKO_*` environment variables.
    pub fn from_env() -> Result<Self, SdkError> {
        Ok(Self::default().config(ApiConfig::from_env()?))
    }

    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = config;
        self
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.config.base_url = url.to_string();
        self
    }

    pub fn api_key(mut self, key: &str) -> Self {
        self.config.api_key = Some(key.to_string());
        self
    }

    /// Also switches the base URL when it is still the other plan's default.
    pub fn plan(mut self, plan: ApiPlan) -> Self {
        if self.config.base_url == self.config.plan.default_base_url() {
            self.config.base_url = plan.default_base_url().to_string();
        }
        self.config.plan = plan;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    pub fn retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn coin_cache_ttl(mut self, ttl: Duration) -> Self {
        self.coin_cache_ttl = ttl;
        self
    }

    pub fn trending_cache_ttl(mut self, ttl: Duration) -> Self {
        self.trending_cache_ttl = ttl;
        self
    }

    pub fn categories_cache_ttl(mut self, ttl: Duration) -> Self {
        self.categories_cache_ttl = ttl;
        self
    }

    pub fn build(self) -> Result<CoinscopeClient, SdkError> {
        self.config.validate()?;
        if self.config.api_key.is_none() {
            tracing::debug!("Building client without an API key");
        }

        Ok(CoinscopeClient {
            http: CoinGeckoHttp::new(&self.config)?.with_retry_policy(self.retry),
            coin_cache: Arc::new(RwLock::new(HashMap::new())),
            trending_cache: Arc::new(RwLock::new(None)),
            categories_cache: Arc::new(RwLock::new(None)),
            coin_cache_ttl: self.coin_cache_ttl,
            trending_cache_ttl: self.trending_cache_ttl,
            categories_cache_ttl: self.categories_cache_ttl,
        })
    }
}
