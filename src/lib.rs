//! # coinscope
//!
//! A Rust SDK for CoinGecko-style crypto market data, with the state and
//! helpers a market dashboard needs.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Types, pager windows, candle normalization, formatting (always available, WASM-safe)
//! 2. **Config** — `ApiConfig` from explicit values or `COINGECKO_*` environment variables
//! 3. **HTTP API** — `CoinGeckoHttp` with retry policies
//! 4. **High-Level Client** — `CoinscopeClient` with nested sub-clients and caching
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coinscope::prelude::*;
//!
//! let client = CoinscopeClient::builder()
//!     .api_key("CG-xxxx")
//!     .build()?;
//!
//! let page = client.coins().markets(&MarketsQuery::page(2, 10)).await?;
//! for item in page.pagination.items() {
//!     print!("{} ", item);
//! }
//!
//! let candles = client.charts().ohlc("bitcoin", "usd", Period::Weekly).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, request sequencing, and display formatting.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, state.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL and header constants.
pub mod network;

// ── Layer 2: Config ──────────────────────────────────────────────────────────

/// API connection settings.
pub mod config;

// ── Layer 3: HTTP API ────────────────────────────────────────────────────────

/// HTTP client with retry policies.
#[cfg(feature = "http")]
pub mod http;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CoinscopeClient` — the primary entry point.
#[cfg(feature = "http")]
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::{CoinId, Currency, LiveInterval, Period, RequestSequence, Ticket, Trend};

    // Domain types — pagination, chart
    pub use crate::domain::chart::{normalize_candles, Candle, ChartState, OhlcTuple};
    pub use crate::domain::pagination::{
        build_page_numbers, estimate_total_pages, PageItem, Pagination,
    };

    // Domain types — coin, trending, category, price
    pub use crate::domain::category::Category;
    pub use crate::domain::coin::{CoinDetail, CoinMarket, CoinsPage, MarketsQuery};
    pub use crate::domain::price::{PriceFeed, PriceQuote};
    pub use crate::domain::trending::TrendingCoin;

    // Domain types — trade tape, converter
    pub use crate::domain::converter::Converter;
    pub use crate::domain::trade::{simulate_trade, Trade, TradeSide, TradeTape};

    // Formatting
    pub use crate::shared::fmt::{format_change, format_currency, format_percentage, time_ago};

    // Errors + config
    pub use crate::config::{ApiConfig, ApiPlan};
    pub use crate::error::{ConfigError, HttpError, SdkError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client + sub-clients
    #[cfg(feature = "http")]
    pub use crate::client::{
        CategoriesClient, ChartsClient, CoinsClient, CoinscopeClient, CoinscopeClientBuilder,
        PricesClient, TrendingClient,
    };
    #[cfg(feature = "http")]
    pub use crate::http::retry::{RetryConfig, RetryPolicy};
}
