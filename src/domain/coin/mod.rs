//! Coin domain — market rows, coin details, search.

#[cfg(feature = "http")]
pub mod client;
pub(crate) mod convert;
pub mod wire;

use crate::domain::pagination::Pagination;
use crate::shared::{CoinId, Trend};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

pub use wire::MarketsQuery;

/// Search queries shorter than this (after trimming) return no results.
pub const MIN_SEARCH_LEN: usize = 2;

/// Number of search hits enriched with market data.
pub const SEARCH_RESULT_LIMIT: usize = 8;

// ─── CoinMarket ──────────────────────────────────────────────────────────────

/// A coin's row in a market table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinMarket {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    /// Absent when the API sent no usable image URL.
    pub image: Option<String>,
    pub current_price: Option<f64>,
    pub market_cap: Option<f64>,
    pub market_cap_rank: Option<u32>,
    pub total_volume: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl CoinMarket {
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Placeholder glyph for coins without an image.
    pub fn initial(&self) -> Option<char> {
        self.symbol
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
    }

    pub fn trend(&self) -> Trend {
        Trend::from_change(self.price_change_percentage_24h.unwrap_or_default())
    }
}

/// One page of `coins/markets`, with pager state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinsPage {
    pub coins: Vec<CoinMarket>,
    pub pagination: Pagination,
}

impl CoinsPage {
    /// An empty page usually means the free plan's paging limit was hit.
    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

// ─── CoinDetail ──────────────────────────────────────────────────────────────

/// Full coin details from `coins/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinDetail {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    pub image: Option<String>,
    pub market_cap_rank: Option<u32>,
    pub description: String,
    pub homepage: Option<String>,
    /// Current price keyed by lowercase currency code.
    pub prices: HashMap<String, f64>,
    pub market_caps: HashMap<String, f64>,
    pub volumes: HashMap<String, f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub last_updated: Option<DateTime<Utc>>,
}

impl CoinDetail {
    pub fn price_in(&self, currency: &str) -> Option<f64> {
        self.prices.get(&currency.to_ascii_lowercase()).copied()
    }

    pub fn usd_price(&self) -> Option<f64> {
        self.price_in("usd")
    }

    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }
}

// ─── Validation ──────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq)]
pub enum ValidationError {
    MissingId,
    MissingName(CoinId),
    MissingSymbol(CoinId),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingId => write!(f, "Missing coin id"),
            ValidationError::MissingName(id) => write!(f, "Missing name ({})", id),
            ValidationError::MissingSymbol(id) => write!(f, "Missing symbol ({})", id),
        }
    }
}

impl std::error::Error for ValidationError {}
