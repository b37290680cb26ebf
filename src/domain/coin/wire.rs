//! Wire types for coin responses (REST) and the markets query.

use crate::shared::serde_util::null_as_default;
use crate::shared::CoinId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ─── coins/markets ───────────────────────────────────────────────────────────

/// Query parameters for `coins/markets`.
#[derive(Debug, Clone, PartialEq)]
pub struct MarketsQuery {
    pub vs_currency: String,
    pub order: String,
    pub per_page: u32,
    pub page: u32,
    /// Comma-separated coin ids to restrict the listing to.
    pub ids: Option<String>,
    pub price_change_percentage: Option<String>,
    pub sparkline: bool,
}

impl Default for MarketsQuery {
    fn default() -> Self {
        Self {
            vs_currency: "usd".to_string(),
            order: "market_cap_desc".to_string(),
            per_page: 100,
            page: 1,
            ids: None,
            price_change_percentage: Some("24h".to_string()),
            sparkline: false,
        }
    }
}

impl MarketsQuery {
    pub fn page(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page,
            ..Self::default()
        }
    }

    pub fn to_params(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("vs_currency", Some(self.vs_currency.clone())),
            ("ids", self.ids.clone()),
            ("order", Some(self.order.clone())),
            ("per_page", Some(self.per_page.to_string())),
            ("page", Some(self.page.to_string())),
            ("sparkline", Some(self.sparkline.to_string())),
            ("price_change_percentage", self.price_change_percentage.clone()),
        ]
    }
}

/// One row of `coins/markets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinMarketResponse {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub high_24h: Option<f64>,
    #[serde(default)]
    pub low_24h: Option<f64>,
    #[serde(default)]
    pub price_change_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

// ─── coins/{id} ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CoinImageResponse {
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub small: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CoinLinksResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub homepage: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub blockchain_site: Vec<String>,
    #[serde(default)]
    pub subreddit_url: Option<String>,
}

/// Per-currency market data of a coin. Maps are keyed by lowercase currency code.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketDataResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub current_price: HashMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub market_cap: HashMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_volume: HashMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub high_24h: HashMap<String, f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub low_24h: HashMap<String, f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_change_percentage_24h_in_currency: HashMap<String, f64>,
}

/// REST response of `coins/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinDetailResponse {
    pub id: CoinId,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: Option<CoinImageResponse>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: HashMap<String, String>,
    #[serde(default)]
    pub links: Option<CoinLinksResponse>,
    #[serde(default)]
    pub market_data: Option<MarketDataResponse>,
    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,
}

// ─── search ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SearchCoinResponse {
    pub id: CoinId,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
}

/// REST response of `search`. Only the coin hits are modelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SearchResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub coins: Vec<SearchCoinResponse>,
}
