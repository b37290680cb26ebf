//! Price domain — spot quotes from `simple/price` and live-price state.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod wire;

use crate::shared::{CoinId, Trend};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use state::PriceFeed;

/// Default polling interval for live prices.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Spot price of one coin in one currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub coin_id: CoinId,
    pub currency: String,
    pub price: f64,
    pub change_24h: Option<f64>,
    pub last_updated_at: Option<DateTime<Utc>>,
}

impl PriceQuote {
    pub fn trend(&self) -> Trend {
        Trend::from_change(self.change_24h.unwrap_or_default())
    }
}

/// Extract quotes for `currency` from a `simple/price` response.
///
/// Coins without a price in that currency are skipped. Output is sorted by
/// coin id.
pub fn quotes_from_wire(resp: wire::SimplePriceResponse, currency: &str) -> Vec<PriceQuote> {
    let currency = currency.to_ascii_lowercase();
    let change_key = format!("{}_24h_change", currency);

    let mut quotes: Vec<PriceQuote> = resp
        .into_iter()
        .filter_map(|(coin_id, fields)| {
            let price = fields.get(&currency).copied().flatten()?;
            let last_updated_at = fields
                .get("last_updated_at")
                .copied()
                .flatten()
                .and_then(|secs| DateTime::<Utc>::from_timestamp(secs as i64, 0));
            Some(PriceQuote {
                coin_id: CoinId::from(coin_id),
                currency: currency.clone(),
                price,
                change_24h: fields.get(&change_key).copied().flatten(),
                last_updated_at,
            })
        })
        .collect();

    quotes.sort_by(|a, b| a.coin_id.cmp(&b.coin_id));
    quotes
}
