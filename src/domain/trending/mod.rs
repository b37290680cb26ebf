//! Trending domain — coins currently trending in search.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::domain::coin::convert::usable_image;
use crate::shared::{CoinId, Trend};
use serde::{Deserialize, Serialize};

/// Number of trending coins shown on the home page.
pub const TOP_TRENDING: usize = 6;

/// A trending coin with its USD price snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingCoin {
    pub id: CoinId,
    pub name: String,
    pub symbol: String,
    pub market_cap_rank: Option<u32>,
    pub thumb: Option<String>,
    pub large: Option<String>,
    pub price_usd: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
}

impl TrendingCoin {
    pub fn trend(&self) -> Trend {
        Trend::from_change(self.price_change_percentage_24h.unwrap_or_default())
    }
}

impl From<wire::TrendingItemResponse> for TrendingCoin {
    fn from(item: wire::TrendingItemResponse) -> Self {
        let data = item.data.unwrap_or_default();
        Self {
            id: item.id,
            name: item.name,
            symbol: item.symbol,
            market_cap_rank: item.market_cap_rank,
            thumb: usable_image(item.thumb),
            large: usable_image(item.large),
            price_usd: data.price,
            price_change_percentage_24h: data.price_change_percentage_24h.get("usd").copied(),
        }
    }
}

impl From<wire::TrendingResponse> for Vec<TrendingCoin> {
    fn from(resp: wire::TrendingResponse) -> Self {
        resp.coins
            .into_iter()
            .map(|entry| TrendingCoin::from(entry.item))
            .collect()
    }
}
