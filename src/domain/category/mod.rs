//! Category domain — coin categories ranked by market cap.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use crate::domain::coin::convert::usable_image;
use crate::shared::Trend;
use serde::{Deserialize, Serialize};

/// Number of categories shown in a "top categories" table.
pub const TOP_CATEGORIES: usize = 10;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub market_cap: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub volume_24h: Option<f64>,
    pub top_coin_images: Vec<String>,
}

impl Category {
    pub fn trend(&self) -> Trend {
        Trend::from_change(self.market_cap_change_24h.unwrap_or_default())
    }
}

impl From<wire::CategoryResponse> for Category {
    fn from(c: wire::CategoryResponse) -> Self {
        Self {
            id: c.id,
            name: c.name,
            market_cap: c.market_cap,
            market_cap_change_24h: c.market_cap_change_24h,
            volume_24h: c.volume_24h,
            top_coin_images: c
                .top_3_coins
                .into_iter()
                .filter_map(|url| usable_image(Some(url)))
                .collect(),
        }
    }
}
