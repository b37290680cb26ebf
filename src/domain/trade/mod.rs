//! Trade domain — simulated trade prints around the live price.

pub mod state;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub use state::TradeTape;

/// Number of trades kept on the tape.
pub const TAPE_CAPACITY: usize = 7;

/// Interval between simulated trades.
pub const SIMULATION_INTERVAL: Duration = Duration::from_secs(4);

/// Maximum absolute distance of a simulated price from the reference.
pub const MAX_PRICE_VARIATION: f64 = 0.025;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl TradeSide {
    pub fn as_str(&self) -> &'static str {
        match self {
            TradeSide::Buy => "buy",
            TradeSide::Sell => "sell",
        }
    }
}

/// A trade print shown on the tape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub price: f64,
    pub amount: f64,
    /// `price * amount`.
    pub value: f64,
    pub side: TradeSide,
    pub time: DateTime<Utc>,
}

/// Generate a trade near `reference_price`.
///
/// Returns `None` while no price is known (`reference_price == 0`).
pub fn simulate_trade<R: Rng>(
    reference_price: f64,
    rng: &mut R,
    now: DateTime<Utc>,
) -> Option<Trade> {
    if reference_price == 0.0 {
        return None;
    }

    let side = if rng.gen_bool(0.5) {
        TradeSide::Buy
    } else {
        TradeSide::Sell
    };
    let variation = rng.gen::<f64>() * (MAX_PRICE_VARIATION * 2.0) - MAX_PRICE_VARIATION;
    let price = reference_price + variation;
    let amount = rng.gen::<f64>() * 1.5 + 0.1;

    Some(Trade {
        price,
        amount,
        value: price * amount,
        side,
        time: now,
    })
}
