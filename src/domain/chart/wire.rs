//! Wire types for OHLC responses (REST).

use serde::{Deserialize, Serialize};

/// Raw OHLC row: `[timestamp, open, high, low, close]`.
///
/// `coins/{id}/ohlc` reports the timestamp in milliseconds; other sources
/// may use seconds. See [`super::normalize_timestamp`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OhlcTuple(pub f64, pub f64, pub f64, pub f64, pub f64);

impl OhlcTuple {
    pub fn timestamp(&self) -> f64 {
        self.0
    }
}

impl From<[f64; 5]> for OhlcTuple {
    fn from(raw: [f64; 5]) -> Self {
        Self(raw[0], raw[1], raw[2], raw[3], raw[4])
    }
}

impl From<(f64, f64, f64, f64, f64)> for OhlcTuple {
    fn from((t, o, h, l, c): (f64, f64, f64, f64, f64)) -> Self {
        Self(t, o, h, l, c)
    }
}

/// REST response of `coins/{id}/ohlc`.
pub type OhlcResponse = Vec<OhlcTuple>;
