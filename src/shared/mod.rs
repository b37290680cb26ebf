//! Shared newtypes and utilities used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw format the API sends, so they can be used directly in wire types
//! without conversion overhead.

pub mod fmt;
pub mod sequence;
pub mod serde_util;

pub use sequence::{RequestSequence, Ticket};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── CoinId ──────────────────────────────────────────────────────────────────

/// Newtype for CoinGecko API coin identifiers (e.g. `"bitcoin"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CoinId(String);

impl CoinId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CoinId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CoinId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for CoinId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for CoinId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(CoinId(s.to_string()))
    }
}

impl Serialize for CoinId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for CoinId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(CoinId(s))
    }
}

// ─── Currency ────────────────────────────────────────────────────────────────

/// Fiat currencies offered by the converter and price queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
    Jpy,
    Inr,
}

impl Currency {
    pub const ALL: [Currency; 5] = [
        Currency::Usd,
        Currency::Eur,
        Currency::Gbp,
        Currency::Jpy,
        Currency::Inr,
    ];

    /// Lowercase code as used in `vs_currency` query params.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Usd => "usd",
            Self::Eur => "eur",
            Self::Gbp => "gbp",
            Self::Jpy => "jpy",
            Self::Inr => "inr",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Usd => "$",
            Self::Eur => "€",
            Self::Gbp => "£",
            Self::Jpy => "¥",
            Self::Inr => "₹",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str().to_uppercase())
    }
}

impl FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "usd" => Ok(Self::Usd),
            "eur" => Ok(Self::Eur),
            "gbp" => Ok(Self::Gbp),
            "jpy" => Ok(Self::Jpy),
            "inr" => Ok(Self::Inr),
            other => Err(format!("unsupported currency: {}", other)),
        }
    }
}

// ─── Period ──────────────────────────────────────────────────────────────────

/// Chart range selectable for historical OHLC data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Daily, Period::Weekly, Period::Monthly, Period::Yearly];

    /// Value for the `days` query param of the OHLC endpoint.
    pub fn days(&self) -> u32 {
        match self {
            Self::Daily => 1,
            Self::Weekly => 7,
            Self::Monthly => 30,
            Self::Yearly => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "1D",
            Self::Weekly => "1W",
            Self::Monthly => "1M",
            Self::Yearly => "1Y",
        }
    }

    /// Whether the time-of-day is meaningful on the chart's time axis.
    pub fn shows_time(&self) -> bool {
        !matches!(self, Self::Yearly)
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ─── LiveInterval ────────────────────────────────────────────────────────────

/// Candle interval for live chart updates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LiveInterval {
    #[default]
    #[serde(rename = "1s")]
    Second1,
    #[serde(rename = "1m")]
    Minute1,
}

impl LiveInterval {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Second1 => "1s",
            Self::Minute1 => "1m",
        }
    }

    pub fn seconds(&self) -> u64 {
        match self {
            Self::Second1 => 1,
            Self::Minute1 => 60,
        }
    }
}

// ─── Trend ───────────────────────────────────────────────────────────────────

/// Direction of a price change, for up/down styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
}

impl Trend {
    /// Strictly positive changes trend up; zero and negatives trend down.
    pub fn from_change(value: f64) -> Self {
        if value > 0.0 {
            Self::Up
        } else {
            Self::Down
        }
    }

    pub fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coin_id_serde() {
        let id = CoinId::from("bitcoin");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"bitcoin\"");
        let back: CoinId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn test_currency_parse_and_display() {
        assert_eq!("EUR".parse::<Currency>().unwrap(), Currency::Eur);
        assert!("chf".parse::<Currency>().is_err());
        assert_eq!(Currency::Jpy.to_string(), "JPY");
        let c: Currency = serde_json::from_str("\"inr\"").unwrap();
        assert_eq!(c, Currency::Inr);
    }

    #[test]
    fn test_period_days_and_time_axis() {
        let days: Vec<u32> = Period::ALL.iter().map(Period::days).collect();
        assert_eq!(days, [1, 7, 30, 365]);
        assert!(Period::Monthly.shows_time());
        assert!(!Period::Yearly.shows_time());
        let p: Period = serde_json::from_str("\"weekly\"").unwrap();
        assert_eq!(p, Period::Weekly);
    }

    #[test]
    fn test_live_interval_serde() {
        let i: LiveInterval = serde_json::from_str("\"1m\"").unwrap();
        assert_eq!(i, LiveInterval::Minute1);
        assert_eq!(i.seconds(), 60);
    }

    #[test]
    fn test_trend_zero_is_down() {
        assert!(Trend::from_change(0.01).is_up());
        assert_eq!(Trend::from_change(0.0), Trend::Down);
        assert_eq!(Trend::from_change(-3.2), Trend::Down);
    }
}
