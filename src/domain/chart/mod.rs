//! Chart domain — candlestick series normalization and chart state.

#[cfg(feature = "http")]
pub mod client;
pub mod state;
pub mod wire;

use serde::{Deserialize, Serialize};

pub use state::ChartState;
pub use wire::OhlcTuple;

/// Raw timestamps above this are taken to be milliseconds since the epoch.
///
/// Heuristic: a second-based timestamp only exceeds 10^12 after the year
/// 33658, but such a value would still be divided by 1000.
pub const MILLIS_THRESHOLD: f64 = 1_000_000_000_000.0;

/// One plotted candle, timestamped in seconds since the epoch.
///
/// Converted millisecond timestamps are whole seconds. Second-based input is
/// kept as sent, fractional part included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Candle {
    pub fn is_bullish(&self) -> bool {
        self.close >= self.open
    }
}

impl From<OhlcTuple> for Candle {
    fn from(raw: OhlcTuple) -> Self {
        Self {
            time: normalize_timestamp(raw.0),
            open: raw.1,
            high: raw.2,
            low: raw.3,
            close: raw.4,
        }
    }
}

impl From<Candle> for OhlcTuple {
    fn from(c: Candle) -> Self {
        OhlcTuple(c.time, c.open, c.high, c.low, c.close)
    }
}

/// Convert a raw timestamp to seconds.
///
/// Millisecond values are divided by 1000 and floored. Anything else is
/// already in seconds and returned unchanged.
pub fn normalize_timestamp(raw: f64) -> f64 {
    if raw > MILLIS_THRESHOLD {
        (raw / 1000.0).floor()
    } else {
        raw
    }
}

/// Normalize raw OHLC rows for plotting.
///
/// Timestamps are converted with [`normalize_timestamp`]; prices pass through
/// untouched. Input order is kept, and each run of consecutive rows sharing a
/// normalized timestamp collapses to its first row. Equal timestamps that are
/// not adjacent are all kept.
pub fn normalize_candles<I, T>(raw: I) -> Vec<Candle>
where
    I: IntoIterator<Item = T>,
    T: Into<OhlcTuple>,
{
    let mut candles: Vec<Candle> = Vec::new();
    for row in raw {
        let tuple: OhlcTuple = row.into();
        let candle = Candle::from(tuple);
        if candles.last().is_some_and(|last| last.time == candle.time) {
            continue;
        }
        candles.push(candle);
    }
    candles
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(t: f64, o: f64, h: f64, l: f64, c: f64) -> OhlcTuple {
        OhlcTuple(t, o, h, l, c)
    }

    #[test]
    fn test_millisecond_timestamps_are_scaled() {
        assert_eq!(normalize_timestamp(1_700_000_000_000.0), 1_700_000_000.0);
        assert_eq!(normalize_timestamp(1_700_000_000_999.0), 1_700_000_000.0);
        assert_eq!(normalize_timestamp(1_700_000_000.0), 1_700_000_000.0);
        assert_eq!(normalize_timestamp(MILLIS_THRESHOLD), MILLIS_THRESHOLD);
    }

    #[test]
    fn test_second_timestamps_keep_fractions() {
        assert_eq!(normalize_timestamp(1000.25), 1000.25);

        let out = normalize_candles(vec![
            row(1000.25, 1.0, 1.0, 1.0, 1.0),
            row(1000.75, 2.0, 2.0, 2.0, 2.0),
        ]);
        let times: Vec<f64> = out.iter().map(|c| c.time).collect();
        assert_eq!(times, [1000.25, 1000.75]);
    }

    #[test]
    fn test_empty_input() {
        assert!(normalize_candles(Vec::<OhlcTuple>::new()).is_empty());
    }

    #[test]
    fn test_duplicate_run_keeps_first() {
        let out = normalize_candles([
            [1000.0, 10.0, 11.0, 9.0, 10.0],
            [1000.0, 12.0, 13.0, 11.0, 12.0],
            [2000.0, 12.0, 13.0, 11.0, 12.0],
        ]);
        assert_eq!(
            out,
            vec![
                Candle { time: 1000.0, open: 10.0, high: 11.0, low: 9.0, close: 10.0 },
                Candle { time: 2000.0, open: 12.0, high: 13.0, low: 11.0, close: 12.0 },
            ]
        );
    }

    #[test]
    fn test_non_adjacent_duplicates_are_kept() {
        let out = normalize_candles(vec![
            row(1000.0, 1.0, 1.0, 1.0, 1.0),
            row(2000.0, 2.0, 2.0, 2.0, 2.0),
            row(1000.0, 3.0, 3.0, 3.0, 3.0),
        ]);
        let times: Vec<f64> = out.iter().map(|c| c.time).collect();
        assert_eq!(times, [1000.0, 2000.0, 1000.0]);
    }

    #[test]
    fn test_runs_collapse_after_unit_conversion() {
        let out = normalize_candles(vec![
            row(1_700_000_000_000.0, 1.0, 2.0, 0.5, 1.5),
            row(1_700_000_000_400.0, 9.0, 9.0, 9.0, 9.0),
            row(1_700_000_000.0, 7.0, 7.0, 7.0, 7.0),
            row(1_700_000_060_000.0, 1.5, 2.5, 1.0, 2.0),
        ]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].time, 1_700_000_000.0);
        assert_eq!(out[0].open, 1.0);
        assert_eq!(out[1].time, 1_700_000_060.0);
    }

    #[test]
    fn test_prices_pass_through_unvalidated() {
        let out = normalize_candles(vec![row(5.0, -1.0, 0.000_001_234, 1e9, -0.0)]);
        assert_eq!(out[0].open, -1.0);
        assert_eq!(out[0].high, 0.000_001_234);
        assert_eq!(out[0].low, 1e9);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let raw = vec![
            row(1_700_000_000_000.0, 1.0, 2.0, 0.5, 1.5),
            row(1_700_000_000_000.0, 1.1, 2.1, 0.6, 1.6),
            row(1_700_000_001_000.0, 1.2, 2.2, 0.7, 1.7),
            row(1_700_000_000_000.0, 1.3, 2.3, 0.8, 1.8),
            row(1_700_000_000.0, 1.4, 2.4, 0.9, 1.9),
        ];
        let once = normalize_candles(raw.clone());
        let twice = normalize_candles(once.clone());
        assert_eq!(once, twice);
        assert!(once.len() <= raw.len());
        for pair in once.windows(2) {
            assert_ne!(pair[0].time, pair[1].time);
        }
    }
}
