//! Chart state containers — app-owned, SDK-provided update logic.

use super::{normalize_candles, Candle, OhlcTuple};
use crate::shared::{LiveInterval, Period, RequestSequence, Ticket};

/// Candlestick chart state for one coin.
///
/// The app owns instances of this type. Period switches go through
/// [`ChartState::begin_fetch`] / [`ChartState::apply_fetched`] so a slow
/// response for an older period never overwrites a newer one.
#[derive(Debug, Clone, Default)]
pub struct ChartState {
    period: Period,
    live_interval: LiveInterval,
    candles: Vec<Candle>,
    loading: bool,
    requests: RequestSequence,
}

impl ChartState {
    pub fn new(period: Period) -> Self {
        Self {
            period,
            ..Self::default()
        }
    }

    /// Seed the chart from server-fetched rows.
    pub fn with_candles(period: Period, raw: Vec<OhlcTuple>) -> Self {
        Self {
            period,
            candles: normalize_candles(raw),
            ..Self::default()
        }
    }

    pub fn period(&self) -> Period {
        self.period
    }

    pub fn live_interval(&self) -> LiveInterval {
        self.live_interval
    }

    pub fn set_live_interval(&mut self, interval: LiveInterval) {
        self.live_interval = interval;
    }

    pub fn candles(&self) -> &[Candle] {
        &self.candles
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Switch period. Returns `false` (and does nothing) if already selected.
    pub fn select_period(&mut self, period: Period) -> bool {
        if period == self.period {
            return false;
        }
        self.period = period;
        true
    }

    /// Mark a fetch as started and return its ticket.
    pub fn begin_fetch(&mut self) -> Ticket {
        self.loading = true;
        self.requests.begin()
    }

    /// Replace the series with fetched rows if `ticket` is still current.
    ///
    /// Returns whether the rows were applied.
    pub fn apply_fetched(&mut self, ticket: Ticket, raw: Vec<OhlcTuple>) -> bool {
        if !self.requests.is_current(ticket) {
            tracing::debug!(
                generation = ticket.generation(),
                "Discarding stale OHLC response"
            );
            return false;
        }
        self.candles = normalize_candles(raw);
        self.loading = false;
        true
    }

    /// Record a failed fetch. Only the current request clears the loading flag.
    pub fn fail_fetch(&mut self, ticket: Ticket, error: &dyn std::fmt::Display) {
        if self.requests.is_current(ticket) {
            tracing::warn!("Failed to fetch OHLC data: {}", error);
            self.loading = false;
        }
    }

    /// Apply a live candle.
    ///
    /// Same timestamp as the last candle replaces it, a newer one is appended,
    /// an older one is dropped.
    pub fn apply_live(&mut self, raw: OhlcTuple) {
        let candle = Candle::from(raw);
        match self.candles.last().map(|c| c.time) {
            Some(last) if last == candle.time => {
                if let Some(slot) = self.candles.last_mut() {
                    *slot = candle;
                }
            }
            Some(last) if last > candle.time => {
                tracing::warn!(
                    last,
                    received = candle.time,
                    "Dropping out-of-order live candle"
                );
            }
            _ => self.candles.push(candle),
        }
    }

    pub fn clear(&mut self) {
        self.candles.clear();
        self.requests.invalidate();
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(t: f64, close: f64) -> OhlcTuple {
        OhlcTuple(t, close, close, close, close)
    }

    #[test]
    fn test_with_candles_normalizes() {
        let state = ChartState::with_candles(
            Period::Daily,
            vec![raw(1_700_000_000_000.0, 1.0), raw(1_700_000_000_000.0, 2.0)],
        );
        assert_eq!(state.candles().len(), 1);
        assert_eq!(state.candles()[0].time, 1_700_000_000.0);
    }

    #[test]
    fn test_select_same_period_is_noop() {
        let mut state = ChartState::new(Period::Weekly);
        assert!(!state.select_period(Period::Weekly));
        assert!(state.select_period(Period::Yearly));
        assert_eq!(state.period(), Period::Yearly);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut state = ChartState::new(Period::Daily);
        let slow = state.begin_fetch();
        let fast = state.begin_fetch();

        assert!(state.apply_fetched(fast, vec![raw(2000.0, 2.0)]));
        assert!(!state.is_loading());
        assert!(!state.apply_fetched(slow, vec![raw(1000.0, 1.0)]));
        assert_eq!(state.candles()[0].time, 2000.0);
    }

    #[test]
    fn test_stale_failure_keeps_loading() {
        let mut state = ChartState::new(Period::Daily);
        let old = state.begin_fetch();
        let current = state.begin_fetch();
        state.fail_fetch(old, &"timeout");
        assert!(state.is_loading());
        state.fail_fetch(current, &"timeout");
        assert!(!state.is_loading());
    }

    #[test]
    fn test_apply_live_replaces_appends_and_drops() {
        let mut state = ChartState::with_candles(Period::Daily, vec![raw(100.0, 1.0)]);
        state.apply_live(raw(100.0, 1.5));
        assert_eq!(state.candles().len(), 1);
        assert_eq!(state.candles()[0].close, 1.5);

        state.apply_live(raw(160_000.0, 2.0));
        assert_eq!(state.candles().len(), 2);

        state.apply_live(raw(50.0, 9.0));
        assert_eq!(state.candles().len(), 2);
        assert_eq!(state.candles()[1].close, 2.0);
    }

    #[test]
    fn test_clear_invalidates_outstanding_fetch() {
        let mut state = ChartState::new(Period::Monthly);
        let ticket = state.begin_fetch();
        state.clear();
        assert!(!state.apply_fetched(ticket, vec![raw(1.0, 1.0)]));
        assert!(state.candles().is_empty());
    }
}
