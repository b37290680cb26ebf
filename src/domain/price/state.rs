//! Live price state — app-owned, SDK-provided update logic.

use super::PriceQuote;

/// Latest polled quote for one coin, plus connection status.
///
/// `connected` is true after the last poll succeeded. A failed poll keeps
/// the previous quote so the UI can keep showing it.
#[derive(Debug, Clone, Default)]
pub struct PriceFeed {
    latest: Option<PriceQuote>,
    connected: bool,
    last_error: Option<String>,
}

impl PriceFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_quote(&mut self, quote: PriceQuote) {
        self.latest = Some(quote);
        self.connected = true;
        self.last_error = None;
    }

    pub fn mark_error(&mut self, error: &dyn std::fmt::Display) {
        tracing::warn!("Price poll failed: {}", error);
        self.connected = false;
        self.last_error = Some(error.to_string());
    }

    pub fn latest(&self) -> Option<&PriceQuote> {
        self.latest.as_ref()
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Price the trade simulator anchors to. Zero until the first quote.
    pub fn reference_price(&self) -> f64 {
        self.latest.as_ref().map(|q| q.price).unwrap_or_default()
    }
}
