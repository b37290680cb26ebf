//! Charts sub-client — OHLC candles per period.

use crate::client::CoinscopeClient;
use crate::domain::chart::{normalize_candles, Candle, ChartState, OhlcTuple};
use crate::error::SdkError;
use crate::shared::Period;

/// Sub-client for chart operations.
pub struct Charts<'a> {
    pub(crate) client: &'a CoinscopeClient,
}

impl<'a> Charts<'a> {
    /// Normalized candles for `period`.
    pub async fn ohlc(
        &self,
        id: &str,
        vs_currency: &str,
        period: Period,
    ) -> Result<Vec<Candle>, SdkError> {
        Ok(normalize_candles(self.ohlc_raw(id, vs_currency, period).await?))
    }

    /// Rows as returned by the API, timestamps in milliseconds.
    pub async fn ohlc_raw(
        &self,
        id: &str,
        vs_currency: &str,
        period: Period,
    ) -> Result<Vec<OhlcTuple>, SdkError> {
        Ok(self
            .client
            .http
            .get_coin_ohlc(id, vs_currency, period)
            .await?)
    }

    /// Fetch `state`'s current period and apply it if no newer fetch started.
    ///
    /// Returns whether the result was applied. Apps that fetch from several
    /// tasks should use [`ChartState::begin_fetch`] and
    /// [`ChartState::apply_fetched`] directly.
    pub async fn refresh(
        &self,
        id: &str,
        vs_currency: &str,
        state: &mut ChartState,
    ) -> Result<bool, SdkError> {
        let ticket = state.begin_fetch();
        match self.ohlc_raw(id, vs_currency, state.period()).await {
            Ok(raw) => Ok(state.apply_fetched(ticket, raw)),
            Err(e) => {
                state.fail_fetch(ticket, &e);
                Err(e)
            }
        }
    }
}
