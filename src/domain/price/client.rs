//! Prices sub-client — spot quotes and polling.

use crate::client::CoinscopeClient;
use crate::domain::price::{self, PriceQuote};
use crate::error::{HttpError, SdkError};
use futures_util::Stream;
use std::time::Duration;

/// Sub-client for price operations.
pub struct Prices<'a> {
    pub(crate) client: &'a CoinscopeClient,
}

impl<'a> Prices<'a> {
    /// Quotes for several coins in one currency, sorted by coin id.
    pub async fn simple(&self, ids: &[&str], vs_currency: &str) -> Result<Vec<PriceQuote>, SdkError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let resp = self
            .client
            .http
            .get_simple_price(&ids.join(","), vs_currency)
            .await?;
        Ok(price::quotes_from_wire(resp, vs_currency))
    }

    /// Quote for a single coin.
    pub async fn quote(&self, id: &str, vs_currency: &str) -> Result<PriceQuote, SdkError> {
        self.simple(&[id], vs_currency)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                SdkError::Http(HttpError::NotFound(format!(
                    "No {} price for {}",
                    vs_currency, id
                )))
            })
    }

    /// Poll a coin's quote forever, first poll immediately.
    ///
    /// Failed polls are yielded as errors and polling continues. Drop the
    /// stream to stop.
    pub fn watch(
        &self,
        id: &'a str,
        vs_currency: &'a str,
        interval: Duration,
    ) -> impl Stream<Item = Result<PriceQuote, SdkError>> + 'a {
        let prices = Prices {
            client: self.client,
        };
        async_stream::stream! {
            loop {
                yield prices.quote(id, vs_currency).await;
                futures_timer::Delay::new(interval).await;
            }
        }
    }
}
