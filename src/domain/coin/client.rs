//! Coins sub-client — market pages, details, search, cache.

use crate::client::CoinscopeClient;
use crate::domain::coin::wire::{CoinMarketResponse, MarketsQuery};
use crate::domain::coin::{self, CoinDetail, CoinMarket, CoinsPage, MIN_SEARCH_LEN, SEARCH_RESULT_LIMIT};
use crate::domain::pagination::Pagination;
use crate::error::SdkError;
use std::time::Instant;

/// Sub-client for coin operations.
pub struct Coins<'a> {
    pub(crate) client: &'a CoinscopeClient,
}

impl<'a> Coins<'a> {
    /// One page of `coins/markets` with pager state.
    ///
    /// Rows that fail validation are skipped. Paging is estimated from the
    /// raw row count, so a skipped row does not end the listing.
    pub async fn markets(&self, query: &MarketsQuery) -> Result<CoinsPage, SdkError> {
        let rows = self.client.http.get_coins_markets(query).await?;
        let pagination = Pagination::from_fetch(query.page, query.per_page, rows.len());
        Ok(CoinsPage {
            coins: convert_rows(rows),
            pagination,
        })
    }

    /// Get a coin's details. Uses TTL cache.
    pub async fn get(&self, id: &str) -> Result<CoinDetail, SdkError> {
        {
            let cache = self.client.coin_cache.read().await;
            if let Some((detail, fetched_at)) = cache.get(id) {
                if fetched_at.elapsed() < self.client.coin_cache_ttl {
                    tracing::debug!(id, "Coin cache hit");
                    return Ok(detail.clone());
                }
            }
        }

        let resp = self.client.http.get_coin(id).await?;
        let detail: CoinDetail = resp
            .try_into()
            .map_err(|e: coin::ValidationError| SdkError::Validation(e.to_string()))?;
        self.client
            .coin_cache
            .write()
            .await
            .insert(id.to_string(), (detail.clone(), Instant::now()));
        Ok(detail)
    }

    /// Search coins by name or symbol, with USD market data for the top hits.
    ///
    /// Queries shorter than two characters (after trimming) return nothing
    /// without touching the network.
    pub async fn search(&self, query: &str) -> Result<Vec<CoinMarket>, SdkError> {
        let query = query.trim();
        if query.chars().count() < MIN_SEARCH_LEN {
            return Ok(Vec::new());
        }

        let hits = self.client.http.search(query).await?;
        let ids = hits
            .coins
            .iter()
            .take(SEARCH_RESULT_LIMIT)
            .map(|c| c.id.as_str())
            .collect::<Vec<_>>()
            .join(",");
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let market_query = MarketsQuery {
            ids: Some(ids),
            ..MarketsQuery::default()
        };
        let rows = self.client.http.get_coins_markets(&market_query).await?;
        Ok(convert_rows(rows))
    }

    /// Invalidate a cached coin by id.
    pub async fn invalidate(&self, id: &str) {
        self.client.coin_cache.write().await.remove(id);
    }

    /// Clear the coin detail cache.
    pub async fn clear_cache(&self) {
        self.client.coin_cache.write().await.clear();
    }
}

fn convert_rows(rows: Vec<CoinMarketResponse>) -> Vec<CoinMarket> {
    rows.into_iter()
        .filter_map(|row| match CoinMarket::try_from(row) {
            Ok(coin) => Some(coin),
            Err(e) => {
                tracing::warn!("Skipping invalid market row: {}", e);
                None
            }
        })
        .collect()
}
