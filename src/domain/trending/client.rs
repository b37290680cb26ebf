//! Trending sub-client — trending search coins, cached.

use crate::client::{read_fresh, CoinscopeClient};
use crate::domain::trending::TrendingCoin;
use crate::error::SdkError;
use std::time::Instant;

/// Sub-client for trending coins.
pub struct Trending<'a> {
    pub(crate) client: &'a CoinscopeClient,
}

impl<'a> Trending<'a> {
    /// All trending coins. Uses TTL cache.
    pub async fn list(&self) -> Result<Vec<TrendingCoin>, SdkError> {
        if let Some(coins) =
            read_fresh(&self.client.trending_cache, self.client.trending_cache_ttl).await
        {
            return Ok(coins);
        }

        let coins: Vec<TrendingCoin> = self.client.http.get_trending().await?.into();
        *self.client.trending_cache.write().await = Some((coins.clone(), Instant::now()));
        Ok(coins)
    }

    /// First `n` trending coins, in API order.
    pub async fn top(&self, n: usize) -> Result<Vec<TrendingCoin>, SdkError> {
        let mut coins = self.list().await?;
        coins.truncate(n);
        Ok(coins)
    }

    pub async fn clear_cache(&self) {
        *self.client.trending_cache.write().await = None;
    }
}
