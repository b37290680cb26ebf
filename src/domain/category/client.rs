//! Categories sub-client — coin categories by market cap, cached.

use crate::client::{read_fresh, CoinscopeClient};
use crate::domain::category::Category;
use crate::error::SdkError;
use std::time::Instant;

/// Sub-client for coin categories.
pub struct Categories<'a> {
    pub(crate) client: &'a CoinscopeClient,
}

impl<'a> Categories<'a> {
    /// All categories. Uses TTL cache.
    pub async fn list(&self) -> Result<Vec<Category>, SdkError> {
        if let Some(categories) =
            read_fresh(&self.client.categories_cache, self.client.categories_cache_ttl).await
        {
            return Ok(categories);
        }

        let categories: Vec<Category> = self
            .client
            .http
            .get_coins_categories()
            .await?
            .into_iter()
            .map(Category::from)
            .collect();
        *self.client.categories_cache.write().await = Some((categories.clone(), Instant::now()));
        Ok(categories)
    }

    /// First `n` categories, in API order.
    pub async fn top(&self, n: usize) -> Result<Vec<Category>, SdkError> {
        let mut categories = self.list().await?;
        categories.truncate(n);
        Ok(categories)
    }

    pub async fn clear_cache(&self) {
        *self.client.categories_cache.write().await = None;
    }
}
