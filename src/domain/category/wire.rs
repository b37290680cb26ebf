//! Wire types for `coins/categories` (REST).

use crate::shared::serde_util::null_as_default;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryResponse {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_change_24h: Option<f64>,
    #[serde(default)]
    pub volume_24h: Option<f64>,
    /// Image URLs of the category's three largest coins.
    #[serde(default, deserialize_with = "null_as_default")]
    pub top_3_coins: Vec<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}
