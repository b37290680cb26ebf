//! Wire types for `search/trending` (REST).

use crate::shared::serde_util::{null_as_default, option_f64_lenient};
use crate::shared::CoinId;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrendingDataResponse {
    #[serde(default, with = "option_f64_lenient")]
    pub price: Option<f64>,
    /// 24h change keyed by lowercase currency code.
    #[serde(default, deserialize_with = "null_as_default")]
    pub price_change_percentage_24h: HashMap<String, f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendingItemResponse {
    pub id: CoinId,
    pub name: String,
    pub symbol: String,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub large: Option<String>,
    #[serde(default)]
    pub score: Option<u32>,
    #[serde(default)]
    pub data: Option<TrendingDataResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrendingEntryResponse {
    pub item: TrendingItemResponse,
}

/// REST response of `search/trending`. Only the coin list is modelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TrendingResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub coins: Vec<TrendingEntryResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trending_response_deserialize() {
        let json = r#"{
            "coins": [
                {"item": {
                    "id": "pepe", "coin_id": 29850, "name": "Pepe", "symbol": "PEPE",
                    "market_cap_rank": 40, "thumb": "https://img.test/pepe.png",
                    "score": 0,
                    "data": {"price": 0.0000012, "price_change_percentage_24h": {"usd": 12.5}}
                }}
            ],
            "nfts": [],
            "categories": []
        }"#;
        let resp: TrendingResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.coins.len(), 1);
        let item = &resp.coins[0].item;
        assert_eq!(item.id.as_str(), "pepe");
        let data = item.data.as_ref().unwrap();
        assert_eq!(data.price, Some(0.0000012));
        assert_eq!(data.price_change_percentage_24h.get("usd"), Some(&12.5));
    }

    #[test]
    fn test_string_price_serializes_as_number() {
        let data: TrendingDataResponse =
            serde_json::from_str(r#"{"price": "0.5", "price_change_percentage_24h": null}"#).unwrap();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["price"], 0.5f64);
        assert!(json["price_change_percentage_24h"].as_object().unwrap().is_empty());
    }
}
