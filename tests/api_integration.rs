//! Integration tests for the CoinGecko REST client.
//!
//! The live tests hit the public API and are `#[ignore]`. They read
//! `COINGECKO_API_KEY` (and optionally `COINGECKO_BASE_URL`,
//! `COINGECKO_API_PLAN`) from the environment or a `.env` file.
//!
//! Run with:
//! ```bash
//! cargo test --test api_integration -- --ignored
//! ```

use std::time::Duration;

use futures_util::StreamExt;
use tokio::time::timeout;

use coinscope::domain::chart::wire::OhlcResponse;
use coinscope::domain::coin::wire::CoinMarketResponse;
use coinscope::domain::trending::wire::TrendingResponse;
use coinscope::prelude::*;

const TEST_TIMEOUT: Duration = Duration::from_secs(20);

fn live_client() -> CoinscopeClient {
    dotenvy::dotenv().ok();
    CoinscopeClientBuilder::from_env()
        .expect("COINGECKO_API_KEY must be set")
        .build()
        .expect("client should build")
}

// ── Offline: recorded payloads through the public API ────────────────────────

#[test]
fn ohlc_payload_normalizes_to_chart_series() {
    let raw: OhlcResponse = serde_json::from_str(
        r#"[
            [1700000000000, 37000.1, 37100.0, 36950.5, 37050.0],
            [1700000000000, 37050.0, 37200.0, 37000.0, 37150.0],
            [1700001800000, 37150.0, 37300.0, 37100.0, 37250.0]
        ]"#,
    )
    .unwrap();

    let candles = normalize_candles(raw);
    assert_eq!(candles.len(), 2);
    assert_eq!(candles[0].time, 1_700_000_000.0);
    assert_eq!(candles[0].open, 37000.1);
    assert_eq!(candles[1].time, 1_700_001_800.0);
}

#[test]
fn markets_payload_builds_a_page() {
    let rows: Vec<CoinMarketResponse> = serde_json::from_str(
        r#"[
            {"id": "bitcoin", "symbol": "btc", "name": "Bitcoin",
             "image": "https://assets.test/bitcoin.png", "current_price": 43000,
             "price_change_percentage_24h": 1.5},
            {"id": "newcoin", "symbol": "new", "name": "New Coin",
             "image": "missing_large.png", "current_price": null}
        ]"#,
    )
    .unwrap();

    let pagination = Pagination::from_fetch(1, 2, rows.len());
    let coins: Vec<CoinMarket> = rows.into_iter().map(|r| r.try_into().unwrap()).collect();

    assert!(pagination.has_more_pages);
    assert_eq!(pagination.total_pages, 100);
    assert_eq!(
        pagination.items(),
        vec![PageItem::Page(1), PageItem::Page(2), PageItem::Page(3), PageItem::Gap, PageItem::Page(100)]
    );
    assert!(coins[0].trend().is_up());
    assert_eq!(coins[1].image, None);
    assert_eq!(coins[1].initial(), Some('N'));
    assert_eq!(format_currency(coins[0].current_price, None, None, None), "$43,000.00");
}

#[test]
fn trending_payload_converts() {
    let resp: TrendingResponse = serde_json::from_str(
        r#"{"coins": [{"item": {
            "id": "pepe", "coin_id": 29850, "name": "Pepe", "symbol": "PEPE",
            "market_cap_rank": 30, "thumb": "https://assets.test/pepe.png",
            "data": {"price": "0.00000123", "price_change_percentage_24h": {"usd": -4.2}}
        }}], "nfts": []}"#,
    )
    .unwrap();

    let coins: Vec<TrendingCoin> = resp.into();
    assert_eq!(coins.len(), 1);
    assert_eq!(coins[0].price_usd, Some(0.00000123));
    assert_eq!(format_percentage(coins[0].price_change_percentage_24h), "-4.2%");
}

// ── Live ─────────────────────────────────────────────────────────────────────

#[tokio::test]
#[ignore]
async fn live_markets_first_page() {
    let client = live_client();
    let page = client
        .coins()
        .markets(&MarketsQuery::page(1, 10))
        .await
        .expect("markets should load");

    assert_eq!(page.coins.len(), 10);
    assert!(page.pagination.has_more_pages);
    assert_eq!(page.coins[0].market_cap_rank, Some(1));
}

#[tokio::test]
#[ignore]
async fn live_coin_detail_is_cached() {
    let client = live_client();
    let first = client.coins().get("bitcoin").await.expect("detail should load");
    let second = client.coins().get("bitcoin").await.expect("cached detail");
    assert_eq!(first, second);
    assert!(first.usd_price().is_some());
}

#[tokio::test]
#[ignore]
async fn live_search_returns_market_rows() {
    let client = live_client();
    let hits = client.coins().search("eth").await.expect("search should work");
    assert!(!hits.is_empty());
    assert!(hits.len() <= 8);
}

#[tokio::test]
#[ignore]
async fn live_ohlc_is_normalized() {
    let client = live_client();
    let candles = client
        .charts()
        .ohlc("bitcoin", "usd", Period::Daily)
        .await
        .expect("ohlc should load");

    assert!(!candles.is_empty());
    assert!(candles.windows(2).all(|w| w[0].time != w[1].time));
    assert!(candles.iter().all(|c| c.time < 1e12));
}

#[tokio::test]
#[ignore]
async fn live_trending_and_categories() {
    let client = live_client();
    let trending = client.trending().top(6).await.expect("trending should load");
    assert!(trending.len() <= 6);

    let categories = client.categories().top(10).await.expect("categories should load");
    assert_eq!(categories.len(), 10);
}

#[tokio::test]
#[ignore]
async fn live_price_watch_yields_first_quote() {
    let client = live_client();
    let prices = client.prices();
    let stream = prices.watch("bitcoin", "usd", Duration::from_secs(30));
    tokio::pin!(stream);

    let first = timeout(TEST_TIMEOUT, stream.next())
        .await
        .expect("timed out waiting for quote")
        .expect("stream ended");
    let quote = first.expect("quote should load");

    let mut feed = PriceFeed::new();
    feed.apply_quote(quote);
    assert!(feed.is_connected());
    assert!(feed.reference_price() > 0.0);
}
