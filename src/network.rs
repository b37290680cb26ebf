//! Network URL and header constants for the CoinGecko API.

/// Default REST API base URL (public / demo plan).
pub const DEFAULT_API_URL: &str = "https://api.coingecko.com/api/v3";

/// REST API base URL for the Pro plan.
pub const PRO_API_URL: &str = "https://pro-api.coingecko.com/api/v3";

/// Header carrying a demo-plan API key.
pub const DEMO_KEY_HEADER: &str = "x-cg-demo-api-key";

/// Header carrying a Pro-plan API key.
pub const PRO_KEY_HEADER: &str = "x-cg-pro-api-key";
