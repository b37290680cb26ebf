//! Wire types for `simple/price` (REST).

use std::collections::HashMap;

/// REST response of `simple/price`: coin id → field → value.
///
/// Field names depend on the requested currency (`usd`, `usd_24h_change`,
/// ...) plus `last_updated_at` in epoch seconds. Values may be `null`.
pub type SimplePriceResponse = HashMap<String, HashMap<String, Option<f64>>>;
