//! Human-readable formatting for prices, percentages and relative times.

pub mod currency;
pub mod num;
pub mod time;

pub use currency::{format_change, format_currency, format_percentage};
pub use time::time_ago;
