//! Converter — coin ↔ fiat amount conversion from a coin's USD price.

use crate::shared::Currency;
use rust_decimal::prelude::*;

/// Fixed USD → fiat multipliers applied to the coin's USD price.
pub fn usd_multiplier(currency: Currency) -> Decimal {
    match currency {
        Currency::Usd => Decimal::ONE,
        Currency::Eur => Decimal::new(92, 2),
        Currency::Gbp => Decimal::new(79, 2),
        Currency::Jpy => Decimal::from(150),
        Currency::Inr => Decimal::from(83),
    }
}

/// Price of one coin in `currency`, derived from its USD price.
///
/// Non-finite, unrepresentable or overflowing prices count as zero.
pub fn rate_from_usd(usd_price: f64, currency: Currency) -> Decimal {
    Decimal::from_f64(usd_price)
        .unwrap_or_default()
        .checked_mul(usd_multiplier(currency))
        .unwrap_or_default()
}

/// Parse a user-typed amount. Anything unparsable counts as zero.
pub fn parse_amount(input: &str) -> Decimal {
    let trimmed = input.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or_default()
}

/// Converter state for one coin.
///
/// Normal direction converts a coin amount into fiat. Inverted converts a
/// fiat amount into coins.
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    usd_price: f64,
    amount: String,
    currency: Currency,
    inverted: bool,
}

impl Converter {
    pub fn new(usd_price: f64) -> Self {
        Self {
            usd_price,
            amount: "1".to_string(),
            currency: Currency::Usd,
            inverted: false,
        }
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn set_amount(&mut self, amount: impl Into<String>) {
        self.amount = amount.into();
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.currency = currency;
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn toggle_direction(&mut self) {
        self.inverted = !self.inverted;
    }

    pub fn set_usd_price(&mut self, usd_price: f64) {
        self.usd_price = usd_price;
    }

    pub fn rate(&self) -> Decimal {
        rate_from_usd(self.usd_price, self.currency)
    }

    pub fn result(&self) -> Decimal {
        let amount = parse_amount(&self.amount);
        let rate = self.rate();
        if self.inverted {
            if rate > Decimal::ZERO {
                amount.checked_div(rate).unwrap_or_default()
            } else {
                Decimal::ZERO
            }
        } else {
            amount.checked_mul(rate).unwrap_or_default()
        }
    }

    /// Result as shown in the output field. Empty for a zero result.
    pub fn display_result(&self) -> String {
        let result = self.result();
        if result.is_zero() {
            return String::new();
        }
        let dp = if self.inverted { 6 } else { 2 };
        let rounded = result.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
        format!("{:.*}", dp as usize, rounded)
    }
}
