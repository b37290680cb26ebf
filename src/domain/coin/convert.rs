//! Conversion: coin wire types → domain types (TryFrom + validation).

use super::wire::{CoinDetailResponse, CoinMarketResponse};
use super::{CoinDetail, CoinMarket, ValidationError};

/// Placeholder the API serves for coins without artwork.
const MISSING_IMAGE: &str = "missing_large.png";

/// Keep only absolute image URLs that are not the API's placeholder.
pub(crate) fn usable_image(url: Option<String>) -> Option<String> {
    url.filter(|u| u.starts_with("http") && !u.ends_with(MISSING_IMAGE))
}

impl TryFrom<CoinMarketResponse> for CoinMarket {
    type Error = ValidationError;

    fn try_from(source: CoinMarketResponse) -> Result<Self, Self::Error> {
        if source.id.as_str().is_empty() {
            return Err(ValidationError::MissingId);
        }
        if source.name.trim().is_empty() {
            return Err(ValidationError::MissingName(source.id));
        }
        if source.symbol.trim().is_empty() {
            return Err(ValidationError::MissingSymbol(source.id));
        }

        Ok(Self {
            id: source.id,
            symbol: source.symbol,
            name: source.name,
            image: usable_image(source.image),
            current_price: source.current_price,
            market_cap: source.market_cap,
            market_cap_rank: source.market_cap_rank,
            total_volume: source.total_volume,
            price_change_percentage_24h: source.price_change_percentage_24h,
            last_updated: source.last_updated,
        })
    }
}

impl TryFrom<CoinDetailResponse> for CoinDetail {
    type Error = ValidationError;

    fn try_from(source: CoinDetailResponse) -> Result<Self, Self::Error> {
        if source.id.as_str().is_empty() {
            return Err(ValidationError::MissingId);
        }
        if source.name.trim().is_empty() {
            return Err(ValidationError::MissingName(source.id));
        }

        let image = source
            .image
            .and_then(|img| usable_image(img.large.or(img.small).or(img.thumb)));
        let homepage = source
            .links
            .and_then(|links| links.homepage.into_iter().find(|h| !h.trim().is_empty()));
        let description = source.description.get("en").cloned().unwrap_or_default();
        let market = source.market_data.unwrap_or_default();

        Ok(Self {
            id: source.id,
            symbol: source.symbol,
            name: source.name,
            image,
            market_cap_rank: source.market_cap_rank,
            description,
            homepage,
            prices: market.current_price,
            market_caps: market.market_cap,
            volumes: market.total_volume,
            price_change_percentage_24h: market.price_change_percentage_24h,
            last_updated: source.last_updated,
        })
    }
}
