//! Artwork Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rustc_hash::FxHashMap;
use rusty_money::{
    Money,
    iso::{Currency, EUR, GBP, INR, USD},
};
use serde::Deserialize;

use crate::{artworks::Artwork, fixtures::FixtureError};

/// Wrapper for artworks in YAML
#[derive(Debug, Deserialize)]
pub struct ArtworksFixture {
    /// Map of artwork key -> artwork fixture
    pub artworks: FxHashMap<String, ArtworkFixture>,
}

/// Artwork Fixture
#[derive(Debug, Deserialize)]
pub struct ArtworkFixture {
    /// Catalog identifier, defaults to the fixture key
    #[serde(default)]
    pub id: Option<String>,

    /// Artwork title
    pub title: String,

    /// Artist display name
    pub artist: String,

    /// Primary image URL
    #[serde(default)]
    pub image: Option<String>,

    /// Unit price (e.g., "12500.00 INR")
    pub price: String,
}

impl ArtworkFixture {
    /// Convert into an artwork snapshot, using `key` when no id is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the price cannot be parsed.
    pub fn try_into_artwork(self, key: &str) -> Result<Artwork<'static>, FixtureError> {
        let (minor_units, currency) = parse_price(&self.price)?;

        let mut artwork = Artwork::new(
            self.id.unwrap_or_else(|| key.to_string()),
            self.title,
            self.artist,
            Money::from_minor(minor_units, currency),
        );

        artwork.image_url = self.image;

        Ok(artwork)
    }
}

/// Parse price string (e.g., "2.99 GBP") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount cannot be parsed as a decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(i64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::new(100, 0))
        .and_then(|value| value.round_dp(0).to_i64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    let currency = match *currency_code {
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        "INR" => INR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    Ok((minor_units, currency))
}
