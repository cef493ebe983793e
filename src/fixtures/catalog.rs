//! Catalog Fixtures

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::iso::{Currency, EUR, GBP, JPY, USD};
use serde::Deserialize;

use crate::{
    catalog::{BundleTier, Catalog, MandatoryItem, UnlimitedBundle},
    fixtures::FixtureError,
    simulator::Simulator,
    targets::SupportedTargets,
};

/// Event catalog in YAML
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Days in the event window
    pub days: usize,

    /// Targets callers may request
    pub targets: Vec<u64>,

    /// Mandatory purchases, in display order
    #[serde(default)]
    pub mandatory: Vec<MandatoryFixture>,

    /// Rungs of the limited daily ladder, cheapest first
    #[serde(default)]
    pub daily_tiers: Vec<PackFixture>,

    /// Top-up pack
    pub unlimited: PackFixture,
}

/// Mandatory Purchase Fixture
#[derive(Debug, Deserialize)]
pub struct MandatoryFixture {
    /// Display name
    pub name: String,

    /// Items granted
    pub items: u64,

    /// Price (e.g., "1340 JPY")
    pub price: String,
}

/// Pack Fixture
#[derive(Debug, Deserialize)]
pub struct PackFixture {
    /// Display label
    pub label: String,

    /// Items granted per purchase
    pub items: u64,

    /// Price (e.g., "6780 JPY")
    pub price: String,
}

impl TryFrom<CatalogFixture> for Simulator {
    type Error = FixtureError;

    fn try_from(fixture: CatalogFixture) -> Result<Self, Self::Error> {
        if fixture.targets.is_empty() {
            return Err(FixtureError::NoTargets);
        }

        // The top-up pack is always present, so it fixes the catalog currency.
        let (unlimited_cost, currency) = parse_price(&fixture.unlimited.price)?;

        let price_in = |price: &str| -> Result<u64, FixtureError> {
            let (minor_units, price_currency) = parse_price(price)?;

            if price_currency == currency {
                Ok(minor_units)
            } else {
                Err(FixtureError::CurrencyMismatch(
                    currency.iso_alpha_code.to_string(),
                    price_currency.iso_alpha_code.to_string(),
                ))
            }
        };

        let mandatory = fixture
            .mandatory
            .iter()
            .map(|item| -> Result<MandatoryItem, FixtureError> {
                Ok(MandatoryItem::new(&item.name, item.items, price_in(&item.price)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let tiers = fixture
            .daily_tiers
            .iter()
            .map(|tier| -> Result<BundleTier, FixtureError> {
                Ok(BundleTier::new(&tier.label, tier.items, price_in(&tier.price)?))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let unlimited = UnlimitedBundle::new(
            fixture.unlimited.label,
            fixture.unlimited.items,
            unlimited_cost,
        );

        let catalog = Catalog::new(fixture.days, mandatory, &tiers, unlimited, currency)?;

        Ok(Simulator::new(catalog, SupportedTargets::new(fixture.targets)))
    }
}

/// Parse price string (e.g., "1340 JPY") into minor units and currency
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative decimal, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(u64, &'static Currency), FixtureError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(FixtureError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let currency = match *currency_code {
        "JPY" => JPY,
        "GBP" => GBP,
        "USD" => USD,
        "EUR" => EUR,
        other => return Err(FixtureError::UnknownCurrency(other.to_string())),
    };

    let amount = amount
        .parse::<Decimal>()
        .map_err(|_err| FixtureError::InvalidPrice(s.to_string()))?;

    let minor_units = amount
        .checked_mul(Decimal::from(10u64.pow(currency.exponent)))
        .and_then(|value| value.round_dp(0).to_u64())
        .ok_or_else(|| FixtureError::InvalidPrice(s.to_string()))?;

    Ok((minor_units, currency))
}
