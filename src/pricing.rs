//! Pricing

use std::num::NonZeroU32;

use rusty_money::{Money, MoneyError, iso::Currency};
use thiserror::Error;

use crate::cart::LineItem;

/// Errors that can occur while calculating cart amounts.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A minor-unit amount did not fit in an `i64`.
    #[error("amount overflowed while pricing {0}")]
    Overflow(&'static str),

    /// A requested quantity does not fit a line item.
    #[error("quantity {0} is out of range")]
    QuantityOutOfRange(i64),

    /// A price was in a different currency to the cart (price currency, cart currency).
    #[error("price in {0} cannot be added to a cart in {1}")]
    CurrencyMismatch(&'static str, &'static str),

    /// Wrapped money arithmetic or currency mismatch error.
    #[error(transparent)]
    Money(#[from] MoneyError),
}

/// Calculates `unit_minor × quantity` in minor units.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the product does not fit in an `i64`.
pub fn line_total_minor(unit_minor: i64, quantity: NonZeroU32) -> Result<i64, PricingError> {
    unit_minor
        .checked_mul(i64::from(quantity.get()))
        .ok_or(PricingError::Overflow("line total"))
}

/// Adds `amount` to a running minor-unit total.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the result does not fit in an `i64`.
pub fn add_minor(total: i64, amount: i64) -> Result<i64, PricingError> {
    total
        .checked_add(amount)
        .ok_or(PricingError::Overflow("cart total"))
}

/// Subtracts `amount` from a running minor-unit total.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the result does not fit in an `i64`.
pub fn sub_minor(total: i64, amount: i64) -> Result<i64, PricingError> {
    total
        .checked_sub(amount)
        .ok_or(PricingError::Overflow("cart total"))
}

/// Sums the line totals of the given items from scratch.
///
/// An empty slice totals zero in `currency`.
///
/// # Errors
///
/// - [`PricingError::Overflow`]: A line or the running sum overflowed.
/// - [`PricingError::CurrencyMismatch`]: An item is priced in another currency.
pub fn total_price<'a>(
    items: &[LineItem<'a>],
    currency: &'static Currency,
) -> Result<Money<'a, Currency>, PricingError> {
    let total = items.iter().try_fold(0_i64, |acc, item| {
        let price = item.artwork().price();

        if price.currency() != currency {
            return Err(PricingError::CurrencyMismatch(
                price.currency().iso_alpha_code,
                currency.iso_alpha_code,
            ));
        }

        let line = line_total_minor(price.to_minor_units(), item.quantity())?;

        add_minor(acc, line)
    })?;

    Ok(Money::from_minor(total, currency))
}
