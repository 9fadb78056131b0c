//! Line Items

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};

use crate::{
    artworks::{Artwork, ArtworkId},
    pricing::{PricingError, line_total_minor},
};

/// One artwork in a cart and the quantity requested.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem<'a> {
    artwork: Artwork<'a>,
    quantity: NonZeroU32,
}

impl<'a> LineItem<'a> {
    /// Creates a line item for the given artwork snapshot.
    pub fn new(artwork: Artwork<'a>, quantity: NonZeroU32) -> Self {
        Self { artwork, quantity }
    }

    /// Returns the artwork snapshot.
    pub fn artwork(&self) -> &Artwork<'a> {
        &self.artwork
    }

    /// Returns the catalog identifier of the artwork.
    pub fn artwork_id(&self) -> &ArtworkId {
        &self.artwork.id
    }

    /// Returns the requested quantity.
    pub fn quantity(&self) -> NonZeroU32 {
        self.quantity
    }

    /// Unit price × quantity, in minor units.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the amount does not fit in an `i64`.
    pub fn subtotal_minor(&self) -> Result<i64, PricingError> {
        line_total_minor(self.artwork.price.to_minor_units(), self.quantity)
    }

    /// Unit price × quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the amount does not fit in an `i64`.
    pub fn subtotal(&self) -> Result<Money<'a, Currency>, PricingError> {
        let currency = self.artwork.price.currency();

        Ok(Money::from_minor(self.subtotal_minor()?, currency))
    }

    pub(crate) fn set_quantity(&mut self, quantity: NonZeroU32) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::EUR;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn subtotal_is_unit_price_times_quantity() -> TestResult {
        let quantity = NonZeroU32::new(4).ok_or("zero quantity")?;
        let item = LineItem::new(
            Artwork::new("print-7", "Harbour", "Ines Moreau", Money::from_minor(1_999, EUR)),
            quantity,
        );

        assert_eq!(item.subtotal()?, Money::from_minor(7_996, EUR));
        assert_eq!(item.artwork_id().as_str(), "print-7");

        Ok(())
    }
}
