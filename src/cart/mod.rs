//! Cart

use std::num::NonZeroU32;

use rusty_money::{Money, iso::Currency};
use tracing::{debug, warn};

use crate::{
    artworks::{Artwork, ArtworkId},
    pricing::{PricingError, add_minor, line_total_minor, sub_minor, total_price},
};

pub mod commands;
pub mod items;

pub use commands::CartCommand;
pub use items::LineItem;

/// Whether a command changed the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    /// The cart changed.
    Applied,

    /// The command was absorbed and the cart is as it was.
    Unchanged,
}

/// Cart state: ordered line items with a cached running total.
///
/// Lines keep the order in which artworks were added and each artwork
/// appears at most once. The total is kept in minor units of the cart
/// currency and is updated by every command that touches a line, so it
/// always equals the sum of `unit price × quantity` over the lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart<'a> {
    items: Vec<LineItem<'a>>,
    total_minor: i64,
    currency: &'static Currency,
    is_open: bool,
}

impl<'a> Cart<'a> {
    /// Create an empty, closed cart in the given currency.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Cart {
            items: Vec::new(),
            total_minor: 0,
            currency,
            is_open: false,
        }
    }

    /// Apply a command in place.
    ///
    /// Commands never fail. Missing artworks, duplicate adds, foreign
    /// currencies and arithmetic overflow all leave the cart unchanged.
    pub fn apply(&mut self, command: CartCommand<'a>) -> CommandOutcome {
        let name = command.name();
        let artwork_id = command.artwork_id().cloned();

        let result = match command {
            CartCommand::AddItem(artwork) => self.add_item(artwork),
            CartCommand::RemoveItem(artwork_id) => self.remove_item(&artwork_id),
            CartCommand::UpdateQuantity {
                artwork_id,
                quantity,
            } => self.update_quantity(&artwork_id, quantity),
            CartCommand::Clear => Ok(self.clear()),
            CartCommand::ToggleDrawer => Ok(self.set_open(!self.is_open)),
            CartCommand::OpenDrawer => Ok(self.set_open(true)),
            CartCommand::CloseDrawer => Ok(self.set_open(false)),
        };

        let artwork_id = artwork_id.as_ref().map(ArtworkId::as_str);

        match result {
            Ok(outcome) => {
                debug!(
                    command = name,
                    artwork_id,
                    ?outcome,
                    total_minor = self.total_minor,
                    lines = self.items.len(),
                    "cart command reduced"
                );

                outcome
            }
            Err(error) => {
                warn!(command = name, artwork_id, %error, "cart command ignored");

                CommandOutcome::Unchanged
            }
        }
    }

    fn add_item(&mut self, artwork: Artwork<'a>) -> Result<CommandOutcome, PricingError> {
        if self.contains(&artwork.id) {
            return Ok(CommandOutcome::Unchanged);
        }

        let price_currency = artwork.price.currency();

        if price_currency != self.currency {
            return Err(PricingError::CurrencyMismatch(
                price_currency.iso_alpha_code,
                self.currency.iso_alpha_code,
            ));
        }

        let total = add_minor(self.total_minor, artwork.price.to_minor_units())?;

        self.items.push(LineItem::new(artwork, NonZeroU32::MIN));
        self.total_minor = total;

        Ok(CommandOutcome::Applied)
    }

    fn remove_item(&mut self, artwork_id: &ArtworkId) -> Result<CommandOutcome, PricingError> {
        match self.position(artwork_id) {
            Some(position) => self.remove_at(position),
            None => Ok(CommandOutcome::Unchanged),
        }
    }

    fn remove_at(&mut self, position: usize) -> Result<CommandOutcome, PricingError> {
        let Some(item) = self.items.get(position) else {
            return Ok(CommandOutcome::Unchanged);
        };

        let total = sub_minor(self.total_minor, item.subtotal_minor()?)?;

        self.items.remove(position);
        self.total_minor = total;

        Ok(CommandOutcome::Applied)
    }

    fn update_quantity(
        &mut self,
        artwork_id: &ArtworkId,
        quantity: i64,
    ) -> Result<CommandOutcome, PricingError> {
        let Some(position) = self.position(artwork_id) else {
            return Ok(CommandOutcome::Unchanged);
        };

        if quantity <= 0 {
            return self.remove_at(position);
        }

        let new_quantity = u32::try_from(quantity)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or(PricingError::QuantityOutOfRange(quantity))?;

        let Some(item) = self.items.get_mut(position) else {
            return Ok(CommandOutcome::Unchanged);
        };

        if item.quantity() == new_quantity {
            return Ok(CommandOutcome::Unchanged);
        }

        let old_line = item.subtotal_minor()?;
        let new_line = line_total_minor(item.artwork().price.to_minor_units(), new_quantity)?;
        let total = add_minor(sub_minor(self.total_minor, old_line)?, new_line)?;

        item.set_quantity(new_quantity);
        self.total_minor = total;

        Ok(CommandOutcome::Applied)
    }

    fn clear(&mut self) -> CommandOutcome {
        if self.items.is_empty() && self.total_minor == 0 {
            return CommandOutcome::Unchanged;
        }

        self.items.clear();
        self.total_minor = 0;

        CommandOutcome::Applied
    }

    fn set_open(&mut self, is_open: bool) -> CommandOutcome {
        if self.is_open == is_open {
            return CommandOutcome::Unchanged;
        }

        self.is_open = is_open;

        CommandOutcome::Applied
    }

    fn position(&self, artwork_id: &ArtworkId) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.artwork_id() == artwork_id)
    }

    /// Get the line for an artwork.
    pub fn get(&self, artwork_id: &ArtworkId) -> Option<&LineItem<'a>> {
        self.items
            .iter()
            .find(|item| item.artwork_id() == artwork_id)
    }

    /// Check whether an artwork is already in the cart.
    pub fn contains(&self, artwork_id: &ArtworkId) -> bool {
        self.position(artwork_id).is_some()
    }

    /// Lines in the order they were added.
    pub fn items(&self) -> &[LineItem<'a>] {
        &self.items
    }

    /// Iterate over the lines in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &LineItem<'a>> {
        self.items.iter()
    }

    /// Number of distinct artworks in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities over all lines.
    #[must_use]
    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity().get()))
            .sum()
    }

    /// Cached total.
    #[must_use]
    pub fn total(&self) -> Money<'a, Currency> {
        Money::from_minor(self.total_minor, self.currency)
    }

    /// Cached total in minor units.
    #[must_use]
    pub fn total_minor(&self) -> i64 {
        self.total_minor
    }

    /// Total recalculated from the lines, ignoring the cached value.
    ///
    /// # Errors
    ///
    /// Returns a [`PricingError`] if a line total overflows.
    pub fn recomputed_total(&self) -> Result<Money<'a, Currency>, PricingError> {
        total_price(&self.items, self.currency)
    }

    /// Get the currency of the cart.
    #[must_use]
    pub fn currency(&self) -> &'static Currency {
        self.currency
    }

    /// Whether the cart drawer is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }
}

/// Compute the next cart from the current one and a command.
///
/// The input is left untouched.
#[must_use]
pub fn reduce<'a>(state: &Cart<'a>, command: CartCommand<'a>) -> Cart<'a> {
    let mut next = state.clone();

    next.apply(command);

    next
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::{GBP, INR, USD};
    use testresult::TestResult;

    use super::*;

    fn artwork(id: &str, price_minor: i64) -> Artwork<'static> {
        Artwork::new(id, format!("Artwork {id}"), "Test Artist", Money::from_minor(price_minor, INR))
    }

    fn update(id: &str, quantity: i64) -> CartCommand<'static> {
        CartCommand::UpdateQuantity {
            artwork_id: ArtworkId::from(id),
            quantity,
        }
    }

    #[test]
    fn new_cart_is_empty_and_closed() {
        let cart = Cart::new(INR);

        assert!(cart.is_empty());
        assert!(!cart.is_open());
        assert_eq!(cart.total(), Money::from_minor(0, INR));
        assert_eq!(cart.currency(), INR);
    }

    #[test]
    fn add_item_appends_with_quantity_one() -> TestResult {
        let mut cart = Cart::new(INR);

        let outcome = cart.apply(CartCommand::AddItem(artwork("a", 100)));

        assert_eq!(outcome, CommandOutcome::Applied);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_minor(), 100);

        let line = cart.get(&ArtworkId::from("a")).ok_or("line missing")?;
        assert_eq!(line.quantity().get(), 1);

        Ok(())
    }

    #[test]
    fn add_item_twice_does_not_increment() {
        let mut cart = Cart::new(INR);

        cart.apply(CartCommand::AddItem(artwork("a", 100)));
        let outcome = cart.apply(CartCommand::AddItem(artwork("a", 100)));

        assert_eq!(outcome, CommandOutcome::Unchanged);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.item_count(), 1);
        assert_eq!(cart.total_minor(), 100);
    }

    #[test]
    fn add_item_keeps_first_snapshot_on_duplicate() -> TestResult {
        let mut cart = Cart::new(INR);

        cart.apply(CartCommand::AddItem(artwork("a", 100)));
        cart.apply(CartCommand::AddItem(artwork("a", 999)));

        let line = cart.get(&ArtworkId::from("a")).ok_or("line missing")?;
        assert_eq!(line.artwork().price.to_minor_units(), 100);

        Ok(())
    }

    #[test]
    fn add_item_accepts_negative_price() {
        let mut cart = Cart::new(INR);

        cart.apply(CartCommand::AddItem(artwork("credit", -250)));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_minor(), -250);
    }

    #[test]
    fn add_item_in_other_currency_is_ignored() {
        let mut cart = Cart::new(GBP);

        let outcome = cart.apply(CartCommand::AddItem(Artwork::new(
            "a",
            "Dusk",
            "Test Artist",
            Money::from_minor(100, USD),
        )));

        assert_eq!(outcome, CommandOutcome::Unchanged);
        assert!(cart.is_empty());
        assert_eq!(cart.total_minor(), 0);
    }

    #[test]
    fn add_item_overflowing_total_is_ignored() {
        let mut cart = Cart::new(INR);

        cart.apply(CartCommand::AddItem(artwork("a", i64::MAX)));
        let outcome = cart.apply(CartCommand::AddItem(artwork("b", 1)));

        assert_eq!(outcome, CommandOutcome::Unchanged);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_minor(), i64::MAX);
    }

    #[test]
    fn items_keep_insertion_order() {
        let mut cart = Cart::new(INR);

        for id in ["c", "a", "b"] {
            cart.apply(CartCommand::AddItem(artwork(id, 10)));
        }

        let ids: Vec<&str> = cart.iter().map(|item| item.artwork_id().as_str()).collect();

        assert_eq!(ids, ["c", "a", "b"]);
    }

    #[test]
    fn remove_item_subtracts_line_total() {
        let mut cart = Cart::new(INR);

        cart.apply(CartCommand::AddItem(artwork("a", 100)));
        cart.apply(CartCommand::AddItem(artwork("b", 50)));
        cart.apply(update("a", 3));

        let outcome = cart.apply(CartCommand::RemoveItem(ArtworkId::from("a")));

        assert_eq!(outcome, CommandOutcome::Applied);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total_minor(), 50);
    }

    #[test]
    fn remove_missing_item_is_noop() {
        let mut cart = Cart::new(INR);
        cart.apply(CartCommand::AddItem(artwork("a", 100)));
        let before = cart.clone();

        let outcome = cart.apply(CartCommand::RemoveItem(ArtworkId::from("zzz")));

        assert_eq!(outcome, CommandOutcome::Unchanged);
        assert_eq!(cart, before);
    }

    #[test]
    fn update_quantity_replaces_contribution() {
        let mut cart = Cart::new(INR);

        cart.apply(CartCommand::AddItem(artwork("a", 100)));
        cart.apply(update("a", 3));

        assert_eq!(cart.total_minor(), 300);
        assert_eq!(cart.item_count(), 3);

        cart.apply(update("a", 2));

        assert_eq!(cart.total_minor(), 200);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn update_quantity_to_same_value_is_unchanged() {
        let mut cart = Cart::new(INR);
        cart.apply(CartCommand::AddItem(artwork("a", 100)));

        assert_eq!(cart.apply(update("a", 1)), CommandOutcome::Unchanged);
    }

    #[test]
    fn update_quantity_to_zero_or_less_removes_line() {
        for quantity in [0, -1, i64::MIN] {
            let mut cart = Cart::new(INR);
            cart.apply(CartCommand::AddItem(artwork("a", 100)));
            cart.apply(CartCommand::AddItem(artwork("b", 50)));

            let outcome = cart.apply(update("a", quantity));

            assert_eq!(outcome, CommandOutcome::Applied);
            assert!(!cart.contains(&ArtworkId::from("a")));
            assert_eq!(cart.total_minor(), 50);
        }
    }

    #[test]
    fn update_quantity_for_missing_item_is_noop() {
        let mut cart = Cart::new(INR);
        cart.apply(CartCommand::AddItem(artwork("a", 100)));
        let before = cart.clone();

        assert_eq!(cart.apply(update("b", 5)), CommandOutcome::Unchanged);
        assert_eq!(cart.apply(update("b", 0)), CommandOutcome::Unchanged);
        assert_eq!(cart, before);
    }

    #[test]
    fn update_quantity_out_of_range_is_ignored() {
        let mut cart = Cart::new(INR);
        cart.apply(CartCommand::AddItem(artwork("a", 100)));
        let before = cart.clone();

        let outcome = cart.apply(update("a", i64::from(u32::MAX) + 1));

        assert_eq!(outcome, CommandOutcome::Unchanged);
        assert_eq!(cart, before);
    }

    #[test]
    fn clear_resets_items_and_total_but_not_drawer() {
        let mut cart = Cart::new(INR);
        cart.apply(CartCommand::OpenDrawer);
        cart.apply(CartCommand::AddItem(artwork("a", 100)));
        cart.apply(update("a", 4));

        assert_eq!(cart.apply(CartCommand::Clear), CommandOutcome::Applied);
        assert!(cart.is_empty());
        assert_eq!(cart.total_minor(), 0);
        assert!(cart.is_open());

        assert_eq!(cart.apply(CartCommand::Clear), CommandOutcome::Unchanged);
    }

    #[test]
    fn drawer_commands() {
        let mut cart = Cart::new(INR);

        cart.apply(CartCommand::ToggleDrawer);
        assert!(cart.is_open());

        assert_eq!(cart.apply(CartCommand::OpenDrawer), CommandOutcome::Unchanged);

        cart.apply(CartCommand::ToggleDrawer);
        assert!(!cart.is_open());

        cart.apply(CartCommand::OpenDrawer);
        cart.apply(CartCommand::CloseDrawer);
        assert!(!cart.is_open());
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let empty = Cart::new(INR);

        let next = reduce(&empty, CartCommand::AddItem(artwork("a", 100)));

        assert!(empty.is_empty());
        assert_eq!(next.len(), 1);
    }

    #[test]
    fn recomputed_total_matches_cached_total() -> TestResult {
        let mut cart = Cart::new(INR);
        cart.apply(CartCommand::AddItem(artwork("a", 1_250)));
        cart.apply(CartCommand::AddItem(artwork("b", 4_000)));
        cart.apply(update("b", 7));
        cart.apply(CartCommand::RemoveItem(ArtworkId::from("a")));

        assert_eq!(cart.recomputed_total()?, cart.total());

        Ok(())
    }
}
