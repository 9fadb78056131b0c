//! Cart Store

use rusty_money::iso::Currency;
use tracing::debug_span;

use crate::cart::{Cart, CartCommand, CommandOutcome};

/// Observer notified after every dispatched command.
///
/// Views implement this to re-render from the new state. The store calls it
/// for every command, including those that left the cart unchanged.
pub trait CartObserver {
    /// Called after `command` has been reduced.
    ///
    /// # Parameters
    ///
    /// - `command`: The command that was dispatched
    /// - `outcome`: Whether the cart changed
    /// - `cart`: The cart after the command
    fn on_dispatch(&mut self, command: &CartCommand<'_>, outcome: CommandOutcome, cart: &Cart<'_>);
}

/// Observer that ignores all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CartObserver for NoopObserver {
    fn on_dispatch(&mut self, _command: &CartCommand<'_>, _outcome: CommandOutcome, _cart: &Cart<'_>) {
    }
}

/// Explicit owner of the cart state.
///
/// Held by the application root and passed to whatever needs to read or
/// change the cart. All writes go through [`CartStore::dispatch`].
#[derive(Debug)]
pub struct CartStore<'a, O: CartObserver = NoopObserver> {
    cart: Cart<'a>,
    observer: O,
}

impl CartStore<'_> {
    /// Create a store holding an empty cart.
    #[must_use]
    pub fn new(currency: &'static Currency) -> Self {
        Self::with_observer(currency, NoopObserver)
    }
}

impl<'a, O: CartObserver> CartStore<'a, O> {
    /// Create a store holding an empty cart that reports to `observer`.
    pub fn with_observer(currency: &'static Currency, observer: O) -> Self {
        Self {
            cart: Cart::new(currency),
            observer,
        }
    }

    /// Apply a command to the held cart and notify the observer.
    pub fn dispatch(&mut self, command: CartCommand<'a>) -> CommandOutcome {
        let span = debug_span!("cart.dispatch", command = command.name());
        let _guard = span.enter();

        // Keep a copy for the observer since the cart consumes the command.
        let observed = command.clone();
        let outcome = self.cart.apply(command);

        self.observer.on_dispatch(&observed, outcome, &self.cart);

        outcome
    }

    /// Apply several commands in order.
    pub fn dispatch_all(&mut self, commands: impl IntoIterator<Item = CartCommand<'a>>) {
        for command in commands {
            self.dispatch(command);
        }
    }

    /// Borrow the current cart.
    pub fn state(&self) -> &Cart<'a> {
        &self.cart
    }

    /// Borrow the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Tear down the store, returning the final cart.
    pub fn into_state(self) -> Cart<'a> {
        self.cart
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::{Money, iso::GBP};

    use crate::artworks::{Artwork, ArtworkId};

    use super::*;

    #[derive(Debug, Default)]
    struct RecordingObserver {
        seen: Vec<(&'static str, CommandOutcome, usize)>,
    }

    impl CartObserver for RecordingObserver {
        fn on_dispatch(&mut self, command: &CartCommand<'_>, outcome: CommandOutcome, cart: &Cart<'_>) {
            self.seen.push((command.name(), outcome, cart.len()));
        }
    }

    fn add(id: &str) -> CartCommand<'static> {
        CartCommand::AddItem(Artwork::new(id, "Study", "Test Artist", Money::from_minor(500, GBP)))
    }

    #[test]
    fn dispatch_updates_state() {
        let mut store = CartStore::new(GBP);

        store.dispatch(add("a"));

        assert_eq!(store.state().len(), 1);
        assert_eq!(store.state().total(), Money::from_minor(500, GBP));
    }

    #[test]
    fn observer_sees_every_command() {
        let mut store = CartStore::with_observer(GBP, RecordingObserver::default());

        store.dispatch_all([
            add("a"),
            add("a"),
            CartCommand::RemoveItem(ArtworkId::from("a")),
            CartCommand::ToggleDrawer,
        ]);

        assert_eq!(
            store.observer().seen,
            [
                ("add_item", CommandOutcome::Applied, 1),
                ("add_item", CommandOutcome::Unchanged, 1),
                ("remove_item", CommandOutcome::Applied, 0),
                ("toggle_drawer", CommandOutcome::Applied, 0),
            ]
        );
    }

    #[test]
    fn into_state_returns_final_cart() {
        let mut store = CartStore::new(GBP);
        store.dispatch(add("a"));
        store.dispatch(CartCommand::Clear);

        let cart = store.into_state();

        assert!(cart.is_empty());
        assert_eq!(cart.total_minor(), 0);
    }
}
