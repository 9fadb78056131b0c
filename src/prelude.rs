//! Atelier prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    artworks::{Artwork, ArtworkId},
    cart::{Cart, CartCommand, CommandOutcome, LineItem, reduce},
    checkout::{
        CheckoutError, OrderConfirmation, OrderGateway, OrderLine, OrderRequest, checkout,
    },
    fixtures::{Fixture, FixtureError},
    pricing::PricingError,
    store::{CartObserver, CartStore, NoopObserver},
    summary::{CartSummary, SummaryError},
};
