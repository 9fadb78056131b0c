//! Checkout

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::{
    artworks::ArtworkId,
    cart::{Cart, CartCommand},
    store::{CartObserver, CartStore},
};

/// Errors that can occur while handing a cart to the order service.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no lines to order.
    #[error("cannot check out an empty cart")]
    EmptyCart,

    /// The order service rejected or failed the request.
    #[error("order service failed: {0}")]
    Gateway(#[source] Box<dyn StdError + Send + Sync>),
}

/// One artwork and quantity in an order request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    /// Catalog identifier of the artwork
    pub artwork_id: ArtworkId,

    /// Quantity ordered
    pub quantity: u32,
}

/// Request body sent to the order service at checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    /// Ordered lines, in cart order
    pub items: Vec<OrderLine>,

    /// Cart total in minor units, as shown to the buyer
    pub total_minor: i64,

    /// ISO 4217 code of the cart currency
    pub currency: String,
}

impl TryFrom<&Cart<'_>> for OrderRequest {
    type Error = CheckoutError;

    fn try_from(cart: &Cart<'_>) -> Result<Self, Self::Error> {
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let items = cart
            .iter()
            .map(|item| OrderLine {
                artwork_id: item.artwork_id().clone(),
                quantity: item.quantity().get(),
            })
            .collect();

        Ok(OrderRequest {
            items,
            total_minor: cart.total_minor(),
            currency: cart.currency().iso_alpha_code.to_string(),
        })
    }
}

/// Order service response to a created order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderConfirmation {
    /// Identifier assigned by the order service
    pub order_id: String,
}

/// Boundary to the external order-creation service.
pub trait OrderGateway {
    /// Error returned by the service.
    type Error: StdError + Send + Sync + 'static;

    /// Create an order from the request.
    ///
    /// # Errors
    ///
    /// Returns the service error if the order was not created.
    fn create_order(&mut self, request: &OrderRequest) -> Result<OrderConfirmation, Self::Error>;
}

/// Hand the cart in `store` to `gateway`, clearing it once the order exists.
///
/// The cart is left as it was if the request cannot be built or the order
/// service fails.
///
/// # Errors
///
/// - [`CheckoutError::EmptyCart`]: The cart has no lines.
/// - [`CheckoutError::Gateway`]: The order service returned an error.
pub fn checkout<O, G>(
    store: &mut CartStore<'_, O>,
    gateway: &mut G,
) -> Result<OrderConfirmation, CheckoutError>
where
    O: CartObserver,
    G: OrderGateway,
{
    let request = OrderRequest::try_from(store.state())?;

    let confirmation = gateway.create_order(&request).map_err(|error| {
        warn!(%error, lines = request.items.len(), "order creation failed");

        CheckoutError::Gateway(Box::new(error))
    })?;

    info!(
        order_id = %confirmation.order_id,
        lines = request.items.len(),
        total_minor = request.total_minor,
        "order created from cart"
    );

    store.dispatch(CartCommand::Clear);

    Ok(confirmation)
}
