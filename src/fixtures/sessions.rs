//! Session Fixtures

use serde::Deserialize;

/// Wrapper for a scripted cart session in YAML
#[derive(Debug, Deserialize)]
pub struct SessionFixture {
    /// Actions in the order they are dispatched
    pub actions: Vec<ActionFixture>,
}

/// A single scripted cart action, referencing artworks by fixture key
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionFixture {
    /// Add an artwork
    Add {
        /// Artwork fixture key
        artwork: String,
    },

    /// Remove an artwork
    Remove {
        /// Artwork fixture key
        artwork: String,
    },

    /// Set the quantity of an artwork
    UpdateQuantity {
        /// Artwork fixture key
        artwork: String,

        /// New quantity
        quantity: i64,
    },

    /// Empty the cart
    Clear,

    /// Toggle the cart drawer
    ToggleDrawer,

    /// Open the cart drawer
    OpenDrawer,

    /// Close the cart drawer
    CloseDrawer,
}
