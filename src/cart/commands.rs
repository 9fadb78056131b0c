//! Cart Commands

use crate::artworks::{Artwork, ArtworkId};

/// Commands that change a cart.
///
/// This is the only way cart state changes. Every command is total: a
/// command that cannot apply leaves the cart as it was.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand<'a> {
    /// Add an artwork with quantity 1, unless it is already in the cart.
    AddItem(Artwork<'a>),

    /// Remove the line for an artwork.
    RemoveItem(ArtworkId),

    /// Set the quantity of a line. Zero or less removes the line.
    UpdateQuantity {
        /// Artwork whose line is updated
        artwork_id: ArtworkId,

        /// Requested quantity, as entered by the caller
        quantity: i64,
    },

    /// Remove every line and reset the total.
    Clear,

    /// Flip the drawer between open and closed.
    ToggleDrawer,

    /// Open the drawer.
    OpenDrawer,

    /// Close the drawer.
    CloseDrawer,
}

impl CartCommand<'_> {
    /// Short name used in log output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            CartCommand::AddItem(_) => "add_item",
            CartCommand::RemoveItem(_) => "remove_item",
            CartCommand::UpdateQuantity { .. } => "update_quantity",
            CartCommand::Clear => "clear",
            CartCommand::ToggleDrawer => "toggle_drawer",
            CartCommand::OpenDrawer => "open_drawer",
            CartCommand::CloseDrawer => "close_drawer",
        }
    }

    /// The artwork this command targets, if any.
    #[must_use]
    pub fn artwork_id(&self) -> Option<&ArtworkId> {
        match self {
            CartCommand::AddItem(artwork) => Some(&artwork.id),
            CartCommand::RemoveItem(artwork_id)
            | CartCommand::UpdateQuantity { artwork_id, .. } => Some(artwork_id),
            CartCommand::Clear
            | CartCommand::ToggleDrawer
            | CartCommand::OpenDrawer
            | CartCommand::CloseDrawer => None,
        }
    }
}
