//! Artworks

use std::{borrow::Borrow, fmt};

use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};

/// Catalog identifier of an artwork.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtworkId(String);

impl ArtworkId {
    /// Creates a new artwork identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ArtworkId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ArtworkId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for ArtworkId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Snapshot of a catalog artwork, taken when it is added to a cart.
///
/// The display fields and price are copied once and never refreshed, so a
/// snapshot can go stale if the catalog entry changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork<'a> {
    /// Catalog identifier
    pub id: ArtworkId,

    /// Artwork title
    pub title: String,

    /// Display name of the artist
    pub artist_name: String,

    /// Primary image, if the listing has one
    pub image_url: Option<String>,

    /// Unit price at the time of the snapshot
    pub price: Money<'a, Currency>,
}

impl<'a> Artwork<'a> {
    /// Creates a snapshot with no image.
    pub fn new(
        id: impl Into<ArtworkId>,
        title: impl Into<String>,
        artist_name: impl Into<String>,
        price: Money<'a, Currency>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist_name: artist_name.into(),
            image_url: None,
            price,
        }
    }

    /// Sets the image URL of the snapshot.
    #[must_use]
    pub fn with_image(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    /// Returns the unit price of the artwork.
    pub fn price(&self) -> &Money<'a, Currency> {
        &self.price
    }
}
