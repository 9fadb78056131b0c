//! Fixtures

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use rusty_money::iso::Currency;
use thiserror::Error;

use crate::{
    artworks::{Artwork, ArtworkId},
    cart::{Cart, CartCommand},
    fixtures::{
        artworks::ArtworksFixture,
        sessions::{ActionFixture, SessionFixture},
    },
    store::{CartObserver, CartStore},
};

pub mod artworks;
pub mod sessions;

/// Fixture Parsing Errors
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// Artwork not found
    #[error("Artwork not found: {0}")]
    ArtworkNotFound(String),

    /// Currency mismatch between artworks
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),

    /// No artworks loaded yet
    #[error("No artworks loaded yet; currency unknown")]
    NoCurrency,

    /// Not enough actions in fixture
    #[error("Not enough actions in fixture, available: {available}, requested: {requested}")]
    NotEnoughActions {
        /// Number of actions defined in the fixture
        available: usize,
        /// Number of actions requested
        requested: usize,
    },
}

/// Fixture
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    /// Artwork snapshots keyed by fixture key
    artworks: FxHashMap<String, Artwork<'static>>,

    /// Scripted commands, in dispatch order
    commands: Vec<CartCommand<'static>>,

    /// Currency for the fixture set
    currency: Option<&'static Currency>,
}

impl Fixture {
    /// Create a new empty fixture with default base path
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with custom base path
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            artworks: FxHashMap::default(),
            commands: Vec::new(),
            currency: None,
        }
    }

    /// Load artworks from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if there are currency mismatches.
    pub fn load_artworks(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("artworks").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: ArtworksFixture = serde_norway::from_str(&contents)?;

        for (key, artwork_fixture) in fixture.artworks {
            let artwork = artwork_fixture.try_into_artwork(&key)?;
            let currency = artwork.price.currency();

            match self.currency {
                Some(existing) if existing != currency => {
                    return Err(FixtureError::CurrencyMismatch(
                        existing.iso_alpha_code.to_string(),
                        currency.iso_alpha_code.to_string(),
                    ));
                }
                Some(_) => {}
                None => self.currency = Some(currency),
            }

            self.artworks.insert(key, artwork);
        }

        Ok(self)
    }

    /// Load a scripted session from a YAML fixture file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or if referenced artworks don't exist.
    pub fn load_session(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("sessions").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: SessionFixture = serde_norway::from_str(&contents)?;

        for action in fixture.actions {
            let command = self.command(action)?;

            self.commands.push(command);
        }

        Ok(self)
    }

    /// Load a complete fixture set (artworks and session with the same name)
    ///
    /// # Errors
    ///
    /// Returns an error if any of the fixture files cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_artworks(name)?.load_session(name)?;

        Ok(fixture)
    }

    fn command(&self, action: ActionFixture) -> Result<CartCommand<'static>, FixtureError> {
        let command = match action {
            ActionFixture::Add { artwork } => CartCommand::AddItem(self.artwork(&artwork)?.clone()),
            ActionFixture::Remove { artwork } => CartCommand::RemoveItem(self.artwork_id(&artwork)?),
            ActionFixture::UpdateQuantity { artwork, quantity } => CartCommand::UpdateQuantity {
                artwork_id: self.artwork_id(&artwork)?,
                quantity,
            },
            ActionFixture::Clear => CartCommand::Clear,
            ActionFixture::ToggleDrawer => CartCommand::ToggleDrawer,
            ActionFixture::OpenDrawer => CartCommand::OpenDrawer,
            ActionFixture::CloseDrawer => CartCommand::CloseDrawer,
        };

        Ok(command)
    }

    /// Get an artwork by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the artwork is not found.
    pub fn artwork(&self, key: &str) -> Result<&Artwork<'static>, FixtureError> {
        self.artworks
            .get(key)
            .ok_or_else(|| FixtureError::ArtworkNotFound(key.to_string()))
    }

    /// Get the catalog identifier of an artwork by its fixture key
    ///
    /// # Errors
    ///
    /// Returns an error if the artwork is not found.
    pub fn artwork_id(&self, key: &str) -> Result<ArtworkId, FixtureError> {
        Ok(self.artwork(key)?.id.clone())
    }

    /// Number of artworks loaded
    pub fn artwork_count(&self) -> usize {
        self.artworks.len()
    }

    /// Scripted commands, in dispatch order
    pub fn commands(&self) -> &[CartCommand<'static>] {
        &self.commands
    }

    /// Get the currency of the fixture set
    ///
    /// # Errors
    ///
    /// Returns an error if no artworks have been loaded.
    pub fn currency(&self) -> Result<&'static Currency, FixtureError> {
        self.currency.ok_or(FixtureError::NoCurrency)
    }

    /// Replay the first `n` scripted commands (or all of them) into a new cart
    ///
    /// # Errors
    ///
    /// Returns an error if the currency is unknown or fewer than `n` commands exist.
    pub fn cart(&self, n: Option<usize>) -> Result<Cart<'static>, FixtureError> {
        let mut cart = Cart::new(self.currency()?);

        for command in self.take_commands(n)? {
            cart.apply(command.clone());
        }

        Ok(cart)
    }

    /// Replay the first `n` scripted commands (or all of them) through a store
    ///
    /// # Errors
    ///
    /// Returns an error if the currency is unknown or fewer than `n` commands exist.
    pub fn replay<O: CartObserver>(
        &self,
        store: &mut CartStore<'static, O>,
        n: Option<usize>,
    ) -> Result<(), FixtureError> {
        store.dispatch_all(self.take_commands(n)?.iter().cloned());

        Ok(())
    }

    fn take_commands(&self, n: Option<usize>) -> Result<&[CartCommand<'static>], FixtureError> {
        let available = self.commands.len();
        let requested = n.unwrap_or(available);

        self.commands
            .get(..requested)
            .ok_or(FixtureError::NotEnoughActions {
                available,
                requested,
            })
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
