//! Order Summary

use std::io;

use rusty_money::{Money, iso::Currency};
use smallvec::SmallVec;
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{cart::Cart, pricing::PricingError};

/// Errors that can occur when building or writing a summary.
#[derive(Debug, Error)]
pub enum SummaryError {
    /// A line subtotal could not be calculated.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Writing the summary failed.
    #[error("failed to write summary: {0}")]
    Io(#[from] io::Error),
}

/// One rendered cart line.
#[derive(Debug, Clone)]
struct SummaryRow<'a> {
    title: String,
    artist_name: String,
    unit_price: Money<'a, Currency>,
    quantity: u32,
    subtotal: Money<'a, Currency>,
}

/// Printable summary of a cart: one row per line plus totals.
#[derive(Debug, Clone)]
pub struct CartSummary<'a> {
    rows: SmallVec<[SummaryRow<'a>; 8]>,
    item_count: u64,
    total: Money<'a, Currency>,
}

impl<'a> TryFrom<&Cart<'a>> for CartSummary<'a> {
    type Error = SummaryError;

    fn try_from(cart: &Cart<'a>) -> Result<Self, Self::Error> {
        let rows = cart
            .iter()
            .map(|item| -> Result<SummaryRow<'a>, PricingError> {
                Ok(SummaryRow {
                    title: item.artwork().title.clone(),
                    artist_name: item.artwork().artist_name.clone(),
                    unit_price: *item.artwork().price(),
                    quantity: item.quantity().get(),
                    subtotal: item.subtotal()?,
                })
            })
            .collect::<Result<SmallVec<_>, _>>()?;

        Ok(CartSummary {
            rows,
            item_count: cart.item_count(),
            total: cart.total(),
        })
    }
}

impl CartSummary<'_> {
    /// Number of lines in the summary.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the summary has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Write the summary table and totals.
    ///
    /// # Errors
    ///
    /// Returns a [`SummaryError::Io`] if writing fails.
    pub fn write_to(&self, mut out: impl io::Write) -> Result<(), SummaryError> {
        if self.is_empty() {
            writeln!(out, "\nYour cart is empty\n")?;

            return Ok(());
        }

        let mut builder = Builder::default();

        builder.push_record(["", "Artwork", "Artist", "Unit Price", "Qty", "Subtotal"]);

        for (idx, row) in self.rows.iter().enumerate() {
            builder.push_record([
                format!("#{}", idx + 1),
                row.title.clone(),
                row.artist_name.clone(),
                row.unit_price.to_string(),
                row.quantity.to_string(),
                row.subtotal.to_string(),
            ]);
        }

        let mut table = builder.build();
        let mut theme = Theme::from(Style::modern_rounded());
        let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

        theme.remove_horizontal_lines();
        theme.insert_horizontal_line(1, separator);

        table.with(theme);
        table.modify(Rows::first(), Color::BOLD);
        table.modify(Columns::new(3..6), Alignment::right());

        writeln!(out, "\n{table}")?;
        writeln!(out, " Items: {}", self.item_count)?;
        writeln!(out, " \x1b[1mTotal: {}\x1b[0m", self.total)?;
        writeln!(out)?;

        Ok(())
    }
}
