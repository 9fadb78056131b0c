//! Cart Example
//!
//! This example replays a scripted cart session from a fixture set and prints
//! the resulting order summary.
//!
//! Use `-f` to load a fixture set by name
//! Use `-n` to specify the number of scripted actions to replay
//! Use `--order` to also print the order request checkout would send
//!
//! Run with: `cargo run --example cart -- -f gallery`

use std::{io, time::Instant};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use atelier::{
    checkout::OrderRequest, fixtures::Fixture, store::CartStore, summary::CartSummary,
    utils::ExampleCartArgs,
};

/// Cart Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(true)
        .init();

    let args = ExampleCartArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let mut store = CartStore::new(fixture.currency()?);

    let start = Instant::now();

    fixture.replay(&mut store, args.n)?;

    let elapsed = start.elapsed().as_secs_f32();

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    CartSummary::try_from(store.state())?.write_to(&mut handle)?;

    if args.order && !store.state().is_empty() {
        let request = OrderRequest::try_from(store.state())?;

        println!("{}", serde_json::to_string_pretty(&request)?);
    }

    println!(
        "Drawer: {}",
        if store.state().is_open() { "open" } else { "closed" }
    );
    println!("\nReplayed in {elapsed}s");

    Ok(())
}
