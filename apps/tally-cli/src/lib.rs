//! # Tally Checkout CLI
//!
//! Collects a cart, prices it with `tally-core`, and prints the receipt.
//!
//! ## Run Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          tally run                                      │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter, written to stderr             │
//! │     • Default: WARN, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Configuration ───────────────────────────────────────────────► │
//! │     • defaults → tally.toml → TALLY_* environment                       │
//! │                                                                         │
//! │  3. Collect Cart ─────────────────────────────────────────────────────► │
//! │     • --cart <file.json>, or prompts on stdin                           │
//! │                                                                         │
//! │  4. Price ────────────────────────────────────────────────────────────► │
//! │     • tally_core::compute_order (pure, called once)                     │
//! │                                                                         │
//! │  5. Render ───────────────────────────────────────────────────────────► │
//! │     • text receipt, or --json                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod receipt;

use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use tally_core::compute_order;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::TallyConfig;
use error::AppResult;

/// Price a gift-wrap checkout order.
#[derive(Debug, Parser)]
#[command(name = "tally", version)]
pub struct Cli {
    /// Config file (defaults to the platform config dir's tally.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Read the cart from a JSON file instead of prompting
    #[arg(long, value_name = "PATH")]
    pub cart: Option<PathBuf>,

    /// Print the priced order as JSON (amounts in cents)
    #[arg(long)]
    pub json: bool,
}

/// Loads configuration and runs one checkout against stdin / stdout.
pub fn run(cli: &Cli) -> AppResult<()> {
    let config = TallyConfig::load(cli.config.clone())?;
    info!(
        products = config.products.len(),
        gift_wrap_fee = %config.gift_wrap_fee(),
        shipping_fee = %config.shipping_fee_per_package(),
        "Configuration loaded"
    );

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with(cli, &config, &mut stdin.lock(), &mut stdout.lock())
}

/// Runs one checkout with explicit configuration and streams.
pub fn run_with<R, W>(
    cli: &Cli,
    config: &TallyConfig,
    input: &mut R,
    output: &mut W,
) -> AppResult<()>
where
    R: BufRead,
    W: Write,
{
    let catalog = config.catalog()?;

    let cart = match &cli.cart {
        Some(path) => crate::input::load_cart_file(path)?,
        None => crate::input::collect_cart(&catalog, input, output)?,
    };

    let order = compute_order(
        &cart,
        config.gift_wrap_fee(),
        config.shipping_fee_per_package(),
        &catalog,
    )?;

    if cli.json {
        receipt::render_json(output, &order)?;
    } else {
        receipt::render_receipt(output, &order, &cart, &catalog)?;
    }
    output.flush()?;

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show candidate discounts and collected lines
/// - `RUST_LOG=tally_core=debug` - Pricing detail only
/// - Default: WARN, so prompts and receipt stay uncluttered
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
