//! # Input Collection
//!
//! Builds the [`Cart`] handed to the core, either by prompting for every
//! catalog product or by reading a JSON cart file.
//!
//! ## Interactive Session
//! ```text
//! Enter the quantity of Product A: 5
//! Is Product A wrapped as a gift? (yes/no): no
//! Enter the quantity of Product B: lots
//! Invalid quantity: quantity has invalid format: 'lots' is not a whole number
//! Enter the quantity of Product B: 3
//! Is Product B wrapped as a gift? (yes/no): YES
//! ...
//! ```
//!
//! ## Cart File
//! ```json
//! [
//!   { "product": "Product A", "quantity": 5, "gift_wrapped": false },
//!   { "product": "Product B", "quantity": 3, "gift_wrapped": true }
//! ]
//! ```

use std::io::{BufRead, Write};
use std::path::Path;

use tally_core::validation::parse_quantity;
use tally_core::{Cart, Catalog};
use tracing::{debug, warn};

use crate::error::{AppError, AppResult};

/// Prompts for a quantity and gift-wrap choice for each catalog product.
///
/// Invalid quantities are reported and asked again. Gift wrap is only
/// selected by answering `yes` (any case).
pub fn collect_cart<R, W>(catalog: &Catalog, input: &mut R, output: &mut W) -> AppResult<Cart>
where
    R: BufRead,
    W: Write,
{
    let mut cart = Cart::new();

    for product in catalog.iter() {
        let quantity = prompt_quantity(&product.name, input, output)?;

        let answer = prompt_line(
            &format!("Is {} wrapped as a gift? (yes/no): ", product.name),
            &format!("the gift wrap choice for {}", product.name),
            input,
            output,
        )?;
        let gift_wrapped = answer.trim().eq_ignore_ascii_case("yes");

        debug!(product = %product.name, quantity, gift_wrapped, "Cart line collected");
        cart.set_line(product.name.as_str(), quantity, gift_wrapped)?;
    }

    Ok(cart)
}

/// Reads a cart from a JSON file.
///
/// Duplicate products and out-of-range quantities are rejected here;
/// products missing from the catalog are rejected when the order is priced.
pub fn load_cart_file(path: &Path) -> AppResult<Cart> {
    let contents = std::fs::read_to_string(path).map_err(|e| AppError::CartFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let cart: Cart = serde_json::from_str(&contents).map_err(|e| AppError::CartFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(?path, lines = cart.len(), "Cart file loaded");
    Ok(cart)
}

fn prompt_quantity<R, W>(product: &str, input: &mut R, output: &mut W) -> AppResult<i64>
where
    R: BufRead,
    W: Write,
{
    let prompt = format!("Enter the quantity of {}: ", product);
    let waiting_for = format!("the quantity of {}", product);

    loop {
        let line = prompt_line(&prompt, &waiting_for, input, output)?;
        match parse_quantity(&line) {
            Ok(quantity) => return Ok(quantity),
            Err(e) => {
                warn!(product, error = %e, "Rejected quantity");
                writeln!(output, "Invalid quantity: {}", e)?;
            }
        }
    }
}

/// Writes `prompt` and reads one line. End of input is an error.
fn prompt_line<R, W>(
    prompt: &str,
    waiting_for: &str,
    input: &mut R,
    output: &mut W,
) -> AppResult<String>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(AppError::InputClosed(waiting_for.to_string()));
    }
    Ok(line)
}

// =============================================================================
// Unit Tests
// =============================================================================
