//! # Receipt Rendering
//!
//! Turns an [`OrderResult`] into the text receipt or JSON document printed
//! at the end of a run.
//!
//! ## Text Layout
//! ```text
//! Order Details:
//! Product A - Quantity: 5, Gift Wrap: No, Total: $100.00
//! Product B - Quantity: 3, Gift Wrap: Yes, Total: $120.00
//! Product C - Quantity: 0, Gift Wrap: No, Total: $0.00
//!
//! Subtotal: $220.00
//! flat_10_discount Applied - Discount Amount: $10.00
//! Discounted Subtotal: $210.00
//! Gift Wrap Fee: $1.00
//! Shipping Fee: $5.00 (1 package)
//! Total: $216.00
//! ```

use std::io::Write;

use tally_core::{Cart, Catalog, OrderResult};

use crate::error::AppResult;

/// Writes the human-readable receipt.
pub fn render_receipt<W: Write>(
    out: &mut W,
    order: &OrderResult,
    cart: &Cart,
    catalog: &Catalog,
) -> AppResult<()> {
    writeln!(out)?;
    writeln!(out, "Order Details:")?;

    for line in cart.iter() {
        let price = catalog.require_price(&line.product)?;
        writeln!(
            out,
            "{} - Quantity: {}, Gift Wrap: {}, Total: {}",
            line.product,
            line.quantity,
            if line.gift_wrapped { "Yes" } else { "No" },
            line.line_total(price)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "Subtotal: {}", order.subtotal)?;
    writeln!(
        out,
        "{} Applied - Discount Amount: {}",
        order.discount_name(),
        order.discount_amount()
    )?;
    writeln!(out, "Discounted Subtotal: {}", order.discounted_subtotal)?;
    writeln!(out, "Gift Wrap Fee: {}", order.gift_wrap_fee)?;
    writeln!(
        out,
        "Shipping Fee: {} ({} {})",
        order.shipping_fee,
        order.packages,
        if order.packages == 1 { "package" } else { "packages" }
    )?;
    writeln!(out, "Total: {}", order.total)?;

    Ok(())
}

/// Writes the order as pretty-printed JSON (amounts in cents).
pub fn render_json<W: Write>(out: &mut W, order: &OrderResult) -> AppResult<()> {
    serde_json::to_writer_pretty(&mut *out, order)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tally_core::{compute_order, Money, Product};

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Product::new("Product A", Money::from_dollars(20)),
            Product::new("Product B", Money::from_dollars(40)),
            Product::new("Product C", Money::from_dollars(50)),
        ])
        .unwrap()
    }

    fn scenario_a() -> (Cart, OrderResult) {
        let mut cart = Cart::new();
        cart.set_line("Product A", 5, false).unwrap();
        cart.set_line("Product B", 3, true).unwrap();
        cart.set_line("Product C", 0, false).unwrap();
        let order = compute_order(
            &cart,
            Money::from_dollars(1),
            Money::from_dollars(5),
            &catalog(),
        )
        .unwrap();
        (cart, order)
    }

    #[test]
    fn test_text_receipt() {
        let (cart, order) = scenario_a();
        let mut out = Vec::new();
        render_receipt(&mut out, &order, &cart, &catalog()).unwrap();

        let expected = "\nOrder Details:\n\
            Product A - Quantity: 5, Gift Wrap: No, Total: $100.00\n\
            Product B - Quantity: 3, Gift Wrap: Yes, Total: $120.00\n\
            Product C - Quantity: 0, Gift Wrap: No, Total: $0.00\n\
            \n\
            Subtotal: $220.00\n\
            flat_10_discount Applied - Discount Amount: $10.00\n\
            Discounted Subtotal: $210.00\n\
            Gift Wrap Fee: $1.00\n\
            Shipping Fee: $5.00 (1 package)\n\
            Total: $216.00\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_plural_packages() {
        let mut cart = Cart::new();
        cart.set_line("Product A", 25, false).unwrap();
        let order = compute_order(
            &cart,
            Money::from_dollars(1),
            Money::from_dollars(5),
            &catalog(),
        )
        .unwrap();

        let mut out = Vec::new();
        render_receipt(&mut out, &order, &cart, &catalog()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("tiered_50_discount Applied - Discount Amount: $100.00\n"));
        assert!(text.contains("Shipping Fee: $15.00 (3 packages)\n"));
        assert!(text.ends_with("Total: $415.00\n"));
    }

    #[test]
    fn test_json_output() {
        let (_, order) = scenario_a();
        let mut out = Vec::new();
        render_json(&mut out, &order).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["discount"]["rule"], "flat_10_discount");
        assert_eq!(value["total"], 21600);
        assert_eq!(value["wrapped_lines"], 1);
    }
}
