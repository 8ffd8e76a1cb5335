//! # View
//!
//! Writes responses to the session output, either as plain text lines or as
//! one JSON object per response.

use std::io::Write;

use crate::commands::{CartResponse, CatalogResponse, Response};
use crate::error::ApiError;
use crate::state::{ConfigState, OutputFormat};

/// Writes `response` in the configured format.
pub fn write_response<W: Write>(
    out: &mut W,
    config: &ConfigState,
    response: &Response,
) -> Result<(), ApiError> {
    match config.output {
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, response)?;
            writeln!(out)?;
        }
        OutputFormat::Text => match response {
            Response::Catalog(catalog) => write_catalog(out, config, catalog)?,
            Response::Cart(cart) => write_cart(out, config, cart)?,
            Response::Help { commands } => {
                writeln!(out, "Commands")?;
                for line in commands {
                    writeln!(out, "  {}", line)?;
                }
            }
            Response::Error(err) => writeln!(out, "error {}", err)?,
        },
    }

    out.flush()?;
    Ok(())
}

fn write_catalog<W: Write>(
    out: &mut W,
    config: &ConfigState,
    catalog: &CatalogResponse,
) -> std::io::Result<()> {
    writeln!(out, "Products")?;
    for product in &catalog.products {
        writeln!(
            out,
            "  [{}] {}  {}",
            product.id,
            product.name,
            config.format_currency(product.price)
        )?;
    }
    Ok(())
}

fn write_cart<W: Write>(
    out: &mut W,
    config: &ConfigState,
    cart: &CartResponse,
) -> std::io::Result<()> {
    writeln!(out, "Cart")?;

    if cart.items.is_empty() {
        return writeln!(out, "  The cart is empty.");
    }

    for item in &cart.items {
        writeln!(
            out,
            "  [{}] {}  x{}  {}",
            item.id,
            item.name,
            item.quantity,
            config.format_currency(item.line_total())
        )?;
    }
    writeln!(out, "Items: {}", cart.totals.total_items)?;
    writeln!(out, "Total: {}", config.format_currency(cart.totals.total_price))
}
